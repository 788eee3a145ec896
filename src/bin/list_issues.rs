use std::process::ExitCode;

use issue_mailer::commands::{self, list::ListArgs};
use issue_mailer::shared::{env_var::EnvVars, logging};

fn main() -> ExitCode {
    let args: ListArgs = match commands::parse_args() {
        Ok(args) => args,
        Err(code) => return code,
    };
    let env = EnvVars::load();
    logging::init(env.log_filter.as_deref());

    match commands::list::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
