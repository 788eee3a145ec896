//! Entry points behind the two binaries.

pub mod list;
pub mod send;

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

/// Parse command-line arguments.
///
/// `--help` and `--version` exit 0 as usual; every other parse error prints
/// the usage and yields exit code 1.
pub fn parse_args<T: Parser>() -> Result<T, ExitCode> {
    parse_args_from(std::env::args_os())
}

pub fn parse_args_from<T, I, A>(args: I) -> Result<T, ExitCode>
where
    T: Parser,
    I: IntoIterator<Item = A>,
    A: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(parsed) => Ok(parsed),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            Err(ExitCode::FAILURE)
        }
    }
}
