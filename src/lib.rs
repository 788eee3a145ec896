pub mod commands;
pub mod github;
pub mod notify;
pub mod shared;
pub mod test_results;
#[cfg(test)]
pub mod testing;
