use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

/// Print the operation log kept in the store document.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let store = open_store(cfg);
        LogLogic::print_log(&store)?;
    }
    Ok(())
}
