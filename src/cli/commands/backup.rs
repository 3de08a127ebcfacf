use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

/// Create a backup copy of the store document.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let store = open_store(cfg);
        BackupLogic::backup(&store, file, *compress)?;
    }
    Ok(())
}
