use super::{confirm, open_store, rerender_all};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Delete a group and its tallies after confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let store = open_store(cfg);

        let doc = store.read()?;
        let Some(group) = doc.group(*id) else {
            messages::warning(format!("No group with id {}", id));
            return Ok(());
        };

        if !confirm(&format!(
            "Are you sure to delete '{}' ({} tallies)",
            group.label, group.count
        )) {
            println!("Aborted. Nothing deleted.");
            return Ok(());
        }

        match DeleteLogic::apply(&store, *id) {
            Ok(removed) => {
                println!("🗑️  Deleted group '{}'", removed.label);
                rerender_all(&store)?;
            }
            Err(AppError::GroupNotFound(id)) => {
                messages::warning(format!("No group with id {}", id));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
