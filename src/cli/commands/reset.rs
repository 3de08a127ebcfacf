use super::{confirm, open_store, rerender_all};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Clear a group's tallies after confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { id } = cmd {
        let store = open_store(cfg);

        let doc = store.read()?;
        let Some(group) = doc.group(*id) else {
            messages::warning(format!("No group with id {}", id));
            return Ok(());
        };

        if !confirm(&format!(
            "Are you sure to reset '{}' ({} tallies)",
            group.label, group.count
        )) {
            println!("Aborted. Nothing reset.");
            return Ok(());
        }

        match ResetLogic::apply(&store, *id) {
            Ok(group) => {
                messages::success(format!("Reset group '{}'", group.label));
                rerender_all(&store)?;
            }
            // The group can vanish between the read and the mutation.
            Err(AppError::GroupNotFound(id)) => {
                messages::warning(format!("No group with id {}", id));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
