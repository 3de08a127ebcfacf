use super::{open_store, read_line, rerender_all};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::rename::{RenameLogic, RenameOutcome};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::ui::state::LabelEdit;

/// Rename a group. With no label argument an edit session opens, pre-seeded
/// with the current label; entering a value commits it, an empty line or
/// EOF cancels and the persisted label stays in effect.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rename { id, label } = cmd {
        let store = open_store(cfg);

        let raw = match label {
            Some(raw) => raw.clone(),
            None => {
                let doc = store.read()?;
                let Some(group) = doc.group(*id) else {
                    messages::warning(format!("No group with id {}", id));
                    return Ok(());
                };

                let session = LabelEdit::begin(&group.label);
                print!("New label [{}]: ", group.label);
                use std::io::Write;
                let _ = std::io::stdout().flush();

                match read_line() {
                    Some(input) if !input.trim().is_empty() => {
                        match session.type_draft(&input).commit() {
                            Some(committed) => committed,
                            None => {
                                println!("Label unchanged.");
                                return Ok(());
                            }
                        }
                    }
                    // Cancel: discard the draft, keep the persisted label.
                    _ => {
                        let _ = session.cancel();
                        println!("Label unchanged.");
                        return Ok(());
                    }
                }
            }
        };

        match RenameLogic::apply(&store, cfg.max_label_length, *id, &raw) {
            Ok(RenameOutcome::Renamed(group)) => {
                messages::success(format!("Renamed group {} to '{}'", group.id, group.label));
                rerender_all(&store)?;
            }
            Ok(RenameOutcome::Retained(group)) => {
                messages::warning(format!(
                    "New label is empty, keeping '{}' for group {}",
                    group.label, group.id
                ));
            }
            Err(AppError::GroupNotFound(id)) => {
                messages::warning(format!("No group with id {}", id));
            }
            Err(e @ AppError::LabelTooLong { .. }) => {
                messages::warning(e);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
