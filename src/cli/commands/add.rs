use super::{open_store, rerender_all};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::create::CreateLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Create a new tally group.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { label, color } = cmd {
        let store = open_store(cfg);
        let palette = cfg.palette();

        match CreateLogic::apply(
            &store,
            &palette,
            cfg.max_label_length,
            label,
            color.as_deref(),
        ) {
            Ok(group) => {
                messages::success(format!("Created group '{}' (id {})", group.label, group.id));
                rerender_all(&store)?;
            }
            // Empty label: a no-op by contract, not a failure.
            Err(AppError::EmptyLabel) => {
                messages::warning("Label is empty, nothing created");
            }
            Err(e @ AppError::LabelTooLong { .. }) | Err(e @ AppError::UnknownColor(_)) => {
                messages::warning(e);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
