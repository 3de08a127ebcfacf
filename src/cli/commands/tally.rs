use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tally::TallyLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::{messages, view};
use crate::utils::text::display_width;

/// Add one tally to a group. Re-renders only the touched group, with the
/// newest mark highlighted, instead of the whole list.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tally { id } = cmd {
        let store = open_store(cfg);
        match TallyLogic::apply(&store, *id) {
            Ok(group) => {
                println!();
                view::print_group(&group, display_width(&group.label), true);
            }
            Err(AppError::GroupNotFound(id)) => {
                messages::warning(format!("No group with id {}", id));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
