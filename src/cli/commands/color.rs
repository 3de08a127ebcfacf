use super::{open_store, read_line, rerender_all};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recolor::RecolorLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::state::PickerState;
use crate::ui::{messages, view};

/// Change a group's color. With no color argument the picker panel becomes
/// visible and a palette entry is chosen interactively; any selection
/// applies immediately and the panel returns to hidden via the full
/// re-render.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Color { id, color } = cmd {
        let store = open_store(cfg);
        let palette = cfg.palette();

        let token = match color {
            Some(token) => token.clone(),
            None => {
                let picker = PickerState::default().toggle();
                debug_assert_eq!(picker, PickerState::Visible);
                view::print_palette(&palette.colors);
                print!("Pick a color (1-{} or name): ", palette.colors.len());
                use std::io::Write;
                let _ = std::io::stdout().flush();

                let Some(answer) = read_line().filter(|s| !s.trim().is_empty()) else {
                    println!("Aborted. Color unchanged.");
                    return Ok(());
                };
                // Numeric answers address palette positions, anything else
                // is resolved as a name/hex token.
                match answer.trim().parse::<usize>() {
                    Ok(n) if (1..=palette.colors.len()).contains(&n) => {
                        palette.colors[n - 1].name.clone()
                    }
                    _ => answer.trim().to_string(),
                }
            }
        };

        match RecolorLogic::apply(&store, &palette, *id, &token) {
            Ok(group) => {
                messages::success(format!(
                    "Color {} set for group '{}'",
                    group.color, group.label
                ));
                rerender_all(&store)?;
            }
            Err(AppError::GroupNotFound(id)) => {
                messages::warning(format!("No group with id {}", id));
            }
            Err(e @ AppError::UnknownColor(_)) => {
                messages::warning(e);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
