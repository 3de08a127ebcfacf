use crate::errors::{AppError, AppResult};
use crate::models::group::Group;
use crate::models::palette::Palette;
use crate::store::{Store, log};

pub struct RecolorLogic;

impl RecolorLogic {
    /// Set a group's color to a palette entry, addressed by name or hex.
    pub fn apply(store: &Store, palette: &Palette, id: u32, token: &str) -> AppResult<Group> {
        let hex = palette
            .resolve(token)
            .ok_or_else(|| AppError::UnknownColor(token.to_string()))?
            .hex
            .clone();

        let (_doc, group) = store.update(|doc| {
            let pos = doc.position_of(id).ok_or(AppError::GroupNotFound(id))?;
            doc.tally_groups[pos].color = hex.clone();
            let group = doc.tally_groups[pos].clone();
            log::record(doc, "color", &group.label, &format!("color={}", hex));
            Ok(group)
        })?;
        Ok(group)
    }
}
