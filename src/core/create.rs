use crate::errors::{AppError, AppResult};
use crate::models::group::Group;
use crate::models::palette::Palette;
use crate::store::{Store, log};
use crate::utils::text::normalize_label;

pub struct CreateLogic;

impl CreateLogic {
    /// Append a new group with a fresh id, zero count and a palette color.
    /// The color comes from an explicit override when given, otherwise from
    /// the palette's selection strategy (the sequential cursor is part of
    /// the document, so cycling survives across invocations).
    pub fn apply(
        store: &Store,
        palette: &Palette,
        max_label_length: usize,
        raw_label: &str,
        color_override: Option<&str>,
    ) -> AppResult<Group> {
        let label = normalize_label(raw_label, max_label_length)?;

        let override_hex = match color_override {
            Some(token) => Some(
                palette
                    .resolve(token)
                    .ok_or_else(|| AppError::UnknownColor(token.to_string()))?
                    .hex
                    .clone(),
            ),
            None => None,
        };

        let (_doc, group) = store.update(|doc| {
            let hex = match &override_hex {
                Some(h) => h.clone(),
                None => {
                    let (color, next) = palette.pick(doc.next_color);
                    doc.next_color = next;
                    color.hex.clone()
                }
            };
            let id = doc.next_group_id;
            doc.next_group_id += 1;

            let group = Group::new(id, label.clone(), hex);
            doc.tally_groups.push(group.clone());
            log::record(
                doc,
                "add",
                &label,
                &format!("Created group id={} color={}", id, group.color),
            );
            Ok(group)
        })?;
        Ok(group)
    }
}
