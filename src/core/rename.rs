use crate::errors::{AppError, AppResult};
use crate::models::group::Group;
use crate::store::{Store, log};
use crate::utils::text::normalize_label;

/// What a relabel attempt did.
#[derive(Debug, Clone, PartialEq)]
pub enum RenameOutcome {
    /// The trimmed label was valid and is now persisted.
    Renamed(Group),
    /// The new label trimmed to empty; the prior label was retained and
    /// nothing was written to the store.
    Retained(Group),
}

pub struct RenameLogic;

impl RenameLogic {
    pub fn apply(
        store: &Store,
        max_label_length: usize,
        id: u32,
        raw_label: &str,
    ) -> AppResult<RenameOutcome> {
        let label = match normalize_label(raw_label, max_label_length) {
            Ok(label) => label,
            Err(AppError::EmptyLabel) => {
                // Whitespace-only edit: reject without persisting anything.
                let doc = store.read()?;
                let group = doc.group(id).cloned().ok_or(AppError::GroupNotFound(id))?;
                return Ok(RenameOutcome::Retained(group));
            }
            Err(e) => return Err(e),
        };

        let (_doc, group) = store.update(|doc| {
            let pos = doc.position_of(id).ok_or(AppError::GroupNotFound(id))?;
            let old = doc.tally_groups[pos].label.clone();
            doc.tally_groups[pos].label = label.clone();
            let group = doc.tally_groups[pos].clone();
            log::record(
                doc,
                "rename",
                &label,
                &format!("Renamed '{}' to '{}'", old, label),
            );
            Ok(group)
        })?;
        Ok(RenameOutcome::Renamed(group))
    }
}
