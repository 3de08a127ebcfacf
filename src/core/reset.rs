use crate::errors::{AppError, AppResult};
use crate::models::group::Group;
use crate::store::{Store, log};

pub struct ResetLogic;

impl ResetLogic {
    /// Clear the tallies of one group; every other group is untouched.
    pub fn apply(store: &Store, id: u32) -> AppResult<Group> {
        let (_doc, group) = store.update(|doc| {
            let pos = doc.position_of(id).ok_or(AppError::GroupNotFound(id))?;
            let previous = doc.tally_groups[pos].count;
            doc.tally_groups[pos].reset();
            let group = doc.tally_groups[pos].clone();
            log::record(
                doc,
                "reset",
                &group.label,
                &format!("Cleared {} tallies", previous),
            );
            Ok(group)
        })?;
        Ok(group)
    }
}
