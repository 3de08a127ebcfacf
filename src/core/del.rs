use crate::errors::{AppError, AppResult};
use crate::models::group::Group;
use crate::store::{Store, log};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the group with the given id; later groups keep their relative
    /// order (positions shift down by one, ids never change).
    pub fn apply(store: &Store, id: u32) -> AppResult<Group> {
        let (_doc, removed) = store.update(|doc| {
            let pos = doc.position_of(id).ok_or(AppError::GroupNotFound(id))?;
            let removed = doc.tally_groups.remove(pos);
            log::record(
                doc,
                "del",
                &removed.label,
                &format!("Deleted group id={} with {} tallies", id, removed.count),
            );
            Ok(removed)
        })?;
        Ok(removed)
    }
}
