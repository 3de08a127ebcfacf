use crate::errors::{AppError, AppResult};
use crate::models::group::Group;
use crate::store::{Store, log};

pub struct TallyLogic;

impl TallyLogic {
    /// Append one timestamped tally to the group with the given id.
    /// The id is resolved to a position only inside the mutation, against
    /// the freshly read list.
    pub fn apply(store: &Store, id: u32) -> AppResult<Group> {
        let (_doc, group) = store.update(|doc| {
            let pos = doc.position_of(id).ok_or(AppError::GroupNotFound(id))?;
            doc.tally_groups[pos].add_tally();
            let group = doc.tally_groups[pos].clone();
            log::record(
                doc,
                "tally",
                &group.label,
                &format!("count={}", group.count),
            );
            Ok(group)
        })?;
        Ok(group)
    }
}
