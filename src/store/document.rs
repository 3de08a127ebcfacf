use crate::models::group::Group;
use crate::store::log::LogEntry;
use serde::{Deserialize, Serialize};

/// The full persisted document. Every write replaces it wholesale; the
/// `revision` stamp is the compare-and-swap key that rejects stale writes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub revision: u64,
    pub username: Option<String>,
    pub next_group_id: u32,
    pub next_color: usize,
    pub tally_groups: Vec<Group>,
    pub log: Vec<LogEntry>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            revision: 0,
            username: None,
            next_group_id: 1,
            next_color: 0,
            tally_groups: Vec::new(),
            log: Vec::new(),
        }
    }
}

impl Document {
    /// Resolve a stable group id to its current position in the list.
    /// Positions shift on deletion, so this is only valid until the next
    /// mutation of `tally_groups`.
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.tally_groups.iter().position(|g| g.id == id)
    }

    pub fn group(&self, id: u32) -> Option<&Group> {
        self.position_of(id).map(|i| &self.tally_groups[i])
    }
}
