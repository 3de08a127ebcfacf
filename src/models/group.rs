use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A named tally counter as stored in the document.
///
/// `count` always equals `tallies.len()` after every mutation that touches
/// the tallies; legacy records persisted before tallies existed may carry a
/// bare count with an empty tallies list, which is kept as-is for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    pub id: u32,        // ⇔ stable id, assigned once at creation
    pub label: String,  // ⇔ trimmed, non-empty display string
    pub count: usize,   // ⇔ tallies.len()
    pub color: String,  // ⇔ palette hex token, e.g. "#1e90ff"
    #[serde(default)]
    pub tallies: Vec<String>, // ⇔ RFC 3339 UTC stamps, one per increment
}

impl Group {
    pub fn new(id: u32, label: String, color: String) -> Self {
        Self {
            id,
            label,
            count: 0,
            color,
            tallies: Vec::new(),
        }
    }

    /// Append one tally stamped with the current UTC time.
    pub fn add_tally(&mut self) {
        self.tallies.push(now_stamp());
        self.count = self.tallies.len();
    }

    /// Clear all tallies; the group itself survives.
    pub fn reset(&mut self) {
        self.tallies.clear();
        self.count = 0;
    }
}

/// Current UTC time as an RFC 3339 string with a trailing `Z`.
/// This format sorts lexicographically in wall-clock order.
pub fn now_stamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
