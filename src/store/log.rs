//! Operation log kept inside the store document.
//! Every mutating command appends one entry; `rtally log --print` renders it.

use crate::store::document::Document;
use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub id: u32,
    pub date: String, // RFC 3339, local offset
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append a log row. Non-fatal by design: callers ignore nothing here
/// because this never fails, it only grows the in-memory document.
pub fn record(doc: &mut Document, operation: &str, target: &str, message: &str) {
    let id = doc.log.last().map(|e| e.id + 1).unwrap_or(1);
    doc.log.push(LogEntry {
        id,
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    });
}
