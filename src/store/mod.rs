//! JSON document store (lightweight wrapper for CLI usage).
//!
//! Read-modify-write is guarded by a revision stamp: `commit` refuses to
//! overwrite a document whose on-disk revision moved past the one the caller
//! read, and `update` retries the whole mutation on a fresh read. Two
//! interleaved invocations therefore cannot silently drop each other's
//! changes.

pub mod document;
pub mod log;

use crate::errors::{AppError, AppResult};
use document::Document;
use std::fs;
use std::path::{Path, PathBuf};

const MAX_COMMIT_RETRIES: usize = 3;

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fetch the persisted document, defaulting every missing value
    /// (absent file included) instead of raising an error.
    pub fn read(&self) -> AppResult<Document> {
        if !self.path.exists() {
            return Ok(Document::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Document::default());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write(&self, doc: &Document) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Compare-and-swap write: persists `doc` only if the on-disk revision
    /// still equals `base`, bumping the revision by one.
    pub fn commit(&self, mut doc: Document, base: u64) -> AppResult<Document> {
        let on_disk = self.read()?;
        if on_disk.revision != base {
            return Err(AppError::StaleWrite {
                base,
                found: on_disk.revision,
            });
        }
        doc.revision = base + 1;
        self.write(&doc)?;
        Ok(doc)
    }

    /// Load fresh, apply one mutation, commit; retried on a stale write so a
    /// concurrent invocation costs a re-read, never a lost update.
    pub fn update<T>(
        &self,
        mut apply: impl FnMut(&mut Document) -> AppResult<T>,
    ) -> AppResult<(Document, T)> {
        let mut last = AppError::Other("store update never attempted".to_string());
        for _ in 0..MAX_COMMIT_RETRIES {
            let mut doc = self.read()?;
            let base = doc.revision;
            let out = apply(&mut doc)?;
            match self.commit(doc, base) {
                Ok(doc) => return Ok((doc, out)),
                Err(e @ AppError::StaleWrite { .. }) => last = e,
                Err(e) => return Err(e),
            }
        }
        Err(last)
    }
}
