//! The person-records store seam.
//!
//! The pipeline only ever performs independent, one-at-a-time inserts;
//! whatever constraint logic the destination enforces surfaces back as a
//! per-row [`StoreError`]. There is deliberately no dedup or upsert here —
//! re-importing a file can create duplicates, and operators are expected
//! to re-submit corrected rows only.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use kerigma_model::PersonRecord;

use crate::error::StoreError;

/// Destination for validated person records.
pub trait PersonStore {
    /// Inserts one record.
    ///
    /// # Errors
    ///
    /// Returns the store's own rejection reason; the import loop records
    /// it against the offending row and moves on.
    fn insert(&mut self, person: &PersonRecord) -> Result<(), StoreError>;
}

/// In-memory store backing dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<PersonRecord>,
    unique_emails: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the unique-email constraint the production schema carries.
    #[must_use]
    pub fn with_unique_emails(mut self) -> Self {
        self.unique_emails = true;
        self
    }

    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PersonStore for MemoryStore {
    fn insert(&mut self, person: &PersonRecord) -> Result<(), StoreError> {
        if self.unique_emails
            && self
                .records
                .iter()
                .any(|existing| existing.email == person.email)
        {
            return Err(StoreError::DuplicateEmail {
                email: person.email.clone(),
            });
        }
        self.records.push(person.clone());
        Ok(())
    }
}

/// Append-only JSON Lines store: one serialized record per line.
#[derive(Debug)]
pub struct JsonlStore {
    path: PathBuf,
    writer: BufWriter<File>,
    written: usize,
}

impl JsonlStore {
    /// Opens (or creates) the file at `path` for appending.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| StoreError::Io { source })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records appended by this handle.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes buffered lines to disk.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        self.writer
            .flush()
            .map_err(|source| StoreError::Io { source })
    }
}

impl PersonStore for JsonlStore {
    fn insert(&mut self, person: &PersonRecord) -> Result<(), StoreError> {
        let line =
            serde_json::to_string(person).map_err(|source| StoreError::Serialize { source })?;
        writeln!(self.writer, "{line}").map_err(|source| StoreError::Io { source })?;
        self.written += 1;
        Ok(())
    }
}
