//! Injected persistence boundary for named matrices.
//!
//! The engine never touches a concrete storage medium; collaborators hand it
//! an implementation of [`MatrixStore`] and exchange matrices through the
//! [`MatrixRecord`] serialization contract. [`MemoryStore`] is the reference
//! implementation and the one the test suite runs against.

use crate::error::{MatrizError, Result};
use crate::primitives::MatrixRecord;
use std::collections::BTreeMap;

/// Name-keyed persistence for matrix records.
///
/// `save` overwrites silently; `rename` refuses to clobber an existing
/// entry. Names must contain at least one non-whitespace character.
pub trait MatrixStore {
    /// Stores a record under `name`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidName`] for blank names.
    fn save(&mut self, name: &str, record: &MatrixRecord) -> Result<()>;

    /// Fetches the record stored under `name`, if any.
    fn load(&self, name: &str) -> Option<MatrixRecord>;

    /// Lists all stored names in lexicographic order.
    fn list(&self) -> Vec<String>;

    /// Removes the entry under `name`. Returns whether anything was removed.
    fn remove(&mut self, name: &str) -> bool;

    /// Moves the entry at `old` to `new`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidName`] for a blank target name,
    /// [`MatrizError::NameTaken`] if `new` is already bound to a different
    /// entry, and [`MatrizError::NotFound`] if `old` is absent.
    fn rename(&mut self, old: &str, new: &str) -> Result<()>;
}

/// In-memory [`MatrixStore`] backed by an ordered map.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, MatrixRecord>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(MatrizError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

impl MatrixStore for MemoryStore {
    fn save(&mut self, name: &str, record: &MatrixRecord) -> Result<()> {
        check_name(name)?;
        self.entries.insert(name.to_string(), record.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Option<MatrixRecord> {
        self.entries.get(name).cloned()
    }

    fn list(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        check_name(new)?;
        if old == new {
            return Ok(());
        }
        if self.entries.contains_key(new) {
            return Err(MatrizError::NameTaken {
                name: new.to_string(),
            });
        }
        match self.entries.remove(old) {
            Some(record) => {
                self.entries.insert(new.to_string(), record);
                Ok(())
            }
            None => Err(MatrizError::NotFound {
                name: old.to_string(),
            }),
        }
    }
}
