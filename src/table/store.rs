//! TableStore implementation
//!
//! Vec-backed store with a hard capacity bound.

use crate::error::{FlyDbError, Result};
use crate::record::Row;

/// Append-only table of one row type
///
/// Invariant: `len() <= capacity()` at all times.
#[derive(Debug, Clone)]
pub struct TableStore<R: Row> {
    /// Rows in append order
    rows: Vec<R>,

    /// Maximum number of rows, fixed at construction
    capacity: usize,
}

impl<R: Row> TableStore<R> {
    /// Create an empty store that will hold at most `capacity` rows
    pub fn new(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a row at the next free index
    ///
    /// Returns the index assigned to the row, or `CapacityExceeded` when the
    /// store is full (the store is left unchanged).
    pub fn append(&mut self, row: R) -> Result<usize> {
        if self.is_full() {
            return Err(FlyDbError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.rows.push(row);
        Ok(self.rows.len() - 1)
    }

    /// Get the row at `index`, or `IndexOutOfRange` past the occupied count
    pub fn get(&self, index: usize) -> Result<&R> {
        self.rows.get(index).ok_or(FlyDbError::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    /// Occupied count
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True once no further append can succeed
    pub fn is_full(&self) -> bool {
        self.rows.len() >= self.capacity
    }

    /// Iterate over rows in index order
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }
}

impl<'a, R: Row> IntoIterator for &'a TableStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
