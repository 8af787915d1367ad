//! Database Module
//!
//! Owns one TableStore per table key and dispatches by key.
//!
//! ## Responsibilities
//! - Construct every table empty with the same capacity
//! - Reject unknown keys before touching any table
//! - Reject records whose variant does not belong to the addressed table

use parking_lot::RwLock;

use crate::error::{FlyDbError, Result};
use crate::record::{Airport, Flight, IntoTableKey, Price, Record, Row, TableKey};
use crate::table::TableStore;

/// In-memory multi-table database
///
/// ## Concurrency:
/// - Each table sits behind its own RwLock (many concurrent readers,
///   exclusive writer), so an `Arc<Database>` can serve range reads from
///   several threads once loading is done
/// - All methods use `&self`
pub struct Database {
    /// Capacity given to every table at construction
    capacity: usize,

    flights: RwLock<TableStore<Flight>>,
    airports: RwLock<TableStore<Airport>>,
    prices: RwLock<TableStore<Price>>,
}

impl Database {
    /// Create a database whose tables are all empty and bounded by
    /// `capacity_per_table` rows
    pub fn new(capacity_per_table: usize) -> Self {
        Self {
            capacity: capacity_per_table,
            flights: RwLock::new(TableStore::new(capacity_per_table)),
            airports: RwLock::new(TableStore::new(capacity_per_table)),
            prices: RwLock::new(TableStore::new(capacity_per_table)),
        }
    }

    /// Append a record to the table named by `key`
    ///
    /// Returns the row index assigned to the record.
    ///
    /// Errors (no table is modified):
    /// - `UnknownKey` for a raw key outside the valid range
    /// - `TypeMismatch` when the record belongs to another table
    /// - `CapacityExceeded` when the table is full
    pub fn append_row(&self, key: impl IntoTableKey, record: Record) -> Result<usize> {
        let key = key.into_table_key()?;

        if record.key() != key {
            return Err(FlyDbError::TypeMismatch {
                expected: key,
                found: record.key(),
            });
        }

        match record {
            Record::Flight(flight) => self.flights.write().append(flight),
            Record::Airport(airport) => self.airports.write().append(airport),
            Record::Price(price) => self.prices.write().append(price),
        }
    }

    /// Get a copy of the record at `index` in the table named by `key`
    ///
    /// Errors:
    /// - `UnknownKey` for a raw key outside the valid range
    /// - `IndexOutOfRange` when `index` is not occupied
    pub fn get_row(&self, key: impl IntoTableKey, index: usize) -> Result<Record> {
        match key.into_table_key()? {
            TableKey::Flight => read_row(&self.flights, index),
            TableKey::Airport => read_row(&self.airports, index),
            TableKey::Price => read_row(&self.prices, index),
        }
    }

    /// Occupied count of one table
    pub fn row_count(&self, key: impl IntoTableKey) -> Result<usize> {
        Ok(match key.into_table_key()? {
            TableKey::Flight => self.flights.read().len(),
            TableKey::Airport => self.airports.read().len(),
            TableKey::Price => self.prices.read().len(),
        })
    }

    /// True once the table can take no more rows
    pub fn is_full(&self, key: impl IntoTableKey) -> Result<bool> {
        Ok(match key.into_table_key()? {
            TableKey::Flight => self.flights.read().is_full(),
            TableKey::Airport => self.airports.read().is_full(),
            TableKey::Price => self.prices.read().is_full(),
        })
    }

    /// Per-table capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

fn read_row<R: Row>(table: &RwLock<TableStore<R>>, index: usize) -> Result<Record> {
    table.read().get(index).map(|row| row.clone().into_record())
}
