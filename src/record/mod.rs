//! Record Module
//!
//! The three fixed-shape row types and the tagged record that carries any
//! one of them across table-agnostic APIs.
//!
//! ## Responsibilities
//! - Enumerate the valid table keys
//! - Map positional text fields onto a row type
//! - Provide the zero-value placeholder for each table
//!
//! Fields are raw text: nothing is parsed as a number or a time here.

mod key;
mod rows;

pub use key::{IntoTableKey, TableKey};
pub use rows::{Airport, Flight, Price};

use std::fmt;

use crate::error::Result;

/// A concrete row type stored by exactly one table
pub trait Row: Clone + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Table holding rows of this type
    const KEY: TableKey;

    /// Number of fields a source line must provide
    const FIELD_COUNT: usize;

    /// Build a row from positional fields; surplus fields are ignored
    fn from_fields(fields: &[&str]) -> Result<Self>;

    /// Field values in schema order
    fn fields(&self) -> Vec<&str>;

    fn into_record(self) -> Record;

    /// Unwrap a record, failing with `TypeMismatch` for another variant
    fn from_record(record: Record) -> Result<Self>;
}

/// A row of any table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Flight(Flight),
    Airport(Airport),
    Price(Price),
}

impl Record {
    /// Key of the table this record belongs to
    pub fn key(&self) -> TableKey {
        match self {
            Record::Flight(_) => TableKey::Flight,
            Record::Airport(_) => TableKey::Airport,
            Record::Price(_) => TableKey::Price,
        }
    }

    /// Zero-value placeholder for a table: every field empty
    pub fn zero(key: TableKey) -> Self {
        match key {
            TableKey::Flight => Record::Flight(Flight::default()),
            TableKey::Airport => Record::Airport(Airport::default()),
            TableKey::Price => Record::Price(Price::default()),
        }
    }

    /// True for a placeholder record
    pub fn is_zero(&self) -> bool {
        *self == Record::zero(self.key())
    }

    /// Field values in schema order
    pub fn fields(&self) -> Vec<&str> {
        match self {
            Record::Flight(flight) => flight.fields(),
            Record::Airport(airport) => airport.fields(),
            Record::Price(price) => price.fields(),
        }
    }
}

impl From<Flight> for Record {
    fn from(flight: Flight) -> Self {
        Record::Flight(flight)
    }
}

impl From<Airport> for Record {
    fn from(airport: Airport) -> Self {
        Record::Airport(airport)
    }
}

impl From<Price> for Record {
    fn from(price: Price) -> Self {
        Record::Price(price)
    }
}
