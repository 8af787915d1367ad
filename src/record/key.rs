//! Table keys
//!
//! Identifies one of the fixed table schemas. Raw integer keys coming from
//! callers are validated here so an invalid key never reaches a store.

use std::fmt;

use crate::error::{FlyDbError, Result};

/// Identifier of one table (and of its record variant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(usize)]
pub enum TableKey {
    Flight = 0,
    Airport = 1,
    Price = 2,
}

impl TableKey {
    /// Number of valid keys; any raw key `>= COUNT` is unknown
    pub const COUNT: usize = 3;

    /// All keys in load order
    pub const ALL: [TableKey; TableKey::COUNT] =
        [TableKey::Flight, TableKey::Airport, TableKey::Price];

    /// Position of this key in per-table arrays
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case table name
    pub fn name(self) -> &'static str {
        match self {
            TableKey::Flight => "flights",
            TableKey::Airport => "airports",
            TableKey::Price => "prices",
        }
    }
}

impl fmt::Display for TableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<usize> for TableKey {
    type Error = FlyDbError;

    fn try_from(raw: usize) -> Result<Self> {
        match raw {
            0 => Ok(TableKey::Flight),
            1 => Ok(TableKey::Airport),
            2 => Ok(TableKey::Price),
            _ => Err(FlyDbError::UnknownKey(raw)),
        }
    }
}

/// Anything an operation accepts as a table key
///
/// Typed keys convert infallibly; raw `usize` keys fail with `UnknownKey`
/// when out of range.
pub trait IntoTableKey {
    fn into_table_key(self) -> Result<TableKey>;
}

impl IntoTableKey for TableKey {
    fn into_table_key(self) -> Result<TableKey> {
        Ok(self)
    }
}

impl IntoTableKey for usize {
    fn into_table_key(self) -> Result<TableKey> {
        TableKey::try_from(self)
    }
}
