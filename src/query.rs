//! Range queries
//!
//! Reads a contiguous, inclusive index range from one table.
//!
//! Pagers ask for a fixed-size window and expect a fixed-size answer, so by
//! default an index with no row yields the table's zero-value placeholder
//! instead of failing the request. `FillPolicy::Strict` turns that off.

use crate::database::Database;
use crate::error::{FlyDbError, Result};
use crate::record::{IntoTableKey, Record};

/// What a range read does with an index that holds no row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FillPolicy {
    /// Emit `Record::zero(key)` in place of the missing row
    #[default]
    Placeholder,

    /// Fail with the first `IndexOutOfRange`
    Strict,
}

/// Read rows `from..=to` of the table named by `key`, padding with
/// placeholders past the end of data
///
/// The result always holds `to - from + 1` records (none if `from > to`),
/// all of the table's variant. Every index past the data still allocates a
/// placeholder, so callers must keep the window bounded (a screen page,
/// not `0..=usize::MAX`).
pub fn get_range(
    db: &Database,
    key: impl IntoTableKey,
    from: usize,
    to: usize,
) -> Result<Vec<Record>> {
    get_range_with(db, key, from, to, FillPolicy::Placeholder)
}

/// Read rows `from..=to` with an explicit fill policy
pub fn get_range_with(
    db: &Database,
    key: impl IntoTableKey,
    from: usize,
    to: usize,
    policy: FillPolicy,
) -> Result<Vec<Record>> {
    let key = key.into_table_key()?;
    tracing::trace!("Range read on {} table: {}..={} ({:?})", key, from, to, policy);

    (from..=to)
        .map(|index| match db.get_row(key, index) {
            Err(FlyDbError::IndexOutOfRange { .. }) if policy == FillPolicy::Placeholder => {
                Ok(Record::zero(key))
            }
            other => other,
        })
        .collect()
}
