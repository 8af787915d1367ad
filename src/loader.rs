//! File loader
//!
//! Streams a table file line by line into the database.
//!
//! ## Failure Policy
//! - Unknown key: rejected before the file is opened
//! - Missing/unreadable file: `FileUnavailable`, table left untouched
//! - Malformed line: skipped, loading continues with the next line
//! - Invalid UTF-8: decoded lossily (U+FFFD), the row is kept
//! - Table full: loading of this file stops, rows already stored are kept
//!
//! The file handle is owned by the reader and released on every return path.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::database::Database;
use crate::error::{FlyDbError, Result};
use crate::parser::parse_row;
use crate::record::IntoTableKey;

/// Outcome of loading one file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows appended to the table
    pub loaded: usize,

    /// Malformed lines skipped
    pub skipped: usize,

    /// Whether a well-formed row was dropped because the table was full
    pub truncated: bool,
}

/// Load the file at `path` into the table named by `key`
pub fn load_file(db: &Database, key: impl IntoTableKey, path: &Path) -> Result<LoadStats> {
    let key = key.into_table_key()?;

    let file = File::open(path).map_err(|source| FlyDbError::FileUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let mut stats = LoadStats::default();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let bytes = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        let line = String::from_utf8_lossy(bytes);

        let record = match parse_row(key, &line) {
            Ok(record) => record,
            Err(e @ FlyDbError::MalformedLine { .. }) => {
                tracing::debug!("{}:{}: skipped: {}", path.display(), line_no, e);
                stats.skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        match db.append_row(key, record) {
            Ok(_) => stats.loaded += 1,
            Err(FlyDbError::CapacityExceeded { capacity }) => {
                tracing::warn!(
                    "{} table full at {} rows; ignoring the rest of {} from line {}",
                    key,
                    capacity,
                    path.display(),
                    line_no
                );
                stats.truncated = true;
                break;
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        "Loaded {} table from {}: {} rows, {} skipped",
        key,
        path.display(),
        stats.loaded,
        stats.skipped
    );

    Ok(stats)
}
