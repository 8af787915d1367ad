//! Row parser
//!
//! Turns one delimited source line into a record.
//!
//! ## Line Format
//! ```text
//! field0,field1,field2[,field3][,ignored...]
//! ```
//! No quoting, escaping or trimming: every byte between two commas is the
//! field value. Lines with too few fields are rejected with `MalformedLine`.

use crate::error::Result;
use crate::record::{Airport, Flight, IntoTableKey, Price, Record, Row, TableKey};

/// Field separator of every table file
pub const DELIMITER: char = ',';

/// Parse `line` as a record of the table named by `key`
pub fn parse_row(key: impl IntoTableKey, line: &str) -> Result<Record> {
    let key = key.into_table_key()?;
    let fields: Vec<&str> = line.split(DELIMITER).collect();

    match key {
        TableKey::Flight => parse_fields::<Flight>(&fields),
        TableKey::Airport => parse_fields::<Airport>(&fields),
        TableKey::Price => parse_fields::<Price>(&fields),
    }
}

fn parse_fields<R: Row>(fields: &[&str]) -> Result<Record> {
    R::from_fields(fields).map(Row::into_record)
}
