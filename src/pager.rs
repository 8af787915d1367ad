//! Table pager
//!
//! Lays a page of records out on a `Screen`: one header line with the
//! table name and visible index range, then one line per record with its
//! index and `|`-separated fields. Placeholder rows show the index only.

use crate::record::{Record, TableKey};
use crate::screen::Screen;

/// Column separator between fields
pub const SEPARATOR: &str = " | ";

/// Number of screen lines taken by the header
pub const HEADER_LINES: usize = 1;

/// Records that fit under the header of `screen`
pub fn page_size(screen: &Screen) -> usize {
    screen.height().saturating_sub(HEADER_LINES)
}

/// Draw `records`, the rows starting at index `first`, onto a cleared
/// back buffer
///
/// `row_count` is the table's occupied count: lines at or past it are
/// placeholders, whatever their contents.
pub fn draw_page(
    screen: &mut Screen,
    key: TableKey,
    first: usize,
    records: &[Record],
    row_count: usize,
) {
    screen.clear_buffer();

    let header = match records.len() {
        0 => format!("{} [no rows]", key),
        n => format!("{} [{}..{}]", key, first, first + n - 1),
    };
    screen.write_str(0, 0, &header);

    for (line, record) in records.iter().enumerate() {
        let y = line + HEADER_LINES;
        let index = first + line;
        let mut text = format!("{:>5}  ", index);
        if index < row_count {
            text.push_str(&record.fields().join(SEPARATOR));
        }
        screen.write_str(0, y, &text);
    }
}
