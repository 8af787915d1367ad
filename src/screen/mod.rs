//! Screen Module
//!
//! Double-buffered character grid rendered to a text console.
//!
//! ## Responsibilities
//! - Hold a `width x height` grid of chars, blank by default
//! - Render the grid after clearing the console
//! - Track the terminal size and resize the grid to match
//!
//! ## Rendering
//! ```text
//! ESC[2J ESC[H  row 0 ... row h-1
//! ```
//! Rows are written back to back with no separator; a grid as wide as the
//! terminal wraps onto the next console line by itself.

mod buffer;
mod terminal;

pub use buffer::Screen;
pub use terminal::{FixedSize, SystemTerminal, TerminalSize};

/// ANSI sequence: clear the whole console and home the cursor
pub const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

/// Fill character of an empty cell
pub const BLANK: char = ' ';
