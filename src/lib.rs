//! # FlyDB
//!
//! An in-memory flight database loaded from flat files:
//! - Three fixed-schema tables (flights, airports, prices)
//! - Fixed-capacity, append-only, index-addressed storage
//! - Line-oriented ingestion that skips malformed rows
//! - Range reads padded with placeholders for paging UIs
//! - A double-buffered console screen to page through tables
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 FlyDb (open / get_range)                    │
//! └──────────────┬──────────────────────────────┬───────────────┘
//!                │ startup                      │ reads
//!                ▼                              ▼
//!        ┌──────────────┐               ┌──────────────┐
//!        │    Loader    │               │    Query     │
//!        │ (file lines) │               │ (placeholder │
//!        └──────┬───────┘               │   fill)      │
//!               │                       └──────┬───────┘
//!        ┌──────▼───────┐                      │
//!        │    Parser    │                      │
//!        └──────┬───────┘                      │
//!               │                              │
//!        ┌──────▼──────────────────────────────▼───────┐
//!        │        Database (dispatch by TableKey)      │
//!        └──────┬──────────────┬──────────────┬────────┘
//!               ▼              ▼              ▼
//!        ┌───────────┐  ┌───────────┐  ┌───────────┐
//!        │  Flights  │  │ Airports  │  │  Prices   │
//!        │TableStore │  │TableStore │  │TableStore │
//!        └───────────┘  └───────────┘  └───────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod table;
pub mod database;
pub mod parser;
pub mod loader;
pub mod query;
pub mod engine;
pub mod screen;
pub mod pager;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FlyDbError, Result};
pub use config::Config;
pub use database::Database;
pub use engine::{FlyDb, LoadReport};
pub use query::FillPolicy;
pub use record::{Airport, Flight, Price, Record, Row, TableKey};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FlyDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
