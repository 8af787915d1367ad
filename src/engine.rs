//! Engine Module
//!
//! `FlyDb` ties the database to its source files.
//!
//! ## Responsibilities
//! - Build the database with the configured capacity
//! - Load every table file once, in key order, at startup
//! - Serve range reads against the loaded tables
//!
//! A table whose file is missing or broken stays empty (or partially
//! loaded); the other tables still load and the failure is kept in the
//! `LoadReport`.

use std::path::PathBuf;

use crate::config::Config;
use crate::database::Database;
use crate::error::Result;
use crate::loader::{load_file, LoadStats};
use crate::query::{get_range, get_range_with, FillPolicy};
use crate::record::{IntoTableKey, Record, TableKey};

/// Load outcome of one table
#[derive(Debug)]
pub struct TableLoad {
    pub key: TableKey,
    pub path: PathBuf,
    pub outcome: Result<LoadStats>,
}

/// Load outcomes of all tables, in key order
#[derive(Debug, Default)]
pub struct LoadReport {
    pub tables: Vec<TableLoad>,
}

impl LoadReport {
    /// Outcome for one table
    pub fn table(&self, key: TableKey) -> Option<&TableLoad> {
        self.tables.iter().find(|t| t.key == key)
    }

    /// True when every file loaded without a file-level error
    pub fn is_complete(&self) -> bool {
        self.tables.iter().all(|t| t.outcome.is_ok())
    }
}

/// The loaded flight database
pub struct FlyDb {
    config: Config,
    db: Database,
    report: LoadReport,
}

impl FlyDb {
    /// Build the database and load all table files
    ///
    /// Only an invalid configuration fails; per-file errors land in
    /// `report()`.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let db = Database::new(config.table_capacity);
        let mut report = LoadReport::default();

        for key in TableKey::ALL {
            let path = config.table_path(key);
            let outcome = load_file(&db, key, &path);

            if let Err(ref e) = outcome {
                tracing::warn!("{} table not loaded: {}", key, e);
            }

            report.tables.push(TableLoad { key, path, outcome });
        }

        Ok(Self { config, db, report })
    }

    /// Read rows `from..=to`, padding past the end of data with placeholders
    pub fn get_range(
        &self,
        key: impl IntoTableKey,
        from: usize,
        to: usize,
    ) -> Result<Vec<Record>> {
        get_range(&self.db, key, from, to)
    }

    /// Read rows `from..=to` with an explicit fill policy
    pub fn get_range_with(
        &self,
        key: impl IntoTableKey,
        from: usize,
        to: usize,
        policy: FillPolicy,
    ) -> Result<Vec<Record>> {
        get_range_with(&self.db, key, from, to, policy)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
