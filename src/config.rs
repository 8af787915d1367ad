//! Configuration for FlyDB
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{FlyDbError, Result};
use crate::record::TableKey;

/// Main configuration for a FlyDB instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Source Files
    // -------------------------------------------------------------------------
    /// Directory holding the table files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── flights.fdb
    ///     ├── airports.fdb
    ///     └── prices.fdb
    pub data_dir: PathBuf,

    /// File name per table, indexed by `TableKey::index()`
    pub table_files: [String; TableKey::COUNT],

    // -------------------------------------------------------------------------
    // Table Configuration
    // -------------------------------------------------------------------------
    /// Fixed row capacity of every table
    pub table_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("database"),
            table_files: [
                "flights.fdb".to_string(),
                "airports.fdb".to_string(),
                "prices.fdb".to_string(),
            ],
            table_capacity: 100,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Resolve the source file for a table
    pub fn table_path(&self, key: TableKey) -> PathBuf {
        self.data_dir.join(&self.table_files[key.index()])
    }

    /// Reject configurations that cannot name a file
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(FlyDbError::Config("data directory is empty".to_string()));
        }

        for key in TableKey::ALL {
            if self.table_files[key.index()].is_empty() {
                return Err(FlyDbError::Config(format!("no file name for {} table", key)));
            }
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the file name of one table (relative to the data directory)
    pub fn table_file(mut self, key: TableKey, name: impl Into<String>) -> Self {
        self.config.table_files[key.index()] = name.into();
        self
    }

    /// Set the per-table row capacity
    pub fn table_capacity(mut self, capacity: usize) -> Self {
        self.config.table_capacity = capacity;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
