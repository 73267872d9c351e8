use crate::core::{AppError, Result};
use crate::modules::taxes::repositories::{
    FileTaxEntryRepository, InMemoryTaxEntryRepository, TaxEntryRepository,
};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_TAX_ENTRY_FILE: &str = "data/users.txt";

/// Where tax entries are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(AppError::Configuration(format!(
                "Unknown STORAGE_BACKEND '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Backing file, relative paths resolve against the working directory
    pub tax_entry_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            tax_entry_file: PathBuf::from(DEFAULT_TAX_ENTRY_FILE),
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self> {
        Ok(StorageConfig {
            backend: env::var("STORAGE_BACKEND")
                .unwrap_or_else(|_| "file".to_string())
                .parse()?,
            tax_entry_file: env::var("TAX_ENTRY_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TAX_ENTRY_FILE)),
        })
    }

    /// Build the configured repository
    pub fn create_repository(&self) -> Arc<dyn TaxEntryRepository> {
        match self.backend {
            StorageBackend::File => {
                Arc::new(FileTaxEntryRepository::new(self.tax_entry_file.clone()))
            }
            StorageBackend::Memory => Arc::new(InMemoryTaxEntryRepository::new()),
        }
    }
}
