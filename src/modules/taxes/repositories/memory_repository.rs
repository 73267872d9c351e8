use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::Result;
use crate::modules::taxes::models::TaxEntry;

use super::tax_entry_repository::TaxEntryRepository;

/// Non-durable repository for tests and ephemeral runs
#[derive(Debug, Default)]
pub struct InMemoryTaxEntryRepository {
    entries: RwLock<Vec<TaxEntry>>,
}

impl InMemoryTaxEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<TaxEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl TaxEntryRepository for InMemoryTaxEntryRepository {
    async fn read_all(&self) -> Vec<TaxEntry> {
        self.entries.read().await.clone()
    }

    async fn write_all(&self, entries: &[TaxEntry]) -> Result<()> {
        *self.entries.write().await = entries.to_vec();
        Ok(())
    }

    async fn probe(&self) -> Result<()> {
        Ok(())
    }
}
