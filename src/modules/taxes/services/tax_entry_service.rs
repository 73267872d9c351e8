use std::sync::Arc;

use crate::core::Result;
use crate::modules::taxes::models::{SaveOutcome, SaveTaxEntryRequest, TaxEntry};
use crate::modules::taxes::repositories::TaxEntryRepository;

/// Create-or-explicit-update rules for tax entries
///
/// Each save reads the whole collection, mutates it in memory and writes it
/// back. Nothing serializes concurrent saves; the last writer wins.
pub struct TaxEntryService {
    repository: Arc<dyn TaxEntryRepository>,
}

impl TaxEntryService {
    pub fn new(repository: Arc<dyn TaxEntryRepository>) -> Self {
        Self { repository }
    }

    /// Every stored entry in insertion order. Never fails.
    pub async fn list_all(&self) -> Vec<TaxEntry> {
        self.repository.read_all().await
    }

    /// Save a new entry, or replace an existing one when the request
    /// carries edit intent.
    ///
    /// Returns `SaveOutcome::Conflict` without touching the store when the
    /// tax code exists and `is_editing` is false. Write failures propagate.
    pub async fn save(&self, request: SaveTaxEntryRequest) -> Result<SaveOutcome> {
        let SaveTaxEntryRequest { entry, is_editing } = request;
        entry.validate()?;
        let tax_code = entry.tax_code.clone();

        let mut entries = self.repository.read_all().await;
        let existing = entries.iter().position(|e| e.tax_code == tax_code);

        let outcome = match existing {
            Some(index) if is_editing => {
                entries[index] = entry;
                SaveOutcome::Updated
            }
            Some(_) => {
                tracing::info!(tax_code = %tax_code, outcome = %SaveOutcome::Conflict, "Tax entry already exists");
                return Ok(SaveOutcome::Conflict);
            }
            None => {
                entries.push(entry);
                SaveOutcome::Created
            }
        };

        self.repository.write_all(&entries).await?;

        tracing::info!(
            tax_code = %tax_code,
            outcome = %outcome,
            count = entries.len(),
            "Tax entry saved"
        );
        Ok(outcome)
    }

    /// Readiness check for the backing store
    pub async fn probe(&self) -> Result<()> {
        self.repository.probe().await
    }
}
