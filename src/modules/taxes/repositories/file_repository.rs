use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

use crate::core::Result;
use crate::modules::taxes::models::TaxEntry;

use super::tax_entry_repository::{decode_lines, encode_lines, TaxEntryRepository};

/// Tax entries persisted as newline-delimited JSON in a single file
#[derive(Debug, Clone)]
pub struct FileTaxEntryRepository {
    path: PathBuf,
}

impl FileTaxEntryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn ensure_parent(&self) -> std::io::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent).await,
            _ => Ok(()),
        }
    }

    async fn create_empty(&self) -> std::io::Result<()> {
        self.ensure_parent().await?;
        fs::write(&self.path, b"").await
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "tax_entries".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4()))
    }
}

#[async_trait]
impl TaxEntryRepository for FileTaxEntryRepository {
    async fn read_all(&self) -> Vec<TaxEntry> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                if let Err(err) = self.create_empty().await {
                    tracing::error!(path = %self.path.display(), error = %err, "Failed to create tax entry file");
                }
                return Vec::new();
            }
            Err(err) => {
                tracing::error!(path = %self.path.display(), error = %err, "Error reading tax entry file");
                return Vec::new();
            }
        };

        // Fail open: a corrupt file reads as empty
        match decode_lines(&data) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::error!(path = %self.path.display(), error = %err, "Error decoding tax entry file");
                Vec::new()
            }
        }
    }

    async fn write_all(&self, entries: &[TaxEntry]) -> Result<()> {
        let data = encode_lines(entries)?;
        self.ensure_parent().await?;

        let tmp = self.temp_path();
        if let Err(err) = fs::write(&tmp, data.as_bytes()).await {
            tracing::error!(path = %tmp.display(), error = %err, "Error writing tax entry file");
            return Err(err.into());
        }
        if let Err(err) = fs::rename(&tmp, &self.path).await {
            tracing::error!(path = %self.path.display(), error = %err, "Error replacing tax entry file");
            let _ = fs::remove_file(&tmp).await;
            return Err(err.into());
        }

        tracing::debug!(path = %self.path.display(), count = entries.len(), "Tax entries persisted");
        Ok(())
    }

    async fn probe(&self) -> Result<()> {
        self.ensure_parent().await?;
        Ok(())
    }
}
