use async_trait::async_trait;

use crate::core::Result;
use crate::modules::taxes::models::TaxEntry;

/// Storage for the full tax entry collection
///
/// Implementations can be file-backed or in-memory. Reads fail open: any
/// read or decode failure is logged and yields an empty collection. Writes
/// replace the whole collection and surface every failure.
#[async_trait]
pub trait TaxEntryRepository: Send + Sync {
    /// Load every entry in insertion order
    async fn read_all(&self) -> Vec<TaxEntry>;

    /// Replace the stored collection with `entries`
    async fn write_all(&self, entries: &[TaxEntry]) -> Result<()>;

    /// Check that the backing location is usable
    async fn probe(&self) -> Result<()>;
}

/// Encode entries as newline-delimited JSON, one record per line
pub fn encode_lines(entries: &[TaxEntry]) -> Result<String> {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&serde_json::to_string(entry)?);
        out.push('\n');
    }
    Ok(out)
}

/// Decode newline-delimited JSON, skipping blank lines
pub fn decode_lines(data: &str) -> Result<Vec<TaxEntry>> {
    data.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Ok(serde_json::from_str::<TaxEntry>(line)?))
        .collect()
}
