use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{AppError, Result};

/// How a tax value is applied to an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeCode {
    #[serde(rename = "add")]
    Add,
    #[serde(rename = "sub")]
    Sub,
    #[serde(rename = "%")]
    Percent,
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeCode::Add => write!(f, "add"),
            TypeCode::Sub => write!(f, "sub"),
            TypeCode::Percent => write!(f, "%"),
        }
    }
}

/// Tax categories offered by the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxCategory {
    #[serde(rename = "CGST")]
    Cgst,
    #[serde(rename = "IGST")]
    Igst,
    #[serde(rename = "SGST")]
    Sgst,
    #[serde(rename = "CESS")]
    Cess,
    #[serde(rename = "Custom Duty")]
    CustomDuty,
    #[serde(rename = "TCS")]
    Tcs,
    #[serde(rename = "SWS")]
    Sws,
}

impl TaxCategory {
    pub const ALL: [TaxCategory; 7] = [
        TaxCategory::Cgst,
        TaxCategory::Igst,
        TaxCategory::Sgst,
        TaxCategory::Cess,
        TaxCategory::CustomDuty,
        TaxCategory::Tcs,
        TaxCategory::Sws,
    ];
}

/// Whether the value is entered by the user or derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    User,
    #[default]
    Calculable,
}

/// One persisted tax rule, keyed by `tax_code`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxEntry {
    pub tax_code: String,
    pub tax_name: String,
    /// Numeric value kept as text; JSON numbers are accepted and normalized
    #[serde(deserialize_with = "text_or_number")]
    pub tax_value: String,
    pub type_code: TypeCode,
    pub category: TaxCategory,
    #[serde(default)]
    pub value_type: ValueType,
    #[serde(default)]
    pub ledger_name: String,
}

/// Deserialize a JSON string or number into its text form
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    })
}

impl TaxEntry {
    pub fn new(
        tax_code: impl Into<String>,
        tax_name: impl Into<String>,
        tax_value: impl Into<String>,
        type_code: TypeCode,
        category: TaxCategory,
    ) -> Self {
        Self {
            tax_code: tax_code.into(),
            tax_name: tax_name.into(),
            tax_value: tax_value.into(),
            type_code,
            category,
            value_type: ValueType::default(),
            ledger_name: String::new(),
        }
    }

    /// Parsed numeric value
    pub fn value(&self) -> Result<Decimal> {
        Decimal::from_str(self.tax_value.trim()).map_err(|_| {
            AppError::validation(format!("taxValue '{}' is not numeric", self.tax_value))
        })
    }

    /// Presence checks applied before a save
    pub fn validate(&self) -> Result<()> {
        if self.tax_code.trim().is_empty() {
            return Err(AppError::validation("taxCode is required"));
        }
        if self.tax_name.trim().is_empty() {
            return Err(AppError::validation("taxName is required"));
        }
        if self.tax_value.trim().is_empty() {
            return Err(AppError::validation("taxValue is required"));
        }
        self.value()?;
        Ok(())
    }
}

/// POST body: an entry plus the edit intent flag
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveTaxEntryRequest {
    #[serde(flatten)]
    pub entry: TaxEntry,
    #[serde(default)]
    pub is_editing: bool,
}

/// Result of a save that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
    Conflict,
}

impl SaveOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, SaveOutcome::Conflict)
    }
}

impl fmt::Display for SaveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveOutcome::Created => write!(f, "created"),
            SaveOutcome::Updated => write!(f, "updated"),
            SaveOutcome::Conflict => write!(f, "conflict"),
        }
    }
}

/// `{success, message}` body returned by the save route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
}

impl SaveResponse {
    pub const SAVED_MESSAGE: &'static str = "Tax Details Successfully Saved!";

    pub fn saved() -> Self {
        Self {
            success: true,
            message: Self::SAVED_MESSAGE.to_string(),
        }
    }
}
