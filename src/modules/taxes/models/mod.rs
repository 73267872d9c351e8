pub mod tax_entry;

pub use tax_entry::{
    SaveOutcome, SaveResponse, SaveTaxEntryRequest, TaxCategory, TaxEntry, TypeCode, ValueType,
};
