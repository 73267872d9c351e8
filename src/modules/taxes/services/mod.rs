pub mod tax_entry_service;

pub use tax_entry_service::TaxEntryService;
