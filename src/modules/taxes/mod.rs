pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{SaveOutcome, SaveTaxEntryRequest, TaxEntry};
pub use repositories::{FileTaxEntryRepository, InMemoryTaxEntryRepository, TaxEntryRepository};
pub use services::TaxEntryService;
