pub mod file_repository;
pub mod memory_repository;
pub mod tax_entry_repository;

pub use file_repository::FileTaxEntryRepository;
pub use memory_repository::InMemoryTaxEntryRepository;
pub use tax_entry_repository::{decode_lines, encode_lines, TaxEntryRepository};
