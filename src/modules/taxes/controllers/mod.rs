pub mod tax_entry_controller;

pub use tax_entry_controller::configure;
