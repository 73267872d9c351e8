// Test Helper Modules
//
// Shared infrastructure for contract and integration tests: app/server
// spawning over a chosen repository, payload factories, and response
// assertions.
//
// Usage:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;
#![allow(dead_code)]


pub use assertions::*;
pub use test_data::*;
pub use test_server::*;
