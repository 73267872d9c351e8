//! Tax entry service library
//!
//! Persists tax-rate entries for the tax-entry page and exposes the list and
//! save routes it calls.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

use actix_web::web;

// Re-export commonly used types
pub use modules::taxes;

/// Mount every route: probes at the root, tax entries under `/api`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(modules::health::controllers::configure)
        .service(web::scope("/api").configure(modules::taxes::controllers::configure));
}
