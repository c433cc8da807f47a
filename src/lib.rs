//! Catalogo product record service library
//!
//! Create/update orchestration for product records over a MySQL store.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::products;
