//! Core module - errors, configuration and record loading

pub mod config;
pub mod error;
pub mod loader;

pub use config::Config;
pub use error::DiagnosticError;
pub use loader::{load_vehicle, LoadError, RecordFormat};
