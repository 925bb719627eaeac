//! Shared utilities

pub mod config;
pub mod context;
pub mod diagnostic;

pub use config::KitConfig;
pub use context::GlobalContext;
pub use diagnostic::Diagnostic;
