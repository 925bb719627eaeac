//! Command implementations

pub mod completions;
pub mod imports;
pub mod kit;
pub mod properties;
