//! Presentation models.
//!
//! Toolkit-independent view state: each model mirrors the data it was last
//! given and renders to plain text for the CLI.

pub mod imports;

pub use imports::{ImportLabel, ImportsPanel, LayoutItem, VerticalLayout};
