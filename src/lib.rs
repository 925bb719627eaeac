//! kitprops - derive qbs build properties from C/C++ toolchain kits
//!
//! This crate provides the core library functionality for kitprops,
//! including kit descriptors, the property provider that maps a kit onto
//! qbs properties, and the import list panel model.

pub mod core;
pub mod provider;
pub mod ui;
pub mod util;

pub use crate::core::{Abi, Import, Kit, PropertyMap, PropertyValue, ToolChain};

pub use provider::{DefaultPropertyProvider, PropertyProvider};
pub use ui::ImportsPanel;
pub use util::context::GlobalContext;
