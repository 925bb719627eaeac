//! Core data structures for kitprops.
//!
//! This module contains the foundational types used throughout kitprops:
//! - Target ABIs (architecture, OS, flavor, word width)
//! - Kits, toolchains and device types
//! - Build property maps
//! - QML import records

pub mod abi;
pub mod error;
pub mod import;
pub mod kit;
pub mod properties;

pub use abi::{Abi, Architecture, Os, OsFlavor};
pub use error::KitError;
pub use import::{parse_imports, Import, ImportSource};
pub use kit::{DeviceType, Kit, ToolChain, ToolChainKind};
pub use properties::{PropertyMap, PropertyValue};
