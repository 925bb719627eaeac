//! Kit file support for kitprops.
//!
//! Kits are read from two locations:
//! - Global: `~/.kitprops/kits.toml` - User-wide kits
//! - Project: `.kitprops/kits.toml` - Project-specific kits
//!
//! Project kits replace global kits of the same name.
//!
//! ```toml
//! default = "arm-linux"
//!
//! [base]
//! "qbs.buildVariant" = "debug"
//!
//! [[kit]]
//! name = "arm-linux"
//! sysroot = "/opt/cross/sysroot"
//!
//! [kit.toolchain]
//! type = "gcc"
//! abi = "arm-linux-generic-elf-32bit"
//! compiler = "/opt/cross/bin/arm-linux-gnueabi-g++"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::error::KitError;
use crate::core::kit::Kit;
use crate::core::properties::PropertyMap;
use crate::util::diagnostic::KitFileParseError;

/// Contents of a kit file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    /// Kit used when none is named on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Base properties every kit's properties are layered on
    #[serde(skip_serializing_if = "PropertyMap::is_empty")]
    pub base: PropertyMap,

    /// Configured kits, in file order
    #[serde(rename = "kit", skip_serializing_if = "Vec::is_empty")]
    pub kits: Vec<Kit>,
}

impl KitConfig {
    /// Load a kit file.
    ///
    /// Fails on unreadable files, invalid TOML, and duplicate kit names.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read kit file: {}", path.display()))?;

        let config: KitConfig = toml::from_str(&contents)
            .map_err(|e| KitFileParseError::from_toml(path, &contents, &e))?;

        for (i, kit) in config.kits.iter().enumerate() {
            if config.kits[..i].iter().any(|k| k.name == kit.name) {
                return Err(KitError::DuplicateKit {
                    name: kit.name.clone(),
                    path: path.to_path_buf(),
                }
                .into());
            }
        }

        tracing::debug!("loaded {} kits from {}", config.kits.len(), path.display());
        Ok(config)
    }

    /// Save to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(self).with_context(|| "failed to serialize kit file")?;

        std::fs::write(path, contents)
            .with_context(|| format!("failed to write kit file: {}", path.display()))?;

        Ok(())
    }

    /// Merge another config into this one (other takes precedence).
    ///
    /// Kits are matched by name; new kits are appended in order.
    pub fn merge(&mut self, other: KitConfig) {
        if other.default.is_some() {
            self.default = other.default;
        }

        self.base.merge(other.base);

        for kit in other.kits {
            match self.kits.iter_mut().find(|k| k.name == kit.name) {
                Some(existing) => *existing = kit,
                None => self.kits.push(kit),
            }
        }
    }

    /// Find a kit by name.
    pub fn find(&self, name: &str) -> Option<&Kit> {
        self.kits.iter().find(|k| k.name == name)
    }

    /// Names of all configured kits.
    pub fn names(&self) -> Vec<String> {
        self.kits.iter().map(|k| k.name.clone()).collect()
    }

    /// Pick the kit to use.
    ///
    /// An explicit name wins, then the configured default, then the only
    /// kit if exactly one exists.
    pub fn select(&self, name: Option<&str>) -> Result<&Kit, KitError> {
        let name = name.or(self.default.as_deref());

        match name {
            Some(name) => self.find(name).ok_or_else(|| KitError::KitNotFound {
                name: name.to_string(),
                available: self.names(),
            }),
            None => match self.kits.as_slice() {
                [only] => Ok(only),
                _ => Err(KitError::NoKitSelected {
                    available: self.names(),
                }),
            },
        }
    }
}

/// Load merged kits from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project kits (.kitprops/kits.toml)
/// 2. Global kits (~/.kitprops/kits.toml)
pub fn load_kit_config(global_path: &Path, project_path: &Path) -> Result<KitConfig> {
    let mut config = KitConfig::default();

    if global_path.exists() {
        config.merge(KitConfig::load(global_path)?);
    }

    if project_path.exists() {
        config.merge(KitConfig::load(project_path)?);
    }

    Ok(config)
}

/// Get the global kitprops config directory (~/.kitprops).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".kitprops"))
}

/// Get the project kit file path (.kitprops/kits.toml).
pub fn project_kits_path(project_root: &Path) -> PathBuf {
    project_root.join(".kitprops").join("kits.toml")
}
