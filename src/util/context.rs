//! Global context for kitprops operations.
//!
//! Provides centralized access to configuration paths and environment.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::config::{global_config_dir, load_kit_config, project_kits_path, KitConfig};

/// Environment variable overriding the global config directory.
pub const HOME_ENV: &str = "KITPROPS_HOME";

/// Global context containing configuration paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Home directory for global kitprops data (~/.kitprops/)
    home: PathBuf,
}

impl GlobalContext {
    /// Create a new GlobalContext with defaults.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;

        let home = std::env::var_os(HOME_ENV)
            .map(PathBuf::from)
            .or_else(global_config_dir)
            .unwrap_or_else(|| PathBuf::from(".kitprops"));

        Ok(GlobalContext { cwd, home })
    }

    /// Create a context rooted at explicit directories.
    pub fn with_paths(cwd: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        GlobalContext {
            cwd: cwd.into(),
            home: home.into(),
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Path of the global kit file.
    pub fn global_kits_path(&self) -> PathBuf {
        self.home.join("kits.toml")
    }

    /// Path of the project kit file, found by walking up from the cwd.
    ///
    /// Falls back to `<cwd>/.kitprops/kits.toml` when no ancestor has one.
    pub fn project_kits_path(&self) -> PathBuf {
        self.cwd
            .ancestors()
            .map(project_kits_path)
            .find(|p| p.exists())
            .unwrap_or_else(|| project_kits_path(&self.cwd))
    }

    /// Load kits, either from an explicit file or from the global and
    /// project locations.
    pub fn load_kits(&self, kit_file: Option<&Path>) -> Result<KitConfig> {
        match kit_file {
            Some(path) => KitConfig::load(&self.cwd.join(path)),
            None => load_kit_config(&self.global_kits_path(), &self.project_kits_path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_project_kits_found_in_ancestor() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("src").join("ui");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::create_dir_all(tmp.path().join(".kitprops")).unwrap();
        std::fs::write(
            tmp.path().join(".kitprops/kits.toml"),
            "[[kit]]\nname = \"root\"\n",
        )
        .unwrap();

        let ctx = GlobalContext::with_paths(&nested, tmp.path().join("home"));
        assert_eq!(
            ctx.project_kits_path(),
            tmp.path().join(".kitprops").join("kits.toml")
        );

        let kits = ctx.load_kits(None).unwrap();
        assert_eq!(kits.names(), vec!["root"]);
    }

    #[test]
    fn test_explicit_kit_file_is_relative_to_cwd() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("my.toml"), "[[kit]]\nname = \"mine\"\n").unwrap();

        let ctx = GlobalContext::with_paths(tmp.path(), tmp.path().join("home"));
        let kits = ctx.load_kits(Some(Path::new("my.toml"))).unwrap();
        assert_eq!(kits.names(), vec!["mine"]);
    }

    #[test]
    fn test_global_kits_path() {
        let ctx = GlobalContext::with_paths("/work", "/home/me/.kitprops");
        assert_eq!(
            ctx.global_kits_path(),
            PathBuf::from("/home/me/.kitprops/kits.toml")
        );
    }
}
