//! Kit error types and diagnostics.

use std::path::PathBuf;

use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error while loading or looking up kits.
#[derive(Debug, Error)]
pub enum KitError {
    #[error("invalid ABI `{abi}`: {reason}")]
    InvalidAbi { abi: String, reason: String },

    #[error("kit `{name}` not found")]
    KitNotFound { name: String, available: Vec<String> },

    #[error("no kit selected")]
    NoKitSelected { available: Vec<String> },

    #[error("duplicate kit `{name}` in {}", path.display())]
    DuplicateKit { name: String, path: PathBuf },
}

impl KitError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            KitError::InvalidAbi { abi, reason } => {
                Diagnostic::error(format!("invalid ABI `{}`", abi))
                    .with_context(reason.clone())
                    .with_suggestion(
                        "ABIs are written as arch-os-flavor-format-width, e.g. x86-linux-generic-elf-64bit",
                    )
            }
            KitError::KitNotFound { name, available } => {
                let mut diag = Diagnostic::error(format!("kit `{}` not found", name));
                if !available.is_empty() {
                    diag = diag.with_context(format!("available kits: {}", available.join(", ")));
                }
                diag.with_suggestion(suggestions::LIST_KITS)
            }
            KitError::NoKitSelected { available } => {
                let diag = Diagnostic::error("no kit selected");
                if available.is_empty() {
                    diag.with_context("no kits are configured")
                        .with_suggestion(suggestions::NO_KITS)
                } else {
                    diag.with_context(format!("available kits: {}", available.join(", ")))
                        .with_suggestion(suggestions::SELECT_KIT)
                }
            }
            KitError::DuplicateKit { name, path } => {
                Diagnostic::error(format!("kit `{}` is defined more than once", name))
                    .with_location(path)
                    .with_suggestion("Rename one of the kits")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kit_not_found_diagnostic() {
        let err = KitError::KitNotFound {
            name: "android".to_string(),
            available: vec!["desktop".to_string(), "ios".to_string()],
        };

        let output = err.to_diagnostic().format(false);
        assert!(output.contains("error: kit `android` not found"));
        assert!(output.contains("available kits: desktop, ios"));
        assert!(output.contains("kitprops kit list"));
    }

    #[test]
    fn test_no_kit_selected_without_kits() {
        let err = KitError::NoKitSelected { available: vec![] };
        let output = err.to_diagnostic().format(false);
        assert!(output.contains("no kits are configured"));
        assert!(output.contains("help: Create .kitprops/kits.toml"));
        assert!(!output.contains("--kit <NAME>"));
    }

    #[test]
    fn test_no_kit_selected_with_several_kits() {
        let err = KitError::NoKitSelected {
            available: vec!["desktop".to_string(), "ios".to_string()],
        };
        let output = err.to_diagnostic().format(false);
        assert!(output.contains("available kits: desktop, ios"));
        assert!(output.contains("help: Pass `--kit <NAME>`"));
    }
}
