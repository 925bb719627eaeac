//! Compiler command and sysroot inspection.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// Xcode SDK directory names, e.g. `iPhoneOS8.1.sdk`.
static XCODE_SDK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(MacOSX|iPhoneOS|iPhoneSimulator)([0-9]+\.[0-9]+)\.sdk$")
        .expect("sdk regex is valid")
});

/// Cross-compiler driver suffixes that carry a target triplet prefix.
const PREFIXED_DRIVERS: &[&str] = &["-g++", "-clang++"];

/// Split a cross-compiler prefix off a compiler file name.
///
/// `arm-linux-gnueabi-g++` becomes `("arm-linux-gnueabi-", "g++")`. Names
/// without a recognised driver suffix are returned unchanged with an empty
/// prefix.
pub fn split_toolchain_prefix(compiler_name: &str) -> (&str, &str) {
    if PREFIXED_DRIVERS
        .iter()
        .any(|suffix| compiler_name.ends_with(suffix))
    {
        // The suffix guarantees a '-' exists
        if let Some(idx) = compiler_name.rfind('-') {
            return compiler_name.split_at(idx + 1);
        }
    }
    ("", compiler_name)
}

/// Xcode SDK identity derived from a sysroot path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XcodeSdk {
    /// Lower-cased platform plus version, e.g. `iphonesimulator8.1`
    pub name: String,
    pub version: String,
}

/// Detect the Xcode SDK a sysroot points at.
///
/// Only the final path component is examined; anything not shaped like
/// `<Platform><major>.<minor>.sdk` yields `None`.
pub fn xcode_sdk(sysroot: &Path) -> Option<XcodeSdk> {
    let dir_name = sysroot.file_name()?.to_str()?;
    let caps = XCODE_SDK_RE.captures(dir_name)?;
    let platform = caps.get(1)?.as_str();
    let version = caps.get(2)?.as_str();

    Some(XcodeSdk {
        name: format!("{}{}", platform.to_lowercase(), version),
        version: version.to_string(),
    })
}

/// Directory containing the compiler, made absolute where possible.
///
/// `.` and `..` components are folded lexically; symlinks are not resolved.
pub fn toolchain_install_path(compiler: &Path) -> String {
    let absolute = std::path::absolute(compiler).unwrap_or_else(|_| compiler.to_path_buf());
    normalize(&absolute)
        .parent()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}
