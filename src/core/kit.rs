//! Kits: named bundles of target-platform settings.
//!
//! A kit ties together a toolchain, an optional sysroot and the type of
//! device the build targets. Kits are plain data; nothing in this crate
//! mutates one after it has been loaded.

use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::abi::Abi;

/// The kind of device a kit deploys to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceType {
    /// The machine the build runs on
    #[default]
    Desktop,
    IosDevice,
    IosSimulator,
    WinRtLocal,
    WinRtPhone,
    WinRtEmulator,
    /// BlackBerry 10 (QNX based)
    QnxBlackBerry,
    /// Plain QNX Neutrino target
    QnxQnx,
    Android,
    /// Any device type this crate has no rules for
    Other(String),
}

impl DeviceType {
    pub fn as_str(&self) -> &str {
        match self {
            DeviceType::Desktop => "desktop",
            DeviceType::IosDevice => "ios-device",
            DeviceType::IosSimulator => "ios-simulator",
            DeviceType::WinRtLocal => "winrt-local",
            DeviceType::WinRtPhone => "winrt-phone",
            DeviceType::WinRtEmulator => "winrt-emulator",
            DeviceType::QnxBlackBerry => "qnx-blackberry",
            DeviceType::QnxQnx => "qnx",
            DeviceType::Android => "android",
            DeviceType::Other(id) => id,
        }
    }

    /// Whether this is one of the WinRT device types.
    pub fn is_winrt(&self) -> bool {
        matches!(
            self,
            DeviceType::WinRtLocal | DeviceType::WinRtPhone | DeviceType::WinRtEmulator
        )
    }
}

impl FromStr for DeviceType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "desktop" => DeviceType::Desktop,
            "ios-device" | "ios" => DeviceType::IosDevice,
            "ios-simulator" => DeviceType::IosSimulator,
            "winrt-local" => DeviceType::WinRtLocal,
            "winrt-phone" => DeviceType::WinRtPhone,
            "winrt-emulator" => DeviceType::WinRtEmulator,
            "qnx-blackberry" | "blackberry" => DeviceType::QnxBlackBerry,
            "qnx" => DeviceType::QnxQnx,
            "android" => DeviceType::Android,
            other => DeviceType::Other(other.to_string()),
        })
    }
}

impl From<String> for DeviceType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(device) => device,
            Err(never) => match never {},
        }
    }
}

impl From<DeviceType> for String {
    fn from(device: DeviceType) -> Self {
        device.as_str().to_string()
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Toolchain type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ToolChainKind {
    Clang,
    Gcc,
    Mingw,
    Msvc,
    Other(String),
}

impl ToolChainKind {
    pub fn as_str(&self) -> &str {
        match self {
            ToolChainKind::Clang => "clang",
            ToolChainKind::Gcc => "gcc",
            ToolChainKind::Mingw => "mingw",
            ToolChainKind::Msvc => "msvc",
            ToolChainKind::Other(kind) => kind,
        }
    }
}

impl From<String> for ToolChainKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "clang" => ToolChainKind::Clang,
            "gcc" => ToolChainKind::Gcc,
            "mingw" => ToolChainKind::Mingw,
            "msvc" => ToolChainKind::Msvc,
            _ => ToolChainKind::Other(s),
        }
    }
}

impl From<&str> for ToolChainKind {
    fn from(s: &str) -> Self {
        ToolChainKind::from(s.to_string())
    }
}

impl From<ToolChainKind> for String {
    fn from(kind: ToolChainKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ToolChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiler toolchain selected by a kit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolChain {
    /// Toolchain type (gcc, clang, mingw, msvc, ...)
    #[serde(rename = "type")]
    pub kind: ToolChainKind,
    /// ABI the toolchain generates code for
    #[serde(rename = "abi")]
    pub target_abi: Abi,
    /// Path to the C++ compiler driver
    #[serde(rename = "compiler")]
    pub compiler_command: PathBuf,
}

impl ToolChain {
    pub fn new(kind: impl Into<ToolChainKind>, target_abi: Abi, compiler: impl Into<PathBuf>) -> Self {
        ToolChain {
            kind: kind.into(),
            target_abi,
            compiler_command: compiler.into(),
        }
    }

    /// Locate the compiler on disk.
    ///
    /// Bare command names (`g++`) are searched for in `PATH`. Returns `None`
    /// when the compiler cannot be found.
    pub fn locate_compiler(&self) -> Option<PathBuf> {
        let cmd = &self.compiler_command;
        let is_bare = cmd.parent().map_or(true, |p| p.as_os_str().is_empty());
        if is_bare {
            which::which(cmd).ok()
        } else if cmd.exists() {
            Some(cmd.clone())
        } else {
            None
        }
    }
}

/// A named target-platform configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Kit {
    pub name: String,

    /// Sysroot directory, if the kit has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sysroot: Option<PathBuf>,

    #[serde(default)]
    pub device_type: DeviceType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolchain: Option<ToolChain>,
}

impl Kit {
    /// Create an empty desktop kit.
    pub fn new(name: impl Into<String>) -> Self {
        Kit {
            name: name.into(),
            ..Kit::default()
        }
    }

    pub fn with_sysroot(mut self, sysroot: impl Into<PathBuf>) -> Self {
        self.sysroot = Some(sysroot.into());
        self
    }

    pub fn with_device_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = device_type;
        self
    }

    pub fn with_toolchain(mut self, toolchain: ToolChain) -> Self {
        self.toolchain = Some(toolchain);
        self
    }

    pub fn has_sysroot(&self) -> bool {
        self.sysroot().is_some()
    }

    /// The kit's sysroot. An empty path counts as no sysroot.
    pub fn sysroot(&self) -> Option<&Path> {
        self.sysroot
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    pub fn toolchain(&self) -> Option<&ToolChain> {
        self.toolchain.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::abi::{Architecture, Os, OsFlavor};

    #[test]
    fn test_device_type_parse() {
        let parse = |s: &str| s.parse::<DeviceType>().unwrap();
        assert_eq!(parse("ios-simulator"), DeviceType::IosSimulator);
        assert_eq!(parse("qnx"), DeviceType::QnxQnx);
        assert_eq!(
            parse("baremetal"),
            DeviceType::Other("baremetal".to_string())
        );
        assert!(DeviceType::WinRtPhone.is_winrt());
        assert!(!DeviceType::Desktop.is_winrt());
    }

    #[test]
    fn test_toolchain_kind_from_str() {
        assert_eq!(ToolChainKind::from("clang"), ToolChainKind::Clang);
        assert_eq!(
            ToolChainKind::from("icc"),
            ToolChainKind::Other("icc".to_string())
        );
        assert_eq!(ToolChainKind::Other("icc".to_string()).as_str(), "icc");
    }

    #[test]
    fn test_kit_from_toml() {
        let kit: Kit = toml::from_str(
            r#"
name = "android-arm"
sysroot = "/opt/ndk/platforms/android-21/arch-arm"
device-type = "android"

[toolchain]
type = "gcc"
abi = "arm-linux-android-elf-32bit"
compiler = "/opt/ndk/bin/arm-linux-androideabi-g++"
"#,
        )
        .unwrap();

        assert_eq!(kit.name, "android-arm");
        assert_eq!(kit.device_type, DeviceType::Android);
        assert!(kit.has_sysroot());

        let tc = kit.toolchain().unwrap();
        assert_eq!(tc.kind, ToolChainKind::Gcc);
        assert_eq!(
            tc.target_abi,
            Abi::new(Architecture::Arm, Os::Linux, OsFlavor::AndroidLinux, 32)
        );
    }

    #[test]
    fn test_empty_sysroot_is_absent() {
        let kit: Kit = toml::from_str("name = \"empty\"\nsysroot = \"\"\n").unwrap();
        assert!(!kit.has_sysroot());
        assert_eq!(kit.sysroot(), None);
    }

    #[test]
    fn test_kit_defaults() {
        let kit: Kit = toml::from_str(r#"name = "bare""#).unwrap();
        assert_eq!(kit.device_type, DeviceType::Desktop);
        assert!(kit.sysroot.is_none());
        assert!(kit.toolchain.is_none());
    }

    #[test]
    fn test_kit_rejects_bad_abi() {
        let result: Result<Kit, _> = toml::from_str(
            r#"
name = "broken"

[toolchain]
type = "gcc"
abi = "x86-linux"
compiler = "/usr/bin/g++"
"#,
        );
        assert!(result.is_err());
    }
}
