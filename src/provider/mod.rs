//! Build property providers.
//!
//! A provider turns a [`Kit`] into the property map a qbs build needs:
//! sysroot, architecture, target OS and toolchain tags, and the compiler
//! and linker names.
//!
//! Providers never fail. Facts that cannot be derived from the kit are
//! left out of the map instead.

use crate::core::abi::{Os, OsFlavor};
use crate::core::kit::Kit;
use crate::core::properties::PropertyMap;

pub mod compiler;
pub mod keys;
pub mod platform;

pub use compiler::{split_toolchain_prefix, xcode_sdk, XcodeSdk};
pub use platform::{architecture_name, canonical_architecture, target_os_list, toolchain_list};

use keys::*;

/// Trait for property providers.
pub trait PropertyProvider {
    /// Derive properties for `kit`, layered on top of `base`.
    fn properties(&self, kit: &Kit, base: &PropertyMap) -> PropertyMap;
}

/// The standard provider for GCC, Clang, MinGW and MSVC kits.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPropertyProvider;

impl DefaultPropertyProvider {
    pub fn new() -> Self {
        DefaultPropertyProvider
    }
}

impl PropertyProvider for DefaultPropertyProvider {
    fn properties(&self, kit: &Kit, base: &PropertyMap) -> PropertyMap {
        let Some(tc) = kit.toolchain() else {
            tracing::debug!("kit `{}` has no toolchain, using base properties", kit.name);
            return base.clone();
        };

        let mut data = base.clone();

        if let Some(sysroot) = kit.sysroot() {
            data.insert(QBS_SYSROOT, sysroot.display().to_string());
        }

        let abi = &tc.target_abi;

        match architecture_name(abi) {
            Some(architecture) => data.insert(QBS_ARCHITECTURE, architecture),
            None => tracing::debug!("kit `{}`: unknown architecture", kit.name),
        }

        let target_os = target_os_list(abi, &kit.device_type);
        if target_os.is_empty() {
            tracing::debug!(
                "kit `{}`: no target OS for {} on {}",
                kit.name,
                abi,
                kit.device_type
            );
        } else {
            data.insert(QBS_TARGETOS, target_os);
        }

        let toolchain = toolchain_list(&tc.kind);
        if toolchain.is_empty() {
            tracing::debug!("kit `{}`: unrecognised toolchain type `{}`", kit.name, tc.kind);
        } else {
            data.insert(QBS_TOOLCHAIN, toolchain);
        }

        // qbs needs the SDK name and version whenever an Apple sysroot is set
        if abi.is_apple() {
            if let Some(sdk) = kit.sysroot().and_then(xcode_sdk) {
                data.insert(CPP_XCODESDKNAME, sdk.name);
                data.insert(CPP_XCODESDKVERSION, sdk.version);
            }
        }

        let file_name = tc
            .compiler_command
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (prefix, compiler_name) = split_toolchain_prefix(&file_name);
        if !prefix.is_empty() {
            data.insert(CPP_TOOLCHAINPREFIX, prefix);
        }
        data.insert(CPP_COMPILERNAME, compiler_name);

        // Native Windows toolchains resolve their own linker
        if abi.os != Os::Windows || abi.os_flavor == OsFlavor::WindowsMSys {
            data.insert(CPP_LINKERNAME, compiler_name);
        }

        data.insert(
            CPP_TOOLCHAINPATH,
            compiler::toolchain_install_path(&tc.compiler_command),
        );

        if abi.os_flavor == OsFlavor::WindowsMsvc2013 {
            data.insert(CPP_PLATFORMCFLAGS, "/FS");
            data.insert(CPP_PLATFORMCXXFLAGS, "/FS");
        }

        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::abi::{Abi, Architecture};
    use crate::core::kit::{DeviceType, ToolChain};

    fn provide(kit: &Kit) -> PropertyMap {
        DefaultPropertyProvider::new().properties(kit, &PropertyMap::new())
    }

    fn linux_gcc(compiler: &str) -> ToolChain {
        ToolChain::new(
            "gcc",
            Abi::new(Architecture::X86, Os::Linux, OsFlavor::GenericLinux, 64),
            compiler,
        )
    }

    #[test]
    fn test_no_toolchain_is_identity() {
        let base: PropertyMap = [("qbs.buildVariant", "debug")].into_iter().collect();
        let kit = Kit::new("empty").with_sysroot("/opt/sysroot");

        let data = DefaultPropertyProvider::new().properties(&kit, &base);
        assert_eq!(data, base);
    }

    #[test]
    fn test_desktop_linux_gcc() {
        let kit = Kit::new("desktop").with_toolchain(linux_gcc("/usr/bin/g++"));
        let data = provide(&kit);

        assert_eq!(data.get_str(QBS_ARCHITECTURE), Some("x86_64"));
        assert_eq!(
            data.get_list(QBS_TARGETOS),
            Some(&["linux".to_string(), "unix".to_string()][..])
        );
        assert_eq!(data.get_list(QBS_TOOLCHAIN), Some(&["gcc".to_string()][..]));
        assert_eq!(data.get_str(CPP_COMPILERNAME), Some("g++"));
        assert_eq!(data.get_str(CPP_LINKERNAME), Some("g++"));
        assert!(!data.contains_key(CPP_TOOLCHAINPREFIX));
        assert!(!data.contains_key(QBS_SYSROOT));
        assert!(!data.contains_key(CPP_PLATFORMCFLAGS));
        #[cfg(unix)]
        assert_eq!(data.get_str(CPP_TOOLCHAINPATH), Some("/usr/bin"));
    }

    #[test]
    fn test_empty_sysroot_is_omitted() {
        let kit: Kit = toml::from_str(
            r#"
name = "desktop"
sysroot = ""

[toolchain]
type = "gcc"
abi = "x86-linux-generic-elf-64bit"
compiler = "/usr/bin/g++"
"#,
        )
        .unwrap();
        let data = provide(&kit);

        assert!(!data.contains_key(QBS_SYSROOT));
        assert_eq!(data.get_str(QBS_ARCHITECTURE), Some("x86_64"));
    }

    #[test]
    fn test_cross_compiler_prefix() {
        let tc = ToolChain::new(
            "gcc",
            Abi::new(Architecture::Arm, Os::Linux, OsFlavor::GenericLinux, 32),
            "/opt/cross/bin/arm-linux-gnueabi-g++",
        );
        let kit = Kit::new("cross")
            .with_sysroot("/opt/cross/sysroot")
            .with_toolchain(tc);
        let data = provide(&kit);

        assert_eq!(data.get_str(QBS_SYSROOT), Some("/opt/cross/sysroot"));
        assert_eq!(data.get_str(QBS_ARCHITECTURE), Some("arm"));
        assert_eq!(data.get_str(CPP_TOOLCHAINPREFIX), Some("arm-linux-gnueabi-"));
        assert_eq!(data.get_str(CPP_COMPILERNAME), Some("g++"));
        assert_eq!(data.get_str(CPP_LINKERNAME), Some("g++"));
    }

    #[test]
    fn test_ios_simulator_kit() {
        let tc = ToolChain::new(
            "clang",
            Abi::new(Architecture::X86, Os::Mac, OsFlavor::GenericMac, 64),
            "/usr/bin/clang++",
        );
        let kit = Kit::new("ios-sim")
            .with_device_type(DeviceType::IosSimulator)
            .with_sysroot("/Xcode/SDKs/iPhoneSimulator8.1.sdk")
            .with_toolchain(tc);
        let data = provide(&kit);

        let target_os: Vec<&str> = data
            .get_list(QBS_TARGETOS)
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(target_os, vec!["ios-simulator", "ios", "darwin", "bsd", "unix"]);

        let toolchain: Vec<&str> = data
            .get_list(QBS_TOOLCHAIN)
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(toolchain, vec!["clang", "llvm", "gcc"]);

        assert_eq!(data.get_str(CPP_XCODESDKNAME), Some("iphonesimulator8.1"));
        assert_eq!(data.get_str(CPP_XCODESDKVERSION), Some("8.1"));
    }

    #[test]
    fn test_sdk_ignored_off_apple() {
        let kit = Kit::new("odd")
            .with_sysroot("/sdks/MacOSX10.10.sdk")
            .with_toolchain(linux_gcc("/usr/bin/g++"));
        let data = provide(&kit);
        assert!(!data.contains_key(CPP_XCODESDKNAME));
        assert!(!data.contains_key(CPP_XCODESDKVERSION));
    }

    #[test]
    fn test_msvc2013_kit() {
        let tc = ToolChain::new(
            "msvc",
            Abi::new(Architecture::X86, Os::Windows, OsFlavor::WindowsMsvc2013, 64),
            "C:/VS/VC/bin/amd64/cl.exe",
        );
        let data = provide(&Kit::new("msvc").with_toolchain(tc));

        assert_eq!(data.get_str(CPP_COMPILERNAME), Some("cl.exe"));
        assert!(!data.contains_key(CPP_LINKERNAME));
        assert_eq!(data.get_str(CPP_PLATFORMCFLAGS), Some("/FS"));
        assert_eq!(data.get_str(CPP_PLATFORMCXXFLAGS), Some("/FS"));
        assert_eq!(data.get_list(QBS_TOOLCHAIN), Some(&["msvc".to_string()][..]));
    }

    #[test]
    fn test_msys_kit_keeps_linker() {
        let tc = ToolChain::new(
            "mingw",
            Abi::new(Architecture::X86, Os::Windows, OsFlavor::WindowsMSys, 32),
            "C:/mingw/bin/g++.exe",
        );
        let data = provide(&Kit::new("mingw").with_toolchain(tc));

        assert_eq!(data.get_str(QBS_ARCHITECTURE), Some("x86"));
        assert_eq!(data.get_str(CPP_LINKERNAME), Some("g++.exe"));
        assert!(!data.contains_key(CPP_PLATFORMCFLAGS));
    }

    #[test]
    fn test_unknown_entries_are_omitted() {
        let tc = ToolChain::new(
            "icc",
            Abi::new(Architecture::Unknown, Os::Unknown, OsFlavor::Unknown, 0),
            "/opt/intel/bin/icpc",
        );
        let data = provide(&Kit::new("intel").with_toolchain(tc));

        assert!(!data.contains_key(QBS_ARCHITECTURE));
        assert!(!data.contains_key(QBS_TARGETOS));
        assert!(!data.contains_key(QBS_TOOLCHAIN));
        assert_eq!(data.get_str(CPP_COMPILERNAME), Some("icpc"));
    }

    #[test]
    fn test_base_entries_survive() {
        let base: PropertyMap = [("qbs.buildVariant", "release"), ("cpp.compilerName", "cc")]
            .into_iter()
            .collect();
        let kit = Kit::new("desktop").with_toolchain(linux_gcc("/usr/bin/g++"));

        let data = DefaultPropertyProvider::new().properties(&kit, &base);
        assert_eq!(data.get_str("qbs.buildVariant"), Some("release"));
        // Derived values win over base values
        assert_eq!(data.get_str(CPP_COMPILERNAME), Some("g++"));
        // The base map itself is untouched
        assert_eq!(base.get_str("cpp.compilerName"), Some("cc"));
    }
}
