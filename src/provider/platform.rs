//! Platform lookup tables: architecture names, target OS and toolchain tags.

use crate::core::abi::{Abi, Architecture, Os, OsFlavor};
use crate::core::kit::{DeviceType, ToolChainKind};

/// Aliases folded onto a canonical architecture name.
const ARCH_ALIASES: &[(&str, &[&str])] = &[
    (
        "x86",
        &[
            "i386", "i486", "i586", "i686", "ia32", "ia-32", "x86_32", "x86-32", "intel32",
            "mingw32",
        ],
    ),
    (
        "x86_64",
        &[
            "x86-64", "x64", "amd64", "ia32e", "em64t", "intel64", "mingw64",
        ],
    ),
    ("ia64", &["ia-64", "itanium"]),
    ("ppc", &["powerpc"]),
    ("ppc64", &["powerpc64"]),
];

/// Map an architecture alias to its canonical qbs name.
pub fn canonical_architecture(arch: &str) -> String {
    let lower = arch.to_lowercase();
    ARCH_ALIASES
        .iter()
        .find(|(_, aliases)| aliases.contains(&lower.as_str()))
        .map(|(canonical, _)| canonical.to_string())
        .unwrap_or_else(|| arch.to_string())
}

/// Architecture name for an ABI, or `None` if the architecture is unknown.
///
/// 64-bit suffixes are only added where the plain name is known to mean the
/// 32-bit variant: an already 64-bit architecture such as Itanium would
/// otherwise be misnamed.
pub fn architecture_name(abi: &Abi) -> Option<String> {
    if abi.architecture == Architecture::Unknown {
        return None;
    }

    let mut architecture = abi.architecture.as_str().to_string();
    if abi.word_width == 64 {
        match abi.architecture {
            Architecture::X86 => architecture.push_str("_64"),
            Architecture::Arm | Architecture::Mips | Architecture::PowerPc => {
                architecture.push_str("64")
            }
            _ => {}
        }
    }

    Some(canonical_architecture(&architecture))
}

/// Ordered target OS tags, most specific first.
///
/// Returns an empty list for combinations with no known tags.
pub fn target_os_list(abi: &Abi, device: &DeviceType) -> Vec<&'static str> {
    let mut os = Vec::new();
    match abi.os {
        Os::Windows => {
            if device.is_winrt() {
                os.push("winrt");
            } else if abi.os_flavor == OsFlavor::WindowsCe {
                os.push("windowsce");
            }
            os.push("windows");
        }
        Os::Mac => {
            match device {
                DeviceType::Desktop => os.push("osx"),
                DeviceType::IosDevice => os.push("ios"),
                DeviceType::IosSimulator => os.extend(["ios-simulator", "ios"]),
                _ => {}
            }
            os.extend(["darwin", "bsd", "unix"]);
        }
        Os::Linux => {
            if abi.os_flavor == OsFlavor::AndroidLinux {
                os.push("android");
            }
            os.extend(["linux", "unix"]);
        }
        Os::Bsd => {
            match abi.os_flavor {
                OsFlavor::FreeBsd => os.push("freebsd"),
                OsFlavor::NetBsd => os.push("netbsd"),
                OsFlavor::OpenBsd => os.push("openbsd"),
                _ => {}
            }
            os.extend(["bsd", "unix"]);
        }
        Os::Unix => {
            if *device == DeviceType::QnxBlackBerry {
                os.extend(["blackberry", "qnx"]);
            } else if *device == DeviceType::QnxQnx {
                os.push("qnx");
            } else if abi.os_flavor == OsFlavor::SolarisUnix {
                os.push("solaris");
            }
            os.push("unix");
        }
        Os::Unknown => {}
    }
    os
}

/// Toolchain family tags.
///
/// Clang is listed as `llvm` and `gcc` too because it accepts GCC's flags
/// and ABI.
pub fn toolchain_list(kind: &ToolChainKind) -> Vec<&'static str> {
    match kind {
        ToolChainKind::Clang => vec!["clang", "llvm", "gcc"],
        ToolChainKind::Gcc => vec!["gcc"],
        ToolChainKind::Mingw => vec!["mingw", "gcc"],
        ToolChainKind::Msvc => vec!["msvc"],
        ToolChainKind::Other(_) => Vec::new(),
    }
}
