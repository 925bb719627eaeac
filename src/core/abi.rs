//! Target ABI descriptors.
//!
//! An [`Abi`] is the architecture/OS/flavor/word-width tuple that a
//! toolchain produces code for. Kits store it in the compact dashed form
//! used by IDE kit files, e.g. `x86-linux-generic-elf-64bit`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::KitError;

/// CPU architecture family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Architecture {
    Arm,
    X86,
    Itanium,
    Mips,
    PowerPc,
    Sh,
    #[default]
    Unknown,
}

impl Architecture {
    /// Get the architecture name as used in ABI strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::Arm => "arm",
            Architecture::X86 => "x86",
            Architecture::Itanium => "itanium",
            Architecture::Mips => "mips",
            Architecture::PowerPc => "ppc",
            Architecture::Sh => "sh",
            Architecture::Unknown => "unknown",
        }
    }

    /// Parse an architecture name. Unrecognised names map to `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "arm" => Architecture::Arm,
            "x86" => Architecture::X86,
            "itanium" => Architecture::Itanium,
            "mips" => Architecture::Mips,
            "ppc" | "powerpc" => Architecture::PowerPc,
            "sh" => Architecture::Sh,
            _ => Architecture::Unknown,
        }
    }
}

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Os {
    Bsd,
    Linux,
    Mac,
    Unix,
    Windows,
    #[default]
    Unknown,
}

impl Os {
    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Bsd => "bsd",
            Os::Linux => "linux",
            Os::Mac => "mac",
            Os::Unix => "unix",
            Os::Windows => "windows",
            Os::Unknown => "unknown",
        }
    }

    /// Parse an OS name. Unrecognised names map to `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "bsd" => Os::Bsd,
            "linux" => Os::Linux,
            "mac" | "macos" | "darwin" => Os::Mac,
            "unix" => Os::Unix,
            "windows" => Os::Windows,
            _ => Os::Unknown,
        }
    }
}

/// OS flavor. Flavors are only meaningful together with their [`Os`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OsFlavor {
    FreeBsd,
    NetBsd,
    OpenBsd,
    GenericBsd,
    AndroidLinux,
    GenericLinux,
    GenericMac,
    SolarisUnix,
    GenericUnix,
    WindowsMsvc2005,
    WindowsMsvc2008,
    WindowsMsvc2010,
    WindowsMsvc2012,
    WindowsMsvc2013,
    WindowsMsvc2015,
    WindowsMSys,
    WindowsCe,
    #[default]
    Unknown,
}

impl OsFlavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            OsFlavor::FreeBsd => "freebsd",
            OsFlavor::NetBsd => "netbsd",
            OsFlavor::OpenBsd => "openbsd",
            OsFlavor::AndroidLinux => "android",
            OsFlavor::SolarisUnix => "solaris",
            OsFlavor::GenericBsd
            | OsFlavor::GenericLinux
            | OsFlavor::GenericMac
            | OsFlavor::GenericUnix => "generic",
            OsFlavor::WindowsMsvc2005 => "msvc2005",
            OsFlavor::WindowsMsvc2008 => "msvc2008",
            OsFlavor::WindowsMsvc2010 => "msvc2010",
            OsFlavor::WindowsMsvc2012 => "msvc2012",
            OsFlavor::WindowsMsvc2013 => "msvc2013",
            OsFlavor::WindowsMsvc2015 => "msvc2015",
            OsFlavor::WindowsMSys => "msys",
            OsFlavor::WindowsCe => "ce",
            OsFlavor::Unknown => "unknown",
        }
    }

    /// Parse a flavor name in the context of an OS.
    ///
    /// `generic` resolves to the generic flavor of `os`. A flavor that does
    /// not belong to `os` maps to `Unknown`.
    pub fn parse(os: Os, s: &str) -> Self {
        match (os, s.to_ascii_lowercase().as_str()) {
            (Os::Bsd, "freebsd") => OsFlavor::FreeBsd,
            (Os::Bsd, "netbsd") => OsFlavor::NetBsd,
            (Os::Bsd, "openbsd") => OsFlavor::OpenBsd,
            (Os::Bsd, "generic") => OsFlavor::GenericBsd,
            (Os::Linux, "android") => OsFlavor::AndroidLinux,
            (Os::Linux, "generic") => OsFlavor::GenericLinux,
            (Os::Mac, "generic") => OsFlavor::GenericMac,
            (Os::Unix, "solaris") => OsFlavor::SolarisUnix,
            (Os::Unix, "generic") => OsFlavor::GenericUnix,
            (Os::Windows, "msvc2005") => OsFlavor::WindowsMsvc2005,
            (Os::Windows, "msvc2008") => OsFlavor::WindowsMsvc2008,
            (Os::Windows, "msvc2010") => OsFlavor::WindowsMsvc2010,
            (Os::Windows, "msvc2012") => OsFlavor::WindowsMsvc2012,
            (Os::Windows, "msvc2013") => OsFlavor::WindowsMsvc2013,
            (Os::Windows, "msvc2015") => OsFlavor::WindowsMsvc2015,
            (Os::Windows, "msys") => OsFlavor::WindowsMSys,
            (Os::Windows, "ce") => OsFlavor::WindowsCe,
            _ => OsFlavor::Unknown,
        }
    }
}

/// Target ABI of a toolchain.
///
/// Round-trips through its dashed string form so kit files can write
/// `abi = "arm-linux-android-elf-32bit"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Abi {
    pub architecture: Architecture,
    pub os: Os,
    pub os_flavor: OsFlavor,
    /// Word width in bits (32 or 64; 0 when unknown)
    pub word_width: u8,
}

impl Abi {
    pub fn new(architecture: Architecture, os: Os, os_flavor: OsFlavor, word_width: u8) -> Self {
        Abi {
            architecture,
            os,
            os_flavor,
            word_width,
        }
    }

    /// Whether the ABI targets an Apple platform.
    pub fn is_apple(&self) -> bool {
        self.os == Os::Mac
    }
}

impl FromStr for Abi {
    type Err = KitError;

    /// Parse `arch-os-flavor-format-width`.
    ///
    /// The binary format segment is accepted and ignored. Unknown segment
    /// values become `Unknown`; only a wrong segment count or an unreadable
    /// word width is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 5 {
            return Err(KitError::InvalidAbi {
                abi: s.to_string(),
                reason: format!("expected 5 dash-separated fields, found {}", parts.len()),
            });
        }

        let architecture = Architecture::parse(parts[0]);
        let os = Os::parse(parts[1]);
        let os_flavor = OsFlavor::parse(os, parts[2]);

        let width = parts[4].trim_end_matches("bit");
        let word_width = match width {
            "unknown" => 0,
            w => w.parse::<u8>().map_err(|_| KitError::InvalidAbi {
                abi: s.to_string(),
                reason: format!("invalid word width `{}`", parts[4]),
            })?,
        };

        Ok(Abi::new(architecture, os, os_flavor, word_width))
    }
}

impl TryFrom<String> for Abi {
    type Error = KitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Abi> for String {
    fn from(abi: Abi) -> Self {
        abi.to_string()
    }
}

impl fmt::Display for Abi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = match self.os {
            Os::Windows => "pe",
            Os::Mac => "mach_o",
            Os::Unknown => "unknown",
            _ => "elf",
        };
        let width = if self.word_width == 0 {
            "unknown".to_string()
        } else {
            format!("{}bit", self.word_width)
        };
        write!(
            f,
            "{}-{}-{}-{}-{}",
            self.architecture.as_str(),
            self.os.as_str(),
            self.os_flavor.as_str(),
            format,
            width
        )
    }
}
