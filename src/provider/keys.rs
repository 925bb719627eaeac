//! Property names understood by qbs.

pub const QBS_SYSROOT: &str = "qbs.sysroot";
pub const QBS_ARCHITECTURE: &str = "qbs.architecture";
pub const QBS_TARGETOS: &str = "qbs.targetOS";
pub const QBS_TOOLCHAIN: &str = "qbs.toolchain";

pub const CPP_TOOLCHAINPATH: &str = "cpp.toolchainInstallPath";
pub const CPP_TOOLCHAINPREFIX: &str = "cpp.toolchainPrefix";
pub const CPP_COMPILERNAME: &str = "cpp.compilerName";
pub const CPP_LINKERNAME: &str = "cpp.linkerName";
pub const CPP_PLATFORMCFLAGS: &str = "cpp.platformCFlags";
pub const CPP_PLATFORMCXXFLAGS: &str = "cpp.platformCxxFlags";

/// Xcode SDK name, e.g. `iphoneos8.1`
pub const CPP_XCODESDKNAME: &str = "cpp.xcodeSdkName";
pub const CPP_XCODESDKVERSION: &str = "cpp.xcodeSdkVersion";
