//! Build metadata
//!
//! Version from the manifest plus the timestamp, profile and target the
//! build script embedded.

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// When the build script last ran, ISO 8601 UTC
pub const BUILD_TIMESTAMP: &str = match option_env!("UNITS_CONVERTER_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Cargo profile ("debug" or "release")
pub const BUILD_PROFILE: &str = match option_env!("UNITS_CONVERTER_BUILD_PROFILE") {
    Some(s) => s,
    None => "unknown",
};

/// Target triple the binary was compiled for
pub const BUILD_TARGET: &str = match option_env!("UNITS_CONVERTER_BUILD_TARGET") {
    Some(s) => s,
    None => "unknown",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_timestamp: &'static str,
    pub profile: &'static str,
    pub target: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_timestamp: BUILD_TIMESTAMP,
            profile: BUILD_PROFILE,
            target: BUILD_TARGET,
        }
    }

    /// One-line description, e.g. "units-converter 0.2.0 (release, x86_64-unknown-linux-gnu)"
    pub fn summary(&self) -> String {
        format!("{} {} ({}, {})", self.name, self.version, self.profile, self.target)
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("Units Converter v{}", info.version);
    eprintln!("  {} built {}", info.summary(), info.build_timestamp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_uses_package_metadata() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "units-converter");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_build_script_metadata_embedded() {
        let info = BuildInfo::current();
        assert_ne!(info.build_timestamp, "unknown");
        assert!(info.build_timestamp.ends_with('Z'));
        assert_ne!(info.target, "unknown");
    }

    #[test]
    fn test_summary() {
        let info = BuildInfo {
            name: "units-converter",
            version: "0.2.0",
            build_timestamp: "2026-10-16T00:00:00Z",
            profile: "release",
            target: "x86_64-unknown-linux-gnu",
        };
        assert_eq!(
            info.summary(),
            "units-converter 0.2.0 (release, x86_64-unknown-linux-gnu)"
        );
    }
}
