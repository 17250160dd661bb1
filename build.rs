//! Build script for the units converter
//!
//! Embeds when and how the binary was built. Nothing is written to disk.

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=build.rs");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    println!("cargo:rustc-env=UNITS_CONVERTER_BUILD_TIMESTAMP={}", timestamp);

    // Both are always set by cargo for build scripts
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=UNITS_CONVERTER_BUILD_PROFILE={}", profile);
    println!("cargo:rustc-env=UNITS_CONVERTER_BUILD_TARGET={}", target);
}
