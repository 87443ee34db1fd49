//! Build script stamping the portal footer with version and commit.
//!
//! Environment variables (set by CI or fall back to defaults):
//! - PORTAL_VERSION: Version string (defaults to CARGO_PKG_VERSION)
//! - PORTAL_GIT_SHA: Git commit SHA (defaults to GITHUB_SHA, then git rev-parse)

use std::process::Command;

fn main() {
    let version = std::env::var("PORTAL_VERSION").unwrap_or_else(|_| {
        std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".into())
    });
    println!("cargo:rustc-env=PORTAL_VERSION={}", version);

    let git_sha = std::env::var("PORTAL_GIT_SHA")
        .ok()
        .or_else(|| {
            std::env::var("GITHUB_SHA")
                .ok()
                .map(|s| s.chars().take(7).collect())
        })
        .unwrap_or_else(get_git_sha);
    println!("cargo:rustc-env=PORTAL_GIT_SHA={}", git_sha);

    println!("cargo:rerun-if-env-changed=PORTAL_VERSION");
    println!("cargo:rerun-if-env-changed=PORTAL_GIT_SHA");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
}

fn get_git_sha() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| {
            if o.status.success() {
                String::from_utf8(o.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".into())
}
