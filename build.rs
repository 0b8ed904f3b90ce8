//! Build script for the org-admin console
//!
//! Exposes build metadata to `org_admin_rs::build_info`.

use std::process::Command;

fn main() {
    let build_time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    println!("cargo:rustc-env=ORG_ADMIN_BUILD_TIME={}", build_time);

    let git_hash = run_and_trim("git", &["rev-parse", "--short", "HEAD"])
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=ORG_ADMIN_GIT_HASH={}", git_hash);

    let rust_version =
        run_and_trim("rustc", &["--version"]).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=ORG_ADMIN_RUST_VERSION={}", rust_version);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=Cargo.toml");
}

/// Run a command and return its trimmed stdout on success
fn run_and_trim(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;

    if output.status.success() {
        let text = String::from_utf8(output.stdout).ok()?;
        Some(text.trim().to_string())
    } else {
        None
    }
}
