use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");

    println!("cargo:rustc-env=TELEMPACK_BUILD_COMMIT={}", build_commit());
    println!("cargo:rustc-env=TELEMPACK_BUILD_DATE={}", build_date());
}

/// Short commit hash, preferring CI metadata over the local checkout.
fn build_commit() -> String {
    let ci_sha = env::var("GITHUB_SHA")
        .ok()
        .filter(|sha| !sha.is_empty())
        .map(|sha| sha.chars().take(7).collect::<String>());

    ci_sha
        .or_else(|| git_output(&["rev-parse", "--short=7", "HEAD"]))
        .unwrap_or_else(|| "unknown".to_string())
}

fn build_date() -> String {
    git_output(&["log", "-1", "--format=%cI"]).unwrap_or_else(|| "unknown".to_string())
}

fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
