use std::{
    env, fs,
    path::{Path, PathBuf},
};

use vergen_gix::{Emitter, GixBuilder, RustcBuilder};

include!("../build_common.rs");

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    process_readme_for_rustdoc(&manifest_dir);

    emit_target_triple();
    emit_rustc_info();
    emit_git_info(&manifest_dir);
}

/// The triple the binary is compiled for, e.g. `x86_64-unknown-linux-gnu`.
fn emit_target_triple() {
    let target = env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=SMOKECHECK_TARGET={target}");
}

/// Semver, commit hash and commit date of the compiler building this crate.
///
/// Falls back to `unknown` values rather than failing the build.
fn emit_rustc_info() {
    let rustc = match RustcBuilder::default()
        .semver(true)
        .commit_hash(true)
        .commit_date(true)
        .build()
    {
        Ok(rustc) => rustc,
        Err(err) => {
            println!("cargo:warning=smokecheck-build-info: vergen rustc config failed: {err}");
            emit_rustc_fallbacks();
            return;
        }
    };

    if let Err(err) = Emitter::default()
        .add_instructions(&rustc)
        .and_then(|e| e.emit())
    {
        println!("cargo:warning=smokecheck-build-info: vergen rustc emit failed: {err}");
        emit_rustc_fallbacks();
    }
}

fn emit_rustc_fallbacks() {
    println!("cargo:rustc-env=VERGEN_RUSTC_SEMVER=unknown");
    println!("cargo:rustc-env=VERGEN_RUSTC_COMMIT_HASH=unknown");
    println!("cargo:rustc-env=VERGEN_RUSTC_COMMIT_DATE=unknown");
}

fn emit_git_info(manifest_dir: &str) {
    // Packagers can provide a SHA without any git probing.
    println!("cargo:rerun-if-env-changed=SMOKECHECK_BUILD_SHA_SHORT");

    if let Some(override_sha) = env::var("SMOKECHECK_BUILD_SHA_SHORT")
        .ok()
        .and_then(|s| normalize_sha_short(&s))
    {
        emit_git_fallbacks(Some(&override_sha));
        return;
    }

    let Some(repo_root) = find_repo_root(Path::new(manifest_dir)) else {
        emit_git_fallbacks(None);
        return;
    };

    let git = match GixBuilder::default()
        .repo_path(Some(repo_root))
        .sha(true)
        .dirty(false)
        .build()
    {
        Ok(git) => git,
        Err(err) => {
            println!("cargo:warning=smokecheck-build-info: vergen-gix config failed: {err}");
            emit_git_fallbacks(None);
            return;
        }
    };

    if let Err(err) = Emitter::default()
        .add_instructions(&git)
        .and_then(|e| e.emit())
    {
        println!("cargo:warning=smokecheck-build-info: vergen-gix emit failed: {err}");
        emit_git_fallbacks(None);
    }
}

fn emit_git_fallbacks(sha_short: Option<&str>) {
    // Read by the crate via `env!()`, so these must always be set.
    let sha = sha_short.unwrap_or("unknown");
    println!("cargo:rustc-env=VERGEN_GIT_SHA={sha}");
}

fn normalize_sha_short(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let candidate = trimmed.get(..7)?;

    if candidate.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(candidate.to_string())
    } else {
        None
    }
}

fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        if dir.join(".git").exists() {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}
