// Shared build script helpers for the smokecheck crates.
// Include this in build.rs files with: include!("../build_common.rs");
//
// Required imports in the including file:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Render a crate's README.md into `OUT_DIR/README_GENERATED.md` for rustdoc.
///
/// Transformations:
/// 1. Strip 'src/' prefix from links so rustdoc can resolve modules
/// 2. Strip '.rs' extension so links go to modules, not files
/// 3. Convert relative README links (../../README.md) to absolute repo URLs
///
/// A crate without a README still gets an (empty) generated file so the
/// `include_str!` in its lib.rs always resolves.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let out_dir = env::var("OUT_DIR").expect("cargo always sets OUT_DIR for build scripts");
    let dest_path = Path::new(&out_dir).join("README_GENERATED.md");

    let readme_path = Path::new(crate_dir).join("README.md");
    let Ok(content) = fs::read_to_string(&readme_path) else {
        fs::write(dest_path, "").expect("failed to write README_GENERATED.md");
        return;
    };

    let mut rustdoc_content = content.replace("](src/", "](").replace(".rs)", ")");

    if let Some(url) = get_workspace_repo_url(crate_dir) {
        rustdoc_content = rustdoc_content.replace("](../../README.md", &format!("]({url}"));
    }

    fs::write(dest_path, rustdoc_content).expect("failed to write README_GENERATED.md");
}

/// Extract the repository URL from the workspace Cargo.toml.
/// Returns None if the file can't be read or doesn't contain a repository field.
fn get_workspace_repo_url(crate_dir: &str) -> Option<String> {
    let workspace_toml = Path::new(crate_dir)
        .parent()? // crates/
        .parent()? // workspace root
        .join("Cargo.toml");

    let content = fs::read_to_string(workspace_toml).ok()?;

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with("repository")
            && line.contains('=')
            && let Some(start) = line.find('"')
            && let Some(end) = line.rfind('"')
            && start < end
        {
            return Some(line[start + 1..end].to_string());
        }
    }
    None
}
