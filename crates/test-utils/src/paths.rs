//! Path utilities for locating workspace files and writing temporary data.

use std::io::Write;
use std::path::PathBuf;

/// Returns the workspace root directory.
///
/// This is determined by walking up from the current crate's manifest directory
/// until we find the workspace Cargo.toml.
pub fn workspace_root() -> PathBuf {
    // Start from the test-utils crate manifest dir
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// Returns the workspace-level `config/` directory.
pub fn config_dir() -> PathBuf {
    workspace_root().join("config")
}

/// Writes `contents` to a temporary `.csv` file.
///
/// The file is removed when the returned handle is dropped.
pub fn write_temp_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temporary CSV file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary CSV file");
    file.flush().expect("Failed to flush temporary CSV file");
    file
}
