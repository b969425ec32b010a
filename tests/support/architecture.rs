//! Source-tree scanning for layer and module-layout contracts.

use std::fs;
use std::path::{Path, PathBuf};

/// One offending source line.
#[derive(Debug)]
pub struct Hit {
    pub file: String,
    pub line: usize,
    pub text: String,
}

/// Line prefixes a `mod.rs` may contain besides blanks and comments.
const EXPORT_PREFIXES: [&str; 4] = ["pub mod ", "mod ", "pub use ", "#[cfg"];

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn display(path: &Path) -> String {
    let root = manifest_dir();
    path.strip_prefix(&root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Every `.rs` file under `dir`, sorted, with its contents.
fn rust_sources(dir: &str) -> Vec<(PathBuf, String)> {
    let mut pending = vec![manifest_dir().join(dir)];
    let mut files = Vec::new();

    while let Some(current) = pending.pop() {
        let entries = fs::read_dir(&current)
            .unwrap_or_else(|e| panic!("cannot list {}: {e}", current.display()));
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
    }

    files.sort();
    files
        .into_iter()
        .map(|path| {
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
            (path, content)
        })
        .collect()
}

/// Lines under `dir` that contain any of `needles`.
pub fn grep(dir: &str, needles: &[&str]) -> Vec<Hit> {
    rust_sources(dir)
        .into_iter()
        .flat_map(|(path, content)| {
            let file = display(&path);
            content
                .lines()
                .enumerate()
                .filter(|(_, text)| needles.iter().any(|n| text.contains(n)))
                .map(|(idx, text)| Hit {
                    file: file.clone(),
                    line: idx + 1,
                    text: text.to_string(),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Lines in `mod.rs` files under `dir` that are neither module
/// declarations, re-exports, cfg attributes nor comments.
pub fn mod_rs_violations(dir: &str) -> Vec<Hit> {
    rust_sources(dir)
        .into_iter()
        .filter(|(path, _)| path.file_name().is_some_and(|name| name == "mod.rs"))
        .flat_map(|(path, content)| {
            let file = display(&path);
            content
                .lines()
                .enumerate()
                .filter(|(_, text)| {
                    let trimmed = text.trim();
                    !(trimmed.is_empty()
                        || trimmed.starts_with("//")
                        || EXPORT_PREFIXES.iter().any(|p| trimmed.starts_with(p)))
                })
                .map(|(idx, text)| Hit {
                    file: file.clone(),
                    line: idx + 1,
                    text: text.to_string(),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn exists(relative: &str) -> bool {
    manifest_dir().join(relative).exists()
}

pub fn source(relative: &str) -> String {
    fs::read_to_string(manifest_dir().join(relative))
        .unwrap_or_else(|e| panic!("cannot read {relative}: {e}"))
}
