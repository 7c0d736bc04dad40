use crate::error::{LoadError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Load the URL list from a newline-separated file.
///
/// Lines are trimmed and blank lines dropped; order is preserved and
/// duplicates are kept.
pub fn load_urls_from_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let urls = parse_url_lines(&content);
    debug!("Loaded {} URL(s) from {}", urls.len(), path.display());
    Ok(urls)
}

pub fn parse_url_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
