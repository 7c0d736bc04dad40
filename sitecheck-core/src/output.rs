use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Append `url` and a newline to `path`, creating the file if needed.
///
/// The handle lives only for this call and is closed on every exit path.
pub fn append_reachable(path: &Path, url: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", url)?;
    file.flush()
}
