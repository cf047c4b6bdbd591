use crate::error::{MoodZoneError, MzResult};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::debug;

/// Loads a data file as an ordered list of trimmed, non-blank lines.
///
/// A path that cannot be opened because it does not exist maps to
/// [`MoodZoneError::NotFound`]; every other IO failure stays an IO error.
/// The file handle closes on every exit path.
pub fn load_lines<P: AsRef<Path>>(path: P) -> MzResult<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            MoodZoneError::NotFound(path.to_path_buf())
        } else {
            MoodZoneError::Io(e)
        }
    })?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    debug!("Loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
