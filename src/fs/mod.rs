pub mod log_tail;
pub mod state_file;

pub use log_tail::read_recent_logs;
pub use state_file::{read_state_file, LoopState};

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a text file that an external process owns and may not have created.
///
/// Returns `None` when the file is missing or cannot be read. Invalid UTF-8
/// is replaced rather than rejected.
pub(crate) fn read_optional(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            tracing::debug!("Treating unreadable {} as absent: {e}", path.display());
            None
        }
    }
}
