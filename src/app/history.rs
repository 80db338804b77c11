//! Single-slot path history for the go-to-previous action.

use std::path::{Path, PathBuf};

/// Remembers the last directory that was left.
///
/// Every successful directory change records the directory being left, including the
/// go-to-previous jump itself, so two jumps in a row return to where they started.
#[derive(Debug, Clone)]
pub struct PathHistory {
    previous: PathBuf,
}

impl PathHistory {
    pub fn new(start: PathBuf) -> Self {
        Self { previous: start }
    }

    #[inline]
    pub fn previous(&self) -> &Path {
        &self.previous
    }

    pub fn record(&mut self, left: &Path) {
        self.previous = left.to_path_buf();
    }
}
