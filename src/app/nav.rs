//! Navigation state and file list logic for cds.
//!
//! Holds the current directory snapshot, the search query with its filtered results,
//! and the cursor position remembered for every directory visited.

use crate::core::search;
use crate::core::{DirectoryView, Entry};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Holds the listing and search state of the surfer.
#[derive(Debug, Default)]
pub struct NavState {
    view: DirectoryView,
    results: Vec<Entry>,
    query: String,
    positions: HashMap<PathBuf, usize>,
}

impl NavState {
    pub fn new(view: DirectoryView) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn current_dir(&self) -> &Path {
        self.view.path()
    }

    #[inline]
    pub fn view(&self) -> &DirectoryView {
        &self.view
    }

    #[inline]
    pub fn results(&self) -> &[Entry] {
        &self.results
    }

    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn position_for(&self, path: &Path) -> Option<usize> {
        self.positions.get(path).copied()
    }

    // Navigation functions

    /// Saves the cursor index for the current directory.
    pub fn save_position(&mut self, index: usize) {
        if !self.view.is_empty() {
            self.positions
                .insert(self.view.path().to_path_buf(), index);
        }
    }

    /// Replaces the snapshot. Any search is dropped.
    pub fn set_view(&mut self, view: DirectoryView) {
        self.view = view;
        self.clear_query();
    }

    pub fn toggle_selected(&mut self, index: usize) {
        if let Some(entry) = self.view.entries_mut().get_mut(index) {
            entry.toggle_selected();
        }
    }

    // Search functions

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    /// Removes the last query character. Returns `true` if the query is now empty.
    pub fn pop_query(&mut self) -> bool {
        self.query.pop();
        if self.query.is_empty() {
            self.results.clear();
            return true;
        }
        self.refilter();
        false
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.results.clear();
    }

    fn refilter(&mut self) {
        self.results = search::filter(&self.query, self.view.entries());
    }
}
