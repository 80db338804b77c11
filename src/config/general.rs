//! The general configuration settings for cds.
//!
//! This module defines the [General] struct for deserializing
//! general settings from the cds.toml configuration file
//! and the [InternalGeneral] struct for internal use within cds.

use crate::core::SnapshotOptions;

use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    dirs_first: bool,
    current_dir_entry: bool,
    parent_dir_entry: bool,
    push_to_history: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            dirs_first: true,
            current_dir_entry: true,
            parent_dir_entry: true,
            push_to_history: false,
        }
    }
}

#[derive(Debug)]
pub struct InternalGeneral {
    snapshot: SnapshotOptions,
    push_to_history: bool,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        Self {
            snapshot: SnapshotOptions {
                dirs_first: g.dirs_first,
                current_dir_entry: g.current_dir_entry,
                parent_dir_entry: g.parent_dir_entry,
            },
            push_to_history: g.push_to_history,
        }
    }
}

impl InternalGeneral {
    #[inline]
    pub fn snapshot(&self) -> &SnapshotOptions {
        &self.snapshot
    }

    #[inline]
    pub fn dirs_first(&self) -> bool {
        self.snapshot.dirs_first
    }

    /// Append a `history -s` call to emitted file commands.
    #[inline]
    pub fn push_to_history(&self) -> bool {
        self.push_to_history
    }
}
