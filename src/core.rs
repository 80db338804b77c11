//! Core logic for cds.
//!
//! This module contains the non-UI "engine" pieces used by the application:
//! - [meta]: the [MetadataProvider] boundary to the filesystem and its std implementation.
//! - [fm]: directory snapshots (see [load_dir], [Entry], [DirectoryView]).
//! - [formatter]: formatting helpers for permissions, sizes and times.
//! - [layout]: the grid layout of the listing.
//! - [search]: incremental search filtering and ranking.
//! - [error]: error types shared by the above.
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui event loop.

pub mod error;
pub mod fm;
pub mod formatter;
pub mod layout;
pub mod meta;
pub mod search;
pub mod terminal;

pub use error::{MetaError, SurfError};
pub use fm::{
    CURRENT_MARKER, DirectoryView, Entry, EntryDetails, EntryKind, PARENT_MARKER,
    SnapshotOptions, SymlinkTarget, load_dir,
};
pub use formatter::{format_attributes, format_file_size, format_file_time, sanitize_to_exact_width};
pub use layout::{Grid, layout};
pub use meta::{FsMetadata, MetadataProvider, Stat, StatKind};
