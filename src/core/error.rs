//! Error types for cds.
//!
//! [MetaError] is what a [crate::core::MetadataProvider] reports for a single syscall.
//! [SurfError] is what a directory reload reports to the state machine. Both list and
//! symlink failures are fatal for the session: they travel up through the event loop
//! and are printed by `main` after the terminal is restored.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure of a single metadata lookup.
///
/// Not-found and permission-denied are kept apart from the remaining I/O errors so
/// callers can tell a missing path from an unreadable one.
#[derive(Debug, Error)]
pub enum MetaError {
    #[error("{}: no such file or directory", .path.display())]
    NotFound { path: PathBuf },

    #[error("{}: permission denied", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MetaError {
    /// Classifies an [io::Error] raised while accessing `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => MetaError::NotFound { path },
            io::ErrorKind::PermissionDenied => MetaError::PermissionDenied { path },
            _ => MetaError::Io { path, source: err },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            MetaError::NotFound { path }
            | MetaError::PermissionDenied { path }
            | MetaError::Io { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, MetaError::NotFound { .. })
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, MetaError::PermissionDenied { .. })
    }
}

/// Failure of a directory snapshot.
#[derive(Debug, Error)]
pub enum SurfError {
    /// The directory itself could not be resolved or listed.
    #[error("cannot list directory {}: {source}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: MetaError,
    },

    /// A child symlink could not be read, resolved or stat'ed.
    #[error("cannot resolve symlink {}: {source}", .path.display())]
    Symlink {
        path: PathBuf,
        #[source]
        source: MetaError,
    },
}

impl SurfError {
    pub(crate) fn list(path: &Path, source: MetaError) -> Self {
        SurfError::List {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn symlink(path: &Path, source: MetaError) -> Self {
        SurfError::Symlink {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SurfError>;
