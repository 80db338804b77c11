//! Filesystem metadata access for cds.
//!
//! Every blocking filesystem call made while browsing goes through the
//! [MetadataProvider] trait. [FsMetadata] is the real implementation; tests use the
//! in-memory provider from the `testing` submodule.

use crate::core::error::MetaError;

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// What kind of filesystem object a [Stat] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    File,
    Directory,
    Symlink,
    /// Block or character device.
    Device { block: bool },
}

/// The subset of file metadata cds needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub kind: StatKind,
    /// Unix permission bits (`0o777` part of the mode). Zero where unavailable.
    pub mode: u32,
    pub size: u64,
    pub modified: Option<SystemTime>,
    pub uid: u32,
    pub gid: u32,
}

impl Stat {
    pub(crate) const EXEC_FLAG: u32 = 0o111;

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == StatKind::Directory
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.kind == StatKind::Symlink
    }

    #[inline]
    pub fn is_device(&self) -> bool {
        matches!(self.kind, StatKind::Device { .. })
    }

    #[inline]
    pub fn is_executable(&self) -> bool {
        self.mode & Self::EXEC_FLAG != 0
    }
}

/// Boundary between the navigation engine and the operating system.
///
/// Implementations must report not-found, permission-denied and other I/O failures
/// as distinct [MetaError] variants.
pub trait MetadataProvider {
    /// Child names of a directory, in the order the filesystem returns them.
    fn list(&self, dir: &Path) -> Result<Vec<OsString>, MetaError>;

    /// Metadata following symlinks.
    fn stat(&self, path: &Path) -> Result<Stat, MetaError>;

    /// Metadata of the path itself, symlinks not followed.
    fn lstat(&self, path: &Path) -> Result<Stat, MetaError>;

    fn owner(&self, uid: u32) -> String;

    fn group(&self, gid: u32) -> String;

    /// Literal text stored in a symlink.
    fn read_link(&self, path: &Path) -> Result<PathBuf, MetaError>;

    /// Final real path with every symlink resolved.
    fn resolve(&self, path: &Path) -> Result<PathBuf, MetaError>;
}

/// [MetadataProvider] backed by `std::fs`.
///
/// User and group names are cached per id since a listing usually repeats the same
/// few owners.
#[derive(Default)]
pub struct FsMetadata {
    owners: RefCell<HashMap<u32, String>>,
    groups: RefCell<HashMap<u32, String>>,
}

impl FsMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    fn to_stat(md: &fs::Metadata) -> Stat {
        let ft = md.file_type();
        let kind = if ft.is_symlink() {
            StatKind::Symlink
        } else if ft.is_dir() {
            StatKind::Directory
        } else if let Some(device) = device_kind(&ft) {
            device
        } else {
            StatKind::File
        };

        #[cfg(unix)]
        let (mode, uid, gid) = {
            use std::os::unix::fs::MetadataExt;
            (md.mode() & 0o7777, md.uid(), md.gid())
        };
        #[cfg(not(unix))]
        let (mode, uid, gid) = (0u32, 0u32, 0u32);

        Stat {
            kind,
            mode,
            size: md.len(),
            modified: md.modified().ok(),
            uid,
            gid,
        }
    }
}

#[cfg(unix)]
fn device_kind(ft: &fs::FileType) -> Option<StatKind> {
    use std::os::unix::fs::FileTypeExt;
    if ft.is_block_device() {
        Some(StatKind::Device { block: true })
    } else if ft.is_char_device() {
        Some(StatKind::Device { block: false })
    } else {
        None
    }
}

#[cfg(not(unix))]
fn device_kind(_ft: &fs::FileType) -> Option<StatKind> {
    None
}

impl MetadataProvider for FsMetadata {
    fn list(&self, dir: &Path) -> Result<Vec<OsString>, MetaError> {
        let rd = fs::read_dir(dir).map_err(|e| MetaError::from_io(dir, e))?;
        let mut names = Vec::with_capacity(64);
        for entry in rd {
            let entry = entry.map_err(|e| MetaError::from_io(dir, e))?;
            names.push(entry.file_name());
        }
        Ok(names)
    }

    fn stat(&self, path: &Path) -> Result<Stat, MetaError> {
        fs::metadata(path)
            .map(|md| Self::to_stat(&md))
            .map_err(|e| MetaError::from_io(path, e))
    }

    fn lstat(&self, path: &Path) -> Result<Stat, MetaError> {
        fs::symlink_metadata(path)
            .map(|md| Self::to_stat(&md))
            .map_err(|e| MetaError::from_io(path, e))
    }

    fn owner(&self, uid: u32) -> String {
        self.owners
            .borrow_mut()
            .entry(uid)
            .or_insert_with(|| lookup_user(uid))
            .clone()
    }

    fn group(&self, gid: u32) -> String {
        self.groups
            .borrow_mut()
            .entry(gid)
            .or_insert_with(|| lookup_group(gid))
            .clone()
    }

    fn read_link(&self, path: &Path) -> Result<PathBuf, MetaError> {
        fs::read_link(path).map_err(|e| MetaError::from_io(path, e))
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf, MetaError> {
        fs::canonicalize(path).map_err(|e| MetaError::from_io(path, e))
    }
}

#[cfg(unix)]
fn lookup_user(uid: u32) -> String {
    uzers::get_user_by_uid(uid)
        .map(|u| u.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| uid.to_string())
}

#[cfg(unix)]
fn lookup_group(gid: u32) -> String {
    uzers::get_group_by_gid(gid)
        .map(|g| g.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| gid.to_string())
}

#[cfg(not(unix))]
fn lookup_user(_uid: u32) -> String {
    "-".to_string()
}

#[cfg(not(unix))]
fn lookup_group(_gid: u32) -> String {
    "-".to_string()
}
