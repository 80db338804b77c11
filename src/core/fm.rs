//! Directory snapshots for cds.
//!
//! Provides the [Entry] struct which is used throughout cds and [load_dir], which turns one
//! directory into an ordered [DirectoryView] through a [MetadataProvider].

use crate::core::error::{Result, SurfError};
use crate::core::formatter::{format_attributes, format_file_size, format_file_time};
use crate::core::meta::{MetadataProvider, Stat, StatKind};

use unicode_width::UnicodeWidthStr;

use std::ops::Range;
use std::path::{Path, PathBuf};

pub const CURRENT_MARKER: &str = "./";
pub const PARENT_MARKER: &str = "../";

/// What a row of the listing stands for.
///
/// The two markers are synthetic rows that do not come from the directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    CurrentMarker,
    ParentMarker,
    File,
    Directory,
    Symlink,
    Device,
}

/// Where a symlink entry points to.
#[derive(Debug, Clone, PartialEq)]
pub struct SymlinkTarget {
    link: PathBuf,
    kind: StatKind,
    executable: bool,
}

impl SymlinkTarget {
    pub fn new(link: PathBuf, kind: StatKind, executable: bool) -> Self {
        Self {
            link,
            kind,
            executable,
        }
    }

    /// Literal link text as stored in the filesystem.
    #[inline]
    pub fn link(&self) -> &Path {
        &self.link
    }

    #[inline]
    pub fn kind(&self) -> StatKind {
        self.kind
    }

    #[inline]
    pub fn is_executable(&self) -> bool {
        self.executable
    }
}

/// Preformatted columns of the details view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDetails {
    pub perms: String,
    pub owner: String,
    pub group: String,
    pub size: String,
    pub modified: String,
}

impl EntryDetails {
    fn from_stat(fs: &dyn MetadataProvider, stat: &Stat) -> Self {
        Self {
            perms: format_attributes(stat),
            owner: fs.owner(stat.uid),
            group: fs.group(stat.gid),
            size: format_file_size(stat.size),
            modified: format_file_time(stat.modified),
        }
    }
}

/// A single row in a directory listing, real or synthetic.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    name: String,
    kind: EntryKind,
    symlink: Option<SymlinkTarget>,
    executable: bool,
    details: EntryDetails,
    selected: bool,
    match_span: Option<Range<usize>>,
}

impl Entry {
    /// Creates an entry without details. Directory names get their trailing `/`.
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        let mut name = name.into();
        if kind == EntryKind::Directory && !name.ends_with('/') {
            name.push('/');
        }
        Self {
            name,
            kind,
            symlink: None,
            executable: false,
            details: EntryDetails::default(),
            selected: false,
            match_span: None,
        }
    }

    pub fn current_marker() -> Self {
        Self::new(CURRENT_MARKER, EntryKind::CurrentMarker)
    }

    pub fn parent_marker(details: EntryDetails) -> Self {
        Self::new(PARENT_MARKER, EntryKind::ParentMarker).with_details(details)
    }

    pub fn with_details(mut self, details: EntryDetails) -> Self {
        self.details = details;
        self
    }

    pub fn with_executable(mut self, executable: bool) -> Self {
        self.executable = executable;
        self
    }

    /// Attaches a resolved target. A target that is a directory adds the trailing `/`.
    pub fn with_symlink(mut self, target: SymlinkTarget) -> Self {
        if target.kind() == StatKind::Directory && !self.name.ends_with('/') {
            self.name.push('/');
        }
        self.executable = target.kind() == StatKind::File && target.is_executable();
        self.symlink = Some(target);
        self
    }

    pub(crate) fn with_match_span(mut self, span: Range<usize>) -> Self {
        self.match_span = Some(span);
        self
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The on-disk name, without the trailing `/` of directories.
    #[inline]
    pub fn file_name(&self) -> &str {
        self.name.strip_suffix('/').unwrap_or(&self.name)
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn symlink(&self) -> Option<&SymlinkTarget> {
        self.symlink.as_ref()
    }

    #[inline]
    pub fn details(&self) -> &EntryDetails {
        &self.details
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    #[inline]
    pub fn match_span(&self) -> Option<&Range<usize>> {
        self.match_span.as_ref()
    }

    #[inline]
    pub fn is_synthetic(&self) -> bool {
        matches!(self.kind, EntryKind::CurrentMarker | EntryKind::ParentMarker)
    }

    /// Real directories and symlinks that resolve to one.
    pub fn is_dir_like(&self) -> bool {
        match self.kind {
            EntryKind::Directory => true,
            EntryKind::Symlink => self
                .symlink
                .as_ref()
                .is_some_and(|t| t.kind() == StatKind::Directory),
            _ => false,
        }
    }

    #[inline]
    pub fn is_executable(&self) -> bool {
        self.executable
    }

    #[inline]
    pub fn display_width(&self) -> usize {
        self.name.width()
    }

    pub(crate) fn toggle_selected(&mut self) {
        if !self.is_synthetic() {
            self.selected = !self.selected;
        }
    }
}

/// The ordered contents of one directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryView {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl DirectoryView {
    pub fn new(path: PathBuf, entries: Vec<Entry>) -> Self {
        Self { path, entries }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub(crate) fn entries_mut(&mut self) -> &mut [Entry] {
        &mut self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry whose on-disk name is `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| !e.is_synthetic() && e.file_name() == name)
    }
}

/// Snapshot knobs taken from the `[general]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotOptions {
    pub dirs_first: bool,
    pub current_dir_entry: bool,
    pub parent_dir_entry: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            dirs_first: true,
            current_dir_entry: true,
            parent_dir_entry: true,
        }
    }
}

/// Reads `path` into a [DirectoryView].
///
/// The path is resolved through symlinks before listing. Children keep the order the
/// filesystem returns them in, except that with `dirs_first` directory-like entries move
/// ahead of the rest. Synthetic markers always come first and `../` is omitted at the root.
///
/// # Errors
/// [SurfError::List] if the directory cannot be resolved or listed, and
/// [SurfError::Symlink] if any child symlink cannot be followed.
pub fn load_dir(
    fs: &dyn MetadataProvider,
    path: &Path,
    opts: &SnapshotOptions,
) -> Result<DirectoryView> {
    let listing_dir = fs.resolve(path).map_err(|e| SurfError::list(path, e))?;
    let names = fs
        .list(&listing_dir)
        .map_err(|e| SurfError::list(path, e))?;

    let mut markers = Vec::with_capacity(2);
    if opts.current_dir_entry {
        markers.push(Entry::current_marker());
    }
    if opts.parent_dir_entry
        && let Some(parent) = path.parent()
    {
        let stat = fs.stat(parent).map_err(|e| SurfError::list(parent, e))?;
        let details = EntryDetails::from_stat(fs, &stat);
        markers.push(Entry::parent_marker(details));
    }

    let mut dirs = Vec::new();
    let mut others = Vec::with_capacity(names.len());

    for os_name in names {
        let child = listing_dir.join(&os_name);
        let name = os_name.to_string_lossy().into_owned();
        let stat = fs.lstat(&child).map_err(|e| SurfError::list(&child, e))?;
        let details = EntryDetails::from_stat(fs, &stat);

        let entry = match stat.kind {
            StatKind::Directory => Entry::new(name, EntryKind::Directory),
            StatKind::Device { .. } => Entry::new(name, EntryKind::Device),
            StatKind::File => Entry::new(name, EntryKind::File).with_executable(stat.is_executable()),
            StatKind::Symlink => {
                let target = resolve_symlink(fs, &listing_dir, &child)?;
                Entry::new(name, EntryKind::Symlink).with_symlink(target)
            }
        }
        .with_details(details);

        if opts.dirs_first && entry.is_dir_like() {
            dirs.push(entry);
        } else {
            others.push(entry);
        }
    }

    let mut entries = markers;
    entries.reserve(dirs.len() + others.len());
    entries.append(&mut dirs);
    entries.append(&mut others);

    log::debug!("loaded {} ({} entries)", path.display(), entries.len());
    Ok(DirectoryView::new(path.to_path_buf(), entries))
}

fn resolve_symlink(
    fs: &dyn MetadataProvider,
    listing_dir: &Path,
    child: &Path,
) -> Result<SymlinkTarget> {
    let err = |e| SurfError::symlink(child, e);
    let link = fs.read_link(child).map_err(err)?;
    let real = fs.resolve(child).map_err(err)?;
    let real = if real.is_relative() {
        listing_dir.join(real)
    } else {
        real
    };
    let target = fs.stat(&real).map_err(err)?;
    Ok(SymlinkTarget::new(link, target.kind, target.is_executable()))
}
