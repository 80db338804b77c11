//! Application State and main controller module for cds.
//!
//! This module defines the overall [AppState] struct, which holds all major application
//! information and passes it to the renderer and the terminal loop:
//! - Configuration and the keymap built from it
//! - The metadata provider every directory load goes through
//! - Navigation, search and history state
//! - Cursor, viewport and the derived grid layout
//!
//! Key handling per mode lives in [crate::app::handlers].

use crate::app::cursor::Cursor;
use crate::app::history::PathHistory;
use crate::app::keymap::Keymap;
use crate::app::nav::NavState;
use crate::config::Config;
use crate::core::error::Result;
use crate::core::{DirectoryView, Entry, FsMetadata, Grid, MetadataProvider, layout, load_dir};
use crate::utils::{clean_path, current_username, get_home, resolve_input_path, shell_quote};

use crossterm::event::KeyEvent;

use std::path::{Path, PathBuf};

/// Enumeration for each individual keypress result processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeypressResult {
    /// The key meant nothing in the current mode.
    Continue,
    Consumed,
    /// Leave without printing anything.
    Quit,
    /// Leave and print the command for the shell.
    QuitWithCommand(String),
}

/// Input mode of the surfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browse,
    Search,
    PathEntry,
}

/// Outcome of activating the entry under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The active list is empty.
    NothingSelected,
    /// A directory was entered.
    Stay,
    Exit(String),
}

/// Main struct which holds the central application state of cds
pub struct AppState<'a> {
    pub(super) config: &'a Config,
    pub(super) keymap: Keymap,
    pub(super) fs: Box<dyn MetadataProvider>,

    pub(super) mode: Mode,
    pub(super) nav: NavState,
    pub(super) history: PathHistory,
    pub(super) cursor: Cursor,

    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) grid: Grid,
    pub(super) show_details: bool,

    pub(super) path_input: String,
    pub(super) home: PathBuf,
    pub(super) username: String,
}

impl<'a> AppState<'a> {
    /// Opens `start` on the real filesystem.
    pub fn new(config: &'a Config, start: &Path) -> Result<Self> {
        Self::with_provider(config, Box::new(FsMetadata::new()), start, get_home())
    }

    pub fn with_provider(
        config: &'a Config,
        fs: Box<dyn MetadataProvider>,
        start: &Path,
        home: PathBuf,
    ) -> Result<Self> {
        let start = clean_path(start);
        let view = load_dir(fs.as_ref(), &start, config.general().snapshot())?;

        let mut app = Self {
            config,
            keymap: Keymap::from_config(config),
            fs,
            mode: Mode::Browse,
            nav: NavState::new(view),
            history: PathHistory::new(start),
            cursor: Cursor::default(),
            width: 80,
            height: 24,
            grid: Grid::default(),
            show_details: config.display().show_details(),
            path_input: String::new(),
            home,
            username: current_username(),
        };
        app.relayout();
        Ok(app)
    }

    // Getters/ accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    #[inline]
    pub fn current_dir(&self) -> &Path {
        self.nav.current_dir()
    }

    #[inline]
    pub fn previous_dir(&self) -> &Path {
        self.history.previous()
    }

    #[inline]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn show_details(&self) -> bool {
        self.show_details
    }

    #[inline]
    pub fn path_input(&self) -> &str {
        &self.path_input
    }

    #[inline]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The list the cursor moves over: search results while searching, the listing otherwise.
    pub fn active_items(&self) -> &[Entry] {
        match self.mode {
            Mode::Search => self.nav.results(),
            Mode::Browse | Mode::PathEntry => self.nav.view().entries(),
        }
    }

    pub fn entry_under_cursor(&self) -> Option<&Entry> {
        self.active_items().get(self.cursor.index())
    }

    /// Whether the path-entry buffer names an existing directory.
    pub fn path_input_valid(&self) -> bool {
        if self.path_input.trim().is_empty() {
            return false;
        }
        let target = resolve_input_path(&self.path_input, self.current_dir(), &self.home);
        self.fs.stat(&target).is_ok_and(|st| st.is_dir())
    }

    // Event entry points

    /// Central key handler. Errors are fatal directory loads.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> Result<KeypressResult> {
        let action = self.keymap.lookup(key);
        match self.mode {
            Mode::Browse => self.handle_browse(key, action),
            Mode::Search => self.handle_search(key, action),
            Mode::PathEntry => self.handle_path_entry(key, action),
        }
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width as usize;
        self.height = height as usize;
        self.relayout();
    }

    // Layout

    /// Recomputes the grid for the active items and clamps the cursor into it.
    pub(super) fn relayout(&mut self) {
        let single_column = self.show_details || self.mode == Mode::Search;
        let widths: Vec<usize> = self
            .active_items()
            .iter()
            .map(Entry::display_width)
            .collect();
        self.grid = layout(
            self.width,
            self.height,
            &widths,
            single_column,
            self.config.display().column_separator(),
        );
        let len = widths.len();
        self.cursor.clamp(len, &self.grid);
    }

    // Directory changes

    pub(super) fn load(&self, path: &Path) -> Result<DirectoryView> {
        load_dir(self.fs.as_ref(), path, self.config.general().snapshot())
    }

    /// Installs a freshly loaded view and returns the directory that was left.
    ///
    /// The cursor goes to the top and the mode back to browsing. Leaving search
    /// remembers the listing index of the entry under the cursor.
    pub(super) fn commit(&mut self, view: DirectoryView) -> PathBuf {
        let left = self.current_dir().to_path_buf();
        let remembered = match self.mode {
            Mode::Search => self
                .entry_under_cursor()
                .and_then(|e| self.nav.view().position_of(e.file_name())),
            Mode::Browse | Mode::PathEntry => Some(self.cursor.index()),
        };
        if let Some(index) = remembered {
            self.nav.save_position(index);
        }
        log::info!("{} -> {}", left.display(), view.path().display());

        self.nav.set_view(view);
        self.mode = Mode::Browse;
        self.path_input.clear();
        self.cursor.reset();
        self.relayout();
        left
    }

    /// Loads `target` and makes it the current directory.
    pub(super) fn change_dir(&mut self, target: &Path) -> Result<()> {
        let view = self.load(&clean_path(target))?;
        let left = self.commit(view);
        self.history.record(&left);
        Ok(())
    }

    // Commands

    /// `cd "<current dir>"`
    pub fn cd_command(&self) -> String {
        format!("cd {}", shell_quote(&self.current_dir().to_string_lossy()))
    }

    /// Command that runs an executable or opens a file in the editor from the current dir.
    pub fn open_command(&self, entry: &Entry) -> String {
        let mut cmd = self.cd_command();
        let push = self.config.general().push_to_history();

        if entry.is_executable() {
            let exec = shell_quote(&format!("./{}", entry.file_name()));
            cmd.push_str(" && ");
            cmd.push_str(&exec);
            if push {
                cmd.push_str(" && history -s ");
                cmd.push_str(&exec);
            }
        } else {
            let exec = self.config.editor().command_for(entry.file_name());
            cmd.push_str(" && ");
            cmd.push_str(&exec);
            if push {
                cmd.push_str(" && history -s '");
                cmd.push_str(&exec.replace('\'', r"'\''"));
                cmd.push('\'');
            }
        }
        cmd
    }
}
