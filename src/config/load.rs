//! The main config loading module for cds.
//!
//! Handles loading and deserializing settings from `cds.toml`.
//!
//! Provides and manages the main [Config] struct, as well as the internal [RawConfig] used for parsing and processing.
//!
//! Also implements default config initialization when `cds.toml` is not present.

use crate::config::Display;
use crate::config::Theme;
use crate::config::{Editor, Keys};
use crate::config::{General, InternalGeneral};

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

/// Raw configuration as read from the toml file
/// This struct is deserialized directly from the toml file.
/// It uses owned types and is then converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct RawConfig {
    general: General,
    display: Display,
    theme: Theme,
    editor: Editor,
    keys: Keys,
}

/// Main configuration struct for cds
/// This struct holds the processed configuration options used by cds.
#[derive(Debug)]
pub struct Config {
    general: InternalGeneral,
    display: Display,
    theme: Theme,
    editor: Editor,
    keys: Keys,
}

/// Conversion from RawConfig to Config
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            display: raw.display,
            theme: raw.theme,
            editor: raw.editor,
            keys: raw.keys,
        }
    }
}

/// Public methods for loading and accessing the configuration
impl Config {
    /// Load configuration from the default path
    /// If the file does not exist or fails to parse, returns the default configuration.
    ///
    /// Called by entry point to load config at startup.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("config loaded from {}", path.display());
                config
            }
            Err(e) => {
                eprintln!("[cds] Error parsing config {}: {}", path.display(), e);
                log::warn!("config {} rejected: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reads and parses one config file.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawConfig>(content).map(Config::from)
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the default configuration file path.
    /// Checks the CDS_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/cds/cds.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("CDS_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("cds/cds.toml");
        }

        if let Some(home) = dirs::home_dir() {
            return home.join(".config/cds/cds.toml");
        }
        PathBuf::from("cds.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path, minimal: bool) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = if minimal { MINIMAL_TOML } else { FULL_TOML };

        fs::write(path, content)?;
        println!(
            "{} Default config generated at {:?}",
            if minimal { "Minimal" } else { "Full" },
            path
        );
        Ok(())
    }
}

/// Default configuration options
impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

const FULL_TOML: &str = r##"# cds.toml - default configuration for cds

# Note:
# Commented values are the internal defaults of cds
# Use hex codes (eg. "#RRGGBB") or terminal colors ("cyan")

[general]
dirs_first = true
# current_dir_entry = true
# parent_dir_entry = true
# push_to_history = false

[display]
# show_details = false
# column_separator = 2
# details_separator = 2
# footer = true

# [theme.directory]
# fg = "#0087ff"
# [theme.executable]
# fg = "#00af00"
# [theme.symlink]
# fg = "cyan"
# [theme.device]
# fg = "yellow"
# [theme.marker]
# fg = "#0087ff"
# [theme.cursor]
# fg = "white"
# bg = "#8700ff"
# [theme.selected]
# fg = "black"
# bg = "#ff8700"
# [theme.matched]
# fg = "#ff8700"
# [theme.details]
# fg = "#8a8a8a"
# [theme.path]
# fg = "default"
# [theme.valid_path]
# fg = "green"
# [theme.invalid_path]
# fg = "red"
# [theme.footer]
# fg = "#8a8a8a"
# [theme.more]
# fg = "#8700ff"

# [editor]
# "{}" is replaced by the file name, otherwise the name is appended
# cmd = "vim"

# [keys]
# move_up = ["Up"]
# move_down = ["Down"]
# move_left = ["Left"]
# move_right = ["Right"]
# page_up = ["PageUp"]
# page_down = ["PageDown"]
# go_to_first = ["Home"]
# go_to_last = ["End"]
# activate = ["Enter", "Tab"]
# go_parent = ["Alt+Backspace"]
# go_previous = ["-"]
# go_home = ["~"]
# go_root = ["/"]
# toggle_details = ["Alt+d"]
# toggle_selection = ["Space"]
# path_entry = ["Ctrl+l"]
# clear_search = ["Ctrl+u"]
# cancel = ["Esc"]
# quit_with_cd = ["Alt+Enter"]
# quit = ["Ctrl+c"]
"##;

const MINIMAL_TOML: &str = r##"# cds.toml - minimal configuration
# Only a few basic options. The rest uses internal defaults.
# For all options, see cds --config-help.

[general]
dirs_first = true

[display]
show_details = false
"##;
