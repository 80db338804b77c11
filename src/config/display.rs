//! Display configuration options for cds
//!
//! This module defines the display configuration options which are read from the cds.toml
//! configuration file.

use serde::Deserialize;

/// Display configuration options
///
/// Default values are provided for all options so a partial `[display]` table is fine.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Display {
    show_details: bool,
    column_separator: usize,
    details_separator: usize,
    footer: bool,
}

/// Public methods for accessing display configuration options
impl Display {
    /// Whether the details view is on at startup.
    pub fn show_details(&self) -> bool {
        self.show_details
    }

    /// Blank cells between grid columns.
    pub fn column_separator(&self) -> usize {
        self.column_separator
    }

    /// Blank cells between the columns of the details view.
    pub fn details_separator(&self) -> usize {
        self.details_separator
    }

    pub fn footer(&self) -> bool {
        self.footer
    }
}

impl Default for Display {
    fn default() -> Self {
        Display {
            show_details: false,
            column_separator: 2,
            details_separator: 2,
            footer: true,
        }
    }
}
