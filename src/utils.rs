//! Miscellaneous utility functions for cds.
//!
//! This module holds the [helpers] submodule, which provides commonly used utilities such as:
//! - Color parsing
//! - Home directory lookup and `~` expansion
//! - Lexical path cleaning and manual path validation
//! - Shell quoting
//!
//! and the [cli] submodule with argument handling for the `cds` binary.

pub mod cli;
pub mod helpers;

pub use helpers::{
    clean_path, current_username, expand_home, get_home, is_path_ok, parse_color,
    resolve_input_path, shell_quote,
};
