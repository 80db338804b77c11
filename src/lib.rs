//! Internal library crate for cds.
//!
//! The shipped application is the `cds` binary (`src/main.rs`), a terminal directory
//! surfer that prints a `cd` command (or a command opening the chosen file) for the
//! calling shell to evaluate.
//!
//! This library exists to share code between targets (binary, tests) and to keep modules organized.
//! This API is only used to build the `cds` binary and is not considered a library for external use.

pub mod app;
pub mod config;
pub mod core;
pub mod ui;
pub mod utils;
