//! Configuration for cds.
//!
//! [Config] is loaded once at startup from `cds.toml` and borrowed by the app state for
//! the whole session. Each table of the file has its own submodule:
//! - [general]: snapshot options and shell history.
//! - [display]: details view, separators and footer.
//! - [theme]: colors of every drawn element.
//! - [input]: key bindings and the file-open command.

pub mod display;
pub mod general;
pub mod input;
pub mod load;
pub mod theme;

pub use display::Display;
pub use general::{General, InternalGeneral};
pub use input::{Editor, Keys};
pub use load::Config;
pub use theme::{ColorPair, Theme};
