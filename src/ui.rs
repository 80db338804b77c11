//! Terminal UI for cds.
//!
//! - [render]: the frame entry point and screen layout.
//! - [panes]: the listing as a grid or a detailed list.
//! - [widgets]: header, path-entry hints and footer lines.

pub mod panes;
pub mod render;
pub mod widgets;

pub use render::render;
