//! Application state machine for cds.
//!
//! - [state]: [AppState], the single owner of everything that changes while surfing.
//! - [handlers]: per-mode key handling and navigation actions.
//! - [keymap]: key strings from the config turned into [Action]s.
//! - [cursor]: cursor and viewport arithmetic.
//! - [nav]: the current snapshot, search results and remembered positions.
//! - [history]: the previous-directory slot.

pub mod cursor;
pub mod handlers;
pub mod history;
pub mod keymap;
pub mod nav;
pub mod state;

pub use cursor::Cursor;
pub use history::PathHistory;
pub use keymap::{Action, Keymap, MoveAction, NavAction, SystemAction, is_search_trigger};
pub use nav::NavState;
pub use state::{Activation, AppState, KeypressResult, Mode};
