//! Header, hint and footer lines for cds.

use crate::app::{AppState, Mode};

use ratatui::{
    style::Style,
    text::{Line, Span},
};

pub const FOOTER_TEXT: &str =
    "[a-z] Search   [alt+d] Details   [alt+enter] Quit   [ctrl+c] Quit without cd";

pub const HINT_VALID: [&str; 2] = [
    "Manual path input mode. Please type the desired path.",
    "Press <enter> to enter path",
];

pub const HINT_INVALID: [&str; 2] = [
    "Invalid path",
    "Fix it or press <esc> to exit path input mode",
];

/// The top line: `user: path`, the search query or the path being typed.
pub fn header_line(app: &AppState) -> Line<'static> {
    let theme = app.config().theme();
    let prefix = Span::raw(format!("{}: ", app.username()));
    let dir = app.current_dir().to_string_lossy().into_owned();

    match app.mode() {
        Mode::Browse => Line::from(vec![prefix, Span::styled(dir, theme.path())]),
        Mode::Search => {
            let base = format!("{}/", dir.trim_end_matches('/'));
            Line::from(vec![
                prefix,
                Span::styled(base, theme.path()),
                Span::styled(app.nav().query().to_string(), theme.matched()),
            ])
        }
        Mode::PathEntry => {
            let style = if app.path_input_valid() {
                theme.valid_path()
            } else {
                theme.invalid_path()
            };
            Line::from(vec![prefix, Span::styled(app.path_input().to_string(), style)])
        }
    }
}

/// The two hint lines shown under the header while typing a path.
pub fn hint_lines(app: &AppState) -> Vec<Line<'static>> {
    if app.mode() != Mode::PathEntry {
        return Vec::new();
    }
    let style = app.config().theme().details();
    let hints = if app.path_input_valid() {
        HINT_VALID
    } else {
        HINT_INVALID
    };
    hints
        .iter()
        .map(|h| Line::from(Span::styled(*h, style)))
        .collect()
}

pub fn footer_line(style: Style) -> Line<'static> {
    Line::from(Span::styled(FOOTER_TEXT, style))
}
