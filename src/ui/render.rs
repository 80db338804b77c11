//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop and the
//! layout helper that splits the screen into header, listing and footer chunks.
//!
//! This module stays "pure rendering": it reads state + config and produces widgets,
//! without changing the application state.

use crate::{
    app::{AppState, Mode},
    ui::{
        panes::{self, PaneStyles},
        widgets,
    },
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Text,
    widgets::Paragraph,
};

/// Render function which renders the entire terminal UI for cds on each frame.
pub fn render(frame: &mut Frame, app: &AppState) {
    let cfg = app.config();
    let theme_cfg = cfg.theme();
    let chunks = layout_chunks(frame.area(), app);

    let mut header = Text::from(widgets::header_line(app));
    header.extend(widgets::hint_lines(app));
    frame.render_widget(Paragraph::new(header), chunks.header);

    let styles = PaneStyles::from_theme(theme_cfg);
    panes::draw_main(frame, app, chunks.list, &styles);

    if let Some(footer) = chunks.footer {
        frame.render_widget(
            Paragraph::new(widgets::footer_line(theme_cfg.footer())),
            footer,
        );
    }
}

/// Screen areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunks {
    pub header: Rect,
    pub list: Rect,
    pub footer: Option<Rect>,
}

/// Splits `size` into the header (plus hint lines while typing a path), the listing
/// and the optional footer.
pub fn layout_chunks(size: Rect, app: &AppState) -> Chunks {
    let header_height = if app.mode() == Mode::PathEntry { 3 } else { 1 };
    let show_footer = app.config().display().footer();

    let mut constraints = vec![Constraint::Length(header_height), Constraint::Min(0)];
    if show_footer {
        constraints.push(Constraint::Length(1));
    }

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    Chunks {
        header: split[0],
        list: split[1],
        footer: show_footer.then(|| split[2]),
    }
}
