//! Listing pane drawing for cds.
//!
//! Draws the visible rows of the active items either as a multi-column grid or as
//! one detailed line per entry, with cursor, selection and search match highlighting.
//!
//! Used internally by ui::render

use crate::app::AppState;
use crate::core::{Entry, EntryDetails, EntryKind, Grid, StatKind, sanitize_to_exact_width};
use crate::config::Theme;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

pub const MORE_MARKER: &str = "--More--";

/// Styles used for rendering entries in the listing pane.
pub struct PaneStyles {
    pub item: Style,
    pub dir: Style,
    pub marker: Style,
    pub exe: Style,
    pub symlink: Style,
    pub device: Style,
    pub cursor: Style,
    pub selected: Style,
    pub matched: Style,
    pub details: Style,
    pub more: Style,
}

impl PaneStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            item: Style::default(),
            dir: theme.directory(),
            marker: theme.marker(),
            exe: theme.executable(),
            symlink: theme.symlink(),
            device: theme.device(),
            cursor: theme.cursor(),
            selected: theme.selected(),
            matched: theme.matched(),
            details: theme.details(),
            more: theme.more(),
        }
    }

    /// Style of an entry name. The cursor wins over the selection.
    pub fn get_style(&self, entry: &Entry, under_cursor: bool) -> Style {
        let mut style = match entry.kind() {
            EntryKind::CurrentMarker | EntryKind::ParentMarker => self.marker,
            EntryKind::Directory => self.dir,
            EntryKind::Device => self.device,
            EntryKind::Symlink if entry.is_dir_like() => self.dir,
            EntryKind::Symlink => self.symlink,
            EntryKind::File if entry.is_executable() => self.exe,
            EntryKind::File => self.item,
        };
        if entry.is_selected() {
            style = style.patch(self.selected);
        }
        if under_cursor {
            style = style.patch(self.cursor);
        }
        style
    }
}

/// Which grid rows are drawn and whether the overflow marker follows them.
///
/// Rows from `offset` up to `rows_displayed` are shown. The row right after them is
/// shown too when it is the last one, otherwise `--More--` takes its place.
pub fn visible_rows(grid: &Grid, offset: usize) -> (std::ops::Range<usize>, bool) {
    let end = (offset + grid.rows_displayed).min(grid.rows);
    if end == grid.rows {
        (offset.min(end)..end, false)
    } else if end + 1 == grid.rows {
        (offset..grid.rows, false)
    } else {
        (offset..end, true)
    }
}

/// Draws the listing into `area`.
pub fn draw_main(frame: &mut Frame, app: &AppState, area: Rect, styles: &PaneStyles) {
    let items = app.active_items();
    let grid = app.grid();
    let cursor = app.cursor().index();
    let (rows, more) = visible_rows(grid, app.cursor().row_offset());

    let mut lines: Vec<Line> = Vec::with_capacity(rows.len() + 1);

    if app.show_details() {
        let widths = DetailWidths::measure(items);
        let separator = app.config().display().details_separator();
        for row in rows {
            if let Some(entry) = items.get(row) {
                lines.push(detail_line(
                    entry,
                    row == cursor,
                    &widths,
                    separator,
                    area.width as usize,
                    styles,
                ));
            }
        }
    } else {
        let columns = grid.columns.max(1);
        for row in rows {
            let start = row * columns;
            let end = (start + columns).min(items.len());
            let mut spans = Vec::with_capacity(columns);
            for (i, entry) in items[start.min(end)..end].iter().enumerate() {
                spans.extend(cell_spans(
                    entry,
                    start + i == cursor,
                    grid.column_width,
                    styles,
                ));
            }
            lines.push(Line::from(spans));
        }
    }

    if more {
        lines.push(Line::from(Span::styled(MORE_MARKER, styles.more)));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Name spans for one grid cell, padded or cut to exactly `width` columns.
///
/// The search match is highlighted only when the whole name fits into the cell.
pub fn cell_spans(
    entry: &Entry,
    under_cursor: bool,
    width: usize,
    styles: &PaneStyles,
) -> Vec<Span<'static>> {
    let name = entry.name();
    let style = styles.get_style(entry, under_cursor);
    let name_width = name.width();

    if let Some(span) = entry.match_span()
        && name_width <= width
        && !name.chars().any(char::is_control)
        && name.is_char_boundary(span.start)
        && name.is_char_boundary(span.end)
    {
        let mut out = Vec::with_capacity(4);
        if span.start > 0 {
            out.push(Span::styled(name[..span.start].to_string(), style));
        }
        out.push(Span::styled(
            name[span.clone()].to_string(),
            style.patch(styles.matched),
        ));
        if span.end < name.len() {
            out.push(Span::styled(name[span.end..].to_string(), style));
        }
        if width > name_width {
            out.push(Span::raw(" ".repeat(width - name_width)));
        }
        return out;
    }

    let text = sanitize_to_exact_width(name, width);
    let trimmed = text.trim_end();
    let pad = text.len() - trimmed.len();
    let mut out = vec![Span::styled(trimmed.to_string(), style)];
    if pad > 0 {
        out.push(Span::raw(" ".repeat(pad)));
    }
    out
}

/// Widths of the detail columns, measured over every active item.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DetailWidths {
    pub perms: usize,
    pub owner: usize,
    pub group: usize,
    pub size: usize,
    pub modified: usize,
}

impl DetailWidths {
    pub fn measure(items: &[Entry]) -> Self {
        items.iter().map(Entry::details).fold(Self::default(), |w, d| Self {
            perms: w.perms.max(d.perms.width()),
            owner: w.owner.max(d.owner.width()),
            group: w.group.max(d.group.width()),
            size: w.size.max(d.size.width()),
            modified: w.modified.max(d.modified.width()),
        })
    }
}

fn pad(text: &str, width: usize) -> String {
    let w = text.width();
    if w >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - w))
    }
}

/// The detail columns of an entry, each padded and followed by `separator` spaces.
pub fn detail_prefix(details: &EntryDetails, widths: &DetailWidths, separator: usize) -> String {
    let gap = " ".repeat(separator);
    let mut out = String::new();
    for (text, width) in [
        (&details.perms, widths.perms),
        (&details.owner, widths.owner),
        (&details.group, widths.group),
    ] {
        out.push_str(&pad(text, width));
        out.push_str(&gap);
    }
    // sizes are right aligned
    let size_w = details.size.width();
    out.push_str(&" ".repeat(widths.size.saturating_sub(size_w)));
    out.push_str(&details.size);
    out.push_str(&gap);
    out.push_str(&pad(&details.modified, widths.modified));
    out.push_str(&gap);
    out
}

fn detail_line(
    entry: &Entry,
    under_cursor: bool,
    widths: &DetailWidths,
    separator: usize,
    width: usize,
    styles: &PaneStyles,
) -> Line<'static> {
    let prefix = detail_prefix(entry.details(), widths, separator);
    let prefix_w = prefix.width();
    let mut spans = vec![Span::styled(prefix, styles.details)];

    let remaining = width.saturating_sub(prefix_w);
    let name_w = entry.display_width().min(remaining);
    spans.extend(cell_spans(entry, under_cursor, name_w, styles));

    if let Some(target) = entry.symlink() {
        let mut arrow = format!(" -> {}", target.link().display());
        if target.kind() == StatKind::Directory {
            arrow.push('/');
        }
        let left = remaining.saturating_sub(name_w);
        if left > 0 {
            let text = sanitize_to_exact_width(&arrow, left);
            spans.push(Span::styled(text.trim_end().to_string(), styles.details));
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn grid(rows: usize, rows_displayed: usize) -> Grid {
        Grid {
            columns: 1,
            column_width: 10,
            rows,
            rows_displayed,
        }
    }

    #[test]
    fn more_marker_only_when_more_than_one_row_is_hidden() {
        assert_eq!(visible_rows(&grid(3, 5), 0), (0..3, false));
        assert_eq!(visible_rows(&grid(6, 5), 0), (0..6, false));
        assert_eq!(visible_rows(&grid(7, 5), 0), (0..5, true));
        assert_eq!(visible_rows(&grid(7, 5), 1), (1..7, false));
        assert_eq!(visible_rows(&grid(0, 5), 0), (0..0, false));
    }

    #[test]
    fn cells_have_exact_width() {
        let styles = PaneStyles::from_theme(Config::default().theme());
        for name in ["a", "averyveryverylongname", "tab\tbed", "🦀.rs"] {
            let entry = Entry::new(name, EntryKind::File);
            let spans = cell_spans(&entry, false, 8, &styles);
            let width: usize = spans.iter().map(|s| s.content.width()).sum();
            assert_eq!(width, 8, "{:?}", name);
        }
    }

    #[test]
    fn match_span_is_highlighted() {
        let styles = PaneStyles::from_theme(Config::default().theme());
        let entry = Entry::new("snapple", EntryKind::File).with_match_span(2..5);
        let spans = cell_spans(&entry, false, 10, &styles);
        let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["sn", "app", "le", "   "]);
        assert_eq!(spans[1].style, styles.item.patch(styles.matched));
    }

    #[test]
    fn cursor_beats_selection() {
        let styles = PaneStyles::from_theme(Config::default().theme());
        let mut entry = Entry::new("docs", EntryKind::Directory);
        entry.toggle_selected();
        let style = styles.get_style(&entry, true);
        assert_eq!(style.bg, styles.cursor.bg);
        assert_eq!(styles.get_style(&entry, false).bg, styles.selected.bg);
    }

    #[test]
    fn detail_columns_line_up() {
        let a = EntryDetails {
            perms: "-rw-r--r--".into(),
            owner: "root".into(),
            group: "wheel".into(),
            size: "1.2 kB".into(),
            modified: "01 Jan 24 10:00".into(),
        };
        let b = EntryDetails {
            owner: "surfer".into(),
            size: "12 B".into(),
            ..a.clone()
        };
        let items = [
            Entry::new("a", EntryKind::File).with_details(a.clone()),
            Entry::new("b", EntryKind::File).with_details(b.clone()),
        ];
        let widths = DetailWidths::measure(&items);
        let pa = detail_prefix(&a, &widths, 2);
        let pb = detail_prefix(&b, &widths, 2);
        assert_eq!(pa.width(), pb.width());
        assert!(pa.starts_with("-rw-r--r--  root    wheel  1.2 kB  01 Jan 24"));
        assert!(pb.contains("surfer  wheel    12 B  "));
    }
}
