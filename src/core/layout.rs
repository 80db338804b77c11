//! Grid layout for the entry listing.
//!
//! [layout] is a pure function of the viewport and the item display widths, so the state
//! machine can recompute it whenever anything that affects it changes.

/// Rows taken by the header, hint line, `--More--` marker and footer.
pub const RESERVED_ROWS: usize = 5;

/// Derived arrangement of the active items on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub columns: usize,
    pub column_width: usize,
    pub rows: usize,
    pub rows_displayed: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            columns: 1,
            column_width: 0,
            rows: 0,
            rows_displayed: 1,
        }
    }
}

impl Grid {
    /// Row of the item at `index`, items filled row by row.
    #[inline]
    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns.max(1)
    }

    /// Largest valid row offset.
    #[inline]
    pub fn max_offset(&self) -> usize {
        self.rows.saturating_sub(1)
    }
}

/// Computes how `item_widths` are arranged in a `width` x `height` viewport.
///
/// `single_column` forces one entry per row (details view or an active search).
/// Otherwise every column is as wide as the widest item plus `separator`, and as many
/// columns as fit are used, never fewer than one.
pub fn layout(
    width: usize,
    height: usize,
    item_widths: &[usize],
    single_column: bool,
    separator: usize,
) -> Grid {
    let rows_displayed = height.saturating_sub(RESERVED_ROWS).max(1);
    let n = item_widths.len();

    let (columns, column_width) = if single_column {
        (1, width)
    } else {
        let max = item_widths.iter().copied().max().unwrap_or(0) + separator;
        if max == 0 || max >= width {
            (1, width)
        } else {
            let columns = (width / max).max(1);
            (columns, width / columns)
        }
    };

    Grid {
        columns,
        column_width,
        rows: n.div_ceil(columns),
        rows_displayed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    fn widths(names: &[&str]) -> Vec<usize> {
        names.iter().map(|n| n.width()).collect()
    }

    #[test]
    fn three_short_items_fit_one_row() {
        let grid = layout(20, 30, &widths(&["1", "12", "123/"]), false, 2);
        assert_eq!(grid.columns, 3);
        assert_eq!(grid.column_width, 6);
        assert_eq!(grid.rows, 1);
        assert_eq!(grid.rows_displayed, 25);
    }

    #[test]
    fn five_items_of_seven() {
        let names = ["aaaaaaa", "bbbbbbb", "ccccccc", "ddddddd", "eeeeeee"];
        let grid = layout(20, 30, &widths(&names), false, 2);
        assert_eq!(grid.columns, 2);
        assert_eq!(grid.column_width, 10);
        assert_eq!(grid.rows, 3);
    }

    #[test]
    fn forced_single_column() {
        let grid = layout(80, 10, &widths(&["a", "b", "c"]), true, 2);
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.column_width, 80);
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.rows_displayed, 5);
    }

    #[test]
    fn too_wide_items_fall_back_to_one_column() {
        let grid = layout(10, 3, &[12], false, 2);
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.rows_displayed, 1);
    }

    #[test]
    fn empty_listing() {
        let grid = layout(40, 20, &[], false, 2);
        assert_eq!(grid.columns, 20);
        assert_eq!(grid.rows, 0);
        assert_eq!(grid.max_offset(), 0);

        let grid = layout(40, 20, &[0, 0], false, 0);
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.rows, 2);
    }

    #[test]
    fn wide_characters_count_double() {
        let grid = layout(20, 10, &widths(&["日本語"]), false, 2);
        assert_eq!(grid.column_width, 20 / (20 / 8));
    }
}
