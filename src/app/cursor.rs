//! Cursor arithmetic over the grid.
//!
//! The cursor is an item index plus the first visible row. Every operation keeps
//! `index` inside the active list and `row_offset` inside `[0, rows - 1]`.

use crate::core::Grid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    row_offset: usize,
}

impl Cursor {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    #[inline]
    pub fn row(&self, grid: &Grid) -> usize {
        grid.row_of(self.index)
    }

    /// Moves by `delta` items, clamped to `[0, len - 1]`. No-op on an empty list.
    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        let last = (len - 1) as isize;
        self.index = (self.index as isize).saturating_add(delta).clamp(0, last) as usize;
    }

    pub fn set_index(&mut self, index: usize, len: usize) {
        self.index = index.min(len.saturating_sub(1));
    }

    pub fn is_visible(&self, grid: &Grid) -> bool {
        let row = self.row(grid);
        self.row_offset <= row && row < self.row_offset + grid.rows_displayed
    }

    /// Scrolls a single row up (`-1`) or down (`+1`).
    pub fn nudge(&mut self, step: isize, grid: &Grid) {
        let max = grid.max_offset() as isize;
        self.row_offset = (self.row_offset as isize + step).clamp(0, max) as usize;
    }

    /// After a directional move: nudge once toward the cursor if it left the viewport.
    pub fn follow(&mut self, grid: &Grid) {
        if self.is_visible(grid) {
            return;
        }
        if self.row(grid) < self.row_offset {
            self.nudge(-1, grid);
        } else {
            self.nudge(1, grid);
        }
    }

    /// Puts the cursor row at the top of the viewport.
    pub fn jump_to_row(&mut self, grid: &Grid) {
        self.row_offset = self.row(grid).min(grid.max_offset());
    }

    /// Puts the cursor row in the middle of the viewport where possible.
    pub fn center(&mut self, grid: &Grid) {
        let row = self.row(grid) as isize;
        let half = (grid.rows_displayed / 2) as isize;
        let max = grid.max_offset() as isize;
        self.row_offset = (row - half).clamp(0, max) as usize;
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.row_offset = 0;
    }

    /// Restores both invariants after the list or the grid changed.
    pub fn clamp(&mut self, len: usize, grid: &Grid) {
        self.index = self.index.min(len.saturating_sub(1));
        self.row_offset = self.row_offset.min(grid.max_offset());
    }
}
