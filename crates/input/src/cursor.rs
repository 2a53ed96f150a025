//! Grid cursor.
//!
//! Keyboard play has no pointer, so the player steers a highlighted cell and
//! clicks it. Movement clamps at the edges rather than wrapping.

use crate::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    columns: usize,
    len: usize,
    index: usize,
}

impl GridCursor {
    /// Cursor over `len` cells laid out `columns` wide, starting top-left.
    pub fn new(columns: usize, len: usize) -> Self {
        Self {
            columns: columns.max(1),
            len,
            index: 0,
        }
    }

    /// Cursor over a vertical list of `len` entries.
    pub fn list(len: usize) -> Self {
        Self::new(1, len)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn row(&self) -> usize {
        self.index / self.columns
    }

    pub fn column(&self) -> usize {
        self.index % self.columns
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the cursor moved.
    pub fn step(&mut self, direction: Direction) -> bool {
        if self.len == 0 {
            return false;
        }
        let next = match direction {
            Direction::Left if self.column() > 0 => self.index - 1,
            Direction::Right if self.column() + 1 < self.columns => self.index + 1,
            Direction::Up if self.index >= self.columns => self.index - self.columns,
            Direction::Down => self.index + self.columns,
            _ => return false,
        };
        if next >= self.len {
            return false;
        }
        self.index = next;
        true
    }

    /// Jump to `index`, clamped to the last cell.
    pub fn set(&mut self, index: usize) {
        self.index = index.min(self.len.saturating_sub(1));
    }

    /// Change the grid shape, keeping the cursor in range.
    pub fn resize(&mut self, columns: usize, len: usize) {
        self.columns = columns.max(1);
        self.len = len;
        self.set(self.index);
    }
}
