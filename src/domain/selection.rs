/// Inclusive rectangle of cells, always normalized so `top <= bottom` and `left <= right`.
/// Only constructible through `from_corners` and `single`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rect {
    top: usize,
    bottom: usize,
    left: usize,
    right: usize,
}

impl Rect {
    /// Build from two opposite corners given as (row, col), in any order
    pub fn from_corners(a: (usize, usize), b: (usize, usize)) -> Self {
        Self {
            top: a.0.min(b.0),
            bottom: a.0.max(b.0),
            left: a.1.min(b.1),
            right: a.1.max(b.1),
        }
    }

    /// Degenerate 1×1 rectangle
    pub const fn single(row: usize, col: usize) -> Self {
        Self { top: row, bottom: row, left: col, right: col }
    }

    pub const fn top(&self) -> usize {
        self.top
    }

    pub const fn bottom(&self) -> usize {
        self.bottom
    }

    pub const fn left(&self) -> usize {
        self.left
    }

    pub const fn right(&self) -> usize {
        self.right
    }

    pub const fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    pub const fn width(&self) -> usize {
        self.right - self.left + 1
    }

    pub const fn cell_count(&self) -> usize {
        self.height() * self.width()
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top && row <= self.bottom && col >= self.left && col <= self.right
    }

    /// Iterate (row, col) pairs row by row
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.top..=self.bottom).flat_map(move |row| (self.left..=self.right).map(move |col| (row, col)))
    }
}

/// Anchor and moving end of an in-progress selection gesture.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Selection {
    pub start: (usize, usize),
    pub end: (usize, usize),
}

impl Selection {
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.start, self.end)
    }
}

/// SelectionEditor tracks the begin/extend/complete protocol.
/// It knows nothing about grid bounds; callers check coordinates before handing them over.
#[derive(Clone, Debug, Default)]
pub struct SelectionEditor {
    active: Option<Selection>,
}

impl SelectionEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture anchored at (row, col). Re-anchors if one is already active.
    pub fn begin(&mut self, row: usize, col: usize) {
        self.active = Some(Selection { start: (row, col), end: (row, col) });
    }

    /// Move the free corner. No-op without an active gesture.
    pub fn extend(&mut self, row: usize, col: usize) {
        if let Some(selection) = self.active.as_mut() {
            selection.end = (row, col);
        }
    }

    /// Finish the gesture and hand back the normalized rectangle
    pub fn complete(&mut self) -> Option<Rect> {
        self.active.take().map(|selection| selection.rect())
    }

    /// Drop the gesture without producing a rectangle
    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Preview of the rectangle the gesture would produce right now
    pub fn current(&self) -> Option<Rect> {
        self.active.map(|selection| selection.rect())
    }
}
