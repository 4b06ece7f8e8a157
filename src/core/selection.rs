//! List cursor shared by every list-bearing screen.
//!
//! The cursor is always clamped against the current item count, including
//! when a fetch replaces the list with a shorter one.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    len: usize,
}

impl Selection {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Selected index, or `None` when the list is empty.
    pub fn selected(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1).min(self.len - 1);
        }
    }

    /// The list was replaced: keep the index if it still fits, else clamp to the last item.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(len.saturating_sub(1));
    }
}
