//! Selection index over the flattened tree

/// Clamped index into a flattened tree of `count` entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeCursor {
    index: usize,
}

impl TreeCursor {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move by `delta`, staying within `[0, count - 1]`
    pub fn step(&mut self, delta: isize, count: usize) -> bool {
        let before = self.index;
        let last = count.saturating_sub(1);
        self.index = if delta.is_negative() {
            self.index.saturating_sub(delta.unsigned_abs())
        } else {
            self.index.saturating_add(delta.unsigned_abs())
        }
        .min(last);
        self.index != before
    }

    pub fn down(&mut self, count: usize) -> bool {
        self.step(1, count)
    }

    pub fn up(&mut self, count: usize) -> bool {
        self.step(-1, count)
    }
}
