//! Vertical scroll policy keeping the cursor on screen.

use tracing::trace;

/// Vertically scrollable window over the document's visual lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    height: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Viewport {
    /// Create a viewport `height` lines tall, scrolled to the top.
    ///
    /// Height is clamped to at least one line.
    #[must_use]
    pub fn new(height: usize) -> Self {
        Self {
            offset: 0,
            height: height.max(1),
        }
    }

    /// First visible screen line.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of visible lines.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Last visible screen line.
    #[must_use]
    pub fn bottom(&self) -> usize {
        self.offset + self.height - 1
    }

    /// Visible screen lines as a range.
    #[must_use]
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.height
    }

    /// Change the visible height, keeping the offset.
    pub fn resize(&mut self, height: usize) {
        self.height = height.max(1);
    }

    /// Scroll back to the first line.
    pub fn goto_top(&mut self) {
        self.offset = 0;
    }

    /// Scroll the minimum amount that brings screen line `line` into view.
    ///
    /// Returns the signed number of lines scrolled: negative is up.
    pub fn reposition(&mut self, line: usize) -> isize {
        let before = self.offset;
        if line < self.offset {
            self.offset = line;
        } else if line > self.bottom() {
            self.offset = line + 1 - self.height;
        }
        let delta = self.offset as isize - before as isize;
        if delta != 0 {
            trace!(line, offset = self.offset, delta, "viewport scrolled");
        }
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reposition_inside_window_is_noop() {
        let mut vp = Viewport::new(5);
        assert_eq!(vp.reposition(0), 0);
        assert_eq!(vp.reposition(4), 0);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_reposition_scrolls_down() {
        let mut vp = Viewport::new(5);
        assert_eq!(vp.reposition(7), 3);
        assert_eq!(vp.offset(), 3);
        assert_eq!(vp.bottom(), 7);
        assert_eq!(vp.visible_range(), 3..8);
    }

    #[test]
    fn test_reposition_scrolls_up() {
        let mut vp = Viewport::new(3);
        vp.reposition(10);
        assert_eq!(vp.offset(), 8);
        assert_eq!(vp.reposition(2), -6);
        assert_eq!(vp.offset(), 2);
    }

    #[test]
    fn test_height_clamped() {
        let mut vp = Viewport::new(0);
        assert_eq!(vp.height(), 1);
        assert_eq!(vp.reposition(4), 4);
        vp.resize(0);
        assert_eq!(vp.height(), 1);
        vp.goto_top();
        assert_eq!(vp.offset(), 0);
    }
}
