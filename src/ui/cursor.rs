use std::ops::Range;

/// Selected row and first visible row of a scrolling table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TableCursor {
    pub(crate) selected: usize,
    pub(crate) offset: usize,
}

impl TableCursor {
    pub(crate) fn down(&mut self, len: usize, page: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
            self.follow(page);
        }
    }

    pub(crate) fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.offset = self.offset.min(self.selected);
    }

    pub(crate) fn first(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn last(&mut self, len: usize, page: usize) {
        if len > 0 {
            self.selected = len - 1;
            self.follow(page);
        }
    }

    /// Half-page jump (Ctrl-d).
    pub(crate) fn half_page_down(&mut self, len: usize, page: usize) {
        if len > 0 {
            self.selected = (self.selected + half(page)).min(len - 1);
            self.follow(page);
        }
    }

    /// Half-page jump (Ctrl-u).
    pub(crate) fn half_page_up(&mut self, page: usize) {
        self.selected = self.selected.saturating_sub(half(page));
        self.offset = self.offset.min(self.selected);
    }

    /// Row indices to draw for a table of `len` rows and `page` visible rows.
    pub(crate) fn window(&self, len: usize, page: usize) -> Range<usize> {
        let start = self.offset.min(len);
        start..(start + page).min(len)
    }

    // Scroll just far enough that the selection is on screen.
    fn follow(&mut self, page: usize) {
        let page = page.max(1);
        if self.selected >= self.offset + page {
            self.offset = self.selected + 1 - page;
        }
    }
}

fn half(page: usize) -> usize {
    (page / 2).max(1)
}
