//! Container measurement and items-per-page derivation

use crate::infra::constants::collection;

/// Width breakpoints that decide how many items fit on one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBreakpoints {
    pub wide_min_width: f32,
    pub medium_min_width: f32,
    pub wide: usize,
    pub medium: usize,
    pub narrow: usize,
}

impl Default for PageBreakpoints {
    fn default() -> Self {
        Self {
            wide_min_width: collection::WIDE_MIN_WIDTH,
            medium_min_width: collection::MEDIUM_MIN_WIDTH,
            wide: collection::WIDE_PAGE_SIZE,
            medium: collection::MEDIUM_PAGE_SIZE,
            narrow: collection::NARROW_PAGE_SIZE,
        }
    }
}

impl PageBreakpoints {
    pub fn page_size(&self, width: f32) -> usize {
        let size = if width >= self.wide_min_width {
            self.wide
        } else if width >= self.medium_min_width {
            self.medium
        } else {
            self.narrow
        };
        size.max(1)
    }
}

/// Tracks a container's measured width and the page size it implies.
///
/// Feed it the width on mount and on every resize notification.
#[derive(Debug, Clone)]
pub struct ViewportSizer {
    width: f32,
    breakpoints: PageBreakpoints,
    items_per_page: usize,
}

impl ViewportSizer {
    pub fn new(breakpoints: PageBreakpoints) -> Self {
        Self {
            width: 0.0,
            items_per_page: breakpoints.page_size(0.0),
            breakpoints,
        }
    }

    /// Record a new measurement. Returns true when the page size changed.
    pub fn measure(&mut self, width: f32) -> bool {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        self.width = width;
        let next = self.breakpoints.page_size(width);
        let changed = next != self.items_per_page;
        self.items_per_page = next;
        changed
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Largest valid page start for `total` items.
    pub fn max_start_index(&self, total: usize) -> usize {
        total.saturating_sub(self.items_per_page)
    }
}

impl Default for ViewportSizer {
    fn default() -> Self {
        Self::new(PageBreakpoints::default())
    }
}
