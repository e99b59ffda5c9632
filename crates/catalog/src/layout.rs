//! Responsive grid layout: cards per row, cards per page, load-more rule.

use storefront_core::{DomainError, DomainResult};

/// Viewports narrower than this (logical px) get the narrow row capacity.
pub const NARROW_VIEWPORT_PX: u32 = 768;
pub const NARROW_ROW_CAPACITY: usize = 2;
pub const WIDE_ROW_CAPACITY: usize = 3;
/// Rows visible before "load more".
pub const ROWS_PER_PAGE: usize = 3;
/// Minimum number of matches for the load-more button to be shown.
pub const LOAD_MORE_THRESHOLD: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    row_capacity: usize,
    rows_per_page: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            row_capacity: WIDE_ROW_CAPACITY,
            rows_per_page: ROWS_PER_PAGE,
        }
    }
}

impl GridLayout {
    pub fn new(row_capacity: usize, rows_per_page: usize) -> DomainResult<Self> {
        if row_capacity == 0 || rows_per_page == 0 {
            return Err(DomainError::invariant(
                "grid needs at least one card per row and one row per page",
            ));
        }
        Ok(Self {
            row_capacity,
            rows_per_page,
        })
    }

    /// Layout for a viewport of `width_px`, with the default breakpoint.
    pub fn responsive(width_px: f64) -> Self {
        Self::for_viewport(width_px, NARROW_VIEWPORT_PX, ROWS_PER_PAGE)
    }

    pub fn for_viewport(width_px: f64, breakpoint_px: u32, rows_per_page: usize) -> Self {
        let row_capacity = if width_px < f64::from(breakpoint_px) {
            NARROW_ROW_CAPACITY
        } else {
            WIDE_ROW_CAPACITY
        };
        Self {
            row_capacity,
            rows_per_page: rows_per_page.max(1),
        }
    }

    pub fn row_capacity(&self) -> usize {
        self.row_capacity
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn page_capacity(&self) -> usize {
        self.row_capacity * self.rows_per_page
    }

    /// The slice shown by an initial or filtered render.
    pub fn first_page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..items.len().min(self.page_capacity())]
    }

    /// Everything past the first `rendered` items, uncapped.
    pub fn remaining<'a, T>(&self, items: &'a [T], rendered: usize) -> &'a [T] {
        &items[rendered.min(items.len())..]
    }

    pub fn rows<'a, T>(&self, items: &'a [T]) -> std::slice::Chunks<'a, T> {
        items.chunks(self.row_capacity)
    }
}

/// Whether the load-more button is visible for `matches` filtered products.
///
/// Decided on the match count before capping, so it can show even when every
/// match already fits on the first page.
pub fn show_load_more(matches: usize, threshold: usize) -> bool {
    matches >= threshold
}
