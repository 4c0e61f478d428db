//! "Load more" pagination over a filtered result set.
//!
//! A [`PaginationWindow`] only tracks how many results are visible. It never
//! holds results itself, so one window can slice any sequence and growing it
//! past the end of the results is harmless.

use serde::Serialize;

use crate::domain::DomainError;

/// Items visible before the first "load more".
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Items added by each "load more".
pub const DEFAULT_PAGE_INCREMENT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationWindow {
    visible_count: usize,
    page_size: usize,
    page_increment: usize,
}

impl PaginationWindow {
    /// Create a window showing the first `page_size` items.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ZeroPageSize`] if either size is zero.
    pub fn try_new(page_size: usize, page_increment: usize) -> Result<Self, DomainError> {
        if page_size == 0 {
            return Err(DomainError::ZeroPageSize { field: "page_size" });
        }
        if page_increment == 0 {
            return Err(DomainError::ZeroPageSize {
                field: "page_increment",
            });
        }
        Ok(Self {
            visible_count: page_size,
            page_size,
            page_increment,
        })
    }

    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_count
    }

    #[must_use]
    pub const fn page_increment(&self) -> usize {
        self.page_increment
    }

    /// The first `min(visible_count, results.len())` results.
    #[must_use]
    pub fn visible<'r, T>(&self, results: &'r [T]) -> &'r [T] {
        &results[..self.visible_count.min(results.len())]
    }

    /// Whether a "load more" would reveal anything.
    #[must_use]
    pub const fn has_more(&self, total: usize) -> bool {
        self.visible_count < total
    }

    /// This window grown by one increment.
    #[must_use]
    pub const fn grown(self) -> Self {
        Self {
            visible_count: self.visible_count.saturating_add(self.page_increment),
            ..self
        }
    }

    /// Grow in place by one increment.
    pub fn grow(&mut self) {
        *self = self.grown();
    }

    /// Back to the first page.
    pub fn reset(&mut self) {
        self.visible_count = self.page_size;
    }

    /// Whether the window is still on its first page.
    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.visible_count == self.page_size
    }
}

impl Default for PaginationWindow {
    fn default() -> Self {
        Self {
            visible_count: DEFAULT_PAGE_SIZE,
            page_size: DEFAULT_PAGE_SIZE,
            page_increment: DEFAULT_PAGE_INCREMENT,
        }
    }
}
