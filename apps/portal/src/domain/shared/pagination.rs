use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub search: String,
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub total_pages: u32,
}

/// Page cursor for a paginated listing.
///
/// Pages are 1-based and the cursor always knows at least one page, even
/// when the server reports zero results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current_page: u32,
    total_pages: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl Pager {
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Adopt the page numbers reported by the server.
    pub fn apply(&mut self, page: u32, total_pages: u32) {
        self.total_pages = total_pages.max(1);
        self.current_page = page.max(1);
    }

    pub fn can_go_back(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Pagination controls are only worth showing past a single page.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn advance(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.current_page += 1;
        true
    }

    pub fn retreat(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.current_page -= 1;
        true
    }
}
