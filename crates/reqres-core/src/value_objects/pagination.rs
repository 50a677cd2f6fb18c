//! Page arithmetic for user listings

/// A validated page request. Both fields are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: i64 = 1;
    pub const DEFAULT_PER_PAGE: i64 = 6;

    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: if page > 0 { page } else { Self::DEFAULT_PAGE },
            per_page: if per_page > 0 {
                per_page
            } else {
                Self::DEFAULT_PER_PAGE
            },
        }
    }

    /// Build from raw query strings, falling back to defaults for anything unusable
    pub fn from_query(page: Option<&str>, per_page: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| raw.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(0);
        Self::new(parse(page), parse(per_page))
    }

    /// Number of rows to skip
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Rows per page, as a SQL limit
    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// `ceil(total / per_page)`
    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        total / self.per_page + i64::from(total % self.per_page != 0)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_PER_PAGE)
    }
}
