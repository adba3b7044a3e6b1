use serde::Deserialize;
use utoipa::ToSchema;

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct Pagination {
    /// Page number, starting at 1.
    pub page: Option<i64>,
    /// Items per page.
    pub size: Option<i64>,
}

impl Pagination {
    /// Returns `(page, size)` with `page >= 1` and `1 <= size <= MAX_PAGE_SIZE`.
    pub fn normalize(&self) -> (i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let size = self
            .size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        (page, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page() {
        assert_eq!(Pagination::default().normalize(), (1, DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn clamps_out_of_range_values() {
        let p = Pagination {
            page: Some(0),
            size: Some(1000),
        };
        assert_eq!(p.normalize(), (1, MAX_PAGE_SIZE));

        let p = Pagination {
            page: Some(-3),
            size: Some(0),
        };
        assert_eq!(p.normalize(), (1, 1));
    }
}
