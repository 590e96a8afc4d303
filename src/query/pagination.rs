/// Offset and page count for one page / 分页信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: i64,
    pub total_pages: i64,
}

/// Compute offset and total page count.
///
/// `page` is expected to be >= 1; callers clamp it before getting here.
/// `page_size` must be positive. Out-of-range pages saturate instead of
/// overflowing; `QueryPlanner::plan_page` rejects them before a query runs.
pub fn paginate(page: i64, total_count: i64, page_size: i64) -> Pagination {
    Pagination {
        offset: page.saturating_sub(1).saturating_mul(page_size),
        total_pages: total_count.saturating_add(page_size - 1) / page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate() {
        assert_eq!(paginate(1, 120, 50), Pagination { offset: 0, total_pages: 3 });
        assert_eq!(paginate(3, 120, 50), Pagination { offset: 100, total_pages: 3 });
        assert_eq!(paginate(1, 0, 50).total_pages, 0);
        assert_eq!(paginate(2, 100, 50).total_pages, 2);
        assert_eq!(paginate(1, 1, 50).total_pages, 1);
    }

    #[test]
    fn test_page_zero_is_not_rejected() {
        assert_eq!(paginate(0, 10, 50).offset, -50);
    }

    #[test]
    fn test_huge_page_saturates() {
        assert_eq!(paginate(i64::MAX, 10, 50).offset, i64::MAX);
        assert_eq!(paginate(i64::MIN, 10, 50).offset, i64::MIN);
        assert_eq!(paginate(1, i64::MAX, 50).total_pages, i64::MAX / 50);
    }
}
