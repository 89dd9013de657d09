//! Skip/limit pagination shared by the list endpoints.

use serde::Serialize;

/// Default page size for list endpoints.
pub const DEFAULT_LIMIT: usize = 20;

/// Pagination envelope included in list responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: usize,
    pub limit: usize,
    pub skip: usize,
    pub has_more: bool,
}

/// Take the `[skip, skip + limit)` window of `items` and describe it.
///
/// A `skip` past the end yields an empty page, never an error.
pub fn paginate<T>(items: Vec<T>, skip: usize, limit: usize) -> (Vec<T>, Pagination) {
    let total = items.len();
    let page: Vec<T> = items.into_iter().skip(skip).take(limit).collect();
    let pagination = Pagination {
        total,
        limit,
        skip,
        has_more: skip + limit < total,
    };
    (page, pagination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_reports_more() {
        let (page, p) = paginate(vec![1, 2, 3, 4, 5], 0, 2);
        assert_eq!(page, vec![1, 2]);
        assert_eq!(p.total, 5);
        assert!(p.has_more);
    }

    #[test]
    fn last_page_reports_no_more() {
        let (page, p) = paginate(vec![1, 2, 3, 4, 5], 4, 2);
        assert_eq!(page, vec![5]);
        assert!(!p.has_more);
    }

    #[test]
    fn skip_past_end_is_empty() {
        let (page, p) = paginate(Vec::<i32>::new(), 10, 20);
        assert!(page.is_empty());
        assert_eq!(p.total, 0);
        assert!(!p.has_more);
    }

    #[test]
    fn exact_boundary_has_no_more() {
        let (_, p) = paginate(vec![1, 2, 3, 4], 2, 2);
        assert!(!p.has_more);
    }
}
