use serde::{Deserialize, Serialize};

/// Paginated envelope returned by every list endpoint.
///
/// `page` is 0-indexed; the server owns paging, filtering and sorting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_elements: u64,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            page: 0,
            size: 0,
            total_elements: 0,
            total_pages: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_spring_style_envelope() {
        let raw = r#"{
            "content": [1, 2, 3],
            "page": 2,
            "size": 10,
            "totalElements": 23,
            "totalPages": 3
        }"#;
        let page: Page<i64> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_elements, 23);
        assert_eq!(page.total_pages, 3);
    }
}
