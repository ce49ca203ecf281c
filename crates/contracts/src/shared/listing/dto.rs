use serde::{Deserialize, Serialize};

/// Ответ listing-endpoint'а: одна страница и общее количество записей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

/// Количество страниц; при пустом результате 0
pub fn total_pages(total_count: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    let pages = total_count.div_ceil(u64::from(limit));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(40, 20), 2);
        assert_eq!(total_pages(41, 20), 3);
        assert_eq!(total_pages(41, 0), 0);
    }

    #[test]
    fn test_list_response_json_shape() {
        let response = ListResponse {
            items: vec!["a".to_string()],
            total_count: 1,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "items": ["a"], "total_count": 1 }));
    }
}
