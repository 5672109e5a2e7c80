use serde::{Deserialize, Serialize};

/// Pagination metadata computed by the backend on every list request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: u64,
    pub page: u32,
    pub last_page: u32,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            total: 0,
            page: 1,
            last_page: 1,
        }
    }
}

impl PageMeta {
    pub fn has_more_pages(&self) -> bool {
        self.last_page > 1
    }
}

/// Envelope of every list endpoint: `{ data, meta }`.
///
/// The unpaginated "all" form of an endpoint omits `meta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_category::aggregate::Category;
    use serde_json::json;

    #[test]
    fn decodes_filtered_category_page() {
        let resp: ListResponse<Category> = serde_json::from_value(json!({
            "data": [{
                "id": 1,
                "name": "Acción",
                "description": "Películas de acción",
                "createdAt": "2024-01-01T00:00:00.000Z",
                "updatedAt": "2024-01-01T00:00:00.000Z"
            }],
            "meta": { "total": 1, "page": 1, "lastPage": 1 }
        }))
        .unwrap();

        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].name, "Acción");
        assert_eq!(
            resp.meta,
            Some(PageMeta {
                total: 1,
                page: 1,
                last_page: 1
            })
        );
        assert!(!resp.meta.unwrap().has_more_pages());
    }

    #[test]
    fn unpaginated_response_has_no_meta() {
        let resp: ListResponse<Category> =
            serde_json::from_value(json!({ "data": [] })).unwrap();
        assert!(resp.data.is_empty());
        assert!(resp.meta.is_none());
    }

    #[test]
    fn default_meta_is_first_page() {
        let meta = PageMeta::default();
        assert_eq!((meta.total, meta.page, meta.last_page), (0, 1, 1));
    }
}
