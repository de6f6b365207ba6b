use serde::{Deserialize, Serialize};

use super::user::User;

/// `limit`/`offset` query of `GET /user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

impl PageRequest {
    /// Request for a 1-based `page` of `limit` rows. Page 0 is treated as page 1.
    pub fn for_page(page: u32, limit: u32) -> Self {
        let limit = limit.max(1);
        let page = page.max(1);
        Self {
            limit,
            offset: (page - 1).saturating_mul(limit),
        }
    }

    /// The 1-based page this request starts on.
    pub fn page(&self) -> u32 {
        self.offset / self.limit.max(1) + 1
    }
}

/// One page of `GET /user`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub data: Vec<User>,
    /// Total number of users across all pages.
    #[serde(default)]
    pub count: u32,
}

impl UserPage {
    /// Number of pages needed to show `count` users, `limit` per page.
    pub fn page_count(&self, limit: u32) -> u32 {
        self.count.div_ceil(limit.max(1))
    }

    /// Last page worth showing for the current total, never below 1.
    pub fn last_page(&self, limit: u32) -> u32 {
        self.page_count(limit).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_offsets() {
        assert_eq!(PageRequest::for_page(1, 10), PageRequest { limit: 10, offset: 0 });
        assert_eq!(PageRequest::for_page(3, 10), PageRequest { limit: 10, offset: 20 });
        assert_eq!(PageRequest::for_page(0, 10).offset, 0);
        assert_eq!(PageRequest::for_page(4, 10).page(), 4);
    }

    #[test]
    fn test_page_count_rounds_up() {
        let page = UserPage {
            data: Vec::new(),
            count: 21,
        };
        assert_eq!(page.page_count(10), 3);
        assert_eq!(page.last_page(10), 3);

        let exact = UserPage {
            data: Vec::new(),
            count: 20,
        };
        assert_eq!(exact.page_count(10), 2);
    }

    #[test]
    fn test_empty_listing() {
        let empty = UserPage::default();
        assert_eq!(empty.page_count(10), 0);
        assert_eq!(empty.last_page(10), 1);
    }

    #[test]
    fn test_page_payload_decodes() {
        let json = r#"{"data":[{"id":1,"email":"a@b.co","name":"A","gender":"male","phone":"1","birthday":0}],"count":11}"#;
        let page: UserPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "1");
        assert_eq!(page.page_count(10), 2);
    }
}
