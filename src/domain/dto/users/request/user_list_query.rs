//! 사용자 목록 조회 쿼리 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// `GET /api/v1/users?offset=0&limit=20`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserListQuery {
    /// 건너뛸 사용자 수
    pub offset: Option<u64>,

    /// 페이지 크기 (1-100)
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

impl UserListQuery {
    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = UserListQuery::default();

        assert_eq!(query.offset(), 0);
        assert_eq!(query.limit(), DEFAULT_PAGE_SIZE);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_limit_range() {
        for (limit, valid) in [(0, false), (1, true), (100, true), (101, false)] {
            let query = UserListQuery {
                offset: None,
                limit: Some(limit),
            };
            assert_eq!(query.validate().is_ok(), valid, "limit = {}", limit);
        }
    }
}
