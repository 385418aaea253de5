//! User Entity Implementation
//!
//! 관리자 백엔드에서 관리하는 사용자 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `user_name`은 시스템 전체에서 유일합니다.
/// 비밀번호는 항상 해시된 형태로만 보관합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (unique)
    pub user_name: String,
    /// 사용자 설명
    pub user_description: String,
    /// 계정 잠금 여부
    pub locked: bool,
    /// 해시된 비밀번호
    pub password: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 새로 만든 계정은 항상 잠기지 않은 상태로 시작합니다.
    pub fn new(user_name: String, user_description: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user_name,
            user_description,
            locked: false,
            password: password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_unlocked_without_id() {
        let user = User::new("admin".into(), "administrator".into(), "$2b$04$hash".into());

        assert!(!user.locked);
        assert!(user.id.is_none());
        assert_eq!(user.id_string(), None);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_id_is_stored_as_mongo_object_id() {
        let mut user = User::new("admin".into(), "administrator".into(), "hash".into());
        let id = ObjectId::new();
        user.id = Some(id);

        let document = mongodb::bson::to_document(&user).unwrap();
        assert_eq!(document.get_object_id("_id").unwrap(), id);
        assert_eq!(document.get_str("user_name").unwrap(), "admin");
        assert!(!document.get_bool("locked").unwrap());
        assert_eq!(user.id_string(), Some(id.to_hex()));
    }
}
