use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub user_name: String,
    pub user_description: String,
    pub locked: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let id = user.id_string().unwrap_or_default();
        let User {
            user_name,
            user_description,
            locked,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            user_name,
            user_description,
            locked,
            created_at,
            updated_at,
        }
    }
}

/// 사용자 생성 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: UserResponse,
    pub message: String,
}

/// 사용자 목록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    pub total: u64,
    pub offset: u64,
    pub limit: i64,
}
