//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션을 저장소로 사용하는 [`UserRepository`] 구현입니다.
//!
//! ## 인덱스
//!
//! - `user_name_unique`: `user_name` 오름차순, UNIQUE
//! - `created_at_desc`: `created_at` 내림차순
//!
//! 유니크 인덱스 위반(E11000)은 `MaintainUserError::DuplicatedUser`로 변환되어
//! 동시에 같은 사용자명으로 생성 요청이 들어와도 한 건만 저장됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{bson::doc, Collection, IndexModel};

use super::UserRepository;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::errors::MaintainUserError;

pub const USER_COLLECTION: &str = "users";

const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리 (MongoDB)
pub struct MongoUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USER_COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다.
    /// 이미 중복 데이터가 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_name_index = IndexModel::builder()
            .keys(doc! { "user_name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_name_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([user_name_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_user_name(&self, user_name: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "user_name": user_name })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(map_write_error)?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    async fn find_all(&self, offset: u64, limit: i64) -> AppResult<Vec<User>> {
        let cursor = self.collection()
            .find(doc! {})
            .sort(doc! { "user_name": 1 })
            .skip(offset)
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn count(&self) -> AppResult<u64> {
        self.collection()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

fn map_write_error(error: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&error) {
        AppError::from(MaintainUserError::DuplicatedUser)
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}
