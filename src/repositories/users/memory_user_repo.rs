//! # 메모리 사용자 리포지토리
//!
//! 프로세스 메모리에 사용자를 보관하는 [`UserRepository`] 구현입니다.
//! `USER_STORE=memory`로 MongoDB 없이 서버를 띄울 때와 HTTP 테스트에서 사용합니다.
//! 재시작하면 데이터는 사라집니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::UserRepository;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::errors::MaintainUserError;

/// 사용자명을 키로 사용하는 메모리 저장소
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::InternalError("user store lock poisoned".to_string())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_user_name(&self, user_name: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(user_name).cloned())
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().map_err(poisoned)?;

        if users.contains_key(&user.user_name) {
            return Err(MaintainUserError::DuplicatedUser.into());
        }

        if user.id.is_none() {
            user.id = Some(ObjectId::new());
        }
        users.insert(user.user_name.clone(), user.clone());

        Ok(user)
    }

    async fn find_all(&self, offset: u64, limit: i64) -> AppResult<Vec<User>> {
        let users = self.users.read().map_err(poisoned)?;

        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| a.user_name.cmp(&b.user_name));

        Ok(all
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit.max(0)).unwrap_or(usize::MAX))
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.len() as u64)
    }
}
