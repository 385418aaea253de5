//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserRepository`](users::UserRepository) trait에만 의존하며,
//! 실행 시점에 MongoDB 구현 또는 메모리 구현이 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let user = user_repo.find_by_user_name("operator").await?;
//! ```

pub mod users;
