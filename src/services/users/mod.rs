//! 사용자 관리 서비스 모듈
//!
//! 사용자 생성, 조회, 목록 조회 업무 로직을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let user_service = UserService::new(user_repo, password_encoder);
//! let request = CreateUserRequest { /* ... */ };
//! let response = user_service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
