//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON/쿼리 데이터를 구조화된 Rust 타입으로 변환하고
//! `validator` 크레이트로 형식을 검증합니다.
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! 핸들러에서 `AppError::ValidationError`(400 Bad Request)로 변환됩니다.

pub mod create_user;
pub mod user_list_query;

pub use create_user::CreateUserRequest;
pub use user_list_query::UserListQuery;
