//! # Domain Layer
//!
//! 엔티티와 요청/응답 DTO를 정의하는 도메인 계층입니다.
//!
//! ```text
//! HTTP JSON ──► CreateUserRequest ──► UserService ──► User ──► UserRepository
//!                                          │
//!                                          ▼
//!                                    UserResponse ──► HTTP JSON
//! ```

pub mod entities;
pub mod dto;

pub use entities::*;
pub use dto::*;
