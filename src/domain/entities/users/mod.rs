//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(
//!     "operator".to_string(),
//!     "Night shift operator".to_string(),
//!     hashed_password,
//! );
//! assert!(!user.locked);
//! ```

pub mod user;

pub use user::User;
