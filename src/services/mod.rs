//! 비즈니스 로직 서비스 모듈
//!
//! - [`users`] - 사용자 관리 (생성, 조회)
//! - [`security`] - 비밀번호 해싱

pub mod security;
pub mod users;
