//! 보안 관련 서비스 모듈
//!
//! 비밀번호 해싱 추상화([`PasswordEncoder`])와 bcrypt 구현체를 제공합니다.

pub mod password_encoder;

pub use password_encoder::*;
