//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 오가는 요청/응답 구조체입니다.
//! 요청 DTO는 `validator`로 형식 검증을 수행하고,
//! 응답 DTO는 엔티티에서 민감 정보를 제외한 형태로 변환됩니다.

pub mod users;

pub use users::*;
