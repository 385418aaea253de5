//! # Core Module
//!
//! 애플리케이션 전역에서 사용하는 공통 에러 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 외부 라이브러리 에러를 `AppError`로 변환하는 확장 trait

pub mod errors;

pub use errors::*;
