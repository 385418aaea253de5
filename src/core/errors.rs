//! # 애플리케이션 에러 시스템
//!
//! 백엔드 서비스 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 에러를 정의하고 `actix_web::ResponseError`를 구현하여
//! 핸들러에서 반환된 에러가 곧바로 HTTP 응답으로 변환되도록 합니다.
//!
//! ## HTTP 상태 코드 매핑
//!
//! | 에러 | 상태 코드 |
//! |------|-----------|
//! | `ValidationError` | 400 Bad Request |
//! | `MaintainUser(UserNameEmpty \| UserDescriptionEmpty \| PasswordEmpty)` | 400 Bad Request |
//! | `MaintainUser(DuplicatedUser)` | 409 Conflict |
//! | `NotFound` | 404 Not Found |
//! | `DatabaseError`, `InternalError` | 500 Internal Server Error |
//!
//! ## 응답 본문
//!
//! 사용자 관리 에러는 메시지 코드를 함께 내려 클라이언트가 번역할 수 있게 합니다.
//!
//! ```json
//! {
//!   "error": "User name cannot be empty.",
//!   "message_code": "security.maintain_user.user_name_empty",
//!   "message": "User name cannot be empty."
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::errors::user_errors::MaintainUserError;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 형식 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 사용자 관리 업무 규칙 위반 (400 / 409)
    #[error(transparent)]
    MaintainUser(#[from] MaintainUserError),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 번역용 메시지 코드 (사용자 관리 에러에만 존재)
    pub fn message_code(&self) -> Option<&'static str> {
        match self {
            AppError::MaintainUser(e) => Some(e.message_code()),
            _ => None,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MaintainUser(MaintainUserError::DuplicatedUser) => StatusCode::CONFLICT,
            AppError::MaintainUser(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::MaintainUser(e) => serde_json::json!({
                "error": self.to_string(),
                "message_code": e.message_code(),
                "message": e.to_string(),
            }),
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("user_name too long".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_maintain_user_error_status() {
        let cases = [
            (MaintainUserError::UserNameEmpty, StatusCode::BAD_REQUEST),
            (MaintainUserError::UserDescriptionEmpty, StatusCode::BAD_REQUEST),
            (MaintainUserError::PasswordEmpty, StatusCode::BAD_REQUEST),
            (MaintainUserError::DuplicatedUser, StatusCode::CONFLICT),
        ];

        for (kind, status) in cases {
            let error = AppError::from(kind);
            assert_eq!(error.status_code(), status, "{:?}", error);
        }
    }

    #[test]
    fn test_maintain_user_error_keeps_message_code() {
        let error = AppError::from(MaintainUserError::DuplicatedUser);

        assert_eq!(
            error.message_code(),
            Some("security.maintain_user.duplicated_user")
        );
        assert_eq!(
            error.to_string(),
            "The user name is duplicated with an existing one."
        );
        assert_eq!(AppError::NotFound("x".into()).message_code(), None);
    }

    #[actix_web::test]
    async fn test_maintain_user_error_body() {
        let response = AppError::from(MaintainUserError::UserNameEmpty).error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["message_code"], "security.maintain_user.user_name_empty");
        assert_eq!(body["message"], "User name cannot be empty.");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_error_with_context_is_lazy() {
        let ok: Result<u8, &str> = Ok(1);
        let value = ok.with_context(|| panic!("must not be evaluated")).unwrap();
        assert_eq!(value, 1);
    }
}
