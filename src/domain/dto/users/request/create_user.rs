//! # 사용자 생성 요청 DTO
//!
//! 관리자 화면의 사용자 생성 폼을 표현합니다.
//! 모든 필드는 누락(`null`)될 수 있으며, 필수 여부와 중복 검사는
//! 서비스 계층이 정해진 순서대로 판단합니다.
//!
//! ## 검증 규칙
//!
//! 이 DTO의 `validator` 규칙은 길이 상한만 검사합니다.
//! 빈 값 검사는 메시지 코드를 가진 업무 에러로 보고해야 하므로
//! [`UserService::create_user`](crate::services::users::UserService::create_user)가 담당합니다.
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `user_name` | 최대 50자 |
//! | `user_description` | 최대 200자 |
//! | `password` | 최대 71자 (바이트 한도는 비밀번호 인코더에서 검사) |
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "user_name": "operator",
//!   "user_description": "Night shift operator",
//!   "locked": false,
//!   "password": "s3cret!"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자명 (로그인 ID)
    #[validate(length(max = 50, message = "user_name must be at most 50 characters"))]
    pub user_name: Option<String>,

    /// 사용자 설명
    #[validate(length(max = 200, message = "user_description must be at most 200 characters"))]
    pub user_description: Option<String>,

    /// 요청된 잠금 여부
    ///
    /// 새 계정은 항상 잠기지 않은 상태로 생성되므로 이 값은 무시됩니다.
    pub locked: Option<bool>,

    /// 평문 비밀번호 (저장 전 해싱됨)
    #[validate(length(max = 71, message = "password must be at most 71 characters"))]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_pass_format_validation() {
        let request = CreateUserRequest {
            user_name: Some(String::new()),
            user_description: None,
            locked: None,
            password: None,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_too_long_user_name_is_rejected() {
        let request = CreateUserRequest {
            user_name: Some("a".repeat(51)),
            user_description: Some("desc".into()),
            ..Default::default()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_name"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"user_name":"operator"}"#).unwrap();

        assert_eq!(request.user_name.as_deref(), Some("operator"));
        assert!(request.user_description.is_none());
        assert!(request.locked.is_none());
        assert!(request.password.is_none());
    }
}
