//! 사용자 관리(maintain user) 업무 규칙 위반 에러

use thiserror::Error;

/// 사용자 생성 시 발생하는 입력 검증 실패
///
/// 모두 호출자 입력 오류이며 재시도 대상이 아닙니다.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintainUserError {
    #[error("User name cannot be empty.")]
    UserNameEmpty,

    #[error("User description cannot be empty.")]
    UserDescriptionEmpty,

    #[error("The user name is duplicated with an existing one.")]
    DuplicatedUser,

    #[error("User password cannot be empty.")]
    PasswordEmpty,
}

impl MaintainUserError {
    /// 지역화용 메시지 코드
    pub fn message_code(&self) -> &'static str {
        match self {
            MaintainUserError::UserNameEmpty => "security.maintain_user.user_name_empty",
            MaintainUserError::UserDescriptionEmpty => "security.maintain_user.user_desc_empty",
            MaintainUserError::DuplicatedUser => "security.maintain_user.duplicated_user",
            MaintainUserError::PasswordEmpty => "security.maintain_user.password_empty",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_codes_and_messages() {
        let cases = [
            (
                MaintainUserError::UserNameEmpty,
                "security.maintain_user.user_name_empty",
                "User name cannot be empty.",
            ),
            (
                MaintainUserError::UserDescriptionEmpty,
                "security.maintain_user.user_desc_empty",
                "User description cannot be empty.",
            ),
            (
                MaintainUserError::DuplicatedUser,
                "security.maintain_user.duplicated_user",
                "The user name is duplicated with an existing one.",
            ),
            (
                MaintainUserError::PasswordEmpty,
                "security.maintain_user.password_empty",
                "User password cannot be empty.",
            ),
        ];

        for (error, code, message) in cases {
            assert_eq!(error.message_code(), code);
            assert_eq!(error.to_string(), message);
        }
    }
}
