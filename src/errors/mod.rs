//! 도메인별 업무 에러 정의
//!
//! 각 에러는 사람이 읽을 수 있는 메시지와 함께 번역용 메시지 코드를 가집니다.
//! 메시지 코드는 `security.maintain_user.user_name_empty`처럼 점으로 구분된
//! 네임스페이스 문자열이며, 외부 계층에서 지역화된 메시지를 찾는 키로 사용됩니다.

pub mod user_errors;

pub use user_errors::MaintainUserError;
