//! 문자열 유틸리티
//!
//! 폼 입력처럼 누락(`None`)될 수 있는 문자열 필드를 다루는 함수들입니다.

/// 비어 있지 않은 값만 돌려줍니다.
///
/// `None`과 빈 문자열은 모두 `None`이 됩니다.
/// 공백만 있는 문자열은 비어 있는 것으로 보지 않습니다.
///
/// ```rust,ignore
/// assert_eq!(non_empty(None), None);
/// assert_eq!(non_empty(Some("")), None);
/// assert_eq!(non_empty(Some(" ")), Some(" "));
/// ```
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some(" ")), Some(" "));
        assert_eq!(non_empty(Some("userName")), Some("userName"));
    }
}
