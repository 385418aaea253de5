//! # 비밀번호 인코더
//!
//! 사용자 서비스가 의존하는 해싱 협력자입니다.
//! 서비스는 [`PasswordEncoder`] trait에만 의존하므로 테스트에서 다른 구현으로
//! 교체할 수 있습니다.
//!
//! ## bcrypt 설정
//!
//! - **Cost**: [`PasswordConfig::bcrypt_cost`] (개발/테스트 4, 스테이징 10, 운영 12)
//! - **솔트**: bcrypt가 해시마다 자동 생성하므로 같은 비밀번호도 매번 다른 해시가 나옵니다.
//! - **길이**: bcrypt는 입력의 72바이트(널 종료 포함)까지만 사용합니다. 71바이트를 넘는 비밀번호는 잘라내지 않고 거부합니다.

use bcrypt::{non_truncating_hash, verify};

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};

/// 잘림 없이 해싱할 수 있는 최대 바이트 수 (널 종료 바이트를 더해 bcrypt 입력 72바이트)
pub const BCRYPT_MAX_PASSWORD_BYTES: usize = 71;

/// 비밀번호 해싱 협력자
pub trait PasswordEncoder: Send + Sync {
    /// 평문 비밀번호를 저장용 해시로 변환합니다.
    ///
    /// 반환값은 비어 있지 않으며 평문과 같지 않습니다.
    fn encode(&self, raw_password: &str) -> AppResult<String>;

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    fn matches(&self, raw_password: &str, encoded_password: &str) -> AppResult<bool>;
}

/// bcrypt 기반 비밀번호 인코더
#[derive(Debug, Clone)]
pub struct BcryptPasswordEncoder {
    cost: u32,
}

impl BcryptPasswordEncoder {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 환경별 bcrypt cost를 사용하는 인코더
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordEncoder {
    fn default() -> Self {
        Self::from_env()
    }
}

impl PasswordEncoder for BcryptPasswordEncoder {
    fn encode(&self, raw_password: &str) -> AppResult<String> {
        if raw_password.len() > BCRYPT_MAX_PASSWORD_BYTES {
            return Err(AppError::ValidationError(format!(
                "password must be at most {} bytes",
                BCRYPT_MAX_PASSWORD_BYTES
            )));
        }

        non_truncating_hash(raw_password, self.cost).context("비밀번호 해싱 실패")
    }

    fn matches(&self, raw_password: &str, encoded_password: &str) -> AppResult<bool> {
        // 한도를 넘는 비밀번호로 만든 해시는 존재하지 않음
        if raw_password.len() > BCRYPT_MAX_PASSWORD_BYTES {
            return Ok(false);
        }

        verify(raw_password, encoded_password).context("비밀번호 검증 실패")
    }
}
