//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 비밀번호 해싱, 서버, 저장소, Rate Limiting 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, PasswordConfig};
//!
//! let env = Environment::current();
//! let bind = ServerConfig::bind_address();
//! let cost = PasswordConfig::bcrypt_cost();
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"   # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="admin_service"
//! export USER_STORE="mongo"         # mongo, memory
//! export BCRYPT_COST="12"           # 4-15 범위
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;

pub use data_config::*;
