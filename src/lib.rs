//! 관리자 백엔드 사용자 관리 서비스
//!
//! 관리자 화면에서 사용하는 사용자 계정 관리(maintain user) 기능을 제공하는
//! Actix-web 기반 백엔드입니다.
//!
//! # Features
//!
//! - **사용자 생성**: 필수값 검증, 사용자명 중복 검사, 잠금 해제 상태로 생성, bcrypt 해싱
//! - **사용자 조회**: 사용자명 단건 조회, 페이징 목록 조회
//! - **메시지 코드 에러**: 지역화 가능한 `security.maintain_user.*` 메시지 코드
//! - **저장소 선택**: MongoDB 또는 메모리 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB/Memory  │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use admin_service_backend::repositories::users::InMemoryUserRepository;
//! use admin_service_backend::services::security::BcryptPasswordEncoder;
//! use admin_service_backend::services::users::UserService;
//!
//! let user_service = UserService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(BcryptPasswordEncoder::from_env()),
//! );
//! let response = user_service.create_user(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
