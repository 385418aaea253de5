//! # 사용자 관리 서비스 구현
//!
//! 관리자 백엔드의 사용자 관리(maintain user) 업무 로직을 구현합니다.
//!
//! ## 서비스 구조
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │  • 입력 검증 (사용자명, 설명, 비밀번호)      │
//! │  • 사용자명 중복 검사                        │
//! │  • 기본값 적용 (locked = false)              │
//! │  • 비밀번호 해싱 후 저장                     │
//! └──────────────────────────────────────────────┘
//!          │                          │
//!          ▼                          ▼
//! ┌──────────────────┐      ┌──────────────────┐
//! │  UserRepository  │      │ PasswordEncoder  │
//! │ (Mongo / Memory) │      │    (bcrypt)      │
//! └──────────────────┘      └──────────────────┘
//! ```
//!
//! 두 협력자는 trait 객체로 주입되므로 테스트에서는 기록용 가짜 구현으로 교체합니다.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{
            request::{CreateUserRequest, UserListQuery},
            response::{CreateUserResponse, UserListResponse, UserResponse},
        },
        entities::users::user::User,
    },
    errors::MaintainUserError,
    repositories::users::UserRepository,
    services::security::PasswordEncoder,
    utils::string_utils::non_empty,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = UserService::new(
///     Arc::new(InMemoryUserRepository::new()),
///     Arc::new(BcryptPasswordEncoder::from_env()),
/// );
///
/// let response = service.create_user(CreateUserRequest {
///     user_name: Some("operator".into()),
///     user_description: Some("Night shift operator".into()),
///     locked: Some(true),
///     password: Some("s3cret!".into()),
/// }).await?;
///
/// assert!(!response.user.locked);
/// ```
pub struct UserService {
    /// 사용자 저장소
    user_repo: Arc<dyn UserRepository>,

    /// 비밀번호 해싱 협력자
    password_encoder: Arc<dyn PasswordEncoder>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_encoder: Arc<dyn PasswordEncoder>,
    ) -> Self {
        Self {
            user_repo,
            password_encoder,
        }
    }

    /// 새 사용자 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 아래 순서대로 검사하며 처음 실패한 단계에서 바로 에러를 반환합니다.
    ///
    /// 1. 사용자명이 없거나 비어 있음 → `UserNameEmpty` (저장소 조회 없음)
    ///
    /// 사용자명이 있으면 이 시점에 저장소를 정확히 한 번 조회합니다.
    ///
    /// 2. 설명이 없거나 비어 있음 → `UserDescriptionEmpty`
    /// 3. 같은 사용자명의 사용자가 존재 → `DuplicatedUser`
    /// 4. 비밀번호가 없거나 비어 있음 → `PasswordEmpty`
    /// 5. 사용자 생성: 요청의 `locked` 값과 관계없이 잠기지 않은 상태, 비밀번호는 해시
    /// 6. 저장소에 한 번 저장
    ///
    /// # 반환값
    ///
    /// * `Ok(CreateUserResponse)` - 생성된 사용자 정보와 성공 메시지
    /// * `Err(AppError::MaintainUser(_))` - 위 검증 실패 (메시지 코드 포함)
    /// * `Err(AppError::ValidationError)` - bcrypt 한도(71바이트)를 넘는 비밀번호
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    /// * `Err(AppError::DatabaseError)` - 저장소 오류
    ///
    /// # 로깅
    ///
    /// ```text
    /// [WARN] 사용자 생성 거부: User name cannot be empty. (security.maintain_user.user_name_empty)
    /// [INFO] Password hashing took: 3.1ms
    /// [INFO] Total user creation took: 4.7ms
    /// ```
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<CreateUserResponse> {
        let start_time = Instant::now();

        let user_name = non_empty(request.user_name.as_deref())
            .ok_or_else(|| reject(MaintainUserError::UserNameEmpty))?;

        let previous_user = self.user_repo.find_by_user_name(user_name).await?;

        let user_description = non_empty(request.user_description.as_deref())
            .ok_or_else(|| reject(MaintainUserError::UserDescriptionEmpty))?;

        if previous_user.is_some() {
            return Err(reject(MaintainUserError::DuplicatedUser));
        }

        let password = non_empty(request.password.as_deref())
            .ok_or_else(|| reject(MaintainUserError::PasswordEmpty))?;

        if request.locked == Some(true) {
            debug!("새 사용자 '{}'의 locked 요청값은 무시됩니다", user_name);
        }

        // 비밀번호 해싱
        let hash_start = Instant::now();
        let password_hash = self.password_encoder.encode(password)?;
        info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(
            user_name.to_string(),
            user_description.to_string(),
            password_hash,
        );

        let created_user = self.user_repo.save(user).await?;

        info!("Total user creation took: {:?}", start_time.elapsed());

        Ok(CreateUserResponse {
            user: UserResponse::from(created_user),
            message: "사용자가 성공적으로 생성되었습니다".to_string(),
        })
    }

    /// 사용자명으로 사용자 조회
    ///
    /// * `Err(AppError::NotFound)` - 해당 사용자명의 사용자가 없음
    pub async fn get_user_by_name(&self, user_name: &str) -> AppResult<UserResponse> {
        self.user_repo
            .find_by_user_name(user_name)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", user_name)))
    }

    /// 사용자 목록 조회 (사용자명 오름차순, 페이징)
    pub async fn list_users(&self, query: UserListQuery) -> AppResult<UserListResponse> {
        let offset = query.offset();
        let limit = query.limit();

        let users = self.user_repo.find_all(offset, limit).await?;
        let total = self.user_repo.count().await?;

        Ok(UserListResponse {
            users: users.into_iter().map(UserResponse::from).collect(),
            total,
            offset,
            limit,
        })
    }
}

fn reject(error: MaintainUserError) -> AppError {
    warn!("사용자 생성 거부: {} ({})", error, error.message_code());
    error.into()
}
