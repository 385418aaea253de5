//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`] trait과 두 가지 구현을 제공합니다.
//!
//! - [`MongoUserRepository`](user_repo::MongoUserRepository) - `users` 컬렉션 기반 영구 저장소
//! - [`InMemoryUserRepository`](memory_user_repo::InMemoryUserRepository) - 프로세스 메모리 저장소

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::user::User;

pub mod memory_user_repo;
pub mod user_repo;

pub use memory_user_repo::InMemoryUserRepository;
pub use user_repo::MongoUserRepository;

/// 사용자 저장소 협력자
///
/// 사용자명 유일성은 서비스의 중복 검사가 먼저 보장하고,
/// 구현체는 동시 생성 경쟁에 대비해 저장 시점에도 중복을 거부합니다
/// (`MaintainUserError::DuplicatedUser`).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 사용자명으로 사용자 조회
    async fn find_by_user_name(&self, user_name: &str) -> AppResult<Option<User>>;

    /// 새 사용자 저장 (ID가 할당된 사용자를 반환)
    async fn save(&self, user: User) -> AppResult<User>;

    /// 사용자명 순으로 정렬된 페이지 조회
    async fn find_all(&self, offset: u64, limit: i64) -> AppResult<Vec<User>>;

    /// 전체 사용자 수
    async fn count(&self) -> AppResult<u64>;
}
