//! # User Management HTTP Handlers
//!
//! 사용자 관리 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/api/v1/users` | 사용자 목록 조회 | 200 OK |
//! | `GET` | `/api/v1/users/{user_name}` | 사용자 조회 | 200 OK |
//!
//! 핸들러는 `validator`로 형식(길이, 범위)만 검사하고,
//! 필수값과 중복 검사는 [`UserService`]에 맡깁니다.
//! 서비스가 반환한 `AppError`는 `ResponseError` 구현에 의해 그대로 HTTP 응답이 됩니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, UserListQuery};
use crate::services::users::UserService;

#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
    query: web::Query<UserListQuery>,
) -> Result<HttpResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.list_users(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/{user_name}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_name(&user_name).await?;

    Ok(HttpResponse::Ok().json(user))
}
