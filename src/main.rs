//! 관리자 백엔드 사용자 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 설정된 저장소(MongoDB 또는 메모리)를 연결하고 사용자 관리 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use admin_service_backend::config::{DatabaseConfig, RateLimitConfig, ServerConfig, UserStore};
use admin_service_backend::core::errors::AppResult;
use admin_service_backend::db::Database;
use admin_service_backend::repositories::users::{
    InMemoryUserRepository, MongoUserRepository, UserRepository,
};
use admin_service_backend::routes::configure_all_routes;
use admin_service_backend::services::security::BcryptPasswordEncoder;
use admin_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 관리자 사용자 서비스 시작중...");

    // 저장소 초기화
    let user_repo = match initialize_user_repository().await {
        Ok(repo) => repo,
        Err(e) => {
            error!("저장소 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    let password_encoder = Arc::new(BcryptPasswordEncoder::from_env());
    info!("🔐 bcrypt cost: {}", password_encoder.cost());

    let user_service = web::Data::new(UserService::new(user_repo, password_encoder));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/api/v1/users", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

async fn initialize_user_repository() -> AppResult<Arc<dyn UserRepository>> {
    match DatabaseConfig::user_store() {
        UserStore::Memory => {
            info!("🧠 메모리 사용자 저장소 사용 (재시작 시 데이터 유실)");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        UserStore::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(Database::new().await?);
            let repo = MongoUserRepository::new(database);
            repo.create_indexes().await?;

            info!("✅ users 컬렉션 인덱스 준비 완료");
            Ok(Arc::new(repo))
        }
    }
}

fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::Method;
    use actix_web::{test, HttpResponse};

    async fn preflight(request_headers: &str) -> actix_web::http::StatusCode {
        let app = test::init_service(
            App::new()
                .wrap(configure_cors())
                .route(
                    "/api/v1/users",
                    web::post().to(|| async { HttpResponse::Created().finish() }),
                ),
        )
            .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/v1/users")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, request_headers))
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_cors_allows_json_requests() {
        assert!(preflight("content-type").await.is_success());
    }

    #[actix_web::test]
    async fn test_cors_rejects_authorization_header() {
        assert!(preflight("authorization").await.is_client_error());
    }
}
