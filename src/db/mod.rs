//! MongoDB 연결 관리 모듈
//!
//! [`DatabaseConfig`]에서 URI와 데이터베이스 이름을 읽어 클라이언트를 생성하고,
//! 시작 시점에 `ping` 명령으로 연결을 확인합니다.

use log::info;
use mongodb::{options::ClientOptions, Client};

use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 변수 설정으로 MongoDB에 연결합니다.
    pub async fn new() -> AppResult<Self> {
        Self::connect(&DatabaseConfig::mongodb_uri(), &DatabaseConfig::database_name()).await
    }

    pub async fn connect(mongodb_uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(mongodb_uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client_options.app_name = Some("admin_service".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 연결 테스트
        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
