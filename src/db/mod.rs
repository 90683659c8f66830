//! MongoDB 연결 관리 모듈
//!
//! 환경 변수로 연결 정보를 읽어 클라이언트를 만들고, 시작 시 `ping`으로 연결을 확인합니다.
//!
//! # Environment Variables
//!
//! * `MONGODB_URI` - 연결 문자열 (기본값: `mongodb://localhost:27017`)
//! * `DATABASE_NAME` - 데이터베이스 이름 (기본값: `user_records_dev`)

use mongodb::{Client, options::ClientOptions};
use std::env;
use log::info;
use crate::errors::{AppResult, ErrorContext};

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    pub async fn new() -> AppResult<Self> {
        // 환경 변수에서 MongoDB URI 읽기
        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        // 환경 변수에서 데이터베이스 이름 읽기
        let database_name = env::var("DATABASE_NAME")
            .unwrap_or_else(|_| "user_records_dev".to_string());

        let mut client_options = ClientOptions::parse(&mongodb_uri)
            .await
            .context("MongoDB URI 파싱 실패")?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("user_records".to_string());

        let client = Client::with_options(client_options)
            .context("MongoDB 클라이언트 생성 실패")?;

        // 연결 테스트
        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .with_context(|| format!("MongoDB 연결 실패: {}", database_name))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
