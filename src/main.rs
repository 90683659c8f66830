//! 사용자 레코드 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 저장소와 서비스를 초기화합니다.
//! 저장소 백엔드(MongoDB 또는 메모리)를 선택해 `UserService`에 주입하고
//! 사용자 레코드 REST API를 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_records_service::config::{
    Environment, PaginationConfig, RateLimitConfig, ServerConfig, StoreBackend, UserServiceConfig,
};
use user_records_service::db::Database;
use user_records_service::errors::AppResult;
use user_records_service::repositories::users::{InMemoryUserRepository, UserRepository, UserStore};
use user_records_service::routes::configure_all_routes;
use user_records_service::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 레코드 서비스 시작중... (환경: {:?})", Environment::current());

    // 데이터 스토어 초기화
    let store = initialize_store(StoreBackend::current())
        .await
        .map_err(|e| {
            error!("저장소 초기화 실패: {}", e);
            io::Error::other(e.to_string())
        })?;

    let user_service = web::Data::new(UserService::new(store, UserServiceConfig::from_env()));
    info!("✅ 사용자 서비스 초기화 완료 (최소 나이: {}세)", user_service.config().adult_age);

    // HTTP 서버 시작
    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
/// `UserService`는 한 번 생성되어 모든 워커가 `web::Data`로 공유합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let pagination = web::Data::new(PaginationConfig::from_env());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/users", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            .app_data(user_service.clone())
            .app_data(pagination.clone())

            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=user_records_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 백엔드로 사용자 저장소를 초기화합니다
///
/// MongoDB 백엔드는 연결 확인과 인덱스 생성까지 마친 뒤 반환합니다.
async fn initialize_store(backend: StoreBackend) -> AppResult<Arc<dyn UserStore>> {
    match backend {
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(Database::new().await?);
            let repository = UserRepository::new(database);
            repository.init().await?;

            Ok(Arc::new(repository))
        }
        StoreBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용 중: 프로세스 종료 시 데이터가 사라집니다");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])

        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::LOCATION])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
