//! 사용자 저장 메인 애플리케이션
//!
//! MongoDB에 연결하여 사용자 한 명을 저장하고 종료합니다.
//! 연결은 성공/실패와 관계없이 종료 전에 닫습니다.

use std::path::PathBuf;
use env_logger::Env;
use log::{info, warn};
use user_store::config::{DatabaseConfig, Environment};
use user_store::db::Database;
use user_store::domain::entities::users::user::{NewUser, User};
use user_store::errors::{AppResult, PersistError};
use user_store::repositories::users::user_repo::UserRepository;
use user_store::utils::display_terminal::print_saved_user;

#[tokio::main]
async fn main() -> AppResult<()> {
    // 환경 설정 및 로깅 초기화
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let env_file = load_env_file(&profile);
    init_logging();

    info!("🚀 사용자 저장 시작중... (profile: {}, environment: {:?})", profile, Environment::current());
    match env_file {
        Ok(path) => info!("{} 파일 로드 됨", path.display()),
        Err(e) => warn!("환경 파일 로드 실패: {}", e),
    }

    let config = DatabaseConfig::from_env();
    let database = Database::connect(&config).await?;

    let outcome = save_user(&database).await;

    // 저장 결과와 관계없이 연결 해제
    database.shutdown().await;

    let saved = outcome?;
    print_saved_user(&saved);

    Ok(())
}

/// 사용자 한 명을 만들어 저장합니다
async fn save_user(database: &Database) -> Result<User, PersistError> {
    let repo = UserRepository::new(database);
    let mut user = NewUser::new("Sanvika", "sanvika@example.com");

    repo.persist(&mut user).await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 호출자가 기록합니다.
fn load_env_file(profile: &str) -> Result<PathBuf, dotenv::Error> {
    match profile {
        "prod" => dotenv::from_filename(".env.prod"),
        "dev" => dotenv::from_filename(".env.dev"),
        _ => dotenv::dotenv(),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,mongodb=warn")
///
/// ```bash
/// RUST_LOG=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,mongodb=warn"));
}
