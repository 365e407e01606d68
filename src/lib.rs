//! 사용자 저장 서비스
//!
//! MongoDB에 연결하고, 선언된 스키마를 따르는 `User` 엔티티 하나를 만들어
//! 검증한 뒤 문서로 저장하는 Rust 라이브러리입니다.
//!
//! # Features
//!
//! - **연결 관리**: 단일 소유 연결, `ping`으로 연결 확인, 명시적 종료
//! - **스키마 검증**: 필수 필드/타입 검증을 저장 전 독립 단계로 수행
//! - **저장소 추상화**: `DocumentStore` trait으로 MongoDB와 메모리 저장소 교체 가능
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │     main.rs     │ ← 설정 로드, 로깅, 실행 후 종료
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 검증 + 저장 (UserRepository::persist)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DocumentStore   │ ← Database (MongoDB) / MemoryStore
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_store::config::DatabaseConfig;
//! use user_store::db::Database;
//! use user_store::domain::entities::users::user::NewUser;
//! use user_store::repositories::users::user_repo::UserRepository;
//!
//! let database = Database::connect(&DatabaseConfig::from_env()).await?;
//! let mut user = NewUser::new("Sanvika", "sanvika@example.com");
//! let saved = UserRepository::new(&database).persist(&mut user).await?;
//! database.shutdown().await;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod utils;
pub mod errors;
