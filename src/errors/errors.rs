//! 사용자 저장 흐름 전역에서 사용하는 에러 시스템
//!
//! 연결, 스키마 검증, 저장소 쓰기 단계별로 에러 타입을 분리하고,
//! `thiserror`로 `Error`/`Display`를 구현합니다.
//! 바이너리는 최상위에서 [`AppError`] 하나로 모아 전파합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn run(config: &DatabaseConfig) -> Result<User, AppError> {
//!     let database = Database::connect(config).await?;   // ConnectionError → AppError
//!     let repo = UserRepository::new(&database);
//!     let mut user = NewUser::new("Sanvika", "sanvika@example.com");
//!     Ok(repo.persist(&mut user).await?)                 // PersistError → AppError
//! }
//! ```

use thiserror::Error;
use crate::domain::entities::users::user::UserState;

/// MongoDB 연결 수립 에러
///
/// `Database::connect` 단계에서만 발생하며, 내부 재시도는 하지 않습니다.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// 연결 URI 또는 클라이언트 옵션이 잘못됨
    #[error("Invalid connection configuration: {0}")]
    InvalidConfiguration(String),

    /// 서버 선택 실패, DNS 조회 실패, 소켓 오류
    #[error("Store unreachable: {0}")]
    Unreachable(String),

    /// 자격 증명 거부
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// 소켓 수준 핸드셰이크 타임아웃
    #[error("Handshake timed out: {0}")]
    Timeout(String),

    /// 그 밖의 연결 확인(ping) 실패
    #[error("Handshake failed: {0}")]
    Handshake(String),
}

/// 스키마 검증 실패 종류
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationKind {
    /// 필드 없음, `null`, 또는 빈 문자열
    #[error("is required")]
    Missing,
    /// 다른 BSON 타입의 값
    #[error("must be {expected}, got {found}")]
    WrongType {
        expected: &'static str,
        found: String,
    },
}

/// 어떤 필드가 왜 스키마를 통과하지 못했는지
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{field}` {kind}")]
pub struct ValidationFailure {
    pub field: String,
    pub kind: ValidationKind,
}

impl ValidationFailure {
    pub fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: ValidationKind::Missing,
        }
    }

    pub fn wrong_type(field: &str, expected: &'static str, found: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            kind: ValidationKind::WrongType {
                expected,
                found: found.into(),
            },
        }
    }
}

/// `DocumentStore` 구현체가 보고하는 쓰기 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// 저장소가 쓰기를 거부함 (중복 키, 제약 조건 위반 등)
    #[error("write rejected (code {code}): {message}")]
    Rejected { code: i32, message: String },

    /// 쓰기 도중 저장소와 통신할 수 없음
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// 엔티티 저장 에러
#[derive(Error, Debug)]
pub enum PersistError {
    /// 스키마 검증 실패 (아무것도 기록되지 않음)
    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationFailure),

    /// 저장소가 문서를 거부함
    #[error("Store rejected the write (code {code}): {message}")]
    StoreRejected { code: i32, message: String },

    /// 쓰기 도중 연결 문제
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// 이미 저장되었거나 거부된 인스턴스를 다시 저장하려 함
    #[error("Instance is {0} and cannot be persisted again")]
    InvalidState(UserState),

    /// BSON 변환 실패 등 예상하지 못한 내부 오류
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PersistError {
    /// 검증 실패인 경우 문제가 된 필드 이름
    pub fn invalid_field(&self) -> Option<&str> {
        match self {
            PersistError::ValidationFailed(failure) => Some(&failure.field),
            _ => None,
        }
    }
}

impl From<ValidationFailure> for PersistError {
    fn from(failure: ValidationFailure) -> Self {
        PersistError::ValidationFailed(failure)
    }
}

impl From<StoreError> for PersistError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Rejected { code, message } => PersistError::StoreRejected { code, message },
            StoreError::Unavailable(message) => PersistError::StoreUnavailable(message),
        }
    }
}

/// 바이너리 최상위 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
