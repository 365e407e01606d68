//! 에러 타입 모듈
//!
//! 연결([`ConnectionError`]), 검증([`ValidationFailure`]), 저장소([`StoreError`]),
//! 저장([`PersistError`]) 단계의 에러와 바이너리용 [`AppError`]를 제공합니다.

pub mod errors;

pub use errors::*;
