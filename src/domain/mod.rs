//! # Domain Module
//!
//! 저장 대상 엔티티와 그 스키마를 정의합니다.
//!
//! ```text
//! domain/
//! ├── schema.rs      ← 필드 선언과 문서 검증
//! └── entities/      ← User 엔티티
//! ```

pub mod entities;
pub mod schema;
