//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티들을 정의합니다.
//!
//! 모든 엔티티는 다음 특징을 가집니다:
//! - **BSON 직렬화**: `serde`와 `bson`을 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **스키마 선언**: [`Schema`](crate::domain::schema::Schema)로 저장 전 형태 검증
//!
//! ```text
//! entities/
//! ├── mod.rs
//! └── users/
//!     ├── mod.rs
//!     └── user.rs     ← User, NewUser, UserState
//! ```

pub mod users;
