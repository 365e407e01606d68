//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`NewUser`](user::NewUser): 저장 전 인스턴스 (필드 매핑 + 상태)
//! - [`User`](user::User): 저장된 문서 (`_id`, `created_at` 포함)
//! - [`UserState`](user::UserState): `Unsaved → Validating → {Saved | Rejected}`
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use mongodb::bson::doc;
//! use crate::domain::entities::users::user::NewUser;
//!
//! let user = NewUser::construct(doc! {
//!     "name": "Sanvika",
//!     "email": "sanvika@example.com",
//! });
//! ```

pub mod user;
