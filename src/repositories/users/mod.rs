//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)를 통해 사용자 인스턴스를 검증하고
//! `users` 컬렉션에 저장합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let repo = UserRepository::new(&database);
//! let saved = repo.persist(&mut new_user).await?;
//! ```

pub mod user_repo;
