//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - URI 자격 증명 가리기
//! - [`display_terminal`] - 저장 결과 터미널 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::redact_uri_credentials;
//! use crate::utils::display_terminal::print_saved_user;
//!
//! info!("connecting to {}", redact_uri_credentials(&config.uri));
//! print_saved_user(&saved);
//! ```

pub mod string_utils;
pub mod display_terminal;
