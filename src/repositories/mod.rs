//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 [`DocumentStore`](crate::db::DocumentStore) 참조를 받아 동작하므로
//! MongoDB 연결 대신 메모리 저장소로도 실행할 수 있습니다.

pub mod users;
