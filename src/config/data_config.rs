//! 데이터베이스 연결 설정 관리 모듈
//!
//! 실행 환경과 MongoDB 연결 설정을 환경 변수에서 읽어옵니다.

use std::env;
use std::time::Duration;
use log::warn;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `APP_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 주어진 조회 함수로 실행 환경을 결정합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "production".to_string());

        Self::from_name(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며, 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별 기본 데이터베이스 이름
    pub fn default_database_name(&self) -> &'static str {
        match self {
            Environment::Development => "user_store_dev",
            Environment::Test => "user_store_test",
            Environment::Staging => "user_store_staging",
            Environment::Production => "user_store",
        }
    }
}

/// MongoDB 연결 설정
///
/// ## 환경 변수
/// - `MONGODB_URI`: 연결 URI (기본값: "mongodb://localhost:27017")
/// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: 환경별, 예: "user_store_dev")
/// - `MONGODB_APP_NAME`: 서버 로그에 남는 애플리케이션 이름 (기본값: "user_store")
/// - `MONGODB_CONNECT_TIMEOUT_MS`: 소켓 연결 타임아웃 (선택)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_MS`: 서버 선택 타임아웃 (선택)
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
    pub app_name: String,
    pub connect_timeout: Option<Duration>,
    pub server_selection_timeout: Option<Duration>,
}

impl DatabaseConfig {
    pub const DEFAULT_URI: &'static str = "mongodb://localhost:27017";
    pub const DEFAULT_APP_NAME: &'static str = "user_store";

    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 주어진 조회 함수로 설정을 구성합니다.
    ///
    /// 테스트에서 프로세스 환경을 건드리지 않고 설정을 주입할 때 사용합니다.
    ///
    /// ```rust,ignore
    /// let config = DatabaseConfig::from_lookup(|key| match key {
    ///     "MONGODB_URI" => Some("mongodb://db:27017".to_string()),
    ///     _ => None,
    /// });
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup);

        let uri = lookup("MONGODB_URI").unwrap_or_else(|| Self::DEFAULT_URI.to_string());
        let database_name = lookup("DATABASE_NAME")
            .unwrap_or_else(|| environment.default_database_name().to_string());
        let app_name = lookup("MONGODB_APP_NAME")
            .unwrap_or_else(|| Self::DEFAULT_APP_NAME.to_string());

        Self {
            uri,
            database_name,
            app_name,
            connect_timeout: parse_millis(&lookup, "MONGODB_CONNECT_TIMEOUT_MS"),
            server_selection_timeout: parse_millis(&lookup, "MONGODB_SERVER_SELECTION_TIMEOUT_MS"),
        }
    }

    /// 지정한 URI와 데이터베이스 이름으로 설정을 만듭니다. 나머지는 기본값입니다.
    pub fn new(uri: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database_name: database_name.into(),
            app_name: Self::DEFAULT_APP_NAME.to_string(),
            connect_timeout: None,
            server_selection_timeout: None,
        }
    }

    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }
}

/// 밀리초 단위 환경 변수를 파싱합니다. 파싱 실패 시 경고 후 무시합니다.
fn parse_millis<F>(lookup: &F, key: &str) -> Option<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;

    match raw.trim().parse::<u64>() {
        Ok(millis) => Some(Duration::from_millis(millis)),
        Err(e) => {
            warn!("{} 파싱 실패 ({:?}): {}. 드라이버 기본값 사용", key, raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("DEV"), Environment::Development);
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("stage"), Environment::Staging);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_environment_falls_back_to_app_env() {
        let env = Environment::from_lookup(lookup_from(&[("APP_ENV", "testing")]));
        assert_eq!(env, Environment::Test);

        let env = Environment::from_lookup(lookup_from(&[]));
        assert_eq!(env, Environment::Production);
    }

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "user_store");
        assert_eq!(config.app_name, "user_store");
        assert_eq!(config.connect_timeout, None);
        assert_eq!(config.server_selection_timeout, None);
    }

    #[test]
    fn test_database_name_follows_environment() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "dev")]));
        assert_eq!(config.database_name, "user_store_dev");

        let config = DatabaseConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "dev"),
            ("DATABASE_NAME", "custom"),
        ]));
        assert_eq!(config.database_name, "custom");
    }

    #[test]
    fn test_timeouts_are_parsed_or_ignored() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[
            ("MONGODB_CONNECT_TIMEOUT_MS", "1500"),
            ("MONGODB_SERVER_SELECTION_TIMEOUT_MS", "soon"),
        ]));

        assert_eq!(config.connect_timeout, Some(Duration::from_millis(1500)));
        assert_eq!(config.server_selection_timeout, None);
    }
}
