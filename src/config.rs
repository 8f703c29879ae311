use std::env;
use std::time::Duration;

/// 기본 생성 엔드포인트 (OpenRouter)
pub const DEFAULT_API_BASE: &str = "https://openrouter.ai/api/v1";

/// 기본 생성 대기 시간 (초)
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 45;

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,

    // Generation endpoint
    pub api_base: String,
    pub generation_timeout: Duration,
    /// `HTTP-Referer` 식별 헤더 (없으면 생략)
    pub referer: Option<String>,
    /// `X-Title` 식별 헤더
    pub title: String,

    /// 세션당 분당 생성 요청 수
    pub rate_limit_per_minute: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            api_base: DEFAULT_API_BASE.to_string(),
            generation_timeout: Duration::from_secs(DEFAULT_GENERATION_TIMEOUT_SECS),
            referer: None,
            title: "Philosophical AI Journalist".to_string(),
            rate_limit_per_minute: 10,
        }
    }
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let server_port = match env::var("SERVER_PORT") {
            Ok(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v))?,
            Err(_) => defaults.server_port,
        };

        let generation_timeout = match env::var("GENERATION_TIMEOUT_SECS") {
            Ok(v) => match v.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(v)),
            },
            Err(_) => defaults.generation_timeout,
        };

        let rate_limit_per_minute = match env::var("RATE_LIMIT_PER_MINUTE") {
            Ok(v) => match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidRateLimit(v)),
            },
            Err(_) => defaults.rate_limit_per_minute,
        };

        Ok(Self {
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            api_base: env::var("OPENROUTER_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            generation_timeout,
            referer: env::var("OPENROUTER_REFERER").ok().filter(|v| !v.is_empty()),
            title: env::var("OPENROUTER_TITLE").unwrap_or(defaults.title),
            rate_limit_per_minute,
        })
    }

    /// 요청 전체 타임아웃 (생성 대기 시간 + 여유분)
    pub fn request_timeout(&self) -> Duration {
        self.generation_timeout + Duration::from_secs(15)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
    #[error("Invalid generation timeout: {0}")]
    InvalidTimeout(String),
    #[error("Invalid rate limit: {0}")]
    InvalidRateLimit(String),
}
