use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tokio::time::timeout;

use super::dto::{CheckResult, HealthChecks, HealthState, HealthStatus};
use crate::domain::article::GenerationService;

/// 서버 시작 시간 (전역)
static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// 헬스체크 타임아웃 (5초)
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Degraded 상태 임계값 (2초)
const DEGRADED_THRESHOLD: Duration = Duration::from_secs(2);

/// 캐시 유효 시간 (30초)
const CACHE_DURATION: Duration = Duration::from_secs(30);

/// 캐시된 헬스체크 결과
struct CachedHealth {
    result: CheckResult,
    cached_at: Instant,
}

/// 서버 시작 시간 초기화
///
/// main 함수에서 서버 시작 시 호출해야 합니다.
pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// 서버 가동 시간(초) 반환
pub fn get_uptime_secs() -> u64 {
    START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0)
}

/// 헬스체크 수행기
///
/// 생성 엔드포인트 연결 결과를 30초 동안 캐싱합니다.
#[derive(Clone)]
pub struct HealthService {
    generation: GenerationService,
    cache: Arc<RwLock<Option<CachedHealth>>>,
}

impl HealthService {
    pub fn new(generation: GenerationService) -> Self {
        Self {
            generation,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// 전체 헬스 체크 수행 (캐싱 적용)
    pub async fn check_health(&self) -> HealthStatus {
        let generation_check = self.check_generation_cached().await;

        HealthStatus {
            status: determine_health_state(&generation_check),
            version: env!("CARGO_PKG_VERSION"),
            uptime_secs: get_uptime_secs(),
            checks: HealthChecks {
                generation_api: generation_check,
            },
        }
    }

    async fn check_generation_cached(&self) -> CheckResult {
        {
            let cached = self.cache.read().await;
            if let Some(ref c) = *cached {
                if c.cached_at.elapsed() < CACHE_DURATION {
                    tracing::debug!(
                        cache_age_secs = c.cached_at.elapsed().as_secs(),
                        "Using cached health check result"
                    );
                    return c.result.clone();
                }
            }
        }

        tracing::debug!("Performing fresh health check");
        let result = self.check_generation_fresh().await;

        *self.cache.write().await = Some(CachedHealth {
            result: result.clone(),
            cached_at: Instant::now(),
        });

        result
    }

    async fn check_generation_fresh(&self) -> CheckResult {
        let start = Instant::now();
        let result = timeout(HEALTH_CHECK_TIMEOUT, self.generation.check_connectivity()).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(Ok(())) => {
                tracing::info!(latency_ms, "Generation API health check passed");
                CheckResult::success(latency_ms)
            }
            Ok(Err(e)) => {
                tracing::warn!(latency_ms, error = %e, "Generation API health check failed");
                CheckResult::failure(latency_ms, e.to_string())
            }
            Err(_) => {
                tracing::warn!("Generation API health check timed out");
                CheckResult::timeout(latency_ms)
            }
        }
    }
}

/// 생성 엔드포인트 상태에 따른 전체 상태 결정
fn determine_health_state(check: &CheckResult) -> HealthState {
    if !check.status {
        return HealthState::Unhealthy;
    }

    match check.latency_ms {
        Some(latency) if latency >= DEGRADED_THRESHOLD.as_millis() as u64 => HealthState::Degraded,
        _ => HealthState::Healthy,
    }
}
