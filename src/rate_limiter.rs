use std::num::NonZeroU32;
use std::sync::Arc;

use governor::{
    clock::{Clock, DefaultClock},
    DefaultKeyedRateLimiter, Quota,
};

use crate::error::AppError;

/// 추적 키가 이 수를 넘으면 새 요청 시점에 초기 상태와 같은 키를 정리
const RETAIN_THRESHOLD: usize = 1024;

/// 세션별 생성 요청 횟수를 제한하는 RateLimiter
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<DefaultKeyedRateLimiter<String>>,
    clock: DefaultClock,
}

impl RateLimiter {
    /// 분당 `max_requests`회까지 허용하는 RateLimiter를 생성합니다.
    pub fn per_minute(max_requests: u32) -> Self {
        let max_requests = NonZeroU32::new(max_requests).unwrap_or(NonZeroU32::MIN);

        Self {
            limiter: Arc::new(DefaultKeyedRateLimiter::keyed(Quota::per_minute(max_requests))),
            clock: DefaultClock::default(),
        }
    }

    /// 요청 허용 여부 확인
    ///
    /// # Returns
    /// * `Ok(())` - 요청이 허용됨
    /// * `Err(AppError::RateLimitExceeded)` - 요청 한도 초과
    pub fn check(&self, key: &str) -> Result<(), AppError> {
        if self.limiter.len() >= RETAIN_THRESHOLD {
            self.retain_recent();
        }

        self.limiter.check_key(&key.to_string()).map_err(|not_until| {
            let wait = not_until.wait_time_from(self.clock.now());
            tracing::warn!(wait_secs = wait.as_secs(), "Rate limit exceeded");
            AppError::RateLimitExceeded(format!(
                "Too many generation requests. Try again in {} seconds.",
                wait.as_secs().max(1)
            ))
        })
    }

    /// 한도가 모두 회복된 키 제거
    pub fn retain_recent(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    /// 추적 중인 키 수
    pub fn tracked_keys(&self) -> usize {
        self.limiter.len()
    }
}
