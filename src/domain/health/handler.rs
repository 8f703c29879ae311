use axum::{extract::State, http::StatusCode, Json};

use super::dto::{HealthState, HealthStatus};
use crate::AppState;

/// 서버 및 생성 엔드포인트 상태 확인
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "정상 또는 부분 장애", body = HealthStatus),
        (status = 503, description = "장애", body = HealthStatus)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let health = state.health.check_health().await;

    let status = match health.status {
        HealthState::Healthy | HealthState::Degraded => StatusCode::OK,
        HealthState::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status, Json(health))
}
