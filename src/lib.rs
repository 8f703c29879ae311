pub mod config;
pub mod domain;
pub mod error;
pub mod global;
pub mod logging;
pub mod rate_limiter;
pub mod response;
pub mod shutdown;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use domain::article::{
    GenerationClient, GenerationClientTrait, GenerationService, OpenRouterClient, SessionStore,
};
use domain::health::HealthService;
use rate_limiter::RateLimiter;

/// 테스트 라우터의 요청 타임아웃
const TEST_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// 애플리케이션 상태
#[derive(Clone)]
pub struct AppState {
    pub generation: GenerationService,
    pub sessions: SessionStore,
    pub rate_limiter: RateLimiter,
    pub health: HealthService,
}

impl AppState {
    pub fn new(client: GenerationClient, rate_limit_per_minute: u32) -> Self {
        let generation = GenerationService::new(client);

        Self {
            health: HealthService::new(generation.clone()),
            generation,
            sessions: SessionStore::new(),
            rate_limiter: RateLimiter::per_minute(rate_limit_per_minute),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::health::handler::health_check,
        domain::catalog::handler::list_frameworks,
        domain::catalog::handler::get_framework,
        domain::catalog::handler::list_models,
        domain::catalog::handler::get_model,
        domain::catalog::handler::list_tones,
        domain::catalog::handler::list_templates,
        domain::catalog::handler::list_depths,
        domain::article::handler::issue_session,
        domain::article::handler::generate_article,
        domain::article::handler::get_current_article,
        domain::article::handler::clear_current_article,
        domain::article::handler::export_current_article,
        domain::article::handler::verify_credential,
    ),
    components(
        schemas(
            domain::catalog::FrameworkDefinition,
            domain::catalog::ModelDefinition,
            domain::catalog::TopicTemplate,
            domain::catalog::Tone,
            domain::article::dto::Depth,
            domain::article::dto::DepthInfo,
            domain::article::dto::GenerateArticleRequest,
            domain::article::dto::Article,
            domain::article::dto::VerifyCredentialRequest,
            domain::article::dto::VerifyCredentialResponse,
            domain::article::dto::ExportFormat,
            domain::article::handler::ClearResponse,
            domain::article::handler::SessionIssued,
            domain::health::dto::HealthStatus,
            domain::health::dto::HealthState,
            domain::health::dto::HealthChecks,
            domain::health::dto::CheckResult,
            response::ErrorResponse,
        )
    ),
    tags(
        (name = "Article", description = "철학 기사 생성 API"),
        (name = "Catalog", description = "프레임워크/모델/어조 카탈로그 API"),
        (name = "Health", description = "헬스체크 API")
    )
)]
pub struct ApiDoc;

/// 라우터 생성
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let api = Router::new()
        .route("/health", get(domain::health::handler::health_check))
        .route(
            "/api/catalog/frameworks",
            get(domain::catalog::handler::list_frameworks),
        )
        .route(
            "/api/catalog/frameworks/:id",
            get(domain::catalog::handler::get_framework),
        )
        .route("/api/catalog/models", get(domain::catalog::handler::list_models))
        .route("/api/catalog/models/:id", get(domain::catalog::handler::get_model))
        .route("/api/catalog/tones", get(domain::catalog::handler::list_tones))
        .route(
            "/api/catalog/templates",
            get(domain::catalog::handler::list_templates),
        )
        .route("/api/catalog/depths", get(domain::catalog::handler::list_depths))
        .route("/api/sessions", post(domain::article::handler::issue_session))
        .route(
            "/api/articles",
            post(domain::article::handler::generate_article),
        )
        .route(
            "/api/articles/current",
            get(domain::article::handler::get_current_article)
                .delete(domain::article::handler::clear_current_article),
        )
        .route(
            "/api/articles/current/export",
            get(domain::article::handler::export_current_article),
        )
        .route(
            "/api/credentials/verify",
            post(domain::article::handler::verify_credential),
        )
        .with_state(state);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api)
        .layer(middleware::from_fn(global::middleware::request_tracing))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Mock 클라이언트를 사용하는 테스트용 라우터 생성
pub fn create_test_router_with_mock(client: impl GenerationClientTrait + 'static) -> Router {
    create_test_router_with_limit(client, u32::MAX)
}

/// 분당 요청 한도를 지정한 테스트용 라우터 생성
pub fn create_test_router_with_limit(
    client: impl GenerationClientTrait + 'static,
    rate_limit_per_minute: u32,
) -> Router {
    let state = AppState::new(Arc::new(client), rate_limit_per_minute);
    create_router(state, TEST_REQUEST_TIMEOUT)
}
