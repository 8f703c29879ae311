use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use metrics_exporter_prometheus::PrometheusBuilder;

use philosophical_journalist::{
    config::AppConfig, create_router, domain::health::service::init_start_time,
    logging::init_logging, shutdown::shutdown_signal, AppState, OpenRouterClient,
};

#[tokio::main]
async fn main() {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화
    init_logging();
    init_start_time();

    // 3. 설정 로드
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    // 4. 메트릭 레코더 설치
    let metrics_handle = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install metrics recorder, /metrics disabled");
            None
        }
    };

    // 5. 생성 클라이언트 및 상태 구성
    let client = match OpenRouterClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build generation client");
            std::process::exit(1);
        }
    };
    let state = AppState::new(Arc::new(client), config.rate_limit_per_minute);

    // 6. 라우터 설정
    let mut app = create_router(state, config.request_timeout());
    if let Some(handle) = metrics_handle {
        app = app.merge(
            Router::new().route("/metrics", get(move || std::future::ready(handle.render()))),
        );
    }

    // 7. 서버 실행
    let addr: SocketAddr = match format!("{}:{}", config.server_host, config.server_port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, host = %config.server_host, "Invalid server address");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "Failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(
        %addr,
        api_base = %config.api_base,
        generation_timeout_secs = config.generation_timeout.as_secs(),
        "Server listening"
    );
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }

    tracing::info!("Server shutdown complete");
}
