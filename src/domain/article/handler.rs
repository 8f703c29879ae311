use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    dto::{
        Article, ExportQuery, GenerateArticleRequest, VerifyCredentialRequest,
        VerifyCredentialResponse,
    },
    export, service,
    session::{RequiredSessionId, SessionId, SESSION_HEADER},
};
use crate::error::AppError;
use crate::response::{BaseResponse, ErrorResponse};
use crate::AppState;

/// 현재 결과 폐기 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClearResponse {
    /// 폐기할 결과가 있었는지 여부
    pub cleared: bool,
}

/// 세션 발급 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionIssued {
    #[schema(example = "4f8d2c1e-9b7a-4e2b-8f6d-1a2b3c4d5e6f")]
    pub session_id: String,
}

fn with_session<T: IntoResponse>(session: &SessionId, body: T) -> Response {
    ([(SESSION_HEADER, session.header_value())], body).into_response()
}

/// 글 생성
///
/// 선택한 프레임워크와 어조로 프롬프트를 만들어 생성 엔드포인트를 한 번 호출합니다.
/// 같은 세션의 이전 결과는 호출 전에 폐기됩니다.
#[utoipa::path(
    post,
    path = "/api/articles",
    tag = "Article",
    request_body = GenerateArticleRequest,
    params(("x-session-id" = String, Header, description = "세션 id (필수)")),
    responses(
        (status = 200, description = "생성 성공", body = BaseResponse<Article>),
        (status = 400, description = "잘못된 요청 또는 세션 id 누락", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 프레임워크/모델", body = ErrorResponse),
        (status = 409, description = "같은 세션에서 생성 진행 중", body = ErrorResponse),
        (status = 429, description = "요청 한도 초과", body = ErrorResponse),
        (status = 502, description = "생성 엔드포인트 에러", body = ErrorResponse),
        (status = 503, description = "네트워크 에러", body = ErrorResponse),
        (status = 504, description = "생성 시간 초과", body = ErrorResponse)
    )
)]
pub async fn generate_article(
    State(state): State<AppState>,
    RequiredSessionId(session): RequiredSessionId,
    request: Result<Json<GenerateArticleRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    // JSON 파싱 에러 처리
    let Json(request) = request?;

    tracing::info!(
        topic_length = request.topic.len(),
        framework = %request.framework,
        model = %request.model,
        tone = %request.tone,
        depth = ?request.depth,
        "Generate request received"
    );

    // 입력 검증 (세션 상태 변경 전)
    let validated = service::validate_request(&request)?;
    state.rate_limiter.check(&session.0)?;

    // 이전 결과 폐기 후 생성
    let in_flight = state.sessions.begin(&session.0)?;
    let article = state.generation.generate(validated).await?;
    in_flight.complete(article.clone());

    Ok(with_session(&session, Json(BaseResponse::success(article))))
}

/// 세션 id 발급
///
/// 서버에 상태를 만들지 않습니다. 생성 요청에는 이 id를 `x-session-id`로 보냅니다.
#[utoipa::path(
    post,
    path = "/api/sessions",
    tag = "Article",
    responses(
        (status = 200, description = "발급 성공", body = BaseResponse<SessionIssued>)
    )
)]
pub async fn issue_session() -> Response {
    let session = SessionId::issue();
    let body = SessionIssued {
        session_id: session.0.clone(),
    };

    with_session(&session, Json(BaseResponse::success(body)))
}

/// 현재 결과 조회
#[utoipa::path(
    get,
    path = "/api/articles/current",
    tag = "Article",
    params(("x-session-id" = String, Header, description = "세션 id")),
    responses(
        (status = 200, description = "조회 성공", body = BaseResponse<Article>),
        (status = 404, description = "결과 없음", body = ErrorResponse)
    )
)]
pub async fn get_current_article(
    State(state): State<AppState>,
    session: SessionId,
) -> Result<Response, AppError> {
    let article = state
        .sessions
        .current(&session.0)
        .ok_or_else(|| AppError::not_found("article", "current"))?;

    Ok(with_session(&session, Json(BaseResponse::success(article))))
}

/// 현재 결과 폐기 (새 글 작성)
#[utoipa::path(
    delete,
    path = "/api/articles/current",
    tag = "Article",
    params(("x-session-id" = String, Header, description = "세션 id")),
    responses(
        (status = 200, description = "폐기 성공", body = BaseResponse<ClearResponse>)
    )
)]
pub async fn clear_current_article(State(state): State<AppState>, session: SessionId) -> Response {
    let cleared = state.sessions.clear(&session.0);
    tracing::debug!(cleared, "Current article cleared");

    with_session(&session, Json(BaseResponse::success(ClearResponse { cleared })))
}

/// 현재 결과 내보내기
#[utoipa::path(
    get,
    path = "/api/articles/current/export",
    tag = "Article",
    params(
        ExportQuery,
        ("x-session-id" = String, Header, description = "세션 id")
    ),
    responses(
        (status = 200, description = "문서 다운로드", content_type = "text/plain", body = String),
        (status = 400, description = "잘못된 형식", body = ErrorResponse),
        (status = 404, description = "결과 없음", body = ErrorResponse)
    )
)]
pub async fn export_current_article(
    State(state): State<AppState>,
    session: SessionId,
    query: Result<Query<ExportQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;

    let article = state
        .sessions
        .current(&session.0)
        .ok_or_else(|| AppError::not_found("article", "current"))?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        export::file_name(&article, query.format)
    );

    Ok((
        [
            (header::CONTENT_TYPE, query.format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export::render(&article, query.format),
    )
        .into_response())
}

/// API 키 확인
///
/// 접두사 형식 검사(참고용)와 생성 엔드포인트에 대한 인증 확인을 함께 수행합니다.
#[utoipa::path(
    post,
    path = "/api/credentials/verify",
    tag = "Article",
    request_body = VerifyCredentialRequest,
    responses(
        (status = 200, description = "확인 완료", body = BaseResponse<VerifyCredentialResponse>),
        (status = 400, description = "잘못된 요청", body = ErrorResponse)
    )
)]
pub async fn verify_credential(
    State(state): State<AppState>,
    request: Result<Json<VerifyCredentialRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<VerifyCredentialResponse>>, AppError> {
    let Json(request) = request?;
    request.validate()?;

    let response = state.generation.verify_credential(&request.api_key).await;

    Ok(Json(BaseResponse::success(response)))
}
