use axum::{extract::Path, Json};

use super::{FrameworkDefinition, ModelDefinition, Tone, TopicTemplate};
use crate::domain::article::dto::{Depth, DepthInfo};
use crate::error::AppError;
use crate::response::{BaseResponse, ErrorResponse};

/// 프레임워크 목록 조회
#[utoipa::path(
    get,
    path = "/api/catalog/frameworks",
    tag = "Catalog",
    responses(
        (status = 200, description = "조회 성공", body = BaseResponse<Vec<FrameworkDefinition>>)
    )
)]
pub async fn list_frameworks() -> Json<BaseResponse<&'static [FrameworkDefinition]>> {
    Json(BaseResponse::success(super::frameworks()))
}

/// 프레임워크 단건 조회
#[utoipa::path(
    get,
    path = "/api/catalog/frameworks/{id}",
    tag = "Catalog",
    params(("id" = String, Path, description = "프레임워크 id", example = "human_experience")),
    responses(
        (status = 200, description = "조회 성공", body = BaseResponse<FrameworkDefinition>),
        (status = 404, description = "존재하지 않는 프레임워크", body = ErrorResponse)
    )
)]
pub async fn get_framework(
    Path(id): Path<String>,
) -> Result<Json<BaseResponse<&'static FrameworkDefinition>>, AppError> {
    Ok(Json(BaseResponse::success(super::get_framework(&id)?)))
}

/// 모델 목록 조회
#[utoipa::path(
    get,
    path = "/api/catalog/models",
    tag = "Catalog",
    responses(
        (status = 200, description = "조회 성공", body = BaseResponse<Vec<ModelDefinition>>)
    )
)]
pub async fn list_models() -> Json<BaseResponse<&'static [ModelDefinition]>> {
    Json(BaseResponse::success(super::models()))
}

/// 모델 단건 조회
#[utoipa::path(
    get,
    path = "/api/catalog/models/{id}",
    tag = "Catalog",
    params(("id" = String, Path, description = "모델 id", example = "balanced")),
    responses(
        (status = 200, description = "조회 성공", body = BaseResponse<ModelDefinition>),
        (status = 404, description = "존재하지 않는 모델", body = ErrorResponse)
    )
)]
pub async fn get_model(
    Path(id): Path<String>,
) -> Result<Json<BaseResponse<&'static ModelDefinition>>, AppError> {
    Ok(Json(BaseResponse::success(super::get_model(&id)?)))
}

/// 어조 목록 조회
#[utoipa::path(
    get,
    path = "/api/catalog/tones",
    tag = "Catalog",
    responses(
        (status = 200, description = "조회 성공", body = BaseResponse<Vec<Tone>>)
    )
)]
pub async fn list_tones() -> Json<BaseResponse<&'static [Tone]>> {
    Json(BaseResponse::success(super::tones()))
}

/// 빠른 시작 템플릿 목록 조회
#[utoipa::path(
    get,
    path = "/api/catalog/templates",
    tag = "Catalog",
    responses(
        (status = 200, description = "조회 성공", body = BaseResponse<Vec<TopicTemplate>>)
    )
)]
pub async fn list_templates() -> Json<BaseResponse<&'static [TopicTemplate]>> {
    Json(BaseResponse::success(super::templates()))
}

/// 분석 깊이 목록 조회
#[utoipa::path(
    get,
    path = "/api/catalog/depths",
    tag = "Catalog",
    responses(
        (status = 200, description = "조회 성공", body = BaseResponse<Vec<DepthInfo>>)
    )
)]
pub async fn list_depths() -> Json<BaseResponse<Vec<DepthInfo>>> {
    Json(BaseResponse::success(
        Depth::ALL.iter().map(|depth| depth.info()).collect(),
    ))
}
