//! GET /api/* endpoints
//!
//! Thin translation layer: query parameters in, engine output out. All
//! handlers are read-only and synchronous apart from the async signatures
//! axum wants.

use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::debug;
use utoipa::OpenApi;

use bx_catalog::{evaluate, group_for_model, FacetIndex};
use bx_types::AppError;

use crate::error::{ApiResult, ErrorResponse};
use crate::state::AppState;
use crate::types::{MetaResponse, ModelSummary, ModelsQuery, ModelsResponse, ProfilesResponse};

#[derive(OpenApi)]
#[openapi(
    paths(list_models, get_model, list_model_profiles, get_facets, get_meta),
    components(schemas(ErrorResponse, ModelsResponse, ModelSummary, ProfilesResponse, MetaResponse)),
    tags((name = "catalog", description = "Model catalog queries"))
)]
pub struct ApiDoc;

/// GET /api/models
/// Evaluate the current search/facet/sort selections over the full catalog.
#[utoipa::path(
    get,
    path = "/api/models",
    tag = "catalog",
    params(ModelsQuery),
    responses(
        (status = 200, description = "Filtered, ordered model list", body = ModelsResponse),
        (status = 400, description = "Invalid sort parameters", body = ErrorResponse)
    )
)]
pub async fn list_models(
    State(state): State<AppState>,
    Query(query): Query<ModelsQuery>,
) -> ApiResult<Json<ModelsResponse>> {
    let filter = query.filter_state()?;
    let hits = evaluate(state.store.models(), &filter);
    debug!(hits = hits.len(), "models evaluated");

    let data: Vec<ModelSummary> = hits
        .into_iter()
        .map(|record| ModelSummary {
            beta: state.store.is_beta(&record.model_id),
            has_profiles: state.store.has_profiles_for(&record.model_id),
            record: record.clone(),
        })
        .collect();

    Ok(Json(ModelsResponse {
        total: data.len(),
        data,
    }))
}

/// GET /api/models/{model_id}
#[utoipa::path(
    get,
    path = "/api/models/{model_id}",
    tag = "catalog",
    params(("model_id" = String, Path, description = "Model identifier")),
    responses(
        (status = 200, description = "Model details", body = ModelSummary),
        (status = 404, description = "Model not found", body = ErrorResponse)
    )
)]
pub async fn get_model(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
) -> ApiResult<Json<ModelSummary>> {
    let record = state
        .store
        .model(&model_id)
        .ok_or_else(|| AppError::NotFound(format!("Model '{}' not found", model_id)))?;

    Ok(Json(ModelSummary {
        beta: state.store.is_beta(&record.model_id),
        has_profiles: state.store.has_profiles_for(&record.model_id),
        record: record.clone(),
    }))
}

/// GET /api/models/{model_id}/profiles
/// Grouped inference profiles for a model. An empty list is the normal
/// "no profiles" answer, not an error, so no lookup guard here.
#[utoipa::path(
    get,
    path = "/api/models/{model_id}/profiles",
    tag = "catalog",
    params(("model_id" = String, Path, description = "Model identifier")),
    responses(
        (status = 200, description = "Profiles grouped by id with merged regions", body = ProfilesResponse)
    )
)]
pub async fn list_model_profiles(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
) -> Json<ProfilesResponse> {
    let data = group_for_model(state.store.profiles(), &model_id);
    Json(ProfilesResponse {
        total: data.len(),
        data,
    })
}

/// GET /api/facets
#[utoipa::path(
    get,
    path = "/api/facets",
    tag = "catalog",
    responses((status = 200, description = "Distinct option values per facet", body = Object))
)]
pub async fn get_facets(State(state): State<AppState>) -> Json<FacetIndex> {
    Json((*state.facets).clone())
}

/// GET /api/meta
#[utoipa::path(
    get,
    path = "/api/meta",
    tag = "catalog",
    responses((status = 200, description = "Dataset counts and load time", body = MetaResponse))
)]
pub async fn get_meta(State(state): State<AppState>) -> Json<MetaResponse> {
    Json(MetaResponse {
        model_count: state.store.model_count(),
        profile_count: state.store.profile_count(),
        loaded_at: state.store.loaded_at(),
    })
}

/// GET /api/openapi.json
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
