//! API request and response types

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use bx_catalog::{FilterState, ModelRecord, SortColumn, SortDirection};
use bx_types::{AppError, AppResult};

/// Query parameters for `GET /api/models`.
///
/// Facet parameters take comma-separated value lists; omitting a parameter
/// leaves that facet unconstrained.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ModelsQuery {
    /// Case-insensitive substring matched against model id and name
    pub q: Option<String>,
    /// Comma-separated provider names
    pub provider: Option<String>,
    /// Comma-separated lifecycle statuses
    pub status: Option<String>,
    /// Comma-separated region codes
    pub region: Option<String>,
    /// Comma-separated input modality tags
    pub input_modality: Option<String>,
    /// Comma-separated output modality tags
    pub output_modality: Option<String>,
    /// Sort column: modelId, modelName or providerName
    pub sort: Option<String>,
    /// Sort direction: asc (default) or desc
    pub direction: Option<String>,
}

impl ModelsQuery {
    /// Translate the query into a `FilterState`. Unknown sort columns or
    /// directions are request errors; everything else has a lenient
    /// default.
    pub fn filter_state(&self) -> AppResult<FilterState> {
        let sort_column = match self.sort.as_deref() {
            None | Some("") => None,
            Some("modelId") => Some(SortColumn::ModelId),
            Some("modelName") => Some(SortColumn::ModelName),
            Some("providerName") => Some(SortColumn::ProviderName),
            Some(other) => {
                return Err(AppError::InvalidParams(format!(
                    "Unknown sort column '{}'",
                    other
                )))
            }
        };
        let sort_direction = match self.direction.as_deref() {
            None | Some("") | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(AppError::InvalidParams(format!(
                    "Unknown sort direction '{}'",
                    other
                )))
            }
        };

        Ok(FilterState {
            search_term: self.q.as_deref().unwrap_or("").trim().to_string(),
            providers: csv_set(self.provider.as_deref()),
            statuses: csv_set(self.status.as_deref()),
            regions: csv_set(self.region.as_deref()),
            input_modalities: csv_set(self.input_modality.as_deref()),
            output_modalities: csv_set(self.output_modality.as_deref()),
            sort_column,
            sort_direction,
        })
    }
}

fn csv_set(raw: Option<&str>) -> HashSet<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// One model in a result list: the record plus the display flags the cards
/// need.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub record: ModelRecord,
    /// In the beta ("silently launched") set
    pub beta: bool,
    /// At least one inference profile references this model
    pub has_profiles: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModelsResponse {
    pub total: usize,
    pub data: Vec<ModelSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfilesResponse {
    pub total: usize,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<bx_catalog::GroupedProfileView>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetaResponse {
    pub model_count: usize,
    pub profile_count: usize,
    /// When the dataset was loaded into memory
    pub loaded_at: DateTime<Utc>,
}
