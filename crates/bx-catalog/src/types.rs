// Catalog record types
//
// These deserialize straight from the refreshed upstream JSON (camelCase
// field names). Optional fields stay optional on the record; the documented
// defaults are resolved through accessors, not at deserialization time.

use serde::{Deserialize, Serialize};

/// Lifecycle status assumed when a model record carries none.
pub const DEFAULT_LIFECYCLE_STATUS: &str = "ACTIVE";

/// Status assumed when a profile record carries none.
pub const DEFAULT_PROFILE_STATUS: &str = "ACTIVE";

/// Type assumed when a profile record carries none.
pub const DEFAULT_PROFILE_TYPE: &str = "SYSTEM_DEFINED";

/// One distinct served model and its cross-region metadata.
///
/// The upstream producer dedups models by id and records the union of
/// regions each model was seen in, so `regions` is already a merged set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    pub model_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_arn: Option<String>,

    #[serde(default)]
    pub model_name: Option<String>,

    #[serde(default)]
    pub provider_name: Option<String>,

    /// Input modality tags ("TEXT", "IMAGE", ...); absent and empty both
    /// mean "no values".
    #[serde(default)]
    pub input_modalities: Vec<String>,

    #[serde(default)]
    pub output_modalities: Vec<String>,

    /// Regions this model is available in.
    #[serde(default)]
    pub regions: Vec<String>,

    /// Nested lifecycle object as delivered upstream.
    #[serde(default)]
    pub model_lifecycle: Option<ModelLifecycle>,

    #[serde(default)]
    pub response_streaming_supported: bool,
}

impl ModelRecord {
    /// Effective lifecycle status: the explicit value, or `ACTIVE`.
    pub fn lifecycle_status(&self) -> &str {
        self.model_lifecycle
            .as_ref()
            .and_then(|l| l.status.as_deref())
            .unwrap_or(DEFAULT_LIFECYCLE_STATUS)
    }
}

/// Lifecycle wrapper object from the upstream model summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelLifecycle {
    #[serde(default)]
    pub status: Option<String>,
}

/// One (profile, region) occurrence as delivered by the upstream producer.
///
/// The raw list is NOT deduplicated: a profile available in N regions
/// appears N times, each copy with a different scalar `region`. Grouping
/// those copies back together is [`crate::profiles::group_for_model`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(rename = "inferenceProfileId")]
    pub profile_id: String,

    #[serde(rename = "inferenceProfileName", default)]
    pub profile_name: Option<String>,

    #[serde(rename = "inferenceProfileArn", default)]
    pub profile_arn: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Creation timestamp, passed through verbatim for display.
    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(rename = "type", default)]
    pub profile_type: Option<String>,

    /// The single region this record was fetched from.
    pub region: String,

    /// Models this profile can invoke.
    #[serde(rename = "models", default)]
    pub member_models: Vec<MemberModelRef>,
}

impl ProfileRecord {
    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_PROFILE_STATUS)
    }

    pub fn type_or_default(&self) -> &str {
        self.profile_type.as_deref().unwrap_or(DEFAULT_PROFILE_TYPE)
    }
}

/// A member model reference inside a profile record.
///
/// Upstream delivers either a bare identifier string or an object wrapping
/// a `modelArn`. Both carry the model id embedded in a longer reference
/// string; `model_ref` is the single extraction point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberModelRef {
    Bare(String),
    Structured {
        #[serde(rename = "modelArn", default)]
        model_arn: Option<String>,
    },
}

impl MemberModelRef {
    /// The raw reference string, if this entry carries one.
    pub fn model_ref(&self) -> Option<&str> {
        match self {
            MemberModelRef::Bare(id) => Some(id.as_str()),
            MemberModelRef::Structured { model_arn } => model_arn.as_deref(),
        }
    }
}

/// One profile as shown in a model's detail view: the scalar fields from
/// the first record seen for the profile id, plus the merged region set.
///
/// Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedProfileView {
    pub profile_id: String,
    pub profile_name: Option<String>,
    pub profile_arn: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub status: String,
    #[serde(rename = "type")]
    pub profile_type: String,
    /// First-appearance order, deduplicated. Not sorted.
    pub regions: Vec<String>,
}

impl GroupedProfileView {
    /// Seed a view from the first record seen for a profile id.
    pub fn from_record(record: &ProfileRecord) -> Self {
        Self {
            profile_id: record.profile_id.clone(),
            profile_name: record.profile_name.clone(),
            profile_arn: record.profile_arn.clone(),
            description: record.description.clone(),
            created_at: record.created_at.clone(),
            updated_at: record.updated_at.clone(),
            status: record.status_or_default().to_string(),
            profile_type: record.type_or_default().to_string(),
            regions: vec![record.region.clone()],
        }
    }
}
