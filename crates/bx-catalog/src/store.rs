//! Immutable catalog store
//!
//! Built once by the loader, then read-only for the rest of the session.
//! Every evaluation re-scans the full dataset; nothing here caches query
//! results.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::profiles::profile_covers_model;
use crate::types::{ModelRecord, ProfileRecord};

pub struct CatalogStore {
    models: Vec<ModelRecord>,
    profiles: Vec<ProfileRecord>,
    beta_ids: HashSet<String>,
    loaded_at: DateTime<Utc>,
}

impl CatalogStore {
    pub fn new(
        models: Vec<ModelRecord>,
        profiles: Vec<ProfileRecord>,
        beta_ids: HashSet<String>,
    ) -> Self {
        debug!(
            models = models.len(),
            profiles = profiles.len(),
            beta = beta_ids.len(),
            "catalog store populated"
        );
        Self {
            models,
            profiles,
            beta_ids,
            loaded_at: Utc::now(),
        }
    }

    pub fn models(&self) -> &[ModelRecord] {
        &self.models
    }

    pub fn profiles(&self) -> &[ProfileRecord] {
        &self.profiles
    }

    /// Look up a model by exact id.
    pub fn model(&self, model_id: &str) -> Option<&ModelRecord> {
        self.models.iter().find(|m| m.model_id == model_id)
    }

    /// Whether the model appears in the beta ("silently launched") set.
    pub fn is_beta(&self, model_id: &str) -> bool {
        self.beta_ids.contains(model_id)
    }

    /// Whether at least one profile references the model. Cards use this to
    /// decide if a detail view is worth opening, without grouping anything.
    pub fn has_profiles_for(&self, model_id: &str) -> bool {
        self.profiles
            .iter()
            .any(|p| profile_covers_model(p, model_id))
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// When this dataset was loaded into memory.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MemberModelRef;

    fn model(id: &str) -> ModelRecord {
        serde_json::from_str(&format!(r#"{{"modelId": "{}"}}"#, id)).unwrap()
    }

    fn profile(profile_id: &str, region: &str, member_ref: &str) -> ProfileRecord {
        ProfileRecord {
            profile_id: profile_id.to_string(),
            profile_name: None,
            profile_arn: None,
            description: None,
            created_at: None,
            updated_at: None,
            status: None,
            profile_type: None,
            region: region.to_string(),
            member_models: vec![MemberModelRef::Bare(member_ref.to_string())],
        }
    }

    #[test]
    fn test_lookup_and_flags() {
        let store = CatalogStore::new(
            vec![model("a.one"), model("b.two")],
            vec![profile("p1", "us-east-1", "arn:aws:bedrock::foundation-model/a.one")],
            HashSet::from(["b.two".to_string()]),
        );

        assert!(store.model("a.one").is_some());
        assert!(store.model("missing").is_none());
        assert!(store.is_beta("b.two"));
        assert!(!store.is_beta("a.one"));
        assert!(store.has_profiles_for("a.one"));
        assert!(!store.has_profiles_for("b.two"));
        assert_eq!(store.model_count(), 2);
        assert_eq!(store.profile_count(), 1);
    }
}
