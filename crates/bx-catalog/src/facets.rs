//! Facet index builder
//!
//! Derives the option list for each filterable facet from the loaded
//! models, so the selection controls always reflect the data actually
//! present. Built once per load; cheap to rebuild by re-scanning.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::types::ModelRecord;

/// Sorted distinct values per facet, lexicographic ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FacetIndex {
    pub providers: Vec<String>,
    pub statuses: Vec<String>,
    pub regions: Vec<String>,
    pub input_modalities: Vec<String>,
    pub output_modalities: Vec<String>,
}

impl FacetIndex {
    pub fn build(models: &[ModelRecord]) -> Self {
        let mut providers = BTreeSet::new();
        let mut statuses = BTreeSet::new();
        let mut regions = BTreeSet::new();
        let mut input_modalities = BTreeSet::new();
        let mut output_modalities = BTreeSet::new();

        for model in models {
            if let Some(provider) = &model.provider_name {
                providers.insert(provider.clone());
            }
            // Default-substituted first, so status-less models still
            // contribute the literal default option.
            statuses.insert(model.lifecycle_status().to_string());
            regions.extend(model.regions.iter().cloned());
            input_modalities.extend(model.input_modalities.iter().cloned());
            output_modalities.extend(model.output_modalities.iter().cloned());
        }

        Self {
            providers: providers.into_iter().collect(),
            statuses: statuses.into_iter().collect(),
            regions: regions.into_iter().collect(),
            input_modalities: input_modalities.into_iter().collect(),
            output_modalities: output_modalities.into_iter().collect(),
        }
    }
}
