//! Filter/sort evaluator
//!
//! Turns the full model list plus the user's current selections into an
//! ordered result set. Runs on every interaction (keystroke, checkbox,
//! column click), always over the whole dataset. Total: malformed or
//! missing fields degrade to their documented defaults, never to an error.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::ModelRecord;

/// Sortable columns of the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    ModelId,
    ModelName,
    ProviderName,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The user's current search, facet selections, and sort choice.
///
/// An empty selection set means "no constraint on this facet", never
/// "exclude everything". Owned by the interaction layer and passed into
/// [`evaluate`] on every call, so the evaluator itself stays stateless.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub search_term: String,
    pub providers: HashSet<String>,
    pub statuses: HashSet<String>,
    pub regions: HashSet<String>,
    pub input_modalities: HashSet<String>,
    pub output_modalities: HashSet<String>,
    pub sort_column: Option<SortColumn>,
    pub sort_direction: SortDirection,
}

impl FilterState {
    /// Apply a column-header click: same column flips the direction, a new
    /// column takes over ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort_column == Some(column) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_column = Some(column);
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// Conjunction of the six predicates; each is vacuously true when its
    /// selection is empty. `term` is the search term already lowercased,
    /// computed once per evaluation rather than once per record.
    fn matches(&self, model: &ModelRecord, term: &str) -> bool {
        matches_search(model, term)
            && member_or_unconstrained(&self.providers, model.provider_name.as_deref())
            && (self.statuses.is_empty() || self.statuses.contains(model.lifecycle_status()))
            && intersects_or_unconstrained(&self.regions, &model.regions)
            && intersects_or_unconstrained(&self.input_modalities, &model.input_modalities)
            && intersects_or_unconstrained(&self.output_modalities, &model.output_modalities)
    }
}

fn matches_search(model: &ModelRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    if model.model_id.to_lowercase().contains(term) {
        return true;
    }
    // A missing name never matches a non-empty term
    model
        .model_name
        .as_deref()
        .is_some_and(|name| name.to_lowercase().contains(term))
}

fn member_or_unconstrained(selected: &HashSet<String>, value: Option<&str>) -> bool {
    selected.is_empty() || value.is_some_and(|v| selected.contains(v))
}

fn intersects_or_unconstrained(selected: &HashSet<String>, values: &[String]) -> bool {
    selected.is_empty() || values.iter().any(|v| selected.contains(v))
}

/// Evaluate the filter state over the full catalog.
///
/// Filtering keeps catalog order; if a sort column is set the subset is
/// stable-sorted by that column's lowercased value (missing values compare
/// as the empty string), so tied rows keep their filter-step order and a
/// direction toggle only reverses tie groups, never reshuffles them.
pub fn evaluate<'a>(models: &'a [ModelRecord], state: &FilterState) -> Vec<&'a ModelRecord> {
    let term = state.search_term.to_lowercase();
    let mut hits: Vec<&ModelRecord> = models.iter().filter(|m| state.matches(m, &term)).collect();

    if let Some(column) = state.sort_column {
        hits.sort_by(|a, b| {
            let ord = sort_key(a, column).cmp(&sort_key(b, column));
            match state.sort_direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }

    hits
}

fn sort_key(model: &ModelRecord, column: SortColumn) -> String {
    let value = match column {
        SortColumn::ModelId => Some(model.model_id.as_str()),
        SortColumn::ModelName => model.model_name.as_deref(),
        SortColumn::ProviderName => model.provider_name.as_deref(),
    };
    value.unwrap_or("").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(json: &str) -> ModelRecord {
        serde_json::from_str(json).unwrap()
    }

    fn sample_catalog() -> Vec<ModelRecord> {
        vec![
            model(
                r#"{"modelId": "a", "providerName": "X", "regions": ["us-east-1"],
                    "inputModalities": ["TEXT"], "outputModalities": ["TEXT"]}"#,
            ),
            model(
                r#"{"modelId": "b", "providerName": "Y", "regions": ["eu-west-1"],
                    "modelLifecycle": {"status": "LEGACY"},
                    "inputModalities": ["TEXT", "IMAGE"], "outputModalities": ["TEXT"]}"#,
            ),
            model(r#"{"modelId": "c", "providerName": "X", "regions": []}"#),
        ]
    }

    fn ids(result: &[&ModelRecord]) -> Vec<String> {
        result.iter().map(|m| m.model_id.clone()).collect()
    }

    fn set(values: &[&str]) -> HashSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_state_returns_full_catalog() {
        let catalog = sample_catalog();
        let result = evaluate(&catalog, &FilterState::default());
        assert_eq!(ids(&result), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_id_and_name() {
        let catalog = vec![
            model(r#"{"modelId": "Anthropic.Claude-3", "modelName": "Claude 3 Opus"}"#),
            model(r#"{"modelId": "meta.llama3"}"#),
        ];

        let state = FilterState {
            search_term: "claude".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&evaluate(&catalog, &state)), vec!["Anthropic.Claude-3"]);

        let state = FilterState {
            search_term: "OPUS".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&evaluate(&catalog, &state)), vec!["Anthropic.Claude-3"]);
    }

    #[test]
    fn test_missing_name_never_matches_nonempty_term() {
        let catalog = vec![model(r#"{"modelId": "meta.llama3"}"#)];
        let state = FilterState {
            search_term: "claude".to_string(),
            ..Default::default()
        };
        assert!(evaluate(&catalog, &state).is_empty());
    }

    #[test]
    fn test_provider_and_status_conjunction() {
        let catalog = sample_catalog();
        let state = FilterState {
            providers: set(&["X"]),
            statuses: set(&["ACTIVE"]),
            ..Default::default()
        };
        // b fails provider, and is LEGACY anyway; c has implicit ACTIVE
        assert_eq!(ids(&evaluate(&catalog, &state)), vec!["a", "c"]);
    }

    #[test]
    fn test_region_selection_excludes_regionless_models() {
        let catalog = sample_catalog();
        let state = FilterState {
            providers: set(&["X"]),
            statuses: set(&["ACTIVE"]),
            regions: set(&["us-east-1"]),
            ..Default::default()
        };
        // c passes every other predicate but has no regions
        assert_eq!(ids(&evaluate(&catalog, &state)), vec!["a"]);
    }

    #[test]
    fn test_modality_intersection() {
        let catalog = sample_catalog();
        let state = FilterState {
            input_modalities: set(&["IMAGE"]),
            ..Default::default()
        };
        assert_eq!(ids(&evaluate(&catalog, &state)), vec!["b"]);

        let state = FilterState {
            output_modalities: set(&["TEXT"]),
            ..Default::default()
        };
        assert_eq!(ids(&evaluate(&catalog, &state)), vec!["a", "b"]);
    }

    #[test]
    fn test_adding_a_selection_never_grows_the_result() {
        let catalog = sample_catalog();
        let mut state = FilterState {
            providers: set(&["X"]),
            ..Default::default()
        };
        let before = evaluate(&catalog, &state).len();

        state.providers.insert("Y".to_string());
        let widened = evaluate(&catalog, &state).len();
        // Widening one facet's set can grow it...
        assert!(widened >= before);

        // ...but adding a value to a *different* facet only shrinks
        state.regions.insert("us-east-1".to_string());
        assert!(evaluate(&catalog, &state).len() <= widened);
    }

    #[test]
    fn test_sort_by_name_with_missing_values() {
        let catalog = vec![
            model(r#"{"modelId": "m1", "modelName": "zeta"}"#),
            model(r#"{"modelId": "m2"}"#),
            model(r#"{"modelId": "m3", "modelName": "Alpha"}"#),
        ];
        let state = FilterState {
            sort_column: Some(SortColumn::ModelName),
            ..Default::default()
        };
        // Missing name sorts as the empty string, ahead of everything
        assert_eq!(ids(&evaluate(&catalog, &state)), vec!["m2", "m3", "m1"]);
    }

    #[test]
    fn test_direction_toggle_reverses_but_keeps_ties_stable() {
        let catalog = vec![
            model(r#"{"modelId": "x1", "providerName": "Same"}"#),
            model(r#"{"modelId": "x2", "providerName": "Same"}"#),
            model(r#"{"modelId": "y1", "providerName": "Other"}"#),
        ];
        let mut state = FilterState::default();
        state.toggle_sort(SortColumn::ProviderName);
        assert_eq!(ids(&evaluate(&catalog, &state)), vec!["y1", "x1", "x2"]);

        // Toggle flips direction; tied x1/x2 keep their relative order
        state.toggle_sort(SortColumn::ProviderName);
        assert_eq!(state.sort_direction, SortDirection::Desc);
        assert_eq!(ids(&evaluate(&catalog, &state)), vec!["x1", "x2", "y1"]);
    }

    #[test]
    fn test_new_column_resets_direction_to_ascending() {
        let mut state = FilterState::default();
        state.toggle_sort(SortColumn::ModelId);
        state.toggle_sort(SortColumn::ModelId);
        assert_eq!(state.sort_direction, SortDirection::Desc);

        state.toggle_sort(SortColumn::ProviderName);
        assert_eq!(state.sort_column, Some(SortColumn::ProviderName));
        assert_eq!(state.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let catalog = vec![
            model(r#"{"modelId": "b", "modelName": "beta"}"#),
            model(r#"{"modelId": "A", "modelName": "Alpha"}"#),
        ];
        let state = FilterState {
            sort_column: Some(SortColumn::ModelName),
            ..Default::default()
        };
        assert_eq!(ids(&evaluate(&catalog, &state)), vec!["A", "b"]);
    }
}
