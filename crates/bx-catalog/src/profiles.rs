//! Profile grouper
//!
//! The upstream profile list carries one record per (profile, region)
//! occurrence. For a model's detail view those records are collapsed back
//! into one entry per profile id with a merged region set.

use std::collections::HashMap;

use crate::types::{GroupedProfileView, MemberModelRef, ProfileRecord};

/// Whether a profile references the given model.
///
/// Member references embed the model id inside a longer string (typically
/// an ARN), so this is substring containment, not equality. Entries with
/// no extractable reference simply never match.
pub fn profile_covers_model(profile: &ProfileRecord, model_id: &str) -> bool {
    profile
        .member_models
        .iter()
        .filter_map(MemberModelRef::model_ref)
        .any(|model_ref| model_ref.contains(model_id))
}

/// Collapse the flat per-region profile list into one view per profile id,
/// keeping only profiles that reference `model_id`.
///
/// Output order is the order each profile id was first encountered; each
/// view's scalar fields come from that first record, and its region set is
/// the deduplicated union across all records sharing the id. An empty
/// result is the normal "no profiles for this model" answer, not an error.
pub fn group_for_model(profiles: &[ProfileRecord], model_id: &str) -> Vec<GroupedProfileView> {
    let mut views: Vec<GroupedProfileView> = Vec::new();
    let mut index_by_id: HashMap<&str, usize> = HashMap::new();

    for profile in profiles.iter().filter(|p| profile_covers_model(p, model_id)) {
        match index_by_id.get(profile.profile_id.as_str()) {
            Some(&i) => {
                let regions = &mut views[i].regions;
                if !regions.contains(&profile.region) {
                    regions.push(profile.region.clone());
                }
            }
            None => {
                index_by_id.insert(profile.profile_id.as_str(), views.len());
                views.push(GroupedProfileView::from_record(profile));
            }
        }
    }

    views
}
