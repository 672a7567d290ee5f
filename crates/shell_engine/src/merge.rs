//! Local/remote project merge.

use indexmap::IndexMap;
use shell_contract::ProjectView;

/// Merges both catalogs keyed by lowercased `id`; local records win on collision.
///
/// Output keeps the first-appearance order of each key (remote entries first, then local-only
/// entries). A colliding local record replaces the remote one in place.
pub fn merge_projects(local: &[ProjectView], remote: &[ProjectView]) -> Vec<ProjectView> {
    let mut merged = IndexMap::with_capacity(local.len() + remote.len());
    for project in remote.iter().chain(local) {
        merged.insert(project.id.to_lowercase(), project.clone());
    }
    merged.into_values().collect()
}
