//! Spotlight project search.

use crate::catalog::{Catalog, Project};

/// Case-insensitive substring match over title, description, and tags.
///
/// A query that is empty after trimming matches nothing. Results keep the input order.
pub fn search_projects<'a>(
    projects: impl IntoIterator<Item = &'a Project>,
    query: &str,
) -> Vec<&'a Project> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    projects
        .into_iter()
        .filter(|project| project_matches(project, &needle))
        .collect()
}

fn project_matches(project: &Project, needle: &str) -> bool {
    project.title.to_lowercase().contains(needle)
        || project.description.to_lowercase().contains(needle)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

impl Catalog {
    /// Searches the flattened catalog, hidden projects included.
    pub fn search(&self, query: &str) -> Vec<&Project> {
        search_projects(self.all_projects(), query)
    }
}
