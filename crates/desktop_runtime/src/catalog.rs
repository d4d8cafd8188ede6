//! Static portfolio catalog: folders, projects, fixed pages, and shell configuration.
//!
//! The catalog is authored in `catalog/portfolio.toml`, validated by `build.rs`, and embedded
//! as JSON. It is deserialized once on first access and is read-only for the process lifetime.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::config::ShellConfig;

include!(concat!(env!("OUT_DIR"), "/portfolio_catalog_generated.rs"));

/// Reserved project group for records reachable only by id (CV links, related links).
pub const HIDDEN_PROJECT_GROUP: &str = "hidden";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VideoPosition {
    #[default]
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSpec {
    pub label: String,
    pub value: String,
}

/// One portfolio entry. Only `id`, `title`, `description`, `image_url`, `images`, and `tags`
/// are required; the rest feed the content renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub hover_image_url: Option<String>,
    #[serde(default)]
    pub full_content: Option<String>,
    #[serde(default)]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub research_questions: Vec<String>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub gallery_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub video_position: VideoPosition,
    #[serde(default)]
    pub spotify_url: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub paper_url: Option<String>,
    #[serde(default)]
    pub prototype_url: Option<String>,
    #[serde(default)]
    pub award: Option<String>,
    #[serde(default)]
    pub related_project_id: Option<String>,
    #[serde(default)]
    pub related_project_title: Option<String>,
    #[serde(default)]
    pub specs: Vec<ProjectSpec>,
}

impl Project {
    /// Minimal record with only the required fields populated.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            image_url: String::new(),
            images: Vec::new(),
            tags: Vec::new(),
            hover_image_url: None,
            full_content: None,
            abstract_text: None,
            research_questions: Vec::new(),
            external_url: None,
            gallery_url: None,
            video_url: None,
            video_position: VideoPosition::default(),
            spotify_url: None,
            pdf_url: None,
            paper_url: None,
            prototype_url: None,
            award: None,
            related_project_id: None,
            related_project_title: None,
            specs: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutPage {
    pub title: String,
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub portrait_url: Option<String>,
    #[serde(default)]
    pub links: Vec<ProfileLink>,
}

/// A CV line. `project_id` and `folder_id` turn the entry into a link back into the desktop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvEntry {
    pub title: String,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub folder_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvSection {
    pub heading: String,
    #[serde(default)]
    pub entries: Vec<CvEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvPage {
    pub title: String,
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub sections: Vec<CvSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationPage {
    pub title: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGuidePage {
    pub title: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pages {
    pub about: AboutPage,
    pub cv: CvPage,
    pub certification: CertificationPage,
    pub nav_guide: NavGuidePage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalNotification {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub schema_version: u32,
    pub owner_name: String,
    #[serde(default)]
    pub shell: ShellConfig,
    pub notification: ArrivalNotification,
    pub folders: Vec<Folder>,
    pub pages: Pages,
    #[serde(default)]
    projects: BTreeMap<String, Vec<Project>>,
}

impl Catalog {
    /// Parses a catalog from its embedded JSON representation.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn folder(&self, folder_id: &str) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.id == folder_id)
    }

    /// Projects shown inside `folder_id`, in authored order. Unknown folders are empty.
    pub fn projects_in(&self, folder_id: &str) -> &[Project] {
        self.projects
            .get(folder_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every project, in folder order followed by the hidden group.
    pub fn all_projects(&self) -> impl Iterator<Item = &Project> + '_ {
        self.folders
            .iter()
            .map(|folder| folder.id.as_str())
            .chain(std::iter::once(HIDDEN_PROJECT_GROUP))
            .flat_map(move |group| self.projects_in(group).iter())
    }

    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.all_projects().find(|project| project.id == project_id)
    }
}

/// Returns the process-wide portfolio catalog.
///
/// # Panics
///
/// Panics if the embedded JSON fails to deserialize, which `build.rs` rules out for any catalog
/// that passed validation.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        Catalog::from_json(PORTFOLIO_CATALOG_JSON).expect("embedded portfolio catalog is valid")
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_catalog_lists_folders_in_authored_order() {
        let ids: Vec<&str> = catalog().folders.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["hci", "game_xr", "graphic", "web_ai"]);
    }

    #[test]
    fn hidden_projects_are_reachable_by_id_but_not_listed_in_folders() {
        let catalog = catalog();
        assert!(catalog.project("ai-5").is_some());
        assert!(catalog
            .folders
            .iter()
            .all(|folder| catalog.projects_in(&folder.id).iter().all(|p| p.id != "ai-5")));
    }

    #[test]
    fn unknown_folder_has_no_projects() {
        assert!(catalog().projects_in("no-such-folder").is_empty());
        assert!(catalog().folder("no-such-folder").is_none());
    }

    #[test]
    fn all_projects_walks_folders_then_hidden_group() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog.all_projects().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.first().copied(), Some("hci-1"));
        assert_eq!(ids.last().copied(), Some("ai-5"));
        assert_eq!(ids.len(), 15);
    }

    #[test]
    fn optional_project_fields_default_when_absent() {
        let project = catalog().project("ai-1").expect("ai-1");
        assert_eq!(project.video_position, VideoPosition::Top);
        assert!(project.specs.is_empty());
        assert_eq!(
            catalog().project("xr-1").map(|p| p.video_position),
            Some(VideoPosition::Bottom)
        );
    }

    #[test]
    fn shell_section_is_loaded_from_the_catalog() {
        assert_eq!(catalog().shell.notification_delay_ms, 3000);
        assert!(catalog().shell.features.enable_marquee_selection);
    }
}
