//! Window registry: the append-only list of window descriptors and their stacking order.
//!
//! Every open/focus/create assigns `max(z_index) + 1`, so z-indices stay unique and the most
//! recently raised window is always on top. Descriptors are never removed; closing only clears
//! `is_open`. Operations on unknown ids are silent no-ops that report `false`.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Project};
use crate::model::{
    Viewport, WindowContent, WindowDescriptor, WindowId, WindowLayout, ABOUT_WINDOW_ID,
    CERTIFICATION_WINDOW_ID, CV_WINDOW_ID, NAV_GUIDE_WINDOW_ID,
};
use crate::window_layout::LayoutProfile;

/// Z-index of the first folder window; later folders count up from here.
pub const FOLDER_BASE_Z_INDEX: u32 = 10;
/// Z-index of the first fixed page window (CV, About, Certification, navigation guide).
pub const PAGE_BASE_Z_INDEX: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowRegistry {
    windows: Vec<WindowDescriptor>,
}

impl WindowRegistry {
    /// Base descriptors for every folder and fixed page, all closed.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let folders = catalog.folders.iter().enumerate().map(|(idx, folder)| {
            WindowDescriptor::new(
                WindowId::new(folder.id.clone()),
                folder.name.clone(),
                FOLDER_BASE_Z_INDEX + idx as u32,
                WindowContent::Folder,
            )
        });
        let pages = [
            (CV_WINDOW_ID, catalog.pages.cv.title.as_str(), WindowContent::Cv),
            (ABOUT_WINDOW_ID, catalog.pages.about.title.as_str(), WindowContent::About),
            (
                CERTIFICATION_WINDOW_ID,
                catalog.pages.certification.title.as_str(),
                WindowContent::Certification,
            ),
            (
                NAV_GUIDE_WINDOW_ID,
                catalog.pages.nav_guide.title.as_str(),
                WindowContent::NavGuide,
            ),
        ]
        .into_iter()
        .enumerate()
        .map(|(idx, (id, title, content))| {
            WindowDescriptor::new(WindowId::from(id), title, PAGE_BASE_Z_INDEX + idx as u32, content)
        });

        Self {
            windows: folders.chain(pages).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowDescriptor> + '_ {
        self.windows.iter()
    }

    pub fn get(&self, window_id: &WindowId) -> Option<&WindowDescriptor> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn get_mut(&mut self, window_id: &WindowId) -> Option<&mut WindowDescriptor> {
        self.windows.iter_mut().find(|w| &w.id == window_id)
    }

    pub fn contains(&self, window_id: &WindowId) -> bool {
        self.get(window_id).is_some()
    }

    /// Highest z-index across all descriptors, open or not.
    pub fn max_z_index(&self) -> u32 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    /// Open windows in paint order (lowest z-index first).
    pub fn ordered_open_windows(&self) -> Vec<&WindowDescriptor> {
        let mut open: Vec<&WindowDescriptor> = self.windows.iter().filter(|w| w.is_open).collect();
        open.sort_by_key(|w| w.z_index);
        open
    }

    /// The open window that currently has focus.
    pub fn top_window(&self) -> Option<&WindowDescriptor> {
        self.windows
            .iter()
            .filter(|w| w.is_open)
            .max_by_key(|w| w.z_index)
    }

    /// Opens and raises `window_id`, creating its layout on first open.
    ///
    /// An already-open window is only raised; its rect stays where the user left it.
    pub fn open(&mut self, window_id: &WindowId, viewport: Option<Viewport>) -> bool {
        let next_z = self.max_z_index() + 1;
        let Some(window) = self.get_mut(window_id) else {
            return false;
        };
        let was_open = window.is_open;
        window.is_open = true;
        window.is_minimized = false;
        window.z_index = next_z;
        if !was_open {
            prepare_layout(window, viewport);
        }
        true
    }

    /// Opens `project` in its own window, reusing and raising it when it already exists.
    ///
    /// Returns the id of the project window.
    pub fn open_or_focus_project(&mut self, project: &Project, viewport: Option<Viewport>) -> WindowId {
        let window_id = WindowId::project(&project.id);
        if !self.open(&window_id, viewport) {
            let mut window = WindowDescriptor::new(
                window_id.clone(),
                project.title.clone(),
                self.max_z_index() + 1,
                WindowContent::Project(Box::new(project.clone())),
            );
            window.is_open = true;
            prepare_layout(&mut window, viewport);
            self.windows.push(window);
        }
        window_id
    }

    /// Marks `window_id` closed. Title, content, z-index, and layout are kept.
    pub fn close(&mut self, window_id: &WindowId) -> bool {
        let Some(window) = self.get_mut(window_id) else {
            return false;
        };
        window.is_open = false;
        true
    }

    /// Closes `window_id` and records that it was minimized rather than closed.
    pub fn minimize(&mut self, window_id: &WindowId) -> bool {
        let Some(window) = self.get_mut(window_id) else {
            return false;
        };
        window.is_open = false;
        window.is_minimized = true;
        true
    }

    /// Raises `window_id` above every other window.
    ///
    /// Returns `false` without touching anything when the window is unknown or already holds the
    /// maximum z-index.
    pub fn focus(&mut self, window_id: &WindowId) -> bool {
        let max_z = self.max_z_index();
        let Some(window) = self.get_mut(window_id) else {
            return false;
        };
        if window.z_index == max_z {
            return false;
        }
        window.z_index = max_z + 1;
        true
    }

    /// Re-applies responsive defaults to every laid-out window after a viewport change.
    pub fn refit_layouts(&mut self, viewport: Option<Viewport>) -> bool {
        let mut changed = false;
        for window in &mut self.windows {
            let profile = LayoutProfile::for_content(&window.content);
            let z_index = window.z_index;
            if let Some(layout) = window.layout.as_mut() {
                changed |= layout.refit(profile, viewport, z_index);
            }
        }
        changed
    }
}

/// First open computes the responsive default; reopening keeps the remembered layout unless the
/// window was never moved, in which case it is re-centered for the current viewport and stack slot.
fn prepare_layout(window: &mut WindowDescriptor, viewport: Option<Viewport>) {
    let profile = LayoutProfile::for_content(&window.content);
    match window.layout.as_mut() {
        None => window.layout = Some(WindowLayout::initial(profile, viewport, window.z_index)),
        Some(layout) => {
            layout.refit(profile, viewport, window.z_index);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::catalog;
    use crate::window_layout::default_rect;

    fn registry() -> WindowRegistry {
        WindowRegistry::from_catalog(catalog())
    }

    fn z_of(registry: &WindowRegistry, id: &str) -> u32 {
        registry.get(&WindowId::from(id)).expect("window").z_index
    }

    #[test]
    fn base_windows_follow_catalog_order_and_z_slots() {
        let registry = registry();
        let ids: Vec<&str> = registry.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["hci", "game_xr", "graphic", "web_ai", "cv", "about", "certification", "nav-guide"]
        );
        assert_eq!(z_of(&registry, "hci"), 10);
        assert_eq!(z_of(&registry, "web_ai"), 13);
        assert_eq!(z_of(&registry, "cv"), 50);
        assert_eq!(z_of(&registry, "nav-guide"), 53);
        assert_eq!(registry.max_z_index(), 53);
    }

    #[test]
    fn open_raises_above_every_descriptor() {
        let mut registry = registry();
        assert!(registry.open(&WindowId::from("hci"), None));
        let hci = registry.get(&WindowId::from("hci")).unwrap();
        assert!(hci.is_open);
        assert_eq!(hci.z_index, 54);
        assert_eq!(registry.top_window().map(|w| w.id.as_str()), Some("hci"));
    }

    #[test]
    fn unknown_ids_are_silent_noops() {
        let mut registry = registry();
        let before = registry.clone();
        let ghost = WindowId::from("ghost");
        assert!(!registry.open(&ghost, None));
        assert!(!registry.close(&ghost));
        assert!(!registry.focus(&ghost));
        assert!(!registry.minimize(&ghost));
        assert_eq!(registry, before);
    }

    #[test]
    fn focusing_the_top_window_changes_nothing() {
        let mut registry = registry();
        registry.open(&WindowId::from("about"), None);
        let before = registry.clone();
        assert!(!registry.focus(&WindowId::from("about")));
        assert_eq!(registry, before);
    }

    #[test]
    fn focus_moves_a_lower_window_to_the_top() {
        let mut registry = registry();
        registry.open(&WindowId::from("hci"), None);
        registry.open(&WindowId::from("cv"), None);
        assert!(registry.focus(&WindowId::from("hci")));
        assert_eq!(z_of(&registry, "hci"), 56);
        let order: Vec<&str> = registry
            .ordered_open_windows()
            .iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(order, vec!["cv", "hci"]);
    }

    #[test]
    fn project_windows_are_created_once_and_refocused() {
        let mut registry = registry();
        let project = Project::new("demo", "Demo", "A demo project");
        let first = registry.open_or_focus_project(&project, None);
        registry.open(&WindowId::from("about"), None);
        let second = registry.open_or_focus_project(&project, None);

        assert_eq!(first, second);
        let matching = registry.iter().filter(|w| w.id == first).count();
        assert_eq!(matching, 1);
        let window = registry.get(&first).unwrap();
        assert!(window.is_open);
        assert_eq!(window.z_index, registry.max_z_index());
        assert_eq!(window.project().map(|p| p.id.as_str()), Some("demo"));
    }

    #[test]
    fn close_keeps_descriptor_and_z_index() {
        let mut registry = registry();
        let hci = WindowId::from("hci");
        registry.open(&hci, None);
        let z = z_of(&registry, "hci");
        assert!(registry.close(&hci));

        let window = registry.get(&hci).unwrap();
        assert!(!window.is_open);
        assert_eq!(window.title, "HCI Research");
        assert_eq!(window.z_index, z);
        assert!(window.layout.is_some());
    }

    #[test]
    fn minimize_closes_and_reopen_clears_the_flag() {
        let mut registry = registry();
        let cv = WindowId::from("cv");
        registry.open(&cv, None);
        registry.minimize(&cv);
        assert!(!registry.get(&cv).unwrap().is_open);
        assert!(registry.get(&cv).unwrap().is_minimized);

        registry.open(&cv, None);
        assert!(registry.get(&cv).unwrap().is_open);
        assert!(!registry.get(&cv).unwrap().is_minimized);
    }

    #[test]
    fn moved_layout_survives_close_and_reopen() {
        let mut registry = registry();
        let hci = WindowId::from("hci");
        let viewport = Some(Viewport::new(1440, 900));
        registry.open(&hci, viewport);
        {
            let layout = registry.get_mut(&hci).unwrap().layout.as_mut().unwrap();
            layout.rect.x = 12;
            layout.moved_by_user = true;
        }
        registry.close(&hci);
        registry.open(&hci, viewport);
        assert_eq!(registry.get(&hci).unwrap().layout.unwrap().rect.x, 12);
    }

    #[test]
    fn untouched_layout_is_recentered_on_reopen() {
        let mut registry = registry();
        let hci = WindowId::from("hci");
        let viewport = Some(Viewport::new(1440, 900));
        registry.open(&hci, viewport);
        registry.close(&hci);
        registry.open(&WindowId::from("about"), viewport);
        registry.open(&hci, viewport);

        let window = registry.get(&hci).unwrap();
        let expected = default_rect(LayoutProfile::Generic { preferred: None }, viewport, window.z_index);
        assert_eq!(window.layout.unwrap().rect, expected);
    }

    #[test]
    fn open_on_an_open_window_only_changes_z_index() {
        let mut registry = registry();
        let hci = WindowId::from("hci");
        let viewport = Some(Viewport::new(1440, 900));
        registry.open(&hci, viewport);
        registry.get_mut(&hci).unwrap().layout.as_mut().unwrap().rect.w = 420;
        registry.open(&WindowId::from("cv"), viewport);
        let before = registry.get(&hci).unwrap().layout;

        assert!(registry.open(&hci, viewport));
        let window = registry.get(&hci).unwrap();
        assert_eq!(window.layout, before);
        assert_eq!(window.z_index, registry.max_z_index());
    }
}
