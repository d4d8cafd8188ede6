use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{catalog, Catalog, Project};
use crate::config::ShellFeatures;
use crate::desktop_icons::{initial_icon_positions, IconPositions};
use crate::window_manager::WindowRegistry;

/// Height of the top menu bar; windows cannot be dragged above it.
pub const MENU_BAR_HEIGHT: i32 = 32;

pub const NAV_GUIDE_WINDOW_ID: &str = "nav-guide";
pub const ABOUT_WINDOW_ID: &str = "about";
pub const CV_WINDOW_ID: &str = "cv";
pub const CERTIFICATION_WINDOW_ID: &str = "certification";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of the lazily created window for `project_id`.
    pub fn project(project_id: &str) -> Self {
        Self(format!("project-{project_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Delta from `origin` to `self`.
    pub fn delta_from(self, origin: Self) -> (i32, i32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

/// Live browser viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns `None` for zero or negative dimensions so callers take their fallback path.
    pub fn usable(viewport: Option<Self>) -> Option<Self> {
        viewport.filter(|v| v.width > 0 && v.height > 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn from_parts(position: Point, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            w: size.w,
            h: size.h,
        }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

/// Content-type tag exposed to renderers and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowKind {
    Folder,
    Project,
    About,
    Cv,
}

impl WindowKind {
    pub fn css_id(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Project => "project",
            Self::About => "about",
            Self::Cv => "cv",
        }
    }
}

/// What a window shows. Project windows carry their immutable payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowContent {
    Folder,
    About,
    Cv,
    Certification,
    NavGuide,
    Project(Box<Project>),
}

impl WindowContent {
    pub fn kind(&self) -> WindowKind {
        match self {
            Self::Folder => WindowKind::Folder,
            Self::About => WindowKind::About,
            Self::Cv => WindowKind::Cv,
            Self::Certification | Self::NavGuide | Self::Project(_) => WindowKind::Project,
        }
    }
}

/// Size, position, and maximize state of one window, kept across close/reopen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowLayout {
    pub rect: WindowRect,
    /// Rect to return to when leaving the maximized state.
    pub restore_rect: Option<WindowRect>,
    pub maximized: bool,
    /// Set once the user drags the window; responsive re-layout leaves it alone afterwards.
    pub moved_by_user: bool,
}

impl WindowLayout {
    pub fn new(rect: WindowRect) -> Self {
        Self {
            rect,
            restore_rect: None,
            maximized: false,
            moved_by_user: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    pub id: WindowId,
    pub title: String,
    pub is_open: bool,
    pub is_minimized: bool,
    pub z_index: u32,
    pub content: WindowContent,
    /// `None` until the window is first opened.
    pub layout: Option<WindowLayout>,
}

impl WindowDescriptor {
    pub fn new(id: WindowId, title: impl Into<String>, z_index: u32, content: WindowContent) -> Self {
        Self {
            id,
            title: title.into(),
            is_open: false,
            is_minimized: false,
            z_index,
            content,
            layout: None,
        }
    }

    pub fn kind(&self) -> WindowKind {
        self.content.kind()
    }

    pub fn project(&self) -> Option<&Project> {
        match &self.content {
            WindowContent::Project(project) => Some(project),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowSessionKind {
    Drag,
    Resize,
}

/// Anchor snapshot for a window drag or resize; exists only while the pointer is held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSession {
    pub window_id: WindowId,
    pub kind: WindowSessionKind,
    pub pointer_start: Point,
    pub rect_start: WindowRect,
}

/// Anchor snapshot for dragging one or more desktop icons together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDragSession {
    pub pointer_start: Point,
    /// Start position of every icon moving in this session (the active-drag set).
    pub icon_starts: BTreeMap<String, Point>,
}

impl IconDragSession {
    pub fn contains(&self, icon_id: &str) -> bool {
        self.icon_starts.contains_key(icon_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub window: Option<WindowSession>,
    pub icon_drag: Option<IconDragSession>,
}

impl InteractionState {
    pub fn is_active(&self) -> bool {
        self.window.is_some() || self.icon_drag.is_some()
    }
}

/// Rubber-band rectangle defined by the press point and the current pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marquee {
    pub start: Point,
    pub current: Point,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub marquee: Option<Marquee>,
    pub selected: BTreeSet<String>,
}

impl SelectionState {
    pub fn is_selected(&self, icon_id: &str) -> bool {
        self.selected.contains(icon_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpotlightState {
    pub open: bool,
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NotificationState {
    #[default]
    Pending,
    Visible,
    Dismissed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: WindowRegistry,
    pub icons: IconPositions,
    pub selection: SelectionState,
    pub spotlight: SpotlightState,
    pub notification: NotificationState,
    pub viewport: Option<Viewport>,
    pub features: ShellFeatures,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::boot(catalog(), ShellFeatures::default(), None)
    }
}

impl DesktopState {
    /// Builds the startup state: every base window closed, icons laid out for `viewport`.
    pub fn boot(catalog: &Catalog, features: ShellFeatures, viewport: Option<Viewport>) -> Self {
        Self {
            windows: WindowRegistry::from_catalog(catalog),
            icons: initial_icon_positions(viewport, &catalog.folders),
            selection: SelectionState::default(),
            spotlight: SpotlightState::default(),
            notification: NotificationState::default(),
            viewport,
            features,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn project_window_ids_are_prefixed() {
        assert_eq!(WindowId::project("xr-1").as_str(), "project-xr-1");
    }

    #[test]
    fn degenerate_viewports_are_not_usable() {
        assert_eq!(Viewport::usable(Some(Viewport::new(0, 800))), None);
        assert_eq!(Viewport::usable(Some(Viewport::new(1200, -1))), None);
        assert_eq!(Viewport::usable(None), None);
        assert_eq!(
            Viewport::usable(Some(Viewport::new(1200, 800))),
            Some(Viewport::new(1200, 800))
        );
    }

    #[test]
    fn fixed_pages_report_the_project_kind() {
        assert_eq!(WindowContent::Certification.kind(), WindowKind::Project);
        assert_eq!(WindowContent::NavGuide.kind(), WindowKind::Project);
        assert_eq!(WindowContent::Cv.kind(), WindowKind::Cv);
    }

    #[test]
    fn boot_state_has_every_base_window_closed() {
        let state = DesktopState::boot(catalog(), ShellFeatures::default(), None);
        assert!(state.windows.iter().all(|w| !w.is_open));
        assert_eq!(state.icons.iter().count(), catalog().folders.len());
        assert_eq!(state.notification, NotificationState::Pending);
    }
}
