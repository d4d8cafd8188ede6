//! Desktop folder-icon placement and drag geometry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Folder;
use crate::model::{IconDragSession, Point, Viewport, MENU_BAR_HEIGHT};

/// Viewport width below which icons use the compact mobile metrics.
pub const ICON_MOBILE_BREAKPOINT: i32 = 768;
/// Viewport assumed when the real one is unavailable.
pub const FALLBACK_ICON_VIEWPORT: Viewport = Viewport::new(1200, 800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconMetrics {
    /// Column width used to inset the column from the right edge.
    pub base: i32,
    /// Gap between the menu bar and the first icon.
    pub padding: i32,
    pub right_margin: i32,
    /// Vertical distance between consecutive icons.
    pub pitch: i32,
    /// Side of the square hit box used by marquee selection.
    pub hit_box: i32,
}

impl IconMetrics {
    pub const MOBILE: Self = Self {
        base: 80,
        padding: 10,
        right_margin: 10,
        pitch: 85,
        hit_box: 80,
    };

    pub const DESKTOP: Self = Self {
        base: 130,
        padding: 60,
        right_margin: 30,
        pitch: 120,
        hit_box: 110,
    };

    pub fn for_viewport(viewport: Option<Viewport>) -> Self {
        let width = Viewport::usable(viewport)
            .unwrap_or(FALLBACK_ICON_VIEWPORT)
            .width;
        if width < ICON_MOBILE_BREAKPOINT {
            Self::MOBILE
        } else {
            Self::DESKTOP
        }
    }
}

/// Top-left corner of every folder icon, keyed by folder id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IconPositions(BTreeMap<String, Point>);

impl IconPositions {
    /// Position of `icon_id`, or the origin when it has no entry yet.
    pub fn get(&self, icon_id: &str) -> Point {
        self.0.get(icon_id).copied().unwrap_or(Point::ORIGIN)
    }

    pub fn set(&mut self, icon_id: impl Into<String>, position: Point) {
        self.0.insert(icon_id.into(), position);
    }

    pub fn contains(&self, icon_id: &str) -> bool {
        self.0.contains_key(icon_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.0.iter().map(|(id, point)| (id.as_str(), *point))
    }
}

impl FromIterator<(String, Point)> for IconPositions {
    fn from_iter<T: IntoIterator<Item = (String, Point)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Places every folder in a single column near the right edge of the viewport.
pub fn initial_icon_positions(viewport: Option<Viewport>, folders: &[Folder]) -> IconPositions {
    let Viewport { width, .. } = Viewport::usable(viewport).unwrap_or(FALLBACK_ICON_VIEWPORT);
    let metrics = IconMetrics::for_viewport(viewport);
    let x = width - metrics.base - metrics.right_margin;

    folders
        .iter()
        .enumerate()
        .map(|(idx, folder)| {
            let y = MENU_BAR_HEIGHT + metrics.padding + idx as i32 * metrics.pitch;
            (folder.id.clone(), Point::new(x, y))
        })
        .collect()
}

/// Recomputes the column layout for a new viewport, leaving icons in `active_drag` untouched.
pub fn relayout_icons(
    current: &IconPositions,
    viewport: Option<Viewport>,
    folders: &[Folder],
    active_drag: Option<&IconDragSession>,
) -> IconPositions {
    let mut next = initial_icon_positions(viewport, folders);
    if let Some(session) = active_drag {
        for icon_id in session.icon_starts.keys() {
            if current.contains(icon_id) {
                next.set(icon_id.clone(), current.get(icon_id));
            }
        }
    }
    next
}

/// Starts dragging `icon_id`, together with the rest of `selected` when `group` is set.
pub fn begin_icon_drag<'a>(
    positions: &IconPositions,
    icon_id: &str,
    selected: impl IntoIterator<Item = &'a String>,
    group: bool,
    pointer: Point,
) -> IconDragSession {
    let mut icon_starts = BTreeMap::new();
    icon_starts.insert(icon_id.to_string(), positions.get(icon_id));
    if group {
        for id in selected {
            icon_starts.insert(id.clone(), positions.get(id));
        }
    }
    IconDragSession {
        pointer_start: pointer,
        icon_starts,
    }
}

/// Moves every icon in the session by the same pointer delta from its start position.
///
/// Returns `true` when any position changed.
pub fn apply_icon_drag(
    positions: &mut IconPositions,
    session: &IconDragSession,
    pointer: Point,
) -> bool {
    let (dx, dy) = pointer.delta_from(session.pointer_start);
    let mut changed = false;
    for (icon_id, start) in &session.icon_starts {
        let next = start.offset(dx, dy);
        if positions.get(icon_id) != next || !positions.contains(icon_id) {
            positions.set(icon_id.clone(), next);
            changed = true;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;

    fn folders() -> Vec<Folder> {
        ["a", "b", "c"]
            .into_iter()
            .map(|id| Folder {
                id: id.to_string(),
                name: id.to_uppercase(),
            })
            .collect()
    }

    #[test]
    fn desktop_layout_is_a_right_hand_column() {
        let positions = initial_icon_positions(Some(Viewport::new(1440, 900)), &folders());
        assert_eq!(positions.get("a"), Point::new(1280, 92));
        assert_eq!(positions.get("b"), Point::new(1280, 212));
        assert_eq!(positions.get("c"), Point::new(1280, 332));
    }

    #[test]
    fn mobile_layout_uses_compact_pitch() {
        let positions = initial_icon_positions(Some(Viewport::new(390, 844)), &folders());
        assert_eq!(positions.get("a"), Point::new(300, 42));
        assert_eq!(positions.get("b"), Point::new(300, 127));
    }

    #[test]
    fn missing_viewport_lays_out_for_fallback_size() {
        let positions = initial_icon_positions(None, &folders());
        assert_eq!(positions.get("a"), Point::new(1040, 92));
    }

    #[test]
    fn unknown_icon_defaults_to_origin() {
        let positions = initial_icon_positions(None, &folders());
        assert_eq!(positions.get("zzz"), Point::ORIGIN);
    }

    #[test]
    fn group_drag_moves_selected_icons_in_lockstep() {
        let mut positions = initial_icon_positions(Some(Viewport::new(1440, 900)), &folders());
        let before = positions.clone();
        let selected: BTreeSet<String> = ["a".to_string(), "b".to_string()].into();

        let session = begin_icon_drag(&positions, "a", &selected, true, Point::new(10, 10));
        assert!(apply_icon_drag(&mut positions, &session, Point::new(-30, 55)));

        assert_eq!(positions.get("a"), before.get("a").offset(-40, 45));
        assert_eq!(positions.get("b"), before.get("b").offset(-40, 45));
        assert_eq!(positions.get("c"), before.get("c"));
    }

    #[test]
    fn single_drag_ignores_selection_when_grouping_is_off() {
        let mut positions = initial_icon_positions(Some(Viewport::new(1440, 900)), &folders());
        let before = positions.clone();
        let selected: BTreeSet<String> = ["a".to_string(), "b".to_string()].into();

        let session = begin_icon_drag(&positions, "a", &selected, false, Point::ORIGIN);
        apply_icon_drag(&mut positions, &session, Point::new(5, 5));

        assert_eq!(positions.get("a"), before.get("a").offset(5, 5));
        assert_eq!(positions.get("b"), before.get("b"));
    }

    #[test]
    fn relayout_preserves_icons_being_dragged() {
        let wide = Some(Viewport::new(1440, 900));
        let mut positions = initial_icon_positions(wide, &folders());
        let session = begin_icon_drag(&positions, "b", std::iter::empty(), true, Point::ORIGIN);
        apply_icon_drag(&mut positions, &session, Point::new(-400, 10));
        let dragged = positions.get("b");

        let narrow = Some(Viewport::new(1000, 700));
        let next = relayout_icons(&positions, narrow, &folders(), Some(&session));
        assert_eq!(next.get("b"), dragged);
        assert_eq!(next.get("a"), Point::new(840, 92));

        let settled = relayout_icons(&positions, narrow, &folders(), None);
        assert_eq!(settled.get("b"), Point::new(840, 212));
    }
}
