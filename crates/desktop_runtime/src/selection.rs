//! Marquee hit-testing and click-to-select rules for desktop icons.

use std::collections::BTreeSet;

use crate::desktop_icons::IconPositions;
use crate::model::{Marquee, Point, SelectionState};

/// Axis-aligned box given by its inclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    /// Normalizes two opposite corners in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    pub fn square(top_left: Point, side: i32) -> Self {
        Self {
            left: top_left.x,
            top: top_left.y,
            right: top_left.x + side,
            bottom: top_left.y + side,
        }
    }

    /// Separating-axis overlap test; touching edges count as overlap.
    pub fn overlaps(self, other: Self) -> bool {
        !(self.left > other.right
            || self.right < other.left
            || self.top > other.bottom
            || self.bottom < other.top)
    }

    pub fn width(self) -> i32 {
        self.right - self.left
    }

    pub fn height(self) -> i32 {
        self.bottom - self.top
    }
}

impl Marquee {
    pub fn bounds(self) -> Bounds {
        Bounds::from_corners(self.start, self.current)
    }
}

/// Ids of every icon whose hit box overlaps `marquee`. Always a full scan.
pub fn icons_in_marquee(positions: &IconPositions, marquee: Marquee, hit_box: i32) -> BTreeSet<String> {
    let rect = marquee.bounds();
    positions
        .iter()
        .filter(|(_, position)| rect.overlaps(Bounds::square(*position, hit_box)))
        .map(|(id, _)| id.to_string())
        .collect()
}

/// Applies a press on `icon_id`. Returns `true` when the selection changed.
///
/// A plain press selects only that icon (a no-op if it is already the sole selection). A shift
/// press toggles that icon and leaves the others alone.
pub fn press_icon(selection: &mut SelectionState, icon_id: &str, shift: bool) -> bool {
    if shift {
        if !selection.selected.remove(icon_id) {
            selection.selected.insert(icon_id.to_string());
        }
        return true;
    }

    let sole_selection = selection.selected.len() == 1 && selection.selected.contains(icon_id);
    if sole_selection {
        return false;
    }
    selection.selected.clear();
    selection.selected.insert(icon_id.to_string());
    true
}

/// Starts a marquee session at `pointer`, clearing any previous selection.
pub fn begin_marquee(selection: &mut SelectionState, pointer: Point) {
    selection.selected.clear();
    selection.marquee = Some(Marquee {
        start: pointer,
        current: pointer,
    });
}

/// Extends the active marquee to `pointer` and re-evaluates the selected set.
///
/// Returns `false` when no marquee is active.
pub fn update_marquee(
    selection: &mut SelectionState,
    positions: &IconPositions,
    pointer: Point,
    hit_box: i32,
) -> bool {
    let Some(marquee) = selection.marquee.as_mut() else {
        return false;
    };
    marquee.current = pointer;
    let marquee = *marquee;
    selection.selected = icons_in_marquee(positions, marquee, hit_box);
    true
}
