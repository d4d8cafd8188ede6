//! Per-window geometry: responsive default sizing, drag/resize math, and maximize toggling.
//!
//! Everything here is pure. The reducer owns the sessions and feeds pointer positions in.

use crate::model::{
    Point, Size, Viewport, WindowContent, WindowLayout, WindowRect, MENU_BAR_HEIGHT,
};

/// Minimum window width reachable by resizing.
pub const MIN_WINDOW_WIDTH: i32 = 200;
/// Minimum window height reachable by resizing.
pub const MIN_WINDOW_HEIGHT: i32 = 150;
/// Size used when no viewport is available.
pub const FALLBACK_WINDOW_SIZE: Size = Size::new(800, 500);
/// Position used when no viewport is available.
pub const FALLBACK_WINDOW_POSITION: Point = Point::new(100, 100);

const PROJECT_WINDOW_SIZE: Size = Size::new(950, 650);
const CERTIFICATION_WINDOW_SIZE: Size = Size::new(150, 180);
const MIN_DEFAULT_TOP: i32 = 40;
const STAGGER_STEP: i32 = 25;
const STAGGER_SLOTS: u32 = 6;
const STAGGER_BASE_Z: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn from_width(width: i32) -> Self {
        if width < 640 {
            Self::Mobile
        } else if width < 1024 {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}

/// Per-window-type overrides for default sizing and placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutProfile {
    About,
    Cv,
    Certification,
    Generic { preferred: Option<Size> },
}

impl LayoutProfile {
    pub fn for_content(content: &WindowContent) -> Self {
        match content {
            WindowContent::About => Self::About,
            WindowContent::Cv => Self::Cv,
            WindowContent::Certification => Self::Certification,
            WindowContent::Project(_) => Self::Generic {
                preferred: Some(PROJECT_WINDOW_SIZE),
            },
            WindowContent::Folder | WindowContent::NavGuide => Self::Generic { preferred: None },
        }
    }

    /// Resize handles exist only on desktop-width viewports, and never on About.
    ///
    /// Without a viewport the desktop fallback geometry applies, so resizing stays allowed.
    pub fn resizable(self, viewport: Option<Viewport>) -> bool {
        let wide = viewport.map_or(true, |v| Breakpoint::from_width(v.width) == Breakpoint::Desktop);
        wide && !matches!(self, Self::About)
    }

    fn preferred(self) -> Option<Size> {
        match self {
            Self::Certification => Some(CERTIFICATION_WINDOW_SIZE),
            Self::Generic { preferred } => preferred,
            Self::About | Self::Cv => None,
        }
    }
}

/// Default window size for `profile` at the current viewport breakpoint.
pub fn responsive_size(profile: LayoutProfile, viewport: Option<Viewport>) -> Size {
    let Some(Viewport { width, height }) = Viewport::usable(viewport) else {
        return FALLBACK_WINDOW_SIZE;
    };

    match Breakpoint::from_width(width) {
        Breakpoint::Mobile => match profile {
            LayoutProfile::About => Size::new(width * 9 / 10, 480.min(height * 7 / 10)),
            LayoutProfile::Certification => Size::new(180, 240),
            _ => Size::new(width - 16, height - 120),
        },
        Breakpoint::Tablet => match profile {
            LayoutProfile::About => Size::new(340, 520),
            LayoutProfile::Cv => Size::new(800.min(width - 60), height - 120),
            _ => {
                let base = profile.preferred().unwrap_or(Size::new(700, 550));
                Size::new(base.w.min(width - 40), base.h.min(height - 120))
            }
        },
        Breakpoint::Desktop => {
            let base = profile.preferred().unwrap_or(match profile {
                LayoutProfile::About => Size::new(340, 520),
                LayoutProfile::Cv => Size::new(800, 850.min(height - 80)),
                _ => Size::new(850, 600),
            });
            Size::new(base.w.min(width - 40), base.h.min(height - 60))
        }
    }
}

/// Default top-left corner: centered, with About pinned below the menu bar, the CV docked
/// right, and everything else staggered by stacking order.
pub fn default_position(
    profile: LayoutProfile,
    viewport: Option<Viewport>,
    size: Size,
    z_index: u32,
) -> Point {
    let Some(Viewport { width, height }) = Viewport::usable(viewport) else {
        return FALLBACK_WINDOW_POSITION;
    };
    let mobile = Breakpoint::from_width(width) == Breakpoint::Mobile;
    let center_x = (width - size.w) / 2;
    let center_y = (height - size.h) / 2;

    match profile {
        LayoutProfile::About => Point::new(center_x, center_y.max(MIN_DEFAULT_TOP)),
        LayoutProfile::Cv if !mobile => Point::new(width - size.w - 40, center_y),
        _ => {
            let offset = if mobile {
                0
            } else {
                (z_index.saturating_sub(STAGGER_BASE_Z) % STAGGER_SLOTS) as i32 * STAGGER_STEP
            };
            Point::new(center_x + offset, (center_y + offset).max(MIN_DEFAULT_TOP))
        }
    }
}

pub fn default_rect(profile: LayoutProfile, viewport: Option<Viewport>, z_index: u32) -> WindowRect {
    let size = responsive_size(profile, viewport);
    WindowRect::from_parts(default_position(profile, viewport, size, z_index), size)
}

/// Rect of a maximized window: full width, everything below the menu bar.
pub fn maximized_rect(viewport: Option<Viewport>) -> WindowRect {
    let Some(Viewport { width, height }) = Viewport::usable(viewport) else {
        return WindowRect::from_parts(Point::new(0, MENU_BAR_HEIGHT), FALLBACK_WINDOW_SIZE);
    };
    WindowRect {
        x: 0,
        y: MENU_BAR_HEIGHT,
        w: width,
        h: (height - MENU_BAR_HEIGHT).max(0),
    }
}

/// Translates `start` by the pointer delta, keeping the title bar below the menu bar.
pub fn drag_rect(start: WindowRect, dx: i32, dy: i32) -> WindowRect {
    let moved = start.offset(dx, dy);
    WindowRect {
        y: moved.y.max(MENU_BAR_HEIGHT),
        ..moved
    }
}

/// Grows `start` from its bottom-right corner by the pointer delta.
pub fn resize_rect(start: WindowRect, dx: i32, dy: i32) -> WindowRect {
    WindowRect {
        w: start.w + dx,
        h: start.h + dy,
        ..start
    }
    .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
}

impl WindowLayout {
    pub fn initial(profile: LayoutProfile, viewport: Option<Viewport>, z_index: u32) -> Self {
        Self::new(default_rect(profile, viewport, z_index))
    }

    /// Flips the maximized flag. Leaving the maximized state restores the exact prior rect.
    pub fn toggle_maximize(&mut self, viewport: Option<Viewport>) {
        if self.maximized {
            if let Some(restore) = self.restore_rect.take() {
                self.rect = restore;
            }
            self.maximized = false;
        } else {
            self.restore_rect = Some(self.rect);
            self.rect = maximized_rect(viewport);
            self.maximized = true;
        }
    }

    /// Re-applies responsive defaults after a viewport change.
    ///
    /// Returns `true` when the rect changed. Maximized windows are re-fitted to the new viewport;
    /// windows the user has moved keep their placement.
    pub fn refit(&mut self, profile: LayoutProfile, viewport: Option<Viewport>, z_index: u32) -> bool {
        let next = if self.maximized {
            maximized_rect(viewport)
        } else if self.moved_by_user {
            return false;
        } else {
            default_rect(profile, viewport, z_index)
        };
        if next == self.rect {
            return false;
        }
        self.rect = next;
        true
    }
}
