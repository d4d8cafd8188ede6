//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::catalog::catalog;
use crate::desktop_icons::{apply_icon_drag, begin_icon_drag, relayout_icons, IconMetrics};
use crate::model::{
    DesktopState, InteractionState, NotificationState, Point, Viewport, WindowId, WindowSession,
    WindowSessionKind, NAV_GUIDE_WINDOW_ID,
};
use crate::selection::{begin_marquee, press_icon, update_marquee};
use crate::window_layout::{drag_rect, resize_rect, LayoutProfile};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (or raise) a base window such as a folder, `about`, or `cv`.
    OpenWindow {
        window_id: WindowId,
    },
    /// Open the project window for a catalog project id, creating it on first use.
    OpenProject {
        project_id: String,
    },
    CloseWindow {
        window_id: WindowId,
    },
    MinimizeWindow {
        window_id: WindowId,
    },
    FocusWindow {
        window_id: WindowId,
    },
    ToggleMaximize {
        window_id: WindowId,
    },
    /// Title-bar press: focus the window and start a drag session.
    BeginWindowDrag {
        window_id: WindowId,
        pointer: Point,
    },
    /// Resize-handle press: focus the window and start a resize session.
    BeginWindowResize {
        window_id: WindowId,
        pointer: Point,
    },
    /// Pointer press on a desktop icon.
    PressIcon {
        icon_id: String,
        pointer: Point,
        shift: bool,
    },
    /// Double-click on a desktop icon.
    OpenFolderIcon {
        icon_id: String,
    },
    /// Pointer press on empty desktop space.
    PressDesktop {
        pointer: Point,
        shift: bool,
    },
    /// Window-level pointer move while any session is active.
    PointerMoved {
        pointer: Point,
    },
    /// Pointer release or cancel; ends every active session.
    PointerReleased,
    ViewportResized {
        viewport: Option<Viewport>,
    },
    OpenSpotlight,
    CloseSpotlight,
    SetSearchQuery {
        query: String,
    },
    /// Tag chip click: open spotlight searching for that tag.
    SearchTag {
        tag: String,
    },
    /// Spotlight result click: open the project and reset the overlay.
    ChooseSearchResult {
        project_id: String,
    },
    /// Delayed arrival banner timer fired.
    ShowNotification,
    DismissNotification,
    /// Banner click: open the navigation guide and dismiss the banner.
    OpenNotification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// A pointer session started; attach window-level move/up listeners.
    AcquirePointerListeners,
    /// The last pointer session ended; detach the window-level listeners.
    ReleasePointerListeners,
    /// Move keyboard focus into the spotlight search input.
    FocusSearchInput,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions referencing ids that do not exist.
///
/// State is left untouched when one of these is returned. They exist for diagnostics only.
pub enum ReducerError {
    #[error("window `{0}` not found")]
    UnknownWindow(WindowId),
    #[error("project `{0}` not found in catalog")]
    UnknownProject(String),
    #[error("desktop icon `{0}` not found")]
    UnknownIcon(String),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// # Errors
///
/// Returns a [`ReducerError`] when the action names an unknown window, project, or icon. The
/// state is unchanged in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    let sessions_before = pointer_session_active(state, interaction);

    match action {
        DesktopAction::OpenWindow { window_id } | DesktopAction::FocusWindow { window_id }
            if !state.windows.contains(&window_id) =>
        {
            return Err(ReducerError::UnknownWindow(window_id));
        }
        DesktopAction::OpenWindow { window_id } => {
            state.windows.open(&window_id, state.viewport);
        }
        DesktopAction::OpenProject { project_id } => open_project(state, &project_id)?,
        DesktopAction::CloseWindow { window_id } => {
            if !state.windows.close(&window_id) {
                return Err(ReducerError::UnknownWindow(window_id));
            }
            end_window_session_for(interaction, &window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            if !state.windows.minimize(&window_id) {
                return Err(ReducerError::UnknownWindow(window_id));
            }
            end_window_session_for(interaction, &window_id);
        }
        DesktopAction::FocusWindow { window_id } => {
            state.windows.focus(&window_id);
        }
        DesktopAction::ToggleMaximize { window_id } => {
            let viewport = state.viewport;
            let window = state
                .windows
                .get_mut(&window_id)
                .ok_or_else(|| ReducerError::UnknownWindow(window_id.clone()))?;
            if let Some(layout) = window.layout.as_mut() {
                layout.toggle_maximize(viewport);
            }
            end_window_session_for(interaction, &window_id);
        }
        DesktopAction::BeginWindowDrag { window_id, pointer } => {
            begin_window_session(state, interaction, window_id, WindowSessionKind::Drag, pointer)?;
        }
        DesktopAction::BeginWindowResize { window_id, pointer } => {
            begin_window_session(
                state,
                interaction,
                window_id,
                WindowSessionKind::Resize,
                pointer,
            )?;
        }
        DesktopAction::PressIcon {
            icon_id,
            pointer,
            shift,
        } => {
            if !state.icons.contains(&icon_id) {
                return Err(ReducerError::UnknownIcon(icon_id));
            }
            press_icon(&mut state.selection, &icon_id, shift);
            if state.selection.is_selected(&icon_id) {
                interaction.icon_drag = Some(begin_icon_drag(
                    &state.icons,
                    &icon_id,
                    &state.selection.selected,
                    state.features.enable_group_drag,
                    pointer,
                ));
            }
        }
        DesktopAction::OpenFolderIcon { icon_id } => {
            let window_id = WindowId::new(icon_id.clone());
            if !state.icons.contains(&icon_id) || !state.windows.open(&window_id, state.viewport) {
                return Err(ReducerError::UnknownIcon(icon_id));
            }
            interaction.icon_drag = None;
        }
        DesktopAction::PressDesktop { pointer, shift } => {
            if !shift {
                if state.features.enable_marquee_selection {
                    begin_marquee(&mut state.selection, pointer);
                } else {
                    state.selection.selected.clear();
                }
            }
        }
        DesktopAction::PointerMoved { pointer } => pointer_moved(state, interaction, pointer),
        DesktopAction::PointerReleased => {
            interaction.window = None;
            interaction.icon_drag = None;
            state.selection.marquee = None;
        }
        DesktopAction::ViewportResized { viewport } => {
            let viewport = Viewport::usable(viewport);
            state.viewport = viewport;
            state.icons = relayout_icons(
                &state.icons,
                viewport,
                &catalog().folders,
                interaction.icon_drag.as_ref(),
            );
            state.windows.refit_layouts(viewport);
        }
        DesktopAction::OpenSpotlight => {
            state.spotlight.open = true;
            effects.push(RuntimeEffect::FocusSearchInput);
        }
        DesktopAction::CloseSpotlight => {
            state.spotlight.open = false;
        }
        DesktopAction::SetSearchQuery { query } => {
            state.spotlight.query = query;
        }
        DesktopAction::SearchTag { tag } => {
            state.spotlight.open = true;
            state.spotlight.query = tag;
            effects.push(RuntimeEffect::FocusSearchInput);
        }
        DesktopAction::ChooseSearchResult { project_id } => {
            open_project(state, &project_id)?;
            state.spotlight.open = false;
            state.spotlight.query.clear();
        }
        DesktopAction::ShowNotification => {
            if state.features.show_arrival_notification
                && state.notification == NotificationState::Pending
            {
                state.notification = NotificationState::Visible;
            }
        }
        DesktopAction::DismissNotification => {
            state.notification = NotificationState::Dismissed;
        }
        DesktopAction::OpenNotification => {
            state
                .windows
                .open(&WindowId::from(NAV_GUIDE_WINDOW_ID), state.viewport);
            state.notification = NotificationState::Dismissed;
        }
    }

    match (sessions_before, pointer_session_active(state, interaction)) {
        (false, true) => effects.push(RuntimeEffect::AcquirePointerListeners),
        (true, false) => effects.push(RuntimeEffect::ReleasePointerListeners),
        _ => {}
    }
    Ok(effects)
}

fn pointer_session_active(state: &DesktopState, interaction: &InteractionState) -> bool {
    interaction.is_active() || state.selection.marquee.is_some()
}

fn open_project(state: &mut DesktopState, project_id: &str) -> Result<(), ReducerError> {
    let project = catalog()
        .project(project_id)
        .ok_or_else(|| ReducerError::UnknownProject(project_id.to_string()))?;
    state.windows.open_or_focus_project(project, state.viewport);
    Ok(())
}

/// Focuses the window, then captures the anchor snapshot unless the window refuses the session.
///
/// Maximized windows refuse both kinds. Resizing is refused for About and below the desktop
/// breakpoint.
fn begin_window_session(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
    kind: WindowSessionKind,
    pointer: Point,
) -> Result<(), ReducerError> {
    if !state.windows.contains(&window_id) {
        return Err(ReducerError::UnknownWindow(window_id));
    }
    state.windows.focus(&window_id);

    let viewport = state.viewport;
    let Some(window) = state.windows.get_mut(&window_id).filter(|w| w.is_open) else {
        return Ok(());
    };
    let profile = LayoutProfile::for_content(&window.content);
    let Some(layout) = window.layout.as_mut() else {
        return Ok(());
    };
    let refused = layout.maximized
        || (kind == WindowSessionKind::Resize && !profile.resizable(viewport));
    if refused {
        return Ok(());
    }
    if kind == WindowSessionKind::Drag {
        layout.moved_by_user = true;
    }
    interaction.window = Some(WindowSession {
        window_id,
        kind,
        pointer_start: pointer,
        rect_start: layout.rect,
    });
    Ok(())
}

fn end_window_session_for(interaction: &mut InteractionState, window_id: &WindowId) {
    if interaction
        .window
        .as_ref()
        .is_some_and(|session| &session.window_id == window_id)
    {
        interaction.window = None;
    }
}

fn pointer_moved(state: &mut DesktopState, interaction: &InteractionState, pointer: Point) {
    if let Some(session) = interaction.window.as_ref() {
        let (dx, dy) = pointer.delta_from(session.pointer_start);
        let layout = state
            .windows
            .get_mut(&session.window_id)
            .and_then(|window| window.layout.as_mut());
        if let Some(layout) = layout.filter(|layout| !layout.maximized) {
            layout.rect = match session.kind {
                WindowSessionKind::Drag => drag_rect(session.rect_start, dx, dy),
                WindowSessionKind::Resize => resize_rect(session.rect_start, dx, dy),
            };
        }
    } else if let Some(session) = interaction.icon_drag.as_ref() {
        apply_icon_drag(&mut state.icons, session, pointer);
    } else {
        let hit_box = IconMetrics::for_viewport(state.viewport).hit_box;
        update_marquee(&mut state.selection, &state.icons, pointer, hit_box);
    }
}
