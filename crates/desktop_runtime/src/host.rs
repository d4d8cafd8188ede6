//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; everything that touches `window` or the DOM goes through
//! [`DesktopHostContext`].

mod host_ui;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;

use crate::{
    model::{Point, Viewport},
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

/// DOM id of the spotlight search field.
pub const SPOTLIGHT_INPUT_ID: &str = "spotlight-search-input";

#[derive(Clone, Default)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    pointer_listeners: Rc<RefCell<Option<Vec<WindowListenerHandle>>>>,
}

impl DesktopHostContext {
    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::AcquirePointerListeners => {
                self.acquire_pointer_listeners(runtime.dispatch)
            }
            RuntimeEffect::ReleasePointerListeners => self.release_pointer_listeners(),
            RuntimeEffect::FocusSearchInput => host_ui::focus_element_by_id(SPOTLIGHT_INPUT_ID),
        }
    }

    /// Attaches window-level `pointermove`/`pointerup`/`pointercancel` listeners that feed the
    /// active session. Calling this while listeners are held is a no-op.
    pub fn acquire_pointer_listeners(&self, dispatch: Callback<DesktopAction>) {
        let mut slot = self.pointer_listeners.borrow_mut();
        if slot.is_some() {
            return;
        }
        *slot = Some(vec![
            window_event_listener(ev::pointermove, move |ev| {
                dispatch.call(DesktopAction::PointerMoved {
                    pointer: pointer_from_pointer_event(&ev),
                });
            }),
            window_event_listener(ev::pointerup, move |_| {
                dispatch.call(DesktopAction::PointerReleased);
            }),
            window_event_listener(ev::pointercancel, move |_| {
                dispatch.call(DesktopAction::PointerReleased);
            }),
        ]);
    }

    /// Detaches the session listeners, if any are held.
    pub fn release_pointer_listeners(&self) {
        let Some(handles) = self.pointer_listeners.borrow_mut().take() else {
            return;
        };
        for handle in handles {
            handle.remove();
        }
    }

    /// Current browser viewport, or `None` outside a browser or when it reports no size.
    pub fn viewport(&self) -> Option<Viewport> {
        Viewport::usable(host_ui::read_viewport())
    }
}

pub(crate) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> Point {
    Point::new(ev.client_x(), ev.client_y())
}
