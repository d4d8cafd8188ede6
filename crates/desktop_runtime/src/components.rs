//! Desktop shell UI composition and interaction surfaces.

mod content;
mod desktop_icon;
mod menu_bar;
mod notification;
mod spotlight;
mod window;

use std::time::Duration;

use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use self::{
    desktop_icon::DesktopIcon, menu_bar::MenuBar, notification::ArrivalNotification,
    spotlight::Spotlight, window::DesktopWindow,
};
use crate::{
    catalog::catalog,
    host::pointer_from_pointer_event,
    model::{WindowContent, WindowId},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Left button for mice; the primary contact for touch and pen.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
/// Full desktop: menu bar, icon field with marquee, window layer, spotlight, and banner.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.dispatch_action(DesktopAction::ViewportResized {
            viewport: runtime.host.get_value().viewport(),
        });
    });
    on_cleanup(move || resize_listener.remove());

    let open_window_ids = create_memo(move |_| {
        state.with(|desktop| {
            desktop
                .windows
                .iter()
                .filter(|w| w.is_open)
                .map(|w| w.id.clone())
                .collect::<Vec<_>>()
        })
    });
    let marquee = create_memo(move |_| state.with(|desktop| desktop.selection.marquee));

    let on_desktop_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::PressDesktop {
            pointer: pointer_from_pointer_event(&ev),
            shift: ev.shift_key(),
        });
    };

    view! {
        <div id="desktop-shell-root" class="desktop-shell">
            <MenuBar />
            <div class="desktop-surface" on:pointerdown=on_desktop_pointerdown>
                {catalog()
                    .folders
                    .iter()
                    .map(|folder| {
                        view! { <DesktopIcon folder_id=folder.id.clone() label=folder.name.clone() /> }
                    })
                    .collect_view()}
                {move || {
                    marquee
                        .get()
                        .map(|marquee| {
                            let bounds = marquee.bounds();
                            view! {
                                <div
                                    class="desktop-marquee"
                                    aria-hidden="true"
                                    style=format!(
                                        "left:{}px;top:{}px;width:{}px;height:{}px;",
                                        bounds.left,
                                        bounds.top,
                                        bounds.width(),
                                        bounds.height()
                                    )
                                />
                            }
                        })
                }}
            </div>
            <div class="desktop-window-layer">
                <For each=move || open_window_ids.get() key=|id| id.clone() let:window_id>
                    <DesktopWindow window_id=window_id />
                </For>
            </div>
            <Spotlight />
            <ArrivalNotification />
        </div>
    }
}
