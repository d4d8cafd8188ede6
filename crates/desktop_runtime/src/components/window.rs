use super::*;
use crate::{components::content::render_window_content, window_layout::LayoutProfile};

fn stop_pointer_event(ev: &web_sys::PointerEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    // Content mounts once per open; only geometry and focus styling are reactive.
    let Some(descriptor) = state.with_untracked(|desktop| desktop.windows.get(&window_id).cloned())
    else {
        return ().into_view();
    };
    let profile = LayoutProfile::for_content(&descriptor.content);
    let resizable = create_memo(move |_| state.with(|desktop| profile.resizable(desktop.viewport)));
    let kind = descriptor.kind().css_id();
    let title = descriptor.title.clone();
    let body = render_window_content(&descriptor.id, &descriptor.content);

    let geometry = create_memo({
        let window_id = window_id.clone();
        move |_| {
            state.with(|desktop| {
                desktop
                    .windows
                    .get(&window_id)
                    .map(|w| (w.z_index, w.layout))
            })
        }
    });
    let is_top = create_memo({
        let window_id = window_id.clone();
        move |_| {
            state.with(|desktop| {
                desktop
                    .windows
                    .top_window()
                    .is_some_and(|top| top.id == window_id)
            })
        }
    });
    let maximized = move || {
        geometry
            .get()
            .and_then(|(_, layout)| layout)
            .is_some_and(|layout| layout.maximized)
    };

    let style = move || {
        let Some((z_index, Some(layout))) = geometry.get() else {
            return String::new();
        };
        let rect = layout.rect;
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            rect.x, rect.y, rect.w, rect.h, z_index
        )
    };

    let focus = {
        let window_id = window_id.clone();
        move |ev: web_sys::PointerEvent| {
            ev.stop_propagation();
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: window_id.clone(),
            });
        }
    };
    let begin_move = {
        let window_id = window_id.clone();
        move |ev: web_sys::PointerEvent| {
            if !is_primary_press(&ev) {
                return;
            }
            try_set_pointer_capture(&ev);
            stop_pointer_event(&ev);
            runtime.dispatch_action(DesktopAction::BeginWindowDrag {
                window_id: window_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let begin_resize = {
        let window_id = window_id.clone();
        move |ev: web_sys::PointerEvent| {
            if !is_primary_press(&ev) {
                return;
            }
            try_set_pointer_capture(&ev);
            stop_pointer_event(&ev);
            runtime.dispatch_action(DesktopAction::BeginWindowResize {
                window_id: window_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let toggle_maximize = {
        let window_id = window_id.clone();
        move || {
            runtime.dispatch_action(DesktopAction::ToggleMaximize {
                window_id: window_id.clone(),
            })
        }
    };
    let close = {
        let window_id = window_id.clone();
        move |_: web_sys::MouseEvent| {
            runtime.dispatch_action(DesktopAction::CloseWindow {
                window_id: window_id.clone(),
            })
        }
    };
    let minimize = {
        let window_id = window_id.clone();
        move |_: web_sys::MouseEvent| {
            runtime.dispatch_action(DesktopAction::MinimizeWindow {
                window_id: window_id.clone(),
            })
        }
    };
    let maximize_button = {
        let toggle_maximize = toggle_maximize.clone();
        move |_: web_sys::MouseEvent| toggle_maximize()
    };

    view! {
        <section
            class=move || {
                format!(
                    "desktop-window window-{kind}{}{}",
                    if is_top.get() { " focused" } else { "" },
                    if maximized() { " maximized" } else { "" }
                )
            }
            style=style
            role="dialog"
            aria-label=title.clone()
            on:pointerdown=focus
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    toggle_maximize();
                }
            >
                <div class="titlebar-controls" on:pointerdown=move |ev| stop_pointer_event(&ev)>
                    <button class="titlebar-close" aria-label="Close window" on:click=close />
                    <button class="titlebar-minimize" aria-label="Minimize window" on:click=minimize />
                    <button
                        class="titlebar-maximize"
                        aria-label=move || if maximized() { "Restore window" } else { "Maximize window" }
                        on:click=maximize_button
                    />
                </div>
                <span class="titlebar-title">{title}</span>
            </header>
            <div class="window-body">{body}</div>
            <Show when=move || resizable.get() && !maximized() fallback=|| ()>
                <div
                    class="window-resize-handle"
                    aria-hidden="true"
                    on:pointerdown=begin_resize.clone()
                />
            </Show>
        </section>
    }
    .into_view()
}
