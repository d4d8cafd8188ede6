use super::*;

#[component]
pub(super) fn DesktopIcon(folder_id: String, label: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let position = create_memo({
        let folder_id = folder_id.clone();
        move |_| state.with(|desktop| desktop.icons.get(&folder_id))
    });
    let selected = create_memo({
        let folder_id = folder_id.clone();
        move |_| state.with(|desktop| desktop.selection.is_selected(&folder_id))
    });
    let dragging = create_memo({
        let folder_id = folder_id.clone();
        move |_| {
            runtime
                .interaction
                .with(|ui| ui.icon_drag.as_ref().is_some_and(|drag| drag.contains(&folder_id)))
        }
    });

    let on_pointerdown = {
        let folder_id = folder_id.clone();
        move |ev: web_sys::PointerEvent| {
            if !is_primary_press(&ev) {
                return;
            }
            ev.prevent_default();
            ev.stop_propagation();
            runtime.dispatch_action(DesktopAction::PressIcon {
                icon_id: folder_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
                shift: ev.shift_key(),
            });
        }
    };
    let on_dblclick = move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::OpenFolderIcon {
            icon_id: folder_id.clone(),
        });
    };

    view! {
        <button
            class=move || {
                format!(
                    "desktop-icon{}{}",
                    if selected.get() { " selected" } else { "" },
                    if dragging.get() { " dragging" } else { "" }
                )
            }
            style=move || {
                let point = position.get();
                format!("left:{}px;top:{}px;", point.x, point.y)
            }
            on:pointerdown=on_pointerdown
            on:dblclick=on_dblclick
        >
            <span class="desktop-icon-glyph" aria-hidden="true"></span>
            <span class="desktop-icon-label">{label}</span>
        </button>
    }
}
