use super::*;
use crate::{
    clock::{format_menu_date, format_menu_time, ClockSnapshot},
    model::{ABOUT_WINDOW_ID, CV_WINDOW_ID},
};

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(ClockSnapshot::now());
    let tick = Duration::from_millis(runtime.config.with_value(|config| config.clock_tick_ms));

    if let Ok(interval) = set_interval_with_handle(move || clock_now.set(ClockSnapshot::now()), tick)
    {
        on_cleanup(move || interval.clear());
    }

    let active_title = create_memo(move |_| {
        state.with(|desktop| desktop.windows.top_window().map(|w| w.title.clone()))
    });
    let open_page = move |id: &'static str| {
        runtime.dispatch_action(DesktopAction::OpenWindow {
            window_id: WindowId::from(id),
        })
    };

    view! {
        <nav class="menu-bar" on:pointerdown=|ev: web_sys::PointerEvent| ev.stop_propagation()>
            <div class="menu-bar-left">
                <span class="menu-bar-brand">{catalog().owner_name.clone()}</span>
                <button class="menu-bar-item" on:click=move |_| open_page(ABOUT_WINDOW_ID)>
                    "About"
                </button>
                <button class="menu-bar-item" on:click=move |_| open_page(CV_WINDOW_ID)>
                    "CV"
                </button>
                <span class="menu-bar-active-title">{move || active_title.get()}</span>
            </div>
            <div class="menu-bar-right">
                <button
                    class="menu-bar-search"
                    aria-label="Search projects"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::OpenSpotlight)
                />
                <span class="menu-bar-date">{move || format_menu_date(clock_now.get())}</span>
                <span class="menu-bar-time">{move || format_menu_time(clock_now.get())}</span>
            </div>
        </nav>
    }
}
