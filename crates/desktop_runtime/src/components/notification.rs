use super::*;
use crate::model::NotificationState;

#[component]
pub(super) fn ArrivalNotification() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let config = runtime.config.get_value();

    if config.features.show_arrival_notification {
        if let Ok(timeout) = set_timeout_with_handle(
            move || runtime.dispatch_action(DesktopAction::ShowNotification),
            Duration::from_millis(config.notification_delay_ms),
        ) {
            on_cleanup(move || timeout.clear());
        }
    }

    let visible =
        create_memo(move |_| state.with(|desktop| desktop.notification == NotificationState::Visible));
    let banner = &catalog().notification;

    view! {
        <Show when=move || visible.get() fallback=|| ()>
            <div
                class="arrival-notification"
                role="status"
                on:pointerdown=|ev: web_sys::PointerEvent| ev.stop_propagation()
                on:click=move |_| runtime.dispatch_action(DesktopAction::OpenNotification)
            >
                <button
                    class="arrival-notification-close"
                    aria-label="Dismiss notification"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::DismissNotification);
                    }
                />
                <strong>{banner.title.clone()}</strong>
                <p>{banner.body.clone()}</p>
            </div>
        </Show>
    }
}
