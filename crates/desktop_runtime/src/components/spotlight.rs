use super::*;
use crate::host::SPOTLIGHT_INPUT_ID;

#[component]
pub(super) fn Spotlight() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let open = create_memo(move |_| state.with(|desktop| desktop.spotlight.open));
    let query = create_memo(move |_| state.with(|desktop| desktop.spotlight.query.clone()));
    let results = create_memo(move |_| {
        query.with(|query| {
            catalog()
                .search(query)
                .into_iter()
                .map(|project| (project.id.clone(), project.title.clone(), project.description.clone()))
                .collect::<Vec<_>>()
        })
    });

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseSpotlight);
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class="spotlight-backdrop"
                on:pointerdown=|ev: web_sys::PointerEvent| ev.stop_propagation()
                on:click=move |_| runtime.dispatch_action(DesktopAction::CloseSpotlight)
            >
                <div class="spotlight-panel" on:click=|ev| ev.stop_propagation()>
                    <input
                        id=SPOTLIGHT_INPUT_ID
                        class="spotlight-input"
                        type="search"
                        placeholder="Search projects, tags..."
                        autocomplete="off"
                        prop:value=move || query.get()
                        on:input=move |ev| {
                            runtime
                                .dispatch_action(DesktopAction::SetSearchQuery {
                                    query: event_target_value(&ev),
                                })
                        }
                    />
                    <ul class="spotlight-results">
                        <For
                            each=move || results.get()
                            key=|(id, _, _)| id.clone()
                            children=move |(project_id, title, description)| {
                                view! {
                                    <li>
                                        <button
                                            class="spotlight-result"
                                            on:click=move |_| {
                                                runtime
                                                    .dispatch_action(DesktopAction::ChooseSearchResult {
                                                        project_id: project_id.clone(),
                                                    })
                                            }
                                        >
                                            <span class="spotlight-result-title">{title}</span>
                                            <span class="spotlight-result-description">
                                                {description}
                                            </span>
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </div>
        </Show>
    }
}
