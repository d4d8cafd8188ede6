use desktop_runtime::{catalog, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let owner = catalog().owner_name.clone();

    view! {
        <Title text=owner.clone() />
        <Meta name="description" content=format!("{owner} - portfolio desktop") />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}
