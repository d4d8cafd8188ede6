//! Provider component owning the desktop signals.
//!
//! Every state change flows through [`apply_action`]; components only read signals and
//! dispatch. Rendering lives in [`crate::components`].

use leptos::*;

use crate::{
    catalog::catalog,
    config::ShellConfig,
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Shared handle to the portfolio desktop: signals, config, and the action sink.
pub struct DesktopRuntimeContext {
    /// Browser-facing side-effect executor.
    pub host: StoredValue<DesktopHostContext>,
    /// Effective shell configuration (timers and feature flags).
    pub config: StoredValue<ShellConfig>,
    /// Windows, icons, selection, spotlight and banner.
    pub state: RwSignal<DesktopState>,
    /// Pointer session state; only populated while a button is held.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the host.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Routes actions into [`reduce_desktop`].
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Shorthand for `self.dispatch.call(action)`.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
///
/// Without an explicit `config` the catalog's `[shell]` table is used.
pub fn DesktopProvider(
    #[prop(optional)] config: Option<ShellConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_else(|| catalog().shell.clone());
    let host = DesktopHostContext::default();
    let viewport = host.viewport();
    if viewport.is_none() {
        logging::log!("desktop viewport unavailable; using fallback layout");
    }

    let state = create_rw_signal(DesktopState::boot(catalog(), config.features, viewport));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        apply_action(state, interaction, effects, action)
    });

    let runtime = DesktopRuntimeContext {
        host: store_value(host),
        config: store_value(config),
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Context installed by the nearest [`DesktopProvider`]; panics when there is none.
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

/// Runs one action against snapshots of both signals, writing back only what changed.
fn apply_action(
    state: RwSignal<DesktopState>,
    interaction: RwSignal<InteractionState>,
    effects: RwSignal<Vec<RuntimeEffect>>,
    action: DesktopAction,
) {
    let mut next_state = state.get_untracked();
    let mut next_interaction = interaction.get_untracked();

    let emitted = match reduce_desktop(&mut next_state, &mut next_interaction, action) {
        Ok(emitted) => emitted,
        Err(err) => {
            logging::warn!("desktop reducer error: {err}");
            return;
        }
    };

    if state.with_untracked(|current| *current != next_state) {
        state.set(next_state);
    }
    if interaction.with_untracked(|current| *current != next_interaction) {
        interaction.set(next_interaction);
    }
    if !emitted.is_empty() {
        effects.update(|queue| queue.extend(emitted));
    }
}
