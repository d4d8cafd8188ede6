//! Drains reducer-emitted [`RuntimeEffect`](crate::reducer::RuntimeEffect)s into the host.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the queue drain and the provider-teardown release of pointer listeners.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        let batch = runtime.effects.get();
        if batch.is_empty() {
            return;
        }

        // Take the batch first: running an effect may dispatch and enqueue another.
        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in batch {
            host.run_runtime_effect(runtime, effect);
        }
    });

    on_cleanup(move || runtime.host.get_value().release_pointer_listeners());
}
