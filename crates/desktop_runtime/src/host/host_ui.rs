#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::model::Viewport;

pub(super) fn focus_element_by_id(element_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(element) = document.get_element_by_id(element_id) else {
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        // The input mounts in the same tick as the state change; focus after it renders.
        let callback = Closure::once_into_js(move || {
            let _ = element.focus();
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = element_id;
}

pub(super) fn read_viewport() -> Option<Viewport> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()? as i32;
        let height = window.inner_height().ok()?.as_f64()? as i32;
        return Some(Viewport::new(width, height));
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
