//! Per-component viewport tracking.

use leptos::prelude::*;

use crate::state::layout::LayoutMode;

/// Track the layout mode for the calling component.
///
/// Computes the mode from the current viewport width on mount, then
/// recomputes on every `resize` event until the owning scope is disposed.
/// Each caller owns its own signal and listener; concurrently mounted
/// components agree because they apply the same width rule. On the
/// server the signal stays at the wide default.
pub fn use_layout_mode() -> RwSignal<LayoutMode> {
    let mode = RwSignal::new(LayoutMode::default());

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        fn viewport_width() -> Option<f64> {
            web_sys::window()?.inner_width().ok()?.as_f64()
        }

        if let Some(width) = viewport_width() {
            mode.set(LayoutMode::for_width(width));
        }

        if let Some(window) = web_sys::window() {
            let listener = Closure::<dyn FnMut()>::new(move || {
                if let Some(width) = viewport_width() {
                    mode.set(LayoutMode::for_width(width));
                }
            });
            let _ = window
                .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
            on_cleanup(move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            });
        }
    }

    mode
}
