//! Page lifecycle hooks.

/// Run `f` once the window `load` event has fired.
///
/// The WASM bundle may start after `load` already happened; in that case
/// `f` runs on the next tick instead.
pub fn when_loaded<F>(f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::{JsCast, closure::Closure};

        let Some(window) = web_sys::window() else {
            return;
        };
        let complete = window
            .document()
            .and_then(|d| js_sys::Reflect::get(&d, &"readyState".into()).ok())
            .and_then(|state| state.as_string())
            .is_some_and(|state| state == "complete");
        if complete {
            crate::util::timing::run_after(0, f);
            return;
        }
        let mut pending = Some(f);
        let listener = Closure::wrap(Box::new(move || {
            if let Some(f) = pending.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        if window.add_event_listener_with_callback("load", listener.as_ref().unchecked_ref()).is_err() {
            log::warn!("could not listen for window load");
            return;
        }
        listener.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = f;
    }
}
