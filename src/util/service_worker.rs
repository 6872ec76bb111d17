//! Service worker registration for offline/PWA support.
//!
//! Registration outcome is logged only; the page behaves the same either way.

/// Register `script_url` if the browser supports service workers.
pub async fn register(script_url: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator = window.navigator();
        if !js_sys::Reflect::has(&navigator, &"serviceWorker".into()).unwrap_or(false) {
            return;
        }
        let promise = navigator.service_worker().register(script_url);
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(registration) => log::info!("SW registered: {registration:?}"),
            Err(err) => log::warn!("SW registration failed: {err:?}"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = script_url;
    }
}
