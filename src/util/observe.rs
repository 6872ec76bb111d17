//! One-shot `IntersectionObserver` bridge.
//!
//! ARCHITECTURE
//! ============
//! Each watched element gets its own observer wrapped around a `OneShot`.
//! After the first intersecting notification the element is unobserved and
//! the observer disconnected, so the callback can never fire twice.

/// Observer root margin and threshold; `None` keeps the browser default.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ObserveOptions {
    pub root_margin: Option<&'static str>,
    pub threshold: Option<f64>,
}

/// Whether the browser exposes `IntersectionObserver`.
pub fn intersection_supported() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|w| js_sys::Reflect::has(&w, &"IntersectionObserver".into()).unwrap_or(false))
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Run `on_enter` the first time `element` intersects the viewport.
///
/// Returns `false` when observation could not be set up; the caller decides
/// whether to reveal immediately or leave the element alone.
#[cfg(feature = "csr")]
pub fn observe_once<F>(element: &web_sys::Element, options: ObserveOptions, on_enter: F) -> bool
where
    F: FnOnce() + 'static,
{
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};

    use crate::state::reveal::OneShot;

    if !intersection_supported() {
        return false;
    }

    let mut trigger = OneShot::default();
    let mut on_enter = Some(on_enter);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
        for entry in entries.iter() {
            if trigger.has_fired() {
                break;
            }
            let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                continue;
            };
            if trigger.observe(entry.is_intersecting()) {
                observer.unobserve(&entry.target());
                observer.disconnect();
                if let Some(f) = on_enter.take() {
                    f();
                }
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let init = web_sys::IntersectionObserverInit::new();
    if let Some(margin) = options.root_margin {
        init.set_root_margin(margin);
    }
    if let Some(threshold) = options.threshold {
        init.set_threshold(&JsValue::from_f64(threshold));
    }

    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) else {
        log::warn!("IntersectionObserver construction failed");
        return false;
    };
    observer.observe(element);
    // Leaked: the observer disconnects itself after the first hit.
    callback.forget();
    true
}
