//! Passive performance instrumentation.
//!
//! Logs navigation load time and, where `PerformanceObserver` exists, the
//! largest-contentful-paint and first-input-delay entries. Nothing here
//! changes page behavior.

#[cfg(test)]
#[path = "perf_test.rs"]
mod perf_test;

/// Duration of the load event from navigation timing.
#[must_use]
pub fn load_duration_ms(load_event_start: f64, load_event_end: f64) -> f64 {
    (load_event_end - load_event_start).max(0.0)
}

/// First input delay for one `first-input` entry.
#[must_use]
pub fn input_delay_ms(start_time: f64, processing_start: f64) -> f64 {
    processing_start - start_time
}

/// Source to swap into a lazy image: `data-src` if present, else current.
#[must_use]
pub fn lazy_source<'a>(data_src: Option<&'a str>, current: &'a str) -> &'a str {
    data_src.filter(|s| !s.is_empty()).unwrap_or(current)
}

#[cfg(feature = "csr")]
fn number_field(target: &wasm_bindgen::JsValue, name: &str) -> Option<f64> {
    js_sys::Reflect::get(target, &name.into()).ok().and_then(|v| v.as_f64())
}

/// Log the load duration and start Web Vitals tracking. Call on window load.
#[cfg(feature = "csr")]
pub fn report_page_load() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(perf) = window.performance() {
        let entry = perf.get_entries_by_type("navigation").get(0);
        if let (Some(start), Some(end)) =
            (number_field(&entry, "loadEventStart"), number_field(&entry, "loadEventEnd"))
        {
            log::info!("Page loaded in {}ms", load_duration_ms(start, end));
        }
    }
    if js_sys::Reflect::has(&window, &"PerformanceObserver".into()).unwrap_or(false) {
        track_web_vitals();
    }
}

#[cfg(feature = "csr")]
fn observe_entries<F>(entry_type: &str, mut on_entries: F)
where
    F: FnMut(js_sys::Array) + 'static,
{
    use wasm_bindgen::{JsCast, closure::Closure};

    let callback = Closure::wrap(Box::new(
        move |list: web_sys::PerformanceObserverEntryList, _observer: web_sys::PerformanceObserver| {
            on_entries(list.get_entries());
        },
    ) as Box<dyn FnMut(web_sys::PerformanceObserverEntryList, web_sys::PerformanceObserver)>);

    let Ok(observer) = web_sys::PerformanceObserver::new(callback.as_ref().unchecked_ref()) else {
        log::warn!("PerformanceObserver unavailable for {entry_type}");
        return;
    };
    let options = js_sys::Object::new();
    let types = js_sys::Array::of1(&entry_type.into());
    if js_sys::Reflect::set(&options, &"entryTypes".into(), &types).is_err() {
        return;
    }
    observer.observe_with_options(options.unchecked_ref());
    callback.forget();
}

#[cfg(feature = "csr")]
fn track_web_vitals() {
    observe_entries("largest-contentful-paint", |entries| {
        let last = entries.get(entries.length().saturating_sub(1));
        if let Some(start) = number_field(&last, "startTime") {
            log::info!("LCP: {start}");
        }
    });
    observe_entries("first-input", |entries| {
        for entry in entries.iter() {
            if let (Some(start), Some(processing)) =
                (number_field(&entry, "startTime"), number_field(&entry, "processingStart"))
            {
                log::info!("FID: {}", input_delay_ms(start, processing));
            }
        }
    });
}
