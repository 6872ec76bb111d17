//! Frame-driven property animation with cubic ease-out.
//!
//! Only two properties are animatable: `opacity` and a vertical
//! `translateY` offset. The browser driver returns a oneshot receiver that
//! resolves when the final frame has been applied.

#[cfg(test)]
#[path = "animate_test.rs"]
mod animate_test;

/// Target value for one animated property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimatedProperty {
    Opacity(f64),
    TranslateY(f64),
}

impl AnimatedProperty {
    #[must_use]
    pub fn target(self) -> f64 {
        match self {
            Self::Opacity(v) | Self::TranslateY(v) => v,
        }
    }

    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Opacity(_) => "opacity",
            Self::TranslateY(_) => "transform",
        }
    }

    /// Inline style value for `current`.
    #[must_use]
    pub fn css_value(self, current: f64) -> String {
        match self {
            Self::Opacity(_) => format!("{current}"),
            Self::TranslateY(_) => format!("translateY({current}px)"),
        }
    }
}

/// `1 - (1 - p)^3`.
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Fraction of `duration_ms` elapsed, clamped to `[0, 1]`.
#[must_use]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

#[must_use]
pub fn interpolate(start: f64, end: f64, eased: f64) -> f64 {
    start + (end - start) * eased
}

/// Leading float of a computed style value, `0` when unparseable.
///
/// Computed transforms come back as `matrix(...)`, which deliberately reads
/// as `0` so translate animations always start from the resting position.
#[must_use]
pub fn parse_css_number(raw: &str) -> f64 {
    let raw = raw.trim();
    let end = raw
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map_or(raw.len(), |(i, _)| i);
    raw[..end].parse().unwrap_or(0.0)
}

/// Animate `targets` on `element` over `duration_ms`.
#[cfg(feature = "csr")]
pub fn animate(
    element: &web_sys::HtmlElement,
    targets: &[AnimatedProperty],
    duration_ms: f64,
) -> futures::channel::oneshot::Receiver<()> {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::{JsCast, closure::Closure};

    let (tx, rx) = futures::channel::oneshot::channel();
    let Some(window) = web_sys::window() else {
        let _ = tx.send(());
        return rx;
    };

    let starts = targets
        .iter()
        .map(|&target| {
            let computed = window
                .get_computed_style(element)
                .ok()
                .flatten()
                .and_then(|style| style.get_property_value(target.css_name()).ok())
                .unwrap_or_default();
            (target, parse_css_number(&computed))
        })
        .collect::<Vec<_>>();
    let start_ms = window.performance().map_or(0.0, |p| p.now());

    let element = element.clone();
    let done = RefCell::new(Some(tx));
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        let p = progress(ts - start_ms, duration_ms);
        let eased = ease_out_cubic(p);
        let style = element.style();
        for &(target, start) in &starts {
            let current = interpolate(start, target.target(), eased);
            let _ = style.set_property(target.css_name(), &target.css_value(current));
        }
        if p < 1.0 {
            if let Some(next) = holder_for_cb.borrow().as_ref() {
                let _ = window_for_cb.request_animation_frame(next.as_ref().unchecked_ref());
            }
            return;
        }
        if let Some(tx) = done.borrow_mut().take() {
            let _ = tx.send(());
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    }
    rx
}
