//! Image that defers its real source until scrolled near.

#[cfg(test)]
#[path = "lazy_image_test.rs"]
mod lazy_image_test;

use leptos::prelude::*;

use crate::util::perf::lazy_source;

/// 1x1 transparent GIF shown until the real source loads.
pub const PLACEHOLDER_PIXEL: &str = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

/// Whether the real source must be shown right away after trying to attach
/// an observer. With none attached nothing would ever swap it in.
#[must_use]
pub fn loads_immediately(observer_attached: bool) -> bool {
    !observer_attached
}

/// `src` for the current load state.
#[must_use]
pub fn displayed_source(loaded: bool, data_src: &'static str) -> &'static str {
    if loaded { lazy_source(Some(data_src), PLACEHOLDER_PIXEL) } else { PLACEHOLDER_PIXEL }
}

/// `<img loading="lazy" data-src=..>`. On first intersection the `data-src`
/// value becomes `src` and the `lazy` class is dropped. Without
/// `IntersectionObserver` the real source is set at mount and the browser's
/// native `loading="lazy"` defers the fetch.
#[component]
pub fn LazyImage(data_src: &'static str, alt: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    let node = NodeRef::<leptos::html::Img>::new();
    let (loaded, set_loaded) = signal(false);

    #[cfg(feature = "csr")]
    {
        use crate::util::observe::{ObserveOptions, observe_once};

        let mut armed = false;
        Effect::new(move || {
            let Some(img) = node.get() else {
                return;
            };
            if armed {
                return;
            }
            armed = true;
            let attached = observe_once(&img, ObserveOptions::default(), move || set_loaded.set(true));
            if loads_immediately(attached) {
                set_loaded.set(true);
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = set_loaded;
    }

    view! {
        <img
            class=class
            class:lazy=move || !loaded.get()
            node_ref=node
            loading="lazy"
            data-src=data_src
            src=move || displayed_source(loaded.get(), data_src)
            alt=alt
        />
    }
}
