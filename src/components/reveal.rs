//! Scroll-triggered reveal for content blocks.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::state::reveal::RevealStyle;

/// Watch `node` and flip the returned signal once it first scrolls into
/// view. Without `IntersectionObserver` the element is revealed at once.
pub fn reveal_on_scroll(node: NodeRef<leptos::html::Div>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);

    #[cfg(feature = "csr")]
    {
        use crate::util::observe::{ObserveOptions, observe_once};

        let mut armed = false;
        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };
            if armed {
                return;
            }
            armed = true;
            let options = ObserveOptions { root_margin: Some(REVEAL_ROOT_MARGIN), threshold: Some(REVEAL_THRESHOLD) };
            if !observe_once(&el, options, move || set_revealed.set(true)) {
                set_revealed.set(true);
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (node, set_revealed);
    }

    revealed
}

/// Block that fades and slides up the first time it enters the viewport.
#[component]
pub fn Reveal(#[prop(into)] class: String, children: Children) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let revealed = reveal_on_scroll(node);
    let style = move || RevealStyle::for_state(revealed.get());

    view! {
        <div
            class=class
            node_ref=node
            style:opacity=move || style().opacity.to_string()
            style:transform=move || style().transform()
            style:transition=move || style().transition
        >
            {children()}
        </div>
    }
}
