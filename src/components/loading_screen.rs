//! Full-page loading overlay shown until the window finishes loading.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::config::LOADING_EXIT_MS;
use crate::content::site::SITE_NAME;
use crate::state::loading::{LoadingPhase, LoadingState};
#[cfg(feature = "csr")]
use crate::util::animate::{AnimatedProperty, animate};
use crate::util::scroll_lock::set_page_scroll_locked;

/// Hide the overlay once; later calls are ignored. Restores page scroll,
/// fades the element out, then drops it from the tree.
#[cfg(feature = "csr")]
fn hide(state: RwSignal<LoadingState>, screen: NodeRef<leptos::html::Div>) {
    if !state.try_update(LoadingState::hide).unwrap_or(false) {
        return;
    }
    set_page_scroll_locked(false);

    let Some(el) = screen.get_untracked() else {
        state.update(LoadingState::remove);
        return;
    };
    let done = animate(&el, &[AnimatedProperty::Opacity(0.0)], f64::from(LOADING_EXIT_MS));
    leptos::task::spawn_local(async move {
        let _ = done.await;
        state.update(LoadingState::remove);
    });
}

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let state = RwSignal::new(LoadingState::default());
    let screen = NodeRef::<leptos::html::Div>::new();
    set_page_scroll_locked(true);

    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use gloo_timers::callback::Interval;

        use crate::config::{LOADING_CEILING_MS, LOADING_LOAD_GRACE_MS, LOADING_MAX_STEP, LOADING_TICK_MS};
        use crate::util::page::when_loaded;
        use crate::util::timing::run_after;

        let ticker = Rc::new(RefCell::new(None::<Interval>));
        let ticker_for_tick = Rc::clone(&ticker);
        let tick = Interval::new(LOADING_TICK_MS, move || {
            let step = js_sys::Math::random() * LOADING_MAX_STEP;
            if state.try_update(|s| s.advance(step)).unwrap_or(false) {
                return;
            }
            // Stop on the next turn; the interval cannot drop itself mid-call.
            let ticker = Rc::clone(&ticker_for_tick);
            run_after(0, move || drop(ticker.borrow_mut().take()));
        });
        *ticker.borrow_mut() = Some(tick);

        when_loaded(move || run_after(LOADING_LOAD_GRACE_MS, move || hide(state, screen)));
        run_after(LOADING_CEILING_MS, move || hide(state, screen));
    }

    view! {
        <Show when=move || state.with(|s| s.phase() != LoadingPhase::Removed)>
            <div
                id="loading-screen"
                class="loading-screen"
                class:hidden=move || state.with(|s| s.phase() == LoadingPhase::Hidden)
                node_ref=screen
            >
                <div class="loader">
                    <div class="loader-logo">{SITE_NAME}</div>
                    <div class="loader-bar">
                        <div class="loader-progress" style:width=move || state.with(LoadingState::bar_width)></div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
