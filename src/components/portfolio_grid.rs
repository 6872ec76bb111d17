//! Filterable portfolio grid.
//!
//! Filter buttons drive a `PortfolioFilter`; each item's deferred transition
//! step is scheduled on a per-item timer slot, and scheduling into a slot
//! drops (and so cancels) whatever was pending there.

use leptos::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::project_modal::{ModalController, open_project_modal};
use crate::components::reveal::reveal_on_scroll;
use crate::content::site::{FILTER_BUTTONS, PORTFOLIO_CARDS, PortfolioCard};
use crate::state::portfolio::{ItemPhase, PendingStep, PortfolioFilter};
use crate::state::reveal::RevealStyle;

/// Pending transition timer per grid item.
#[derive(Clone, Default)]
struct TransitionTimers {
    #[cfg(feature = "csr")]
    slots: std::rc::Rc<std::cell::RefCell<Vec<Option<gloo_timers::callback::Timeout>>>>,
}

impl TransitionTimers {
    fn schedule(&self, filter: RwSignal<PortfolioFilter>, steps: Vec<PendingStep>) {
        #[cfg(feature = "csr")]
        {
            let mut slots = self.slots.borrow_mut();
            for step in steps {
                if slots.len() <= step.index {
                    slots.resize_with(step.index + 1, || None);
                }
                let timeout = gloo_timers::callback::Timeout::new(step.delay_ms, move || {
                    filter.update(|f| {
                        f.complete(step);
                    });
                });
                slots[step.index] = Some(timeout);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (filter, steps);
        }
    }
}

fn select_filter(filter: RwSignal<PortfolioFilter>, timers: &TransitionTimers, selected: &str) {
    let Some((steps, shown)) = filter.try_update(|f| {
        let steps = f.select(selected);
        (steps, f.selected_indices().len())
    }) else {
        return;
    };
    log::debug!("portfolio filter {selected}: {shown} items shown");
    timers.schedule(filter, steps);
}

#[component]
pub fn PortfolioGrid(modal: ModalController) -> impl IntoView {
    let filter = RwSignal::new(PortfolioFilter::new(PORTFOLIO_CARDS.iter().map(|card| card.filter_category)));
    let timers = TransitionTimers::default();

    let buttons = FILTER_BUTTONS
        .iter()
        .map(|button| {
            let timers = timers.clone();
            let value = button.filter;
            view! {
                <button
                    class="filter-btn"
                    class:active=move || filter.with(|f| f.is_active_filter(value))
                    data-filter=value
                    type="button"
                    on:click=move |_| select_filter(filter, &timers, value)
                >
                    {button.label}
                </button>
            }
        })
        .collect_view();

    let items = PORTFOLIO_CARDS
        .iter()
        .enumerate()
        .map(|(index, card)| view! { <PortfolioItem card=*card index=index filter=filter modal=modal /> })
        .collect_view();

    view! {
        <div class="portfolio-filters">{buttons}</div>
        <div class="portfolio-grid">{items}</div>
    }
}

#[component]
fn PortfolioItem(
    card: PortfolioCard,
    index: usize,
    filter: RwSignal<PortfolioFilter>,
    modal: ModalController,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let revealed = reveal_on_scroll(node);
    let phase = move || filter.with(|f| f.phase(index)).unwrap_or(ItemPhase::Visible).style();
    let reveal = move || RevealStyle::for_state(revealed.get());

    let project_id = card.project_id;
    let open = move |_| {
        open_project_modal(modal, project_id);
    };

    view! {
        <div
            class="portfolio-item"
            data-category=card.filter_category
            node_ref=node
            style:display=move || if phase().displayed { "block" } else { "none" }
            style:opacity=move || (phase().opacity * reveal().opacity).to_string()
            style:transform=move || format!("translateY({}px)", phase().offset_px + reveal().offset_px)
            style:transition=move || reveal().transition
        >
            <div class="portfolio-image">
                {match card.thumbnail {
                    Some(src) => view! { <LazyImage data_src=src alt=card.title /> }.into_any(),
                    None => view! { <div class="portfolio-placeholder">{card.title}</div> }.into_any(),
                }}
                <div class="portfolio-overlay">
                    <button class="btn btn-primary view-project" type="button" on:click=open>
                        "View Project"
                    </button>
                </div>
            </div>
            <div class="portfolio-info">
                <h3>{card.title}</h3>
                <p>{card.summary}</p>
            </div>
        </div>
    }
}
