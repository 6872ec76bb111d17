//! Fixed navigation bar.
//!
//! ARCHITECTURE
//! ============
//! Window listeners feed the pure `state::nav` rules:
//! - `scroll` (throttled): compact style and active-section highlight.
//! - `click`: outside-click menu close and smooth in-page anchor scroll.
//! - `resize` (debounced): close the mobile menu once the desktop layout
//!   is back.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::site::{NAV_LINKS, SITE_NAME};
use crate::state::nav::{MenuState, link_is_active};
use crate::util::scroll_lock::set_page_scroll_locked;

fn close_menu(menu: RwSignal<MenuState>) {
    if menu.try_update(MenuState::close).unwrap_or(false) {
        set_page_scroll_locked(false);
    }
}

/// `(id, offsetTop)` of every `section[id]`, in document order.
#[cfg(feature = "csr")]
fn section_offsets() -> Vec<(String, f64)> {
    use wasm_bindgen::JsCast;

    let Some(list) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector_all("section[id]").ok())
    else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| (el.id(), f64::from(el.offset_top())))
        .collect()
}

/// Smooth-scroll to the section an in-page anchor names. Returns `false`
/// when the anchor has no matching element.
#[cfg(feature = "csr")]
fn scroll_to_anchor(href: &str) -> bool {
    use wasm_bindgen::JsCast;

    use crate::config::NAV_HEADER_OFFSET_PX;
    use crate::state::nav::anchor_target;
    use crate::util::viewport::scroll_to;

    let Some(id) = anchor_target(href) else {
        return false;
    };
    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return false;
    };
    scroll_to(&target, NAV_HEADER_OFFSET_PX);
    true
}

#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let active = RwSignal::new(None::<String>);
    let menu = RwSignal::new(MenuState::default());
    let menu_ref = NodeRef::<leptos::html::Ul>::new();
    let hamburger_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        use crate::config::{DEBOUNCE_DELAY_MS, THROTTLE_DELAY_MS};
        use crate::state::nav::{active_section, is_scrolled};
        use crate::util::timing::{debounce, throttle};
        use crate::util::viewport::{current_breakpoint, scroll_y};

        let on_scroll = throttle(
            move || {
                let y = scroll_y();
                let compact = is_scrolled(y);
                if scrolled.get_untracked() != compact {
                    scrolled.set(compact);
                }
                let sections = section_offsets();
                let tops = sections.iter().map(|(id, top)| (id.as_str(), *top)).collect::<Vec<_>>();
                let current = active_section(&tops, y).map(str::to_owned);
                if active.get_untracked() != current {
                    active.set(current);
                }
            },
            THROTTLE_DELAY_MS,
        );
        let _ = window_event_listener(leptos::ev::scroll, move |_| on_scroll());

        let _ = window_event_listener(leptos::ev::click, move |ev| {
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());

            if menu.get_untracked().is_open() {
                let inside = |el: Option<&web_sys::HtmlElement>| el.is_some_and(|el| el.contains(target.as_ref()));
                let in_menu = inside(menu_ref.get_untracked().as_deref());
                let in_hamburger = inside(hamburger_ref.get_untracked().as_deref());
                if menu.try_update(|m| m.handle_document_click(in_menu, in_hamburger)).unwrap_or(false) {
                    set_page_scroll_locked(false);
                }
            }

            let anchor = target
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest("a[href^='#']").ok().flatten())
                .and_then(|a| a.get_attribute("href"));
            if let Some(href) = anchor {
                if scroll_to_anchor(&href) {
                    ev.prevent_default();
                }
            }
        });

        let on_resize = debounce(
            move || {
                let breakpoint = current_breakpoint();
                log::debug!("resize: {} layout", breakpoint.as_str());
                if menu.try_update(|m| m.handle_breakpoint(breakpoint)).unwrap_or(false) {
                    set_page_scroll_locked(false);
                }
            },
            DEBOUNCE_DELAY_MS,
        );
        let _ = window_event_listener(leptos::ev::resize, move |_| on_resize());
    }

    let on_hamburger = move |_| {
        let locked = menu.try_update(MenuState::toggle).unwrap_or(false);
        set_page_scroll_locked(locked);
    };

    let links = NAV_LINKS
        .iter()
        .map(|link| {
            let href = link.href;
            view! {
                <li class="nav-item">
                    <a
                        href=href
                        class="nav-link"
                        class:active=move || active.with(|id| link_is_active(href, id.as_deref()))
                        on:click=move |_| close_menu(menu)
                    >
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav id="navbar" class="navbar" class:scrolled=move || scrolled.get()>
            <div class="nav-container">
                <a href="#home" class="nav-logo">
                    {SITE_NAME}
                </a>
                <ul id="nav-menu" class="nav-menu" class:active=move || menu.get().is_open() node_ref=menu_ref>
                    {links}
                </ul>
                <div class="nav-actions">
                    <ThemeToggle />
                    <div
                        id="hamburger"
                        class="hamburger"
                        class:active=move || menu.get().is_open()
                        node_ref=hamburger_ref
                        on:click=on_hamburger
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </div>
                </div>
            </div>
        </nav>
    }
}
