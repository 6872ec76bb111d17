//! Project detail modal and the controller handle that opens it.
//!
//! DESIGN
//! ======
//! The modal surface has exactly one owner, `ModalController`. Grid cards
//! receive the handle as a prop instead of reaching for a page global, and
//! every state change that opens or closes the surface also moves the page
//! scroll lock.

#[cfg(test)]
#[path = "project_modal_test.rs"]
mod project_modal_test;

use leptos::prelude::*;

use crate::content::projects::{
    CHALLENGES_HEADING, FEATURES_HEADING, ProjectFragment, RESULTS_HEADING, TECHNOLOGIES_HEADING, find_project,
    render_project,
};
use crate::state::modal::ModalState;
use crate::util::scroll_lock::set_page_scroll_locked;

/// Copyable handle to the single project modal.
#[derive(Clone, Copy)]
pub struct ModalController {
    state: RwSignal<ModalState<ProjectFragment>>,
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalController {
    pub fn new() -> Self {
        Self { state: RwSignal::new(ModalState::Closed) }
    }

    pub fn is_open(self) -> bool {
        self.state.with(ModalState::is_open)
    }

    pub fn content(self) -> Option<ProjectFragment> {
        self.state.with(|m| m.content().cloned())
    }

    /// Show `content`, replacing whatever is open, and lock page scroll.
    pub fn open(self, content: ProjectFragment) {
        self.state.update(|m| m.open(content));
        set_page_scroll_locked(true);
    }

    /// Close and unlock. Returns whether the modal was open.
    pub fn close(self) -> bool {
        let closed = self.state.try_update(ModalState::close).unwrap_or(false);
        if closed {
            set_page_scroll_locked(false);
        }
        closed
    }

    pub fn handle_key(self, key: &str) -> bool {
        let closed = self.state.try_update(|m| m.handle_key(key)).unwrap_or(false);
        if closed {
            set_page_scroll_locked(false);
        }
        closed
    }

    pub fn handle_click(self, on_overlay: bool) -> bool {
        let closed = self.state.try_update(|m| m.handle_click(on_overlay)).unwrap_or(false);
        if closed {
            set_page_scroll_locked(false);
        }
        closed
    }
}

/// Open the modal on the project registered under `project_id`.
///
/// Unknown ids leave the modal untouched and return `false`.
pub fn open_project_modal(modal: ModalController, project_id: &str) -> bool {
    let Some(record) = find_project(project_id) else {
        log::debug!("no project registered for {project_id}");
        return false;
    };
    modal.open(render_project(record));
    true
}

pub fn close_project_modal(modal: ModalController) {
    modal.close();
}

/// The modal surface. Mount once; visibility follows the controller.
#[component]
pub fn ProjectModal(modal: ModalController) -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        let _ = window_event_listener(leptos::ev::keydown, move |ev| {
            modal.handle_key(&ev.key());
        });
    }

    let on_overlay = move |ev: leptos::ev::MouseEvent| {
        modal.handle_click(ev.target() == ev.current_target());
    };

    view! {
        <div id="project-modal" class="modal" class:active=move || modal.is_open()>
            <div class="modal-overlay" on:click=on_overlay>
                <div class="modal-content">
                    <button
                        class="modal-close"
                        type="button"
                        aria-label="Close"
                        on:click=move |_| close_project_modal(modal)
                    >
                        "×"
                    </button>
                    <div id="modal-body" class="modal-body">
                        {move || modal.content().map(|fragment| view! { <ProjectDetail fragment=fragment /> })}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectDetail(fragment: ProjectFragment) -> impl IntoView {
    let ProjectFragment {
        category,
        title,
        description,
        live_link,
        image,
        technologies,
        features,
        challenges,
        results,
        closing_cta,
        ..
    } = fragment;

    view! {
        <div class="modal-header">
            <span class="project-category">{category}</span>
            <h2 class="modal-title">{title}</h2>
            <p class="modal-description">{description}</p>
            {live_link.map(|link| {
                view! {
                    <a href=link.href class="btn btn-primary" target="_blank" rel="noopener noreferrer">
                        {link.label}
                    </a>
                }
            })}
        </div>
        {image.map(|img| {
            view! {
                <div class="modal-image">
                    <img src=img.src alt=img.alt />
                </div>
            }
        })}
        <div class="modal-section">
            <h3>{TECHNOLOGIES_HEADING}</h3>
            <div class="tech-tags">
                {technologies.iter().map(|tech| view! { <span class="tech-tag">{*tech}</span> }).collect_view()}
            </div>
        </div>
        <div class="modal-section">
            <h3>{FEATURES_HEADING}</h3>
            <ul class="feature-list">
                {features.iter().map(|feature| view! { <li>"✓ " {*feature}</li> }).collect_view()}
            </ul>
        </div>
        <div class="modal-section">
            <h3>{CHALLENGES_HEADING}</h3>
            <p>{challenges}</p>
        </div>
        <div class="modal-section">
            <h3>{RESULTS_HEADING}</h3>
            <p>{results}</p>
        </div>
        {closing_cta.map(|link| {
            view! {
                <div class="modal-cta">
                    <a href=link.href class="btn btn-primary" target="_blank" rel="noopener noreferrer">
                        {link.label}
                    </a>
                </div>
            }
        })}
    }
}
