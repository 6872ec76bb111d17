//! Root application component and page-level context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Stylesheet, Title, provide_meta_context};

use crate::components::loading_screen::LoadingScreen;
use crate::components::navbar::Navbar;
use crate::components::project_modal::{ModalController, ProjectModal};
use crate::components::sections::{About, Contact, Footer, Hero, Portfolio, Services, Skills};
use crate::components::theme_toggle::ThemeContext;
use crate::config::RelayConfig;
use crate::content::site::{SITE_NAME, SITE_TAGLINE, welcome_banner};

/// Root application component.
///
/// Provides the theme context, owns the project modal controller, and
/// schedules the post-load instrumentation.
#[component]
pub fn App() -> impl IntoView {
    log::info!("{SITE_NAME} portfolio: initializing");
    provide_meta_context();

    ThemeContext::provide();
    let modal = ModalController::new();

    #[cfg(feature = "csr")]
    crate::util::page::when_loaded(|| {
        crate::util::perf::report_page_load();
        leptos::task::spawn_local(crate::util::service_worker::register(crate::config::SERVICE_WORKER_PATH));
    });

    let page = view! {
        <Stylesheet id="folio" href="/styles.css" />
        <Title text=format!("{SITE_NAME} | {SITE_TAGLINE}") />
        <Meta name="description" content=SITE_TAGLINE />

        <LoadingScreen />
        <Navbar />
        <main>
            <Hero />
            <About />
            <Services />
            <Portfolio modal=modal />
            <Skills />
            <Contact />
        </main>
        <Footer />
        <ProjectModal modal=modal />
    };

    log::info!("{SITE_NAME} portfolio: initialized");
    log::info!("{}", welcome_banner(&RelayConfig::from_build_env().contact_email));
    page
}
