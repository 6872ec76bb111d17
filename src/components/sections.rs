//! Page sections: hero, about, services, portfolio, skills, contact, footer.
//!
//! Each section carries the `id` the navbar scrolls to and highlights.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::portfolio_grid::PortfolioGrid;
use crate::components::project_modal::ModalController;
use crate::components::reveal::Reveal;
use crate::content::site::{ABOUT_STATS, CONTACT_CARDS, SERVICES, SITE_NAME, SITE_TAGLINE, SKILLS};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container hero-content">
                <h1 class="hero-title">{SITE_NAME}</h1>
                <p class="hero-subtitle">{SITE_TAGLINE}</p>
                <div class="hero-actions">
                    <a href="#portfolio" class="btn btn-primary">
                        "View Work"
                    </a>
                    <a href="#contact" class="btn btn-secondary">
                        "Start a Project"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <h2 class="section-title">"About"</h2>
                <p class="about-text">
                    "We design and build fast, accessible websites and web applications for growing businesses."
                </p>
                <div class="about-stats">
                    {ABOUT_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <Reveal class="stat">
                                    <span class="stat-number">{stat.value}</span>
                                    <span class="stat-label">{stat.label}</span>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <h2 class="section-title">"Services"</h2>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <Reveal class="service-card">
                                    <div class="service-icon">{service.icon}</div>
                                    <h3>{service.title}</h3>
                                    <p>{service.summary}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Portfolio(modal: ModalController) -> impl IntoView {
    view! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <h2 class="section-title">"Portfolio"</h2>
                <PortfolioGrid modal=modal />
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="skills">
            <div class="container">
                <h2 class="section-title">"Skills"</h2>
                <div class="skills-grid">
                    {SKILLS
                        .iter()
                        .map(|category| {
                            view! {
                                <Reveal class="skill-category">
                                    <h3>{category.title}</h3>
                                    <div class="skill-tags">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| view! { <span class="skill-tag">{*skill}</span> })
                                            .collect_view()}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">"Contact"</h2>
                <div class="contact-content">
                    <div class="contact-info">
                        {CONTACT_CARDS
                            .iter()
                            .map(|card| {
                                view! {
                                    <Reveal class="contact-card">
                                        <div class="contact-icon">{card.icon}</div>
                                        <h3>{card.title}</h3>
                                        <p>{card.detail}</p>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>"© " {SITE_NAME} ". All rights reserved."</p>
            </div>
        </footer>
    }
}
