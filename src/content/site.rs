//! Page copy for the single-page site.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

pub const SITE_NAME: &str = "Ohlluu";
pub const SITE_TAGLINE: &str = "Websites and web apps built to perform.";

/// Console greeting for developers who open the devtools.
#[must_use]
pub fn welcome_banner(contact_email: &str) -> String {
    format!(
        "Welcome to {SITE_NAME}'s Portfolio!\n\n\
         Built with:\n\
         - Rust + Leptos compiled to WebAssembly\n\
         - Modern CSS (Grid, Flexbox, Custom Properties)\n\
         - Performance-optimized animations\n\
         - Mobile-first responsive design\n\
         - Accessibility best practices\n\n\
         Looking for a developer? Let's connect!\n\
         {contact_email}"
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Portfolio", href: "#portfolio" },
    NavLink { label: "Skills", href: "#skills" },
    NavLink { label: "Contact", href: "#contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "50+", label: "Projects Delivered" },
    Stat { value: "98%", label: "Client Satisfaction" },
    Stat { value: "5+", label: "Years Experience" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        icon: "💻",
        title: "Web Development",
        summary: "Fast, accessible websites built mobile-first and tuned for search.",
    },
    ServiceCard {
        icon: "🛒",
        title: "E-Commerce",
        summary: "Storefronts with secure checkout, inventory, and conversion tracking.",
    },
    ServiceCard {
        icon: "📊",
        title: "Web Applications",
        summary: "Dashboards and tools with real-time data and clean interfaces.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterButton {
    pub filter: &'static str,
    pub label: &'static str,
}

pub const FILTER_BUTTONS: &[FilterButton] = &[
    FilterButton { filter: "all", label: "All" },
    FilterButton { filter: "web", label: "Web Apps" },
    FilterButton { filter: "corporate", label: "Corporate" },
    FilterButton { filter: "ecommerce", label: "E-Commerce" },
];

/// Grid card; `filter_category` drives the portfolio filter and
/// `project_id` selects the modal record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioCard {
    pub project_id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub filter_category: &'static str,
    pub thumbnail: Option<&'static str>,
}

pub const PORTFOLIO_CARDS: &[PortfolioCard] = &[
    PortfolioCard {
        project_id: "mangopets",
        title: "MangoPets",
        summary: "Pet lifestyle app with health, community, and events.",
        filter_category: "web",
        thumbnail: Some("assets/mangopets-thumb.jpg"),
    },
    PortfolioCard {
        project_id: "phoenixstar",
        title: "Phoenix Star Inc",
        summary: "Corporate presence with a full service showcase.",
        filter_category: "corporate",
        thumbnail: Some("assets/phoenixstar-thumb.jpg"),
    },
    PortfolioCard {
        project_id: "ecommerce",
        title: "E-Commerce Platform",
        summary: "Secure payments and real-time inventory.",
        filter_category: "ecommerce",
        thumbnail: None,
    },
    PortfolioCard {
        project_id: "dashboard",
        title: "Analytics Dashboard",
        summary: "Real-time visualization and custom reporting.",
        filter_category: "web",
        thumbnail: None,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory { title: "Frontend", skills: &["HTML5", "CSS3", "JavaScript", "React", "Vue.js"] },
    SkillCategory { title: "Backend", skills: &["Node.js", "Python", "PostgreSQL", "MongoDB", "Redis"] },
    SkillCategory { title: "Delivery", skills: &["SEO", "Performance", "Docker", "AWS"] },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const CONTACT_CARDS: &[ContactCard] = &[
    ContactCard { icon: "📧", title: "Email", detail: "ohlluumarketing@gmail.com" },
    ContactCard { icon: "⏱️", title: "Response Time", detail: "Within 24 hours" },
    ContactCard { icon: "🌎", title: "Availability", detail: "Remote, worldwide" },
];

pub const BUDGET_OPTIONS: &[&str] = &["< $5k", "$5k - $15k", "$15k - $50k", "$50k+"];
pub const PROJECT_TYPE_OPTIONS: &[&str] = &["Website", "E-Commerce", "Web Application", "Other"];
