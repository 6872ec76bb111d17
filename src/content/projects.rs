//! Static project case studies shown in the project modal.
//!
//! Records are compiled in and never mutated. `render_project` turns a record
//! into the section-by-section fragment the modal body displays.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub image: Option<&'static str>,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub challenges: &'static str,
    pub results: &'static str,
    pub live_url: Option<&'static str>,
    pub category: &'static str,
}

/// Section headings of the project detail view, in display order.
pub const TECHNOLOGIES_HEADING: &str = "Technologies Used";
pub const FEATURES_HEADING: &str = "Key Features";
pub const CHALLENGES_HEADING: &str = "Challenges & Solutions";
pub const RESULTS_HEADING: &str = "Results & Impact";

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "mangopets",
        title: "MangoPets - Ultimate Pet Lifestyle App",
        image: Some("assets/mangopets-preview.jpg"),
        description: "A comprehensive pet lifestyle application that combines health management, social community features, and event discovery. Built with modern web technologies and optimized for mobile-first experience.",
        technologies: &["HTML5", "CSS3", "JavaScript", "Responsive Design", "SEO Optimization", "Performance Optimization"],
        features: &[
            "Health management dashboard for pets",
            "Social community for pet parents",
            "Event discovery and booking system",
            "Mobile-first responsive design",
            "Interactive app screenshots gallery",
            "Comprehensive SEO optimization",
        ],
        challenges: "Creating an engaging user experience while maintaining fast loading times and mobile optimization. Implemented advanced CSS animations and interactive elements without sacrificing performance.",
        results: "Successfully launched with excellent mobile performance scores and user engagement. Optimized for search engines with comprehensive structured data implementation.",
        live_url: Some("https://mymangopets.com"),
        category: "Web Application",
    },
    ProjectRecord {
        id: "phoenixstar",
        title: "Phoenix Star Inc - Corporate Website",
        image: Some("assets/phoenixstar-preview.jpg"),
        description: "Professional corporate website showcasing comprehensive business services with modern design, optimal user experience, and strong SEO foundation.",
        technologies: &["HTML5", "CSS3", "JavaScript", "SEO Optimization", "Responsive Design", "Performance Optimization"],
        features: &[
            "Modern professional design system",
            "Comprehensive service showcase",
            "Interactive contact forms",
            "Multi-page architecture",
            "Cross-browser compatibility",
            "Mobile-optimized experience",
        ],
        challenges: "Balancing professional aesthetics with modern web standards while ensuring fast loading times across all devices and browsers.",
        results: "Delivered a polished corporate presence with excellent performance metrics and professional user experience that effectively communicates the company's expertise.",
        live_url: Some("https://ohlluu.github.io/phoenixstar/"),
        category: "Corporate Website",
    },
    ProjectRecord {
        id: "ecommerce",
        title: "E-Commerce Platform Solution",
        image: None,
        description: "Custom e-commerce platforms with secure payment processing, comprehensive inventory management, and conversion-optimized user experience.",
        technologies: &["React", "Node.js", "PostgreSQL", "Stripe API", "Redis", "AWS"],
        features: &[
            "Secure payment processing with Stripe",
            "Real-time inventory management",
            "Advanced product filtering and search",
            "Shopping cart and wishlist functionality",
            "Order tracking and management",
            "Admin dashboard with analytics",
        ],
        challenges: "Building secure, scalable e-commerce solutions that handle high traffic while maintaining fast performance and ensuring PCI compliance.",
        results: "Delivered robust e-commerce platforms that increase conversion rates by 35% on average, with 99.9% uptime and secure transaction processing.",
        live_url: None,
        category: "E-Commerce Development",
    },
    ProjectRecord {
        id: "dashboard",
        title: "Analytics Dashboard Platform",
        image: None,
        description: "Interactive analytics dashboard with real-time data visualization, custom reporting capabilities, and performance metrics tracking.",
        technologies: &["Vue.js", "D3.js", "Python", "WebSocket", "MongoDB", "Docker"],
        features: &[
            "Real-time data visualization",
            "Interactive charts and graphs",
            "Custom report generation",
            "Multi-user collaboration",
            "Data export functionality",
            "Mobile-responsive design",
        ],
        challenges: "Creating performant real-time visualizations while handling large datasets and ensuring smooth user interactions across different screen sizes.",
        results: "Delivered powerful analytics platforms that help businesses make data-driven decisions, with 50% improvement in decision-making speed reported by clients.",
        live_url: None,
        category: "Web Application",
    },
];

#[must_use]
pub fn find_project(id: &str) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// External link rendered as a primary button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkAction {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRef {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Modal body for one project, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectFragment {
    pub project_id: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub live_link: Option<LinkAction>,
    pub image: Option<ImageRef>,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub challenges: &'static str,
    pub results: &'static str,
    pub closing_cta: Option<LinkAction>,
}

#[must_use]
pub fn render_project(record: &'static ProjectRecord) -> ProjectFragment {
    ProjectFragment {
        project_id: record.id,
        category: record.category,
        title: record.title,
        description: record.description,
        live_link: record.live_url.map(|href| LinkAction { label: "View Live Site", href }),
        image: record.image.map(|src| ImageRef { src, alt: record.title }),
        technologies: record.technologies,
        features: record.features,
        challenges: record.challenges,
        results: record.results,
        closing_cta: record.live_url.map(|href| LinkAction { label: "Visit Live Site", href }),
    }
}
