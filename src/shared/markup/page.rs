// src/shared/markup/page.rs

/// The seven navigable views of the portfolio. Every view is addressed
/// by exactly one path and rendered inside the shared layout shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
    Skills,
    Timeline,
    Testimonials,
    Settings,
    Contact,
}

impl Page {
    /// Sidebar order, top to bottom.
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Projects,
        Page::Skills,
        Page::Timeline,
        Page::Testimonials,
        Page::Settings,
        Page::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Projects => "/projects",
            Page::Skills => "/skills",
            Page::Timeline => "/timeline",
            Page::Testimonials => "/testimonials",
            Page::Settings => "/settings",
            Page::Contact => "/contact",
        }
    }

    /// Heading shown at the top of the view.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "🎓 Student Portfolio",
            Page::Projects => "💻 My Projects",
            Page::Skills => "⚡ Skills and Achievements",
            Page::Timeline => "⏳ Academic & Project Timeline",
            Page::Testimonials => "🗣️ Testimonials",
            Page::Settings => "🎨 Customize Your Profile",
            Page::Contact => "📬 Contact Me",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Projects => "Projects",
            Page::Skills => "Skills",
            Page::Timeline => "Timeline",
            Page::Testimonials => "Testimonials",
            Page::Settings => "Settings",
            Page::Contact => "Contact",
        }
    }
}
