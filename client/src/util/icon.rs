//! Icon registry: resolve an icon by name to its SVG body.
//!
//! Glyphs are Feather icons (24x24 viewbox, stroke-based). Rendering lives in
//! `components::icon`; this module only knows names and markup.

#[cfg(test)]
#[path = "icon_test.rs"]
mod tests;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Target,
    Zap,
    CheckSquare,
    Check,
    Menu,
    X,
    Compass,
    Facebook,
    Twitter,
    Linkedin,
    Instagram,
}

impl Icon {
    pub const ALL: [Icon; 11] = [
        Icon::Target,
        Icon::Zap,
        Icon::CheckSquare,
        Icon::Check,
        Icon::Menu,
        Icon::X,
        Icon::Compass,
        Icon::Facebook,
        Icon::Twitter,
        Icon::Linkedin,
        Icon::Instagram,
    ];

    /// Kebab-case name, also used as the `icon--{name}` CSS modifier.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Target => "target",
            Icon::Zap => "zap",
            Icon::CheckSquare => "check-square",
            Icon::Check => "check",
            Icon::Menu => "menu",
            Icon::X => "x",
            Icon::Compass => "compass",
            Icon::Facebook => "facebook",
            Icon::Twitter => "twitter",
            Icon::Linkedin => "linkedin",
            Icon::Instagram => "instagram",
        }
    }

    pub fn from_name(name: &str) -> Option<Icon> {
        Icon::ALL.into_iter().find(|icon| icon.name() == name)
    }

    /// Inner SVG markup (no surrounding `<svg>` element).
    pub fn svg_body(self) -> &'static str {
        match self {
            Icon::Target => {
                r#"<circle cx="12" cy="12" r="10"></circle><circle cx="12" cy="12" r="6"></circle><circle cx="12" cy="12" r="2"></circle>"#
            }
            Icon::Zap => r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"></polygon>"#,
            Icon::CheckSquare => {
                r#"<polyline points="9 11 12 14 22 4"></polyline><path d="M21 12v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11"></path>"#
            }
            Icon::Check => r#"<polyline points="20 6 9 17 4 12"></polyline>"#,
            Icon::Menu => {
                r#"<line x1="3" y1="12" x2="21" y2="12"></line><line x1="3" y1="6" x2="21" y2="6"></line><line x1="3" y1="18" x2="21" y2="18"></line>"#
            }
            Icon::X => {
                r#"<line x1="18" y1="6" x2="6" y2="18"></line><line x1="6" y1="6" x2="18" y2="18"></line>"#
            }
            Icon::Compass => {
                r#"<circle cx="12" cy="12" r="10"></circle><polygon points="16.24 7.76 14.12 14.12 7.76 16.24 9.88 9.88 16.24 7.76"></polygon>"#
            }
            Icon::Facebook => {
                r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"></path>"#
            }
            Icon::Twitter => {
                r#"<path d="M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"></path>"#
            }
            Icon::Linkedin => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path><rect x="2" y="9" width="4" height="12"></rect><circle cx="4" cy="4" r="2"></circle>"#
            }
            Icon::Instagram => {
                r#"<rect x="2" y="2" width="20" height="20" rx="5" ry="5"></rect><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path><line x1="17.5" y1="6.5" x2="17.51" y2="6.5"></line>"#
            }
        }
    }
}
