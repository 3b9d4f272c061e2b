//! Static display data for both sites.
//!
//! SYSTEM CONTEXT
//! ==============
//! Records are `'static` and immutable; components only read them. Anchor
//! targets are typed through [`SectionId`] so every in-page link names a
//! section that the landing page actually renders.

pub mod streamline;
pub mod travel;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// Landing page sections addressable by fragment links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Features,
    Testimonials,
    Pricing,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] =
        [SectionId::Features, SectionId::Testimonials, SectionId::Pricing, SectionId::Contact];

    /// Value of the section element's `id` attribute.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Features => "features",
            SectionId::Testimonials => "testimonials",
            SectionId::Pricing => "pricing",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Where a link points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// In-page anchor on the landing page.
    Section(SectionId),
    /// Site-relative or absolute URL.
    Url(&'static str),
    /// Page not written yet; renders as `#`.
    Placeholder,
}

impl LinkTarget {
    pub fn href(self) -> String {
        match self {
            LinkTarget::Section(section) => section.href(),
            LinkTarget::Url(url) => url.to_owned(),
            LinkTarget::Placeholder => "#".to_owned(),
        }
    }
}
