//! StreamLine landing page data: features, plans, testimonials, navigation.

use super::{LinkTarget, SectionId};
use crate::util::icon::Icon;
use crate::util::keys::Keyed;

#[cfg(test)]
#[path = "streamline_test.rs"]
mod tests;

pub const BRAND: &str = "StreamLine";
pub const SLOGAN: &str = "Automatisez, Gagnez en Efficacité.";

// =============================================================================
// FEATURES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub id: &'static str,
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        id: "project-management",
        icon: Icon::Target,
        title: "Gestion de Projet Intuitive",
        description: "Organisez vos tâches, suivez les progrès et gérez les équipes avec une interface simple et puissante.",
    },
    Feature {
        id: "automation",
        icon: Icon::Zap,
        title: "Automatisation Intelligente",
        description: "Automatisez les workflows répétitifs et gagnez un temps précieux. Moins de travail manuel, plus d'efficacité.",
    },
    Feature {
        id: "task-tracking",
        icon: Icon::CheckSquare,
        title: "Suivi des Tâches Avancé",
        description: "Ne manquez jamais une échéance. Gardez un œil sur chaque tâche, attribuez des responsabilités et respectez les délais.",
    },
];

// =============================================================================
// PRICING
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub frequency: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// Recommended plan, rendered with the highlighted card variant.
    pub is_featured: bool,
}

impl PricingPlan {
    pub fn cta_label(&self) -> String {
        format!("Choisir le plan {}", self.name)
    }
}

pub const CURRENCY: &str = "$";

pub static PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        id: "basic",
        name: "Basique",
        price: "9",
        frequency: "/mois",
        description: "Idéal pour les petites équipes et les débutants.",
        features: &["Jusqu'à 5 utilisateurs", "Gestion de tâches", "Support par email", "5 Go de stockage"],
        is_featured: false,
    },
    PricingPlan {
        id: "pro",
        name: "Pro",
        price: "29",
        frequency: "/mois",
        description: "Le choix parfait pour les équipes en croissance.",
        features: &[
            "Utilisateurs illimités",
            "Automatisation de workflows",
            "Support prioritaire 24/7",
            "50 Go de stockage",
            "Intégrations avancées",
        ],
        is_featured: true,
    },
    PricingPlan {
        id: "enterprise",
        name: "Entreprise",
        price: "99",
        frequency: "/mois",
        description: "Des solutions sur mesure pour les grandes entreprises.",
        features: &[
            "Toutes les fonctionnalités Pro",
            "Support dédié avec SLA",
            "Sécurité avancée",
            "Formation personnalisée",
        ],
        is_featured: false,
    },
];

// =============================================================================
// TESTIMONIALS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
    pub position: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        id: "innovtech-ceo",
        quote: "StreamLine a révolutionné notre gestion de projet. Nos équipes sont plus synchronisées et la productivité a grimpé en flèche. Un outil indispensable pour toute startup !",
        author: "Sophie Dubois",
        position: "CEO, InnovTech Solutions",
    },
    Testimonial {
        id: "xyz-project-lead",
        quote: "L'automatisation des tâches avec StreamLine nous a fait gagner un temps fou. C'est simple à utiliser et incroyablement efficace. Je le recommande vivement !",
        author: "Marc Lefevre",
        position: "Chef de Projet, Agence Digitale XYZ",
    },
];

// =============================================================================
// NAVIGATION
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub section: SectionId,
    pub label: &'static str,
}

/// Header navigation, also reused as the footer "Navigation" column.
pub static NAV_LINKS: [NavLink; 4] = [
    NavLink { section: SectionId::Features, label: "Fonctionnalités" },
    NavLink { section: SectionId::Testimonials, label: "Témoignages" },
    NavLink { section: SectionId::Pricing, label: "Tarifs" },
    NavLink { section: SectionId::Contact, label: "Contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub id: &'static str,
    pub label: &'static str,
    pub target: LinkTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub id: &'static str,
    pub heading: &'static str,
    pub links: &'static [FooterLink],
    /// Social icons are rendered under this column's links.
    pub shows_social: bool,
}

pub static FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        id: "navigation",
        heading: "Navigation",
        links: &[
            FooterLink { id: "features", label: "Fonctionnalités", target: LinkTarget::Section(SectionId::Features) },
            FooterLink {
                id: "testimonials",
                label: "Témoignages",
                target: LinkTarget::Section(SectionId::Testimonials),
            },
            FooterLink { id: "pricing", label: "Tarifs", target: LinkTarget::Section(SectionId::Pricing) },
            FooterLink { id: "contact", label: "Contact", target: LinkTarget::Section(SectionId::Contact) },
        ],
        shows_social: false,
    },
    FooterColumn {
        id: "resources",
        heading: "Ressources",
        links: &[
            FooterLink { id: "blog", label: "Blog", target: LinkTarget::Placeholder },
            FooterLink { id: "docs", label: "Documentation", target: LinkTarget::Placeholder },
            FooterLink { id: "support", label: "Support", target: LinkTarget::Placeholder },
            FooterLink { id: "faq", label: "FAQ", target: LinkTarget::Placeholder },
        ],
        shows_social: false,
    },
    FooterColumn {
        id: "legal",
        heading: "Légal & Contact",
        links: &[
            FooterLink { id: "privacy", label: "Politique de confidentialité", target: LinkTarget::Placeholder },
            FooterLink { id: "terms", label: "Conditions d'utilisation", target: LinkTarget::Placeholder },
        ],
        shows_social: true,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub id: &'static str,
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { id: "facebook", icon: Icon::Facebook, label: "Facebook", href: "https://facebook.com/streamline" },
    SocialLink { id: "twitter", icon: Icon::Twitter, label: "Twitter", href: "https://twitter.com/streamline" },
    SocialLink {
        id: "linkedin",
        icon: Icon::Linkedin,
        label: "LinkedIn",
        href: "https://linkedin.com/company/streamline",
    },
    SocialLink { id: "instagram", icon: Icon::Instagram, label: "Instagram", href: "https://instagram.com/streamline" },
];

/// Footer copyright line for `year`.
pub fn copyright_notice(year: i32) -> String {
    format!("© {year} {BRAND}. Tous droits réservés.")
}

impl Keyed for Feature {
    fn key(&self) -> &'static str {
        self.id
    }
}

impl Keyed for PricingPlan {
    fn key(&self) -> &'static str {
        self.id
    }
}

impl Keyed for Testimonial {
    fn key(&self) -> &'static str {
        self.id
    }
}

impl Keyed for NavLink {
    fn key(&self) -> &'static str {
        self.section.id()
    }
}

impl Keyed for FooterLink {
    fn key(&self) -> &'static str {
        self.id
    }
}

impl Keyed for FooterColumn {
    fn key(&self) -> &'static str {
        self.id
    }
}

impl Keyed for SocialLink {
    fn key(&self) -> &'static str {
        self.id
    }
}
