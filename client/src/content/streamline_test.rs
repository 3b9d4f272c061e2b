use super::*;
use crate::util::keys::{ensure_unique_keys, keys_of};

// =============================================================
// Key invariant
// =============================================================

#[test]
fn every_list_has_unique_keys() {
    assert_eq!(ensure_unique_keys(&FEATURES), Ok(()));
    assert_eq!(ensure_unique_keys(&PRICING_PLANS), Ok(()));
    assert_eq!(ensure_unique_keys(&TESTIMONIALS), Ok(()));
    assert_eq!(ensure_unique_keys(&NAV_LINKS), Ok(()));
    assert_eq!(ensure_unique_keys(&FOOTER_COLUMNS), Ok(()));
    assert_eq!(ensure_unique_keys(&SOCIAL_LINKS), Ok(()));
    for column in &FOOTER_COLUMNS {
        assert_eq!(ensure_unique_keys(column.links), Ok(()), "column {}", column.id);
    }
}

#[test]
fn keys_are_not_display_text() {
    for feature in &FEATURES {
        assert_ne!(feature.id, feature.title);
    }
    for plan in &PRICING_PLANS {
        assert_ne!(plan.id, plan.name);
    }
    for testimonial in &TESTIMONIALS {
        assert_ne!(testimonial.id, testimonial.author);
    }
}

// =============================================================
// Features
// =============================================================

#[test]
fn features_titles_in_order() {
    let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
    assert_eq!(
        titles,
        vec!["Gestion de Projet Intuitive", "Automatisation Intelligente", "Suivi des Tâches Avancé"]
    );
}

#[test]
fn features_icons_in_order() {
    let icons: Vec<Icon> = FEATURES.iter().map(|f| f.icon).collect();
    assert_eq!(icons, vec![Icon::Target, Icon::Zap, Icon::CheckSquare]);
}

// =============================================================
// Pricing
// =============================================================

#[test]
fn exactly_one_plan_is_featured_and_it_is_pro() {
    let featured: Vec<&PricingPlan> = PRICING_PLANS.iter().filter(|p| p.is_featured).collect();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].name, "Pro");
    assert_eq!(PRICING_PLANS[1].name, "Pro");
}

#[test]
fn plans_in_price_order() {
    assert_eq!(keys_of(&PRICING_PLANS), vec!["basic", "pro", "enterprise"]);
    let prices: Vec<&str> = PRICING_PLANS.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec!["9", "29", "99"]);
    assert!(PRICING_PLANS.iter().all(|p| p.frequency == "/mois"));
}

#[test]
fn plan_feature_counts() {
    let counts: Vec<usize> = PRICING_PLANS.iter().map(|p| p.features.len()).collect();
    assert_eq!(counts, vec![4, 5, 4]);
}

#[test]
fn plan_cta_label_names_plan() {
    assert_eq!(PRICING_PLANS[0].cta_label(), "Choisir le plan Basique");
    assert_eq!(PRICING_PLANS[2].cta_label(), "Choisir le plan Entreprise");
}

// =============================================================
// Testimonials
// =============================================================

#[test]
fn testimonial_authors_in_order() {
    let authors: Vec<&str> = TESTIMONIALS.iter().map(|t| t.author).collect();
    assert_eq!(authors, vec!["Sophie Dubois", "Marc Lefevre"]);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn nav_links_cover_every_section_once() {
    let sections: Vec<SectionId> = NAV_LINKS.iter().map(|l| l.section).collect();
    assert_eq!(sections, SectionId::ALL.to_vec());
}

#[test]
fn footer_navigation_column_mirrors_header_nav() {
    let column = &FOOTER_COLUMNS[0];
    assert_eq!(column.heading, "Navigation");
    let targets: Vec<LinkTarget> = column.links.iter().map(|l| l.target).collect();
    let expected: Vec<LinkTarget> = NAV_LINKS.iter().map(|l| LinkTarget::Section(l.section)).collect();
    assert_eq!(targets, expected);
    let labels: Vec<&str> = column.links.iter().map(|l| l.label).collect();
    let nav_labels: Vec<&str> = NAV_LINKS.iter().map(|l| l.label).collect();
    assert_eq!(labels, nav_labels);
}

#[test]
fn social_links_are_external_https() {
    assert_eq!(keys_of(&SOCIAL_LINKS), vec!["facebook", "twitter", "linkedin", "instagram"]);
    assert!(SOCIAL_LINKS.iter().all(|l| l.href.starts_with("https://")));
}

#[test]
fn copyright_notice_formats_year() {
    assert_eq!(copyright_notice(2026), "© 2026 StreamLine. Tous droits réservés.");
}

#[test]
fn only_legal_column_shows_social_links() {
    let with_social: Vec<&str> = FOOTER_COLUMNS.iter().filter(|c| c.shows_social).map(|c| c.id).collect();
    assert_eq!(with_social, vec!["legal"]);
}
