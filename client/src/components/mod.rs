//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections of the StreamLine landing page and the TRVL site. Each section
//! reads static records from `content` and owns whatever local state it needs.

pub mod card_list;
pub mod contact;
pub mod destinations;
pub mod features;
pub mod final_cta;
pub mod hero;
pub mod icon;
pub mod pricing;
pub mod site_footer;
pub mod site_header;
pub mod testimonials;
pub mod travel_navbar;
