//! TRVL travel site data.

use super::LinkTarget;
use crate::util::keys::Keyed;

#[cfg(test)]
#[path = "travel_test.rs"]
mod tests;

pub const BRAND: &str = "TRVL";

/// Path the travel site is mounted under.
pub const MOUNT_PATH: &str = "/travel";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TravelNavLink {
    pub id: &'static str,
    pub label: &'static str,
    pub target: LinkTarget,
}

pub static TRAVEL_NAV_LINKS: [TravelNavLink; 3] = [
    TravelNavLink { id: "home", label: "Home", target: LinkTarget::Url(MOUNT_PATH) },
    TravelNavLink { id: "destinations", label: "Destinations", target: LinkTarget::Url("/travel#destinations") },
    TravelNavLink { id: "sign-up", label: "Sign Up", target: LinkTarget::Placeholder },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Destination {
    pub id: &'static str,
    pub image: &'static str,
    pub label: &'static str,
    pub text: &'static str,
}

pub static DESTINATIONS: [Destination; 5] = [
    Destination {
        id: "amazon-waterfall",
        image: "/images/img-9.jpg",
        label: "Adventure",
        text: "Explore the hidden waterfall deep inside the Amazon Jungle",
    },
    Destination {
        id: "bali-cruise",
        image: "/images/img-2.jpg",
        label: "Luxury",
        text: "Travel through the Islands of Bali in a Private Cruise",
    },
    Destination {
        id: "atlantic-sail",
        image: "/images/img-3.jpg",
        label: "Mystery",
        text: "Set Sail in the Atlantic Ocean visiting Uncharted Waters",
    },
    Destination {
        id: "himalaya-football",
        image: "/images/img-4.jpg",
        label: "Adventure",
        text: "Experience Football on Top of the Himalayan Mountains",
    },
    Destination {
        id: "sahara-camels",
        image: "/images/img-8.jpg",
        label: "Adrenaline",
        text: "Ride through the Sahara Desert on a guided camel tour",
    },
];

impl Keyed for TravelNavLink {
    fn key(&self) -> &'static str {
        self.id
    }
}

impl Keyed for Destination {
    fn key(&self) -> &'static str {
        self.id
    }
}
