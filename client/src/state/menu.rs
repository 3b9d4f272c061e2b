//! Mobile navigation menu toggle.
//!
//! DESIGN
//! ======
//! The header and the travel navbar each own one `RwSignal<MenuState>`.
//! The burger control flips it; every navigation link and header action
//! closes it, so following a link from the open mobile menu also dismisses
//! the overlay.

use crate::util::icon::Icon;

#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Burger control click. Flips unconditionally.
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// Nav link or action click. Idempotent.
    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    /// Glyph shown on the burger control for the current state.
    pub fn control_icon(self) -> Icon {
        if self.is_open() { Icon::X } else { Icon::Menu }
    }

    /// Accessible label of the burger control.
    pub fn control_label(self) -> &'static str {
        if self.is_open() { "Fermer le menu" } else { "Ouvrir le menu" }
    }
}
