//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold the small capability interfaces components lean on
//! (icon lookup, list-key invariants) so pages stay declarative.

pub mod icon;
pub mod keys;
