//! Component-local UI state.
//!
//! DESIGN
//! ======
//! Each state type is plain data with pure transitions. Components wrap it in
//! an `RwSignal` they own; nothing here is shared between components.

pub mod contact;
pub mod menu;
