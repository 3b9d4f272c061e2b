//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page composes sections from `components` in a fixed order; pages hold
//! no state of their own.

pub mod landing;
pub mod travel;
