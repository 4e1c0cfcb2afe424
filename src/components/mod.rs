//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on page content or do I/O.

pub mod layout;
pub mod primitives;
