//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the showcase content.

pub mod gallery;
pub mod inquiry;
pub mod listing;
