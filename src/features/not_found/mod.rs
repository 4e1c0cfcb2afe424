//! Not-found fallback feature

pub mod page;
