//! DAP GUI Client Library
//!
//! This crate provides the main application logic for the Double A
//! Properties and Homes showcase client: a single-window desktop app with a
//! persistent navigation bar and six routed pages.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod state;
pub mod theme;
