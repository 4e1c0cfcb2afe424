//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Application window title
pub const APP_TITLE: &str = "Double A Properties and Homes";

/// Navigation bar height in pixels
pub const NAVBAR_HEIGHT: f32 = 64.0;

/// Maximum content column width
pub const CONTENT_MAX_WIDTH: f32 = 960.0;

/// Contact form card width
pub const FORM_CARD_WIDTH: f32 = 576.0;

/// Listing card width on the properties page
pub const LISTING_CARD_WIDTH: f32 = 300.0;

/// Listing card artwork height
pub const LISTING_ART_HEIGHT: f32 = 160.0;

/// Gallery tile edge length
pub const GALLERY_TILE_SIZE: f32 = 200.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 800.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;
