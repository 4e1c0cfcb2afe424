//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and
//! management.

use gpui::{App, AppContext, Entity, Global};

use crate::state::{AppState, ContactState};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Router and window state
    pub app: Entity<AppState>,
    /// Contact form submissions for this session
    pub contact: Entity<ContactState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded app state
    pub fn init(app_state: AppState, cx: &mut App) -> Self {
        Self {
            app: cx.new(|_| app_state),
            contact: cx.new(|_| ContactState::default()),
        }
    }
}
