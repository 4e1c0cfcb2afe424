//! Application State
//!
//! The single piece of session state the router needs (the current route)
//! plus the persisted window preferences.

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use gpui::{App, Context};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

const STATE_FILE: &str = "dap-gui.toml";

/// Preferred window dimensions, user-editable in the state file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Persisted application state
///
/// The `route` field is the desktop analog of the address bar: it is written
/// on every navigation and resolved against the route table on startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    route: Route,
    window: WindowSize,
}

fn state_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(STATE_FILE))
}

impl AppState {
    /// Load state from the config file, falling back to defaults when the
    /// file is missing or empty
    pub fn try_load() -> Result<Self> {
        let path = state_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading app state");
        let value = std::fs::read_to_string(&path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let state: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse app state file");
            e
        })?;
        Ok(state)
    }

    /// Save state to the config file
    pub fn save(&self) -> Result<()> {
        let path = state_path()?;
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    // ==================== Getters ====================

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn window_width(&self) -> f32 {
        self.window.width.max(MIN_WINDOW_WIDTH)
    }

    pub fn window_height(&self) -> f32 {
        self.window.height.max(MIN_WINDOW_HEIGHT)
    }

    // ==================== Setters ====================

    pub fn go_to(&mut self, route: Route, cx: &mut Context<Self>) {
        if self.route != route {
            self.route = route;
            cx.notify();
        }
    }
}

/// Navigate to a route and persist the new state in the background
///
/// The UI update is synchronous; only the disk write leaves the main thread.
pub fn navigate(route: Route, cx: &mut App) {
    let entities = cx.global::<AppEntities>().clone();
    let state = entities.app.update(cx, |state, cx| {
        state.go_to(route, cx);
        state.clone()
    });

    cx.background_executor()
        .spawn(async move {
            if let Err(error) = state.save() {
                error!(%error, "Failed to persist app state");
            }
        })
        .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let state: AppState = toml::from_str("").expect("empty state parses");
        assert_eq!(state, AppState::default());
        assert_eq!(state.route(), Route::Home);
    }

    #[test]
    fn persisted_path_resolves_through_the_table() {
        let state: AppState =
            toml::from_str(r#"route = "/gallery""#).expect("state parses");
        assert_eq!(state.route(), Route::Gallery);
    }

    #[test]
    fn unknown_persisted_path_falls_back_to_not_found() {
        let state: AppState =
            toml::from_str(r#"route = "/old-page""#).expect("state parses");
        assert_eq!(state.route(), Route::NotFound);
    }

    #[test]
    fn state_round_trips_through_toml() {
        let mut state = AppState::default();
        state.route = Route::Properties;
        state.window = WindowSize {
            width: 1000.0,
            height: 700.0,
        };

        let value = toml::to_string(&state).expect("state serializes");
        let parsed: AppState = toml::from_str(&value).expect("state parses");
        assert_eq!(parsed, state);
    }

    #[test]
    fn window_dimensions_are_clamped() {
        let state: AppState = toml::from_str(
            "[window]\nwidth = 100.0\nheight = 50.0\n",
        )
        .expect("state parses");
        assert_eq!(state.window_width(), MIN_WINDOW_WIDTH);
        assert_eq!(state.window_height(), MIN_WINDOW_HEIGHT);
    }
}
