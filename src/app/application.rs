//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::APP_TITLE;
use crate::state::AppState;

actions!(dap, [Quit]);

/// Run the DAP GUI application
pub fn run_app() {
    let app_state = AppState::try_load().unwrap_or_else(|error| {
        tracing::warn!(%error, "Failed to load app state, using defaults");
        AppState::default()
    });

    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities from the persisted state
        let entities = AppEntities::init(app_state.clone(), cx);
        cx.set_global(entities.clone());

        // Create main window
        let size = gpui::size(px(app_state.window_width()), px(app_state.window_height()));
        let bounds = Bounds::centered(None, size, cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(APP_TITLE)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        });
        if let Err(error) = opened {
            tracing::error!(%error, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
