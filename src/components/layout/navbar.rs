//! Navigation Bar Component
//!
//! Fixed header with the brand logo, title, and the six page links. Rendered
//! identically on every page; the active link is highlighted.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px, svg,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::assets::LOGO_PATH;
use crate::constants::{APP_TITLE, NAVBAR_HEIGHT};
use crate::state::navigate;
use crate::theme::colors::DapColors;
use crate::theme::typography::Typography;

/// Navigation bar component
pub struct Navbar {
    entities: AppEntities,
}

impl Navbar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Re-render when the route changes so the active link moves
        cx.observe(&entities.app, |_this, _, cx| cx.notify()).detach();

        Self { entities }
    }

    fn render_link(&self, index: usize, route: Route, active_route: Route) -> impl IntoElement {
        let is_active = route == active_route;

        let text_color = if is_active {
            DapColors::brand()
        } else {
            DapColors::text_secondary()
        };

        div()
            .id(("nav-link", index))
            .px_3()
            .py_2()
            .rounded_md()
            .text_size(px(Typography::TEXT_SM))
            .font_weight(gpui::FontWeight::MEDIUM)
            .text_color(text_color)
            .cursor_pointer()
            .when(is_active, |this| this.bg(DapColors::tile_bg()))
            .hover(|s| s.bg(DapColors::background()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                navigate(route, cx);
            })
            .child(route.title())
    }
}

impl Render for Navbar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_route = self.entities.app.read(cx).route();

        div()
            .h(px(NAVBAR_HEIGHT))
            .w_full()
            .flex_none()
            .bg(DapColors::navbar_bg())
            .border_b_1()
            .border_color(DapColors::border())
            .flex()
            .items_center()
            .justify_between()
            .px_6()
            // Left side: logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        svg()
                            .path(LOGO_PATH)
                            .size(px(36.0))
                            .text_color(DapColors::brand()),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_LG))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(DapColors::brand())
                            .child(APP_TITLE),
                    ),
            )
            // Right side: page links
            .child(
                div().flex().items_center().gap_1().children(
                    Route::nav()
                        .iter()
                        .enumerate()
                        .map(|(index, route)| self.render_link(index, *route, active_route)),
                ),
            )
    }
}
