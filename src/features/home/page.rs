//! Home Page
//!
//! Brand welcome with the logo and tagline.

use gpui::{
    Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px, svg,
};

use crate::assets::LOGO_PATH;
use crate::components::primitives::card::Card;
use crate::constants::CONTENT_MAX_WIDTH;
use crate::theme::colors::DapColors;
use crate::theme::typography::Typography;

/// Home page component
pub struct HomePage;

impl HomePage {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self
    }
}

impl Render for HomePage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("home-page")
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .overflow_y_scroll()
            .p_8()
            .child(
                Card::new().max_width(px(CONTENT_MAX_WIDTH)).child(
                    div()
                        .flex()
                        .flex_col()
                        .items_center()
                        .gap_4()
                        .child(
                            svg()
                                .path(LOGO_PATH)
                                .size(px(112.0))
                                .text_color(DapColors::brand()),
                        )
                        .child(
                            div()
                                .text_size(px(Typography::TEXT_2XL))
                                .font_weight(gpui::FontWeight::SEMIBOLD)
                                .text_color(DapColors::text_primary())
                                .child("Welcome to Double A Properties and Homes"),
                        )
                        .child(
                            div()
                                .text_size(px(Typography::TEXT_BASE))
                                .text_color(DapColors::text_secondary())
                                .child(
                                    "Creating value with integrity - your trusted partner \
                                     in real estate development, sales, and property \
                                     management.",
                                ),
                        ),
                ),
            )
    }
}
