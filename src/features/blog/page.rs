//! Blog Page

use gpui::{
    Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::components::primitives::card::Card;
use crate::constants::CONTENT_MAX_WIDTH;
use crate::theme::colors::DapColors;
use crate::theme::typography::Typography;

/// Blog page component
pub struct BlogPage;

impl BlogPage {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self
    }
}

impl Render for BlogPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("blog-page")
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .overflow_y_scroll()
            .p_8()
            .child(
                Card::new()
                    .max_width(px(CONTENT_MAX_WIDTH))
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_2XL))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(DapColors::text_primary())
                            .mb_4()
                            .child("Our Blog"),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_BASE))
                            .text_color(DapColors::text_secondary())
                            .child(
                                "Stay tuned for insights on property investment and \
                                 real estate trends.",
                            ),
                    ),
            )
    }
}
