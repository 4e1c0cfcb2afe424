//! Not Found Page
//!
//! Fallback view for paths outside the route table.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::navigation::Route;
use crate::components::primitives::button::Button;
use crate::components::primitives::card::Card;
use crate::constants::FORM_CARD_WIDTH;
use crate::state::navigate;
use crate::theme::colors::DapColors;
use crate::theme::typography::Typography;

/// Not-found page component
pub struct NotFoundPage;

impl NotFoundPage {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self
    }
}

impl Render for NotFoundPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("not-found-page")
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .overflow_y_scroll()
            .p_8()
            .child(
                Card::new()
                    .max_width(px(FORM_CARD_WIDTH))
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_2XL))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(DapColors::text_primary())
                            .mb_4()
                            .child("Page Not Found"),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_BASE))
                            .text_color(DapColors::text_secondary())
                            .mb_4()
                            .child("The page you are looking for does not exist."),
                    )
                    .child(
                        Button::primary("back-home", "Back to Home").on_click(
                            move |_event: &ClickEvent, _window, cx| {
                                navigate(Route::Home, cx);
                            },
                        ),
                    ),
            )
    }
}
