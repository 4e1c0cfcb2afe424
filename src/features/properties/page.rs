//! Properties Page
//!
//! Maps the listing fixture to cards. "View Details" toggles the expanded
//! details paragraph for that listing.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px, svg,
};

use crate::components::primitives::button::Button;
use crate::components::primitives::card::Card;
use crate::constants::{LISTING_ART_HEIGHT, LISTING_CARD_WIDTH};
use crate::domain::listing::{Listing, listings};
use crate::theme::colors::DapColors;
use crate::theme::typography::Typography;

/// Properties page component
pub struct PropertiesPage {
    /// Listing id whose details paragraph is expanded
    expanded: Option<u32>,
}

impl PropertiesPage {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self { expanded: None }
    }

    // Returns a concrete element so repeated calls don't hold the cx borrow
    fn render_card(&self, listing: &'static Listing, cx: &mut Context<Self>) -> gpui::Div {
        let id = listing.id;
        let is_expanded = self.expanded == Some(id);

        div().w(px(LISTING_CARD_WIDTH)).child(
            Card::new()
                .padding(px(0.0))
                .child(
                    div()
                        .w_full()
                        .h(px(LISTING_ART_HEIGHT))
                        .bg(DapColors::tile_bg())
                        .flex()
                        .items_center()
                        .justify_center()
                        .child(
                            svg()
                                .path(listing.image)
                                .size(px(96.0))
                                .text_color(DapColors::brand_focus()),
                        ),
                )
                .child(
                    div()
                        .p_4()
                        .flex()
                        .flex_col()
                        .gap_2()
                        .child(
                            div()
                                .text_size(px(Typography::TEXT_LG))
                                .font_weight(gpui::FontWeight::BOLD)
                                .text_color(DapColors::text_primary())
                                .child(listing.title),
                        )
                        .child(
                            div()
                                .text_size(px(Typography::TEXT_SM))
                                .text_color(DapColors::text_secondary())
                                .child(listing.summary),
                        )
                        .when(is_expanded, |this| {
                            this.child(
                                div()
                                    .text_size(px(Typography::TEXT_SM))
                                    .text_color(DapColors::text_primary())
                                    .child(listing.details),
                            )
                        })
                        .child(
                            div().mt_2().child(
                                Button::primary(("view-details", id as usize), "View Details")
                                    .on_click(cx.listener(
                                        move |this, _event: &ClickEvent, _window, cx| {
                                            this.expanded = if this.expanded == Some(id) {
                                                None
                                            } else {
                                                Some(id)
                                            };
                                            cx.notify();
                                        },
                                    )),
                            ),
                        ),
                ),
        )
    }
}

impl Render for PropertiesPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let cards: Vec<_> = listings()
            .iter()
            .map(|listing| self.render_card(listing, cx))
            .collect();

        div()
            .id("properties-page")
            .size_full()
            .overflow_y_scroll()
            .p_8()
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .justify_center()
                    .gap_6()
                    .children(cards),
            )
    }
}
