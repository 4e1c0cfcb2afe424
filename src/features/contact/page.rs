//! Contact Page
//!
//! Contact form with name, email, and message fields. Submitting records the
//! inquiry in the session contact state, logs it, clears the form, and shows
//! a confirmation banner. The fields are not validated.

use gpui::{
    ClickEvent, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use tracing::info;

use crate::app::entities::AppEntities;
use crate::components::primitives::button::Button;
use crate::components::primitives::card::Card;
use crate::components::primitives::text_area::{TextArea, text_area};
use crate::components::primitives::text_input::{TextInput, text_input};
use crate::constants::FORM_CARD_WIDTH;
use crate::domain::inquiry::Inquiry;
use crate::helpers::{format_time, preview};
use crate::theme::colors::DapColors;
use crate::theme::typography::Typography;

/// Contact page component
pub struct ContactPage {
    entities: AppEntities,
    name: Entity<TextInput>,
    email: Entity<TextInput>,
    message: Entity<TextArea>,
    confirmation: Option<SharedString>,
}

impl ContactPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let name = text_input("contact-name", "Your Name", cx);
        let email = text_input("contact-email", "Your Email", cx);
        let message = text_area("contact-message", "Your Message", 4, cx);

        Self {
            entities,
            name,
            email,
            message,
            confirmation: None,
        }
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let inquiry = Inquiry::new(
            self.name.read(cx).value(),
            self.email.read(cx).value(),
            self.message.read(cx).value(),
        );

        info!(
            name = %inquiry.name,
            email = %inquiry.email,
            message = %preview(&inquiry.message, 64),
            "Contact inquiry recorded"
        );

        self.confirmation = Some(
            format!(
                "Thank you! Your message was recorded at {}.",
                format_time(&inquiry.received_at)
            )
            .into(),
        );

        self.entities.contact.update(cx, |contact, _| {
            contact.record(inquiry);
        });

        self.name.update(cx, |input, cx| {
            input.set_value("");
            cx.notify();
        });
        self.email.update(cx, |input, cx| {
            input.set_value("");
            cx.notify();
        });
        self.message.update(cx, |area, cx| {
            area.set_value("");
            cx.notify();
        });

        cx.notify();
    }
}

impl Render for ContactPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let confirmation = self.confirmation.clone();

        div()
            .id("contact-page")
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
                            .child("Contact Us"),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .child(self.name.clone())
                            .child(self.email.clone())
                            .child(self.message.clone())
                            .child(
                                div().child(
                                    Button::primary("contact-submit", "Send Message").on_click(
                                        cx.listener(
                                            |this, _event: &ClickEvent, _window, cx| {
                                                this.submit(cx);
                                            },
                                        ),
                                    ),
                                ),
                            )
                            .when_some(confirmation, |this, text| {
                                this.child(
                                    div()
                                        .text_size(px(Typography::TEXT_SM))
                                        .text_color(DapColors::success())
                                        .child(text),
                                )
                            }),
                    ),
            )
    }
}
