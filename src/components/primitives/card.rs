//! Card Component
//!
//! White content container with the brand's card styling. Callers adjust the
//! closed styling set (padding, width cap) and supply arbitrary children.

use gpui::{
    AnyElement, App, IntoElement, ParentElement, Pixels, RenderOnce, Styled, Window, div,
    prelude::*, px,
};

use crate::theme::colors::DapColors;

/// A styled content card
#[derive(IntoElement)]
pub struct Card {
    padding: Pixels,
    max_width: Option<Pixels>,
    children: Vec<AnyElement>,
}

impl Card {
    pub fn new() -> Self {
        Self {
            padding: px(24.0),
            max_width: None,
            children: Vec::new(),
        }
    }

    /// Override the inner padding
    pub fn padding(mut self, padding: Pixels) -> Self {
        self.padding = padding;
        self
    }

    /// Cap the card width
    pub fn max_width(mut self, width: Pixels) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .bg(DapColors::content_bg())
            .border_1()
            .border_color(DapColors::border())
            .rounded_lg()
            .overflow_hidden()
            .p(self.padding)
            .when_some(self.max_width, |this, width| this.max_w(width))
            .children(self.children)
    }
}
