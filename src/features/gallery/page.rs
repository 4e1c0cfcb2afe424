//! Gallery Page
//!
//! Maps the gallery fixture to a wrapping grid of artwork tiles.

use gpui::{
    Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px, svg,
};

use crate::constants::GALLERY_TILE_SIZE;
use crate::domain::gallery::{GalleryImage, gallery_images};
use crate::theme::colors::DapColors;

/// Gallery page component
pub struct GalleryPage;

impl GalleryPage {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self
    }

    fn render_tile(image: &'static GalleryImage) -> impl IntoElement {
        div()
            .id(("gallery-tile", image.id as usize))
            .size(px(GALLERY_TILE_SIZE))
            .bg(DapColors::tile_bg())
            .border_1()
            .border_color(DapColors::border())
            .rounded_lg()
            .flex()
            .items_center()
            .justify_center()
            .child(
                svg()
                    .path(image.image)
                    .size(px(96.0))
                    .text_color(DapColors::brand_focus()),
            )
    }
}

impl Render for GalleryPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("gallery-page")
            .size_full()
            .overflow_y_scroll()
            .p_8()
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .justify_center()
                    .gap_4()
                    .children(gallery_images().iter().map(Self::render_tile)),
            )
    }
}
