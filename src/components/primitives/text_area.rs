//! TextArea Component
//!
//! Multi-line sibling of [`TextInput`](super::text_input::TextInput) with a
//! caller-supplied row count.

use gpui::{
    ClickEvent, Context, ElementId, Entity, FocusHandle, Focusable, InteractiveElement,
    IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::DapColors;

/// Line height used to derive the area height from the row count
const ROW_HEIGHT: f32 = 22.0;

/// A multi-line text input component
pub struct TextArea {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    rows: usize,
    focus_handle: FocusHandle,
}

impl TextArea {
    /// Create a new text area
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            rows: 4,
            focus_handle: cx.focus_handle(),
        }
    }

    /// Set the value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Get the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Set the visible row count
    pub fn set_rows(&mut self, rows: usize) {
        self.rows = rows.max(1);
    }

    fn handle_key_down(
        &mut self,
        event: &KeyDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control
            || keystroke.modifiers.platform
            || keystroke.modifiers.alt
            || keystroke.modifiers.function
        {
            return;
        }

        match keystroke.key.as_str() {
            "backspace" => {
                self.value.pop();
            }
            "space" => self.value.push(' '),
            "enter" => self.value.push('\n'),
            "tab" | "escape" => return,
            _ => match &keystroke.key_char {
                Some(text) => self.value.push_str(text),
                None => return,
            },
        }
        cx.notify();
    }
}

impl Focusable for TextArea {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextArea {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            DapColors::border_focus()
        } else {
            DapColors::input_border()
        };

        let mut display_text = if self.value.is_empty() && !is_focused {
            self.placeholder.to_string()
        } else {
            self.value.clone()
        };
        if is_focused {
            display_text.push('|');
        }

        let text_color = if self.value.is_empty() {
            DapColors::input_placeholder()
        } else {
            DapColors::text_primary()
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .w_full()
            .min_h(px(self.rows as f32 * ROW_HEIGHT))
            .px_3()
            .py_2()
            .bg(DapColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .cursor_text()
            .overflow_hidden()
            .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                window.focus(&this.focus_handle);
                cx.notify();
            }))
            .on_key_down(cx.listener(Self::handle_key_down))
            .child(display_text)
    }
}

/// Create a text area entity with a placeholder and row count
pub fn text_area<V: 'static>(
    id: impl Into<ElementId>,
    placeholder: impl Into<SharedString>,
    rows: usize,
    cx: &mut Context<V>,
) -> Entity<TextArea> {
    let id = id.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut area = TextArea::new(id, cx);
        area.set_placeholder(placeholder);
        area.set_rows(rows);
        area
    })
}
