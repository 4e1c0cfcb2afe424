//! TextInput Component
//!
//! Single-line text input with focus tracking and basic keystroke editing.
//! No IME or selection support; the contact form does not need them.

use gpui::{
    ClickEvent, Context, ElementId, Entity, FocusHandle, Focusable, InteractiveElement,
    IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*,
};

use crate::theme::colors::DapColors;

/// A single-line text input component
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    focus_handle: FocusHandle,
}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
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
            "enter" | "tab" | "escape" => return,
            _ => match &keystroke.key_char {
                Some(text) => self.value.push_str(text),
                None => return,
            },
        }
        cx.notify();
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
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

/// Create a text input entity with a placeholder
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_placeholder(placeholder);
        input
    })
}
