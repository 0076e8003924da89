//! Single-line text input
//!
//! The cursor counts characters, so labels and descriptions with
//! non-ASCII text edit correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Editable text field used by the dialogs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters
    cursor: usize,
    /// Label rendered before the value
    pub label: String,
    /// Shown while the field is empty
    pub placeholder: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Replace the content and put the cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_value(content);
        self
    }

    pub fn set_value(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.chars().count();
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Render with focus styling
    pub fn widget(&self, focused: bool) -> TextInputWidget<'_> {
        TextInputWidget {
            input: self,
            focused,
        }
    }
}

/// Borrowed view of a [`TextInput`] that can be rendered
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    focused: bool,
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let input = self.input;
        let label_style = if self.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let mut spans = Vec::new();
        if !input.label.is_empty() {
            spans.push(Span::styled(format!("{}: ", input.label), label_style));
        }

        if input.content.is_empty() && !self.focused {
            spans.push(Span::styled(
                input.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        } else if self.focused {
            let at = input.byte_index(input.cursor);
            let (before, rest) = input.content.split_at(at);
            let mut rest_chars = rest.chars();
            let under = rest_chars.next().map(String::from).unwrap_or_else(|| " ".into());
            spans.push(Span::styled(before.to_string(), Style::default().fg(Color::White)));
            spans.push(Span::styled(
                under,
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            spans.push(Span::styled(
                rest_chars.collect::<String>(),
                Style::default().fg(Color::White),
            ));
        } else {
            spans.push(Span::styled(
                input.content.clone(),
                Style::default().fg(Color::White),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
