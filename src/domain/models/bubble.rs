#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use super::display_width;
use super::Author;
use super::Entry;
use super::EntryKind;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    entry: &'a Entry,
    alignment: BubbleAlignment,
    window_max_width: u16,
}

impl<'a> Bubble<'a> {
    pub fn new(entry: &'a Entry, alignment: BubbleAlignment, window_max_width: u16) -> Bubble<'a> {
        return Bubble {
            entry,
            alignment,
            window_max_width,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let window_max_width = self.window_max_width as usize;

        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = (window_max_width * 4 + 99) / 100;

        // left border + left padding + (text, not counted) + right padding + right
        // border + scrollbar. And then minimum bubble padding.
        let line_border_width = 5 + min_bubble_padding_length;

        let entry_lines = self
            .entry
            .as_string_lines(window_max_width.saturating_sub(line_border_width));

        let username = self.entry.author.to_string();
        let max_line_length = entry_lines
            .iter()
            .map(|line| return display_width(line))
            .chain([display_width(&username)])
            .max()
            .unwrap_or_default();

        // Borders on both sides plus one column for the scrollbar.
        let bubble_padding = " ".repeat(window_max_width.saturating_sub(max_line_length + 5));

        let mut lines: Vec<Line<'static>> = vec![];
        let inner_bar = "─".repeat((max_line_length + 2).saturating_sub(display_width(&username)));
        lines.push(self.pad_line(
            vec![self.highlight_span(format!("╭{username}{inner_bar}╮"))],
            &bubble_padding,
        ));

        for line in entry_lines {
            let fill = " ".repeat(max_line_length.saturating_sub(display_width(&line)));
            let mut spans = vec![self.highlight_span("│ ".to_string())];
            spans.extend(self.content_spans(&line));
            spans.push(self.highlight_span(format!("{fill} │")));
            lines.push(self.pad_line(spans, &bubble_padding));
        }

        lines.push(self.pad_line(
            vec![self.highlight_span(format!("╰{}╯", "─".repeat(max_line_length + 2)))],
            &bubble_padding,
        ));

        return lines;
    }

    fn pad_line(&self, mut spans: Vec<Span<'static>>, bubble_padding: &str) -> Line<'static> {
        if self.alignment == BubbleAlignment::Left {
            spans.push(Span::from(bubble_padding.to_string()));
            return Line::from(spans);
        }

        let mut res = vec![Span::from(bubble_padding.to_string())];
        res.extend(spans);
        return Line::from(res);
    }

    /// Markdown links in answers are underlined so they stand out from the
    /// surrounding text.
    fn content_spans(&self, line: &str) -> Vec<Span<'static>> {
        if self.entry.author != Author::Assistant || self.entry.kind() != EntryKind::Normal {
            return vec![self.highlight_span(line.to_string())];
        }

        let link_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED);

        let mut spans = vec![];
        for (idx, word) in line.split(' ').enumerate() {
            if idx > 0 {
                spans.push(Span::from(" "));
            }
            if word.contains("http://") || word.contains("https://") {
                spans.push(Span::styled(word.to_string(), link_style));
            } else if !word.is_empty() {
                spans.push(Span::from(word.to_string()));
            }
        }

        return spans;
    }

    fn highlight_span(&self, text: String) -> Span<'static> {
        match self.entry.kind() {
            EntryKind::Error => {
                return Span::styled(text, Style::default().fg(Color::Red));
            }
            EntryKind::Pending => {
                return Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::ITALIC),
                );
            }
            EntryKind::Normal => {}
        }

        if self.entry.author == Author::App {
            return Span::styled(
                text,
                Style::default().fg(Color::Rgb(138, 85, 63)), // Brown
            );
        }

        return Span::from(text);
    }
}
