use ratatui::prelude::Alignment;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;

pub const TITLE: &str = "🏫 국립강릉원주대학교 챗봇";
pub const SUBTITLE: &str = "퍼플렉시티 API로 학교 생활에 대한 질문에 답합니다. 명령어는 /help";

pub struct Header {}

impl Header {
    pub fn widget() -> Paragraph<'static> {
        return Paragraph::new(vec![
            Line::from(Span::styled(
                TITLE,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                SUBTITLE,
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::default().borders(Borders::BOTTOM))
        .alignment(Alignment::Center);
    }
}
