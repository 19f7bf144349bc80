use ratatui::prelude::Alignment;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;

pub const THINKING_TEXT: &str = "🤔 생각 중...";

#[derive(Default)]
pub struct Loading {}

impl Loading {
    pub fn widget(&self) -> Paragraph<'static> {
        return Paragraph::new(THINKING_TEXT)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .padding(Padding::new(1, 1, 0, 0)),
            )
            .alignment(Alignment::Center);
    }
}
