#[cfg(test)]
#[path = "sidebar_test.rs"]
mod tests;

use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;

use super::Settings;

pub const USAGE_NOTICE: &str = "퍼플렉시티 API는 하루 500개의 쿼리 제한이 있습니다.";
pub const ATTRIBUTION: &str = "이 챗봇은 퍼플렉시티 API를 활용하여 개발되었습니다.";
const REQUEST_HEADING: &str = "API 요청 데이터";
const NO_REQUEST_YET: &str = "아직 보낸 요청이 없습니다.";

fn heading(text: &str) -> Line<'static> {
    return Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
}

fn plain(text: &str) -> Line<'static> {
    return Line::from(text.to_string());
}

fn rows(line: &Line, width: usize) -> usize {
    return line.width().max(1).div_ceil(width.max(1));
}

fn rows_total(lines: &[Line], width: usize) -> usize {
    return lines.iter().map(|line| return rows(line, width)).sum();
}

/// Keeps the last lines of `lines` that fit in `max_rows` wrapped rows,
/// marking the cut with an ellipsis line.
fn tail_to_fit(lines: Vec<Line<'static>>, width: usize, max_rows: usize) -> Vec<Line<'static>> {
    if rows_total(&lines, width) <= max_rows {
        return lines;
    }

    let mut used = 1;
    let mut start = lines.len();
    while start > 0 {
        let next = used + rows(&lines[start - 1], width);
        if next > max_rows {
            break;
        }
        used = next;
        start -= 1;
    }

    let mut tail = vec![plain("…")];
    tail.extend(lines.into_iter().skip(start));
    return tail;
}

fn request_lines(last_request: Option<&str>) -> Vec<Line<'static>> {
    match last_request {
        Some(request) => {
            return request.lines().map(plain).collect();
        }
        None => {
            return vec![Line::from(Span::styled(
                NO_REQUEST_YET,
                Style::default().add_modifier(Modifier::ITALIC),
            ))];
        }
    }
}

pub struct Sidebar {}

impl Sidebar {
    fn settings_lines(settings: &Settings) -> Vec<Line<'static>> {
        let mut debug_label = "꺼짐";
        if settings.debug_mode {
            debug_label = "켜짐";
        }

        return vec![
            heading("챗봇 설정"),
            plain(&format!("모델: {}", settings.model)),
            plain(&format!("디버그 모드: {debug_label}")),
            plain(""),
            heading("명령어"),
            plain("/modellist  모델 목록"),
            plain("/model 이름|번호  모델 선택"),
            plain("/reset  대화 초기화"),
            plain("/debug  디버그 모드"),
            plain("/help  도움말"),
            plain("/quit  종료"),
            plain(""),
            heading("사용 정보"),
            plain(USAGE_NOTICE),
            plain(""),
            heading("개발자 정보"),
            plain(ATTRIBUTION),
        ];
    }

    pub fn lines(settings: &Settings, last_request: Option<&str>) -> Vec<Line<'static>> {
        let mut lines = Sidebar::settings_lines(settings);
        if settings.debug_mode {
            lines.push(plain(""));
            lines.push(heading(REQUEST_HEADING));
            lines.extend(request_lines(last_request));
        }

        return lines;
    }

    /// Same content as `lines`, with the request payload cut to its tail so
    /// it fits in `width` by `height` cells.
    pub fn lines_to_fit(
        settings: &Settings,
        last_request: Option<&str>,
        width: usize,
        height: usize,
    ) -> Vec<Line<'static>> {
        if !settings.debug_mode {
            return Sidebar::lines(settings, last_request);
        }

        let mut lines = Sidebar::settings_lines(settings);
        lines.push(plain(""));
        lines.push(heading(REQUEST_HEADING));

        let free_rows = height.saturating_sub(rows_total(&lines, width));
        lines.extend(tail_to_fit(request_lines(last_request), width, free_rows.max(1)));
        return lines;
    }

    /// Usage notice and attribution as chat text, for terminals too narrow
    /// for the panel.
    pub fn notices_text() -> String {
        return format!("사용 정보\n{USAGE_NOTICE}\n\n개발자 정보\n{ATTRIBUTION}");
    }

    /// Last request payload as chat text, for terminals too narrow for the
    /// panel.
    pub fn request_text(last_request: Option<&str>) -> String {
        return format!(
            "{REQUEST_HEADING}\n{}",
            last_request.unwrap_or(NO_REQUEST_YET)
        );
    }

    pub fn widget(
        settings: &Settings,
        last_request: Option<&str>,
        area: Rect,
    ) -> Paragraph<'static> {
        // Borders plus one column of padding on each side.
        let width = usize::from(area.width.saturating_sub(4));
        let height = usize::from(area.height.saturating_sub(2));

        return Paragraph::new(Sidebar::lines_to_fit(settings, last_request, width, height))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .padding(Padding::new(1, 1, 0, 0)),
            )
            .wrap(Wrap { trim: false });
    }
}
