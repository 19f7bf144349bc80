use ratatui::text::Line;

use super::Sidebar;
use super::ATTRIBUTION;
use super::USAGE_NOTICE;
use crate::domain::models::ModelName;
use crate::domain::models::Settings;

fn texts(lines: Vec<Line<'static>>) -> Vec<String> {
    return lines
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| return span.content.to_string())
                .collect::<String>();
        })
        .collect();
}

#[test]
fn it_shows_settings_and_notices() {
    let settings = Settings::new(ModelName::Sonar);
    let lines = texts(Sidebar::lines(&settings, None));

    assert_eq!(lines[0], "챗봇 설정");
    assert!(lines.contains(&"모델: sonar".to_string()));
    assert!(lines.contains(&"디버그 모드: 꺼짐".to_string()));
    assert!(lines.contains(&USAGE_NOTICE.to_string()));
    assert!(lines.contains(&ATTRIBUTION.to_string()));
}

#[test]
fn it_hides_the_request_when_debug_is_off() {
    let settings = Settings::default();
    let lines = texts(Sidebar::lines(&settings, Some("{\n  \"model\": \"sonar-pro\"\n}")));

    assert!(!lines.contains(&"API 요청 데이터".to_string()));
    assert!(!lines.iter().any(|line| return line.contains("\"model\"")));
}

#[test]
fn it_shows_the_request_when_debug_is_on() {
    let mut settings = Settings::default();
    settings.toggle_debug();
    let lines = texts(Sidebar::lines(&settings, Some("{\n  \"model\": \"sonar-pro\"\n}")));

    assert!(lines.contains(&"디버그 모드: 켜짐".to_string()));
    assert!(lines.contains(&"API 요청 데이터".to_string()));
    assert_eq!(lines.last().unwrap(), "}");
    assert!(lines.contains(&"  \"model\": \"sonar-pro\"".to_string()));
}

#[test]
fn it_notes_when_no_request_was_sent() {
    let mut settings = Settings::default();
    settings.toggle_debug();
    let lines = texts(Sidebar::lines(&settings, None));

    assert_eq!(lines.last().unwrap(), "아직 보낸 요청이 없습니다.");
}

#[test]
fn it_keeps_the_tail_of_long_requests() {
    let mut settings = Settings::default();
    settings.toggle_debug();
    let request = (0..200)
        .map(|idx| return format!("line {idx}"))
        .collect::<Vec<String>>()
        .join("\n");

    let lines = texts(Sidebar::lines_to_fit(&settings, Some(&request), 30, 40));

    // The notice and attribution wrap to two rows each at this width.
    assert_eq!(lines.len(), 38);
    assert_eq!(lines[0], "챗봇 설정");
    assert_eq!(lines[18], "API 요청 데이터");
    assert_eq!(lines[19], "…");
    assert_eq!(lines[20], "line 182");
    assert_eq!(lines.last().unwrap(), "line 199");
}

#[test]
fn it_leaves_short_requests_untouched() {
    let mut settings = Settings::default();
    settings.toggle_debug();
    let request = "{\n  \"model\": \"sonar-pro\"\n}";

    assert_eq!(
        texts(Sidebar::lines_to_fit(&settings, Some(request), 30, 40)),
        texts(Sidebar::lines(&settings, Some(request)))
    );
}

#[test]
fn it_formats_panel_text_for_the_chat() {
    assert_eq!(
        Sidebar::request_text(Some("{}")),
        "API 요청 데이터\n{}"
    );
    assert!(Sidebar::notices_text().contains(USAGE_NOTICE));
    assert!(Sidebar::notices_text().ends_with(ATTRIBUTION));
}
