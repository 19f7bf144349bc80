use super::display_width;
use super::Author;
use super::Entry;
use super::EntryKind;

#[test]
fn it_executes_new() {
    let entry = Entry::new(Author::App, "Hi there!");
    assert_eq!(entry.author, Author::App);
    assert_eq!(entry.author.to_string(), "campus-chat");
    assert_eq!(entry.text, "Hi there!".to_string());
    assert_eq!(entry.kind(), EntryKind::Normal);
}

#[test]
fn it_executes_new_replacing_tabs() {
    let entry = Entry::new(Author::App, "\t\tHi there!");
    assert_eq!(entry.text, "    Hi there!".to_string());
}

#[test]
fn it_executes_new_with_kind() {
    let entry = Entry::new_with_kind(Author::Assistant, EntryKind::Error, "It broke!");
    assert_eq!(entry.author, Author::Assistant);
    assert_eq!(entry.text, "It broke!".to_string());
    assert_eq!(entry.kind(), EntryKind::Error);
}

#[test]
fn it_wraps_lines_on_words() {
    let entry = Entry::new(Author::Assistant, "Hi there! This is long");
    assert_eq!(
        entry.as_string_lines(10),
        vec![
            "Hi there!".to_string(),
            "This is".to_string(),
            "long".to_string()
        ]
    );
}

#[test]
fn it_keeps_blank_lines() {
    let entry = Entry::new(Author::Assistant, "first\n\nsecond");
    assert_eq!(
        entry.as_string_lines(40),
        vec!["first".to_string(), " ".to_string(), "second".to_string()]
    );
}

#[test]
fn it_wraps_wide_characters() {
    let entry = Entry::new(Author::Assistant, "안녕하세요 반갑습니다");
    assert_eq!(
        entry.as_string_lines(12),
        vec!["안녕하세요".to_string(), "반갑습니다".to_string()]
    );
}

#[test]
fn it_splits_words_longer_than_the_line() {
    let entry = Entry::new(
        Author::Assistant,
        "https://www.gwnu.ac.kr/kr/7852/subview.do",
    );
    let lines = entry.as_string_lines(20);
    assert_eq!(
        lines,
        vec![
            "https://www.gwnu.ac.".to_string(),
            "kr/kr/7852/subview.d".to_string(),
            "o".to_string()
        ]
    );
    assert!(lines.iter().all(|line| return display_width(line) <= 20));
}

#[test]
fn it_measures_display_width() {
    assert_eq!(display_width("abc"), 3);
    assert_eq!(display_width("학교"), 4);
    assert_eq!(display_width("🏫 챗봇"), 7);
}

#[test]
fn it_measures_emoji_as_two_columns() {
    assert_eq!(display_width("✅"), 2);
    assert_eq!(display_width("🚀"), 2);
    assert_eq!(display_width("신청 완료 ✅ 🚀"), 14);
}
