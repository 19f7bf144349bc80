use crossterm::event::Event as CrosstermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use tui_textarea::Input;
use tui_textarea::Key;

use super::key_event;
use super::terminal_event;
use crate::domain::models::Event;

fn input(key: Key, ctrl: bool, alt: bool) -> Input {
    return Input { key, ctrl, alt };
}

fn mouse(kind: MouseEventKind) -> CrosstermEvent {
    return CrosstermEvent::Mouse(MouseEvent {
        kind,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });
}

#[test]
fn it_submits_on_enter() {
    assert!(matches!(
        key_event(input(Key::Enter, false, false)),
        Event::KeyboardEnter()
    ));
}

#[test]
fn it_passes_alt_enter_to_the_prompt() {
    assert!(matches!(
        key_event(input(Key::Enter, false, true)),
        Event::KeyboardCharInput(Input {
            key: Key::Enter,
            ..
        })
    ));
}

#[test]
fn it_maps_ctrl_keys() {
    assert!(matches!(
        key_event(input(Key::Char('c'), true, false)),
        Event::KeyboardCTRLC()
    ));
    assert!(matches!(
        key_event(input(Key::Char('u'), true, false)),
        Event::UIScrollPageUp()
    ));
    assert!(matches!(
        key_event(input(Key::Char('d'), true, false)),
        Event::UIScrollPageDown()
    ));
}

#[test]
fn it_types_plain_characters() {
    assert!(matches!(
        key_event(input(Key::Char('d'), false, false)),
        Event::KeyboardCharInput(Input {
            key: Key::Char('d'),
            ..
        })
    ));
}

#[test]
fn it_maps_terminal_events() {
    assert!(matches!(
        terminal_event(CrosstermEvent::Key(KeyEvent::new(
            KeyCode::Up,
            KeyModifiers::NONE
        ))),
        Some(Event::UIScrollUp())
    ));
    assert!(matches!(
        terminal_event(CrosstermEvent::Paste("학번".to_string())),
        Some(Event::KeyboardPaste(text)) if text == "학번"
    ));
    assert!(matches!(
        terminal_event(CrosstermEvent::Resize(80, 24)),
        Some(Event::UIResize())
    ));
    assert!(matches!(
        terminal_event(mouse(MouseEventKind::ScrollDown)),
        Some(Event::UIScrollDown())
    ));
    assert!(terminal_event(mouse(MouseEventKind::Moved)).is_none());
    assert!(terminal_event(CrosstermEvent::FocusGained).is_none());
}
