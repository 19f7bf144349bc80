use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::SetTitle;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;
#[cfg(feature = "dev")]
use tui_textarea::Input;
#[cfg(feature = "dev")]
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Header;
use crate::domain::models::Loading;
use crate::domain::models::ModelName;
use crate::domain::models::Sidebar;
use crate::domain::models::TextArea;
use crate::domain::models::TITLE;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;

const SIDEBAR_MIN_TERMINAL_WIDTH: u16 = 90;
const SIDEBAR_WIDTH: u16 = 34;

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut textarea = TextArea::default();
    let loading = Loading::default();

    #[cfg(feature = "dev")]
    {
        let test_str = "국립강릉원주대학교 도서관 운영 시간과 홈페이지 주소를 알려주세요.";
        for char in test_str.chars() {
            textarea.input(Input {
                key: Key::Char(char),
                ctrl: false,
                alt: false,
            });
        }
    }

    loop {
        terminal.draw(|frame| {
            let screen = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Length(3), Constraint::Min(1)])
                .split(frame.size());

            frame.render_widget(Header::widget(), screen[0]);

            let mut columns = vec![Constraint::Min(1)];
            if screen[1].width >= SIDEBAR_MIN_TERMINAL_WIDTH {
                columns.push(Constraint::Length(SIDEBAR_WIDTH));
            }
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(columns)
                .split(screen[1]);
            app_state.sidebar_visible = body.len() > 1;

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Min(1), Constraint::Max(4)])
                .split(body[0]);

            if layout[0].width != app_state.last_known_width
                || layout[0].height != app_state.last_known_height
            {
                app_state.set_rect(layout[0]);
            }

            frame.render_widget(
                app_state.bubble_list.widget(app_state.scroll.position),
                layout[0],
            );
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                layout[0].inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );

            if app_state.waiting_for_backend {
                frame.render_widget(loading.widget(), layout[1]);
            } else {
                frame.render_widget(textarea.widget(), layout[1]);
            }

            if body.len() > 1 {
                frame.render_widget(
                    Sidebar::widget(
                        &app_state.settings,
                        app_state.last_request.as_deref(),
                        body[1],
                    ),
                    body[1],
                );
            }
        })?;

        match events.next().await? {
            Event::BackendPromptResponse(msg) => {
                app_state.handle_backend_response(msg);
            }
            Event::KeyboardCharInput(input) => {
                if !app_state.waiting_for_backend {
                    textarea.input(input);
                }
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardEnter() => {
                if app_state.waiting_for_backend {
                    continue;
                }

                let input_str = textarea.lines().join("\n");
                if input_str.trim().is_empty() {
                    continue;
                }

                textarea = TextArea::default();
                if app_state.submit(&input_str, &tx)? {
                    break;
                }
            }
            Event::KeyboardPaste(text) => {
                if app_state.waiting_for_backend {
                    continue;
                }

                for char in text.chars() {
                    match char {
                        '\n' => textarea.insert_newline(),
                        '\r' => (),
                        _ => textarea.insert_char(char),
                    }
                }
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UIResize() => (),
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        SetTitle(TITLE)
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let model = ModelName::resolve(&Config::get(ConfigKey::Model)).unwrap_or_default();
    let mut app_state = AppState::new(model);

    start_loop(&mut terminal, &mut app_state, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
