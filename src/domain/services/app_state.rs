#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;

use super::actions::help_text;
use super::render_links;
use super::BubbleList;
use super::Conversation;
use super::Scroll;
use super::GREETING;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendResponse;
use crate::domain::models::Entry;
use crate::domain::models::EntryKind;
use crate::domain::models::Message;
use crate::domain::models::ModelName;
use crate::domain::models::Settings;
use crate::domain::models::Sidebar;
use crate::domain::models::SlashCommand;
use crate::domain::models::THINKING_TEXT;

pub struct AppState {
    pub bubble_list: BubbleList,
    pub conversation: Conversation,
    pub entries: Vec<Entry>,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub last_request: Option<String>,
    pub scroll: Scroll,
    pub settings: Settings,
    /// False when the terminal is too narrow for the side panel. Notices and
    /// the debug payload are then posted in the chat instead.
    pub sidebar_visible: bool,
    pub waiting_for_backend: bool,
}

impl AppState {
    pub fn new(model: ModelName) -> AppState {
        return AppState {
            bubble_list: BubbleList::default(),
            conversation: Conversation::default(),
            entries: vec![Entry::new(Author::Assistant, GREETING)],
            last_known_height: 0,
            last_known_width: 0,
            last_request: None,
            scroll: Scroll::default(),
            settings: Settings::new(model),
            sidebar_visible: true,
            waiting_for_backend: false,
        };
    }

    /// Handles a line entered in the prompt. Returns true when the app should
    /// exit.
    pub fn submit(&mut self, input: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        let input = input.trim();
        if input.is_empty() || self.waiting_for_backend {
            return Ok(false);
        }

        let (should_break, should_continue) = self.handle_slash_commands(input);
        if should_break || should_continue {
            return Ok(should_break);
        }

        self.conversation.push(Message::user(input));
        self.add_entry(Entry::new(Author::User, input));
        self.add_entry(Entry::new_with_kind(
            Author::Assistant,
            EntryKind::Pending,
            THINKING_TEXT,
        ));
        self.waiting_for_backend = true;

        tracing::debug!(
            model = %self.settings.model,
            messages = self.conversation.len(),
            "submitting question"
        );
        tx.send(Action::BackendRequest(BackendPrompt::new(
            self.conversation.messages().to_vec(),
            self.settings.model,
        )))?;

        return Ok(false);
    }

    /// Returns `(should_break, should_continue)`. `should_continue` means the
    /// input was a command and must not be sent to the backend.
    pub fn handle_slash_commands(&mut self, input: &str) -> (bool, bool) {
        let command = match SlashCommand::parse(input) {
            Some(command) => command,
            None => return (false, false),
        };

        if command.is_quit() {
            return (true, false);
        }

        if command.is_reset() {
            self.reset();
            return (false, true);
        }

        if command.is_debug() {
            if !self.settings.toggle_debug() {
                self.add_entry(Entry::new(Author::App, "디버그 모드가 꺼졌습니다."));
            } else if self.sidebar_visible {
                self.add_entry(Entry::new(
                    Author::App,
                    "디버그 모드가 켜졌습니다. 옆 패널에서 API 요청 데이터를 확인할 수 있습니다.",
                ));
            } else {
                self.add_entry(Entry::new(
                    Author::App,
                    "디버그 모드가 켜졌습니다. 답변이 올 때마다 API 요청 데이터를 대화창에 표시합니다.",
                ));
                self.add_entry(Entry::new(
                    Author::App,
                    &Sidebar::request_text(self.last_request.as_deref()),
                ));
            }
            return (false, true);
        }

        if command.is_model_list() {
            let text = ModelName::iter()
                .enumerate()
                .map(|(idx, model)| {
                    let n = idx + 1;
                    if model == self.settings.model {
                        return format!("- ({n}) {model} (사용 중)");
                    }
                    return format!("- ({n}) {model}");
                })
                .collect::<Vec<String>>()
                .join("\n");
            self.add_entry(Entry::new(Author::App, &text));
            return (false, true);
        }

        if command.is_model_set() {
            self.model_set(&command.args);
            return (false, true);
        }

        if command.is_help() {
            self.add_entry(Entry::new(Author::App, &help_text()));
            if !self.sidebar_visible {
                self.add_entry(Entry::new(Author::App, &Sidebar::notices_text()));
            }
            return (false, true);
        }

        return (false, false);
    }

    fn model_set(&mut self, args: &[String]) {
        let arg = match args.first() {
            Some(arg) => arg,
            None => {
                self.add_entry(Entry::new_with_kind(
                    Author::App,
                    EntryKind::Error,
                    "`/model` 또는 `/m` 뒤에 모델 이름이나 번호를 입력하세요. 자세한 내용은 `/help`를 참고하세요.",
                ));
                return;
            }
        };

        match ModelName::resolve(arg) {
            Some(model) => {
                self.settings.model = model;
                tracing::debug!(model = %model, "model changed");
                self.add_entry(Entry::new(
                    Author::App,
                    &format!("모델이 {model}(으)로 변경되었습니다."),
                ));
            }
            None => {
                self.add_entry(Entry::new_with_kind(
                    Author::App,
                    EntryKind::Error,
                    &format!("{arg}은(는) 사용할 수 없는 모델입니다. `/modellist`로 목록을 확인하세요."),
                ));
            }
        }
    }

    pub fn reset(&mut self) {
        self.conversation.reset();
        self.entries = self
            .conversation
            .messages()
            .iter()
            .map(|message| return Entry::new(Author::from(message.role), &message.content))
            .collect();
        self.last_request = None;
        self.scroll.first();
        self.sync_dependants();
    }

    pub fn handle_backend_response(&mut self, msg: BackendResponse) {
        let text = msg.text();
        let entry = match &msg.result {
            Ok(answer) => Entry::new(msg.author, &render_links(answer)),
            Err(err) => {
                tracing::error!(kind = err.kind(), error = %err, "completion failed");
                Entry::new_with_kind(msg.author, EntryKind::Error, &text)
            }
        };

        let pending = self
            .entries
            .iter()
            .rposition(|entry| return entry.kind() == EntryKind::Pending);
        match pending {
            Some(idx) => {
                self.entries[idx] = entry;
            }
            None => {
                self.entries.push(entry);
            }
        }

        self.conversation.push(Message::assistant(&text));
        if msg.request.is_some() {
            self.last_request = msg.request;
        }
        self.waiting_for_backend = false;

        if self.settings.debug_mode && !self.sidebar_visible {
            self.entries.push(Entry::new(
                Author::App,
                &Sidebar::request_text(self.last_request.as_deref()),
            ));
        }

        self.sync_dependants();
        self.scroll.last();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
        self.sync_dependants();
        self.scroll.last();
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_entries(&self.entries, self.last_known_width);

        let lines_len = u16::try_from(self.bubble_list.len()).unwrap_or(u16::MAX);
        self.scroll.set_state(lines_len, self.last_known_height);

        if self.waiting_for_backend {
            self.scroll.last();
        }
    }
}
