#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use crate::domain::models::Message;
use crate::domain::models::Role;

pub const GREETING: &str = "안녕하세요! 국립강릉원주대학교에 관한 질문이 있으신가요?";

/// The history sent to the API for one chat session. Append-only; `reset` is
/// the only way to drop messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn seed() -> Message {
        return Message::new(Role::Assistant, GREETING);
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn len(&self) -> usize {
        return self.messages.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.messages.is_empty();
    }

    pub fn reset(&mut self) {
        self.messages.clear();
        self.messages.push(Conversation::seed());
    }
}
