#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single conversation turn, in the shape the chat completions API expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Message {
        return Message {
            role,
            content: sanitize(content),
        };
    }

    pub fn system(content: &str) -> Message {
        return Message::new(Role::System, content);
    }

    pub fn user(content: &str) -> Message {
        return Message::new(Role::User, content);
    }

    pub fn assistant(content: &str) -> Message {
        return Message::new(Role::Assistant, content);
    }
}

/// Strips anything the terminal could interpret as a control sequence. Tabs are
/// expanded so bubble widths stay predictable.
pub fn sanitize(text: &str) -> String {
    return text
        .replace('\t', "  ")
        .chars()
        .filter(|c| return *c == '\n' || !c.is_control())
        .collect();
}
