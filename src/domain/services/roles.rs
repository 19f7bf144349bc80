#[cfg(test)]
#[path = "roles_test.rs"]
mod tests;

use crate::domain::models::Message;
use crate::domain::models::Role;

/// The chat completions API rejects histories where two user or two assistant
/// turns follow each other. System messages always pass through and don't
/// break a run; for everything else only the first message of each run of the
/// same role is kept.
pub fn normalize_roles(messages: Vec<Message>) -> Vec<Message> {
    let mut prev_role: Option<Role> = None;

    return messages
        .into_iter()
        .filter(|message| {
            if message.role == Role::System {
                return true;
            }
            if prev_role == Some(message.role) {
                return false;
            }

            prev_role = Some(message.role);
            return true;
        })
        .collect();
}
