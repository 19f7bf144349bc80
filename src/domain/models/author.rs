use std::fmt;

use super::Role;
use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
    App,
}

impl From<Role> for Author {
    fn from(role: Role) -> Author {
        match role {
            Role::User => return Author::User,
            Role::Assistant => return Author::Assistant,
            Role::System => return Author::App,
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Author::User => return write!(f, "{}", Config::get(ConfigKey::Username)),
            Author::Assistant => return write!(f, "강릉원주대 챗봇"),
            Author::App => return write!(f, "campus-chat"),
        }
    }
}
