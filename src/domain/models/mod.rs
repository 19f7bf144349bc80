mod action;
mod author;
mod backend;
mod bubble;
mod entry;
mod event;
mod header;
mod loading;
mod message;
mod settings;
mod sidebar;
mod slash_commands;
mod textarea;

pub use action::*;
pub use author::*;
pub use backend::*;
pub use bubble::*;
pub use entry::*;
pub use event::*;
pub use header::*;
pub use loading::*;
pub use message::*;
pub use settings::*;
pub use sidebar::*;
pub use slash_commands::*;
pub use textarea::*;
