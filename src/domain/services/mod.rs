pub mod actions;
mod app_state;
mod bubble_list;
mod conversation;
pub mod events;
mod links;
mod roles;
mod scroll;

pub use app_state::*;
pub use bubble_list::*;
pub use conversation::*;
pub use links::*;
pub use roles::*;
pub use scroll::*;
