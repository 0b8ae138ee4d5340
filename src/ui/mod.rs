pub mod messages;
pub mod terminal;
