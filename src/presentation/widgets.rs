pub mod avatar_preview;
pub mod chat_row;
pub mod fade;
pub mod large_title;
pub mod search_bar;
pub mod status_bar;
