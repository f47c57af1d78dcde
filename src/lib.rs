// src/lib.rs

pub mod api;
pub mod chat_message;
pub mod chat_view;
pub mod chat_widget;
pub mod config;
pub mod constants;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod status_indicator;
pub mod transcript;

pub use chat_message::{ChatMessage, Sender};
pub use chat_widget::ChatWidget;
pub use errors::{ObrolanError, ObrolanResult};
