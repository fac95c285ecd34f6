pub mod commands;
pub mod events;
pub mod types;

pub use commands::AssistantCommand;
pub use events::AssistantEvent;
pub use types::{ChatMessage, Role, SessionId};
