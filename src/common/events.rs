use crate::common::types::{ChatMessage, SessionId};

/// Sự kiện từ assistant worker gửi lên UI.
#[derive(Debug, Clone)]
pub enum AssistantEvent {
    Reply {
        session_id: SessionId,
        message: ChatMessage,
    },
    VoiceTranscribed { session_id: SessionId, text: String },
}
