use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Ai là người viết tin nhắn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// Domain model đại diện một tin nhắn chat.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Ảnh người dùng đính kèm (chỉ là đường dẫn, không đọc nội dung)
    pub image: Option<PathBuf>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            image: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn with_image(mut self, path: PathBuf) -> Self {
        self.image = Some(path);
        self
    }
}

/// Định danh một lần mở màn hình chat.
pub type SessionId = Uuid;
