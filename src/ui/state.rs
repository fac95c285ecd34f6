use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::assistant::responder::GREETING;
use crate::auth::{LoginError, LoginMethod, validate_login};
use crate::common::{AssistantEvent, ChatMessage, SessionId};

pub const IMAGE_UPLOAD_TEXT: &str = "Uploaded an image for analysis";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
    Chat,
    Market,
    Profile,
    /// Route chưa có màn hình tương ứng
    NotFound(&'static str),
}

impl Screen {
    pub fn from_route(route: &'static str) -> Self {
        match route {
            "/" => Screen::Login,
            "/home" => Screen::Home,
            "/chat" => Screen::Chat,
            "/market" => Screen::Market,
            "/profile" => Screen::Profile,
            other => Screen::NotFound(other),
        }
    }

    pub fn shows_bottom_nav(self) -> bool {
        !matches!(self, Screen::Login | Screen::Chat)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("Choose an image file first")]
    Empty,
    #[error("File not found: {0}")]
    NotFound(PathBuf),
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub method: LoginMethod,
    pub phone: String,
    pub email: String,
    pub error: Option<LoginError>,
}

impl LoginForm {
    pub fn value(&self) -> &str {
        match self.method {
            LoginMethod::Phone => &self.phone,
            LoginMethod::Email => &self.email,
        }
    }

    pub fn submit(&mut self, min_phone_digits: usize) -> bool {
        match validate_login(self.method, self.value(), min_phone_digits) {
            Ok(()) => {
                self.error = None;
                true
            }
            Err(err) => {
                log::debug!("Login rejected: {err}");
                self.error = Some(err);
                false
            }
        }
    }
}

/// Một lần mở màn hình chat. Danh sách tin nhắn chỉ được nối thêm, bị bỏ khi rời màn hình.
pub struct ChatSession {
    pub id: SessionId,
    messages: Vec<ChatMessage>,
    pub input_text: String,
    pub is_recording: bool,
    pub attachment_open: bool,
    pub attachment_path: String,
    pub attachment_error: Option<AttachmentError>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: vec![ChatMessage::assistant(GREETING)],
            input_text: String::new(),
            is_recording: false,
            attachment_open: false,
            attachment_path: String::new(),
            attachment_error: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Trả về text cần gửi cho assistant, `None` nếu ô nhập trống.
    pub fn submit_input(&mut self) -> Option<String> {
        if self.input_text.trim().is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.input_text);
        self.messages.push(ChatMessage::user(text.clone()));
        Some(text)
    }

    pub fn attach_image(&mut self, path: &Path) -> Result<PathBuf, AttachmentError> {
        if path.as_os_str().is_empty() {
            return Err(AttachmentError::Empty);
        }
        if !path.is_file() {
            return Err(AttachmentError::NotFound(path.to_path_buf()));
        }

        let path = path.to_path_buf();
        self.messages
            .push(ChatMessage::user(IMAGE_UPLOAD_TEXT).with_image(path.clone()));
        Ok(path)
    }

    /// `true` khi cần bắt đầu ghi âm mới.
    pub fn toggle_recording(&mut self) -> bool {
        self.is_recording = !self.is_recording;
        self.is_recording
    }

    /// Kết quả ghi âm của session cũ bị bỏ qua.
    pub fn apply_transcript(&mut self, session_id: SessionId, text: String) -> bool {
        if session_id != self.id {
            log::debug!("Dropping transcript for stale session {session_id}");
            return false;
        }
        self.is_recording = false;
        self.input_text = text;
        true
    }

    /// Câu trả lời của session cũ bị bỏ qua.
    pub fn accept_reply(&mut self, session_id: SessionId, message: ChatMessage) -> bool {
        if session_id != self.id {
            log::debug!("Dropping reply for stale session {session_id}");
            return false;
        }
        self.messages.push(message);
        true
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Trạng thái cục bộ của UI.
pub struct AppState {
    pub screen: Screen,
    pub login: LoginForm,
    pub chat: Option<ChatSession>,
    pub market_search: String,
    pub help_open: bool,
    pub min_phone_digits: usize,
}

impl AppState {
    pub fn new(min_phone_digits: usize) -> Self {
        Self {
            screen: Screen::Login,
            login: LoginForm::default(),
            chat: None,
            market_search: String::new(),
            help_open: false,
            min_phone_digits,
        }
    }

    pub fn navigate(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        log::debug!("Navigate {:?} -> {:?}", self.screen, screen);

        match self.screen {
            Screen::Chat => self.chat = None,
            Screen::Market => self.market_search.clear(),
            _ => {}
        }
        if screen == Screen::Chat {
            self.chat = Some(ChatSession::new());
        }
        self.screen = screen;
    }

    pub fn navigate_route(&mut self, route: &'static str) {
        self.navigate(Screen::from_route(route));
    }

    /// Chuyển sự kiện từ assistant vào session chat đang mở, nếu đúng session.
    pub fn apply_event(&mut self, event: AssistantEvent) -> bool {
        let Some(session) = self.chat.as_mut() else {
            log::debug!("Chat screen closed; dropping assistant event");
            return false;
        };
        match event {
            AssistantEvent::Reply {
                session_id,
                message,
            } => session.accept_reply(session_id, message),
            AssistantEvent::VoiceTranscribed { session_id, text } => {
                session.apply_transcript(session_id, text)
            }
        }
    }

    pub fn try_login(&mut self) -> bool {
        let accepted = self.login.submit(self.min_phone_digits);
        if accepted {
            log::info!("Logged in with {}", self.login.method.label());
            self.navigate(Screen::Home);
        }
        accepted
    }

    pub fn logout(&mut self) {
        self.login = LoginForm::default();
        self.market_search.clear();
        self.navigate(Screen::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::responder::VOICE_TRANSCRIPT;
    use crate::common::Role;

    #[test]
    fn new_session_starts_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.messages()[0].content, GREETING);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = ChatSession::new();
        session.input_text = "   ".to_string();

        assert_eq!(session.submit_input(), None);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.input_text, "   ");
    }

    #[test]
    fn submit_appends_user_message_and_clears_input() {
        let mut session = ChatSession::new();
        session.input_text = "How is my soil?".to_string();

        assert_eq!(session.submit_input().as_deref(), Some("How is my soil?"));
        assert!(session.input_text.is_empty());
        let last = session.messages().last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.content, "How is my soil?");
    }

    #[test]
    fn messages_keep_send_order() {
        let mut session = ChatSession::new();
        for text in ["first", "second"] {
            session.input_text = text.to_string();
            session.submit_input();
        }
        let reply = ChatMessage::assistant("answer");
        assert!(session.accept_reply(session.id, reply));

        let contents: Vec<&str> = session.messages()[1..]
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "second", "answer"]);
    }

    #[test]
    fn stale_replies_are_dropped() {
        let mut session = ChatSession::new();
        assert!(!session.accept_reply(Uuid::new_v4(), ChatMessage::assistant("late")));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn missing_attachment_is_rejected() {
        let mut session = ChatSession::new();
        assert_eq!(session.attach_image(Path::new("")), Err(AttachmentError::Empty));

        let missing = std::env::temp_dir().join(format!("{}.jpg", Uuid::new_v4()));
        assert_eq!(
            session.attach_image(&missing),
            Err(AttachmentError::NotFound(missing.clone()))
        );
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn existing_attachment_appends_image_message() {
        let path = std::env::temp_dir().join(format!("{}.jpg", Uuid::new_v4()));
        std::fs::write(&path, b"jpeg").unwrap();

        let mut session = ChatSession::new();
        assert_eq!(session.attach_image(&path), Ok(path.clone()));
        let last = session.messages().last().unwrap();
        assert_eq!(last.content, IMAGE_UPLOAD_TEXT);
        assert_eq!(last.image.as_deref(), Some(path.as_path()));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn recording_toggle_and_transcript() {
        let mut session = ChatSession::new();
        assert!(session.toggle_recording());
        assert!(!session.toggle_recording());

        session.toggle_recording();
        assert!(session.apply_transcript(session.id, VOICE_TRANSCRIPT.to_string()));
        assert!(!session.is_recording);
        assert_eq!(session.input_text, VOICE_TRANSCRIPT);
    }

    #[test]
    fn stale_transcript_is_dropped() {
        let mut session = ChatSession::new();
        session.input_text = "typed".to_string();

        assert!(!session.apply_transcript(Uuid::new_v4(), VOICE_TRANSCRIPT.to_string()));
        assert_eq!(session.input_text, "typed");
        assert!(!session.is_recording);
    }

    fn open_chat(state: &mut AppState) -> SessionId {
        state.navigate(Screen::Chat);
        state.chat.as_ref().unwrap().id
    }

    #[test]
    fn events_after_leaving_chat_are_dropped() {
        let mut state = AppState::new(10);
        let old_id = open_chat(&mut state);
        state.navigate(Screen::Home);

        assert!(!state.apply_event(AssistantEvent::Reply {
            session_id: old_id,
            message: ChatMessage::assistant("late"),
        }));
        assert!(!state.apply_event(AssistantEvent::VoiceTranscribed {
            session_id: old_id,
            text: VOICE_TRANSCRIPT.to_string(),
        }));
        assert!(state.chat.is_none());
    }

    #[test]
    fn events_for_previous_visit_do_not_reach_new_session() {
        let mut state = AppState::new(10);
        let old_id = open_chat(&mut state);
        state.chat.as_mut().unwrap().toggle_recording();
        state.navigate(Screen::Home);
        let new_id = open_chat(&mut state);

        assert!(!state.apply_event(AssistantEvent::Reply {
            session_id: old_id,
            message: ChatMessage::assistant("late"),
        }));
        assert!(!state.apply_event(AssistantEvent::VoiceTranscribed {
            session_id: old_id,
            text: VOICE_TRANSCRIPT.to_string(),
        }));

        let session = state.chat.as_ref().unwrap();
        assert_eq!(session.id, new_id);
        assert_eq!(session.messages().len(), 1);
        assert!(session.input_text.is_empty());
        assert!(!session.is_recording);
    }

    #[test]
    fn events_for_current_session_are_applied() {
        let mut state = AppState::new(10);
        let id = open_chat(&mut state);

        assert!(state.apply_event(AssistantEvent::Reply {
            session_id: id,
            message: ChatMessage::assistant("fresh"),
        }));
        assert!(state.apply_event(AssistantEvent::VoiceTranscribed {
            session_id: id,
            text: VOICE_TRANSCRIPT.to_string(),
        }));

        let session = state.chat.as_ref().unwrap();
        assert_eq!(session.messages().last().unwrap().content, "fresh");
        assert_eq!(session.input_text, VOICE_TRANSCRIPT);
    }

    #[test]
    fn market_search_resets_on_each_visit() {
        let mut state = AppState::new(10);
        state.navigate(Screen::Market);
        state.market_search = "rice".to_string();

        state.navigate(Screen::Home);
        assert!(state.market_search.is_empty());
    }

    #[test]
    fn leaving_chat_discards_session() {
        let mut state = AppState::new(10);
        state.navigate(Screen::Chat);
        let first_id = state.chat.as_ref().unwrap().id;

        state.navigate(Screen::Home);
        assert!(state.chat.is_none());

        state.navigate(Screen::Chat);
        assert_ne!(state.chat.as_ref().unwrap().id, first_id);
    }

    #[test]
    fn login_moves_to_home_only_when_valid() {
        let mut state = AppState::new(10);
        state.login.phone = "12345".to_string();
        assert!(!state.try_login());
        assert_eq!(state.screen, Screen::Login);
        assert!(state.login.error.is_some());

        state.login.method = LoginMethod::Email;
        state.login.email = "farmer@example.com".to_string();
        assert!(state.try_login());
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn logout_clears_form() {
        let mut state = AppState::new(10);
        state.login.phone = "9876543210".to_string();
        state.try_login();

        state.logout();
        assert_eq!(state.screen, Screen::Login);
        assert!(state.login.phone.is_empty());
    }

    #[test]
    fn unknown_routes_resolve_to_not_found() {
        assert_eq!(Screen::from_route("/market"), Screen::Market);
        assert_eq!(Screen::from_route("/alerts"), Screen::NotFound("/alerts"));
        assert!(!Screen::Chat.shows_bottom_nav());
        assert!(Screen::Home.shows_bottom_nav());
    }
}
