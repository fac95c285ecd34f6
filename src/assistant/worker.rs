use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::common::{AssistantCommand, AssistantEvent, ChatMessage, SessionId};
use crate::config::AppConfig;

use super::responder::Responder;

/// Tầng "backend" giả lập: nhận lệnh từ UI, trả lời sau một độ trễ cố định.
pub struct AssistantWorker {
    event_sender: mpsc::Sender<AssistantEvent>,
    command_receiver: mpsc::Receiver<AssistantCommand>,
    responder: Arc<dyn Responder>,
    config: AppConfig,
}

impl AssistantWorker {
    pub fn new(
        event_sender: mpsc::Sender<AssistantEvent>,
        command_receiver: mpsc::Receiver<AssistantCommand>,
        responder: Arc<dyn Responder>,
        config: AppConfig,
    ) -> Self {
        Self {
            event_sender,
            command_receiver,
            responder,
            config,
        }
    }

    pub async fn run(mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        log::info!(
            "Assistant worker started (reply delay {} ms)",
            self.config.reply_delay_ms
        );

        while let Some(command) = self.command_receiver.recv().await {
            self.handle_command(command);
        }

        log::info!("Command channel closed; assistant worker stopping");
        Ok(())
    }

    // Mỗi lệnh chạy trong task riêng: gửi liên tiếp sẽ nhận nhiều câu trả lời độc lập,
    // không gộp và không huỷ.
    fn handle_command(&self, command: AssistantCommand) {
        let responder = Arc::clone(&self.responder);
        match command {
            AssistantCommand::Ask { session_id, text } => {
                log::debug!("Ask from session {session_id}: {text}");
                self.reply_later(session_id, self.config.reply_delay(), move || {
                    responder.reply(&text)
                });
            }
            AssistantCommand::AnalyzeImage { session_id, path } => {
                log::debug!("Image from session {session_id}: {}", path.display());
                self.reply_later(session_id, self.config.image_reply_delay(), move || {
                    responder.analyze_image(&path)
                });
            }
            AssistantCommand::StartVoiceCapture { session_id } => {
                let sender = self.event_sender.clone();
                let delay = self.config.voice_capture_delay();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let transcript = responder.transcribe();
                    if let Err(err) = sender
                        .send(AssistantEvent::VoiceTranscribed {
                            session_id,
                            text: transcript,
                        })
                        .await
                    {
                        log::warn!("Failed to deliver voice transcript to UI: {err}");
                    }
                });
            }
        }
    }

    fn reply_later<F>(&self, session_id: SessionId, delay: Duration, answer: F)
    where
        F: FnOnce() -> String + Send + 'static,
    {
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let message = ChatMessage::assistant(answer());
            if let Err(err) = sender
                .send(AssistantEvent::Reply {
                    session_id,
                    message,
                })
                .await
            {
                log::warn!("Failed to deliver reply to UI: {err}");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use uuid::Uuid;

    use super::*;
    use crate::assistant::responder::{
        CannedResponder, Category, IMAGE_DIAGNOSIS, VOICE_TRANSCRIPT,
    };
    use crate::common::Role;

    fn fast_config() -> AppConfig {
        AppConfig {
            reply_delay_ms: 5,
            image_reply_delay_ms: 5,
            voice_capture_ms: 5,
            ..AppConfig::default()
        }
    }

    fn spawn_worker() -> (
        mpsc::Sender<AssistantCommand>,
        mpsc::Receiver<AssistantEvent>,
        tokio::task::JoinHandle<()>,
    ) {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (event_tx, event_rx) = mpsc::channel(16);
        let worker = AssistantWorker::new(
            event_tx,
            cmd_rx,
            Arc::new(CannedResponder),
            fast_config(),
        );
        let handle = tokio::spawn(async move {
            worker.run().await.expect("worker should stop cleanly");
        });
        (cmd_tx, event_rx, handle)
    }

    #[tokio::test]
    async fn ask_is_answered_for_the_same_session() {
        let (cmd_tx, mut event_rx, _handle) = spawn_worker();
        let session_id = Uuid::new_v4();

        cmd_tx
            .send(AssistantCommand::Ask {
                session_id,
                text: "How is my soil?".to_string(),
            })
            .await
            .unwrap();

        match event_rx.recv().await {
            Some(AssistantEvent::Reply {
                session_id: replied,
                message,
            }) => {
                assert_eq!(replied, session_id);
                assert_eq!(message.role, Role::Assistant);
                assert_eq!(message.content, Category::Soil.response());
                assert!(message.image.is_none());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn image_gets_canned_diagnosis() {
        let (cmd_tx, mut event_rx, _handle) = spawn_worker();
        let session_id = Uuid::new_v4();

        cmd_tx
            .send(AssistantCommand::AnalyzeImage {
                session_id,
                path: PathBuf::from("field.jpg"),
            })
            .await
            .unwrap();

        match event_rx.recv().await {
            Some(AssistantEvent::Reply { message, .. }) => {
                assert_eq!(message.content, IMAGE_DIAGNOSIS);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn voice_capture_yields_transcript() {
        let (cmd_tx, mut event_rx, _handle) = spawn_worker();

        let session_id = Uuid::new_v4();

        cmd_tx
            .send(AssistantCommand::StartVoiceCapture { session_id })
            .await
            .unwrap();

        match event_rx.recv().await {
            Some(AssistantEvent::VoiceTranscribed {
                session_id: replied,
                text,
            }) => {
                assert_eq!(replied, session_id);
                assert_eq!(text, VOICE_TRANSCRIPT);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn overlapping_asks_each_get_a_reply() {
        let (cmd_tx, mut event_rx, _handle) = spawn_worker();
        let session_id = Uuid::new_v4();

        for text in ["weather?", "weather?"] {
            cmd_tx
                .send(AssistantCommand::Ask {
                    session_id,
                    text: text.to_string(),
                })
                .await
                .unwrap();
        }

        for _ in 0..2 {
            assert!(matches!(
                event_rx.recv().await,
                Some(AssistantEvent::Reply { .. })
            ));
        }
    }

    #[tokio::test]
    async fn worker_stops_when_commands_close() {
        let (cmd_tx, _event_rx, handle) = spawn_worker();
        drop(cmd_tx);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("worker should exit")
            .unwrap();
    }
}
