use std::path::PathBuf;

use super::types::SessionId;

/// Lệnh UI gửi xuống assistant worker.
#[derive(Debug, Clone)]
pub enum AssistantCommand {
    /// Người dùng gửi câu hỏi dạng text.
    Ask { session_id: SessionId, text: String },
    /// Người dùng đính kèm ảnh cây trồng để phân tích.
    AnalyzeImage {
        session_id: SessionId,
        path: PathBuf,
    },
    /// Bắt đầu ghi âm (giả lập), kết quả trả về là câu đã nhận dạng.
    StartVoiceCapture { session_id: SessionId },
}
