use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/kri_sahaay.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Độ trễ giả lập trước khi assistant trả lời câu hỏi text
    pub reply_delay_ms: u64,
    pub image_reply_delay_ms: u64,
    /// Thời gian "ghi âm" trước khi trả về câu đã nhận dạng
    pub voice_capture_ms: u64,
    pub min_phone_digits: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            image_reply_delay_ms: 1500,
            voice_capture_ms: 2000,
            min_phone_digits: 10,
        }
    }
}

impl AppConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn image_reply_delay(&self) -> Duration {
        Duration::from_millis(self.image_reply_delay_ms)
    }

    pub fn voice_capture_delay(&self) -> Duration {
        Duration::from_millis(self.voice_capture_ms)
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}
