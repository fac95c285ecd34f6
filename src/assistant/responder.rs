use std::path::Path;

pub const GREETING: &str = "Hello! I'm your AgriSmart AI assistant. I can help you with crop recommendations, weather advice, and market insights. How can I help you today?";

pub const IMAGE_DIAGNOSIS: &str = "I can see your crop image. The plants look healthy with good green color. I notice some minor leaf spotting which might indicate early nutrient deficiency. Consider applying nitrogen-rich fertilizer. Monitor for 1 week.";

pub const VOICE_TRANSCRIPT: &str = "What crops should I plant this season?";

/// Chủ đề tư vấn mà câu hỏi được chuyển tới.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Weather,
    Crop,
    Market,
    Soil,
    Fallback,
}

/// Xét từ trên xuống; chủ đề đầu tiên có từ khoá khớp sẽ được chọn.
const TRIGGERS: &[(Category, &[&str])] = &[
    (Category::Weather, &["weather"]),
    (Category::Crop, &["crop", "plant"]),
    (Category::Market, &["market", "price"]),
    (Category::Soil, &["soil"]),
];

impl Category {
    pub fn response(self) -> &'static str {
        match self {
            Category::Weather => {
                "Based on current weather data, expect partly cloudy conditions with 28°C temperature. Humidity is at 65%. Good conditions for most crops. Would you like specific advice for your crops?"
            }
            Category::Crop => {
                "For your region and current season, I recommend Rice (95% match) or Wheat (88% match). These crops suit your soil type and climate conditions. Would you like detailed planting guidance?"
            }
            Category::Market => {
                "Current market rates: Rice ₹2,150/quintal (+5%), Wheat ₹2,025/quintal (+3%). Prices are trending upward. Good time to sell rice. Need specific crop pricing?"
            }
            Category::Soil => {
                "Your soil analysis shows pH 6.8 (optimal), good nitrogen levels, moderate phosphorus. Perfect for cereal crops. Consider organic fertilizer for better yield. Want soil improvement tips?"
            }
            Category::Fallback => {
                "I understand you need farming advice. I can help with crops, weather, market prices, soil analysis, and more. Could you be more specific about what you'd like to know?"
            }
        }
    }
}

pub fn classify(input: &str) -> Category {
    let input = input.to_lowercase();
    TRIGGERS
        .iter()
        .find(|(_, words)| words.iter().any(|word| input.contains(word)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Fallback)
}

pub fn select_response(input: &str) -> &'static str {
    classify(input).response()
}

/// Nguồn câu trả lời của assistant. Thay implementation này để nối với dịch vụ thật.
pub trait Responder: Send + Sync {
    fn reply(&self, text: &str) -> String;
    fn analyze_image(&self, path: &Path) -> String;
    fn transcribe(&self) -> String;
}

/// Câu trả lời soạn sẵn, không có AI thật phía sau.
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedResponder;

impl Responder for CannedResponder {
    fn reply(&self, text: &str) -> String {
        select_response(text).to_string()
    }

    fn analyze_image(&self, path: &Path) -> String {
        log::debug!("Pretending to analyze {}", path.display());
        IMAGE_DIAGNOSIS.to_string()
    }

    fn transcribe(&self) -> String {
        VOICE_TRANSCRIPT.to_string()
    }
}
