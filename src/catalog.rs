//! Dữ liệu mẫu cố định hiển thị trên các màn hình. Không có nguồn dữ liệu thật.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherSnapshot {
    pub summary: &'static str,
    pub temperature_c: i32,
    pub humidity_pct: u8,
    pub wind_kmh: u8,
}

pub const WEATHER: WeatherSnapshot = WeatherSnapshot {
    summary: "Partly cloudy",
    temperature_c: 28,
    humidity_pct: 65,
    wind_kmh: 12,
};

pub const SOIL_PH: f32 = 6.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRecommendation {
    pub crop: &'static str,
    pub confidence_pct: u8,
    pub season: &'static str,
}

pub const RECOMMENDATIONS: &[CropRecommendation] = &[
    CropRecommendation {
        crop: "Rice",
        confidence_pct: 95,
        season: "Kharif",
    },
    CropRecommendation {
        crop: "Wheat",
        confidence_pct: 88,
        season: "Rabi",
    },
    CropRecommendation {
        crop: "Maize",
        confidence_pct: 82,
        season: "Both",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Giá một loại nông sản tại một chợ đầu mối (mandi), tính theo quintal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketQuote {
    pub crop: &'static str,
    pub price_per_quintal: u32,
    pub change_pct: f32,
    pub volume_tons: u32,
    pub mandi: &'static str,
}

impl MarketQuote {
    pub fn trend(&self) -> Trend {
        if self.change_pct >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn price_label(&self) -> String {
        format_rupees(self.price_per_quintal)
    }

    pub fn change_label(&self) -> String {
        format!("{:+}%", self.change_pct)
    }

    pub fn volume_label(&self) -> String {
        format!("{} tons", group_digits(self.volume_tons))
    }
}

pub const MARKET_QUOTES: &[MarketQuote] = &[
    MarketQuote {
        crop: "Rice",
        price_per_quintal: 2150,
        change_pct: 5.0,
        volume_tons: 2345,
        mandi: "Muzaffarnagar Mandi",
    },
    MarketQuote {
        crop: "Wheat",
        price_per_quintal: 2025,
        change_pct: 3.0,
        volume_tons: 1876,
        mandi: "Shamli Mandi",
    },
    MarketQuote {
        crop: "Sugarcane",
        price_per_quintal: 350,
        change_pct: -2.0,
        volume_tons: 5678,
        mandi: "Baghpat Mandi",
    },
    MarketQuote {
        crop: "Onion",
        price_per_quintal: 3200,
        change_pct: -8.0,
        volume_tons: 892,
        mandi: "Saharanpur Mandi",
    },
    MarketQuote {
        crop: "Potato",
        price_per_quintal: 1850,
        change_pct: 12.0,
        volume_tons: 1234,
        mandi: "Meerut Mandi",
    },
    MarketQuote {
        crop: "Mustard",
        price_per_quintal: 5450,
        change_pct: 7.0,
        volume_tons: 456,
        mandi: "Muzaffarnagar Mandi",
    },
];

/// Các loại hiển thị ở thẻ "Market Insights" trên trang chủ.
pub const HOME_MARKET_CROPS: &[&str] = &["Rice", "Wheat", "Onion"];

pub const MARKET_INSIGHTS: &[(&str, &str)] = &[
    ("🌾 Rice prices", "are up 5% due to good export demand"),
    ("🥔 Potato prices", "surged 12% after supply shortage reports"),
    ("🧅 Onion prices", "dropped 8% following increased arrivals"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FarmerProfile {
    pub name: &'static str,
    pub initials: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub farm_acres: f32,
    pub main_crop: &'static str,
    pub soil_type: &'static str,
}

pub const PROFILE: FarmerProfile = FarmerProfile {
    name: "Ramesh Kumar",
    initials: "RK",
    phone: "+91 98765 43210",
    email: "ramesh.kumar@gmail.com",
    location: "Village Khairpur, District Muzaffarnagar, UP",
    farm_acres: 12.5,
    main_crop: "Rice",
    soil_type: "Alluvial soil",
};

pub struct HelpTopic {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HELP_TOPICS: &[HelpTopic] = &[
    HelpTopic {
        title: "How to get crop recommendations?",
        description: "Ask our AI about your soil and climate",
    },
    HelpTopic {
        title: "Understanding weather data",
        description: "Learn to read weather forecasts",
    },
    HelpTopic {
        title: "Market price insights",
        description: "How to check current crop prices",
    },
    HelpTopic {
        title: "Voice commands",
        description: "Speak to get instant advice",
    },
    HelpTopic {
        title: "Image analysis",
        description: "Take photos of crops for diagnosis",
    },
];

pub fn format_rupees(amount: u32) -> String {
    format!("₹{}", group_digits(amount))
}

/// Nhóm chữ số kiểu Ấn Độ: 3 chữ số cuối, sau đó từng cặp (12,34,567).
fn group_digits(value: u32) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupee_amounts_use_indian_grouping() {
        assert_eq!(format_rupees(350), "₹350");
        assert_eq!(format_rupees(2150), "₹2,150");
        assert_eq!(format_rupees(1234567), "₹12,34,567");
    }

    #[test]
    fn quote_labels_match_dashboard_text() {
        let rice = &MARKET_QUOTES[0];
        assert_eq!(rice.price_label(), "₹2,150");
        assert_eq!(rice.change_label(), "+5%");
        assert_eq!(rice.volume_label(), "2,345 tons");

        let onion = MARKET_QUOTES.iter().find(|q| q.crop == "Onion").unwrap();
        assert_eq!(onion.change_label(), "-8%");
        assert_eq!(onion.trend(), Trend::Down);
    }

    #[test]
    fn home_crops_exist_in_quotes() {
        for crop in HOME_MARKET_CROPS {
            assert!(MARKET_QUOTES.iter().any(|quote| quote.crop == *crop));
        }
    }
}
