use crate::catalog::{MARKET_QUOTES, MarketQuote, Trend};

/// Bảng giá thị trường: tìm kiếm và xếp hạng trên danh sách giá cố định.
pub struct MarketBoard<'a> {
    quotes: &'a [MarketQuote],
}

impl Default for MarketBoard<'static> {
    fn default() -> Self {
        Self::new(MARKET_QUOTES)
    }
}

impl<'a> MarketBoard<'a> {
    pub fn new(quotes: &'a [MarketQuote]) -> Self {
        Self { quotes }
    }

    /// Các dòng giá có tên chứa `query` (không phân biệt hoa thường), giữ thứ tự gốc.
    pub fn search(&self, query: &str) -> Vec<&'a MarketQuote> {
        let query = query.to_lowercase();
        self.quotes
            .iter()
            .filter(|quote| quote.crop.to_lowercase().contains(&query))
            .collect()
    }

    pub fn top_gainers(&self, limit: usize) -> Vec<&'a MarketQuote> {
        let mut rising: Vec<&MarketQuote> = self
            .quotes
            .iter()
            .filter(|quote| quote.trend() == Trend::Up)
            .collect();
        rising.sort_by(|a, b| b.change_pct.total_cmp(&a.change_pct));
        rising.truncate(limit);
        rising
    }

    pub fn find(&self, crop: &str) -> Option<&'a MarketQuote> {
        self.quotes.iter().find(|quote| quote.crop == crop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crops(quotes: &[&MarketQuote]) -> Vec<&'static str> {
        quotes.iter().map(|quote| quote.crop).collect()
    }

    #[test]
    fn empty_search_returns_everything_in_order() {
        let board = MarketBoard::default();
        assert_eq!(board.search("").len(), MARKET_QUOTES.len());
        assert_eq!(board.search("")[0].crop, "Rice");
    }

    #[test]
    fn search_ignores_case_and_matches_substrings() {
        let board = MarketBoard::default();
        assert_eq!(crops(&board.search("RI")), vec!["Rice"]);
        assert_eq!(crops(&board.search("ta")), vec!["Potato", "Mustard"]);
        assert!(board.search("banana").is_empty());
    }

    #[test]
    fn top_gainers_are_rising_by_change() {
        let board = MarketBoard::default();
        assert_eq!(crops(&board.top_gainers(3)), vec!["Potato", "Mustard", "Rice"]);
        assert_eq!(board.top_gainers(10).len(), 4);
    }

    #[test]
    fn find_by_exact_crop_name() {
        let board = MarketBoard::default();
        assert_eq!(board.find("Wheat").map(|q| q.price_per_quintal), Some(2025));
        assert!(board.find("wheat").is_none());
    }
}
