use eframe::egui;

use crate::catalog::{HOME_MARKET_CROPS, RECOMMENDATIONS, Trend, WEATHER};
use crate::market::MarketBoard;
use crate::ui::components::card;

/// Trả về route người dùng chọn, nếu có.
pub fn render(ui: &mut egui::Ui) -> Option<&'static str> {
    let mut target = None;

    ui.horizontal(|ui| {
        if ui.button("👤").on_hover_text("Profile").clicked() {
            target = Some("/profile");
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("💬 Chat with AI").clicked() {
                target = Some("/chat");
            }
        });
    });
    ui.add_space(8.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            card::render(ui, "🌧 Weather Forecast", |ui| {
                card::row(
                    ui,
                    format!("{}, {}°C", WEATHER.summary, WEATHER.temperature_c),
                    format!("Humidity: {}%", WEATHER.humidity_pct),
                );
                card::row(ui, "", format!("Wind: {} km/h", WEATHER.wind_kmh));
            });
            ui.add_space(8.0);

            card::render(ui, "💡 AI Recommendations", |ui| {
                for rec in RECOMMENDATIONS {
                    card::row(
                        ui,
                        format!("🌾 {} · {} Season", rec.crop, rec.season),
                        egui::RichText::new(format!("{}% Match", rec.confidence_pct)).strong(),
                    );
                }
                if ui.button("View Detailed Analysis").clicked() {
                    target = Some("/recommendations");
                }
            });
            ui.add_space(8.0);

            card::render(ui, "📈 Market Insights", |ui| {
                let board = MarketBoard::default();
                for quote in HOME_MARKET_CROPS.iter().filter_map(|crop| board.find(crop)) {
                    let color = match quote.trend() {
                        Trend::Up => egui::Color32::DARK_GREEN,
                        Trend::Down => egui::Color32::RED,
                    };
                    card::row(
                        ui,
                        format!("{}  {}/quintal", quote.crop, quote.price_label()),
                        egui::RichText::new(quote.change_label()).color(color),
                    );
                }
                if ui.button("View Market Trends").clicked() {
                    target = Some("/market");
                }
            });
            ui.add_space(8.0);

            card::render(ui, "🎁 Government Schemes", |ui| {
                ui.label(
                    egui::RichText::new("New subsidies and support programs available").weak(),
                );
                if ui.button("Explore Schemes").clicked() {
                    target = Some("/schemes");
                }
            });
        });

    target
}
