use eframe::egui;

use crate::catalog::{MARKET_INSIGHTS, Trend};
use crate::market::MarketBoard;
use crate::ui::components::card;

const TOP_GAINERS: usize = 3;

/// `true` khi người dùng bấm quay lại.
pub fn render(ui: &mut egui::Ui, search: &mut String) -> bool {
    let mut back = false;
    ui.horizontal(|ui| {
        back = ui.button("⬅").clicked();
        ui.heading("Market Prices");
    });
    ui.separator();

    ui.add(
        egui::TextEdit::singleline(search)
            .hint_text("🔍 Search crops...")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);

    let board = MarketBoard::default();
    let gainers = board.top_gainers(TOP_GAINERS);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.columns(2, |columns| {
                card::render(&mut columns[0], "", |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading(gainers.len().to_string());
                        ui.label("Crops Rising");
                    });
                });
                card::render(&mut columns[1], "", |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Today");
                        ui.label("Live Prices");
                    });
                });
            });
            ui.add_space(8.0);

            card::render(ui, "📈 Top Gainers Today", |ui| {
                for quote in &gainers {
                    card::row(
                        ui,
                        format!("{} · {}", quote.crop, quote.mandi),
                        egui::RichText::new(format!(
                            "{}  {}",
                            quote.price_label(),
                            quote.change_label()
                        ))
                        .color(egui::Color32::DARK_GREEN),
                    );
                }
            });
            ui.add_space(8.0);

            card::render(ui, "📊 All Crop Prices", |ui| {
                let results = board.search(search);
                if results.is_empty() {
                    ui.label(egui::RichText::new("No crops match your search").weak());
                }
                for quote in results {
                    let (arrow, color) = match quote.trend() {
                        Trend::Up => ("▲", egui::Color32::DARK_GREEN),
                        Trend::Down => ("▼", egui::Color32::RED),
                    };
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        card::row(
                            ui,
                            egui::RichText::new(quote.crop).strong(),
                            format!("{} per quintal", quote.price_label()),
                        );
                        card::row(
                            ui,
                            format!("📍 {}", quote.mandi),
                            egui::RichText::new(format!("{arrow} {}", quote.change_label()))
                                .color(color),
                        );
                        let volume = format!("Volume: {}", quote.volume_label());
                        card::row(
                            ui,
                            egui::RichText::new(volume).weak(),
                            egui::RichText::new("Updated: 2 hrs ago").weak(),
                        );
                    });
                }
            });
            ui.add_space(8.0);

            card::render(ui, "Market Insights", |ui| {
                for (subject, detail) in MARKET_INSIGHTS {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(*subject).strong());
                        ui.label(*detail);
                    });
                }
            });
        });

    back
}
