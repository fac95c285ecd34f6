use eframe::egui;

use crate::catalog::HELP_TOPICS;

/// Nút trợ giúp nổi và bảng chủ đề, hiển thị trên mọi màn hình.
pub fn render(ctx: &egui::Context, open: &mut bool) {
    egui::Area::new(egui::Id::new("help_button"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .show(ctx, |ui| {
            if ui.button("❓ Help").clicked() {
                *open = true;
            }
        });

    egui::Window::new("How can we help?")
        .open(open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new("Get help with using AgriSmart features").weak());
            ui.add_space(8.0);
            for topic in HELP_TOPICS {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(topic.title).strong());
                    ui.label(egui::RichText::new(topic.description).small().weak());
                });
            }
            ui.separator();
            if ui.button("Contact Support").clicked() {
                log::info!("Support contact requested");
            }
        });
}
