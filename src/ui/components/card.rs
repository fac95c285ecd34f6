use eframe::egui;

pub fn render<R>(
    ui: &mut egui::Ui,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            if !title.is_empty() {
                ui.label(egui::RichText::new(title).heading());
                ui.add_space(4.0);
            }
            add_contents(ui)
        })
        .inner
}

/// Dòng hai cột: nhãn bên trái, giá trị bên phải.
pub fn row(
    ui: &mut egui::Ui,
    left: impl Into<egui::WidgetText>,
    right: impl Into<egui::WidgetText>,
) {
    ui.horizontal(|ui| {
        ui.label(left);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(right);
        });
    });
}
