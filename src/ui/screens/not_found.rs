use eframe::egui;

/// `true` khi người dùng muốn về trang chủ.
pub fn render(ui: &mut egui::Ui, route: &str) -> bool {
    let mut home = false;
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading("404");
        ui.label(format!("Oops! Page not found: {route}"));
        ui.add_space(8.0);
        home = ui.button("Return to Home").clicked();
    });
    home
}
