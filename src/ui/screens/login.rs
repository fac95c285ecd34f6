use eframe::egui;

use crate::auth::LoginMethod;
use crate::ui::state::LoginForm;

const FEATURES: &[&str] = &[
    "🌾 AI Crop Recommendations",
    "📊 Market Price Insights",
    "🌤 Weather Forecasts",
    "🗣 Voice & Image Support",
];

/// `true` khi người dùng bấm tiếp tục.
pub fn render(ui: &mut egui::Ui, form: &mut LoginForm) -> bool {
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.heading("🌱 Kri-सहाय");
        ui.label(egui::RichText::new("Smart Farming for Better Tomorrow").strong());
        ui.label(egui::RichText::new("AI-powered agriculture guidance for farmers").weak());
        ui.add_space(24.0);
    });

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            for method in [LoginMethod::Phone, LoginMethod::Email] {
                if ui
                    .selectable_value(&mut form.method, method, method.label())
                    .clicked()
                {
                    form.error = None;
                }
            }
        });
        ui.add_space(8.0);

        let (label, hint, value) = match form.method {
            LoginMethod::Phone => ("Phone Number", "Enter your phone number", &mut form.phone),
            LoginMethod::Email => ("Email Address", "Enter your email", &mut form.email),
        };
        ui.label(label);
        let response = ui.add(
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        if let Some(err) = &form.error {
            ui.colored_label(egui::Color32::RED, err.to_string());
        }

        ui.add_space(8.0);
        if ui
            .add_sized(
                [ui.available_width(), 36.0],
                egui::Button::new("Continue to Kri-Sahaay"),
            )
            .clicked()
        {
            submit = true;
        }

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("New to Kri-Sahaay? Sign up now").weak());
        });
    });

    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        for feature in FEATURES {
            ui.label(*feature);
        }
    });

    submit
}
