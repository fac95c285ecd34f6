use eframe::egui;

#[derive(Default)]
pub struct InputActions {
    pub send: bool,
    pub toggle_recording: bool,
    pub open_attachment: bool,
}

pub fn render(ui: &mut egui::Ui, input_text: &mut String, is_recording: bool) -> InputActions {
    let mut actions = InputActions::default();
    ui.horizontal(|ui| {
        let mic = egui::RichText::new("🎤");
        let mic = if is_recording {
            mic.color(egui::Color32::RED)
        } else {
            mic
        };
        if ui.button(mic).on_hover_text("Voice input").clicked() {
            actions.toggle_recording = true;
        }
        if ui.button("📷").on_hover_text("Attach a crop photo").clicked() {
            actions.open_attachment = true;
        }

        let has_text = !input_text.trim().is_empty();
        let send_width = 60.0;
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("Ask about crops, weather, market prices...")
                .desired_width(ui.available_width() - send_width),
        );

        if ui.add_enabled(has_text, egui::Button::new("Send")).clicked() {
            actions.send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            actions.send = true;
            response.request_focus();
        }
    });

    if is_recording {
        ui.colored_label(egui::Color32::RED, "● Recording... Tap mic again to stop");
    }

    actions
}
