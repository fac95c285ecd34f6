use std::path::{Path, PathBuf};

use eframe::egui;

use crate::catalog::{SOIL_PH, WEATHER};
use crate::ui::components::{card, chat_area, input_bar};
use crate::ui::state::ChatSession;

#[derive(Default)]
pub struct ChatActions {
    pub back: bool,
    /// Text đã được nối vào session, cần gửi cho assistant
    pub ask: Option<String>,
    pub image: Option<PathBuf>,
    pub start_voice: bool,
}

pub fn render(ui: &mut egui::Ui, session: &mut ChatSession) -> ChatActions {
    let mut actions = ChatActions::default();

    ui.horizontal(|ui| {
        actions.back = ui.button("⬅").clicked();
        ui.heading("🤖 AI Assistant");
    });
    ui.separator();

    ui.columns(2, |columns| {
        card::render(&mut columns[0], "", |ui| {
            ui.label(egui::RichText::new("Weather").small().strong());
            ui.label(format!("{}°C, Humid", WEATHER.temperature_c));
        });
        card::render(&mut columns[1], "", |ui| {
            ui.label(egui::RichText::new("Soil pH").small().strong());
            ui.label(format!("{SOIL_PH} (Good)"));
        });
    });
    ui.separator();

    if session.attachment_open {
        render_attachment_form(ui, session, &mut actions);
    }

    // Thanh nhập ở đáy, phần còn lại dành cho danh sách tin nhắn
    let input_height = if session.is_recording { 56.0 } else { 36.0 };
    let list_height = (ui.available_height() - input_height).max(80.0);
    chat_area::render(ui, session.messages(), list_height);
    ui.separator();

    let input = input_bar::render(ui, &mut session.input_text, session.is_recording);
    if input.send {
        actions.ask = session.submit_input();
    }
    if input.toggle_recording {
        actions.start_voice = session.toggle_recording();
    }
    if input.open_attachment {
        session.attachment_open = true;
        session.attachment_error = None;
    }

    actions
}

fn render_attachment_form(
    ui: &mut egui::Ui,
    session: &mut ChatSession,
    actions: &mut ChatActions,
) {
    card::render(ui, "📷 Attach crop photo", |ui| {
        ui.add(
            egui::TextEdit::singleline(&mut session.attachment_path)
                .hint_text("Path to image file")
                .desired_width(f32::INFINITY),
        );
        if let Some(err) = &session.attachment_error {
            ui.colored_label(egui::Color32::RED, err.to_string());
        }
        ui.horizontal(|ui| {
            if ui.button("Upload").clicked() {
                let path = session.attachment_path.trim().to_string();
                match session.attach_image(Path::new(&path)) {
                    Ok(path) => {
                        actions.image = Some(path);
                        session.attachment_open = false;
                        session.attachment_path.clear();
                        session.attachment_error = None;
                    }
                    Err(err) => {
                        log::warn!("Rejected attachment: {err}");
                        session.attachment_error = Some(err);
                    }
                }
            }
            if ui.button("Cancel").clicked() {
                session.attachment_open = false;
                session.attachment_error = None;
            }
        });
    });
    ui.add_space(4.0);
}
