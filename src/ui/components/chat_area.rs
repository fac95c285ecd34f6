use eframe::egui;

use crate::common::{ChatMessage, Role};

const USER_BUBBLE: egui::Color32 = egui::Color32::from_rgb(46, 125, 50);

pub fn render(ui: &mut egui::Ui, messages: &[ChatMessage], max_height: f32) {
    egui::ScrollArea::vertical()
        .max_height(max_height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                match message.role {
                    Role::User => {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            bubble(ui, message, true);
                        });
                    }
                    Role::Assistant => {
                        ui.with_layout(egui::Layout::left_to_right(egui::Align::TOP), |ui| {
                            bubble(ui, message, false);
                        });
                    }
                }
                ui.add_space(6.0);
            }
        });
}

fn bubble(ui: &mut egui::Ui, message: &ChatMessage, from_user: bool) {
    let max_width = ui.available_width() * 0.8;
    let mut frame = egui::Frame::group(ui.style());
    if from_user {
        frame = frame.fill(USER_BUBBLE);
    }

    frame.show(ui, |ui| {
        ui.set_max_width(max_width);
        ui.vertical(|ui| {
            let who = if from_user { "🧑 You" } else { "🤖 AgriSmart" };
            ui.label(egui::RichText::new(who).small().strong());

            if let Some(image) = &message.image {
                ui.label(egui::RichText::new(format!("🖼 {}", image.display())).italics());
            }

            let text = egui::RichText::new(&message.content);
            let text = if from_user {
                text.color(egui::Color32::WHITE)
            } else {
                text
            };
            ui.add(egui::Label::new(text).wrap());

            let time = message.timestamp.with_timezone(&chrono::Local).format("%H:%M");
            ui.label(egui::RichText::new(time.to_string()).small().weak());
        });
    });
}
