use eframe::egui;

use crate::catalog::{PROFILE, SOIL_PH};
use crate::ui::components::card;

const MENU_ITEMS: &[(&str, &str)] = &[
    ("⚙ Account Settings", "/settings"),
    ("🌐 Language / भाषा", "/language"),
    ("🔔 Notifications", "/notifications"),
    ("🛡 Privacy & Security", "/privacy"),
];

pub enum ProfileAction {
    Navigate(&'static str),
    Logout,
}

pub fn render(ui: &mut egui::Ui) -> Option<ProfileAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button("⬅").clicked() {
            action = Some(ProfileAction::Navigate("/home"));
        }
        ui.heading("Profile");
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            card::render(ui, "", |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(PROFILE.initials).heading().strong());
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(PROFILE.name).heading());
                        ui.label(egui::RichText::new("Farmer & AgriSmart User").weak());
                    });
                });
            });
            ui.add_space(8.0);

            card::render(ui, "Contact Information", |ui| {
                card::row(ui, "📞 Phone Number", PROFILE.phone);
                card::row(ui, "✉ Email Address", PROFILE.email);
                card::row(ui, "📍 Location", PROFILE.location);
            });
            ui.add_space(8.0);

            card::render(ui, "Farm Details", |ui| {
                card::row(ui, "Acres", PROFILE.farm_acres.to_string());
                card::row(ui, "Main Crop", PROFILE.main_crop);
                card::row(
                    ui,
                    "Soil Type",
                    format!("{}, pH {SOIL_PH}", PROFILE.soil_type),
                );
            });
            ui.add_space(8.0);

            card::render(ui, "", |ui| {
                for (label, route) in MENU_ITEMS {
                    if ui
                        .add_sized(
                            [ui.available_width(), 28.0],
                            egui::Button::new(*label).frame(false),
                        )
                        .clicked()
                    {
                        action = Some(ProfileAction::Navigate(*route));
                    }
                }
            });
            ui.add_space(8.0);

            if ui
                .add_sized(
                    [ui.available_width(), 32.0],
                    egui::Button::new(egui::RichText::new("⎋ Logout").color(egui::Color32::RED)),
                )
                .clicked()
            {
                action = Some(ProfileAction::Logout);
            }
        });

    action
}
