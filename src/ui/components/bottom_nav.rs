use eframe::egui;

use crate::ui::state::Screen;

const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("🏠", "Home", "/home"),
    ("🔖", "Saved", "/saved"),
    ("🔔", "Alerts", "/alerts"),
    ("⚙", "Settings", "/settings"),
];

pub fn render(ui: &mut egui::Ui, current: Screen) -> Option<&'static str> {
    let mut target = None;
    ui.columns(NAV_ITEMS.len(), |columns| {
        for (column, (icon, label, route)) in columns.iter_mut().zip(NAV_ITEMS) {
            column.vertical_centered(|ui| {
                let active = Screen::from_route(*route) == current;
                if ui
                    .selectable_label(active, format!("{icon}\n{label}"))
                    .clicked()
                {
                    target = Some(*route);
                }
            });
        }
    });
    target
}
