use eframe::egui;

use crate::admin_app::state::AppState;
use crate::admin_app::theme::{colors, styles};
use crate::admin_app::AppView;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);

        ui.label(
            egui::RichText::new("Welcome to SolveTech!")
                .size(36.0)
                .strong()
                .color(colors::TEXT_DARK),
        );
        ui.add_space(10.0);

        if let Some(ref message) = state.login.state.message {
            ui.colored_label(colors::SUCCESS, message.as_str());
        }
        ui.add_space(40.0);

        let products_btn = styles::action_button("Manage Products", colors::ACCENT)
            .min_size(egui::vec2(200.0, 44.0));
        if ui.add(products_btn).clicked() {
            state.navigate(AppView::Products);
        }
    });
}
