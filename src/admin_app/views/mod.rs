use eframe::egui;

use crate::admin_app::state::AppState;
use crate::admin_app::theme::{colors, styles};
use crate::admin_app::AppView;

pub mod auth_view;
pub mod landing_view;
pub mod products_view;

const NAV_ITEMS: [AppView; 4] = [
    AppView::Home,
    AppView::Products,
    AppView::Login,
    AppView::Register,
];

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("SolveTech Admin").size(18.0).strong(),
                );
                ui.add_space(24.0);

                for view in NAV_ITEMS {
                    let text = egui::RichText::new(view.title()).color(colors::TEXT_LIGHT);
                    let button = egui::Button::new(text)
                        .frame(false)
                        .selected(state.current_view == view);
                    if ui.add(button).clicked() {
                        state.navigate(view);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if state.catalog_busy() {
                        ui.spinner();
                        ui.colored_label(colors::TEXT_LIGHT, "Loading...");
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::page_frame())
        .show(ctx, |ui| match state.current_view {
            AppView::Home => landing_view::render(ui, state),
            AppView::Login => auth_view::render_login(ui, state),
            AppView::Register => auth_view::render_register(ui, state),
            AppView::Products => products_view::render(ui, state),
        });
}
