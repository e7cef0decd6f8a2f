//! Theme Styling Functions

use eframe::egui::{self, CornerRadius, Stroke};

use super::colors;
use crate::admin_app::catalog::{Notice, NoticeKind};

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.panel_fill = colors::PAGE_BG;
    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.override_text_color = Some(colors::TEXT_DARK);

    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.selection.bg_fill = colors::ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the main page area
pub fn page_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PAGE_BG)
        .inner_margin(egui::Margin::same(24))
}

/// Create a frame for product cards and forms
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::same(12))
}

/// Filled button with light text
pub fn action_button(text: &str, fill: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(colors::TEXT_LIGHT)).fill(fill)
}

/// Show a status-area notice in its kind's color
pub fn notice_label(ui: &mut egui::Ui, notice: &Notice) {
    let color = match notice.kind {
        NoticeKind::Info => colors::SUCCESS,
        NoticeKind::Error => colors::ERROR,
    };
    ui.colored_label(color, notice.text.as_str());
}
