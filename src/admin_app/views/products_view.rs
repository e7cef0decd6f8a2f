use eframe::egui;

use crate::admin_app::state::AppState;
use crate::admin_app::theme::{colors, styles};
use crate::shared::catalog::{Product, ProductId};

const CARD_WIDTH: f32 = 220.0;
const FORM_WIDTH: f32 = 320.0;

/// Click collected while rendering, applied once the frame's borrows end
enum Action {
    ClearFilter,
    ToggleFilter(String),
    Reload,
    NewProduct,
    Edit(ProductId),
    RequestDelete(ProductId),
    ConfirmDelete,
    CancelDelete,
    Submit,
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut action = None;

    egui::SidePanel::right("product_form")
        .resizable(false)
        .exact_width(FORM_WIDTH)
        .frame(egui::Frame::new().inner_margin(egui::Margin::symmetric(12, 0)))
        .show_inside(ui, |ui| {
            render_form(ui, state, &mut action);
        });

    ui.heading("Products");
    ui.add_space(8.0);
    render_filter_bar(ui, state, &mut action);
    ui.add_space(12.0);

    if let Some(ref notice) = state.notice {
        styles::notice_label(ui, notice);
        ui.add_space(8.0);
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            if state.snapshot.visible_products.is_empty() {
                ui.colored_label(colors::TEXT_SECONDARY, "No products to show.");
                return;
            }
            ui.horizontal_wrapped(|ui| {
                for product in &state.snapshot.visible_products {
                    product_card(ui, state, product, &mut action);
                }
            });
        });

    render_delete_confirmation(ui.ctx(), state, &mut action);

    if let Some(action) = action {
        dispatch(state, action);
    }
}

fn dispatch(state: &mut AppState, action: Action) {
    match action {
        Action::ClearFilter => state.clear_filter(),
        Action::ToggleFilter(name) => state.toggle_filter(&name),
        Action::Reload => state.reload_catalog(),
        Action::NewProduct => state.begin_create(),
        Action::Edit(id) => state.edit_product(id),
        Action::RequestDelete(id) => state.request_delete(id),
        Action::ConfirmDelete => state.confirm_delete(),
        Action::CancelDelete => state.cancel_delete(),
        Action::Submit => state.submit_product(),
    }
}

fn render_filter_bar(ui: &mut egui::Ui, state: &AppState, action: &mut Option<Action>) {
    let active = state.snapshot.filter.as_deref();

    ui.horizontal_wrapped(|ui| {
        if ui.add(egui::Button::new("All").selected(active.is_none())).clicked() {
            *action = Some(Action::ClearFilter);
        }
        for category in &state.snapshot.categories {
            let selected = active == Some(category.name.as_str());
            if ui
                .add(egui::Button::new(category.name.as_str()).selected(selected))
                .clicked()
            {
                *action = Some(Action::ToggleFilter(category.name.clone()));
            }
        }

        ui.separator();
        if ui.button("Reload").clicked() {
            *action = Some(Action::Reload);
        }
    });
}

fn product_card(ui: &mut egui::Ui, state: &AppState, product: &Product, action: &mut Option<Action>) {
    styles::card_frame().show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&product.name).size(16.0).strong());
            if let Some(ref description) = product.description {
                ui.colored_label(colors::TEXT_SECONDARY, description.as_str());
            }
            ui.label(egui::RichText::new(product.price_label()).strong());
            ui.colored_label(colors::TEXT_SECONDARY, product.category_label());

            if let Some(ref image_url) = product.image_url {
                ui.hyperlink_to("View image", state.api.config().asset_url(image_url));
            }

            let Some(id) = product.id else {
                return;
            };
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.add(styles::action_button("Edit", colors::EDIT)).clicked() {
                    *action = Some(Action::Edit(id));
                }
                if ui.add(styles::action_button("Delete", colors::DANGER)).clicked() {
                    *action = Some(Action::RequestDelete(id));
                }
            });
        });
    });
}

fn render_form(ui: &mut egui::Ui, state: &mut AppState, action: &mut Option<Action>) {
    let mode = state.form.draft.mode();

    styles::card_frame().show(ui, |ui| {
        ui.set_width(FORM_WIDTH - 48.0);
        ui.horizontal(|ui| {
            ui.heading(mode.caption());
            if state.form.draft.is_editing() && ui.button("New product").clicked() {
                *action = Some(Action::NewProduct);
            }
        });
        ui.add_space(8.0);

        let form = &mut state.form;
        ui.add(egui::TextEdit::singleline(&mut form.draft.name).hint_text("Name"));
        ui.add(
            egui::TextEdit::multiline(&mut form.draft.description)
                .hint_text("Description")
                .desired_rows(3),
        );
        ui.add(egui::TextEdit::singleline(&mut form.price_input).hint_text("Price"));
        ui.add(egui::TextEdit::singleline(&mut form.image_path).hint_text("Image file path"));

        ui.add_space(8.0);
        ui.label("Categories");
        for category in &state.snapshot.categories {
            let mut checked = form.draft.category_ids.contains(&category.id);
            if ui.checkbox(&mut checked, category.name.as_str()).changed() {
                form.toggle_category(category.id);
            }
        }

        ui.add_space(12.0);
        let busy = state.catalog_busy();
        let submit = styles::action_button(mode.submit_label(), colors::ACCENT)
            .min_size(egui::vec2(FORM_WIDTH - 48.0, 32.0));
        if ui.add_enabled(!busy, submit).clicked() {
            *action = Some(Action::Submit);
        }
    });
}

fn render_delete_confirmation(ctx: &egui::Context, state: &AppState, action: &mut Option<Action>) {
    let Some(id) = state.snapshot.pending_delete else {
        return;
    };
    let name = state
        .snapshot
        .products
        .iter()
        .find(|p| p.id == Some(id))
        .map(|p| p.name.as_str())
        .unwrap_or("this product");

    egui::Window::new("Delete product")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Are you sure you want to delete {}?", name));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.add(styles::action_button("Delete", colors::DANGER)).clicked() {
                    *action = Some(Action::ConfirmDelete);
                }
                if ui.button("Cancel").clicked() {
                    *action = Some(Action::CancelDelete);
                }
            });
        });
}
