use eframe::egui;

use crate::admin_app::auth::AuthState;
use crate::admin_app::state::AppState;
use crate::admin_app::theme::{colors, styles};
use crate::admin_app::AppView;

const INPUT_WIDTH: f32 = 280.0;

pub fn render_login(ui: &mut egui::Ui, state: &mut AppState) {
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        styles::card_frame().show(ui, |ui| {
            ui.set_width(INPUT_WIDTH + 40.0);
            ui.vertical_centered(|ui| {
                ui.heading("Login");
                ui.add_space(12.0);

                let form = &mut state.login.form;
                let email = field(ui, "Email", &mut form.email, false);
                let password = field(ui, "Password", &mut form.password, true);
                let entered = (email.lost_focus() || password.lost_focus())
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.add_space(12.0);

                let loading = state.login.state.is_loading();
                let button = styles::action_button(state.login.submit_label(), colors::ACCENT)
                    .min_size(egui::vec2(INPUT_WIDTH, 32.0));
                if ui.add_enabled(!loading, button).clicked() || (entered && !loading) {
                    submit = true;
                }

                status(ui, &state.login.state);
            });
        });

        ui.add_space(12.0);
        if ui.link("Need an account? Register").clicked() {
            state.navigate(AppView::Register);
        }
    });

    if submit {
        state.handle_login();
    }
}

pub fn render_register(ui: &mut egui::Ui, state: &mut AppState) {
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        styles::card_frame().show(ui, |ui| {
            ui.set_width(INPUT_WIDTH + 40.0);
            ui.vertical_centered(|ui| {
                ui.heading("Register");
                ui.add_space(12.0);

                let form = &mut state.register.form;
                field(ui, "Name", &mut form.name, false);
                field(ui, "Email", &mut form.email, false);
                field(ui, "Password", &mut form.password, true);
                field(ui, "Confirm Password", &mut form.confirm_password, true);
                ui.add_space(12.0);

                let loading = state.register.state.is_loading();
                let button = styles::action_button(state.register.submit_label(), colors::REGISTER)
                    .min_size(egui::vec2(INPUT_WIDTH, 32.0));
                if ui.add_enabled(!loading, button).clicked() {
                    submit = true;
                }

                status(ui, &state.register.state);
            });
        });

        ui.add_space(12.0);
        if ui.link("Already registered? Login").clicked() {
            state.navigate(AppView::Login);
        }
    });

    if submit {
        state.handle_register();
    }
}

fn field(ui: &mut egui::Ui, hint: &str, value: &mut String, password: bool) -> egui::Response {
    let response = ui.add_sized(
        [INPUT_WIDTH, 28.0],
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .password(password),
    );
    ui.add_space(8.0);
    response
}

fn status(ui: &mut egui::Ui, auth: &AuthState) {
    if let Some(ref error) = auth.error {
        ui.add_space(10.0);
        ui.colored_label(colors::ERROR, error.as_str());
    }
    if let Some(ref message) = auth.message {
        ui.add_space(10.0);
        ui.colored_label(colors::SUCCESS, message.as_str());
    }
}
