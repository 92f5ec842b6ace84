/**
 * Login Form
 */
use crate::egui_app::data_sources::users_api;
use crate::egui_app::errors::deal_with::deal_with_errors;
use crate::egui_app::views::ViewDeps;
use crate::shared::schemas::users::CredentialsBody;

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Returns the credentials on a successful login.
pub fn render(
    ui: &mut egui::Ui,
    form: &mut LoginForm,
    deps: &mut ViewDeps,
) -> Option<CredentialsBody> {
    ui.heading("Login");
    ui.add_space(8.0);

    egui::Grid::new("login_form").num_columns(2).show(ui, |ui| {
        ui.label("Email:");
        ui.text_edit_singleline(&mut form.email);
        ui.end_row();

        ui.label("Password:");
        ui.add(egui::TextEdit::singleline(&mut form.password).password(true));
        ui.end_row();
    });

    ui.add_space(8.0);
    if ui.button("Login").clicked() {
        match users_api::login(deps.api, &form.email, &form.password) {
            Ok(body) => {
                form.password.clear();
                deps.notices.push("Welcome back");
                return Some(body.inner_body_data);
            }
            Err(error) => deal_with_errors(error, deps.notices, deps.escalate),
        }
    }
    None
}
