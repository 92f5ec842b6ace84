/**
 * Password Change Form
 *
 * Used after an email confirmation; the id travels in the body, matching
 * the server's update contract.
 */
use crate::egui_app::data_sources::users_api;
use crate::egui_app::errors::deal_with::deal_with_errors;
use crate::egui_app::views::ViewDeps;

#[derive(Debug, Default)]
pub struct PasswordForm {
    pub id: String,
    pub new_password: String,
}

pub fn render(ui: &mut egui::Ui, form: &mut PasswordForm, deps: &mut ViewDeps) {
    ui.heading("Change password");
    ui.add_space(8.0);

    egui::Grid::new("password_form").num_columns(2).show(ui, |ui| {
        ui.label("User id:");
        ui.text_edit_singleline(&mut form.id);
        ui.end_row();

        ui.label("New password:");
        ui.add(egui::TextEdit::singleline(&mut form.new_password).password(true));
        ui.end_row();
    });

    ui.add_space(8.0);
    if ui.button("Update").clicked() {
        match users_api::update_password(deps.api, &form.id, &form.new_password) {
            Ok(_) => {
                deps.notices.push("Password updated");
                form.new_password.clear();
            }
            Err(error) => deal_with_errors(error, deps.notices, deps.escalate),
        }
    }
}
