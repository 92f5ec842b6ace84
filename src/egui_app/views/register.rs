/**
 * Registration Form
 *
 * The form runs the shared rules before anything leaves the machine, so a
 * failed rule is a notice, not a round trip.
 */
use validator::Validate;

use crate::egui_app::data_sources::users_api;
use crate::egui_app::errors::caught::Caught;
use crate::egui_app::errors::deal_with::deal_with_errors;
use crate::egui_app::views::ViewDeps;
use crate::shared::schemas::users::RegisterUserForm;

pub fn render(ui: &mut egui::Ui, form: &mut RegisterUserForm, deps: &mut ViewDeps) {
    ui.heading("Register");
    ui.add_space(8.0);

    egui::Grid::new("register_form").num_columns(2).show(ui, |ui| {
        ui.label("First name:");
        ui.text_edit_singleline(&mut form.first_name);
        ui.end_row();

        ui.label("Last name:");
        ui.text_edit_singleline(&mut form.last_name);
        ui.end_row();

        ui.label("Email:");
        ui.text_edit_singleline(&mut form.email);
        ui.end_row();

        ui.label("Password:");
        ui.add(egui::TextEdit::singleline(&mut form.password).password(true));
        ui.end_row();

        ui.label("Confirm:");
        ui.add(egui::TextEdit::singleline(&mut form.confirm_password).password(true));
        ui.end_row();
    });

    ui.checkbox(&mut form.terms, "I accept the Terms and Privacy Policy");
    ui.add_space(8.0);

    if ui.button("Create account").clicked() {
        match form.validate() {
            Err(errors) => deal_with_errors(Caught::Schema(errors), deps.notices, deps.escalate),
            Ok(()) => match users_api::register_user(deps.api, &form.to_request()) {
                Ok(body) => {
                    let message = body.message.unwrap_or_else(|| "User added".to_string());
                    deps.notices.push(message);
                    *form = RegisterUserForm::default();
                }
                Err(error) => deal_with_errors(error, deps.notices, deps.escalate),
            },
        }
    }
}
