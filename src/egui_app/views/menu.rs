/**
 * Clinic Menu
 *
 * The landing view: the registered users, refreshed on demand.
 */
use crate::egui_app::data_sources::users_api;
use crate::egui_app::errors::deal_with::deal_with_errors;
use crate::egui_app::views::ViewDeps;
use crate::shared::schemas::users::UserRecord;

pub fn render(ui: &mut egui::Ui, users: &mut Vec<UserRecord>, deps: &mut ViewDeps) {
    ui.heading("VetDesk");
    ui.label("Registered users");
    ui.add_space(8.0);

    if ui.button("Refresh").clicked() {
        match users_api::list_users(deps.api) {
            Ok(body) => *users = body.inner_body_data,
            Err(error) => deal_with_errors(error, deps.notices, deps.escalate),
        }
    }

    ui.add_space(8.0);
    if users.is_empty() {
        ui.weak("No users loaded yet.");
        return;
    }

    egui::Grid::new("user_list").striped(true).show(ui, |ui| {
        ui.strong("Id");
        ui.strong("Name");
        ui.strong("Email");
        ui.end_row();
        for user in users.iter() {
            ui.label(user.id.to_string());
            ui.label(format!("{} {}", user.name, user.last_name));
            ui.label(&user.email);
            ui.end_row();
        }
    });
}
