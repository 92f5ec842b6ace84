/**
 * Fallback View
 *
 * What the boundary renders instead of its children while failed.
 * Returns whether the user asked for a reset.
 */
use crate::egui_app::errors::caught::Caught;

pub fn render(ui: &mut egui::Ui, error: Option<&Caught>) -> bool {
    let mut reset_requested = false;
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(
            egui::RichText::new("Something went wrong")
                .size(20.0)
                .strong(),
        );
        if let Some(error) = error {
            ui.add_space(8.0);
            ui.monospace(error.describe());
        }
        ui.add_space(12.0);
        if ui.button("🔄 Try Again!").clicked() {
            reset_requested = true;
        }
    });
    reset_requested
}
