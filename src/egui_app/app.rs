/**
 * Application Shell
 *
 * Owns the long-lived client state and wires the three error surfaces
 * together: the boundary wraps the active view, escalations from event
 * handlers are applied after the frame's render pass, and notices float
 * above everything.
 */
use crate::egui_app::config::Config;
use crate::egui_app::data_sources::ApiClient;
use crate::egui_app::errors::boundary::ErrorBoundary;
use crate::egui_app::errors::caught::Caught;
use crate::egui_app::notices::Notices;
use crate::egui_app::views::{self, AppView, ViewDeps};
use crate::shared::schemas::users::{CredentialsBody, RegisterUserForm, UserRecord};

pub struct VetApp {
    api: ApiClient,
    notices: Notices,
    boundary: ErrorBoundary,
    view: AppView,
    register_form: RegisterUserForm,
    login_form: views::login::LoginForm,
    password_form: views::password::PasswordForm,
    session: Option<CredentialsBody>,
    users: Vec<UserRecord>,
}

impl Default for VetApp {
    fn default() -> Self {
        Self {
            api: ApiClient::new(Config::new()),
            notices: Notices::new(),
            boundary: ErrorBoundary::new(),
            view: AppView::Menu,
            register_form: RegisterUserForm::default(),
            login_form: views::login::LoginForm::default(),
            password_form: views::password::PasswordForm::default(),
            session: None,
            users: Vec::new(),
        }
    }
}

impl eframe::App for VetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.view, AppView::Menu, "Menu");
                ui.selectable_value(&mut self.view, AppView::Register, "Register");
                ui.selectable_value(&mut self.view, AppView::Login, "Login");
                ui.selectable_value(&mut self.view, AppView::Password, "Password");
                if let Some(session) = &self.session {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.weak(format!("signed in as user {}", session.id));
                    });
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            // Switching screens is a fresh mount for the boundary
            self.boundary.sync_reset_key(self.view as u64);

            let VetApp {
                api,
                notices,
                boundary,
                view,
                register_form,
                login_form,
                password_form,
                session,
                users,
            } = self;

            // Escalations out of event handlers are applied once the
            // render pass is over, so the boundary flips for the next
            // frame instead of mid-frame.
            let mut pending: Vec<Caught> = Vec::new();
            {
                let mut escalate = |error: Caught| pending.push(error);
                boundary.show(ui, |ui| {
                    let mut deps = ViewDeps {
                        api,
                        notices,
                        escalate: &mut escalate,
                    };
                    match view {
                        AppView::Menu => views::menu::render(ui, users, &mut deps),
                        AppView::Register => views::register::render(ui, register_form, &mut deps),
                        AppView::Login => {
                            if let Some(credentials) =
                                views::login::render(ui, login_form, &mut deps)
                            {
                                *session = Some(credentials);
                            }
                        }
                        AppView::Password => {
                            views::password::render(ui, password_form, &mut deps)
                        }
                    }
                });
            }
            for error in pending {
                boundary.escalate(error);
            }
        });

        self.notices.show(ctx);
    }
}
