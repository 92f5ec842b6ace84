//! Views
//!
//! Thin forms over the API. Every submit path hands its failure to
//! `deal_with_errors`; no view decides on its own how an error surfaces.

use crate::egui_app::data_sources::ApiClient;
use crate::egui_app::errors::caught::Caught;
use crate::egui_app::notices::Notices;

pub mod login;
pub mod menu;
pub mod password;
pub mod register;

/// The screens of the app. The discriminant doubles as the boundary's
/// reset key, so switching screens counts as a fresh mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Menu,
    Register,
    Login,
    Password,
}

/// What a view needs to run a request and route its outcome.
pub struct ViewDeps<'a> {
    pub api: &'a ApiClient,
    pub notices: &'a mut Notices,
    pub escalate: &'a mut dyn FnMut(Caught),
}
