//! egui Native Desktop App Module
//!
//! The clinic desk client: thin forms over the REST API, with one
//! classifier deciding the fate of every caught failure and one visual
//! boundary replacing a failed subtree with a fallback view.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── app.rs          - eframe::App implementation
//! ├── config.rs       - Server URL configuration
//! ├── notices.rs      - Transient toast queue
//! ├── errors/         - Caught-value sum, classifier, boundary, fallback
//! ├── data_sources/   - Blocking HTTP transport and per-endpoint calls
//! └── views/          - Register, login, password and menu forms
//! ```

pub mod app;
pub mod config;
pub mod data_sources;
pub mod errors;
pub mod notices;
pub mod views;

// Re-export commonly used types
pub use app::VetApp;
pub use config::Config;
pub use errors::boundary::ErrorBoundary;
pub use errors::caught::Caught;
pub use errors::deal_with::deal_with_errors;
pub use notices::Notices;
