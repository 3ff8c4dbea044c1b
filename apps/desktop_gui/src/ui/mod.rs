//! UI layer for the uploader window: app shell and reusable widgets.

pub mod app;
pub mod widgets;

pub use app::UploaderApp;
