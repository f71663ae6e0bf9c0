//! Pages
//!
//! The two views of the page.

pub mod dashboard;
pub mod main_view;

pub use dashboard::Dashboard;
pub use main_view::MainView;
