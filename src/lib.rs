pub mod achievements;
pub mod app;
pub mod config;
pub mod data;
pub mod judge;
pub mod model;
pub mod session;
pub mod storage;
pub mod toast;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
