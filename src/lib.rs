pub mod action;
pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod gauge;
pub mod input;
pub mod logging;
pub mod sort;
pub mod system;
pub mod terminal;
pub mod ui;
pub mod view;
