pub mod commands;
pub mod config;
pub mod errors;
pub mod install;
pub mod logging;
pub mod status;
pub mod target;
pub mod ui;
pub mod uninstall;
