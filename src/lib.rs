pub mod configure;
pub mod configure_dialog;
pub mod explorers;
pub mod gui;
pub mod launcher;
pub mod logging;
pub mod settings;
