pub mod action;
pub mod app;
pub mod codec;
pub mod config;
pub mod flows;
pub mod input;
pub mod logging;
pub mod protocol;
pub mod state;
pub mod transport;
pub mod ui;
