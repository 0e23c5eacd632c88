pub mod cli;
pub mod config;
pub mod deck;
pub mod logging;
pub mod motion;
pub mod shutdown;
pub mod ui;
