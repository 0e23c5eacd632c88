pub mod app;
pub mod carousel;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod media;
pub mod mvi;
pub mod reel_view;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
