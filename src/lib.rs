pub mod board;
pub mod content;
pub mod gui;
pub mod logging;
pub mod settings;
