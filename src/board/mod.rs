pub mod capture;
pub mod export;
pub mod history;
pub mod model;
pub mod noise;
pub mod surface;
pub mod widget;

pub use widget::{BoardConfig, DrawingBoard};
