#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod chaos;
pub mod color;
pub mod command;
pub mod document;
pub mod export;
pub mod renderer;
pub mod selection;

pub use app::ChaosApp;
pub use chaos::{ChaosFiller, ChaosStyle};
pub use command::DrawCommand;
pub use document::Document;
pub use renderer::Renderer;
pub use selection::RegionSelector;
