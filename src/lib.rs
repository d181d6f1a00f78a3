#![warn(clippy::all, rust_2018_idioms)]

pub mod alert;
pub mod app;
pub mod components;
pub mod document;
pub mod error;
pub mod export;
pub mod navigation;
pub mod palette;
pub mod raster;
pub mod screen;
pub mod settings;
pub mod sketch;
pub mod stroke;
pub mod tool;

pub use app::{LaunchOptions, SketchApp};
pub use document::Document;
pub use error::ExportError;
pub use navigation::{Screen, StackNavigator};
pub use palette::Palette;
pub use screen::{DrawProps, DrawScreen};
pub use settings::Settings;
pub use sketch::{SketchCanvas, SketchSaveEvent};
pub use stroke::Stroke;
pub use tool::Tool;
