#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod background;
pub mod consts;
pub mod error;
pub mod export;
pub mod file_handler;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod selection;
pub mod shape;
pub mod stage;
pub mod tool;
pub mod widgets;

pub use app::SketchApp;
pub use background::BackgroundImage;
pub use error::SketchError;
pub use gesture::{GestureController, GestureState};
pub use renderer::Renderer;
pub use selection::{SelectionController, TransformState};
pub use shape::{Circle, Polyline, Rectangle, Shape, ShapeId};
pub use stage::Stage;
pub use tool::Tool;
