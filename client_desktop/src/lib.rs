//! Desktop client for Pong
//!
//! Opens a window with winit, renders with wgpu and feeds keyboard state into
//! the headless simulation in `game_core`.

pub mod app;
pub mod camera;
pub mod canvas;
pub mod error;
pub mod font;
pub mod input;
pub mod mesh;
pub mod renderer;

pub use app::App;
pub use error::RenderError;
