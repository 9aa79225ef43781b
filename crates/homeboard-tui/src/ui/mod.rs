//! Terminal UI module using ratatui.
//!
//! - `render`: frame layout and widget drawing
//! - `input`: keyboard event handling
//! - `styles`: colour palettes and text styling

pub mod input;
pub mod render;
pub mod styles;
