//! # Rendering Module
//!
//! Textual grid rendering and event narration for the terminal.

pub mod display;

pub use display::*;
