//! Fractals engine crate.
//!
//! This crate owns the window, GPU and input runtime the viewer builds on.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
