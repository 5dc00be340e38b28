//! GPU rendering helpers.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record passes
//! into a `RenderTarget` using the device/queue handed out by `RenderCtx`.
//!
//! Convention: viewport sizes are physical pixels, matching the surface.

mod ctx;
mod depth;

pub use ctx::{RenderCtx, RenderTarget, Viewport};
pub use depth::DepthBuffer;
