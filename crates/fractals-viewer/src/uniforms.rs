//! Uniform blocks. Layouts mirror the WGSL structs in `shaders/`.

use bytemuck::{Pod, Zeroable};
use fractals_engine::render::Viewport;

use crate::cube::{self, CubeSpin};
use crate::params::{Tint, ViewParams};

/// `FractalParams` in `common.wgsl`; shared by every full-screen program.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FractalUniform {
    pub center: [f32; 2],
    pub julia_c: [f32; 2],
    /// Window size in physical pixels.
    pub resolution: [f32; 2],
    pub zoom: f32,
    pub iterations: u32,
    pub tint: [f32; 4],
}

impl FractalUniform {
    pub fn new(params: &ViewParams, tint: Tint, viewport: Viewport) -> Self {
        Self {
            center: params.center,
            julia_c: params.julia_c,
            resolution: [viewport.width.max(1) as f32, viewport.height.max(1) as f32],
            zoom: params.zoom,
            iterations: params.iterations,
            tint: tint.rgba(),
        }
    }
}

/// `CubeParams` in `cube.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CubeUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub tint: [f32; 4],
}

impl CubeUniform {
    pub fn new(params: &ViewParams, tint: Tint, spin: CubeSpin, viewport: Viewport) -> Self {
        Self {
            model: spin.model().to_cols_array_2d(),
            view: cube::view(params.zoom).to_cols_array_2d(),
            projection: cube::projection(viewport.aspect()).to_cols_array_2d(),
            tint: tint.rgba(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fractal::FractalKind;

    #[test]
    fn fractal_uniform_matches_wgsl_layout() {
        // vec2 center, vec2 julia_c, vec2 resolution, f32 zoom, u32 iterations, vec4 tint
        assert_eq!(std::mem::size_of::<FractalUniform>(), 48);
        assert_eq!(std::mem::offset_of!(FractalUniform, zoom), 24);
        assert_eq!(std::mem::offset_of!(FractalUniform, tint), 32);
    }

    #[test]
    fn cube_uniform_matches_wgsl_layout() {
        assert_eq!(std::mem::size_of::<CubeUniform>(), 3 * 64 + 16);
        assert_eq!(std::mem::offset_of!(CubeUniform, tint), 192);
    }

    #[test]
    fn fractal_uniform_carries_params() {
        let mut params = ViewParams::defaults_for(FractalKind::Julia);
        params.iterations = 350;
        let u = FractalUniform::new(&params, Tint([0.1, 0.2, 0.3]), Viewport::new(800, 600));
        assert_eq!(u.resolution, [800.0, 600.0]);
        assert_eq!(u.iterations, 350);
        assert_eq!(u.julia_c, params.julia_c);
        assert_eq!(u.tint, [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn zero_viewport_never_reaches_shader() {
        let params = ViewParams::defaults_for(FractalKind::Mandelbrot);
        let u = FractalUniform::new(&params, Tint::default(), Viewport::new(0, 0));
        assert_eq!(u.resolution, [1.0, 1.0]);
    }
}
