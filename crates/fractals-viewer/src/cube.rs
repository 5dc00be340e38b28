//! Transform state for the 3D cube.

use glam::{Mat4, Vec3};

/// Starting orientation, in degrees.
pub const INITIAL_DEGREES: f32 = 30.0;
/// Rotation speed, in degrees per second.
pub const DEGREES_PER_SECOND: f32 = 45.0;

const FOV_Y_DEGREES: f32 = 45.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;
const CAMERA_DISTANCE: f32 = 3.0;

/// Rotation of the cube around a fixed tilted axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubeSpin {
    degrees: f32,
}

impl Default for CubeSpin {
    fn default() -> Self {
        Self {
            degrees: INITIAL_DEGREES,
        }
    }
}

impl CubeSpin {
    pub fn advance(&mut self, dt: f32) {
        self.degrees = (self.degrees + DEGREES_PER_SECOND * dt).rem_euclid(360.0);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn model(&self) -> Mat4 {
        let axis = Vec3::new(0.5, 1.0, 0.0).normalize();
        Mat4::from_axis_angle(axis, self.degrees.to_radians())
    }
}

/// Camera pulled back along +Z; `zoom` scales the distance.
pub fn view(zoom: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -CAMERA_DISTANCE * zoom))
}

/// Perspective projection with wgpu's 0..1 depth range.
pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR)
}
