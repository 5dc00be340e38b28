//! Camera and display parameters mutated by input and pushed to the shaders.

use rand::Rng;

use crate::fractal::FractalKind;

/// Iteration count never drops below this.
pub const MIN_ITERATIONS: u32 = 50;
pub const DEFAULT_ITERATIONS: u32 = 2000;
pub const ITERATION_STEP: u32 = 50;

/// Pan distance per key press, scaled by the current zoom.
pub const PAN_STEP: f32 = 0.1;
/// Fractional zoom change per wheel notch.
pub const ZOOM_STEP: f32 = 0.1;
pub const JULIA_STEP: f32 = 0.05;
pub const TINT_STEP: f32 = 0.01;

/// Past this the f32 plane coordinates in the shaders collapse to a few values.
pub const MIN_ZOOM: f32 = 1.0e-6;
pub const MAX_ZOOM: f32 = 1.0e3;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Per-fractal camera parameters. Reset whenever the fractal changes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewParams {
    pub iterations: u32,
    /// Scale of the visible region; smaller is closer.
    pub zoom: f32,
    pub center: [f32; 2],
    pub julia_c: [f32; 2],
}

impl ViewParams {
    /// Framing applied when `kind` is selected. Currently shared by every kind.
    pub fn defaults_for(_kind: FractalKind) -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            zoom: 1.0,
            // Shifts the Mandelbrot set's bulk into the middle of the window.
            center: [0.5, 0.0],
            julia_c: [0.0, 0.0],
        }
    }

    pub fn pan(&mut self, dir: Direction) {
        let step = PAN_STEP * self.zoom;
        match dir {
            Direction::Left => self.center[0] += step,
            Direction::Right => self.center[0] -= step,
            Direction::Up => self.center[1] -= step,
            Direction::Down => self.center[1] += step,
        }
    }

    /// Adds `steps * ITERATION_STEP` iterations, saturating at [`MIN_ITERATIONS`].
    pub fn adjust_iterations(&mut self, steps: i32) {
        let delta = ITERATION_STEP.saturating_mul(steps.unsigned_abs());
        self.iterations = if steps >= 0 {
            self.iterations.saturating_add(delta)
        } else {
            self.iterations.saturating_sub(delta)
        }
        .max(MIN_ITERATIONS);
    }

    /// Wheel away from the user (`steps > 0`) zooms in, toward the user zooms out.
    ///
    /// Only the direction matters; one event is one zoom step.
    pub fn zoom_by_wheel(&mut self, steps: i32) {
        let factor = match steps.signum() {
            1 => 1.0 - ZOOM_STEP,
            -1 => 1.0 + ZOOM_STEP,
            _ => return,
        };
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn nudge_julia(&mut self, dx: i32, dy: i32) {
        self.julia_c[0] += JULIA_STEP * dx as f32;
        self.julia_c[1] += JULIA_STEP * dy as f32;
    }

    /// Magnification relative to the default framing.
    pub fn magnification(&self) -> f32 {
        1.0 / self.zoom
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Color mixed into every shader's palette. Survives fractal changes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tint(pub [f32; 3]);

impl Default for Tint {
    fn default() -> Self {
        Tint([1.0, 0.0, 0.0])
    }
}

impl Tint {
    /// Raises one channel by [`TINT_STEP`], wrapping to 0 past 1.
    pub fn bump(&mut self, channel: Channel) {
        let slot = &mut self.0[channel as usize];
        let next = *slot + TINT_STEP;
        // Slack absorbs rounding from repeated small steps.
        *slot = if next > 1.0 + 1e-4 { 0.0 } else { next.min(1.0) };
    }

    /// Replaces every channel with a uniform sample from `[0, 1)`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0 = [rng.random(), rng.random(), rng.random()];
    }

    pub fn rgba(&self) -> [f32; 4] {
        [self.0[0], self.0[1], self.0[2], 1.0]
    }
}
