use fractals_engine::core::{App, AppControl, FrameCtx};
use fractals_engine::input::InputEvent;
use fractals_engine::render::Viewport;

use crate::controls::{action_for, Action};
use crate::cube::CubeSpin;
use crate::fractal::FractalKind;
use crate::params::{Tint, ViewParams};
use crate::renderer::{FractalRenderer, Scene};

const CLEAR: wgpu::Color = wgpu::Color::WHITE;

/// Application state: which fractal is shown and how it is framed.
pub struct Viewer {
    kind: FractalKind,
    params: ViewParams,
    tint: Tint,
    spin: CubeSpin,
    /// Set once the spin has seen a frame; the first frame after a switch has
    /// no meaningful `dt` because the clock stops while idle.
    spin_running: bool,
    viewport: Viewport,
    render_requested: bool,
    renderer: FractalRenderer,
}

impl Viewer {
    pub fn new(start: FractalKind) -> Self {
        Self {
            kind: start,
            params: ViewParams::defaults_for(start),
            tint: Tint::default(),
            spin: CubeSpin::default(),
            spin_running: false,
            viewport: Viewport::default(),
            render_requested: true,
            renderer: FractalRenderer::new(),
        }
    }

    fn apply(&mut self, action: Action) -> AppControl {
        match action {
            Action::Pan(dir) => self.params.pan(dir),
            Action::Iterations(steps) => self.params.adjust_iterations(steps),
            Action::NextFractal => self.next_fractal(),
            Action::Julia { dx, dy } => self.params.nudge_julia(dx, dy),
            Action::Zoom(steps) => self.params.zoom_by_wheel(steps),
            Action::Tint(channel) => self.tint.bump(channel),
            Action::RandomTint => self.tint.randomize(&mut rand::rng()),
            Action::Report => {
                self.report();
                return AppControl::Continue;
            }
            Action::Quit => {
                log::info!("quit requested");
                return AppControl::Exit;
            }
        }

        log::trace!("{action:?} -> {:?}", self.params);
        self.render_requested = true;
        AppControl::Continue
    }

    /// Switches to the next fractal with fresh camera parameters.
    fn next_fractal(&mut self) {
        self.kind = self.kind.next();
        self.params = ViewParams::defaults_for(self.kind);
        self.spin.reset();
        self.spin_running = false;
        log::info!("showing {}", self.kind);
    }

    fn report(&self) {
        let p = &self.params;
        let [r, g, b] = self.tint.0;
        log::info!(
            "{} | {}x{} | iterations {} | magnification {:.2}x | center ({:.4}, {:.4}) | c {:.4}{:+.4}i | tint ({r:.2}, {g:.2}, {b:.2})",
            self.kind,
            self.viewport.width,
            self.viewport.height,
            p.iterations,
            p.magnification(),
            p.center[0],
            p.center[1],
            p.julia_c[0],
            p.julia_c[1],
        );
    }

    /// Advances animation by `dt` seconds, except on the first frame shown.
    fn advance_spin(&mut self, dt: f32) {
        if !self.kind.is_animated() {
            return;
        }
        if self.spin_running {
            self.spin.advance(dt);
        } else {
            self.spin_running = true;
        }
    }

    /// Called after a frame has been presented.
    fn frame_presented(&mut self) {
        self.render_requested = self.kind.is_animated();
    }
}

impl App for Viewer {
    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        match action_for(event) {
            Some(action) => self.apply(action),
            None => AppControl::Continue,
        }
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        log::debug!("resized to {width}x{height}");
        self.viewport = Viewport::new(width, height);
        self.render_requested = true;
    }

    fn needs_redraw(&self) -> bool {
        self.render_requested
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.advance_spin(ctx.time.dt);

        let scene = Scene {
            kind: self.kind,
            params: &self.params,
            tint: self.tint,
            spin: self.spin,
        };
        let renderer = &mut self.renderer;
        let control = ctx.render(CLEAR, |rctx, target| renderer.render(rctx, target, &scene));

        self.frame_presented();
        control
    }
}

#[cfg(test)]
mod tests {
    use fractals_engine::input::{Key, KeyState, MouseWheelDelta};

    use super::*;
    use crate::params::MIN_ITERATIONS;

    fn press(viewer: &mut Viewer, key: Key) -> AppControl {
        viewer.on_input(&InputEvent::key_pressed(key))
    }

    /// A viewer whose first frame has already been drawn.
    fn idle_viewer(start: FractalKind) -> Viewer {
        let mut v = Viewer::new(start);
        v.frame_presented();
        v
    }

    // ── rendering on demand ───────────────────────────────────────────────

    #[test]
    fn first_frame_is_requested() {
        assert!(Viewer::new(FractalKind::Mandelbrot).needs_redraw());
    }

    #[test]
    fn presenting_clears_request() {
        let v = idle_viewer(FractalKind::Mandelbrot);
        assert!(!v.needs_redraw());
    }

    #[test]
    fn handled_input_requests_render() {
        let mut v = idle_viewer(FractalKind::Mandelbrot);
        press(&mut v, Key::ArrowLeft);
        assert!(v.needs_redraw());
    }

    #[test]
    fn unbound_input_does_not_render() {
        let mut v = idle_viewer(FractalKind::Mandelbrot);
        press(&mut v, Key::Z);
        v.on_input(&InputEvent::Key { key: Key::E, state: KeyState::Released, repeat: false });
        assert!(!v.needs_redraw());
    }

    #[test]
    fn report_does_not_render() {
        let mut v = idle_viewer(FractalKind::Julia);
        press(&mut v, Key::P);
        assert!(!v.needs_redraw());
    }

    #[test]
    fn cube_keeps_rendering() {
        let mut v = idle_viewer(FractalKind::Julia);
        press(&mut v, Key::N);
        assert_eq!(v.kind, FractalKind::Cube);
        v.frame_presented();
        assert!(v.needs_redraw());

        press(&mut v, Key::N);
        v.frame_presented();
        assert!(!v.needs_redraw());
    }

    // ── fractal cycling ───────────────────────────────────────────────────

    #[test]
    fn n_cycles_through_all_kinds() {
        let mut v = Viewer::new(FractalKind::Mandelbrot);
        let mut seen = vec![v.kind];
        for _ in 0..4 {
            press(&mut v, Key::N);
            seen.push(v.kind);
        }
        assert_eq!(
            seen,
            [
                FractalKind::Mandelbrot,
                FractalKind::Julia,
                FractalKind::Cube,
                FractalKind::Raymarcher,
                FractalKind::Mandelbrot,
            ]
        );
    }

    #[test]
    fn cycling_resets_camera_and_forces_render() {
        let mut v = idle_viewer(FractalKind::Mandelbrot);
        press(&mut v, Key::E);
        press(&mut v, Key::ArrowUp);
        v.on_input(&InputEvent::MouseWheel { delta: MouseWheelDelta::Line { x: 0.0, y: 1.0 } });
        press(&mut v, Key::A);
        v.frame_presented();

        press(&mut v, Key::N);
        assert_eq!(v.params, ViewParams::defaults_for(FractalKind::Julia));
        assert!(v.needs_redraw());
    }

    #[test]
    fn cycling_keeps_tint() {
        let mut v = Viewer::new(FractalKind::Mandelbrot);
        press(&mut v, Key::Digit2);
        let tint = v.tint;
        press(&mut v, Key::N);
        assert_eq!(v.tint, tint);
    }

    #[test]
    fn random_tint_renders_and_survives_cycling() {
        let mut v = idle_viewer(FractalKind::Mandelbrot);
        press(&mut v, Key::R);
        assert!(v.needs_redraw());
        assert!(v.tint.0.iter().all(|c| (0.0..1.0).contains(c)));

        let tint = v.tint;
        press(&mut v, Key::N);
        assert_eq!(v.tint, tint);
    }

    #[test]
    fn cycling_resets_cube_spin() {
        let mut v = Viewer::new(FractalKind::Cube);
        v.spin.advance(1.0);
        for _ in 0..4 {
            press(&mut v, Key::N);
        }
        assert_eq!(v.kind, FractalKind::Cube);
        assert_eq!(v.spin, CubeSpin::default());
    }

    // ── parameters ────────────────────────────────────────────────────────

    #[test]
    fn iterations_floor_holds_through_input() {
        let mut v = Viewer::new(FractalKind::Mandelbrot);
        for _ in 0..200 {
            press(&mut v, Key::Q);
        }
        assert_eq!(v.params.iterations, MIN_ITERATIONS);
        press(&mut v, Key::E);
        assert_eq!(v.params.iterations, MIN_ITERATIONS + 50);
    }

    #[test]
    fn wheel_zooms() {
        let mut v = Viewer::new(FractalKind::Mandelbrot);
        v.on_input(&InputEvent::MouseWheel { delta: MouseWheelDelta::Line { x: 0.0, y: -1.0 } });
        assert!((v.params.zoom - 1.1).abs() < 1e-5);
    }

    #[test]
    fn julia_keys_move_constant() {
        let mut v = Viewer::new(FractalKind::Julia);
        let before = v.params.julia_c;
        press(&mut v, Key::S);
        press(&mut v, Key::F);
        let after = v.params.julia_c;
        assert!((after[0] - before[0] - 0.05).abs() < 1e-5);
        assert!((after[1] - before[1] - 0.05).abs() < 1e-5);
    }

    #[test]
    fn escape_exits() {
        let mut v = Viewer::new(FractalKind::Mandelbrot);
        assert_eq!(press(&mut v, Key::Escape), AppControl::Exit);
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn resize_records_size_and_forces_render() {
        let mut v = idle_viewer(FractalKind::Raymarcher);
        v.on_resize(1920, 1080);
        assert_eq!(v.viewport, Viewport::new(1920, 1080));
        assert!(v.needs_redraw());
    }

    // ── cube animation ────────────────────────────────────────────────────

    #[test]
    fn first_cube_frame_starts_at_initial_angle() {
        let mut v = idle_viewer(FractalKind::Julia);
        press(&mut v, Key::N);
        // The clock stalled while Julia was idle, so the first dt is clamped.
        v.advance_spin(0.25);
        assert_eq!(v.spin, CubeSpin::default());

        v.advance_spin(0.5);
        let mut expected = CubeSpin::default();
        expected.advance(0.5);
        assert_eq!(v.spin, expected);
    }

    #[test]
    fn still_kinds_never_spin() {
        let mut v = Viewer::new(FractalKind::Mandelbrot);
        v.advance_spin(1.0);
        v.advance_spin(1.0);
        assert_eq!(v.spin, CubeSpin::default());
    }

    #[test]
    fn returning_to_cube_restarts_spin() {
        let mut v = Viewer::new(FractalKind::Cube);
        v.advance_spin(0.1);
        v.advance_spin(1.0);
        assert_ne!(v.spin, CubeSpin::default());

        for _ in 0..4 {
            press(&mut v, Key::N);
        }
        v.advance_spin(0.25);
        assert_eq!(v.spin, CubeSpin::default());
    }
}
