use fractals_engine::device::GpuInit;
use fractals_engine::logging::LoggingConfig;
use fractals_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

use crate::fractal::FractalKind;

/// Startup configuration for the viewer.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    /// Initial window size in logical pixels.
    pub width: f64,
    pub height: f64,
    /// Fractal shown first.
    pub start: FractalKind,
    pub logging: LoggingConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Fractals".to_string(),
            width: 1280.0,
            height: 720.0,
            start: FractalKind::Mandelbrot,
            logging: LoggingConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        }
    }

    pub fn gpu_init(&self) -> GpuInit {
        GpuInit::default()
    }
}
