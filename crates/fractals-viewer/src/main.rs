//! Interactive GPU fractal viewer.
//!
//! Controls: arrows pan, mouse wheel zooms, `q`/`e` change the iteration
//! count, `n` cycles fractals, `a`/`s`/`d`/`f` move the Julia constant,
//! `1`/`2`/`3` shift the tint, `r` randomizes it, `p` logs the current view,
//! `Esc` quits.

mod config;
mod controls;
mod cube;
mod fractal;
mod mesh;
mod params;
mod program;
mod renderer;
mod uniforms;
mod viewer;

use anyhow::Result;
use fractals_engine::logging::init_logging;
use fractals_engine::window::Runtime;

use crate::config::ViewerConfig;
use crate::viewer::Viewer;

fn run(config: ViewerConfig) -> Result<()> {
    log::info!("starting with {}", config.start);
    let viewer = Viewer::new(config.start);
    Runtime::run(config.runtime_config(), config.gpu_init(), viewer)
}

fn main() {
    let config = ViewerConfig::default();
    init_logging(config.logging.clone());

    if let Err(err) = run(config) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
