use fractals_engine::render::{DepthBuffer, RenderCtx, RenderTarget, Viewport};

use crate::cube::CubeSpin;
use crate::fractal::FractalKind;
use crate::mesh::{Mesh, CUBE_VERTICES, QUAD_VERTICES};
use crate::params::{Tint, ViewParams};
use crate::program::{ProgramDesc, ShaderProgram};
use crate::uniforms::{CubeUniform, FractalUniform};

const COMMON_WGSL: &str = include_str!("shaders/common.wgsl");
const MANDELBROT_WGSL: &str = include_str!("shaders/mandelbrot.wgsl");
const JULIA_WGSL: &str = include_str!("shaders/julia.wgsl");
const RAYMARCHER_WGSL: &str = include_str!("shaders/raymarcher.wgsl");
const CUBE_WGSL: &str = include_str!("shaders/cube.wgsl");

/// What to draw this frame.
#[derive(Debug, Copy, Clone)]
pub struct Scene<'a> {
    pub kind: FractalKind,
    pub params: &'a ViewParams,
    pub tint: Tint,
    pub spin: CubeSpin,
}

/// Owns one program per fractal kind plus the shared meshes.
///
/// GPU resources are created on first use and rebuilt if the surface format
/// changes.
#[derive(Default)]
pub struct FractalRenderer {
    format: Option<wgpu::TextureFormat>,
    programs: Option<Programs>,
    meshes: Option<Meshes>,
    depth: DepthBuffer,

    /// Viewport last pushed to every program.
    synced_viewport: Option<Viewport>,
}

struct Programs {
    by_kind: [ShaderProgram; 4],
}

struct Meshes {
    quad: Mesh,
    cube: Mesh,
}

impl FractalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, scene: &Scene<'_>) {
        self.ensure_programs(ctx);
        self.ensure_meshes(ctx);

        let Self {
            programs,
            meshes,
            depth,
            synced_viewport,
            ..
        } = self;
        let (Some(programs), Some(meshes)) = (programs.as_ref(), meshes.as_ref()) else {
            return;
        };

        // Window dimensions feed every program's uniforms, not just the visible one.
        if *synced_viewport != Some(ctx.viewport) {
            for kind in FractalKind::ALL {
                write_uniforms(ctx, programs.get(kind), &Scene { kind, ..*scene });
            }
            *synced_viewport = Some(ctx.viewport);
        }

        let program = programs.get(scene.kind);
        write_uniforms(ctx, program, scene);

        let depth_view = if scene.kind.uses_depth() {
            Some(depth.view(ctx))
        } else {
            None
        };

        let mut pass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(program.label()),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: depth_view.map(|view| wgpu::RenderPassDepthStencilAttachment {
                view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let mesh = match scene.kind {
            FractalKind::Cube => &meshes.cube,
            _ => &meshes.quad,
        };
        program.draw(&mut pass, mesh);
    }

    fn ensure_programs(&mut self, ctx: &RenderCtx<'_>) {
        if self.format == Some(ctx.surface_format) && self.programs.is_some() {
            return;
        }

        log::info!("building shader programs for {:?}", ctx.surface_format);

        let fractal = |label, fragment: &str| {
            ShaderProgram::new(
                ctx.device,
                ctx.surface_format,
                ProgramDesc {
                    label,
                    source: format!("{COMMON_WGSL}\n{fragment}"),
                    uniform_size: std::mem::size_of::<FractalUniform>() as u64,
                    depth_format: None,
                },
            )
        };

        let cube = ShaderProgram::new(
            ctx.device,
            ctx.surface_format,
            ProgramDesc {
                label: "cube program",
                source: CUBE_WGSL.to_string(),
                uniform_size: std::mem::size_of::<CubeUniform>() as u64,
                depth_format: Some(DepthBuffer::FORMAT),
            },
        );

        // Order follows `FractalKind::ALL`.
        self.programs = Some(Programs {
            by_kind: [
                fractal("mandelbrot program", MANDELBROT_WGSL),
                fractal("julia program", JULIA_WGSL),
                cube,
                fractal("raymarcher program", RAYMARCHER_WGSL),
            ],
        });
        self.format = Some(ctx.surface_format);
        self.synced_viewport = None;
    }

    fn ensure_meshes(&mut self, ctx: &RenderCtx<'_>) {
        if self.meshes.is_some() {
            return;
        }

        self.meshes = Some(Meshes {
            quad: Mesh::new(ctx.device, "fullscreen quad", &QUAD_VERTICES),
            cube: Mesh::new(ctx.device, "cube", &CUBE_VERTICES),
        });
    }
}

impl Programs {
    fn get(&self, kind: FractalKind) -> &ShaderProgram {
        &self.by_kind[kind.index()]
    }
}

fn write_uniforms(ctx: &RenderCtx<'_>, program: &ShaderProgram, scene: &Scene<'_>) {
    match scene.kind {
        FractalKind::Cube => program.write_uniform(
            ctx.queue,
            &CubeUniform::new(scene.params, scene.tint, scene.spin, ctx.viewport),
        ),
        _ => program.write_uniform(
            ctx.queue,
            &FractalUniform::new(scene.params, scene.tint, ctx.viewport),
        ),
    }
}
