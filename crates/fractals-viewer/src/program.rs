use bytemuck::Pod;

use crate::mesh::{Mesh, Vertex};

/// Everything needed to build a [`ShaderProgram`].
pub struct ProgramDesc<'a> {
    pub label: &'a str,
    /// Complete WGSL module with `vs_main` and `fs_main` entry points.
    pub source: String,
    /// Size of the uniform block at `@group(0) @binding(0)`.
    pub uniform_size: u64,
    /// Enables depth testing against an attachment of this format.
    pub depth_format: Option<wgpu::TextureFormat>,
}

/// A compiled render pipeline plus its single uniform block.
///
/// Every program reads `@group(0) @binding(0)` in both stages and consumes
/// [`Vertex`] positions at `@location(0)`.
pub struct ShaderProgram {
    label: String,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ShaderProgram {
    pub fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat, desc: ProgramDesc<'_>) -> Self {
        let ProgramDesc {
            label,
            source,
            uniform_size,
            depth_format,
        } = desc;

        log::debug!("compiling program `{label}`");

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(label),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(uniform_size),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: depth_format.map(|format| wgpu::DepthStencilState {
                format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: uniform_size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            label: label.to_string(),
            pipeline,
            uniform_buffer,
            bind_group,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Uploads the uniform block. Takes effect for the next submitted draw.
    pub fn write_uniform<T: Pod>(&self, queue: &wgpu::Queue, value: &T) {
        debug_assert_eq!(
            std::mem::size_of::<T>() as u64,
            self.uniform_buffer.size(),
            "uniform size mismatch for `{}`",
            self.label
        );
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(value));
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, mesh: &Mesh) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, mesh.vertex_buffer().slice(..));
        pass.draw(0..mesh.vertex_count(), 0..1);
    }
}
