use super::{RenderCtx, Viewport};

/// Depth attachment sized to the current viewport.
///
/// The texture is created on first use and recreated whenever the viewport
/// size changes, so callers never track resizes themselves.
#[derive(Default)]
pub struct DepthBuffer {
    target: Option<DepthTarget>,
}

struct DepthTarget {
    size: Viewport,
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl DepthBuffer {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

    /// Returns a depth view matching `ctx.viewport`, (re)creating it if needed.
    pub fn view(&mut self, ctx: &RenderCtx<'_>) -> &wgpu::TextureView {
        let size = Viewport::new(ctx.viewport.width.max(1), ctx.viewport.height.max(1));

        if self.target.as_ref().is_some_and(|t| t.size != size) {
            self.target = None;
        }

        let target = self
            .target
            .get_or_insert_with(|| DepthTarget::create(ctx.device, size));
        &target.view
    }
}

impl DepthTarget {
    fn create(device: &wgpu::Device, size: Viewport) -> Self {
        log::debug!("creating depth buffer {}x{}", size.width, size.height);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("fractals depth texture"),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DepthBuffer::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            size,
            _texture: texture,
            view,
        }
    }
}
