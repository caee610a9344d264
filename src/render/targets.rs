use super::helpers;
use wgpu;

pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Offscreen targets for the render pipeline.
///
/// - `hdr_*` hold the scene color in Rgba16Float, `depth_*` its depth.
/// - `bloom_*` are ping-pong buffers for bright-pass and blur, sized by the
///   bloom resolution scale.
pub(crate) struct RenderTargets {
    pub(crate) hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) bloom_a: wgpu::Texture,
    pub(crate) bloom_a_view: wgpu::TextureView,
    pub(crate) bloom_b: wgpu::Texture,
    pub(crate) bloom_b_view: wgpu::TextureView,
    pub(crate) bloom_size: [u32; 2],
}

pub(crate) fn bloom_size(width: u32, height: u32, scale: f32) -> [u32; 2] {
    let s = scale.clamp(0.05, 1.0);
    [
        ((width.max(1) as f32 * s) as u32).max(1),
        ((height.max(1) as f32 * s) as u32).max(1),
    ]
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32, bloom_scale: f32) -> Self {
        let sampled = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (hdr_tex, hdr_view) =
            helpers::create_texture(device, "hdr_tex", width, height, HDR_FORMAT, sampled);
        let (depth_tex, depth_view) = helpers::create_texture(
            device,
            "depth_tex",
            width,
            height,
            DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        let [bw, bh] = bloom_size(width, height, bloom_scale);
        let (bloom_a, bloom_a_view) =
            helpers::create_texture(device, "bloom_a", bw, bh, HDR_FORMAT, sampled);
        let (bloom_b, bloom_b_view) =
            helpers::create_texture(device, "bloom_b", bw, bh, HDR_FORMAT, sampled);
        Self {
            hdr_tex,
            hdr_view,
            depth_tex,
            depth_view,
            bloom_a,
            bloom_a_view,
            bloom_b,
            bloom_b_view,
            bloom_size: [bw, bh],
        }
    }

    pub(crate) fn recreate(
        &mut self,
        device: &wgpu::Device,
        width: u32,
        height: u32,
        bloom_scale: f32,
    ) {
        for t in [&self.hdr_tex, &self.depth_tex, &self.bloom_a, &self.bloom_b] {
            t.destroy();
        }
        *self = Self::new(device, width, height, bloom_scale);
    }
}
