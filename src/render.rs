use crate::core::color::Rgb;
use crate::core::{BloomParams, Camera, FilmParams, FlatScene, Scene};
use web_sys as web;

mod helpers;
mod post;
mod scene_pass;
mod targets;

use post::{PostBindGroups, PostResources, PostUniforms};
use scene_pass::{SceneResources, SceneUniforms};
use targets::{RenderTargets, HDR_FORMAT};

/// WebGPU device, swapchain and the scene + post-processing chain.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: SceneResources,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: PostResources,
    bind_groups: PostBindGroups,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    bloom: BloomParams,
    film: FilmParams,
    time_accum: f32,
    flat: FlatScene,
}

fn clear_from_rgb(rgb: Rgb) -> wgpu::Color {
    wgpu::Color {
        r: rgb[0] as f64,
        g: rgb[1] as f64,
        b: rgb[2] as f64,
        a: 1.0,
    }
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        background: Rgb,
        bloom: &BloomParams,
        film: &FilmParams,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let targets = RenderTargets::new(&device, width, height, bloom.resolution_scale);
        let scene = scene_pass::create_scene_resources(&device);

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, HDR_FORMAT, format);
        let bind_groups = post::build_bind_groups(&device, &post, &linear_sampler, &targets);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            targets,
            linear_sampler,
            post,
            bind_groups,
            width,
            height,
            clear_color: clear_from_rgb(background),
            bloom: bloom.clone(),
            film: film.clone(),
            time_accum: 0.0,
            flat: FlatScene::default(),
        })
    }

    pub fn set_background(&mut self, rgb: Rgb) {
        self.clear_color = clear_from_rgb(rgb);
    }

    /// Take new effect parameters; a bloom resolution change reallocates targets.
    pub fn set_effects(&mut self, bloom: &BloomParams, film: &FilmParams) {
        let rescale = (bloom.resolution_scale - self.bloom.resolution_scale).abs() > f32::EPSILON;
        self.bloom = bloom.clone();
        self.film = film.clone();
        if rescale {
            self.rebuild_targets();
        }
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.rebuild_targets();
            log::info!("[gpu] resized to {}x{}", width, height);
        }
    }

    fn rebuild_targets(&mut self) {
        self.targets.recreate(
            &self.device,
            self.width,
            self.height,
            self.bloom.resolution_scale,
        );
        self.bind_groups =
            post::build_bind_groups(&self.device, &self.post, &self.linear_sampler, &self.targets);
    }

    fn write_post_uniforms(&self) {
        let full = [self.width as f32, self.height as f32];
        let [bw, bh] = self.targets.bloom_size;
        let half = [bw as f32, bh as f32];
        let write = |buf: &wgpu::Buffer, res: [f32; 2], dir: [f32; 2]| {
            let u = PostUniforms::new(res, self.time_accum, dir, &self.bloom, &self.film);
            self.queue.write_buffer(buf, 0, bytemuck::bytes_of(&u));
        };
        write(&self.post.uniforms_base, full, [0.0, 0.0]);
        write(&self.post.uniforms_blur_h, half, [1.0, 0.0]);
        write(&self.post.uniforms_blur_v, half, [0.0, 1.0]);
    }

    /// Draw `scene` from `camera` and run the post chain onto the canvas.
    pub fn render(
        &mut self,
        dt_sec: f32,
        scene: &Scene,
        camera: &Camera,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);

        scene.flatten_into(&mut self.flat);
        self.scene.upload(&self.device, &self.queue, &self.flat);
        let su = SceneUniforms {
            view_proj: camera.view_proj().to_cols_array_2d(),
            params: [camera.zfar, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&su));
        self.write_post_uniforms();

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: scene -> HDR
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.scene.draw(&mut rpass);
        }

        // Pass 2: bright pass -> bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.bind_groups.hdr,
            None,
        );

        // Pass 3: blur horizontal bloom_a -> bloom_b
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.bind_groups.from_bloom_a,
            None,
        );

        // Pass 4: blur vertical bloom_b -> bloom_a
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.bind_groups.from_bloom_b,
            None,
        );

        // Pass 5: composite + film to swapchain
        post::blit(
            &mut encoder,
            "composite",
            &view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.bind_groups.hdr,
            Some(&self.bind_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Reconfigure after a lost or outdated surface.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }
}
