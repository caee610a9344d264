use super::helpers::GrowableBuffer;
use super::targets::{DEPTH_FORMAT, HDR_FORMAT};
use crate::core::{FlatScene, SceneVertex};
use std::mem;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    // x: fade distance
    pub(crate) params: [f32; 4],
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: mem::size_of::<SceneVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

/// Pipelines and buffers for drawing the flattened scene.
///
/// Solid meshes go through `tri_pipeline`, wireframe meshes through
/// `line_pipeline`; both share one vertex buffer.
pub(crate) struct SceneResources {
    pub(crate) tri_pipeline: wgpu::RenderPipeline,
    pub(crate) line_pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    vertices: GrowableBuffer,
    tri_indices: GrowableBuffer,
    line_indices: GrowableBuffer,
    tri_count: u32,
    line_count: u32,
}

fn make_scene_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    topology: wgpu::PrimitiveTopology,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(match topology {
            wgpu::PrimitiveTopology::LineList => "scene_lines",
            _ => "scene_tris",
        }),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: HDR_FORMAT,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

pub(crate) fn create_scene_resources(device: &wgpu::Device) -> SceneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let tri_pipeline =
        make_scene_pipeline(device, &pl, &shader, wgpu::PrimitiveTopology::TriangleList);
    let line_pipeline = make_scene_pipeline(device, &pl, &shader, wgpu::PrimitiveTopology::LineList);
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    SceneResources {
        tri_pipeline,
        line_pipeline,
        uniform_buffer,
        bind_group,
        vertices: GrowableBuffer::new(device, "scene_vertices", wgpu::BufferUsages::VERTEX, 1 << 16),
        tri_indices: GrowableBuffer::new(device, "scene_tri_indices", wgpu::BufferUsages::INDEX, 1 << 16),
        line_indices: GrowableBuffer::new(device, "scene_line_indices", wgpu::BufferUsages::INDEX, 1 << 16),
        tri_count: 0,
        line_count: 0,
    }
}

impl SceneResources {
    pub(crate) fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, flat: &FlatScene) {
        self.vertices
            .write(device, queue, bytemuck::cast_slice(&flat.vertices));
        self.tri_indices
            .write(device, queue, bytemuck::cast_slice(&flat.triangle_indices));
        self.line_indices
            .write(device, queue, bytemuck::cast_slice(&flat.line_indices));
        self.tri_count = flat.triangle_indices.len() as u32;
        self.line_count = flat.line_indices.len() as u32;
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.vertices.is_empty() {
            return;
        }
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertices.slice());
        if self.tri_count > 0 {
            rpass.set_pipeline(&self.tri_pipeline);
            rpass.set_index_buffer(self.tri_indices.slice(), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.tri_count, 0, 0..1);
        }
        if self.line_count > 0 {
            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_index_buffer(self.line_indices.slice(), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.line_count, 0, 0..1);
        }
    }
}
