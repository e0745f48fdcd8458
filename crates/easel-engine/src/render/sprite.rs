use std::collections::{HashMap, HashSet};
use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::compositor::CameraPass;
use crate::coords::{Color, Rect, Size2};
use crate::render::{RenderCtx, RenderTarget};
use crate::surface::{TextureData, TextureId, TextureStore};

use super::common::{
    pass_viewport, premul_alpha_blend, scissor_of, QuadVertex, QUAD_INDICES, QUAD_VERTICES,
};

/// Draws camera passes of textured quads.
///
/// Textures are uploaded from the [`TextureStore`] the first time a quad uses
/// them and released once the store no longer has them. Sampling is
/// nearest-neighbour.
#[derive(Default)]
pub struct SpriteRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    sampler: Option<wgpu::Sampler>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,

    textures: HashMap<TextureId, GpuTexture>,
    /// Textures the device cannot hold; warned about once.
    oversized: HashSet<TextureId>,
}

struct GpuTexture {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

impl SpriteRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the target to `clear`, then draws every pass clipped to its
    /// camera viewport.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        clear: Color,
        passes: &[CameraPass],
        store: &TextureStore,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_sampler(ctx);

        self.textures.retain(|id, _| store.contains(*id));
        self.oversized.retain(|id| store.contains(*id));
        for pass in passes {
            for quad in &pass.quads {
                self.ensure_texture(ctx, quad.texture, store);
            }
        }

        let (instances, batches) = build_batches(passes, ctx.scale_factor, ctx.target_size, |id| {
            self.textures.contains_key(&id)
        });

        if !instances.is_empty() {
            self.ensure_instance_capacity(ctx, instances.len());
            if let Some(vbo) = self.instance_vbo.as_ref() {
                ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&instances));
            }
        }

        let [r, g, b, a] = clear.to_f32();
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("easel sprite pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: a as f64,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if instances.is_empty() {
            return;
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };
        let Some(quad_ibo) = self.quad_ibo.as_ref() else { return };
        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);

        for batch in &batches {
            let Some((sx, sy, sw, sh)) = scissor_of(batch.viewport) else { continue };
            let v = batch.viewport;
            rpass.set_viewport(v.origin.x, v.origin.y, v.size.w, v.size.h, 0.0, 1.0);
            rpass.set_scissor_rect(sx, sy, sw, sh);

            for (texture, range) in &batch.runs {
                let Some(gpu) = self.textures.get(texture) else { continue };
                rpass.set_bind_group(0, &gpu.bind_group, &[]);
                rpass.draw_indexed(0..6, 0, range.clone());
            }
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("easel sprite shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("easel sprite bgl"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("easel sprite pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("easel sprite pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout(), SpriteInstance::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Rotation and negative scale flip winding.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        // Bind groups were built against the old layout.
        self.textures.clear();
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("easel sprite quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("easel sprite quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    fn ensure_sampler(&mut self, ctx: &RenderCtx<'_>) {
        if self.sampler.is_some() {
            return;
        }
        self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("easel sprite sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        }));
    }

    fn ensure_texture(&mut self, ctx: &RenderCtx<'_>, id: TextureId, store: &TextureStore) {
        if self.textures.contains_key(&id) {
            return;
        }
        let Some(data) = store.get(id) else { return };
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let Some(sampler) = self.sampler.as_ref() else { return };

        let max = ctx.device.limits().max_texture_dimension_2d;
        if !fits_device(data.size(), max) {
            if self.oversized.insert(id) {
                let Size2 { w, h } = data.size();
                log::warn!("texture {id:?} is {w}x{h}, over the device limit of {max}; not drawn");
            }
            return;
        }

        let format = texture_format_for(ctx.surface_format);
        let gpu = upload(ctx, bgl, sampler, data, format);
        self.textures.insert(id, gpu);
    }

    fn ensure_instance_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }

        let cap = required.next_power_of_two().max(64);
        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("easel sprite instance vbo"),
            size: (cap * std::mem::size_of::<SpriteInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = cap;
    }
}

fn upload(
    ctx: &RenderCtx<'_>,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    data: &TextureData,
    format: wgpu::TextureFormat,
) -> GpuTexture {
    let Size2 { w, h } = data.size();
    let extent = wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 };

    let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
        label: Some("easel sprite texture"),
        size: extent,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    ctx.queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        data.pixels(),
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * w),
            rows_per_image: Some(h),
        },
        extent,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("easel sprite bind group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });

    GpuTexture { _texture: texture, bind_group }
}

fn fits_device(size: Size2<u32>, max: u32) -> bool {
    size.w <= max && size.h <= max
}

/// Texel bytes reach the screen unchanged: an sRGB target re-encodes what an
/// sRGB texture decodes, a linear target gets the bytes as stored.
fn texture_format_for(surface_format: wgpu::TextureFormat) -> wgpu::TextureFormat {
    if surface_format.is_srgb() {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    }
}

// ── batching ──────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct SpriteInstance {
    corners: [[f32; 2]; 4],
    color: [f32; 4],
    /// Window onto camera resolution space the viewport shows: origin, size.
    view: [f32; 4],
}

impl SpriteInstance {
    const ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        1 => Float32x2, // top-left
        2 => Float32x2, // top-right
        3 => Float32x2, // bottom-right
        4 => Float32x2, // bottom-left
        5 => Float32x4, // tint
        6 => Float32x4  // view
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

/// One camera pass after clipping: its physical viewport and the instance
/// ranges to draw, split wherever the texture changes.
#[derive(Debug, PartialEq)]
struct PassBatch {
    viewport: Rect,
    runs: Vec<(TextureId, Range<u32>)>,
}

fn build_batches(
    passes: &[CameraPass],
    scale: f32,
    target: Size2<u32>,
    is_uploaded: impl Fn(TextureId) -> bool,
) -> (Vec<SpriteInstance>, Vec<PassBatch>) {
    let mut instances = Vec::new();
    let mut batches = Vec::new();

    for pass in passes {
        let Some(viewport) = pass_viewport(pass.viewport, scale, target, pass.resolution) else {
            continue;
        };
        let view = viewport.view;

        let mut runs: Vec<(TextureId, Range<u32>)> = Vec::new();
        for quad in pass.quads.iter().filter(|q| is_uploaded(q.texture)) {
            let i = instances.len() as u32;
            instances.push(SpriteInstance {
                corners: quad.corners.map(|p| [p.x, p.y]),
                color: quad.color.to_f32(),
                view,
            });

            match runs.last_mut() {
                Some((texture, range)) if *texture == quad.texture => range.end = i + 1,
                _ => runs.push((quad.texture, i..i + 1)),
            }
        }

        if !runs.is_empty() {
            batches.push(PassBatch { viewport: viewport.rect, runs });
        }
    }

    (instances, batches)
}
