use crate::scene::{DrawError, DrawList, PipelineKind};

use super::common::{
    alpha_blend, camera_ubo_min_binding_size, color_layout, sprite_layout, tile_layout, ui_layout,
    CameraUniform,
};
use super::{RenderCtx, RenderTarget, RendererLimits, TextureStore};

/// Per-frame counters, diagnostic only.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub draw_calls: u32,
    pub vertices: u32,
}

struct Pipelines {
    tile: wgpu::RenderPipeline,
    text: wgpu::RenderPipeline,
    color: wgpu::RenderPipeline,
    points: wgpu::RenderPipeline,
    sprite: wgpu::RenderPipeline,
}

impl Pipelines {
    fn get(&self, kind: PipelineKind) -> &wgpu::RenderPipeline {
        match kind {
            PipelineKind::Tile => &self.tile,
            PipelineKind::Text => &self.text,
            PipelineKind::Color => &self.color,
            PipelineKind::Points => &self.points,
            PipelineKind::Sprite => &self.sprite,
        }
    }
}

/// One fixed-size GPU vertex buffer per CPU stream.
struct StreamBuffers {
    tile: wgpu::Buffer,
    text: wgpu::Buffer,
    color: wgpu::Buffer,
    sprite: wgpu::Buffer,
}

impl StreamBuffers {
    fn get(&self, kind: PipelineKind) -> &wgpu::Buffer {
        match kind {
            PipelineKind::Tile => &self.tile,
            PipelineKind::Text => &self.text,
            PipelineKind::Color | PipelineKind::Points => &self.color,
            PipelineKind::Sprite => &self.sprite,
        }
    }
}

/// Replays a [`DrawList`] on the GPU.
///
/// Pipelines, the camera uniform and the vertex buffers are created lazily on
/// first use and rebuilt when the surface format changes. Each frame uploads
/// every stream once, then issues one draw per recorded command, in order,
/// inside a single render pass that loads the cleared frame.
pub struct Renderer2D {
    limits: RendererLimits,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipelines: Option<Pipelines>,

    camera_bgl: Option<wgpu::BindGroupLayout>,
    camera_ubo: Option<wgpu::Buffer>,
    camera_bind_group: Option<wgpu::BindGroup>,

    buffers: Option<StreamBuffers>,

    last_stats: FrameStats,
    warned_missing_texture: bool,
}

impl Renderer2D {
    pub fn new(limits: RendererLimits) -> Self {
        Self {
            limits,
            pipeline_format: None,
            pipelines: None,
            camera_bgl: None,
            camera_ubo: None,
            camera_bind_group: None,
            buffers: None,
            last_stats: FrameStats::default(),
            warned_missing_texture: false,
        }
    }

    #[inline]
    pub fn limits(&self) -> RendererLimits {
        self.limits
    }

    /// Stats of the most recent `render` call.
    #[inline]
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Fails when any stream of `list` holds more vertices than the matching
    /// GPU buffer was sized for. Lists built with larger limits than this
    /// renderer are caught here instead of overrunning the upload.
    pub fn check_fits(&self, list: &DrawList) -> Result<(), DrawError> {
        let l = self.limits;
        let streams = [
            ("tile", list.tile_vertices().len(), l.max_tile_vertices),
            ("text", list.text_vertices().len(), l.max_text_vertices),
            ("color", list.color_vertices().len(), l.max_color_vertices),
            ("sprite", list.sprite_vertices().len(), l.max_sprite_vertices),
        ];
        for (stream, requested, capacity) in streams {
            if requested > capacity {
                return Err(DrawError::CapacityExceeded { stream, requested, capacity });
            }
        }
        Ok(())
    }

    /// Uploads and replays `list`. Nothing is written to the GPU when the
    /// list does not fit this renderer's buffers.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        list: &DrawList,
        textures: &TextureStore,
    ) -> Result<FrameStats, DrawError> {
        self.check_fits(list)?;

        self.ensure_pipelines(ctx, textures);
        self.ensure_camera(ctx);
        self.ensure_buffers(ctx);

        if list.pending_batch() > 0 {
            log::trace!("{} sprite vertices still buffered at render", list.pending_batch());
        }

        self.upload(ctx, list);

        let Some(pipelines) = self.pipelines.as_ref() else { return Ok(FrameStats::default()) };
        let Some(buffers) = self.buffers.as_ref() else { return Ok(FrameStats::default()) };
        let Some(camera_bg) = self.camera_bind_group.as_ref() else { return Ok(FrameStats::default()) };

        let mut stats = FrameStats::default();
        let mut missing_texture = false;
        {
            let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("finite 2d pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            let mut bound: Option<PipelineKind> = None;
            for cmd in list.cmds() {
                let texture_bg = match cmd.texture {
                    Some(id) => match textures.bind_group(id) {
                        Some(bg) => Some(bg),
                        None => {
                            missing_texture = true;
                            continue;
                        }
                    },
                    None => None,
                };

                if bound != Some(cmd.pipeline) {
                    rpass.set_pipeline(pipelines.get(cmd.pipeline));
                    rpass.set_vertex_buffer(0, buffers.get(cmd.pipeline).slice(..));
                    if cmd.pipeline == PipelineKind::Tile {
                        rpass.set_bind_group(0, camera_bg, &[]);
                    }
                    bound = Some(cmd.pipeline);
                }

                if let Some(bg) = texture_bg {
                    let group = if cmd.pipeline == PipelineKind::Tile { 1 } else { 0 };
                    rpass.set_bind_group(group, bg, &[]);
                }

                rpass.draw(cmd.vertices.clone(), 0..1);
                stats.draw_calls += 1;
                stats.vertices += cmd.vertex_count();
            }
        }

        if missing_texture && !self.warned_missing_texture {
            log::warn!("draw commands referencing unknown textures were skipped");
            self.warned_missing_texture = true;
        }

        self.last_stats = stats;
        Ok(stats)
    }

    fn upload(&mut self, ctx: &RenderCtx<'_>, list: &DrawList) {
        let Some(camera_ubo) = self.camera_ubo.as_ref() else { return };
        let camera = CameraUniform { view_proj: list.view_proj().to_cols_array_2d() };
        ctx.queue.write_buffer(camera_ubo, 0, bytemuck::bytes_of(&camera));

        let Some(buffers) = self.buffers.as_ref() else { return };
        let write = |buf: &wgpu::Buffer, bytes: &[u8]| {
            if !bytes.is_empty() {
                ctx.queue.write_buffer(buf, 0, bytes);
            }
        };
        write(&buffers.tile, bytemuck::cast_slice(list.tile_vertices()));
        write(&buffers.text, bytemuck::cast_slice(list.text_vertices()));
        write(&buffers.color, bytemuck::cast_slice(list.color_vertices()));
        write(&buffers.sprite, bytemuck::cast_slice(list.sprite_vertices()));
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>, textures: &TextureStore) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipelines.is_some() {
            return;
        }

        let camera_bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("finite camera bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: camera_ubo_min_binding_size(),
                },
                count: None,
            }],
        });
        let texture_bgl = textures.bind_group_layout();

        let builder = PipelineBuilder { ctx };
        let pipelines = Pipelines {
            tile: builder.build(
                "tile",
                include_str!("shaders/tile.wgsl"),
                &[&camera_bgl, texture_bgl],
                tile_layout(),
                wgpu::PrimitiveTopology::TriangleList,
            ),
            text: builder.build(
                "text",
                include_str!("shaders/text.wgsl"),
                &[texture_bgl],
                ui_layout(),
                wgpu::PrimitiveTopology::TriangleList,
            ),
            color: builder.build(
                "color",
                include_str!("shaders/color.wgsl"),
                &[],
                color_layout(),
                wgpu::PrimitiveTopology::TriangleList,
            ),
            points: builder.build(
                "points",
                include_str!("shaders/color.wgsl"),
                &[],
                color_layout(),
                wgpu::PrimitiveTopology::PointList,
            ),
            sprite: builder.build(
                "sprite",
                include_str!("shaders/sprite.wgsl"),
                &[texture_bgl],
                sprite_layout(),
                wgpu::PrimitiveTopology::TriangleList,
            ),
        };
        log::debug!("renderer pipelines built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipelines = Some(pipelines);
        self.camera_bgl = Some(camera_bgl);

        self.camera_ubo = None;
        self.camera_bind_group = None;
    }

    fn ensure_camera(&mut self, ctx: &RenderCtx<'_>) {
        if self.camera_bind_group.is_some() && self.camera_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.camera_bgl.as_ref() else { return };

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("finite camera ubo"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("finite camera bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.camera_ubo = Some(ubo);
        self.camera_bind_group = Some(bind_group);
    }

    fn ensure_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.buffers.is_some() {
            return;
        }

        let make = |label: &str, vertices: usize, stride: u64| {
            ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: (vertices.max(1) as u64) * stride,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let l = self.limits;
        self.buffers = Some(StreamBuffers {
            tile: make("finite tile vbo", l.max_tile_vertices, tile_layout().array_stride),
            text: make("finite text vbo", l.max_text_vertices, ui_layout().array_stride),
            color: make("finite color vbo", l.max_color_vertices, color_layout().array_stride),
            sprite: make("finite sprite vbo", l.max_sprite_vertices, sprite_layout().array_stride),
        });
    }
}

impl Default for Renderer2D {
    fn default() -> Self {
        Self::new(RendererLimits::default())
    }
}

struct PipelineBuilder<'a, 'c> {
    ctx: &'a RenderCtx<'c>,
}

impl PipelineBuilder<'_, '_> {
    fn build(
        &self,
        name: &str,
        source: &str,
        bind_group_layouts: &[&wgpu::BindGroupLayout],
        vertex_layout: wgpu::VertexBufferLayout<'static>,
        topology: wgpu::PrimitiveTopology,
    ) -> wgpu::RenderPipeline {
        let device = self.ctx.device;
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("finite {name} shader")),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("finite {name} pipeline layout")),
            bind_group_layouts,
            immediate_size: 0,
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("finite {name} pipeline")),
            layout: Some(&layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[vertex_layout],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.ctx.surface_format,
                    blend: Some(alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;

    use super::*;
    use crate::coords::{ColorRgba, Ndc, Viewport};

    fn list_with_dots(limits: RendererLimits, dots: usize) -> DrawList {
        let mut list = DrawList::new(limits);
        list.begin_frame(Viewport::new(640.0, 480.0), Mat4::IDENTITY);
        for _ in 0..dots {
            list.draw_dot(Ndc::new(0.0, 0.0), ColorRgba::white()).unwrap();
        }
        list
    }

    #[test]
    fn list_within_renderer_limits_fits() {
        let limits = RendererLimits { max_color_vertices: 8, ..Default::default() };
        let renderer = Renderer2D::new(limits);
        assert_eq!(renderer.check_fits(&list_with_dots(limits, 8)), Ok(()));
    }

    #[test]
    fn list_built_with_larger_limits_is_rejected() {
        let renderer = Renderer2D::new(RendererLimits { max_color_vertices: 6, ..Default::default() });
        let list = list_with_dots(RendererLimits::default(), 7);
        assert_eq!(
            renderer.check_fits(&list),
            Err(DrawError::CapacityExceeded { stream: "color", requested: 7, capacity: 6 })
        );
    }

    #[test]
    fn larger_limits_alone_are_not_an_error() {
        let renderer = Renderer2D::new(RendererLimits { max_color_vertices: 6, ..Default::default() });
        let list = list_with_dots(RendererLimits::default(), 3);
        assert!(renderer.check_fits(&list).is_ok());
    }
}
