use std::path::Path;

use anyhow::Context;

use crate::text::FontAtlas;

use super::RenderCtx;

/// Handle to a texture owned by a [`TextureStore`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(u32);

impl TextureId {
    #[inline]
    pub const fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Size and format of a stored texture.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextureInfo {
    pub width: u32,
    pub height: u32,
    pub format: wgpu::TextureFormat,
}

struct GpuTexture {
    info: TextureInfo,
    // Kept alive for the bind group.
    _texture: wgpu::Texture,
    _view: wgpu::TextureView,
    bind_group: wgpu::BindGroup,
}

/// Arena of GPU textures.
///
/// Every texture is created through the store and freed when the store is
/// dropped. Ids stay valid for the store's lifetime. All textures share one
/// nearest-neighbour, clamp-to-edge sampler and one bind group layout:
/// binding 0 is the texture, binding 1 the sampler.
pub struct TextureStore {
    slots: Vec<GpuTexture>,
    sampler: wgpu::Sampler,
    bind_group_layout: wgpu::BindGroupLayout,
}

impl TextureStore {
    pub fn new(device: &wgpu::Device) -> Self {
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("finite texture sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("finite texture bgl"),
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

        Self {
            slots: Vec::new(),
            sampler,
            bind_group_layout,
        }
    }

    #[inline]
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn bind_group(&self, id: TextureId) -> Option<&wgpu::BindGroup> {
        self.slot(id).map(|t| &t.bind_group)
    }

    pub fn info(&self, id: TextureId) -> Option<TextureInfo> {
        self.slot(id).map(|t| t.info)
    }

    fn slot(&self, id: TextureId) -> Option<&GpuTexture> {
        self.slots.get(id.0 as usize)
    }

    /// Uploads tightly packed sRGB RGBA8 pixels.
    pub fn upload_rgba8(
        &mut self,
        ctx: &RenderCtx<'_>,
        label: &str,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> anyhow::Result<TextureId> {
        let tex = self.create(ctx, label, width, height, wgpu::TextureFormat::Rgba8UnormSrgb, pixels)?;
        Ok(self.insert(tex))
    }

    /// Decodes a PNG from disk and uploads it as RGBA8.
    pub fn load_png(&mut self, ctx: &RenderCtx<'_>, path: &Path) -> anyhow::Result<TextureId> {
        let img = image::open(path)
            .with_context(|| format!("failed to decode image {}", path.display()))?
            .to_rgba8();
        let (w, h) = img.dimensions();
        let label = path.display().to_string();
        let id = self.upload_rgba8(ctx, &label, w, h, img.as_raw())?;
        log::info!("loaded texture {} ({w}x{h})", path.display());
        Ok(id)
    }

    /// Uploads the atlas pixels and attaches the result to it.
    ///
    /// A rebuilt atlas replaces the texture in `previous` (same id) so draw
    /// code holding the id keeps working.
    pub fn upload_font_atlas(
        &mut self,
        ctx: &RenderCtx<'_>,
        atlas: &mut FontAtlas,
        previous: Option<TextureId>,
    ) -> anyhow::Result<TextureId> {
        let tex = self
            .create(ctx, "finite font atlas", atlas.width, atlas.height, wgpu::TextureFormat::R8Unorm, &atlas.pixels)
            .context("failed to upload font atlas")?;

        let id = match previous {
            Some(id) if self.slot(id).is_some() => {
                self.slots[id.0 as usize] = tex;
                log::debug!("font atlas texture {id:?} replaced");
                id
            }
            _ => self.insert(tex),
        };
        atlas.attach_texture(id);
        Ok(id)
    }

    fn insert(&mut self, tex: GpuTexture) -> TextureId {
        let id = TextureId(self.slots.len() as u32);
        self.slots.push(tex);
        id
    }

    fn create(
        &self,
        ctx: &RenderCtx<'_>,
        label: &str,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        pixels: &[u8],
    ) -> anyhow::Result<GpuTexture> {
        let bpp = format.block_copy_size(None).unwrap_or(1);
        let expected = width as usize * height as usize * bpp as usize;
        anyhow::ensure!(width > 0 && height > 0, "texture {label:?} has zero size {width}x{height}");
        anyhow::ensure!(
            pixels.len() == expected,
            "texture {label:?}: {} bytes for {width}x{height} {format:?}, expected {expected}",
            pixels.len()
        );
        let max = ctx.device.limits().max_texture_dimension_2d;
        anyhow::ensure!(
            width <= max && height <= max,
            "texture {label:?} ({width}x{height}) exceeds device limit {max}"
        );

        let size = wgpu::Extent3d { width, height, depth_or_array_layers: 1 };
        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
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
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * bpp),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        Ok(GpuTexture {
            info: TextureInfo { width, height, format },
            _texture: texture,
            _view: view,
            bind_group,
        })
    }
}
