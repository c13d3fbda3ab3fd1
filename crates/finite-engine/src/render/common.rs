//! Shared GPU types and vertex layouts.

use bytemuck::{Pod, Zeroable};

use crate::scene::{ColorVertex, SpriteVertex, TileVertex, UiVertex};

/// Straight (non-premultiplied) source-alpha blending.
pub(super) fn alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState::ALPHA_BLENDING
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

pub(super) fn camera_ubo_min_binding_size() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<CameraUniform>() as u64)
}

// ── vertex layouts ────────────────────────────────────────────────────────

const TILE_ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
    0 => Float32x3, // position (world)
    1 => Float32x4, // color
    2 => Float32x2  // uv
];

const UI_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    0 => Float32x4, // position (ndc)
    1 => Float32x2  // uv
];

const COLOR_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    0 => Float32x4, // position (ndc)
    1 => Float32x4  // color
];

const SPRITE_ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
    0 => Float32x4, // position (ndc)
    1 => Float32x4, // color
    2 => Float32x2  // uv
];

fn layout<V>(attributes: &'static [wgpu::VertexAttribute]) -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<V>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes,
    }
}

pub(super) fn tile_layout() -> wgpu::VertexBufferLayout<'static> {
    layout::<TileVertex>(&TILE_ATTRS)
}

pub(super) fn ui_layout() -> wgpu::VertexBufferLayout<'static> {
    layout::<UiVertex>(&UI_ATTRS)
}

pub(super) fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    layout::<ColorVertex>(&COLOR_ATTRS)
}

pub(super) fn sprite_layout() -> wgpu::VertexBufferLayout<'static> {
    layout::<SpriteVertex>(&SPRITE_ATTRS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strides_match_vertex_structs() {
        assert_eq!(tile_layout().array_stride, 36);
        assert_eq!(ui_layout().array_stride, 24);
        assert_eq!(color_layout().array_stride, 32);
        assert_eq!(sprite_layout().array_stride, 40);
    }

    #[test]
    fn camera_uniform_is_one_mat4() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);
        assert!(camera_ubo_min_binding_size().is_some());
    }
}
