use bytemuck::{Pod, Zeroable};

/// World-space tile vertex. The tile pipeline applies the camera.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct TileVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
    pub uv: [f32; 2],
}

/// Screen-space textured vertex (glyphs).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct UiVertex {
    pub position: [f32; 4],
    pub uv: [f32; 2],
}

/// Screen-space solid vertex (rectangles, lines, dots).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

/// Screen-space tinted textured vertex (batched sprites).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
    pub uv: [f32; 2],
}

/// Two triangles from four corners: tl, tr, bl / bl, tr, br.
#[inline]
pub(crate) fn quad<V: Copy>(tl: V, tr: V, bl: V, br: V) -> [V; 6] {
    [tl, tr, bl, bl, tr, br]
}

#[inline]
pub(crate) fn ndc4(p: crate::coords::Ndc) -> [f32; 4] {
    [p.0.x, p.0.y, 0.0, 1.0]
}
