//! GPU rendering.
//!
//! [`Renderer2D`] consumes a recorded [`crate::scene::DrawList`] and replays it
//! through five fixed pipelines. Textures live in a [`TextureStore`] and are
//! referenced from draw commands by [`TextureId`].
//!
//! Screen-space vertices arrive already in NDC; only tiles go through the
//! camera's view-projection on the GPU.

mod common;
mod ctx;
mod limits;
mod renderer;
mod texture;

pub use ctx::{RenderCtx, RenderTarget};
pub use limits::RendererLimits;
pub use renderer::{FrameStats, Renderer2D};
pub use texture::{TextureId, TextureInfo, TextureStore};
