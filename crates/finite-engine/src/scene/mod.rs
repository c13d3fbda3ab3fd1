//! CPU-side draw recording.
//!
//! Every draw call appends vertices to an append-only stream for its vertex
//! format and records one [`DrawCmd`] naming the range it wrote. At render
//! time each stream is uploaded once and the commands are replayed in order,
//! so draw order is exactly call order.
//!
//! - `begin_frame` starts a new buffer generation (all cursors back to zero)
//! - immediate draws write a fresh region and record one command each
//! - batched sprites accumulate with `buffer_rectangle` until `flush_batch`
//!
//! Shape-specific helpers live one file per shape under `scene::shapes`.

mod cmd;
mod error;
mod list;
mod stream;
mod vertex;

pub mod shapes;

pub use cmd::{DrawCmd, PipelineKind};
pub use error::DrawError;
pub use list::DrawList;
pub use stream::VertexStream;
pub use vertex::{ColorVertex, SpriteVertex, TileVertex, UiVertex};
