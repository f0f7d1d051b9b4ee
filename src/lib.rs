// src/lib.rs

//! A bridge that lets an external process hand raw geometry to a host sketch
//! for immediate-mode rendering.
//!
//! Callers share flat numeric buffers (coordinates, optional per-primitive
//! stroke weights, optional per-primitive packed colors) together with a
//! declared primitive kind, then trigger a synchronous render. The renderer
//! interprets the buffers by stride and issues the corresponding draw calls
//! on an injected [`DrawSurface`], batching primitives that share a style so
//! the surface sees the minimum number of style-state changes.

pub mod batch;
pub mod bridge;
pub mod buffer;
pub mod color;
pub mod renderer;
pub mod surface;

pub use batch::{PrimitiveBatch, PrimitiveKind};
pub use bridge::SketchBridge;
pub use buffer::{cast_colors, cast_floats, BatchBuffers, BufferError, LayoutError};
pub use color::Color;
pub use renderer::PrimitiveRenderer;
pub use surface::{DrawSurface, HeadlessSurface, ShapeMode};
