// src/surface/mod.rs

//! Defines the `DrawSurface` trait for host canvas implementations and the
//! common types shared by surfaces and the renderer, such as `ShapeMode`.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::color::Color;

pub mod headless;
#[cfg(test)]
pub mod mock;

pub use headless::HeadlessSurface;

/// Geometry mode bound when a shape primitive is opened.
///
/// The surface binds style state at `begin_shape` time, which is why the
/// renderer closes and reopens shapes whenever a per-primitive style changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeMode {
    /// Each vertex is an independent point.
    Points,
    /// Consecutive vertex pairs form independent line segments.
    Lines,
    /// Consecutive vertices form a connected, unfilled strip.
    LineStrip,
}

/// Defines the interface to a host-owned immediate-mode drawing surface.
///
/// A `DrawSurface` is responsible for:
/// 1.  Style state management: a save/restore stack (`push_style`/`pop_style`)
///     plus the current stroke color, stroke weight, and fill flag.
/// 2.  Shape primitives: `begin_shape`/`vertex*`/`end_shape` sequences in the
///     modes of [`ShapeMode`].
/// 3.  Direct convenience calls (`line2`/`line3`) that draw a single segment
///     with the current style, outside any open shape.
///
/// The renderer depends only on this abstraction; tests substitute an
/// implementation that records calls for assertions. All operations are
/// synchronous and must be invoked from the thread that owns the surface.
pub trait DrawSurface {
    /// Saves the current style state (stroke color, stroke weight, fill).
    fn push_style(&mut self) -> Result<()>;

    /// Restores the most recently saved style state.
    fn pop_style(&mut self) -> Result<()>;

    /// Sets the current stroke color.
    fn stroke(&mut self, color: Color) -> Result<()>;

    /// Sets the current stroke weight.
    fn stroke_weight(&mut self, weight: f32) -> Result<()>;

    /// Disables fill for subsequently drawn shapes.
    fn no_fill(&mut self) -> Result<()>;

    /// Opens a shape primitive in the given mode, binding the current style.
    fn begin_shape(&mut self, mode: ShapeMode) -> Result<()>;

    /// Emits a 2D vertex into the open shape.
    fn vertex2(&mut self, x: f32, y: f32) -> Result<()>;

    /// Emits a 3D vertex into the open shape.
    fn vertex3(&mut self, x: f32, y: f32, z: f32) -> Result<()>;

    /// Closes the open shape primitive.
    fn end_shape(&mut self) -> Result<()>;

    /// Draws a single 2D line segment with the current style.
    fn line2(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<()>;

    /// Draws a single 3D line segment with the current style.
    fn line3(&mut self, x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) -> Result<()>;
}
