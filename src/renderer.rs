// src/renderer.rs

//! This module defines the `PrimitiveRenderer`.
//!
//! The `PrimitiveRenderer`'s primary responsibility is to translate a
//! configured `PrimitiveBatch` into low-level draw calls on a `DrawSurface`,
//! using the minimum number of style-state changes. It is surface-agnostic:
//! it contains no canvas-specific drawing code and relies entirely on the
//! `DrawSurface` trait for its drawing primitives.
//!
//! Uniform batches collapse into a single shape primitive; per-primitive
//! styling forces the shape to be closed and reopened, because the underlying
//! immediate-mode surface binds style at primitive-begin time.

use anyhow::Result;
use log::{trace, warn};

use crate::batch::{PrimitiveBatch, PrimitiveKind};
use crate::surface::{DrawSurface, ShapeMode};

/// The `PrimitiveRenderer` translates a `PrimitiveBatch` into abstract
/// drawing commands.
///
/// It dispatches on the batch's primitive kind, batching primitives that
/// share a style into one draw call and falling back to per-primitive draw
/// calls where styling varies. The renderer is stateless beyond the scope of
/// a single `draw` call.
pub struct PrimitiveRenderer {}

impl PrimitiveRenderer {
    /// Creates a new `PrimitiveRenderer` instance.
    pub fn new() -> Self {
        Self {}
    }

    /// Draws one batch onto the provided `DrawSurface`.
    ///
    /// This method performs the core rendering logic:
    /// 1. Saves the surface's style state with `push_style`.
    /// 2. Dispatches on the batch's kind to the points, lines, or polylines
    ///    routine. An unknown kind logs a diagnostic and draws nothing.
    /// 3. Restores the style state with `pop_style`, whether or not the
    ///    dispatch succeeded, so the batch's styling never leaks into
    ///    subsequent unrelated drawing.
    ///
    /// # Arguments
    ///
    /// * `batch`: The configured batch. Its declared counts are the caller's
    ///            contract; coordinates outside the buffer's actual bounds
    ///            panic rather than being recovered.
    /// * `surface`: A mutable reference to a `DrawSurface` implementation,
    ///              which will execute the low-level drawing commands.
    ///
    /// # Returns
    ///
    /// * `Result<()>`: `Ok(())` if drawing was successful, or the first error
    ///                 the surface reported. When the dispatch fails, the
    ///                 style restore still runs and the dispatch error is the
    ///                 one returned.
    pub fn draw(&self, batch: &PrimitiveBatch, surface: &mut dyn DrawSurface) -> Result<()> {
        surface.push_style()?;
        let drawn = self.dispatch(batch, surface);
        let restored = surface.pop_style();
        drawn.and(restored)
    }

    fn dispatch(&self, batch: &PrimitiveBatch, surface: &mut dyn DrawSurface) -> Result<()> {
        trace!(
            "PrimitiveRenderer: drawing {} {} primitives",
            batch.primitive_count,
            batch.kind
        );
        match batch.kind {
            PrimitiveKind::Point2D | PrimitiveKind::Point3D => self.draw_points(batch, surface),
            PrimitiveKind::Line2D | PrimitiveKind::Line3D => self.draw_lines(batch, surface),
            PrimitiveKind::Polyline2D | PrimitiveKind::Polyline3D => {
                self.draw_polylines(batch, surface)
            }
            PrimitiveKind::Unknown(ref name) => {
                warn!("PrimitiveRenderer: unknown primitive kind: {}", name);
                Ok(())
            }
        }
    }

    /// Draws point primitives, stride 2 (2D) or 3 (3D) floats each.
    ///
    /// With no per-primitive styling, every point goes into one batched
    /// `Points` shape. Otherwise each point is its own shape, with its color
    /// and/or stroke weight applied before the shape opens.
    fn draw_points(&self, batch: &PrimitiveBatch, surface: &mut dyn DrawSurface) -> Result<()> {
        let stride = batch.kind.components_per_vertex();

        if batch.stroke_weights.is_none() && batch.colors.is_none() {
            surface.begin_shape(ShapeMode::Points)?;
            for i in 0..batch.primitive_count {
                emit_vertex(surface, batch, i * stride)?;
            }
            surface.end_shape()?;
        } else {
            for i in 0..batch.primitive_count {
                apply_style(surface, batch, i)?;
                surface.begin_shape(ShapeMode::Points)?;
                emit_vertex(surface, batch, i * stride)?;
                surface.end_shape()?;
            }
        }
        Ok(())
    }

    /// Draws line-segment primitives, stride 4 (2D) or 6 (3D) floats each.
    ///
    /// Three sub-paths, chosen to minimize style-state churn:
    /// - no styling: one batched `Lines` shape covering all segments;
    /// - colors only: one `Lines` shape per color run; stroke weight is a
    ///   fixed global here, so only a color change forces a shape restart;
    /// - weights present: each segment is an individual direct line call,
    ///   since the surface binds weight per immediate call, not per vertex.
    fn draw_lines(&self, batch: &PrimitiveBatch, surface: &mut dyn DrawSurface) -> Result<()> {
        let components = batch.kind.components_per_vertex();
        let stride = 2 * components;

        match (batch.stroke_weights, batch.colors) {
            (None, None) => {
                surface.begin_shape(ShapeMode::Lines)?;
                for i in 0..batch.primitive_count {
                    emit_vertex(surface, batch, i * stride)?;
                    emit_vertex(surface, batch, i * stride + components)?;
                }
                surface.end_shape()?;
            }
            (None, Some(colors)) => {
                // Run-length batch by color. `current` starts at a sentinel no
                // real color matches, so the first primitive applies its color
                // without closing the shape that was just opened.
                surface.begin_shape(ShapeMode::Lines)?;
                let mut current = None;

                for i in 0..batch.primitive_count {
                    let color = colors[i];
                    if current != Some(color) {
                        if current.is_some() {
                            surface.end_shape()?;
                            surface.begin_shape(ShapeMode::Lines)?;
                        }
                        surface.stroke(color)?;
                        current = Some(color);
                    }
                    emit_vertex(surface, batch, i * stride)?;
                    emit_vertex(surface, batch, i * stride + components)?;
                }
                surface.end_shape()?;
            }
            (Some(_), _) => {
                for i in 0..batch.primitive_count {
                    apply_style(surface, batch, i)?;
                    let base = i * stride;
                    let c = batch.coords;
                    if batch.kind.is_3d() {
                        surface.line3(
                            c[base],
                            c[base + 1],
                            c[base + 2],
                            c[base + 3],
                            c[base + 4],
                            c[base + 5],
                        )?;
                    } else {
                        surface.line2(c[base], c[base + 1], c[base + 2], c[base + 3])?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Draws polyline primitives, `coord_count` floats each.
    ///
    /// Each polyline is always its own `LineStrip` shape, since vertex counts
    /// vary per primitive. Fill is forced off: polylines are outlines only,
    /// even when the surface's default fill is enabled. A closed polyline
    /// re-emits its first vertex after the last one.
    fn draw_polylines(&self, batch: &PrimitiveBatch, surface: &mut dyn DrawSurface) -> Result<()> {
        let components = batch.kind.components_per_vertex();
        let vertices_per_polyline = batch.coord_count / components;

        for i in 0..batch.primitive_count {
            apply_style(surface, batch, i)?;
            surface.no_fill()?;

            surface.begin_shape(ShapeMode::LineStrip)?;
            let base = i * batch.coord_count;
            for j in 0..vertices_per_polyline {
                emit_vertex(surface, batch, base + j * components)?;
            }
            if batch.closed && vertices_per_polyline > 0 {
                emit_vertex(surface, batch, base)?;
            }
            surface.end_shape()?;
        }
        Ok(())
    }
}

/// Applies primitive `i`'s color and stroke weight, where those buffers are
/// present, to the surface's current style.
fn apply_style(surface: &mut dyn DrawSurface, batch: &PrimitiveBatch, i: usize) -> Result<()> {
    if let Some(colors) = batch.colors {
        surface.stroke(colors[i])?;
    }
    if let Some(weights) = batch.stroke_weights {
        surface.stroke_weight(weights[i])?;
    }
    Ok(())
}

/// Emits the vertex starting at `base` in the coordinate buffer, with 2 or 3
/// components according to the batch's dimensionality.
fn emit_vertex(surface: &mut dyn DrawSurface, batch: &PrimitiveBatch, base: usize) -> Result<()> {
    let c = batch.coords;
    if batch.kind.is_3d() {
        surface.vertex3(c[base], c[base + 1], c[base + 2])
    } else {
        surface.vertex2(c[base], c[base + 1])
    }
}

// Provides a default constructor for `PrimitiveRenderer`.
impl Default for PrimitiveRenderer {
    fn default() -> Self {
        Self::new()
    }
}
