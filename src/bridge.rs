// src/bridge.rs

//! The two-call configure/render protocol exposed to foreign callers.
//!
//! A caller first shares its buffers (`share_buffers`, or the legacy variant
//! without an explicit kind), then triggers a synchronous render of the
//! configured batch (`draw_primitives`). There is no queue: each
//! configuration call supersedes the previous batch.
//!
//! The bridge borrows the caller's buffers; the lifetime parameter ties the
//! bridge to them, so a caller cannot free or rewrite the buffers while a
//! configured batch still references them. Both calls are expected to be made
//! from the thread that owns the drawing surface.

use anyhow::Result;
use log::warn;

use crate::batch::{PrimitiveBatch, PrimitiveKind};
use crate::color::Color;
use crate::renderer::PrimitiveRenderer;
use crate::surface::DrawSurface;

/// Receives foreign primitive buffers and renders them on demand.
pub struct SketchBridge<'a> {
    batch: Option<PrimitiveBatch<'a>>,
    renderer: PrimitiveRenderer,
}

impl<'a> SketchBridge<'a> {
    pub fn new() -> Self {
        SketchBridge {
            batch: None,
            renderer: PrimitiveRenderer::new(),
        }
    }

    /// Stores the caller's buffer references and batch metadata.
    ///
    /// Performs no validation and no copying: the declared counts are the
    /// caller's contract, checked only by the slice bounds at render time.
    /// `kind` is matched case-insensitively; an unrecognized kind is kept and
    /// reported when the batch is drawn.
    #[allow(clippy::too_many_arguments)] // mirrors the foreign calling convention
    pub fn share_buffers(
        &mut self,
        kind: &str,
        coords: &'a [f32],
        stroke_weights: Option<&'a [f32]>,
        colors: Option<&'a [Color]>,
        primitive_count: usize,
        coord_count: usize,
        closed: bool,
    ) {
        self.batch = Some(PrimitiveBatch::new(
            PrimitiveKind::parse(kind),
            coords,
            stroke_weights,
            colors,
            primitive_count,
            coord_count,
            closed,
        ));
    }

    /// Legacy configure call for callers predating the explicit kind
    /// parameter. Defaults to the unknown kind (draws nothing, logs a
    /// diagnostic) and open polylines.
    pub fn share_buffers_legacy(
        &mut self,
        coords: &'a [f32],
        stroke_weights: Option<&'a [f32]>,
        colors: Option<&'a [Color]>,
        primitive_count: usize,
    ) {
        self.batch = Some(PrimitiveBatch::legacy(
            coords,
            stroke_weights,
            colors,
            primitive_count,
        ));
    }

    /// The currently configured batch, if any.
    pub fn batch(&self) -> Option<&PrimitiveBatch<'a>> {
        self.batch.as_ref()
    }

    /// Renders the currently configured batch onto `surface`.
    ///
    /// With no batch configured this logs a diagnostic and draws nothing,
    /// the same non-fatal treatment an unknown kind gets.
    pub fn draw_primitives(&self, surface: &mut dyn DrawSurface) -> Result<()> {
        match &self.batch {
            Some(batch) => self.renderer.draw(batch, surface),
            None => {
                warn!("SketchBridge: draw_primitives called with no batch configured");
                Ok(())
            }
        }
    }
}

impl Default for SketchBridge<'_> {
    fn default() -> Self {
        Self::new()
    }
}
