// src/buffer.rs

//! Foreign byte-region casting and batch buffer allocation.
//!
//! Callers that hand memory across a process or language boundary usually hold
//! it as raw bytes. `cast_floats`/`cast_colors` reinterpret such a region as a
//! typed slice without copying. `BatchBuffers` covers the other direction: a
//! host-side caller that wants correctly sized backing storage for a batch can
//! allocate it here and lend it out as a `PrimitiveBatch` view.

use thiserror::Error;

use crate::batch::{PrimitiveBatch, PrimitiveKind};
use crate::color::Color;

/// A caller-supplied byte region that cannot be viewed as the requested
/// element type.
#[derive(Error, Debug)]
pub enum BufferError {
    #[error("cannot view byte region as {target}: {reason}")]
    Cast {
        target: &'static str,
        reason: bytemuck::PodCastError,
    },
}

/// Views a raw byte region as 32-bit float coordinates or stroke weights.
///
/// Fails if the region is misaligned for `f32` or its length is not a
/// multiple of 4. The bytes are interpreted in native endianness, the same
/// convention direct-buffer callers write with.
pub fn cast_floats(bytes: &[u8]) -> Result<&[f32], BufferError> {
    bytemuck::try_cast_slice(bytes).map_err(|reason| BufferError::Cast {
        target: "f32",
        reason,
    })
}

/// Views a raw byte region as packed per-primitive colors.
pub fn cast_colors(bytes: &[u8]) -> Result<&[Color], BufferError> {
    bytemuck::try_cast_slice(bytes).map_err(|reason| BufferError::Cast {
        target: "packed colors",
        reason,
    })
}

/// A batch layout request the allocator cannot satisfy.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Polyline kinds have no intrinsic stride; the caller must declare one.
    #[error("coord count must be provided for {0}")]
    MissingCoordCount(PrimitiveKind),
    #[error("cannot allocate buffers for unknown primitive kind `{0}`")]
    UnknownKind(String),
}

/// Owning backing storage for one batch, sized from the primitive kind.
///
/// The coordinate buffer always exists; stroke-weight and color buffers are
/// allocated only when requested, mirroring their optionality in the batch
/// itself. Storage is zero-initialized; the caller fills it in place between
/// render calls.
#[derive(Debug, Clone)]
pub struct BatchBuffers {
    kind: PrimitiveKind,
    primitive_count: usize,
    coord_count: usize,
    pub coords: Vec<f32>,
    pub weights: Option<Vec<f32>>,
    pub colors: Option<Vec<Color>>,
}

impl BatchBuffers {
    /// Allocates storage for `primitive_count` primitives of `kind`.
    ///
    /// Point and line kinds derive their per-primitive coordinate count from
    /// the kind; polyline kinds require an explicit `coord_count`. Allocating
    /// for an unknown kind is refused; there is no stride to size by.
    pub fn allocate(
        kind: PrimitiveKind,
        primitive_count: usize,
        coord_count: Option<usize>,
        stroked: bool,
        colored: bool,
    ) -> Result<Self, LayoutError> {
        let coord_count = if let Some(fixed) = kind.coords_per_primitive() {
            fixed
        } else {
            match &kind {
                PrimitiveKind::Unknown(name) => {
                    return Err(LayoutError::UnknownKind(name.clone()))
                }
                _ => coord_count.ok_or_else(|| LayoutError::MissingCoordCount(kind.clone()))?,
            }
        };

        Ok(BatchBuffers {
            kind,
            primitive_count,
            coord_count,
            coords: vec![0.0; primitive_count * coord_count],
            weights: stroked.then(|| vec![0.0; primitive_count]),
            colors: colored.then(|| vec![Color::default(); primitive_count]),
        })
    }

    pub fn kind(&self) -> &PrimitiveKind {
        &self.kind
    }

    pub fn primitive_count(&self) -> usize {
        self.primitive_count
    }

    pub fn coord_count(&self) -> usize {
        self.coord_count
    }

    /// Lends the storage out as a batch view for one render call.
    pub fn batch(&self, closed: bool) -> PrimitiveBatch<'_> {
        PrimitiveBatch::new(
            self.kind.clone(),
            &self.coords,
            self.weights.as_deref(),
            self.colors.as_deref(),
            self.primitive_count,
            self.coord_count,
            closed,
        )
    }
}
