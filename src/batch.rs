// src/batch.rs

//! Defines `PrimitiveKind` and `PrimitiveBatch`, the configured unit of work
//! handed from the caller to the renderer.
//!
//! A batch is a non-owning view: the coordinate, stroke-weight, and color
//! buffers stay owned by the caller, and the batch borrows them for at most
//! one render call. The borrow lifetime parameter makes that precondition part
//! of the type rather than a runtime check.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Color;

/// The declared type of every primitive in a batch.
///
/// Kind strings arriving over the boundary are matched case-insensitively
/// (`"point_2d"`, `"Point_2D"`, and `"POINT_2D"` all name [`PrimitiveKind::Point2D`]).
/// Unrecognized spellings are preserved in [`PrimitiveKind::Unknown`] so the
/// renderer can name them in its diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Point2D,
    Point3D,
    Line2D,
    Line3D,
    Polyline2D,
    Polyline3D,
    /// Sentinel for kind strings the bridge does not recognize. Carries the
    /// normalized input so diagnostics can report what the caller sent.
    Unknown(String),
}

impl PrimitiveKind {
    /// Parses a kind string, uppercase-normalizing it first.
    pub fn parse(kind: &str) -> Self {
        match kind.to_ascii_uppercase().as_str() {
            "POINT_2D" => PrimitiveKind::Point2D,
            "POINT_3D" => PrimitiveKind::Point3D,
            "LINE_2D" => PrimitiveKind::Line2D,
            "LINE_3D" => PrimitiveKind::Line3D,
            "POLYLINE_2D" => PrimitiveKind::Polyline2D,
            "POLYLINE_3D" => PrimitiveKind::Polyline3D,
            other => PrimitiveKind::Unknown(other.to_string()),
        }
    }

    /// True for the `_3D` kinds. Unknown kinds are treated as 2D; they never
    /// reach a drawing routine anyway.
    pub fn is_3d(&self) -> bool {
        matches!(
            self,
            PrimitiveKind::Point3D | PrimitiveKind::Line3D | PrimitiveKind::Polyline3D
        )
    }

    /// Number of floats per vertex: 3 for the 3D kinds, otherwise 2.
    pub fn components_per_vertex(&self) -> usize {
        if self.is_3d() {
            3
        } else {
            2
        }
    }

    /// Coordinate count per primitive, where the kind alone determines it.
    ///
    /// Points and lines have a fixed stride (2/3 floats per point, 4/6 per
    /// line segment). Polylines carry a caller-declared per-primitive count
    /// instead, so they return `None` here, as does `Unknown`.
    pub fn coords_per_primitive(&self) -> Option<usize> {
        match self {
            PrimitiveKind::Point2D => Some(2),
            PrimitiveKind::Point3D => Some(3),
            PrimitiveKind::Line2D => Some(4),
            PrimitiveKind::Line3D => Some(6),
            PrimitiveKind::Polyline2D | PrimitiveKind::Polyline3D | PrimitiveKind::Unknown(_) => {
                None
            }
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveKind::Point2D => write!(f, "POINT_2D"),
            PrimitiveKind::Point3D => write!(f, "POINT_3D"),
            PrimitiveKind::Line2D => write!(f, "LINE_2D"),
            PrimitiveKind::Line3D => write!(f, "LINE_3D"),
            PrimitiveKind::Polyline2D => write!(f, "POLYLINE_2D"),
            PrimitiveKind::Polyline3D => write!(f, "POLYLINE_3D"),
            PrimitiveKind::Unknown(name) => write!(f, "{}", name),
        }
    }
}

/// One configured batch of primitives plus optional per-primitive styling.
///
/// Invariants are the caller's contract, not checked on construction:
/// `coords.len() == primitive_count * stride` for point/line kinds and
/// `primitive_count * coord_count` for polylines; `stroke_weights` and
/// `colors`, when present, hold one entry per primitive. A batch that violates
/// them fails during rendering with an out-of-bounds panic.
#[derive(Debug, Clone)]
pub struct PrimitiveBatch<'a> {
    pub kind: PrimitiveKind,
    /// Flat-packed vertex coordinates, stride per primitive by `kind`.
    pub coords: &'a [f32],
    /// Per-primitive stroke weights; `None` keeps the surface's current weight.
    pub stroke_weights: Option<&'a [f32]>,
    /// Per-primitive packed colors; `None` keeps the surface's current stroke.
    pub colors: Option<&'a [Color]>,
    pub primitive_count: usize,
    /// Total coordinates per polyline. Only meaningful for polyline kinds.
    pub coord_count: usize,
    /// Whether polylines repeat their first vertex to close the outline.
    pub closed: bool,
}

impl<'a> PrimitiveBatch<'a> {
    pub fn new(
        kind: PrimitiveKind,
        coords: &'a [f32],
        stroke_weights: Option<&'a [f32]>,
        colors: Option<&'a [Color]>,
        primitive_count: usize,
        coord_count: usize,
        closed: bool,
    ) -> Self {
        PrimitiveBatch {
            kind,
            coords,
            stroke_weights,
            colors,
            primitive_count,
            coord_count,
            closed,
        }
    }

    /// Legacy constructor for callers predating the explicit kind parameter.
    ///
    /// Defaults the kind to [`PrimitiveKind::Unknown`] (which renders nothing
    /// but logs a diagnostic), the coordinate count to 0, and polylines to
    /// open.
    pub fn legacy(
        coords: &'a [f32],
        stroke_weights: Option<&'a [f32]>,
        colors: Option<&'a [Color]>,
        primitive_count: usize,
    ) -> Self {
        Self::new(
            PrimitiveKind::Unknown("UNKNOWN".to_string()),
            coords,
            stroke_weights,
            colors,
            primitive_count,
            0,
            false,
        )
    }
}
