// src/surface/mock.rs

use anyhow::{bail, Result};

use super::{DrawSurface, ShapeMode};
use crate::color::Color;

/// One recorded surface call, in the exact argument form it arrived with.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    PushStyle,
    PopStyle,
    Stroke(Color),
    StrokeWeight(f32),
    NoFill,
    BeginShape(ShapeMode),
    Vertex2(f32, f32),
    Vertex3(f32, f32, f32),
    EndShape,
    Line2(f32, f32, f32, f32),
    Line3(f32, f32, f32, f32, f32, f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSnapshot {
    pub stroke: Color,
    pub stroke_weight: f32,
    pub fill_enabled: bool,
}

impl Default for StyleSnapshot {
    fn default() -> Self {
        StyleSnapshot {
            stroke: Color::from_rgb(0, 0, 0),
            stroke_weight: 1.0,
            fill_enabled: true,
        }
    }
}

/// Records every call for assertions, while tracking enough style state to
/// verify that a draw leaves the surface exactly as it found it.
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    style: StyleSnapshot,
    style_stack: Vec<StyleSnapshot>,
    fail_at_call: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface {
            calls: Vec::new(),
            style: StyleSnapshot::default(),
            style_stack: Vec::new(),
            fail_at_call: None,
        }
    }

    /// A surface whose `index`-th call (0-based) fails, for error-path tests.
    /// The failure fires once; later calls (such as the style restore that
    /// follows a failed draw) succeed.
    pub fn failing_at(index: usize) -> Self {
        let mut surface = Self::new();
        surface.fail_at_call = Some(index);
        surface
    }

    pub fn style(&self) -> StyleSnapshot {
        self.style
    }

    pub fn begin_shape_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::BeginShape(_)))
            .count()
    }

    pub fn end_shape_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::EndShape))
            .count()
    }

    pub fn stroke_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::Stroke(_)))
            .count()
    }

    pub fn direct_line_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::Line2(..) | SurfaceCall::Line3(..)))
            .count()
    }

    /// The vertex calls emitted into the `index`-th shape (0-based), i.e.
    /// between its `BeginShape` and the following `EndShape`.
    pub fn shape_vertices(&self, index: usize) -> Vec<SurfaceCall> {
        let mut shape = 0usize;
        let mut inside = false;
        let mut vertices = Vec::new();
        for call in &self.calls {
            match call {
                SurfaceCall::BeginShape(_) => {
                    inside = shape == index;
                }
                SurfaceCall::EndShape => {
                    if inside {
                        return vertices;
                    }
                    shape += 1;
                }
                SurfaceCall::Vertex2(..) | SurfaceCall::Vertex3(..) if inside => {
                    vertices.push(call.clone());
                }
                _ => {}
            }
        }
        vertices
    }

    fn record(&mut self, call: SurfaceCall) -> Result<()> {
        if self.fail_at_call == Some(self.calls.len()) {
            self.fail_at_call = None;
            bail!("injected surface failure at call {}", self.calls.len());
        }
        match call {
            SurfaceCall::PushStyle => self.style_stack.push(self.style),
            SurfaceCall::PopStyle => match self.style_stack.pop() {
                Some(saved) => self.style = saved,
                None => bail!("pop_style with no saved style"),
            },
            SurfaceCall::Stroke(color) => self.style.stroke = color,
            SurfaceCall::StrokeWeight(weight) => self.style.stroke_weight = weight,
            SurfaceCall::NoFill => self.style.fill_enabled = false,
            _ => {}
        }
        self.calls.push(call);
        Ok(())
    }
}

impl DrawSurface for RecordingSurface {
    fn push_style(&mut self) -> Result<()> {
        self.record(SurfaceCall::PushStyle)
    }

    fn pop_style(&mut self) -> Result<()> {
        self.record(SurfaceCall::PopStyle)
    }

    fn stroke(&mut self, color: Color) -> Result<()> {
        self.record(SurfaceCall::Stroke(color))
    }

    fn stroke_weight(&mut self, weight: f32) -> Result<()> {
        self.record(SurfaceCall::StrokeWeight(weight))
    }

    fn no_fill(&mut self) -> Result<()> {
        self.record(SurfaceCall::NoFill)
    }

    fn begin_shape(&mut self, mode: ShapeMode) -> Result<()> {
        self.record(SurfaceCall::BeginShape(mode))
    }

    fn vertex2(&mut self, x: f32, y: f32) -> Result<()> {
        self.record(SurfaceCall::Vertex2(x, y))
    }

    fn vertex3(&mut self, x: f32, y: f32, z: f32) -> Result<()> {
        self.record(SurfaceCall::Vertex3(x, y, z))
    }

    fn end_shape(&mut self) -> Result<()> {
        self.record(SurfaceCall::EndShape)
    }

    fn line2(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<()> {
        self.record(SurfaceCall::Line2(x1, y1, x2, y2))
    }

    fn line3(&mut self, x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) -> Result<()> {
        self.record(SurfaceCall::Line3(x1, y1, z1, x2, y2, z2))
    }
}
