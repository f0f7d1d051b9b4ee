// src/surface/headless.rs

//! Headless `DrawSurface` implementation with no display attached.
//!
//! Useful for driving the bridge at full speed without a canvas: it keeps a
//! real style stack, enforces the surface protocol (balanced
//! `begin_shape`/`end_shape` and `push_style`/`pop_style`, vertices only
//! inside an open shape), and counts what it is asked to draw.

use anyhow::{bail, Result};
use log::trace;

use super::{DrawSurface, ShapeMode};
use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
struct StyleState {
    stroke: Color,
    stroke_weight: f32,
    fill_enabled: bool,
}

impl Default for StyleState {
    fn default() -> Self {
        StyleState {
            stroke: Color::from_rgb(0, 0, 0),
            stroke_weight: 1.0,
            fill_enabled: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct HeadlessSurface {
    style: StyleState,
    style_stack: Vec<StyleState>,
    open_shape: Option<ShapeMode>,
    shapes_drawn: usize,
    vertices_emitted: usize,
    lines_drawn: usize,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `begin_shape`/`end_shape` pairs completed so far.
    pub fn shapes_drawn(&self) -> usize {
        self.shapes_drawn
    }

    /// Number of vertices emitted into shapes so far.
    pub fn vertices_emitted(&self) -> usize {
        self.vertices_emitted
    }

    /// Number of direct `line2`/`line3` calls so far.
    pub fn lines_drawn(&self) -> usize {
        self.lines_drawn
    }
}

impl DrawSurface for HeadlessSurface {
    fn push_style(&mut self) -> Result<()> {
        self.style_stack.push(self.style);
        Ok(())
    }

    fn pop_style(&mut self) -> Result<()> {
        match self.style_stack.pop() {
            Some(saved) => {
                self.style = saved;
                Ok(())
            }
            None => bail!("pop_style with no saved style"),
        }
    }

    fn stroke(&mut self, color: Color) -> Result<()> {
        self.style.stroke = color;
        Ok(())
    }

    fn stroke_weight(&mut self, weight: f32) -> Result<()> {
        self.style.stroke_weight = weight;
        Ok(())
    }

    fn no_fill(&mut self) -> Result<()> {
        self.style.fill_enabled = false;
        Ok(())
    }

    fn begin_shape(&mut self, mode: ShapeMode) -> Result<()> {
        if let Some(open) = self.open_shape {
            bail!("begin_shape({:?}) while a {:?} shape is open", mode, open);
        }
        trace!("begin_shape({:?}) stroke={}", mode, self.style.stroke);
        self.open_shape = Some(mode);
        Ok(())
    }

    fn vertex2(&mut self, _x: f32, _y: f32) -> Result<()> {
        if self.open_shape.is_none() {
            bail!("vertex2 with no open shape");
        }
        self.vertices_emitted += 1;
        Ok(())
    }

    fn vertex3(&mut self, _x: f32, _y: f32, _z: f32) -> Result<()> {
        if self.open_shape.is_none() {
            bail!("vertex3 with no open shape");
        }
        self.vertices_emitted += 1;
        Ok(())
    }

    fn end_shape(&mut self) -> Result<()> {
        if self.open_shape.take().is_none() {
            bail!("end_shape with no open shape");
        }
        self.shapes_drawn += 1;
        Ok(())
    }

    fn line2(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32) -> Result<()> {
        if let Some(open) = self.open_shape {
            bail!("line2 while a {:?} shape is open", open);
        }
        self.lines_drawn += 1;
        Ok(())
    }

    fn line3(&mut self, _x1: f32, _y1: f32, _z1: f32, _x2: f32, _y2: f32, _z2: f32) -> Result<()> {
        if let Some(open) = self.open_shape {
            bail!("line3 while a {:?} shape is open", open);
        }
        self.lines_drawn += 1;
        Ok(())
    }
}
