// src/bin/stress.rs

//! Headless throughput check for the bridge.
//!
//! Animates scattered points, lines, and closed boxes (the workloads the
//! bridge exists to accelerate) and renders each frame through the
//! two-call protocol against a `HeadlessSurface`, logging per-kind frame
//! rates and the surface call totals. Run with `RUST_LOG=info`.

use anyhow::Result;
use log::info;
use rand::Rng;
use std::time::Instant;

use sketch_bridge::{BatchBuffers, Color, HeadlessSurface, PrimitiveKind, SketchBridge};

const CANVAS_W: f32 = 1600.0;
const CANVAS_H: f32 = 900.0;
const FRAMES: usize = 200;

const NUM_POINTS: usize = 80_000;
const NUM_LINES: usize = 5_000;
const NUM_BOXES: usize = 20_000;

/// Particles bouncing off the canvas edges.
struct Field {
    pos: Vec<(f32, f32)>,
    vel: Vec<(f32, f32)>,
}

impl Field {
    fn scatter(count: usize) -> Self {
        let mut rng = rand::thread_rng();
        let pos = (0..count)
            .map(|_| (rng.gen_range(0.0..CANVAS_W), rng.gen_range(0.0..CANVAS_H)))
            .collect();
        let vel = (0..count)
            .map(|_| {
                let phi: f32 = rng.gen_range(0.0..std::f32::consts::TAU) * 0.25;
                (phi.cos() * 0.5, phi.sin() * 0.5)
            })
            .collect();
        Field { pos, vel }
    }

    fn update(&mut self) {
        for (p, v) in self.pos.iter_mut().zip(self.vel.iter_mut()) {
            p.0 += v.0;
            p.1 += v.1;
            if p.0 < 0.0 || p.0 > CANVAS_W {
                v.0 = -v.0;
            }
            if p.1 < 0.0 || p.1 > CANVAS_H {
                v.1 = -v.1;
            }
        }
    }
}

fn run_points(surface: &mut HeadlessSurface) -> Result<()> {
    let mut bufs = BatchBuffers::allocate(PrimitiveKind::Point2D, NUM_POINTS, None, false, false)?;
    let mut field = Field::scatter(NUM_POINTS);

    let start = Instant::now();
    for _ in 0..FRAMES {
        field.update();
        for (slot, p) in bufs.coords.chunks_exact_mut(2).zip(&field.pos) {
            slot[0] = p.0;
            slot[1] = p.1;
        }

        let mut bridge = SketchBridge::new();
        bridge.share_buffers("point_2d", &bufs.coords, None, None, NUM_POINTS, 2, false);
        bridge.draw_primitives(surface)?;
    }
    report("points", NUM_POINTS, start.elapsed());
    Ok(())
}

fn run_lines(surface: &mut HeadlessSurface) -> Result<()> {
    let mut bufs = BatchBuffers::allocate(PrimitiveKind::Line2D, NUM_LINES, None, false, true)?;
    let mut field = Field::scatter(NUM_LINES * 2);

    // Fixed random segment colors, packed once up front.
    let mut rng = rand::thread_rng();
    if let Some(colors) = bufs.colors.as_mut() {
        for color in colors.iter_mut() {
            *color = Color::from_rgb(rng.gen(), rng.gen(), rng.gen());
        }
    }

    let start = Instant::now();
    for _ in 0..FRAMES {
        field.update();
        for (slot, ends) in bufs.coords.chunks_exact_mut(4).zip(field.pos.chunks_exact(2)) {
            slot[0] = ends[0].0;
            slot[1] = ends[0].1;
            slot[2] = ends[1].0;
            slot[3] = ends[1].1;
        }

        let mut bridge = SketchBridge::new();
        bridge.share_buffers(
            "line_2d",
            &bufs.coords,
            None,
            bufs.colors.as_deref(),
            NUM_LINES,
            4,
            false,
        );
        bridge.draw_primitives(surface)?;
    }
    report("lines", NUM_LINES, start.elapsed());
    Ok(())
}

fn run_boxes(surface: &mut HeadlessSurface) -> Result<()> {
    // Axis-aligned boxes as closed 4-vertex polylines, 8 coords each.
    let mut bufs =
        BatchBuffers::allocate(PrimitiveKind::Polyline2D, NUM_BOXES, Some(8), true, true)?;
    let mut field = Field::scatter(NUM_BOXES);

    let mut rng = rand::thread_rng();
    let radii: Vec<f32> = (0..NUM_BOXES).map(|_| rng.gen_range(2.0..7.0)).collect();
    if let Some(weights) = bufs.weights.as_mut() {
        weights.fill(0.5);
    }
    if let Some(colors) = bufs.colors.as_mut() {
        colors.fill(Color::from_rgb(0, 0, 0));
    }

    let start = Instant::now();
    for _ in 0..FRAMES {
        field.update();
        for ((slot, p), r) in bufs
            .coords
            .chunks_exact_mut(8)
            .zip(&field.pos)
            .zip(&radii)
        {
            slot.copy_from_slice(&[
                p.0 - r,
                p.1 + r,
                p.0 + r,
                p.1 + r,
                p.0 + r,
                p.1 - r,
                p.0 - r,
                p.1 - r,
            ]);
        }

        let mut bridge = SketchBridge::new();
        bridge.share_buffers(
            "polyline_2d",
            &bufs.coords,
            bufs.weights.as_deref(),
            bufs.colors.as_deref(),
            NUM_BOXES,
            8,
            true,
        );
        bridge.draw_primitives(surface)?;
    }
    report("boxes", NUM_BOXES, start.elapsed());
    Ok(())
}

fn report(label: &str, primitives: usize, elapsed: std::time::Duration) {
    let fps = FRAMES as f64 / elapsed.as_secs_f64();
    info!(
        "{}: {} primitives x {} frames in {:.2?} ({:.1} fps)",
        label, primitives, FRAMES, elapsed, fps
    );
}

fn main() -> Result<()> {
    env_logger::init();

    let mut surface = HeadlessSurface::new();
    run_points(&mut surface)?;
    run_lines(&mut surface)?;
    run_boxes(&mut surface)?;

    info!(
        "surface totals: {} shapes, {} vertices, {} direct lines",
        surface.shapes_drawn(),
        surface.vertices_emitted(),
        surface.lines_drawn()
    );
    Ok(())
}
