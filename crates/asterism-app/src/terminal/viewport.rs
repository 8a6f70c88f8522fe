//! Unit-sphere positions to terminal cells.
//!
//! An orthographic view looking outward along the constellation center,
//! fitted so every star lands inside the screen with a margin.

use glam::Vec3;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;
/// Cells left empty around the fitted stars.
const MARGIN: f32 = 2.0;
/// Rows reserved at the bottom for the status line.
const STATUS_ROWS: u16 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    mid: (f32, f32),
    scale: f32,
    width: u16,
    height: u16,
}

impl Viewport {
    /// Fit `points` seen from `center` into a `width` × `height` terminal.
    pub fn fit(center: Vec3, points: impl IntoIterator<Item = Vec3>, width: u16, height: u16) -> Self {
        let forward = center.try_normalize().unwrap_or(Vec3::X);
        let right = Vec3::Y.cross(forward).try_normalize().unwrap_or(Vec3::Z);
        let up = forward.cross(right);

        let mut min = (f32::INFINITY, f32::INFINITY);
        let mut max = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for p in points {
            if p.dot(forward) <= 0.0 {
                continue;
            }
            let (u, v) = (p.dot(right), p.dot(up));
            min = (min.0.min(u), min.1.min(v));
            max = (max.0.max(u), max.1.max(v));
        }
        if !min.0.is_finite() {
            min = (0.0, 0.0);
            max = (0.0, 0.0);
        }

        let span_u = (max.0 - min.0).max(1e-3);
        let span_v = (max.1 - min.1).max(1e-3);
        let usable_w = (f32::from(width) - 2.0 * MARGIN).max(1.0);
        let usable_h = (f32::from(height.saturating_sub(STATUS_ROWS)) - 2.0 * MARGIN).max(1.0);
        let scale = (usable_w / (span_u * CELL_ASPECT)).min(usable_h / span_v);

        Self {
            forward,
            right,
            up,
            mid: ((min.0 + max.0) / 2.0, (min.1 + max.1) / 2.0),
            scale,
            width,
            height,
        }
    }

    /// Cell for a point, unclamped. `None` if the point is behind the viewer.
    pub fn project(&self, p: Vec3) -> Option<(i32, i32)> {
        if p.dot(self.forward) <= 0.0 {
            return None;
        }
        let cx = f32::from(self.width) / 2.0;
        let cy = f32::from(self.height.saturating_sub(STATUS_ROWS)) / 2.0;
        let col = cx + (p.dot(self.right) - self.mid.0) * self.scale * CELL_ASPECT;
        let row = cy - (p.dot(self.up) - self.mid.1) * self.scale;
        Some((col.round() as i32, row.round() as i32))
    }

    pub fn contains(&self, (col, row): (i32, i32)) -> bool {
        col >= 0
            && row >= 0
            && col < i32::from(self.width)
            && row < i32::from(self.height.saturating_sub(STATUS_ROWS))
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

/// Cells on the segment from `a` to `b`, both ends included (Bresenham).
pub fn line_cells(a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
    let (mut x, mut y) = a;
    let dx = (b.0 - a.0).abs();
    let dy = -(b.1 - a.1).abs();
    let sx = if a.0 < b.0 { 1 } else { -1 };
    let sy = if a.1 < b.1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut cells = Vec::with_capacity((dx - dy) as usize + 1);
    loop {
        cells.push((x, y));
        if (x, y) == b {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}
