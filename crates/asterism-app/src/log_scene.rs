//! Headless renderer: draw requests become tracing events.

use asterism_anim::{LineHandle, Scene, StarMarker};
use asterism_types::Edge;
use glam::Vec3;

#[derive(Debug, Default)]
pub struct LogScene {
    lines: usize,
}

pub struct LogLine {
    edge: Edge,
    index: usize,
}

impl Scene for LogScene {
    type Line = LogLine;

    fn place_star(&mut self, marker: StarMarker) {
        let c = marker.color;
        tracing::info!(
            star = %marker.id,
            x = marker.position.x,
            y = marker.position.y,
            z = marker.position.z,
            magnitude = marker.magnitude,
            color = format!("{:02x}{:02x}{:02x}", c.red, c.green, c.blue),
            "place star"
        );
    }

    fn begin_line(&mut self, edge: Edge, start: Vec3) -> LogLine {
        let index = self.lines;
        self.lines += 1;
        tracing::info!(line = index, from = %edge.from, to = %edge.to, %start, "begin line");
        LogLine { edge, index }
    }
}

impl LineHandle for LogLine {
    fn set_end(&mut self, end: Vec3) {
        tracing::trace!(line = self.index, %end, "line end");
    }

    fn finish(&mut self) {
        tracing::info!(line = self.index, from = %self.edge.from, to = %self.edge.to, "line complete");
    }
}
