//! In-memory scene for driver tests.

use std::sync::Arc;

use asterism_types::Edge;
use glam::Vec3;
use parking_lot::Mutex;

use crate::{LineHandle, Scene, StarMarker};

#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    pub edge: Edge,
    pub start: Vec3,
    pub end: Vec3,
    /// Every terminal point written, in order.
    pub updates: Vec<Vec3>,
    pub finished: bool,
}

/// Records draw requests behind shared handles so tests can inspect them
/// while the driver still holds the scene.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    pub stars: Arc<Mutex<Vec<StarMarker>>>,
    pub lines: Arc<Mutex<Vec<LineRecord>>>,
}

pub struct MemoryLine {
    lines: Arc<Mutex<Vec<LineRecord>>>,
    index: usize,
}

impl Scene for MemoryScene {
    type Line = MemoryLine;

    fn place_star(&mut self, marker: StarMarker) {
        self.stars.lock().push(marker);
    }

    fn begin_line(&mut self, edge: Edge, start: Vec3) -> MemoryLine {
        let mut lines = self.lines.lock();
        lines.push(LineRecord { edge, start, end: start, updates: Vec::new(), finished: false });
        MemoryLine { lines: self.lines.clone(), index: lines.len() - 1 }
    }
}

impl LineHandle for MemoryLine {
    fn set_end(&mut self, end: Vec3) {
        let mut lines = self.lines.lock();
        let line = &mut lines[self.index];
        line.end = end;
        line.updates.push(end);
    }

    fn finish(&mut self) {
        self.lines.lock()[self.index].finished = true;
    }
}
