//! Buffered draw sink
//!
//! Collects a frame's shapes as triangle vertices ready for upload, and its
//! text as positioned strings for the font layer.

use glam::Vec2;

use super::shapes::{polygon_fill, polygon_outline};
use super::vertex::Vertex;
use super::{Color, DrawSink};
use crate::sim::RadialPolygon;

/// Outline width in world units
pub const OUTLINE_THICKNESS: f32 = 1.0;

/// A text request
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub position: Vec2,
    pub text: String,
}

/// One frame of draw requests
#[derive(Debug, Default)]
pub struct DrawList {
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextItem>,
    shape_count: usize,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of shapes emitted since the last clear
    pub fn shape_count(&self) -> usize {
        self.shape_count
    }

    /// Raw vertex bytes for a GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Drop everything; call once the frame has been presented
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.texts.clear();
        self.shape_count = 0;
    }
}

impl DrawSink for DrawList {
    fn emit_shape(&mut self, polygon: &RadialPolygon, fill: Color, outline: Color) {
        let world = polygon.world_vertices();
        let center = world.iter().copied().sum::<Vec2>() / world.len().max(1) as f32;

        self.vertices.extend(polygon_fill(&world, center, fill));
        if outline != fill {
            self.vertices
                .extend(polygon_outline(&world, OUTLINE_THICKNESS, outline));
        }
        self.shape_count += 1;
    }

    fn emit_text(&mut self, position: Vec2, text: &str) {
        self.texts.push(TextItem {
            position,
            text: text.to_string(),
        });
    }
}
