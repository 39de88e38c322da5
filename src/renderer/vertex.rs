//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color, laid out for direct upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Flat colors standing in for sprites
pub mod colors {
    pub const WALL: [f32; 4] = [0.13, 0.2, 0.85, 1.0];
    pub const FOOD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const CHERRY: [f32; 4] = [0.9, 0.1, 0.2, 1.0];
    pub const CHERRY_ALT: [f32; 4] = [0.75, 0.05, 0.3, 1.0];
    pub const AGENT: [f32; 4] = [1.0, 0.9, 0.0, 1.0];
    pub const PURSUER_RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const PURSUER_BLUE: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const PURSUER_PINK: [f32; 4] = [1.0, 0.7, 1.0, 1.0];
    pub const PURSUER_ORANGE: [f32; 4] = [1.0, 0.7, 0.4, 1.0];
    pub const SCARED: [f32; 4] = [0.2, 0.2, 1.0, 1.0];
}
