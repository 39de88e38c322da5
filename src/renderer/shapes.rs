//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use super::{DrawItem, DrawList, Visual};
use crate::sim::{PursuerIdentity, Sprite};

/// Palette color for a sprite when drawing without textures
pub fn sprite_color(sprite: Sprite) -> [f32; 4] {
    match sprite {
        Sprite::Wall => colors::WALL,
        Sprite::Agent(_) => colors::AGENT,
        Sprite::Pursuer(PursuerIdentity::Red) => colors::PURSUER_RED,
        Sprite::Pursuer(PursuerIdentity::Blue) => colors::PURSUER_BLUE,
        Sprite::Pursuer(PursuerIdentity::Pink) => colors::PURSUER_PINK,
        Sprite::Pursuer(PursuerIdentity::Orange) => colors::PURSUER_ORANGE,
        Sprite::ScaredPursuer => colors::SCARED,
        Sprite::Cherry => colors::CHERRY,
        Sprite::CherryAlt => colors::CHERRY_ALT,
    }
}

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let min = pos;
    let max = pos + size;
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

fn item_color(item: &DrawItem) -> [f32; 4] {
    match item.visual {
        Visual::Sprite(sprite) => sprite_color(sprite),
        Visual::Fill(color) => color,
    }
}

/// Flatten a draw list into one triangle list, in draw order
pub fn batch(list: &DrawList) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(list.items.len() * 6);
    for item in &list.items {
        vertices.extend_from_slice(&rect(item.pos, item.size, item_color(item)));
    }
    vertices
}
