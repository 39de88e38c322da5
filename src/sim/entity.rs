//! Shared entity shapes: static bodies and the movable core used by both
//! the agent and the pursuers.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, overlaps, overlaps_any};
use super::layout::PursuerIdentity;
use crate::consts::TURN_CHANCE;

/// One of the four cardinal headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Per-tick displacement for this heading (screen coordinates, y down)
    #[inline]
    pub fn velocity(self, speed: f32) -> Vec2 {
        match self {
            Heading::Up => Vec2::new(0.0, -speed),
            Heading::Down => Vec2::new(0.0, speed),
            Heading::Left => Vec2::new(-speed, 0.0),
            Heading::Right => Vec2::new(speed, 0.0),
        }
    }
}

/// Visual identifier attached to an entity. The simulation only sets it;
/// the presentation layer decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Wall,
    Agent(Heading),
    Pursuer(PursuerIdentity),
    ScaredPursuer,
    Cherry,
    CherryAlt,
}

/// Uniformly random cardinal heading
pub fn random_heading<R: Rng + ?Sized>(rng: &mut R) -> Heading {
    Heading::ALL[rng.random_range(0..Heading::ALL.len())]
}

/// Independent per-tick roll for a spontaneous pursuer turn
pub fn should_turn<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random::<f32>() < TURN_CHANCE
}

/// Position, fixed-size box, spawn point and sprite. Walls, food and power
/// items are bare bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    size: Vec2,
    start: Vec2,
    pub sprite: Option<Sprite>,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2, sprite: Option<Sprite>) -> Self {
        Self {
            pos,
            size,
            start: pos,
            sprite,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Where this body was created
    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        overlaps(&self.rect(), &other.rect())
    }

    /// Back to the spawn point
    pub fn reset(&mut self) {
        self.pos = self.start;
    }
}

/// Movement state shared by the agent and pursuers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    pub body: Body,
    pub speed: f32,
    pub heading: Heading,
    pub vel: Vec2,
}

impl Mover {
    pub fn new(body: Body, speed: f32, heading: Heading) -> Self {
        Self {
            body,
            speed,
            heading,
            vel: heading.velocity(speed),
        }
    }

    /// Commit a heading and the matching velocity
    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
        self.vel = heading.velocity(self.speed);
    }

    /// Horizontal screen-edge teleport. Only fires once the box is entirely
    /// past an edge.
    pub fn wrap_tunnel(&mut self, board_width: f32) {
        let width = self.body.size().x;
        if self.body.pos.x < -width {
            self.body.pos.x = board_width;
        } else if self.body.pos.x > board_width {
            self.body.pos.x = -width;
        }
    }

    pub fn hits_wall(&self, walls: &[Rect]) -> bool {
        overlaps_any(&self.body.rect(), walls)
    }

    /// Would the box, shifted by `delta`, be clear of every wall?
    pub fn is_clear(&self, delta: Vec2, walls: &[Rect]) -> bool {
        !overlaps_any(&self.body.rect().offset(delta), walls)
    }

    /// Step by the current velocity; on wall contact restore the previous
    /// position entirely. Returns whether the step stuck.
    pub fn try_move(&mut self, walls: &[Rect]) -> bool {
        let old = self.body.pos;
        self.body.pos += self.vel;
        if self.hits_wall(walls) {
            self.body.pos = old;
            false
        } else {
            true
        }
    }
}
