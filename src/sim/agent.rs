//! The player-controlled agent

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::entity::{Body, Heading, Mover, Sprite};
use crate::consts::AGENT_SPEED;

/// Heading after spawn and after every reset
pub const DEFAULT_HEADING: Heading = Heading::Right;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub mover: Mover,
    /// Latest heading request, retried every tick until it is taken
    pub requested: Heading,
}

impl Agent {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        let body = Body::new(pos, size, Some(Sprite::Agent(DEFAULT_HEADING)));
        Self {
            mover: Mover::new(body, AGENT_SPEED, DEFAULT_HEADING),
            requested: DEFAULT_HEADING,
        }
    }

    #[inline]
    pub fn body(&self) -> &Body {
        &self.mover.body
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        self.mover.heading
    }

    /// Queue a heading change; overwrites any request not yet taken
    pub fn request(&mut self, heading: Heading) {
        self.requested = heading;
    }

    /// Tunnel wrap, move (with rollback), then try the requested turn
    pub fn update(&mut self, walls: &[Rect], board_width: f32) {
        self.mover.wrap_tunnel(board_width);
        self.mover.try_move(walls);
        self.apply_requested(walls);
    }

    /// Take the requested heading only if the box, stepped one tick that
    /// way from where it stands now, is clear. This allows turning mid-tile.
    fn apply_requested(&mut self, walls: &[Rect]) {
        let wanted = self.requested;
        if wanted == self.mover.heading {
            return;
        }
        if self.mover.is_clear(wanted.velocity(self.mover.speed), walls) {
            self.mover.set_heading(wanted);
            self.mover.body.sprite = Some(Sprite::Agent(wanted));
        }
    }

    /// Back to spawn facing right. The pending request is kept.
    pub fn reset(&mut self) {
        self.mover.body.reset();
        self.mover.set_heading(DEFAULT_HEADING);
        self.mover.body.sprite = Some(Sprite::Agent(DEFAULT_HEADING));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: f32 = 32.0;

    fn wall(col: f32, row: f32) -> Rect {
        Rect::new(Vec2::new(col * TILE, row * TILE), Vec2::splat(TILE))
    }

    /// Horizontal corridor in row 1, walls above and below, open at x = 0..5
    fn corridor() -> Vec<Rect> {
        let mut walls = Vec::new();
        for c in 0..6 {
            walls.push(wall(c as f32, 0.0));
            walls.push(wall(c as f32, 2.0));
        }
        walls
    }

    fn agent_at(col: f32, row: f32) -> Agent {
        Agent::new(Vec2::new(col * TILE, row * TILE), Vec2::splat(TILE))
    }

    #[test]
    fn test_moves_along_heading() {
        let mut agent = agent_at(1.0, 1.0);
        agent.update(&corridor(), 1000.0);
        assert_eq!(agent.body().pos, Vec2::new(40.0, 32.0));
    }

    #[test]
    fn test_blocked_turn_keeps_heading() {
        let walls = corridor();
        let mut agent = agent_at(1.0, 1.0);
        agent.request(Heading::Up);
        agent.update(&walls, 1000.0);
        assert_eq!(agent.heading(), Heading::Right);
        assert_eq!(agent.mover.vel, Vec2::new(AGENT_SPEED, 0.0));
        // Still pending, retried next tick
        assert_eq!(agent.requested, Heading::Up);
    }

    #[test]
    fn test_open_turn_commits_exact_vector() {
        let walls = corridor();
        let mut agent = agent_at(1.0, 1.0);
        agent.request(Heading::Left);
        agent.update(&walls, 1000.0);
        assert_eq!(agent.heading(), Heading::Left);
        assert_eq!(agent.mover.vel, Vec2::new(-AGENT_SPEED, 0.0));
        assert_eq!(agent.body().sprite, Some(Sprite::Agent(Heading::Left)));
    }

    #[test]
    fn test_queued_turn_taken_when_opening_appears() {
        // Gap in the top wall at column 3
        let walls: Vec<Rect> = corridor()
            .into_iter()
            .filter(|r| r.pos != Vec2::new(3.0 * TILE, 0.0))
            .collect();
        let mut agent = agent_at(1.0, 1.0);
        agent.request(Heading::Up);

        let mut ticks = 0;
        while agent.heading() != Heading::Up {
            agent.update(&walls, 1000.0);
            ticks += 1;
            assert!(ticks < 20, "turn never taken");
        }
        // Turns as soon as an upward step is clear, i.e. once aligned with the gap
        assert_eq!(agent.body().pos.x, 3.0 * TILE);
    }

    #[test]
    fn test_wall_stops_agent() {
        let mut walls = corridor();
        walls.push(wall(3.0, 1.0));
        let mut agent = agent_at(2.0, 1.0);
        agent.update(&walls, 1000.0);
        assert_eq!(agent.body().pos, Vec2::new(64.0, 32.0));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut agent = agent_at(1.0, 1.0);
        agent.request(Heading::Left);
        agent.update(&corridor(), 1000.0);
        agent.reset();
        assert_eq!(agent.body().pos, Vec2::new(32.0, 32.0));
        assert_eq!(agent.heading(), Heading::Right);
        assert_eq!(agent.mover.vel, Vec2::new(AGENT_SPEED, 0.0));
        assert_eq!(agent.body().sprite, Some(Sprite::Agent(Heading::Right)));
    }
}
