//! Autonomous pursuers
//!
//! Each pursuer is a two-state machine, timed independently:
//! - `Active`: wanders, turning on wall contact or at random
//! - `Respawning`: caught while vulnerable; off the board until `resume_at_ms`

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::entity::{Body, Mover, Sprite, random_heading, should_turn};
use super::layout::PursuerIdentity;
use crate::consts::{PURSUER_SPEED, RESPAWN_DELAY_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PursuerState {
    Active,
    Respawning { resume_at_ms: u64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pursuer {
    pub mover: Mover,
    pub identity: PursuerIdentity,
    /// Mirrors power-mode while active
    pub vulnerable: bool,
    pub state: PursuerState,
}

impl Pursuer {
    pub fn new<R: Rng + ?Sized>(
        identity: PursuerIdentity,
        pos: Vec2,
        size: Vec2,
        rng: &mut R,
    ) -> Self {
        let body = Body::new(pos, size, Some(Sprite::Pursuer(identity)));
        Self {
            mover: Mover::new(body, PURSUER_SPEED, random_heading(rng)),
            identity,
            vulnerable: false,
            state: PursuerState::Active,
        }
    }

    #[inline]
    pub fn body(&self) -> &Body {
        &self.mover.body
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == PursuerState::Active
    }

    #[inline]
    pub fn is_respawning(&self) -> bool {
        !self.is_active()
    }

    /// Advance one tick.
    ///
    /// Active pursuers step, wrap, and on wall contact (or a random turn)
    /// undo the step and pick a fresh heading. Respawning pursuers only watch
    /// their timer.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        walls: &[Rect],
        board_width: f32,
        power_mode: bool,
        now_ms: u64,
        rng: &mut R,
    ) {
        if let PursuerState::Respawning { resume_at_ms } = self.state {
            if now_ms > resume_at_ms {
                self.state = PursuerState::Active;
                self.mover.body.reset();
                self.mover.set_heading(random_heading(rng));
                self.sync_vulnerability(power_mode);
                log::debug!("{:?} pursuer back at spawn", self.identity);
            }
            return;
        }

        self.mover.body.pos += self.mover.vel;
        self.mover.wrap_tunnel(board_width);

        // Short-circuits: the random roll is only taken when not already blocked
        if self.mover.hits_wall(walls) || should_turn(rng) {
            self.mover.body.pos -= self.mover.vel;
            self.mover.set_heading(random_heading(rng));
        }

        self.sync_vulnerability(power_mode);
    }

    fn sync_vulnerability(&mut self, power_mode: bool) {
        self.vulnerable = power_mode;
        self.mover.body.sprite = Some(if power_mode {
            Sprite::ScaredPursuer
        } else {
            Sprite::Pursuer(self.identity)
        });
    }

    /// Caught by the agent while vulnerable
    pub fn start_respawn(&mut self, now_ms: u64) {
        self.state = PursuerState::Respawning {
            resume_at_ms: now_ms + RESPAWN_DELAY_MS,
        };
        self.vulnerable = false;
    }

    /// Back to spawn with a fresh heading after the agent loses a life.
    /// Respawn timers are left running.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.mover.body.reset();
        self.mover.set_heading(random_heading(rng));
        self.vulnerable = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Heading;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn pursuer(rng: &mut Pcg32) -> Pursuer {
        Pursuer::new(
            PursuerIdentity::Pink,
            Vec2::new(320.0, 320.0),
            Vec2::splat(32.0),
            rng,
        )
    }

    #[test]
    fn test_new_pursuer_is_active_with_matching_velocity() {
        let mut rng = Pcg32::seed_from_u64(1);
        let p = pursuer(&mut rng);
        assert!(p.is_active());
        assert!(!p.vulnerable);
        assert_eq!(p.mover.vel, p.mover.heading.velocity(PURSUER_SPEED));
        assert_eq!(p.body().sprite, Some(Sprite::Pursuer(PursuerIdentity::Pink)));
    }

    #[test]
    fn test_wall_contact_undoes_step_and_rerolls() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut p = pursuer(&mut rng);
        p.mover.set_heading(Heading::Right);
        let start = p.body().pos;
        // Wall directly to the right, touching the box edge
        let walls = [Rect::new(Vec2::new(352.0, 320.0), Vec2::splat(32.0))];
        p.update(&walls, 608.0, false, 0, &mut rng);
        assert!((p.body().pos - start).length() < 1e-3);
        assert_eq!(p.mover.vel, p.mover.heading.velocity(PURSUER_SPEED));
    }

    #[test]
    fn test_vulnerability_mirrors_power_mode() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut p = pursuer(&mut rng);
        p.update(&[], 608.0, true, 0, &mut rng);
        assert!(p.vulnerable);
        assert_eq!(p.body().sprite, Some(Sprite::ScaredPursuer));

        p.update(&[], 608.0, false, 50, &mut rng);
        assert!(!p.vulnerable);
        assert_eq!(p.body().sprite, Some(Sprite::Pursuer(PursuerIdentity::Pink)));
    }

    #[test]
    fn test_respawn_waits_for_full_delay() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut p = pursuer(&mut rng);
        for t in 0..10 {
            p.update(&[], 608.0, true, t * 50, &mut rng);
        }
        assert_ne!(p.body().pos, p.body().start());

        p.start_respawn(1_000);
        assert!(p.is_respawning());
        let parked = p.body().pos;

        // Frozen while the timer runs, including at the exact resume time
        p.update(&[], 608.0, true, 1_000 + RESPAWN_DELAY_MS, &mut rng);
        assert!(p.is_respawning());
        assert_eq!(p.body().pos, parked);

        p.update(&[], 608.0, true, 1_001 + RESPAWN_DELAY_MS, &mut rng);
        assert!(p.is_active());
        assert_eq!(p.body().pos, p.body().start());
        assert!(p.vulnerable);
        assert_eq!(p.mover.vel, p.mover.heading.velocity(PURSUER_SPEED));
    }

    #[test]
    fn test_reset_clears_vulnerable() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut p = pursuer(&mut rng);
        p.update(&[], 608.0, true, 0, &mut rng);
        p.reset(&mut rng);
        assert!(!p.vulnerable);
        assert_eq!(p.body().pos, p.body().start());
    }
}
