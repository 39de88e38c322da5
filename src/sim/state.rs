//! Game state and the simulation context
//!
//! `GameState` is the scoreboard (score, lives, power-mode, outcome).
//! `World` bundles it with every entity collection and the seeded RNG; it is
//! the only thing a tick mutates.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::collision::Rect;
use super::entity::{Body, Sprite};
use super::grid::GridGeometry;
use super::layout::{Layout, PursuerIdentity, Tile};
use super::pursuer::Pursuer;
use crate::consts::*;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Things that happened during a tick, for sound/HUD/presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    FoodEaten { count: usize },
    PowerItemEaten,
    PowerModeEnded,
    PursuerCaught { identity: PursuerIdentity },
    LifeLost { remaining: u8 },
    /// Emitted once, when the run reaches its terminal state
    GameOver(Outcome),
}

/// Score, lives, power-mode and terminal flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Never decreases
    pub score: u64,
    pub lives: u8,
    pub power_mode: bool,
    /// Power-mode ends on the first tick strictly after this time
    pub power_ends_at_ms: u64,
    /// `Some` once the run is over; no further ticks run
    pub outcome: Option<Outcome>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            power_mode: false,
            power_ends_at_ms: 0,
            outcome: None,
        }
    }
}

impl GameState {
    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Simulation context: created per session, rebuilt by `restart`
#[derive(Debug, Clone)]
pub struct World {
    pub seed: u64,
    pub geometry: GridGeometry,
    layout: Layout,
    pub state: GameState,
    pub walls: Vec<Body>,
    /// Wall boxes, cached for collision checks (walls never move)
    pub(crate) wall_rects: Vec<Rect>,
    pub foods: Vec<Body>,
    pub power_items: Vec<Body>,
    /// In layout order (row-major); encounters resolve in this order
    pub pursuers: Vec<Pursuer>,
    pub agent: Agent,
    pub tick_count: u64,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl World {
    /// Populate every entity from a validated layout
    pub fn new(layout: Layout, seed: u64) -> Self {
        let geometry = *layout.geometry();
        let tile = Vec2::splat(geometry.tile_size);
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut walls = Vec::new();
        let mut foods = Vec::new();
        let mut power_items = Vec::new();
        let mut pursuers = Vec::new();

        let (agent_row, agent_col) = layout.agent_spawn();
        let agent = Agent::new(geometry.cell_origin(agent_row, agent_col), tile);

        for (row, col, cell) in layout.cells() {
            let origin = geometry.cell_origin(row, col);
            match cell {
                Tile::Wall => walls.push(Body::new(origin, tile, Some(Sprite::Wall))),
                Tile::Food => foods.push(Body::new(
                    origin + Vec2::splat(FOOD_OFFSET),
                    Vec2::splat(FOOD_SIZE),
                    None,
                )),
                Tile::PowerItem => {
                    let sprite = if (row + col) % 2 == 0 {
                        Sprite::Cherry
                    } else {
                        Sprite::CherryAlt
                    };
                    power_items.push(Body::new(
                        origin + Vec2::splat(POWER_ITEM_OFFSET),
                        Vec2::splat(POWER_ITEM_SIZE),
                        Some(sprite),
                    ));
                }
                Tile::PursuerSpawn(identity) => {
                    pursuers.push(Pursuer::new(identity, origin, tile, &mut rng))
                }
                Tile::AgentSpawn => {}
            }
        }

        let wall_rects = walls.iter().map(Body::rect).collect();

        log::info!(
            "World ready (seed {}): {} walls, {} food, {} power items, {} pursuers",
            seed,
            walls.len(),
            foods.len(),
            power_items.len(),
            pursuers.len()
        );

        Self {
            seed,
            geometry,
            layout,
            state: GameState::default(),
            walls,
            wall_rects,
            foods,
            power_items,
            pursuers,
            agent,
            tick_count: 0,
            rng,
            events: Vec::new(),
        }
    }

    /// Reinitialize from the stored layout and seed
    pub fn restart(&mut self) {
        log::info!("Restarting session");
        *self = World::new(self.layout.clone(), self.seed);
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn wall_rects(&self) -> &[Rect] {
        &self.wall_rects
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Agent and every pursuer back to spawn; score and lives untouched
    pub fn reset_positions(&mut self) {
        self.agent.reset();
        for pursuer in &mut self.pursuers {
            pursuer.reset(&mut self.rng);
        }
    }

    /// Set the terminal flag and signal it, once
    pub(crate) fn finish(&mut self, outcome: Outcome) {
        if self.state.outcome.is_none() {
            self.state.outcome = Some(outcome);
            self.events.push(GameEvent::GameOver(outcome));
            log::info!(
                "Game over: {:?} (score {}, tick {})",
                outcome,
                self.state.score,
                self.tick_count
            );
        }
    }
}
