//! Fixed-period simulation tick
//!
//! One call advances the world by one frame. Movement is per tick; the clock
//! is only consulted for power-mode expiry and pursuer respawn timers.

use super::clock::Clock;
use super::entity::{Body, Heading};
use super::state::{GameEvent, Outcome, World};
use crate::consts::*;

/// Input gathered since the previous tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest heading request; replaces any request the agent has not taken yet
    pub heading: Option<Heading>,
}

impl TickInput {
    pub fn heading(heading: Heading) -> Self {
        Self {
            heading: Some(heading),
        }
    }
}

/// Advance the world by one tick
pub fn tick(world: &mut World, input: &TickInput, clock: &impl Clock) {
    // Nothing moves once the run is over
    if world.state.is_over() {
        return;
    }

    let now = clock.now_ms();
    world.tick_count += 1;

    if let Some(heading) = input.heading {
        world.agent.request(heading);
    }

    let board_width = world.geometry.board_width();
    let power_mode = world.state.power_mode;

    // Pursuers move before the agent
    {
        let World {
            pursuers,
            wall_rects,
            rng,
            ..
        } = world;
        for pursuer in pursuers.iter_mut() {
            pursuer.update(wall_rects, board_width, power_mode, now, rng);
        }
    }

    {
        let World {
            agent, wall_rects, ..
        } = world;
        agent.update(wall_rects, board_width);
    }

    eat_food(world);
    eat_power_items(world, now);
    resolve_encounters(world, now);

    if !world.state.is_over() && world.foods.is_empty() && world.power_items.is_empty() {
        world.finish(Outcome::Won);
    }

    if world.state.power_mode && now > world.state.power_ends_at_ms {
        world.state.power_mode = false;
        world.events.push(GameEvent::PowerModeEnded);
        log::debug!("Power mode ended at {now}ms");
    }
}

/// Remove every body overlapping the agent, returning how many went
fn take_overlapping(items: &mut Vec<Body>, agent: &Body) -> usize {
    let before = items.len();
    items.retain(|item| !agent.overlaps(item));
    before - items.len()
}

fn eat_food(world: &mut World) {
    let count = take_overlapping(&mut world.foods, world.agent.body());
    if count > 0 {
        world.state.score += FOOD_POINTS * count as u64;
        world.events.push(GameEvent::FoodEaten { count });
    }
}

fn eat_power_items(world: &mut World, now: u64) {
    let count = take_overlapping(&mut world.power_items, world.agent.body());
    if count == 0 {
        return;
    }
    world.state.score += POWER_ITEM_POINTS * count as u64;
    // Several pickups in one tick reset the timer, they do not stack
    world.state.power_mode = true;
    world.state.power_ends_at_ms = now + POWER_DURATION_MS;
    for _ in 0..count {
        world.events.push(GameEvent::PowerItemEaten);
    }
    log::debug!(
        "Power mode until {}ms (score {})",
        world.state.power_ends_at_ms,
        world.state.score
    );
}

/// Agent vs each active pursuer, in collection order
fn resolve_encounters(world: &mut World, now: u64) {
    for i in 0..world.pursuers.len() {
        let pursuer = &world.pursuers[i];
        if !pursuer.is_active() || !world.agent.body().overlaps(pursuer.body()) {
            continue;
        }

        if pursuer.vulnerable {
            let identity = pursuer.identity;
            world.pursuers[i].start_respawn(now);
            world.state.score += PURSUER_POINTS;
            world.events.push(GameEvent::PursuerCaught { identity });
            log::debug!("Caught {identity:?} pursuer, respawn in {RESPAWN_DELAY_MS}ms");
            continue;
        }

        world.state.lives = world.state.lives.saturating_sub(1);
        world.events.push(GameEvent::LifeLost {
            remaining: world.state.lives,
        });
        if world.state.lives == 0 {
            world.finish(Outcome::Lost);
            return;
        }
        log::debug!("Life lost, {} remaining", world.state.lives);
        world.reset_positions();
    }
}
