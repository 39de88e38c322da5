//! Maze Chase entry point
//!
//! Headless native runner: drives the simulation at a fixed cadence and logs
//! what happens. A graphical front end would replace the autopilot with key
//! input and draw `renderer::draw_list` every frame.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use maze_chase::Settings;
use maze_chase::renderer::{self, shapes};
use maze_chase::sim::{
    GameEvent, Layout, LayoutError, SystemClock, TickInput, World, random_heading, tick,
};

fn main() {
    env_logger::init();
    log::info!("Maze Chase (native) starting...");

    if let Err(e) = run() {
        log::error!("Cannot start: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), LayoutError> {
    let settings = Settings::load();
    let layout = Layout::reference()?;
    let seed = settings.seed.unwrap_or_else(seed_from_time);

    let mut world = World::new(layout, seed);
    let clock = SystemClock::new();
    let period = Duration::from_millis(settings.tick_ms);
    // Own stream, so input choices never shift the simulation's RNG
    let mut pilot = Pcg32::seed_from_u64(seed.rotate_left(17) ^ 0x9e37_79b9_7f4a_7c15);

    log::info!(
        "Running with seed {} at {}ms per tick (autopilot: {})",
        seed,
        settings.tick_ms,
        settings.autopilot
    );

    loop {
        let frame_start = Instant::now();

        let input = if settings.autopilot && world.tick_count % settings.autopilot_interval == 0 {
            TickInput::heading(random_heading(&mut pilot))
        } else {
            TickInput::default()
        };

        tick(&mut world, &input, &clock);

        for event in world.drain_events() {
            report(&event);
        }

        if log::log_enabled!(log::Level::Trace) {
            let frame = renderer::draw_list(&world);
            let [(score_at, score), (lives_at, lives)] = frame.hud.labels();
            log::trace!(
                "tick {}: {} vertices, {score} at {score_at}, {lives} at {lives_at}",
                world.tick_count,
                shapes::batch(&frame).len(),
            );
        }

        if world.state.is_over() {
            break;
        }
        if settings.max_ticks.is_some_and(|max| world.tick_count >= max) {
            log::info!("Tick limit reached");
            break;
        }

        if let Some(rest) = period.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    match serde_json::to_string(&world.state) {
        Ok(json) => log::info!("Final state: {json}"),
        Err(e) => log::warn!("Cannot serialize final state: {e}"),
    }
    println!("{}", renderer::text_frame(&world));

    Ok(())
}

fn report(event: &GameEvent) {
    match event {
        GameEvent::GameOver(outcome) => log::info!("Outcome: {outcome:?}"),
        GameEvent::LifeLost { remaining } => log::info!("Life lost, {remaining} left"),
        GameEvent::PursuerCaught { identity } => log::info!("Caught the {identity:?} pursuer"),
        other => log::debug!("{other:?}"),
    }
}

fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
