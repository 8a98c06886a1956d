//! Core simulation for a classic two-paddle Pong game.
//!
//! The world holds two paddle entities and one ball entity; [`step`] runs
//! the systems for one frame in a fixed order. Everything here is pure and
//! deterministic given the injected [`GameRng`], which keeps the crate free
//! of platform concerns and easy to drive from tests.

pub mod components;
pub mod params;
pub mod rect;
pub mod resources;
pub mod systems;

pub use components::*;
pub use params::*;
pub use rect::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the game by one frame
///
/// Integration uses the frame's variable `dt` in a single step; there is no
/// sub-stepping and no clamping of large deltas.
pub fn step(
    world: &mut World,
    time: &mut Time,
    controls: &Controls,
    round: &mut RoundPhase,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest controls (apply to paddle intents)
    ingest_controls(world, controls);

    // 2. Move paddles based on intents
    move_paddles(world, time);

    // 3. Move ball (serve delay, integration, wall bounces)
    move_ball(world, time, round, events);

    // 4. Check misses (ball out past an edge, scoring)
    check_misses(world, events, rng);

    // 5. Check paddle hits (returns)
    check_paddle_hits(world, round, events);

    // 6. Round lifecycle (score limit, end-of-round pause, reset)
    check_round_over(world, time, round, rng);

    // Update time
    time.now += time.dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: PaddleSide) -> hecs::Entity {
    world.spawn((Paddle::new(side), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World) -> hecs::Entity {
    world.spawn((Ball::new(),))
}

/// Serve the ball toward one side, e.g. the opening serve of a game
pub fn serve_ball(world: &mut World, target: PaddleSide, delayed: bool, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.serve(target, delayed, rng);
    }
}
