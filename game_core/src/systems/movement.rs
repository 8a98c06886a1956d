use hecs::World;

use crate::components::{Ball, BallPhase, Paddle, PaddleIntent};
use crate::params::Params;
use crate::resources::{Events, RoundPhase, Time};

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.velocity = intent.dir as f32 * Params::PADDLE_SPEED;
        paddle.y += paddle.velocity * time.dt;
        paddle.y = paddle
            .y
            .clamp(0.0, Params::PLAYFIELD_HEIGHT - Params::PADDLE_HEIGHT);
    }
}

/// Advance the ball: serve delay, integration, wall bounces
pub fn move_ball(world: &mut World, time: &Time, round: &RoundPhase, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        match ball.phase {
            BallPhase::Idle => {}
            BallPhase::WaitingToServe { remaining } => {
                // Held in place until the delay runs out
                let remaining = remaining - time.dt;
                ball.phase = if remaining <= 0.0 {
                    BallPhase::Active
                } else {
                    BallPhase::WaitingToServe { remaining }
                };
            }
            BallPhase::Active => {
                ball.pos += ball.vel * time.dt;

                // The ball always bounces off the top and bottom edges; the
                // bounce is silent while the round is ending
                if ball.pos.y < 0.0 || ball.pos.y + Params::BALL_SIZE > Params::PLAYFIELD_HEIGHT {
                    ball.vel.y = -ball.vel.y;
                    if round.is_live() {
                        events.ball_hit_wall = true;
                    }
                }

                // It only bounces off the left and right edges while the
                // round is ending, so it stays on screen during the pause
                if round.is_ending() {
                    if ball.pos.x < 0.0
                        || ball.pos.x + Params::BALL_SIZE > Params::PLAYFIELD_WIDTH
                    {
                        ball.vel.x = -ball.vel.x;
                    }
                    ball.pos.x = ball
                        .pos
                        .x
                        .clamp(0.0, Params::PLAYFIELD_WIDTH - Params::BALL_SIZE);
                }

                ball.pos.y = ball
                    .pos
                    .y
                    .clamp(0.0, Params::PLAYFIELD_HEIGHT - Params::BALL_SIZE);
            }
        }
    }
}
