use hecs::World;

use crate::components::{Ball, Paddle, PaddleSide};
use crate::params::Params;
use crate::rect::Rect;
use crate::resources::{Events, RoundPhase};

/// Return the ball off a paddle it overlaps
///
/// Skipped while the round is ending, which lets the ball drift through the
/// hidden paddles during the pause. The left paddle is tested first and at
/// most one return happens per frame.
pub fn check_paddle_hits(world: &mut World, round: &RoundPhase, events: &mut Events) {
    if round.is_ending() {
        return;
    }

    // Collect paddle geometry without holding borrows
    let mut paddles: Vec<(PaddleSide, f32, Rect)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| (paddle.side, paddle.y, paddle.rect()))
        .collect();
    paddles.sort_by_key(|&(side, _, _)| side == PaddleSide::Right);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let ball_rect = ball.rect();
        for &(side, paddle_y, paddle_rect) in &paddles {
            if !paddle_rect.intersects(&ball_rect) {
                continue;
            }
            return_ball(ball, side, paddle_y, &paddle_rect);
            events.ball_hit_paddle = true;
            break;
        }
    }
}

/// Send the ball back the way it came, a little faster and deflected by
/// where it struck the paddle
fn return_ball(ball: &mut Ball, side: PaddleSide, paddle_y: f32, paddle_rect: &Rect) {
    // Reposition flush against the paddle face
    ball.pos.x = match side {
        PaddleSide::Left => paddle_rect.right() as f32,
        PaddleSide::Right => paddle_rect.left() as f32 - Params::BALL_SIZE,
    };

    // Reverse, then ramp the horizontal speed until it reaches the cap. The
    // ramp is applied after the comparison, so a return can land just past
    // the cap and stay there.
    ball.vel.x = -ball.vel.x;
    if ball.vel.x.abs() < Params::BALL_SPEED_MAX_X {
        ball.vel.x += Params::BALL_SPEED_INCREMENT_X * ball.vel.x.signum();
    }

    // 0.5 is a dead-center return and leaves the vertical velocity alone
    let intersect =
        (ball.pos.y + Params::BALL_SIZE - paddle_y) / (Params::PADDLE_HEIGHT + Params::BALL_SIZE);
    ball.vel.y += (0.5 - intersect) * Params::BALL_SPEED_Y * 2.0;
    ball.vel.y = ball
        .vel
        .y
        .clamp(-Params::BALL_SPEED_Y, Params::BALL_SPEED_Y);
}
