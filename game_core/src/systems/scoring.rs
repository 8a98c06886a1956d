use hecs::World;

use crate::components::{Ball, Paddle, PaddleSide};
use crate::params::Params;
use crate::resources::{Events, GameRng};

/// Score a point when the ball gets past a paddle
///
/// The miss is judged on the rounded screen rect: the ball has to be fully
/// past the edge. An ordinary point serves toward the scorer's opponent with
/// the delay armed and raises the point cue; the round-winning point serves
/// toward the scorer with no delay and stays silent, since the round-over
/// pause follows immediately.
pub fn check_misses(world: &mut World, events: &mut Events, rng: &mut GameRng) {
    let exited = {
        let mut query = world.query::<&Ball>();
        query.iter().next().and_then(|(_e, ball)| {
            let rect = ball.rect();
            if rect.right() < 0 {
                Some(PaddleSide::Right) // Past the left edge, right scores
            } else if rect.left() > Params::PLAYFIELD_WIDTH as i32 {
                Some(PaddleSide::Left)
            } else {
                None
            }
        })
    };

    let scorer = match exited {
        Some(side) => side,
        None => return,
    };

    let scorer_score = {
        let mut query = world.query::<&Paddle>();
        let found = query
            .iter()
            .find(|(_e, paddle)| paddle.side == scorer)
            .map(|(_e, paddle)| paddle.score);
        match found {
            Some(score) => score,
            None => return, // No paddle on that side
        }
    };
    let wins_round = scorer_score == Params::ROUND_MAX_SCORE - 1;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if wins_round {
            ball.serve(scorer, false, rng);
        } else {
            ball.serve(!scorer, true, rng);
        }
    }
    if !wins_round {
        events.point_scored = true;
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == scorer {
            paddle.score += 1;
        }
    }
}
