use hecs::World;

use crate::components::{Ball, Paddle, PaddleSide};
use crate::params::Params;
use crate::resources::{GameRng, RoundPhase, Time};

/// Drive the round lifecycle
///
/// A live round starts ending the moment a paddle reaches the score limit.
/// When the end-of-round pause runs out, both scores reset and a delayed
/// serve toward a random side opens the next round.
pub fn check_round_over(world: &mut World, time: &Time, round: &mut RoundPhase, rng: &mut GameRng) {
    match *round {
        RoundPhase::Live => {
            let round_won = world
                .query::<&Paddle>()
                .iter()
                .any(|(_e, paddle)| paddle.score == Params::ROUND_MAX_SCORE);
            if round_won {
                *round = RoundPhase::Ending {
                    remaining: Params::ROUND_OVER_TIMEOUT,
                };
            }
        }
        RoundPhase::Ending { remaining } => {
            let remaining = remaining - time.dt;
            if remaining > 0.0 {
                *round = RoundPhase::Ending { remaining };
                return;
            }

            for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
                paddle.score = 0;
            }
            let receiver = PaddleSide::random(rng);
            for (_entity, ball) in world.query_mut::<&mut Ball>() {
                ball.serve(receiver, true, rng);
            }
            *round = RoundPhase::Live;
        }
    }
}
