use hecs::World;

use crate::components::{Paddle, PaddleIntent};
use crate::resources::Controls;

/// Copy the sampled control state into each paddle's movement intent
pub fn ingest_controls(world: &mut World, controls: &Controls) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = controls.for_side(paddle.side).dir();
    }
}
