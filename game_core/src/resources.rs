use crate::components::PaddleSide;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.016, now: 0.0 }
    }
}

/// One player's movement signal for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    Idle,
    Up,
    Down,
}

impl Control {
    /// Signed direction: -1 = up, 0 = stop, 1 = down
    pub fn dir(self) -> i8 {
        match self {
            Control::Up => -1,
            Control::Idle => 0,
            Control::Down => 1,
        }
    }
}

/// Sampled control state for both paddles
#[derive(Debug, Clone, Copy, Default)]
pub struct Controls {
    pub left: Control,
    pub right: Control,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_side(&self, side: PaddleSide) -> Control {
        match side {
            PaddleSide::Left => self.left,
            PaddleSide::Right => self.right,
        }
    }
}

/// Lifecycle of the current round
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundPhase {
    /// Normal play
    Live,
    /// Someone reached the score limit; counting down to the next round
    Ending { remaining: f32 },
}

impl RoundPhase {
    pub fn is_live(&self) -> bool {
        matches!(self, RoundPhase::Live)
    }

    pub fn is_ending(&self) -> bool {
        matches!(self, RoundPhase::Ending { .. })
    }
}

impl Default for RoundPhase {
    fn default() -> Self {
        RoundPhase::Live
    }
}

/// Audio cues raised during this frame
///
/// A flag is only set when its sound should actually be heard, so the
/// presentation layer can play whatever is flagged without extra rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub point_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = false;
        self.point_scored = false;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy, for real games rather than tests
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_direction() {
        assert_eq!(Control::Up.dir(), -1);
        assert_eq!(Control::Idle.dir(), 0);
        assert_eq!(Control::Down.dir(), 1);
    }

    #[test]
    fn test_controls_default_to_idle() {
        let controls = Controls::new();
        assert_eq!(controls.left, Control::Idle);
        assert_eq!(controls.right, Control::Idle);
    }

    #[test]
    fn test_controls_for_side() {
        let controls = Controls {
            left: Control::Up,
            right: Control::Down,
        };
        assert_eq!(controls.for_side(PaddleSide::Left), Control::Up);
        assert_eq!(controls.for_side(PaddleSide::Right), Control::Down);
    }

    #[test]
    fn test_round_phase_predicates() {
        assert!(RoundPhase::Live.is_live());
        assert!(!RoundPhase::Live.is_ending());

        let ending = RoundPhase::Ending { remaining: 6.0 };
        assert!(ending.is_ending());
        assert!(!ending.is_live());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_wall = true;
        events.ball_hit_paddle = true;
        events.point_scored = true;

        events.clear();

        assert!(!events.ball_hit_wall);
        assert!(!events.ball_hit_paddle);
        assert!(!events.point_scored);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        use rand::Rng;
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.0.gen_range(0..1000), b.0.gen_range(0..1000));
        }
    }
}
