use glam::Vec2;

use crate::params::Params;
use crate::rect::Rect;
use crate::resources::GameRng;

/// Which side of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddleSide {
    Left,
    Right,
}

impl PaddleSide {
    /// Pick a side uniformly at random
    pub fn random(rng: &mut GameRng) -> Self {
        use rand::Rng;
        if rng.0.gen_bool(0.5) {
            PaddleSide::Left
        } else {
            PaddleSide::Right
        }
    }
}

impl std::ops::Not for PaddleSide {
    type Output = PaddleSide;

    /// The opposing side
    fn not(self) -> PaddleSide {
        match self {
            PaddleSide::Left => PaddleSide::Right,
            PaddleSide::Right => PaddleSide::Left,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: PaddleSide,
    pub y: f32,        // Top edge, continuous
    pub velocity: f32, // Signed vertical speed for this frame
    pub score: u32,
}

impl Paddle {
    /// New paddle, vertically centered, no score
    pub fn new(side: PaddleSide) -> Self {
        Self {
            side,
            y: (Params::PLAYFIELD_HEIGHT - Params::PADDLE_HEIGHT) / 2.0,
            velocity: 0.0,
            score: 0,
        }
    }

    /// Fixed horizontal position for this side
    pub fn x(&self) -> f32 {
        match self.side {
            PaddleSide::Left => Params::PADDLE_MARGIN_X,
            PaddleSide::Right => Params::PLAYFIELD_WIDTH - Params::PADDLE_MARGIN_X,
        }
    }

    /// Screen rect derived from the continuous position
    pub fn rect(&self) -> Rect {
        Rect::from_continuous(
            self.x(),
            self.y,
            Params::PADDLE_WIDTH,
            Params::PADDLE_HEIGHT,
        )
    }
}

/// Serve lifecycle of the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallPhase {
    /// Created but never served
    Idle,
    /// Positioned for a serve, sitting out the delay
    WaitingToServe { remaining: f32 },
    /// In play
    Active,
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner, continuous
    pub vel: Vec2,
    pub phase: BallPhase,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            phase: BallPhase::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == BallPhase::Active
    }

    /// Screen rect derived from the continuous position
    pub fn rect(&self) -> Rect {
        Rect::from_continuous(self.pos.x, self.pos.y, Params::BALL_SIZE, Params::BALL_SIZE)
    }

    /// Position the ball beside the net and send it toward `target`
    ///
    /// The ball starts at a random height with a random vertical velocity. A
    /// delayed serve holds it in place for `BALL_SERVE_DELAY` seconds before
    /// it moves; an undelayed serve puts it straight into play.
    pub fn serve(&mut self, target: PaddleSide, delayed: bool, rng: &mut GameRng) {
        use rand::Rng;

        let center_x = (Params::PLAYFIELD_WIDTH - Params::BALL_SIZE) / 2.0;
        let (x, vx) = match target {
            PaddleSide::Left => (
                center_x - Params::NET_WIDTH * 2.0,
                -Params::BALL_SPEED_INITIAL_X,
            ),
            PaddleSide::Right => (
                center_x + Params::NET_WIDTH * 2.0,
                Params::BALL_SPEED_INITIAL_X,
            ),
        };

        self.pos = Vec2::new(
            x,
            rng.0
                .gen_range(0.0..=Params::PLAYFIELD_HEIGHT - Params::BALL_SIZE),
        );
        self.vel = Vec2::new(
            vx,
            rng.0.gen_range(-Params::BALL_SPEED_Y..=Params::BALL_SPEED_Y),
        );
        self.phase = if delayed {
            BallPhase::WaitingToServe {
                remaining: Params::BALL_SERVE_DELAY,
            }
        } else {
            BallPhase::Active
        };
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_side() {
        assert_eq!(!PaddleSide::Left, PaddleSide::Right);
        assert_eq!(!PaddleSide::Right, PaddleSide::Left);
    }

    #[test]
    fn test_random_side_hits_both_sides() {
        let mut rng = GameRng::new(12345);
        let mut saw_left = false;
        let mut saw_right = false;
        for _ in 0..100 {
            match PaddleSide::random(&mut rng) {
                PaddleSide::Left => saw_left = true,
                PaddleSide::Right => saw_right = true,
            }
        }
        assert!(saw_left && saw_right, "both sides should come up");
    }

    #[test]
    fn test_new_paddle_is_centered() {
        let paddle = Paddle::new(PaddleSide::Left);
        assert_eq!(paddle.y, 275.0);
        assert_eq!(paddle.velocity, 0.0);
        assert_eq!(paddle.score, 0);
    }

    #[test]
    fn test_paddle_horizontal_positions() {
        assert_eq!(Paddle::new(PaddleSide::Left).x(), 50.0);
        assert_eq!(Paddle::new(PaddleSide::Right).x(), 750.0);
    }

    #[test]
    fn test_paddle_rect_rounds_vertical_position() {
        let mut paddle = Paddle::new(PaddleSide::Left);
        paddle.y = 100.6;
        assert_eq!(paddle.rect(), Rect::new(50, 101, 10, 50));
    }

    #[test]
    fn test_new_ball_is_idle() {
        let ball = Ball::new();
        assert_eq!(ball.phase, BallPhase::Idle);
        assert!(!ball.is_active());
    }

    #[test]
    fn test_serve_toward_left() {
        let mut rng = GameRng::new(12345);
        let mut ball = Ball::new();
        ball.serve(PaddleSide::Left, true, &mut rng);

        assert_eq!(ball.pos.x, 383.0, "left serve sits left of the net");
        assert_eq!(ball.vel.x, -300.0);
        assert!(ball.pos.y >= 0.0 && ball.pos.y <= 586.0);
        assert!(ball.vel.y >= -300.0 && ball.vel.y <= 300.0);
        assert_eq!(
            ball.phase,
            BallPhase::WaitingToServe { remaining: 2.0 },
            "delayed serve arms the full delay"
        );
    }

    #[test]
    fn test_serve_toward_right() {
        let mut rng = GameRng::new(12345);
        let mut ball = Ball::new();
        ball.serve(PaddleSide::Right, true, &mut rng);

        assert_eq!(ball.pos.x, 403.0, "right serve sits right of the net");
        assert_eq!(ball.vel.x, 300.0);
    }

    #[test]
    fn test_undelayed_serve_is_immediately_active() {
        let mut rng = GameRng::new(12345);
        let mut ball = Ball::new();
        ball.serve(PaddleSide::Right, false, &mut rng);
        assert_eq!(ball.phase, BallPhase::Active);
    }

    #[test]
    fn test_ball_rect_uses_rounded_position() {
        let mut ball = Ball::new();
        ball.pos = Vec2::new(399.5, 10.2);
        assert_eq!(ball.rect(), Rect::new(400, 10, 14, 14));
    }
}
