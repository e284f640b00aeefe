use std::ops::{Index, IndexMut};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which half of the court a paddle or score belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Direction pointing from this side's paddle towards the centre line
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Two-element table keyed by [`Side`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SideTable<T>(pub [T; 2]);

impl<T> SideTable<T> {
    pub fn new(left: T, right: T) -> Self {
        Self([left, right])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.0.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::BOTH.into_iter().zip(self.0.iter_mut())
    }
}

impl<T> Index<Side> for SideTable<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        &self.0[side.index()]
    }
}

impl<T> IndexMut<Side> for SideTable<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        &mut self.0[side.index()]
    }
}

/// Keys the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    W,
    S,
    ArrowUp,
    ArrowDown,
    Escape,
    Space,
    Enter,
    Char(char),
}

impl KeyCode {
    /// Map a DOM-style key name ("ArrowUp", "w", "Escape", ...) to a key code
    pub fn from_key_name(name: &str) -> Option<Self> {
        let key = match name {
            "w" | "W" => KeyCode::W,
            "s" | "S" => KeyCode::S,
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowDown" => KeyCode::ArrowDown,
            "Escape" | "Esc" => KeyCode::Escape,
            " " | "Space" => KeyCode::Space,
            "Enter" => KeyCode::Enter,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c.to_ascii_lowercase()),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

/// A key bound to a paddle movement direction (+1 = up, -1 = down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub dir: i8,
}

impl KeyBinding {
    pub fn new(key: KeyCode, dir: i8) -> Self {
        Self { key, dir }
    }

    /// W/S for the left paddle, arrow keys for the right
    pub fn defaults(side: Side) -> Vec<KeyBinding> {
        match side {
            Side::Left => vec![KeyBinding::new(KeyCode::W, 1), KeyBinding::new(KeyCode::S, -1)],
            Side::Right => vec![
                KeyBinding::new(KeyCode::ArrowUp, 1),
                KeyBinding::new(KeyCode::ArrowDown, -1),
            ],
        }
    }
}

/// Paddle - one per side for the whole session
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // only y changes after construction
    pub half_length: f32,
    pub half_width: f32,
    pub speed: f32,
    pub autoplay: bool,
    pub bindings: Vec<KeyBinding>,
}

impl Paddle {
    pub fn new(side: Side, config: &crate::Config) -> Self {
        Self {
            side,
            pos: Vec2::new(config.paddle_x(side), 0.0),
            half_length: config.paddle_half_length,
            half_width: config.paddle_half_width,
            speed: config.paddle_speed,
            autoplay: false,
            bindings: KeyBinding::defaults(side),
        }
    }

    /// Which edge this paddle defends, judged by where it sits
    pub fn facing(&self) -> Side {
        if self.pos.x < 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Ball centre for a serve: touching the paddle's inner edge
    pub fn serve_point(&self, ball_radius: f32) -> Vec2 {
        let sign = self.facing().sign();
        Vec2::new(self.pos.x + sign * (self.half_width + ball_radius), self.pos.y)
    }

    /// True when a ball spanning `[y - radius, y + radius]` is level with the paddle
    pub fn overlaps_vertically(&self, y: f32, radius: f32) -> bool {
        y + radius > self.pos.y - self.half_length && y - radius < self.pos.y + self.half_length
    }
}

/// Ball - a fresh one is created for every round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Parked ball awaiting serve
    pub fn parked(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// A zero velocity means the ball is parked
    pub fn is_live(&self) -> bool {
        self.vel.length() > 0.0
    }

    /// Serve the ball horizontally in `direction` (+1 right, -1 left) with a random rise
    pub fn launch(&mut self, direction: f32, speed: f32, rise: crate::UniformRange, rng: &mut crate::GameRng) {
        let rise = rng.sign() * rng.uniform(rise);
        self.vel = Vec2::new(direction, rise).normalize() * speed;
    }
}

/// Movement intent for a paddle this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = down, 0 = stop, 1 = up
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toward(dir: i8) -> Self {
        Self { dir: dir.signum() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, GameRng};

    #[test]
    fn test_side_table_indexing() {
        let mut table = SideTable::new(1, 2);
        assert_eq!(table[Side::Left], 1);
        assert_eq!(table[Side::Right], 2);
        table[Side::Right] += 5;
        assert_eq!(table.0, [1, 7]);
    }

    #[test]
    fn test_side_opponent_and_sign() {
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.opponent(), Side::Left);
        assert_eq!(Side::Left.sign(), 1.0);
        assert_eq!(Side::Right.sign(), -1.0);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(KeyCode::from_key_name("W"), Some(KeyCode::W));
        assert_eq!(KeyCode::from_key_name("ArrowDown"), Some(KeyCode::ArrowDown));
        assert_eq!(KeyCode::from_key_name("Q"), Some(KeyCode::Char('q')));
        assert_eq!(KeyCode::from_key_name("F13"), None);
    }

    #[test]
    fn test_paddle_facing_follows_position() {
        let config = Config::new();
        let left = Paddle::new(Side::Left, &config);
        let right = Paddle::new(Side::Right, &config);
        assert_eq!(left.facing(), Side::Left);
        assert_eq!(right.facing(), Side::Right);
    }

    #[test]
    fn test_serve_point_touches_inner_edge() {
        let config = Config::new();
        let left = Paddle::new(Side::Left, &config);
        let right = Paddle::new(Side::Right, &config);
        assert_eq!(left.serve_point(12.5), Vec2::new(-480.0 + 17.5, 0.0));
        assert_eq!(right.serve_point(12.5), Vec2::new(480.0 - 17.5, 0.0));
    }

    #[test]
    fn test_vertical_overlap_edges() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Left, &config);
        // Ball resting exactly on top of the paddle does not overlap
        assert!(!paddle.overlaps_vertically(50.0 + 12.5, 12.5));
        assert!(paddle.overlaps_vertically(50.0 + 12.0, 12.5));
        assert!(!paddle.overlaps_vertically(-50.0 - 12.5, 12.5));
    }

    #[test]
    fn test_parked_ball_is_not_live() {
        let ball = Ball::parked(Vec2::ZERO, 12.5);
        assert!(!ball.is_live());
    }

    #[test]
    fn test_launch_direction_and_speed() {
        let mut rng = GameRng::new(7);
        let config = Config::new();
        for direction in [1.0, -1.0] {
            let mut ball = Ball::parked(Vec2::ZERO, config.ball_radius);
            ball.launch(direction, config.ball_speed, config.launch_rise, &mut rng);
            assert!(ball.is_live());
            assert_eq!(ball.vel.x.signum(), direction);
            assert!(ball.vel.y != 0.0);
            assert!((ball.vel.length() - config.ball_speed).abs() < 1e-3);
        }
    }

    #[test]
    fn test_intent_is_normalized() {
        assert_eq!(PaddleIntent::toward(5).dir, 1);
        assert_eq!(PaddleIntent::toward(-3).dir, -1);
        assert_eq!(PaddleIntent::new().dir, 0);
    }
}
