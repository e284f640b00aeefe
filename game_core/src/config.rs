use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::Side;
use crate::params::Params;

/// Closed interval `[min, max]` sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformRange {
    pub min: f32,
    pub max: f32,
}

impl UniformRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("play_to must be at least 1")]
    ZeroPlayTo,

    #[error("{field} range is invalid: [{min}, {max}]")]
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("paddle at x={paddle_x} does not fit inside the horizontal bound {bound}")]
    PaddleOutsideArena { paddle_x: f32, bound: f32 },
}

/// Game configuration
///
/// Every field falls back to its [`Params`] value when missing from a
/// deserialized document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub play_to: u32,
    pub ball_speed: f32,
    pub ball_radius: f32,
    pub paddle_speed: f32,
    /// Distance of each paddle from the centre line
    pub paddle_x: f32,
    pub paddle_half_length: f32,
    pub paddle_half_width: f32,
    pub horizontal_bound: f32,
    pub wall_bound: f32,
    pub paddle_travel: f32,
    pub autoplay_dead_zone: f32,
    pub serve_autoplay_delay: f32,
    pub jitter: UniformRange,
    pub launch_rise: UniformRange,
    /// Host time scale restored when leaving pause
    pub time_scale: f32,
    pub fixed_dt: f32,
    pub max_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            play_to: Params::PLAY_TO,
            ball_speed: Params::BALL_SPEED,
            ball_radius: Params::BALL_RADIUS,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_x: Params::PADDLE_X,
            paddle_half_length: Params::PADDLE_HALF_LENGTH,
            paddle_half_width: Params::PADDLE_HALF_WIDTH,
            horizontal_bound: Params::HORIZONTAL_BOUND,
            wall_bound: Params::WALL_BOUND,
            paddle_travel: Params::PADDLE_TRAVEL,
            autoplay_dead_zone: Params::AUTOPLAY_DEAD_ZONE,
            serve_autoplay_delay: Params::SERVE_AUTOPLAY_DELAY,
            jitter: UniformRange::new(Params::JITTER_MIN, Params::JITTER_MAX),
            launch_rise: UniformRange::new(Params::LAUNCH_RISE_MIN, Params::LAUNCH_RISE_MAX),
            time_scale: Params::TIME_SCALE,
            fixed_dt: Params::FIXED_DT,
            max_dt: Params::MAX_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        -side.sign() * self.paddle_x
    }

    /// True when a paddle centred at `y` is strictly inside its travel range
    pub fn paddle_y_allowed(&self, y: f32) -> bool {
        y > -self.paddle_travel && y < self.paddle_travel
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.play_to == 0 {
            return Err(ConfigError::ZeroPlayTo);
        }

        let positive = [
            ("ball_speed", self.ball_speed),
            ("ball_radius", self.ball_radius),
            ("paddle_speed", self.paddle_speed),
            ("paddle_half_length", self.paddle_half_length),
            ("paddle_half_width", self.paddle_half_width),
            ("horizontal_bound", self.horizontal_bound),
            ("wall_bound", self.wall_bound),
            ("paddle_travel", self.paddle_travel),
            ("serve_autoplay_delay", self.serve_autoplay_delay),
            ("time_scale", self.time_scale),
            ("fixed_dt", self.fixed_dt),
            ("max_dt", self.max_dt),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        for (field, range) in [("jitter", self.jitter), ("launch_rise", self.launch_rise)] {
            if range.min.is_nan() || range.min <= 0.0 || range.max.is_nan() || range.min > range.max {
                return Err(ConfigError::InvalidRange {
                    field,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        if self.paddle_x + self.paddle_half_width >= self.horizontal_bound {
            return Err(ConfigError::PaddleOutsideArena {
                paddle_x: self.paddle_x,
                bound: self.horizontal_bound,
            });
        }

        Ok(())
    }
}
