use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{Side, SideTable};
use crate::config::UniformRange;
use crate::fsm::Transition;
use crate::host::UiSink;

/// Time resource for one simulation tick
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,      // Host-scaled delta used by physics
    pub real_dt: f32, // Unscaled wall-clock delta used by serve timing
    pub now: f32,     // Total elapsed wall-clock time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self {
            dt,
            real_dt: dt,
            now,
        }
    }

    /// Frame time as seen through the host's time scale
    pub fn scaled(real_dt: f32, time_scale: f32, now: f32) -> Self {
        Self {
            dt: real_dt * time_scale,
            real_dt,
            now,
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new(1.0 / 60.0, 0.0)
    }
}

/// Per-side scores; the only place score values change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    scores: SideTable<u32>,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        self.scores[side]
    }

    /// Add to one side's score and refresh its display; returns the new value
    pub fn increment(&mut self, side: Side, amount: u32, ui: &mut dyn UiSink) -> u32 {
        let value = self.scores[side].saturating_add(amount);
        self.scores[side] = value;
        ui.set_score_display(side, value);
        value
    }

    pub fn reset(&mut self, ui: &mut dyn UiSink) {
        for (side, score) in self.scores.iter_mut() {
            *score = 0;
            ui.set_score_display(side, 0);
        }
    }

    pub fn winner(&self, play_to: u32) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|&side| self.scores[side] >= play_to)
    }
}

/// Random number generator
///
/// Seeded explicitly so a match can be replayed exactly.
#[derive(Debug, Clone)]
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn uniform(&mut self, range: UniformRange) -> f32 {
        self.0.gen_range(range.min..=range.max)
    }

    /// Bounce multiplier applied to a single velocity component
    pub fn jitter(&mut self, range: UniformRange) -> f32 {
        self.uniform(range)
    }

    /// +1.0 or -1.0 with equal probability
    pub fn sign(&mut self) -> f32 {
        if self.0.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }

    pub fn coin_flip(&mut self) -> bool {
        self.0.gen::<f32>() > 0.5
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub wall_bounces: u32,
    pub paddle_hits: u32,
    pub point: Option<Side>, // side that scored
    pub launched: bool,
    pub transitions: Vec<Transition>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.wall_bounces = 0;
        self.paddle_hits = 0;
        self.point = None;
        self.launched = false;
        self.transitions.clear();
    }
}

/// User preferences read once at session start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub left_autoplay: bool,
    pub right_autoplay: bool,
    pub volume: f32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            left_autoplay: false,
            right_autoplay: false,
            volume: 0.5,
        }
    }
}

impl Preferences {
    pub fn autoplay(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left_autoplay,
            Side::Right => self.right_autoplay,
        }
    }
}
