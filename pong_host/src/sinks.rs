//! Collaborator sinks that turn match output into structured logs

use game_core::{AudioSink, RenderSink, Side, SideTable, TimeScaleControl, UiSink};
use glam::Vec2;
use tracing::{debug, info, trace};

/// Counters kept across the whole session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkStats {
    pub bounces: u32,
    pub bat_hits: u32,
    pub points_lost: SideTable<u32>,
    pub wins: u32,
}

/// Headless host: logs every audio and UI call and remembers the
/// time scale the match asked for.
#[derive(Debug, Clone)]
pub struct LogHost {
    pub volume: f32,
    pub time_scale: f32,
    pub ball: Option<Vec2>,
    pub paddles: SideTable<Vec2>,
    pub stats: SinkStats,
}

impl LogHost {
    pub fn new(volume: f32) -> Self {
        Self {
            volume: volume.clamp(0.0, 1.0),
            time_scale: 1.0,
            ball: None,
            paddles: SideTable::default(),
            stats: SinkStats::default(),
        }
    }

    fn sound(&self, cue: &'static str) {
        trace!(cue, volume = self.volume, "audio");
    }
}

impl AudioSink for LogHost {
    fn play_bounce(&mut self) {
        self.stats.bounces += 1;
        self.sound("bounce");
    }

    fn play_lose_side(&mut self, side: Side) {
        self.stats.points_lost[side] += 1;
        self.sound(match side {
            Side::Left => "lose_left",
            Side::Right => "lose_right",
        });
    }

    fn play_bat(&mut self) {
        self.stats.bat_hits += 1;
        self.sound("bat");
    }

    fn play_win(&mut self) {
        self.stats.wins += 1;
        self.sound("win");
    }
}

impl UiSink for LogHost {
    fn show_serve_prompt(&mut self, side: Side) {
        debug!(?side, "serve prompt shown");
    }

    fn hide_serve_prompts(&mut self) {
        debug!("serve prompts hidden");
    }

    fn show_win_banner(&mut self, side: Side) {
        info!(?side, "win banner shown");
    }

    fn hide_win_banners(&mut self) {
        debug!("win banners hidden");
    }

    fn set_score_display(&mut self, side: Side, value: u32) {
        debug!(?side, value, "score display");
    }

    fn highlight_losing_score(&mut self, side: Side) {
        debug!(?side, "losing score highlighted");
    }

    fn restore_score_colors(&mut self) {
        debug!("score colours restored");
    }

    fn show_pause_menu(&mut self) {
        info!("pause menu opened");
    }

    fn hide_pause_menu(&mut self) {
        info!("pause menu closed");
    }
}

impl RenderSink for LogHost {
    fn set_ball_position(&mut self, pos: Option<Vec2>) {
        self.ball = pos;
    }

    fn set_paddle_position(&mut self, side: Side, pos: Vec2) {
        self.paddles[side] = pos;
    }
}

impl TimeScaleControl for LogHost {
    fn set_time_scale(&mut self, factor: f32) {
        debug!(factor, "time scale");
        self.time_scale = factor;
    }
}
