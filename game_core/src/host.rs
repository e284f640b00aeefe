//! Collaborator seams between the simulation and whoever hosts it.
//!
//! The core never renders, plays audio or polls devices itself. It reports
//! what happened through these traits and reads key state through
//! [`InputSource`].

use std::collections::HashSet;

use glam::Vec2;

use crate::components::{KeyCode, Side};

/// Fire-and-forget sound cues
pub trait AudioSink {
    fn play_bounce(&mut self);
    fn play_lose_side(&mut self, side: Side);
    fn play_bat(&mut self);
    fn play_win(&mut self);
}

/// Prompts, banners and score text
pub trait UiSink {
    fn show_serve_prompt(&mut self, side: Side);
    fn hide_serve_prompts(&mut self);
    fn show_win_banner(&mut self, side: Side);
    fn hide_win_banners(&mut self);
    fn set_score_display(&mut self, side: Side, value: u32);
    fn highlight_losing_score(&mut self, side: Side);
    fn restore_score_colors(&mut self);
    fn show_pause_menu(&mut self);
    fn hide_pause_menu(&mut self);
}

/// Receives entity positions once per tick
pub trait RenderSink {
    /// `None` while no ball exists
    fn set_ball_position(&mut self, pos: Option<Vec2>);
    fn set_paddle_position(&mut self, side: Side, pos: Vec2);
}

pub trait TimeScaleControl {
    fn set_time_scale(&mut self, factor: f32);
}

/// Everything the match pushes out to its host
pub trait Host: AudioSink + UiSink + RenderSink + TimeScaleControl {}

impl<T: AudioSink + UiSink + RenderSink + TimeScaleControl> Host for T {}

/// Key state for the current tick
pub trait InputSource {
    fn is_key_down(&self, key: KeyCode) -> bool;
    fn was_key_pressed(&self, key: KeyCode) -> bool;
    fn any_key_pressed(&self) -> bool;
    fn escape_pressed(&self) -> bool {
        self.was_key_pressed(KeyCode::Escape)
    }
}

/// Held keys plus keys that went down since the last [`KeyboardState::end_frame`]
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: KeyCode) {
        if self.held.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Press and release within one frame
    pub fn tap(&mut self, key: KeyCode) {
        self.pressed.insert(key);
    }

    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }
}

impl InputSource for KeyboardState {
    fn is_key_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    fn was_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    fn any_key_pressed(&self) -> bool {
        !self.pressed.is_empty()
    }
}

/// One collaborator call, as captured by [`Recorder`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCall {
    PlayBounce,
    PlayLoseSide(Side),
    PlayBat,
    PlayWin,
    ShowServePrompt(Side),
    HideServePrompts,
    ShowWinBanner(Side),
    HideWinBanners,
    SetScoreDisplay(Side, u32),
    HighlightLosingScore(Side),
    RestoreScoreColors,
    ShowPauseMenu,
    HidePauseMenu,
    SetTimeScale(f32),
}

/// Host that records audio, UI and time-scale calls in order
///
/// Render updates arrive every tick, so only the latest positions are kept.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub calls: Vec<HostCall>,
    pub ball: Option<Vec2>,
    pub paddles: [Vec2; 2],
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, call: HostCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    pub fn contains(&self, call: HostCall) -> bool {
        self.calls.contains(&call)
    }
}

impl AudioSink for Recorder {
    fn play_bounce(&mut self) {
        self.calls.push(HostCall::PlayBounce);
    }

    fn play_lose_side(&mut self, side: Side) {
        self.calls.push(HostCall::PlayLoseSide(side));
    }

    fn play_bat(&mut self) {
        self.calls.push(HostCall::PlayBat);
    }

    fn play_win(&mut self) {
        self.calls.push(HostCall::PlayWin);
    }
}

impl UiSink for Recorder {
    fn show_serve_prompt(&mut self, side: Side) {
        self.calls.push(HostCall::ShowServePrompt(side));
    }

    fn hide_serve_prompts(&mut self) {
        self.calls.push(HostCall::HideServePrompts);
    }

    fn show_win_banner(&mut self, side: Side) {
        self.calls.push(HostCall::ShowWinBanner(side));
    }

    fn hide_win_banners(&mut self) {
        self.calls.push(HostCall::HideWinBanners);
    }

    fn set_score_display(&mut self, side: Side, value: u32) {
        self.calls.push(HostCall::SetScoreDisplay(side, value));
    }

    fn highlight_losing_score(&mut self, side: Side) {
        self.calls.push(HostCall::HighlightLosingScore(side));
    }

    fn restore_score_colors(&mut self) {
        self.calls.push(HostCall::RestoreScoreColors);
    }

    fn show_pause_menu(&mut self) {
        self.calls.push(HostCall::ShowPauseMenu);
    }

    fn hide_pause_menu(&mut self) {
        self.calls.push(HostCall::HidePauseMenu);
    }
}

impl RenderSink for Recorder {
    fn set_ball_position(&mut self, pos: Option<Vec2>) {
        self.ball = pos;
    }

    fn set_paddle_position(&mut self, side: Side, pos: Vec2) {
        self.paddles[side.index()] = pos;
    }
}

impl TimeScaleControl for Recorder {
    fn set_time_scale(&mut self, factor: f32) {
        self.calls.push(HostCall::SetTimeScale(factor));
    }
}

/// Host that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl AudioSink for NullHost {
    fn play_bounce(&mut self) {}
    fn play_lose_side(&mut self, _side: Side) {}
    fn play_bat(&mut self) {}
    fn play_win(&mut self) {}
}

impl UiSink for NullHost {
    fn show_serve_prompt(&mut self, _side: Side) {}
    fn hide_serve_prompts(&mut self) {}
    fn show_win_banner(&mut self, _side: Side) {}
    fn hide_win_banners(&mut self) {}
    fn set_score_display(&mut self, _side: Side, _value: u32) {}
    fn highlight_losing_score(&mut self, _side: Side) {}
    fn restore_score_colors(&mut self) {}
    fn show_pause_menu(&mut self) {}
    fn hide_pause_menu(&mut self) {}
}

impl RenderSink for NullHost {
    fn set_ball_position(&mut self, _pos: Option<Vec2>) {}
    fn set_paddle_position(&mut self, _side: Side, _pos: Vec2) {}
}

impl TimeScaleControl for NullHost {
    fn set_time_scale(&mut self, _factor: f32) {}
}
