use game_core::{
    InputSource, KeyCode, KeyboardState, Match, MatchState, Preferences, Side, Time, Transition,
};
use serde::Serialize;
use tracing::info;

use crate::input::KeyScript;
use crate::sinks::LogHost;

/// Driver loop limits
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub fps: u32,
    pub matches: u32,
    pub max_seconds: f32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            matches: 1,
            max_seconds: 600.0,
        }
    }
}

/// Outcome of one finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub winner: Side,
    pub left: u32,
    pub right: u32,
    pub rallies: u32,
}

/// What a session did, printed when it ends
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub results: Vec<MatchResult>,
    pub frames: u64,
    pub seconds: f32,
    pub wall_bounces: u32,
    pub final_state: MatchState,
}

/// A headless session: one match driven frame by frame on a simulated clock
pub struct LocalGame {
    pub game: Match,
    pub host: LogHost,
    pub keys: KeyboardState,
    pub script: KeyScript,
    options: SessionOptions,
    frame: u64,
    clock: f32,
    rallies: u32,
    wall_bounces: u32,
    results: Vec<MatchResult>,
}

impl LocalGame {
    /// Open the menu, apply preferences and start playing
    pub fn new(mut game: Match, prefs: &Preferences, script: KeyScript, options: SessionOptions) -> Self {
        let mut host = LogHost::new(prefs.volume);
        game.pause(&mut host);
        game.apply_preferences(prefs);
        game.resume(&mut host);

        Self {
            game,
            host,
            keys: KeyboardState::new(),
            script,
            options,
            frame: 0,
            clock: 0.0,
            rallies: 0,
            wall_bounces: 0,
            results: Vec::new(),
        }
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn is_finished(&self) -> bool {
        self.results.len() >= self.options.matches as usize || self.clock >= self.options.max_seconds
    }

    /// Advance one frame
    pub fn step(&mut self) {
        let frame_dt = 1.0 / self.options.fps.max(1) as f32;

        self.script.apply(self.frame, &mut self.keys);
        if self.game.state() == MatchState::Win && !self.keys.any_key_pressed() {
            // Next match
            self.keys.tap(KeyCode::Space);
        }

        self.clock += frame_dt;
        let time = Time::scaled(frame_dt, self.host.time_scale, self.clock);
        let events = self.game.tick(&time, &self.keys, &mut self.host);

        self.rallies += events.paddle_hits;
        self.wall_bounces += events.wall_bounces;
        // Resuming a pause taken on the win screen also lands in Win
        let won = events.transitions.contains(&Transition {
            from: MatchState::Play,
            to: MatchState::Win,
        });
        if won {
            self.record_result();
        }

        self.keys.end_frame();
        self.frame += 1;
    }

    pub fn run(&mut self) -> Summary {
        while !self.is_finished() {
            self.step();
        }

        Summary {
            results: self.results.clone(),
            frames: self.frame,
            seconds: self.clock,
            wall_bounces: self.wall_bounces,
            final_state: self.game.state(),
        }
    }

    fn record_result(&mut self) {
        let Some(winner) = self.game.winner() else {
            return;
        };

        let result = MatchResult {
            winner,
            left: self.game.score(Side::Left),
            right: self.game.score(Side::Right),
            rallies: self.rallies,
        };
        info!(
            number = self.results.len() + 1,
            ?winner,
            left = result.left,
            right = result.right,
            rallies = result.rallies,
            "match finished"
        );
        self.results.push(result);
        self.rallies = 0;
    }
}
