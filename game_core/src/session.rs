use crate::fsm::{MatchState, Transition};
use crate::host::{Host, InputSource};
use crate::systems::*;
use crate::{
    Ball, Config, ConfigError, Events, GameRng, Paddle, Preferences, ScoreTracker,
    Side, SideTable, Time,
};

/// One match session: both paddles, the ball in play, scores and match state.
///
/// The host owns the driver loop and calls [`Match::tick`] once per frame.
#[derive(Debug, Clone)]
pub struct Match {
    config: Config,
    state: MatchState,
    resume_state: MatchState,
    left_serving: bool,
    serve_started: Option<f32>, // wall clock at serve entry
    serve_elapsed: f32,
    paddles: SideTable<Paddle>,
    ball: Option<Ball>,
    scores: ScoreTracker,
    rng: GameRng,
    events: Events,
}

impl Match {
    pub fn new(config: Config, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    /// Default configuration with a seeded generator
    pub fn with_seed(seed: u64) -> Self {
        Self::build(Config::default(), GameRng::new(seed))
    }

    fn build(config: Config, rng: GameRng) -> Self {
        let paddles = SideTable::new(
            Paddle::new(Side::Left, &config),
            Paddle::new(Side::Right, &config),
        );

        Self {
            config,
            state: MatchState::Start,
            resume_state: MatchState::Start,
            left_serving: true,
            serve_started: None,
            serve_elapsed: 0.0,
            paddles,
            ball: None,
            scores: ScoreTracker::new(),
            rng,
            events: Events::new(),
        }
    }

    /// Advance the match by one frame
    ///
    /// Escape toggles pause and ends the tick. Otherwise the current state's
    /// handler runs. Entity positions go to the render sink either way.
    pub fn tick(&mut self, time: &Time, input: &impl InputSource, host: &mut impl Host) -> &Events {
        self.events.clear();

        if input.escape_pressed() {
            if self.state.is_paused() {
                self.resume(host);
            } else {
                self.pause(host);
            }
        } else {
            self.dispatch(time, input, host);
        }

        host.set_ball_position(self.ball.map(|ball| ball.pos));
        for (side, paddle) in self.paddles.iter() {
            host.set_paddle_position(side, paddle.pos);
        }

        &self.events
    }

    /// Save the current state and bring up the pause menu
    pub fn pause<H: Host>(&mut self, host: &mut H) {
        if self.state.is_paused() {
            return;
        }

        self.resume_state = self.state;
        self.transition(MatchState::Pause);
        host.show_pause_menu();
        host.set_time_scale(0.0);
        tracing::info!(resume_state = ?self.resume_state, "paused");
    }

    /// Close the pause menu and restore the saved state
    pub fn resume<H: Host>(&mut self, host: &mut H) {
        if !self.state.is_paused() {
            tracing::warn!(state = ?self.state, "resume requested while not paused");
            return;
        }

        host.hide_pause_menu();
        self.transition(self.resume_state);
        host.set_time_scale(self.config.time_scale);
        tracing::info!(state = ?self.state, "resumed");
    }

    pub fn set_autoplay(&mut self, side: Side, autoplay: bool) {
        self.paddles[side].autoplay = autoplay;
    }

    pub fn apply_preferences(&mut self, prefs: &Preferences) {
        for side in Side::BOTH {
            self.set_autoplay(side, prefs.autoplay(side));
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// State restored when leaving `Pause`
    pub fn resume_state(&self) -> MatchState {
        self.resume_state
    }

    pub fn left_serving(&self) -> bool {
        self.left_serving
    }

    pub fn serving_side(&self) -> Side {
        if self.left_serving {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn ball(&self) -> Option<&Ball> {
        self.ball.as_ref()
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side]
    }

    pub fn score(&self, side: Side) -> u32 {
        self.scores.get(side)
    }

    pub fn scores(&self) -> &ScoreTracker {
        &self.scores
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Win => self.scores.winner(self.config.play_to),
            _ => None,
        }
    }

    /// Wall-clock seconds since the current serve began, if serving
    pub fn serve_timer(&self) -> Option<f32> {
        self.serve_started.map(|_| self.serve_elapsed)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    fn dispatch<H: Host>(&mut self, time: &Time, input: &dyn InputSource, host: &mut H) {
        match self.state {
            MatchState::Start => self.start(host),
            MatchState::Reset => self.reset(),
            MatchState::LeftServe => self.serve(Side::Left, time, input, host),
            MatchState::RightServe => self.serve(Side::Right, time, input, host),
            MatchState::Play => self.play(time, input, host),
            MatchState::Point => self.transition(MatchState::Reset),
            MatchState::Win => {
                if input.any_key_pressed() {
                    self.transition(MatchState::Start);
                }
            }
            MatchState::Pause => {}
        }
    }

    /// Clear scores and banners and pick who serves first
    fn start<H: Host>(&mut self, host: &mut H) {
        self.scores.reset(host);
        host.restore_score_colors();
        host.hide_win_banners();
        self.left_serving = self.rng.coin_flip();
        self.transition(MatchState::Reset);
    }

    /// Centre the paddles and park a fresh ball against the server's paddle
    fn reset(&mut self) {
        for (_side, paddle) in self.paddles.iter_mut() {
            paddle.pos.y = 0.0;
        }

        let server = self.serving_side();
        let pos = self.paddles[server].serve_point(self.config.ball_radius);
        self.ball = Some(Ball::parked(pos, self.config.ball_radius));
        self.serve_started = None;
        self.transition(MatchState::serve(server));
    }

    fn serve<H: Host>(&mut self, side: Side, time: &Time, input: &dyn InputSource, host: &mut H) {
        let started = match self.serve_started {
            Some(started) => started,
            None => {
                host.hide_serve_prompts();
                host.show_serve_prompt(side);
                self.serve_started = Some(time.now);
                time.now
            }
        };
        // Time spent paused counts towards the autoplay delay
        let elapsed = time.now - started;
        self.serve_elapsed = elapsed;

        let paddle = &self.paddles[side];
        let key_pressed = paddle
            .bindings
            .iter()
            .any(|binding| input.was_key_pressed(binding.key));
        let autoplay_due = paddle.autoplay && elapsed >= self.config.serve_autoplay_delay;
        if !key_pressed && !autoplay_due {
            return;
        }

        host.hide_serve_prompts();
        if let Some(ball) = self.ball.as_mut() {
            ball.launch(
                side.sign(),
                self.config.ball_speed,
                self.config.launch_rise,
                &mut self.rng,
            );
            tracing::debug!(?side, vel = ?ball.vel, "serve");
        }
        self.serve_started = None;
        self.events.launched = true;
        self.transition(MatchState::Play);
    }

    /// Run fixed physics sub-steps until the frame is used up or play stops
    fn play<H: Host>(&mut self, time: &Time, input: &dyn InputSource, host: &mut H) {
        // Clamp dt to prevent large jumps
        let mut remaining = time.dt.min(self.config.max_dt);
        if time.dt > self.config.max_dt {
            tracing::trace!(dt = time.dt, dropped = time.dt - self.config.max_dt, "frame clamped");
        }
        while remaining > f32::EPSILON && self.state.is_playing() {
            let step_dt = remaining.min(self.config.fixed_dt);
            remaining -= step_dt;
            self.physics_step(step_dt, input, host);
        }
    }

    fn physics_step<H: Host>(&mut self, dt: f32, input: &dyn InputSource, host: &mut H) {
        let Some(ball) = self.ball.as_mut() else {
            return;
        };

        move_ball(ball, dt);
        if bounce_off_walls(ball, &self.config, &mut self.rng) {
            self.events.wall_bounces += 1;
            host.play_bounce();
        }

        if let Some(loser) = check_out_of_bounds(ball, &self.paddles, &self.config) {
            self.miss(loser, host);
            return;
        }

        for side in Side::BOTH {
            let paddle = &mut self.paddles[side];
            if paddle_collision(paddle, ball, &self.config, &mut self.rng) {
                self.events.paddle_hits += 1;
                host.play_bat();
            }

            let intent = paddle_intent(paddle, ball, input, self.config.autoplay_dead_zone);
            move_paddle(paddle, intent, dt, &self.config);
        }
    }

    /// The ball got past `loser`: the other side scores and `loser` serves next
    fn miss<H: Host>(&mut self, loser: Side, host: &mut H) {
        host.play_lose_side(loser);
        self.ball = None;
        self.left_serving = loser == Side::Left;

        let scorer = loser.opponent();
        let value = self.scores.increment(scorer, 1, host);
        self.events.point = Some(scorer);
        self.point_scored(scorer, value, self.config.play_to, host);
    }

    /// Record a point, or end the match when `value` reaches the threshold
    pub(crate) fn point_scored<H: Host>(&mut self, side: Side, value: u32, play_to: u32, host: &mut H) {
        if value < play_to {
            tracing::info!(?side, value, "point");
            self.transition(MatchState::Point);
            return;
        }

        tracing::info!(winner = ?side, value, "match won");
        host.play_win();
        host.highlight_losing_score(side.opponent());
        host.show_win_banner(side);
        self.transition(MatchState::Win);
    }

    fn transition(&mut self, next: MatchState) {
        let from = self.state;
        assert!(
            from.can_transition(next),
            "illegal match transition {from:?} -> {next:?}"
        );

        tracing::debug!(?from, to = ?next, "match state");
        self.state = next;
        self.events.transitions.push(Transition { from, to: next });
    }
}
