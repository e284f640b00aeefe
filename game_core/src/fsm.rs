//! Match State Machine
//!
//! The closed set of match states and the table of legal moves between them.
//! [`crate::Match`] owns the single live instance and runs each state's
//! entry and exit actions.

use serde::{Deserialize, Serialize};

use crate::components::Side;

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    Start,
    LeftServe,
    RightServe,
    Play,
    Point,
    Reset,
    Win,
    Pause,
}

/// A state change that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: MatchState,
    pub to: MatchState,
}

impl MatchState {
    /// Serve state for the given side
    pub fn serve(side: Side) -> Self {
        match side {
            Side::Left => MatchState::LeftServe,
            Side::Right => MatchState::RightServe,
        }
    }

    /// Side that is serving, if this is a serve state
    pub fn serving_side(self) -> Option<Side> {
        match self {
            MatchState::LeftServe => Some(Side::Left),
            MatchState::RightServe => Some(Side::Right),
            _ => None,
        }
    }

    /// Check if a transition is legal
    ///
    /// Pausing is legal from any state, and leaving `Pause` may restore any
    /// state other than `Pause` itself.
    pub fn can_transition(self, next: MatchState) -> bool {
        match (self, next) {
            (MatchState::Pause, MatchState::Pause) => false,
            (_, MatchState::Pause) => true,
            (MatchState::Pause, _) => true,

            (MatchState::Start, MatchState::Reset) => true,
            (MatchState::Reset, MatchState::LeftServe | MatchState::RightServe) => true,
            (MatchState::LeftServe | MatchState::RightServe, MatchState::Play) => true,
            (MatchState::Play, MatchState::Point | MatchState::Win) => true,
            (MatchState::Point, MatchState::Reset) => true,
            (MatchState::Win, MatchState::Start) => true,

            // Invalid transition
            _ => false,
        }
    }

    /// Check if the ball and paddles are being simulated
    pub fn is_playing(self) -> bool {
        self == MatchState::Play
    }

    pub fn is_paused(self) -> bool {
        self == MatchState::Pause
    }
}
