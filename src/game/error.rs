//! Reasons an event leaves the session untouched.

use thiserror::Error;

use super::session::Phase;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Ignored {
    #[error("no difficulty selected")]
    NoDifficulty,

    #[error("{event} is not accepted while {phase:?}")]
    WrongPhase { event: &'static str, phase: Phase },

    #[error("no card at index {index} (board has {count})")]
    NoSuchCard { index: usize, count: usize },

    #[error("card {index} is already revealed")]
    AlreadyRevealed { index: usize },

    #[error("timer of game {scheduled} fired during game {current}")]
    StaleTimer { scheduled: u64, current: u64 },
}
