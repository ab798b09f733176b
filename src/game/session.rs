use std::time::Duration;

use rand::Rng;

use super::deck::{is_permutation, shuffled_order};
use super::difficulty::Difficulty;
use super::error::Ignored;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);
pub const LOSS_DELAY: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    SelectingDifficulty,
    CountingDown,
    Revealing,
    /// A wrong card was picked; input is ignored until the loss delay expires.
    Frozen,
    Won,
    Lost,
}

impl Phase {
    pub fn is_over(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub value: u32,
    pub revealed: bool,
    pub wrong: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    DifficultySelected(Difficulty),
    StartPressed,
    /// One countdown second elapsed for the game `game_id` was dealt as.
    Tick { game_id: u64 },
    CardClicked(usize),
    DelayExpired { game_id: u64 },
    PlayAgainPressed,
    ExitPressed,
}

impl Event {
    fn name(self) -> &'static str {
        match self {
            Event::DifficultySelected(_) => "difficulty selection",
            Event::StartPressed => "start",
            Event::Tick { .. } => "countdown tick",
            Event::CardClicked(_) => "card click",
            Event::DelayExpired { .. } => "loss delay",
            Event::PlayAgainPressed => "play again",
            Event::ExitPressed => "exit",
        }
    }
}

/// Work the shell has to carry out after an event was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    StartTicker { period: Duration },
    StopTicker,
    StartDelay { delay: Duration },
    CancelTimers,
    Exit,
}

/// All mutable state of one game, from difficulty selection to outcome.
///
/// The session only changes through [`Session::apply`]; events that make no
/// sense in the current phase come back as [`Ignored`] and change nothing.
#[derive(Clone, Debug)]
pub struct Session {
    selection: Option<Difficulty>,
    countdown_seconds: u32,
    cards: Vec<Card>,
    expected_next: u32,
    phase: Phase,
    game_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            selection: None,
            countdown_seconds: 0,
            cards: Vec::new(),
            expected_next: 1,
            phase: Phase::SelectingDifficulty,
            game_id: 0,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<Difficulty> {
        self.selection
    }

    pub fn countdown_seconds(&self) -> u32 {
        self.countdown_seconds
    }

    /// Card values in board order.
    pub fn card_order(&self) -> Vec<u32> {
        self.cards.iter().map(|card| card.value).collect()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn expected_next(&self) -> u32 {
        self.expected_next
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        event: Event,
        rng: &mut R,
    ) -> Result<Vec<Effect>, Ignored> {
        match event {
            Event::DifficultySelected(difficulty) => {
                self.expect_phase(event, Phase::SelectingDifficulty)?;
                self.selection = Some(difficulty);
                Ok(Vec::new())
            }
            Event::StartPressed => {
                self.expect_phase(event, Phase::SelectingDifficulty)?;
                let difficulty = self.selection.ok_or(Ignored::NoDifficulty)?;
                let order = shuffled_order(difficulty.card_count(), rng);
                Ok(self.deal(difficulty, order))
            }
            Event::Tick { game_id } => {
                self.expect_current(game_id)?;
                self.expect_phase(event, Phase::CountingDown)?;
                self.countdown_seconds = self.countdown_seconds.saturating_sub(1);
                if self.countdown_seconds == 0 {
                    self.phase = Phase::Revealing;
                    Ok(vec![Effect::StopTicker])
                } else {
                    Ok(Vec::new())
                }
            }
            Event::CardClicked(index) => {
                self.expect_phase(event, Phase::Revealing)?;
                self.reveal(index)
            }
            Event::DelayExpired { game_id } => {
                self.expect_current(game_id)?;
                self.expect_phase(event, Phase::Frozen)?;
                self.phase = Phase::Lost;
                tracing::info!(game_id = self.game_id, "game lost");
                Ok(Vec::new())
            }
            Event::PlayAgainPressed => {
                self.expect_over(event)?;
                self.reset();
                Ok(vec![Effect::CancelTimers])
            }
            Event::ExitPressed => {
                self.expect_over(event)?;
                Ok(vec![Effect::CancelTimers, Effect::Exit])
            }
        }
    }

    /// Lays out `order` face-up and starts the countdown.
    pub(crate) fn deal(&mut self, difficulty: Difficulty, order: Vec<u32>) -> Vec<Effect> {
        debug_assert!(is_permutation(&order));
        self.selection = Some(difficulty);
        self.game_id = self.game_id.wrapping_add(1);
        self.countdown_seconds = difficulty.countdown_seconds();
        self.cards = order
            .into_iter()
            .map(|value| Card {
                value,
                revealed: false,
                wrong: false,
            })
            .collect();
        self.expected_next = 1;
        tracing::info!(
            difficulty = difficulty.name(),
            game_id = self.game_id,
            "dealt new board"
        );

        let mut effects = vec![Effect::CancelTimers];
        if self.countdown_seconds == 0 {
            self.phase = Phase::Revealing;
        } else {
            self.phase = Phase::CountingDown;
            effects.push(Effect::StartTicker {
                period: TICK_PERIOD,
            });
        }
        effects
    }

    fn reveal(&mut self, index: usize) -> Result<Vec<Effect>, Ignored> {
        let count = self.cards.len();
        let card = self
            .cards
            .get_mut(index)
            .ok_or(Ignored::NoSuchCard { index, count })?;
        if card.revealed {
            return Err(Ignored::AlreadyRevealed { index });
        }

        if card.value == self.expected_next {
            card.revealed = true;
            self.expected_next += 1;
            if self.expected_next as usize > count {
                self.phase = Phase::Won;
                tracing::info!(game_id = self.game_id, "game won");
            }
            Ok(Vec::new())
        } else {
            card.wrong = true;
            self.phase = Phase::Frozen;
            tracing::debug!(
                index,
                value = card.value,
                expected = self.expected_next,
                "wrong card, input frozen"
            );
            Ok(vec![Effect::StartDelay { delay: LOSS_DELAY }])
        }
    }

    fn reset(&mut self) {
        // game_id survives so callbacks of the finished game stay stale.
        *self = Session {
            game_id: self.game_id,
            ..Session::default()
        };
    }

    fn expect_current(&self, game_id: u64) -> Result<(), Ignored> {
        if game_id == self.game_id {
            Ok(())
        } else {
            Err(Ignored::StaleTimer {
                scheduled: game_id,
                current: self.game_id,
            })
        }
    }

    fn expect_phase(&self, event: Event, phase: Phase) -> Result<(), Ignored> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(self.wrong_phase(event))
        }
    }

    fn expect_over(&self, event: Event) -> Result<(), Ignored> {
        if self.phase.is_over() {
            Ok(())
        } else {
            Err(self.wrong_phase(event))
        }
    }

    fn wrong_phase(&self, event: Event) -> Ignored {
        Ignored::WrongPhase {
            event: event.name(),
            phase: self.phase,
        }
    }
}
