//! What each screen shows for a given session.

use super::deck::grid_shape;
use super::difficulty::Difficulty;
use super::session::{Phase, Session};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Selector {
        highlighted: Option<Difficulty>,
        start_enabled: bool,
    },
    Board(BoardView),
    Outcome {
        won: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    pub difficulty: Difficulty,
    pub status: BoardStatus,
    pub columns: usize,
    pub rows: usize,
    pub cards: Vec<CardView>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardStatus {
    Countdown(u32),
    Revealing,
    Frozen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardView {
    pub label: CardLabel,
    pub enabled: bool,
    pub look: CardLook,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardLabel {
    Number(u32),
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardLook {
    Plain,
    Correct,
    Wrong,
}

pub fn render(session: &Session) -> Screen {
    let status = match session.phase() {
        Phase::SelectingDifficulty => {
            return Screen::Selector {
                highlighted: session.selection(),
                start_enabled: session.selection().is_some(),
            };
        }
        Phase::Won => return Screen::Outcome { won: true },
        Phase::Lost => return Screen::Outcome { won: false },
        Phase::CountingDown => BoardStatus::Countdown(session.countdown_seconds()),
        Phase::Revealing => BoardStatus::Revealing,
        Phase::Frozen => BoardStatus::Frozen,
    };

    // Board phases always have a selection; Easy only covers a default session.
    let difficulty = session.selection().unwrap_or(Difficulty::Easy);
    let (columns, rows) = grid_shape(session.cards().len());
    Screen::Board(BoardView {
        difficulty,
        status,
        columns,
        rows,
        cards: (0..session.cards().len())
            .filter_map(|index| card_view(session, index))
            .collect(),
    })
}

/// View of a single card, `None` when the index is off the board.
pub fn card_view(session: &Session, index: usize) -> Option<CardView> {
    let card = session.cards().get(index)?;
    let phase = session.phase();
    let face_up = phase == Phase::CountingDown || card.revealed;
    Some(CardView {
        label: if face_up {
            CardLabel::Number(card.value)
        } else {
            CardLabel::Hidden
        },
        enabled: phase == Phase::Revealing && !card.revealed,
        look: if card.wrong {
            CardLook::Wrong
        } else if card.revealed {
            CardLook::Correct
        } else {
            CardLook::Plain
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fake_clock::FakeClock;
    use crate::game::session::{Event, LOSS_DELAY};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn board(clock: &FakeClock) -> BoardView {
        match render(&clock.session) {
            Screen::Board(board) => board,
            other => panic!("expected board, got {other:?}"),
        }
    }

    #[test]
    fn fresh_session_shows_selector_with_start_disabled() {
        let clock = FakeClock::new(1);
        assert_eq!(
            render(&clock.session),
            Screen::Selector {
                highlighted: None,
                start_enabled: false
            }
        );
    }

    #[test]
    fn second_selection_moves_highlight() {
        let mut clock = FakeClock::new(1);
        clock.send(Event::DifficultySelected(Difficulty::Easy)).unwrap();
        clock.send(Event::DifficultySelected(Difficulty::Hard)).unwrap();
        assert_eq!(
            render(&clock.session),
            Screen::Selector {
                highlighted: Some(Difficulty::Hard),
                start_enabled: true
            }
        );
    }

    #[test]
    fn cards_stay_visible_until_last_tick() {
        let mut clock = FakeClock::new(2);
        clock.deal(Difficulty::Easy, vec![3, 1, 4, 2, 5]);

        for remaining in (1..=5).rev() {
            let view = board(&clock);
            assert_eq!(view.status, BoardStatus::Countdown(remaining));
            for (card, value) in view.cards.iter().zip([3, 1, 4, 2, 5]) {
                assert_eq!(card.label, CardLabel::Number(value));
                assert!(!card.enabled);
            }
            clock.advance(Duration::from_secs(1));
        }

        let view = board(&clock);
        assert_eq!(view.status, BoardStatus::Revealing);
        assert!(
            view.cards
                .iter()
                .all(|card| card.label == CardLabel::Hidden && card.enabled)
        );
    }

    #[test]
    fn easy_board_lays_out_three_by_two() {
        let mut clock = FakeClock::new(2);
        clock.deal(Difficulty::Easy, vec![3, 1, 4, 2, 5]);
        let view = board(&clock);
        assert_eq!((view.columns, view.rows), (3, 2));
        assert_eq!(view.cards.len(), 5);
        assert_eq!(view.difficulty, Difficulty::Easy);
    }

    #[test]
    fn revealed_and_wrong_cards() {
        let mut clock = FakeClock::new(2);
        clock.deal(Difficulty::Easy, vec![3, 1, 4, 2, 5]);
        clock.advance(Duration::from_secs(5));
        clock.send(Event::CardClicked(1)).unwrap();

        let view = board(&clock);
        assert_eq!(
            view.cards[1],
            CardView {
                label: CardLabel::Number(1),
                enabled: false,
                look: CardLook::Correct
            }
        );

        clock.send(Event::CardClicked(4)).unwrap();
        let view = board(&clock);
        assert_eq!(view.status, BoardStatus::Frozen);
        assert_eq!(
            view.cards[4],
            CardView {
                label: CardLabel::Hidden,
                enabled: false,
                look: CardLook::Wrong
            }
        );
        assert!(view.cards.iter().all(|card| !card.enabled));

        clock.advance(LOSS_DELAY);
        assert_eq!(render(&clock.session), Screen::Outcome { won: false });
    }

    #[test]
    fn play_again_clears_highlight() {
        let mut clock = FakeClock::new(2);
        clock.send(Event::DifficultySelected(Difficulty::Easy)).unwrap();
        clock.deal(Difficulty::Easy, vec![1, 2, 3, 4, 5]);
        clock.advance(Duration::from_secs(5));
        for index in 0..5 {
            clock.send(Event::CardClicked(index)).unwrap();
        }
        assert_eq!(render(&clock.session), Screen::Outcome { won: true });

        clock.send(Event::PlayAgainPressed).unwrap();
        assert_eq!(
            render(&clock.session),
            Screen::Selector {
                highlighted: None,
                start_enabled: false
            }
        );
    }

    #[test]
    fn card_view_out_of_range() {
        let clock = FakeClock::new(2);
        assert_eq!(card_view(&clock.session, 0), None);
    }
}
