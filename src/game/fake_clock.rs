//! Virtual-time driver that executes effects the way the GTK shell does.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::difficulty::Difficulty;
use super::error::Ignored;
use super::session::{Effect, Event, Session};

struct Ticker {
    due: Duration,
    period: Duration,
    game_id: u64,
}

struct Delay {
    due: Duration,
    game_id: u64,
}

pub struct FakeClock {
    pub session: Session,
    rng: StdRng,
    now: Duration,
    ticker: Option<Ticker>,
    delay: Option<Delay>,
    exited: bool,
}

impl FakeClock {
    pub fn new(seed: u64) -> Self {
        FakeClock {
            session: Session::new(),
            rng: StdRng::seed_from_u64(seed),
            now: Duration::ZERO,
            ticker: None,
            delay: None,
            exited: false,
        }
    }

    pub fn send(&mut self, event: Event) -> Result<(), Ignored> {
        let effects = self.session.apply(event, &mut self.rng)?;
        self.run(effects);
        Ok(())
    }

    /// Starts a game with a fixed card order.
    pub fn deal(&mut self, difficulty: Difficulty, order: Vec<u32>) {
        let effects = self.session.deal(difficulty, order);
        self.run(effects);
    }

    pub fn ticker_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn delay_pending(&self) -> bool {
        self.delay.is_some()
    }

    pub fn exited(&self) -> bool {
        self.exited
    }

    /// Fires every timer that falls due within `by`, in time order.
    pub fn advance(&mut self, by: Duration) {
        let until = self.now + by;
        loop {
            let tick_due = self.ticker.as_ref().map(|t| t.due);
            let delay_due = self.delay.as_ref().map(|d| d.due);
            let fire_delay = match (tick_due, delay_due) {
                (_, Some(delay)) if delay <= until && tick_due.is_none_or(|t| delay <= t) => true,
                (Some(tick), _) if tick <= until => false,
                _ => break,
            };

            if fire_delay {
                let Some(delay) = self.delay.take() else {
                    break;
                };
                self.now = delay.due;
                let result = self.send(Event::DelayExpired {
                    game_id: delay.game_id,
                });
                self.check_timer(delay.game_id, result);
            } else {
                let Some(ticker) = self.ticker.as_mut() else {
                    break;
                };
                self.now = ticker.due;
                ticker.due += ticker.period;
                let game_id = ticker.game_id;
                let result = self.send(Event::Tick { game_id });
                if game_id != self.session.game_id() {
                    // Stale tickers end themselves, like the shell's callback.
                    self.ticker = None;
                }
                self.check_timer(game_id, result);
            }
        }
        self.now = until;
    }

    /// Plants a ticker for `game_id`, as if a cancellation had been missed.
    pub fn schedule_ticker(&mut self, game_id: u64, period: Duration) {
        self.ticker = Some(Ticker {
            due: self.now + period,
            period,
            game_id,
        });
    }

    /// Plants a loss delay for `game_id`, as if a cancellation had been missed.
    pub fn schedule_delay(&mut self, game_id: u64, delay: Duration) {
        self.delay = Some(Delay {
            due: self.now + delay,
            game_id,
        });
    }

    /// Timers of the running game must always land; leftovers must be
    /// rejected as stale.
    fn check_timer(&self, game_id: u64, result: Result<(), Ignored>) {
        let current = self.session.game_id();
        if game_id == current {
            assert_eq!(result, Ok(()), "timer of the running game was rejected");
        } else {
            assert_eq!(
                result,
                Err(Ignored::StaleTimer {
                    scheduled: game_id,
                    current
                })
            );
        }
    }

    fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartTicker { period } => {
                    self.ticker = Some(Ticker {
                        due: self.now + period,
                        period,
                        game_id: self.session.game_id(),
                    });
                }
                Effect::StopTicker => self.ticker = None,
                Effect::StartDelay { delay } => {
                    self.delay = Some(Delay {
                        due: self.now + delay,
                        game_id: self.session.game_id(),
                    });
                }
                Effect::CancelTimers => {
                    self.ticker = None;
                    self.delay = None;
                }
                Effect::Exit => self.exited = true,
            }
        }
    }
}
