pub mod deck;
pub mod difficulty;
pub mod error;
pub mod session;
pub mod view;

#[cfg(test)]
mod fake_clock;

pub use difficulty::Difficulty;
pub use session::{Effect, Event, Session};
pub use view::{BoardStatus, CardLabel, CardLook, CardView, Screen};
