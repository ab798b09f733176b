use gettextrs::gettext;

use crate::game::BoardStatus;

use super::state::AppState;

pub(super) fn status_text(status: BoardStatus) -> String {
    match status {
        BoardStatus::Countdown(seconds) => {
            gettext("Numbers will hide in {} seconds").replace("{}", &seconds.to_string())
        }
        BoardStatus::Revealing | BoardStatus::Frozen => {
            gettext("Reveal the cards in order: 1 → 2 → 3 ...")
        }
    }
}

pub(super) fn update_status(st: &AppState, status: BoardStatus) {
    if let Some(label) = &st.status_label {
        label.set_text(&status_text(status));
    }
}

pub(super) fn stop_ticker(st: &mut AppState) {
    if let Some(handle) = st.tick_handle.take() {
        handle.remove();
    }
}

pub(super) fn stop_delay(st: &mut AppState) {
    if let Some(handle) = st.delay_handle.take() {
        handle.remove();
    }
}

pub(super) fn stop_timers(st: &mut AppState) {
    stop_ticker(st);
    stop_delay(st);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_message_counts_seconds() {
        assert_eq!(
            status_text(BoardStatus::Countdown(3)),
            "Numbers will hide in 3 seconds"
        );
    }

    #[test]
    fn reveal_message_after_countdown() {
        assert_eq!(
            status_text(BoardStatus::Revealing),
            "Reveal the cards in order: 1 → 2 → 3 ..."
        );
        assert_eq!(
            status_text(BoardStatus::Frozen),
            status_text(BoardStatus::Revealing)
        );
    }
}
