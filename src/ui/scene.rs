use std::cell::RefCell;
use std::rc::Rc;

use gettextrs::gettext;
use gtk4 as gtk;
use gtk4::prelude::*;

use crate::game::view::{self, BoardView};
use crate::game::{Difficulty, Screen};

use super::board::{apply_card_view, build_board_grid};
use super::hud::update_status;
use super::state::AppState;

/// Paints the current session onto the widgets.
pub(super) fn render(state: &Rc<RefCell<AppState>>) {
    let screen = view::render(&state.borrow().session);
    match screen {
        Screen::Selector {
            highlighted,
            start_enabled,
        } => show_selector(state, highlighted, start_enabled),
        Screen::Board(board) => show_board(state, &board),
        Screen::Outcome { won } => show_outcome(state, won),
    }
}

fn set_level_class(st: &AppState, difficulty: Option<Difficulty>) {
    let Some(window) = &st.window else {
        return;
    };
    for level in Difficulty::ALL {
        window.remove_css_class(level.css_class());
    }
    if let Some(level) = difficulty {
        window.add_css_class(level.css_class());
    }
}

fn switch_to(st: &AppState, name: &str, transition: gtk::StackTransitionType) {
    if let Some(stack) = &st.view_stack
        && stack.visible_child_name().as_deref() != Some(name)
    {
        stack.set_transition_type(transition);
        stack.set_visible_child_name(name);
    }
}

fn show_selector(state: &Rc<RefCell<AppState>>, highlighted: Option<Difficulty>, start_enabled: bool) {
    let st = state.borrow();
    for (level, button) in &st.level_buttons {
        if Some(*level) == highlighted {
            button.add_css_class("selected");
        } else {
            button.remove_css_class("selected");
        }
    }
    if let Some(start) = &st.start_button {
        start.set_sensitive(start_enabled);
        if start_enabled {
            start.add_css_class("suggested-action");
        } else {
            start.remove_css_class("suggested-action");
        }
    }
    set_level_class(&st, highlighted);
    switch_to(&st, "selector", gtk::StackTransitionType::SlideRight);
}

pub(super) fn rebuild_board(state: &Rc<RefCell<AppState>>, board: &BoardView) {
    let Some(board_container) = state.borrow().board_container.clone() else {
        return;
    };

    while let Some(child) = board_container.first_child() {
        board_container.remove(&child);
    }
    let grid = build_board_grid(state, board.columns, board.rows, board.cards.len());
    let grid_ratio = if board.rows > 0 {
        board.columns as f32 / board.rows as f32
    } else {
        1.0
    };
    let grid_frame = gtk::AspectFrame::new(0.5, 0.5, grid_ratio, false);
    grid_frame.set_halign(gtk::Align::Fill);
    grid_frame.set_valign(gtk::Align::Fill);
    grid_frame.set_hexpand(true);
    grid_frame.set_vexpand(true);
    grid_frame.set_child(Some(&grid));
    board_container.append(&grid_frame);
}

fn show_board(state: &Rc<RefCell<AppState>>, board: &BoardView) {
    let needs_rebuild = state.borrow().grid_buttons.len() != board.cards.len();
    if needs_rebuild {
        rebuild_board(state, board);
    }

    let st = state.borrow();
    for (button, card) in st.grid_buttons.iter().zip(&board.cards) {
        apply_card_view(button, *card);
    }
    update_status(&st, board.status);
    set_level_class(&st, Some(board.difficulty));
    switch_to(&st, "game", gtk::StackTransitionType::SlideLeft);
}

fn show_outcome(state: &Rc<RefCell<AppState>>, won: bool) {
    let st = state.borrow();
    if let Some(label) = &st.outcome_title_label {
        label.set_text(&if won {
            gettext("Congratulations!")
        } else {
            gettext("Game Over!")
        });
    }
    if let Some(root) = &st.outcome_root {
        root.remove_css_class("won");
        root.remove_css_class("lost");
        root.add_css_class(if won { "won" } else { "lost" });
    }
    set_level_class(&st, None);
    switch_to(&st, "outcome", gtk::StackTransitionType::SlideLeft);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_colours_its_cards() {
        let css = include_str!("../../data/style.css");
        for level in Difficulty::ALL {
            let rule = format!("window.{} .number-card {{", level.css_class());
            assert!(css.contains(&rule), "missing {rule}");
        }
    }
}
