use std::cell::RefCell;
use std::rc::Rc;

use gettextrs::gettext;
use gtk4 as gtk;
use gtk4::prelude::*;

use crate::game::{Difficulty, Event};

use super::app::dispatch;
use super::state::AppState;

fn add_level_button(
    row: &gtk::Box,
    state: &Rc<RefCell<AppState>>,
    difficulty: Difficulty,
) -> gtk::Button {
    let button = gtk::Button::with_label(&gettext(difficulty.name()));
    button.set_hexpand(true);
    button.set_size_request(150, 60);
    button.add_css_class("difficulty-button");
    button.add_css_class(difficulty.css_class());
    button.connect_clicked({
        let state = state.clone();
        move |_| dispatch(&state, Event::DifficultySelected(difficulty))
    });
    row.append(&button);
    button
}

pub(super) fn build_selector_view(state: &Rc<RefCell<AppState>>) -> gtk::Box {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
    root.set_hexpand(true);
    root.set_vexpand(true);
    root.add_css_class("selector-root");

    let center = gtk::CenterBox::new();
    center.set_hexpand(true);
    center.set_vexpand(true);

    let content = gtk::Box::new(gtk::Orientation::Vertical, 20);
    content.set_halign(gtk::Align::Center);
    content.set_valign(gtk::Align::Center);
    content.add_css_class("selector-content");

    let title = gtk::Label::new(Some(gettext("Memory Game").as_str()));
    title.add_css_class("selector-title");
    title.add_css_class("title-1");

    let subtitle = gtk::Label::new(Some(gettext("Select Difficulty Level").as_str()));
    subtitle.add_css_class("selector-subtitle");
    subtitle.add_css_class("title-3");

    let levels_row = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    levels_row.set_halign(gtk::Align::Center);
    levels_row.set_homogeneous(true);
    let level_buttons: Vec<(Difficulty, gtk::Button)> = Difficulty::ALL
        .into_iter()
        .map(|difficulty| (difficulty, add_level_button(&levels_row, state, difficulty)))
        .collect();

    let start_button = gtk::Button::with_label(&gettext("Start"));
    start_button.add_css_class("pill");
    start_button.add_css_class("start-button");
    start_button.set_halign(gtk::Align::Center);
    start_button.set_size_request(200, 60);
    start_button.set_sensitive(false);
    start_button.connect_clicked({
        let state = state.clone();
        move |_| dispatch(&state, Event::StartPressed)
    });

    content.append(&title);
    content.append(&subtitle);
    content.append(&levels_row);
    content.append(&start_button);

    center.set_center_widget(Some(&content));
    root.append(&center);

    {
        let mut st = state.borrow_mut();
        st.level_buttons = level_buttons;
        st.start_button = Some(start_button);
    }

    root
}
