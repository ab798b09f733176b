use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;
use std::time::Duration;

use gettextrs::gettext;
use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use libadwaita as adw;
use adw::prelude::*;
use gio::SimpleAction;

use crate::game::{Effect, Event};

use super::board::CONTENT_MARGIN;
use super::dialogs::{show_about_dialog, show_instructions_dialog};
use super::hud::{stop_delay, stop_ticker, stop_timers};
use super::scene::render;
use super::selector::build_selector_view;
use super::state::AppState;

pub const APP_ID: &str = "io.basshift.Sequence";

/// Applies `event` to the session, carries out the resulting effects and
/// repaints. Rejected events change nothing.
pub fn dispatch(state: &Rc<RefCell<AppState>>, event: Event) {
    let outcome = {
        let mut guard = state.borrow_mut();
        let st = &mut *guard;
        st.session.apply(event, &mut st.rng)
    };

    match outcome {
        Ok(effects) => {
            {
                let st = state.borrow();
                if event == Event::StartPressed {
                    tracing::debug!(order = ?st.session.card_order(), "cards dealt");
                }
                tracing::trace!(
                    ?event,
                    phase = ?st.session.phase(),
                    expected_next = st.session.expected_next(),
                    "event applied"
                );
            }
            for effect in effects {
                run_effect(state, effect);
            }
            render(state);
        }
        Err(ignored) => {
            tracing::debug!(?event, %ignored, "event ignored");
        }
    }
}

fn run_effect(state: &Rc<RefCell<AppState>>, effect: Effect) {
    match effect {
        Effect::StartTicker { period } => start_ticker(state, period),
        Effect::StopTicker => {
            // Only emitted from inside the tick callback, which ends its own
            // source once the handle is gone.
            state.borrow_mut().tick_handle = None;
        }
        Effect::StartDelay { delay } => start_delay(state, delay),
        Effect::CancelTimers => stop_timers(&mut state.borrow_mut()),
        Effect::Exit => {
            let app = state.borrow().app.clone();
            if let Some(app) = app {
                tracing::info!("exit requested");
                app.quit();
            }
        }
    }
}

fn start_ticker(state: &Rc<RefCell<AppState>>, period: Duration) {
    let mut st = state.borrow_mut();
    stop_ticker(&mut st);
    let game_id = st.session.game_id();
    tracing::debug!(game_id, ?period, "countdown ticker started");

    let state_tick = state.clone();
    let handle = glib::timeout_add_local(period, move || {
        if state_tick.borrow().session.game_id() != game_id {
            return glib::ControlFlow::Break;
        }
        dispatch(&state_tick, Event::Tick { game_id });
        if state_tick.borrow().tick_handle.is_some() {
            glib::ControlFlow::Continue
        } else {
            glib::ControlFlow::Break
        }
    });
    st.tick_handle = Some(handle);
}

fn start_delay(state: &Rc<RefCell<AppState>>, delay: Duration) {
    let mut st = state.borrow_mut();
    stop_delay(&mut st);
    let game_id = st.session.game_id();
    tracing::debug!(game_id, ?delay, "loss delay scheduled");

    let state_delay = state.clone();
    let handle = glib::timeout_add_local_once(delay, move || {
        {
            let mut st = state_delay.borrow_mut();
            if st.session.game_id() != game_id {
                return;
            }
            // The source is spent once this callback returns.
            st.delay_handle = None;
        }
        dispatch(&state_delay, Event::DelayExpired { game_id });
    });
    st.delay_handle = Some(handle);
}

pub fn run() -> glib::ExitCode {
    glib::set_prgname(Some(APP_ID));
    let app = adw::Application::builder()
        .application_id(APP_ID)
        .build();

    app.connect_activate(move |app| {
        // A second activation only raises the existing window.
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }

        load_css();

        let state = Rc::new(RefCell::new(AppState::new()));

        let instructions_action = SimpleAction::new("instructions", None);
        instructions_action.connect_activate({
            let app = app.clone();
            move |_, _| {
                show_instructions_dialog(&app);
            }
        });
        app.add_action(&instructions_action);

        let about_action = SimpleAction::new("about", None);
        about_action.connect_activate({
            let app = app.clone();
            move |_, _| {
                show_about_dialog(&app);
            }
        });
        app.add_action(&about_action);

        let quit_action = SimpleAction::new("quit", None);
        quit_action.connect_activate({
            let state = state.clone();
            let app = app.clone();
            move |_, _| {
                stop_timers(&mut state.borrow_mut());
                app.quit();
            }
        });
        app.add_action(&quit_action);
        app.set_accels_for_action("app.quit", &["<primary>q"]);

        let dynamic_css_provider = gtk::CssProvider::new();
        if let Some(display) = gtk::gdk::Display::default() {
            gtk::style_context_add_provider_for_display(
                &display,
                &dynamic_css_provider,
                gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }

        let title = gtk::Label::new(None);
        title.set_markup(&format!("<b>{}</b>", gettext("Memory Game")));
        title.set_halign(gtk::Align::Center);

        let header = adw::HeaderBar::new();
        header.add_css_class("flat");
        header.set_title_widget(Some(&title));

        let menu_model = gio::Menu::new();
        menu_model.append(Some(gettext("Instructions").as_str()), Some("app.instructions"));
        menu_model.append(Some(gettext("About Sequence").as_str()), Some("app.about"));
        menu_model.append(Some(gettext("Quit").as_str()), Some("app.quit"));
        let menu_button = gtk::MenuButton::builder()
            .icon_name("open-menu-symbolic")
            .menu_model(&menu_model)
            .build();
        header.pack_end(&menu_button);

        let view_stack = gtk::Stack::new();
        view_stack.set_hexpand(true);
        view_stack.set_vexpand(true);
        view_stack.set_hhomogeneous(false);
        view_stack.set_vhomogeneous(false);
        view_stack.set_interpolate_size(false);
        view_stack.set_transition_type(gtk::StackTransitionType::SlideLeft);
        view_stack.set_transition_duration(300);

        let selector_view = build_selector_view(&state);
        view_stack.add_named(&selector_view, Some("selector"));

        let game_view = build_game_view(&state);
        view_stack.add_named(&game_view, Some("game"));

        let outcome_view = build_outcome_view(&state);
        view_stack.add_named(&outcome_view, Some("outcome"));

        view_stack.set_visible_child_name("selector");
        let toolbar = adw::ToolbarView::new();
        toolbar.set_hexpand(true);
        toolbar.set_vexpand(true);
        toolbar.add_top_bar(&header);
        toolbar.set_content(Some(&view_stack));

        let win = adw::ApplicationWindow::builder()
            .application(app)
            .title(gettext("Memory Game"))
            .icon_name(APP_ID)
            .default_width(700)
            .default_height(600)
            .content(&toolbar)
            .build();
        win.set_size_request(500, 500);
        win.add_css_class("app-window");

        win.connect_close_request({
            let state = state.clone();
            move |_| {
                stop_timers(&mut state.borrow_mut());
                gtk::glib::Propagation::Proceed
            }
        });

        {
            let mut st = state.borrow_mut();
            st.app = Some(app.clone());
            st.window = Some(win.clone());
            st.view_stack = Some(view_stack.clone());
            st.dynamic_css_provider = Some(dynamic_css_provider);
        }

        render(&state);
        tracing::info!("main window ready");
        win.present();
    });

    app.run()
}

fn load_css() {
    static RESOURCES_INIT: Once = Once::new();
    RESOURCES_INIT.call_once(|| {
        gio::resources_register_include!("sequence.gresource")
            .expect("failed to register embedded resources");
    });

    let Some(display) = gtk::gdk::Display::default() else {
        tracing::warn!("no default display, skipping stylesheet");
        return;
    };

    let icon_theme = gtk::IconTheme::for_display(&display);
    icon_theme.add_resource_path("/io/basshift/Sequence/icons/hicolor");

    let provider = gtk::CssProvider::new();
    provider.load_from_resource("/io/basshift/Sequence/style.css");
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

fn build_game_view(state: &Rc<RefCell<AppState>>) -> gtk::Box {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
    root.set_hexpand(true);
    root.set_vexpand(true);
    root.add_css_class("game-root");

    let content = gtk::Box::new(gtk::Orientation::Vertical, 12);
    content.set_hexpand(true);
    content.set_vexpand(true);
    content.set_halign(gtk::Align::Fill);
    content.set_valign(gtk::Align::Fill);
    content.set_margin_top(CONTENT_MARGIN);
    content.set_margin_bottom(CONTENT_MARGIN);
    content.set_margin_start(CONTENT_MARGIN);
    content.set_margin_end(CONTENT_MARGIN);

    let status_label = gtk::Label::builder()
        .label("")
        .halign(gtk::Align::Center)
        .wrap(true)
        .justify(gtk::Justification::Center)
        .css_classes(vec!["board-status", "title-2"])
        .build();

    let board_card = gtk::Box::new(gtk::Orientation::Vertical, 0);
    board_card.set_halign(gtk::Align::Fill);
    board_card.set_valign(gtk::Align::Fill);
    board_card.set_hexpand(true);
    board_card.set_vexpand(true);
    board_card.add_css_class("board-container");

    content.append(&status_label);
    content.append(&board_card);
    root.append(&content);

    {
        let mut st = state.borrow_mut();
        st.status_label = Some(status_label);
        st.board_container = Some(board_card);
    }

    root
}

fn build_outcome_view(state: &Rc<RefCell<AppState>>) -> gtk::Box {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
    root.set_hexpand(true);
    root.set_vexpand(true);
    root.add_css_class("outcome-root");

    let center = gtk::CenterBox::new();
    center.set_hexpand(true);
    center.set_vexpand(true);

    let content = gtk::Box::new(gtk::Orientation::Vertical, 28);
    content.set_halign(gtk::Align::Center);
    content.set_valign(gtk::Align::Center);
    content.set_margin_top(28);
    content.set_margin_bottom(28);
    content.set_margin_start(28);
    content.set_margin_end(28);

    let title = gtk::Label::new(None);
    title.add_css_class("outcome-title");
    title.add_css_class("title-1");

    let buttons = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    buttons.set_halign(gtk::Align::Center);

    let again_btn = gtk::Button::with_label(&gettext("Play Again"));
    again_btn.add_css_class("suggested-action");
    again_btn.add_css_class("pill");
    again_btn.set_size_request(200, 60);
    let exit_btn = gtk::Button::with_label(&gettext("Exit"));
    exit_btn.add_css_class("pill");
    exit_btn.set_size_request(200, 60);

    again_btn.connect_clicked({
        let state = state.clone();
        move |_| dispatch(&state, Event::PlayAgainPressed)
    });
    exit_btn.connect_clicked({
        let state = state.clone();
        move |_| dispatch(&state, Event::ExitPressed)
    });

    buttons.append(&again_btn);
    buttons.append(&exit_btn);

    content.append(&title);
    content.append(&buttons);
    center.set_center_widget(Some(&content));
    root.append(&center);

    {
        let mut st = state.borrow_mut();
        st.outcome_root = Some(root.clone());
        st.outcome_title_label = Some(title);
    }

    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn app_icon_is_bundled() {
        let icon = format!("scalable/apps/{APP_ID}.svg");
        let manifest = include_str!("../../data/resources.gresource.xml");
        assert!(manifest.contains(&format!("icons/hicolor/{icon}")));
        assert!(
            Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("data/icons/hicolor")
                .join(&icon)
                .is_file()
        );
    }
}
