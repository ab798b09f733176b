use gtk4 as gtk;
use libadwaita as adw;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::game::{Difficulty, Session};

pub struct AppState {
    pub app: Option<adw::Application>,
    pub window: Option<adw::ApplicationWindow>,
    pub view_stack: Option<gtk::Stack>,
    pub level_buttons: Vec<(Difficulty, gtk::Button)>,
    pub start_button: Option<gtk::Button>,
    pub status_label: Option<gtk::Label>,
    pub board_container: Option<gtk::Box>,
    pub outcome_root: Option<gtk::Box>,
    pub outcome_title_label: Option<gtk::Label>,
    pub dynamic_css_provider: Option<gtk::CssProvider>,

    // Game state
    pub session: Session,
    pub rng: StdRng,
    pub grid_buttons: Vec<gtk::Button>,
    pub tick_handle: Option<glib::SourceId>,
    pub delay_handle: Option<glib::SourceId>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            app: None,
            window: None,
            view_stack: None,
            level_buttons: Vec::new(),
            start_button: None,
            status_label: None,
            board_container: None,
            outcome_root: None,
            outcome_title_label: None,
            dynamic_css_provider: None,
            session: Session::new(),
            rng: StdRng::from_os_rng(),
            grid_buttons: Vec::new(),
            tick_handle: None,
            delay_handle: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
