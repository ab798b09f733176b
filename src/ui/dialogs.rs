use gettextrs::gettext;
use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;

use super::app::APP_ID;

pub fn show_instructions_dialog(app: &adw::Application) -> adw::AlertDialog {
    let body = gettext(
        "Pick a difficulty and press Start.\n\
Memorize where each number sits before the countdown ends.\n\
Then reveal the cards in order: 1, 2, 3 and so on.\n\
One wrong card ends the game.",
    );
    let dialog = adw::AlertDialog::new(Some(gettext("Instructions").as_str()), Some(body.as_str()));
    dialog.add_response("ok", &gettext("Got it"));
    dialog.set_default_response(Some("ok"));
    dialog.set_close_response("ok");
    dialog.present(app.active_window().as_ref());
    dialog
}

pub fn show_about_dialog(app: &adw::Application) -> adw::AboutDialog {
    let dialog = adw::AboutDialog::builder()
        .application_name("Sequence")
        .application_icon(APP_ID)
        .developer_name("Sebastian Dávila (Basshift)")
        .developers(vec!["Sebastian Dávila (Basshift)"])
        .version(env!("CARGO_PKG_VERSION"))
        .comments(gettext("Remember the numbers, then reveal them in order."))
        .build();
    dialog.add_legal_section(
        "Sequence",
        Some("© 2026 Sebastian Dávila (Basshift)"),
        gtk::License::MitX11,
        None,
    );
    dialog.present(app.active_window().as_ref());
    dialog
}
