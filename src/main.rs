mod game;
mod ui;

use gettextrs::{LocaleCategory, bindtextdomain, setlocale, textdomain};
use tracing_subscriber::EnvFilter;

const GETTEXT_PACKAGE: &str = "sequence";
const LOCALE_DIR: &str = "/usr/share/locale";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn init_locale() {
    setlocale(LocaleCategory::LcAll, "");
    if let Err(err) = bindtextdomain(GETTEXT_PACKAGE, LOCALE_DIR) {
        tracing::warn!(%err, "could not bind text domain");
    }
    if let Err(err) = textdomain(GETTEXT_PACKAGE) {
        tracing::warn!(%err, "could not select text domain");
    }
}

fn main() -> glib::ExitCode {
    init_logging();
    init_locale();
    ui::app::run()
}
