use std::path::PathBuf;

use crate::core::{i18n::Language, navigation::Route};

pub const PREFS_DB_ENV: &str = "LEARNTECH_PREFS_DB";
pub const SITE_URL_ENV: &str = "LEARNTECH_SITE_URL";
pub const DEFAULT_SITE_URL: &str = "http://localhost:5173";

const APP_DIR_NAME: &str = "learntech";
const PREFS_DB_FILE_NAME: &str = "preferences.db";

/// Runtime settings shared by the CLI and the GUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// SQLite file holding persisted preferences.
    pub prefs_db: PathBuf,
    /// Base URL used when building share and copy-link URLs.
    pub site_url: String,
    pub language: Language,
    /// View shown at start-up.
    pub start_route: Route,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefs_db: default_prefs_db(),
            site_url: DEFAULT_SITE_URL.to_string(),
            language: Language::default(),
            start_route: Route::Catalogue,
        }
    }
}

/// `<data dir>/learntech/preferences.db`, or the working directory when the
/// platform has no data dir.
pub fn default_prefs_db() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(PREFS_DB_FILE_NAME)
}
