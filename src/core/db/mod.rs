mod memory;
mod preferences;
mod state;

use std::future::Future;

pub use memory::MemoryStore;
pub use preferences::{
    FONT_SIZE_KEY, FontSize, HAS_SEEN_TOUR_KEY, PreferenceChange, Preferences, THEME_KEY,
    ThemeMode,
};
pub use state::{SqliteStore, StoredEntry};

/// Small string key/value persistence, the desktop counterpart of browser
/// local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
    fn remove(&self, key: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
}
