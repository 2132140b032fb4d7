mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from learntech for tests
pub use learntech::core::db::{
    FONT_SIZE_KEY, FontSize, HAS_SEEN_TOUR_KEY, KeyValueStore, MemoryStore, PreferenceChange,
    Preferences, SqliteStore, THEME_KEY, ThemeMode,
};
pub use learntech::{AppState, Effect, FilterEngine, Language, ProjectRecord, Route, catalogue};
