pub mod config;
pub mod core;
pub mod error;

pub use crate::core::catalogue::{ContentKey, ProjectRecord, catalogue};
pub use crate::core::db::{KeyValueStore, MemoryStore, Preferences, SqliteStore};
pub use crate::core::filter::{AUTOCOMPLETE_LIMIT, FilterEngine};
pub use crate::core::i18n::{Language, Translation};
pub use crate::core::navigation::{Route, Router, ScrollDirective};
pub use crate::core::state::{AppState, Effect};
pub use crate::core::tour::Tour;

#[cfg(feature = "gui")]
pub mod gui;
