use learntech::core::db::SqliteStore;
use learntech::{FilterEngine, Language, ProjectRecord, catalogue};

/// Creates a SqliteStore in a temporary directory.
/// Returns both the store and the temp directory (which must be kept alive).
pub async fn create_test_store() -> (SqliteStore, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("preferences.db");
    let store = SqliteStore::open(&path)
        .await
        .expect("Failed to open test store");
    (store, dir)
}

/// Filter engine over the full catalogue in `language`.
pub fn engine(language: Language) -> FilterEngine<'static> {
    FilterEngine::new(catalogue(), language.translation())
}

/// Ids of `records`, in order.
pub fn ids(records: &[&ProjectRecord]) -> Vec<&'static str> {
    records.iter().map(|record| record.id).collect()
}

/// Every spoken utterance in `effects`.
pub fn spoken(effects: &[learntech::Effect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            learntech::Effect::Speak(text) => Some(text.clone()),
            _ => None,
        })
        .collect()
}
