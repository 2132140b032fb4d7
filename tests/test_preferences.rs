//! Integration tests for preference persistence.
//!
//! Tests cover:
//! - Defaults when nothing is stored
//! - Round trips through the SQLite store, including reopening the file
//! - Fallback for invalid stored values
//! - The in-memory store used by headless callers

mod common;

use common::*;

#[tokio::test]
async fn test_defaults_when_empty() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;

    let preferences = Preferences::load(&store).await?;
    assert_eq!(preferences.theme, ThemeMode::Dark);
    assert_eq!(preferences.font_size, FontSize::Base);
    assert!(!preferences.has_seen_tour);
    assert!(store.entries().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_round_trip_survives_reopen() -> anyhow::Result<()> {
    let (store, temp_dir) = create_test_store().await;

    PreferenceChange::Theme(ThemeMode::Light).apply(&store).await?;
    PreferenceChange::FontSize(FontSize::Large).apply(&store).await?;
    PreferenceChange::TourSeen.apply(&store).await?;
    let path = store.path().to_path_buf();
    store.close().await?;

    let reopened = SqliteStore::open(&path).await?;
    let preferences = Preferences::load(&reopened).await?;
    assert_eq!(preferences.theme, ThemeMode::Light);
    assert_eq!(preferences.font_size, FontSize::Large);
    assert!(preferences.has_seen_tour);

    assert_eq!(reopened.get(THEME_KEY).await?.as_deref(), Some("light"));
    assert_eq!(reopened.get(FONT_SIZE_KEY).await?.as_deref(), Some("lg"));
    assert_eq!(reopened.get(HAS_SEEN_TOUR_KEY).await?.as_deref(), Some("true"));

    drop(temp_dir);
    Ok(())
}

#[tokio::test]
async fn test_set_overwrites_value() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;

    store.set(THEME_KEY, "light").await?;
    store.set(THEME_KEY, "dark").await?;

    let entries = store.entries().await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].key, THEME_KEY);
    assert_eq!(entries[0].value, "dark");

    Ok(())
}

#[tokio::test]
async fn test_reset_tour_removes_flag() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;

    PreferenceChange::TourSeen.apply(&store).await?;
    assert!(Preferences::load(&store).await?.has_seen_tour);

    PreferenceChange::TourReset.apply(&store).await?;
    assert!(!Preferences::load(&store).await?.has_seen_tour);
    assert_eq!(store.get(HAS_SEEN_TOUR_KEY).await?, None);

    // removing a missing key is not an error
    PreferenceChange::TourReset.apply(&store).await?;

    Ok(())
}

#[tokio::test]
async fn test_invalid_values_fall_back_to_defaults() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;

    store.set(THEME_KEY, "sepia").await?;
    store.set(FONT_SIZE_KEY, "huge").await?;

    let preferences = Preferences::load(&store).await?;
    assert_eq!(preferences.theme, ThemeMode::Dark);
    assert_eq!(preferences.font_size, FontSize::Base);

    Ok(())
}

#[tokio::test]
async fn test_open_creates_parent_directory() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("nested").join("deeper").join("preferences.db");

    let store = SqliteStore::open(&path).await?;
    store.set(THEME_KEY, "light").await?;
    assert!(path.exists());

    Ok(())
}

#[tokio::test]
async fn test_memory_store() -> anyhow::Result<()> {
    let store = MemoryStore::new();

    PreferenceChange::FontSize(FontSize::Small).apply(&store).await?;
    PreferenceChange::TourSeen.apply(&store).await?;
    let preferences = Preferences::load(&store).await?;
    assert_eq!(preferences.font_size, FontSize::Small);
    assert!(preferences.has_seen_tour);

    PreferenceChange::TourReset.apply(&store).await?;
    let snapshot = store.snapshot();
    assert_eq!(snapshot.get(FONT_SIZE_KEY).map(String::as_str), Some("sm"));
    assert!(!snapshot.contains_key(HAS_SEEN_TOUR_KEY));

    Ok(())
}

#[test]
fn test_font_size_cycle() {
    assert_eq!(FontSize::Small.next(), FontSize::Base);
    assert_eq!(FontSize::Base.next(), FontSize::Large);
    assert_eq!(FontSize::Large.next(), FontSize::Small);
    assert_eq!(FontSize::Base.scale(), 1.0);
}

#[test]
fn test_parse_preference_values() -> anyhow::Result<()> {
    assert_eq!("light".parse::<ThemeMode>()?, ThemeMode::Light);
    assert_eq!("sm".parse::<FontSize>()?, FontSize::Small);
    assert!("medium".parse::<FontSize>().is_err());
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    Ok(())
}
