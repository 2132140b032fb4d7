use std::{fmt, str::FromStr};

use tracing::warn;

use super::KeyValueStore;
use crate::error::ParseError;

pub const THEME_KEY: &str = "theme";
pub const FONT_SIZE_KEY: &str = "fontSize";
pub const HAS_SEEN_TOUR_KEY: &str = "hasSeenTour";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(ParseError::Theme(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Small,
    #[default]
    Base,
    Large,
}

impl FontSize {
    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Small => "sm",
            FontSize::Base => "base",
            FontSize::Large => "lg",
        }
    }

    /// sm -> base -> lg -> sm
    pub fn next(self) -> Self {
        match self {
            FontSize::Small => FontSize::Base,
            FontSize::Base => FontSize::Large,
            FontSize::Large => FontSize::Small,
        }
    }

    pub fn spoken_name(self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Base => "normal",
            FontSize::Large => "large",
        }
    }

    /// Multiplier applied to every text size.
    pub fn scale(self) -> f32 {
        match self {
            FontSize::Small => 0.875,
            FontSize::Base => 1.0,
            FontSize::Large => 1.125,
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(FontSize::Small),
            "base" => Ok(FontSize::Base),
            "lg" => Ok(FontSize::Large),
            other => Err(ParseError::FontSize(other.to_string())),
        }
    }
}

/// User preferences that outlive a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: ThemeMode,
    pub font_size: FontSize,
    pub has_seen_tour: bool,
}

impl Preferences {
    /// Read every preference, falling back to the default for missing or
    /// unreadable values.
    pub async fn load<S: KeyValueStore>(store: &S) -> anyhow::Result<Self> {
        let theme = parse_or_default(THEME_KEY, store.get(THEME_KEY).await?);
        let font_size = parse_or_default(FONT_SIZE_KEY, store.get(FONT_SIZE_KEY).await?);
        let has_seen_tour = store.get(HAS_SEEN_TOUR_KEY).await?.is_some();
        Ok(Self {
            theme,
            font_size,
            has_seen_tour,
        })
    }
}

fn parse_or_default<T>(key: &str, raw: Option<String>) -> T
where
    T: FromStr<Err = ParseError> + Default,
{
    match raw.as_deref().map(str::parse) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            warn!(key, error = %e, "ignoring stored preference");
            T::default()
        }
        None => T::default(),
    }
}

/// A single write to the preference store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceChange {
    Theme(ThemeMode),
    FontSize(FontSize),
    TourSeen,
    TourReset,
}

impl PreferenceChange {
    pub fn key(self) -> &'static str {
        match self {
            PreferenceChange::Theme(_) => THEME_KEY,
            PreferenceChange::FontSize(_) => FONT_SIZE_KEY,
            PreferenceChange::TourSeen | PreferenceChange::TourReset => HAS_SEEN_TOUR_KEY,
        }
    }

    pub async fn apply<S: KeyValueStore>(self, store: &S) -> anyhow::Result<()> {
        match self {
            PreferenceChange::Theme(theme) => store.set(THEME_KEY, theme.as_str()).await,
            PreferenceChange::FontSize(size) => store.set(FONT_SIZE_KEY, size.as_str()).await,
            PreferenceChange::TourSeen => store.set(HAS_SEEN_TOUR_KEY, "true").await,
            PreferenceChange::TourReset => store.remove(HAS_SEEN_TOUR_KEY).await,
        }
    }
}
