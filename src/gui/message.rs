use std::path::PathBuf;

use iced::Size;

use crate::{
    core::{
        db::{Preferences, SqliteStore},
        i18n::Language,
        navigation::DetailSection,
        share::SharePlatform,
        state::Effect,
        tour::Bounds,
    },
    gui::screens::{
        ScreenMessage, catalogue::CatalogueScreen, project_detail::ProjectDetailScreen,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    Booted(Result<(SqliteStore, Preferences), String>),
    Catalogue(ScreenMessage<CatalogueScreen>),
    ProjectDetail(ScreenMessage<ProjectDetailScreen>),
    Header(HeaderMessage),
    Footer(FooterMessage),
    Tour(TourMessage),
    Effects(Vec<Effect>),
    ContentReady,
    Scrolled(f32),
    ScrollToTop,
    WindowResized(Size),
    /// On-screen bounds of a tagged element, `None` when it is not laid out.
    Measured(&'static str, Option<Bounds>),
    AnchorMeasured {
        section: DetailSection,
        attempt: u8,
        viewport: Option<Bounds>,
        target: Option<Bounds>,
    },
    EscapePressed,
    /// Press anywhere on the page below the header.
    SearchBlurred,
    ShowTour,
    ExportSaved(Result<Option<PathBuf>, String>),
    Persisted(Result<(), String>),
    Ignore,
}

#[derive(Debug, Clone)]
pub enum HeaderMessage {
    Home,
    QueryChanged(String),
    QuerySubmitted,
    ClearQuery,
    SuggestionSelected(&'static str),
    Export,
    ToggleLanguageMenu,
    LanguageSelected(Language),
    ToggleTheme,
    CycleFontSize,
}

#[derive(Debug, Clone)]
pub enum FooterMessage {
    Share(SharePlatform),
    CopyLink,
    Feedback,
}

#[derive(Debug, Clone, Copy)]
pub enum TourMessage {
    Next,
    Previous,
    Skip,
}
