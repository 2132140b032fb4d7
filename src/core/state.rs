//! The application controller: the only owner of mutable UI state.
//!
//! Every mutation is an explicit method that returns the side effects the
//! shell has to carry out (persisting, speaking, scrolling, ...). Everything
//! shown on screen is derived from this struct on demand.

use tracing::debug;

use crate::core::{
    catalogue::{self, ProjectRecord},
    db::{FontSize, PreferenceChange, Preferences, ThemeMode},
    export::ExportFile,
    filter::FilterEngine,
    i18n::{Language, Translation},
    navigation::{self, DetailSection, DetailView, Route, Router, ScrollDirective},
    share::{self, SharePlatform},
    tour::{Bounds, Tour, TourLayout, TourProgress},
};

/// Scroll offset beyond which the scroll-to-top control is shown.
pub const SCROLL_TOP_THRESHOLD: f32 = 400.0;

/// Side effect requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Persist(PreferenceChange),
    Speak(String),
    Scroll(ScrollDirective),
    Export(ExportFile),
    CopyToClipboard(String),
    /// Hand a URL (web page or `mailto:`) to the system's default handler.
    OpenUrl(String),
}

#[derive(Debug, Clone)]
pub struct AppState {
    language: Language,
    query: String,
    search_focused: bool,
    language_menu_open: bool,
    router: Router,
    preferences: Preferences,
    tour: Option<Tour>,
    scroll_offset: f32,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl AppState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            query: String::new(),
            search_focused: false,
            language_menu_open: false,
            router: Router::default(),
            preferences: Preferences::default(),
            tour: None,
            scroll_offset: 0.0,
        }
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.router = Router::new(route);
        self
    }

    // ---- derived state ----

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn translation(&self) -> &'static Translation {
        self.language.translation()
    }

    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn language_menu_open(&self) -> bool {
        self.language_menu_open
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn route(&self) -> &Route {
        self.router.current()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn tour(&self) -> Option<&Tour> {
        self.tour.as_ref()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn show_scroll_top(&self) -> bool {
        self.scroll_offset > SCROLL_TOP_THRESHOLD
    }

    fn engine(&self) -> FilterEngine<'static> {
        FilterEngine::new(catalogue::catalogue(), self.translation())
    }

    pub fn filtered_view(&self) -> Vec<&'static ProjectRecord> {
        self.engine().filter(&self.query)
    }

    /// Suggestions to display; empty unless the search box has focus.
    pub fn autocomplete(&self) -> Vec<&'static ProjectRecord> {
        if !self.search_focused || self.query.is_empty() {
            return Vec::new();
        }
        self.engine().autocomplete(&self.query)
    }

    /// Detail lookup for the current route, `None` on the catalogue.
    pub fn detail(&self) -> Option<DetailView<'_>> {
        match self.router.current() {
            Route::Project { id, .. } => Some(navigation::lookup(id, self.translation())),
            Route::Catalogue => None,
        }
    }

    pub fn tour_layout(&self, target: Option<Bounds>, viewport_width: f32) -> Option<TourLayout> {
        self.tour
            .as_ref()
            .map(|tour| tour.layout(target, viewport_width))
    }

    // ---- search ----

    pub fn set_query(&mut self, query: impl Into<String>) -> Vec<Effect> {
        self.query = query.into();
        self.search_focused = true;
        Vec::new()
    }

    /// Text dropped onto the search box.
    pub fn drop_query(&mut self, text: impl Into<String>) -> Vec<Effect> {
        self.query = text.into();
        vec![Effect::Speak(format!("Searching for {}", self.query))]
    }

    pub fn focus_search(&mut self) -> Vec<Effect> {
        if self.search_focused {
            return Vec::new();
        }
        self.search_focused = true;
        vec![Effect::Speak("Search input".to_string())]
    }

    pub fn blur_search(&mut self) -> Vec<Effect> {
        self.search_focused = false;
        Vec::new()
    }

    /// A click outside the search box or Escape: hide the suggestions and the
    /// language menu without touching the query.
    pub fn dismiss_popups(&mut self) -> Vec<Effect> {
        self.search_focused = false;
        self.language_menu_open = false;
        Vec::new()
    }

    pub fn clear_query(&mut self) -> Vec<Effect> {
        self.query.clear();
        vec![Effect::Speak(self.translation().clear.to_string())]
    }

    /// Clear action offered by the empty-result state.
    pub fn reset_search(&mut self) -> Vec<Effect> {
        self.query.clear();
        vec![Effect::Speak("Search cleared".to_string())]
    }

    /// Replace the query with the suggestion's localized title.
    pub fn select_suggestion(&mut self, id: &str) -> Vec<Effect> {
        let Some(record) = catalogue::find(id) else {
            return Vec::new();
        };
        let title = self.translation().project(record.content_key).title;
        self.query = title.to_string();
        self.search_focused = false;
        vec![Effect::Speak(format!("Selected {title}"))]
    }

    pub fn export_results(&self) -> anyhow::Result<Vec<Effect>> {
        let file = ExportFile::from_records(&self.filtered_view())?;
        Ok(vec![
            Effect::Speak("Exporting results".to_string()),
            Effect::Export(file),
        ])
    }

    // ---- header controls ----

    pub fn toggle_language_menu(&mut self) -> Vec<Effect> {
        self.language_menu_open = !self.language_menu_open;
        if self.language_menu_open {
            vec![Effect::Speak("Select language".to_string())]
        } else {
            Vec::new()
        }
    }

    pub fn set_language(&mut self, language: Language) -> Vec<Effect> {
        debug!(from = %self.language, to = %language, "language changed");
        self.language = language;
        self.language_menu_open = false;
        vec![Effect::Speak(format!(
            "Language set to {}",
            language.native_name()
        ))]
    }

    pub fn toggle_theme(&mut self) -> Vec<Effect> {
        let theme = self.preferences.theme.toggled();
        self.preferences.theme = theme;
        vec![
            Effect::Persist(PreferenceChange::Theme(theme)),
            Effect::Speak(format!("Theme set to {theme}")),
        ]
    }

    pub fn set_theme(&mut self, theme: ThemeMode) -> Vec<Effect> {
        if self.preferences.theme == theme {
            return Vec::new();
        }
        self.toggle_theme()
    }

    pub fn cycle_font_size(&mut self) -> Vec<Effect> {
        let size = self.preferences.font_size.next();
        self.preferences.font_size = size;
        vec![
            Effect::Persist(PreferenceChange::FontSize(size)),
            Effect::Speak(format!("Font size set to {}", size.spoken_name())),
        ]
    }

    pub fn font_size(&self) -> FontSize {
        self.preferences.font_size
    }

    /// Replace preferences with the ones read from storage at start-up.
    pub fn apply_preferences(&mut self, preferences: Preferences) {
        self.preferences = preferences;
    }

    // ---- navigation ----

    pub fn navigate(&mut self, route: Route) -> Vec<Effect> {
        self.search_focused = false;
        self.language_menu_open = false;
        match self.router.navigate(route) {
            Some(directive) => self.scrolled(directive),
            None => Vec::new(),
        }
    }

    pub fn open_project(&mut self, id: &str) -> Vec<Effect> {
        self.navigate(Route::project(id))
    }

    pub fn go_home(&mut self) -> Vec<Effect> {
        let mut effects = self.navigate(Route::Catalogue);
        effects.push(Effect::Speak("Home".to_string()));
        effects
    }

    pub fn back(&mut self) -> Vec<Effect> {
        match self.router.back() {
            Some(directive) => self.scrolled(directive),
            None => Vec::new(),
        }
    }

    /// Called once the current view has rendered its content. Resolves an
    /// anchor that was waiting for the detail page to exist.
    pub fn content_ready(&mut self) -> Vec<Effect> {
        if !self.router.has_pending_anchor() {
            return Vec::new();
        }
        let found = matches!(self.detail(), Some(DetailView::Found { .. }));
        let directive = self
            .router
            .resolve_pending_anchor(|anchor| found && anchor.parse::<DetailSection>().is_ok());
        match directive {
            Some(directive) => self.scrolled(directive),
            None => Vec::new(),
        }
    }

    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset.max(0.0);
    }

    pub fn scroll_to_top(&mut self) -> Vec<Effect> {
        self.scroll_offset = 0.0;
        vec![
            Effect::Speak("Scrolling to top".to_string()),
            Effect::Scroll(ScrollDirective::Top),
        ]
    }

    fn scrolled(&mut self, directive: ScrollDirective) -> Vec<Effect> {
        if directive == ScrollDirective::Top {
            self.scroll_offset = 0.0;
        }
        vec![Effect::Scroll(directive)]
    }

    // ---- sharing ----

    pub fn current_url(&self, site_url: &str) -> String {
        share::page_url(site_url, self.router.current())
    }

    pub fn share(&self, platform: SharePlatform, site_url: &str) -> Vec<Effect> {
        let url = platform.share_url(&self.current_url(site_url), self.translation().title);
        vec![
            Effect::Speak(format!("Share on {platform}")),
            Effect::OpenUrl(url),
        ]
    }

    /// Open a project's external site.
    pub fn visit_site(&self, link: &str) -> Vec<Effect> {
        debug!(%link, "visit site");
        vec![Effect::OpenUrl(link.to_string())]
    }

    pub fn feedback(&self) -> Vec<Effect> {
        vec![
            Effect::Speak("Send feedback".to_string()),
            Effect::OpenUrl(share::feedback_mailto()),
        ]
    }

    pub fn copy_link(&self, site_url: &str) -> Vec<Effect> {
        vec![Effect::CopyToClipboard(self.current_url(site_url))]
    }

    // ---- onboarding ----

    /// Whether the tour should be offered at start-up.
    pub fn should_offer_tour(&self) -> bool {
        !self.preferences.has_seen_tour && self.tour.is_none()
    }

    pub fn start_tour(&mut self) -> Vec<Effect> {
        if self.tour.is_none() {
            self.tour = Some(Tour::new());
        }
        Vec::new()
    }

    pub fn tour_next(&mut self) -> Vec<Effect> {
        self.step_tour(Tour::next)
    }

    pub fn tour_previous(&mut self) -> Vec<Effect> {
        self.step_tour(Tour::previous)
    }

    pub fn skip_tour(&mut self) -> Vec<Effect> {
        self.step_tour(Tour::skip)
    }

    pub fn reset_tour(&mut self) -> Vec<Effect> {
        self.tour = None;
        self.preferences.has_seen_tour = false;
        vec![Effect::Persist(PreferenceChange::TourReset)]
    }

    fn step_tour(&mut self, step: impl FnOnce(&mut Tour) -> TourProgress) -> Vec<Effect> {
        let Some(tour) = self.tour.as_mut() else {
            return Vec::new();
        };
        match step(tour) {
            TourProgress::Completed => {
                self.tour = None;
                self.preferences.has_seen_tour = true;
                vec![Effect::Persist(PreferenceChange::TourSeen)]
            }
            TourProgress::Moved(_) | TourProgress::Unchanged => Vec::new(),
        }
    }
}
