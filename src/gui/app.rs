use std::{collections::HashMap, path::PathBuf, time::Duration};

use iced::{
    Event, Length, Size, Subscription, Task, Theme, event, keyboard, window,
    widget::{Id, Stack, column, container, mouse_area, operation, scrollable},
};
use rfd::AsyncFileDialog;
use tracing::{debug, error, info, warn};

use crate::{
    config::Settings,
    core::{
        db::{PreferenceChange, Preferences, SqliteStore, ThemeMode},
        export::ExportFile,
        narrator::{Narrator, TracingNarrator},
        navigation::{self, AnchorSeek, DetailSection, DetailView, Route, ScrollDirective},
        state::{AppState, Effect},
        tour::{Bounds, LANGUAGE_ID, SEARCH_ID, TOUR_STEPS},
    },
    gui::{
        message::{FooterMessage, HeaderMessage, Message, TourMessage},
        screens::{ScreenData, ViewContext},
        widgets,
    },
};

/// Delay before the onboarding tour is offered on first run.
const TOUR_DELAY: Duration = Duration::from_millis(1200);
const INITIAL_WINDOW: Size = Size::new(1280.0, 800.0);

pub struct LearnTechApp {
    state: AppState,
    screen: ScreenData,
    shown_route: Route,
    store: Option<SqliteStore>,
    narrator: TracingNarrator,
    settings: Settings,
    focused_section: Option<DetailSection>,
    viewport: Size,
    /// Last measured on-screen bounds of tagged header and page elements.
    measured: HashMap<&'static str, Bounds>,
}

impl LearnTechApp {
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let state = AppState::new(settings.language).with_route(settings.start_route.clone());
        let shown_route = state.route().clone();
        let boot = Task::perform(
            open_preferences(settings.prefs_db.clone()),
            Message::Booted,
        );
        let app = Self {
            screen: ScreenData::for_route(&shown_route),
            shown_route,
            state,
            store: None,
            narrator: TracingNarrator,
            settings,
            focused_section: None,
            viewport: INITIAL_WINDOW,
            measured: HashMap::new(),
        };
        (app, Task::batch([boot, Task::done(Message::ContentReady)]))
    }

    pub fn title(&self) -> String {
        let t = self.state.translation();
        match self.state.detail() {
            Some(DetailView::Found { content, .. }) => format!("{} - {}", content.title, t.title),
            _ => t.title.to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        match self.state.preferences().theme {
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::Light => Theme::Light,
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            _ => None,
        })
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = self.handle(message);
        if self.state.route() == &self.shown_route {
            return task;
        }
        // the route changed: swap the page and let it resolve pending anchors
        self.shown_route = self.state.route().clone();
        self.screen = ScreenData::for_route(&self.shown_route);
        Task::batch([task, Task::done(Message::ContentReady)])
    }

    fn handle(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Booted(result) => {
                match result {
                    Ok((store, preferences)) => {
                        info!(path = %store.path().display(), "preferences loaded");
                        self.store = Some(store);
                        self.state.apply_preferences(preferences);
                    }
                    Err(e) => error!(error = %e, "failed to open preference store"),
                }
                let measure = self.measure_targets();
                if self.state.should_offer_tour() {
                    Task::batch([
                        measure,
                        Task::perform(tokio::time::sleep(TOUR_DELAY), |_| Message::ShowTour),
                    ])
                } else {
                    measure
                }
            }
            Message::Catalogue(_) | Message::ProjectDetail(_) => {
                self.screen.update(message, &mut self.state)
            }
            Message::Header(msg) => {
                let task = self.update_header(msg);
                Task::batch([task, self.measure_targets()])
            }
            Message::Footer(msg) => {
                let site_url = self.settings.site_url.clone();
                let effects = match msg {
                    FooterMessage::Share(platform) => self.state.share(platform, &site_url),
                    FooterMessage::CopyLink => self.state.copy_link(&site_url),
                    FooterMessage::Feedback => self.state.feedback(),
                };
                self.run_effects(effects)
            }
            Message::Tour(msg) => {
                let effects = match msg {
                    TourMessage::Next => self.state.tour_next(),
                    TourMessage::Previous => self.state.tour_previous(),
                    TourMessage::Skip => self.state.skip_tour(),
                };
                let task = self.run_effects(effects);
                Task::batch([task, self.measure_targets()])
            }
            Message::Effects(effects) => self.run_effects(effects),
            Message::ContentReady => {
                let effects = self.state.content_ready();
                let task = self.run_effects(effects);
                Task::batch([task, self.measure_targets()])
            }
            Message::Scrolled(offset) => {
                self.state.set_scroll_offset(offset);
                // the grid moves under an active tour
                if self.state.tour().is_some() {
                    self.measure_targets()
                } else {
                    Task::none()
                }
            }
            Message::ScrollToTop => {
                let effects = self.state.scroll_to_top();
                self.run_effects(effects)
            }
            Message::WindowResized(size) => {
                self.viewport = size;
                self.measure_targets()
            }
            Message::Measured(id, bounds) => {
                match bounds {
                    Some(bounds) => self.measured.insert(id, bounds),
                    None => self.measured.remove(id),
                };
                Task::none()
            }
            Message::AnchorMeasured {
                section,
                attempt,
                viewport,
                target,
            } => self.seek_anchor(section, attempt, viewport, target),
            Message::EscapePressed | Message::SearchBlurred => {
                let effects = self.state.dismiss_popups();
                self.run_effects(effects)
            }
            Message::ShowTour => {
                if self.state.should_offer_tour() {
                    let effects = self.state.start_tour();
                    let task = self.run_effects(effects);
                    Task::batch([task, self.measure_targets()])
                } else {
                    Task::none()
                }
            }
            Message::ExportSaved(result) => {
                match result {
                    Ok(Some(path)) => info!(path = %path.display(), "search results exported"),
                    Ok(None) => debug!("export cancelled"),
                    Err(e) => error!(error = %e, "failed to export search results"),
                }
                Task::none()
            }
            Message::Persisted(result) => {
                if let Err(e) = result {
                    warn!(error = %e, "failed to persist preference");
                }
                Task::none()
            }
            Message::Ignore => Task::none(),
        }
    }

    fn update_header(&mut self, msg: HeaderMessage) -> Task<Message> {
        let effects = match msg {
            HeaderMessage::Home => self.state.go_home(),
            HeaderMessage::QueryChanged(query) => {
                let mut effects = self.state.focus_search();
                effects.extend(self.state.set_query(query));
                effects
            }
            HeaderMessage::QuerySubmitted => self.state.blur_search(),
            HeaderMessage::ClearQuery => self.state.clear_query(),
            HeaderMessage::SuggestionSelected(id) => self.state.select_suggestion(id),
            HeaderMessage::Export => match self.state.export_results() {
                Ok(effects) => effects,
                Err(e) => {
                    error!(error = %e, "failed to serialize search results");
                    Vec::new()
                }
            },
            HeaderMessage::ToggleLanguageMenu => self.state.toggle_language_menu(),
            HeaderMessage::LanguageSelected(language) => self.state.set_language(language),
            HeaderMessage::ToggleTheme => self.state.toggle_theme(),
            HeaderMessage::CycleFontSize => self.state.cycle_font_size(),
        };
        self.run_effects(effects)
    }

    fn run_effects(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let mut tasks = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                Effect::Persist(change) => tasks.push(self.persist(change)),
                Effect::Speak(utterance) => self.narrator.speak(self.state.language(), &utterance),
                Effect::Scroll(directive) => tasks.push(self.scroll(directive)),
                Effect::Export(file) => {
                    tasks.push(Task::perform(save_export(file), Message::ExportSaved))
                }
                Effect::CopyToClipboard(contents) => {
                    debug!(%contents, "copied to clipboard");
                    tasks.push(iced::clipboard::write(contents));
                }
                Effect::OpenUrl(url) => match open::that_detached(&url) {
                    Ok(()) => debug!(%url, "opened in default handler"),
                    Err(e) => warn!(%url, error = %e, "failed to open link"),
                },
            }
        }
        Task::batch(tasks)
    }

    fn persist(&self, change: PreferenceChange) -> Task<Message> {
        let Some(store) = self.store.clone() else {
            warn!(key = change.key(), "preference store unavailable, change not saved");
            return Task::none();
        };
        Task::perform(
            async move { change.apply(&store).await.map_err(|e| format!("{e:#}")) },
            Message::Persisted,
        )
    }

    fn scroll(&mut self, directive: ScrollDirective) -> Task<Message> {
        self.focused_section = match directive {
            ScrollDirective::Top => None,
            ScrollDirective::Anchor(anchor) => anchor.parse().ok(),
        };
        let top = self.scroll_page(0.0);
        match self.focused_section {
            Some(section) => top.chain(measure_anchor(section, 0)),
            None => top,
        }
    }

    fn scroll_page(&mut self, y: f32) -> Task<Message> {
        self.state.set_scroll_offset(y);
        operation::scroll_to(
            Id::new(widgets::PAGE_ID),
            scrollable::AbsoluteOffset { x: 0.0, y },
        )
    }

    fn seek_anchor(
        &mut self,
        section: DetailSection,
        attempt: u8,
        viewport: Option<Bounds>,
        target: Option<Bounds>,
    ) -> Task<Message> {
        // navigated elsewhere while measuring
        if self.focused_section != Some(section) {
            return Task::none();
        }
        let Some(viewport) = viewport else {
            warn!("page viewport not laid out");
            return Task::none();
        };
        match navigation::seek_anchor(target, viewport, self.state.scroll_offset(), attempt) {
            AnchorSeek::Settle(y) => {
                debug!(anchor = section.anchor(), y, "scrolled to anchor");
                self.scroll_page(y)
            }
            AnchorSeek::Advance(y) => self
                .scroll_page(y)
                .chain(measure_anchor(section, attempt + 1)),
            AnchorSeek::GiveUp => {
                warn!(anchor = section.anchor(), "anchor never came into view");
                Task::none()
            }
        }
    }

    fn measure_targets(&self) -> Task<Message> {
        widgets::measure(TOUR_STEPS.iter().filter_map(|step| step.target.element_id()))
    }

    /// Measured bounds of a header control, estimated until the first
    /// measurement arrives.
    fn anchor_bounds(&self, id: &'static str) -> Option<Bounds> {
        self.measured
            .get(id)
            .copied()
            .or_else(|| widgets::header_estimate(id, self.viewport))
    }

    pub fn view(&self) -> iced::Element<'_, Message> {
        let scale = self.state.font_size().scale();
        let ctx = ViewContext {
            scale,
            focused_section: self.focused_section,
            rtl: self.state.is_rtl(),
        };

        let page = column![
            self.screen.view(&self.state, ctx),
            widgets::footer(self.state.translation(), scale),
        ];
        let body = container(
            scrollable(page)
                .id(Id::new(widgets::PAGE_ID))
                .on_scroll(|viewport| Message::Scrolled(viewport.absolute_offset().y))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .id(Id::new(widgets::PAGE_VIEWPORT_ID))
        .width(Length::Fill)
        .height(Length::Fill);
        // presses on the page that no control handles close the popups
        let body = mouse_area(body).on_press(Message::SearchBlurred);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(column![widgets::header(&self.state, scale), body]);

        if self.state.show_scroll_top() {
            layers = layers.push(widgets::scroll_top_button(scale));
        }
        if let Some(dropdown) = self
            .anchor_bounds(SEARCH_ID)
            .and_then(|search| widgets::suggestions(&self.state, search, scale))
        {
            layers = layers.push(dropdown);
        }
        if let Some(menu) = self.anchor_bounds(LANGUAGE_ID).and_then(|anchor| {
            widgets::language_menu(&self.state, anchor, self.viewport, scale)
        }) {
            layers = layers.push(menu);
        }
        if let Some(tour) = self.state.tour() {
            let target = tour
                .current()
                .and_then(|step| step.target.element_id())
                .and_then(|id| self.measured.get(id).copied());
            if let Some(layout) = self.state.tour_layout(target, self.viewport.width) {
                layers = layers.push(widgets::tour_overlay(tour, layout, scale));
            }
        }
        layers.into()
    }
}

/// Measure the page viewport, then the section, and report both.
fn measure_anchor(section: DetailSection, attempt: u8) -> Task<Message> {
    container::visible_bounds(Id::new(widgets::PAGE_VIEWPORT_ID)).then(move |viewport| {
        container::visible_bounds(Id::new(section.anchor())).map(move |target| {
            Message::AnchorMeasured {
                section,
                attempt,
                viewport: viewport.map(widgets::bounds),
                target: target.map(widgets::bounds),
            }
        })
    })
}

async fn open_preferences(db_file: PathBuf) -> Result<(SqliteStore, Preferences), String> {
    let store = SqliteStore::open(&db_file)
        .await
        .map_err(|e| format!("{e:#}"))?;
    let preferences = Preferences::load(&store)
        .await
        .map_err(|e| format!("{e:#}"))?;
    Ok((store, preferences))
}

/// Ask where to save the export, then write it. `None` when the dialog was
/// dismissed.
async fn save_export(file: ExportFile) -> Result<Option<PathBuf>, String> {
    let Some(handle) = AsyncFileDialog::new()
        .set_title("Export search results")
        .set_file_name(file.file_name)
        .add_filter("JSON", &["json"])
        .save_file()
        .await
    else {
        return Ok(None);
    };
    let path = handle.path().to_path_buf();
    file.write_to(&path).await.map_err(|e| format!("{e:#}"))?;
    Ok(Some(path))
}

pub fn run(settings: Settings) -> iced::Result {
    iced::application(
        move || LearnTechApp::new(settings.clone()),
        LearnTechApp::update,
        LearnTechApp::view,
    )
    .title(LearnTechApp::title)
    .theme(LearnTechApp::theme)
    .subscription(LearnTechApp::subscription)
    .window_size(INITIAL_WINDOW)
    .run()
}
