pub mod catalogue;
pub mod project_detail;

use iced::{Alignment, Element, Task};

use crate::{
    core::{
        navigation::{DetailSection, Route},
        state::{AppState, Effect},
    },
    gui::Message,
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState, ctx: ViewContext)
    -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

/// Presentation hints owned by the shell rather than the application state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewContext {
    pub scale: f32,
    pub focused_section: Option<DetailSection>,
    /// Right-to-left layout for the current language.
    pub rtl: bool,
}

impl ViewContext {
    /// Horizontal alignment of running text.
    pub fn text_alignment(&self) -> Alignment {
        if self.rtl { Alignment::End } else { Alignment::Start }
    }
}

/// Parent message shared by every screen: hand state effects up to the shell.
#[derive(Debug, Clone)]
pub enum ScreenEffects {
    Effects(Vec<Effect>),
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Catalogue(catalogue::CatalogueScreen),
    ProjectDetail(project_detail::ProjectDetailScreen),
}

impl ScreenData {
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::Catalogue => ScreenData::Catalogue(catalogue::CatalogueScreen),
            Route::Project { .. } => {
                ScreenData::ProjectDetail(project_detail::ProjectDetailScreen)
            }
        }
    }

    pub fn view<'a>(&'a self, state: &'a AppState, ctx: ViewContext) -> Element<'a, Message> {
        match self {
            ScreenData::Catalogue(screen) => screen.view(state, ctx).map(Message::Catalogue),
            ScreenData::ProjectDetail(screen) => {
                screen.view(state, ctx).map(Message::ProjectDetail)
            }
        }
    }

    pub fn update(&mut self, message: Message, state: &mut AppState) -> Task<Message> {
        match (self, message) {
            (ScreenData::Catalogue(page), Message::Catalogue(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page.update(msg, state).map(Message::Catalogue),
                ScreenMessage::ParentMessage(ScreenEffects::Effects(effects)) => {
                    Task::done(Message::Effects(effects))
                }
            },
            (ScreenData::ProjectDetail(page), Message::ProjectDetail(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => {
                    page.update(msg, state).map(Message::ProjectDetail)
                }
                ScreenMessage::ParentMessage(ScreenEffects::Effects(effects)) => {
                    Task::done(Message::Effects(effects))
                }
            },
            // message for a screen that is no longer shown
            _ => Task::none(),
        }
    }
}

/// Wrap state effects as a parent message of screen `S`.
pub(crate) fn bubble<S>(effects: Vec<Effect>) -> Task<ScreenMessage<S>>
where
    S: Screen<ParentMessage = ScreenEffects> + 'static,
    S::Message: Send,
{
    if effects.is_empty() {
        Task::none()
    } else {
        Task::done(ScreenMessage::ParentMessage(ScreenEffects::Effects(effects)))
    }
}
