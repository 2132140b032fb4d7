use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{
    core::{
        catalogue::{self, ProjectRecord},
        i18n::{ProjectDetails, Translation},
        tour::Bounds,
    },
    error::{ParseError, RouteError},
};

const PROJECT_PREFIX: &str = "/project/";

/// A logical view of the application.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Catalogue,
    Project {
        id: String,
        anchor: Option<String>,
    },
}

impl Route {
    pub fn project(id: impl Into<String>) -> Self {
        Route::Project {
            id: id.into(),
            anchor: None,
        }
    }

    pub fn project_section(id: impl Into<String>, anchor: impl Into<String>) -> Self {
        Route::Project {
            id: id.into(),
            anchor: Some(anchor.into()),
        }
    }

    /// Parse `/` or `/project/:id[#anchor]`.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let (path_part, fragment) = match path.split_once('#') {
            Some((p, f)) => (p, Some(f)),
            None => (path, None),
        };
        if !path_part.starts_with('/') {
            return Err(RouteError::NotAbsolute(path.to_string()));
        }
        let trimmed = path_part.trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Catalogue);
        }
        let Some(raw_id) = trimmed.strip_prefix(PROJECT_PREFIX) else {
            if trimmed == PROJECT_PREFIX.trim_end_matches('/') {
                return Err(RouteError::MissingId(path.to_string()));
            }
            return Err(RouteError::UnknownPath(path.to_string()));
        };
        if raw_id.is_empty() {
            return Err(RouteError::MissingId(path.to_string()));
        }
        if raw_id.contains('/') {
            return Err(RouteError::UnknownPath(path.to_string()));
        }
        let id = urlencoding::decode(raw_id)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| raw_id.to_string());
        let anchor = fragment.filter(|f| !f.is_empty()).map(str::to_string);
        Ok(Route::Project { id, anchor })
    }

    pub fn is_catalogue(&self) -> bool {
        matches!(self, Route::Catalogue)
    }

    pub fn anchor(&self) -> Option<&str> {
        match self {
            Route::Project { anchor, .. } => anchor.as_deref(),
            Route::Catalogue => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Catalogue => f.write_str("/"),
            Route::Project { id, anchor } => {
                write!(f, "{PROJECT_PREFIX}{}", urlencoding::encode(id))?;
                if let Some(anchor) = anchor {
                    write!(f, "#{anchor}")?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

/// Sections of the detail page that can be targeted by an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSection {
    Overview,
    Features,
}

impl DetailSection {
    pub fn anchor(self) -> &'static str {
        match self {
            DetailSection::Overview => "overview",
            DetailSection::Features => "features",
        }
    }
}

impl FromStr for DetailSection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(DetailSection::Overview),
            "features" => Ok(DetailSection::Features),
            other => Err(ParseError::Section(other.to_string())),
        }
    }
}

/// What the view should do with its scroll position after a navigation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollDirective {
    Top,
    Anchor(String),
}

/// Page advances allowed while looking for an off-screen anchor.
pub const ANCHOR_SEEK_LIMIT: u8 = 12;

/// Next move while bringing an anchored section into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorSeek {
    /// The section is visible; scroll so its top meets the viewport's top.
    Settle(f32),
    /// The section is below the visible area; move down a page and measure again.
    Advance(f32),
    GiveUp,
}

/// Decide the next scroll offset from measured bounds. `section` is the
/// visible part of the section (empty or `None` when off-screen),
/// `viewport` the visible bounds of the page and `offset` its current
/// vertical scroll offset.
pub fn seek_anchor(
    section: Option<Bounds>,
    viewport: Bounds,
    offset: f32,
    attempt: u8,
) -> AnchorSeek {
    match section {
        Some(section) if !section.is_empty() => {
            AnchorSeek::Settle((offset + section.y - viewport.y).max(0.0))
        }
        _ if attempt >= ANCHOR_SEEK_LIMIT || viewport.is_empty() => AnchorSeek::GiveUp,
        _ => AnchorSeek::Advance(offset + viewport.height),
    }
}

/// Outcome of looking up a project for the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailView<'a> {
    Found {
        record: &'static ProjectRecord,
        content: &'a ProjectDetails,
    },
    NotFound {
        id: &'a str,
    },
}

pub fn lookup<'a>(id: &'a str, translation: &'a Translation) -> DetailView<'a> {
    match catalogue::find(id) {
        Some(record) => DetailView::Found {
            record,
            content: translation.project(record.content_key),
        },
        None => DetailView::NotFound { id },
    }
}

/// Single-page navigation stack.
#[derive(Debug, Clone)]
pub struct Router {
    history: Vec<Route>,
    pending_anchor: Option<String>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Catalogue)
    }
}

impl Router {
    pub fn new(initial: Route) -> Self {
        let pending_anchor = initial.anchor().map(str::to_string);
        Self {
            history: vec![initial],
            pending_anchor,
        }
    }

    pub fn current(&self) -> &Route {
        // history is never empty
        &self.history[self.history.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn has_pending_anchor(&self) -> bool {
        self.pending_anchor.is_some()
    }

    /// Move to `route`. Returns the scroll directive for the transition, or
    /// `None` when `route` is already current or carries an anchor that must
    /// wait for the content to exist.
    ///
    /// History holds at most the catalogue and one detail view: going to the
    /// catalogue unwinds to it, and a detail view replaces another.
    pub fn navigate(&mut self, route: Route) -> Option<ScrollDirective> {
        if *self.current() == route {
            return None;
        }
        debug!(from = %self.current(), to = %route, "navigate");
        self.pending_anchor = route.anchor().map(str::to_string);
        if route.is_catalogue() {
            self.unwind_to_catalogue();
        } else {
            if !self.current().is_catalogue() {
                self.history.pop();
            }
            self.history.push(route);
        }
        if self.pending_anchor.is_some() {
            None
        } else {
            Some(ScrollDirective::Top)
        }
    }

    /// Leave a detail view for the catalogue. No-op on the catalogue itself.
    pub fn back(&mut self) -> Option<ScrollDirective> {
        if self.current().is_catalogue() {
            return None;
        }
        self.unwind_to_catalogue();
        self.pending_anchor = None;
        debug!(depth = self.history.len(), "back to catalogue");
        Some(ScrollDirective::Top)
    }

    fn unwind_to_catalogue(&mut self) {
        match self.history.iter().rposition(Route::is_catalogue) {
            Some(idx) => self.history.truncate(idx + 1),
            None => self.history = vec![Route::Catalogue],
        }
    }

    /// Resolve a pending anchor once the detail content is on screen.
    /// Falls back to the top of the page when the anchor does not exist.
    pub fn resolve_pending_anchor(
        &mut self,
        exists: impl Fn(&str) -> bool,
    ) -> Option<ScrollDirective> {
        let anchor = self.pending_anchor.take()?;
        if exists(&anchor) {
            Some(ScrollDirective::Anchor(anchor))
        } else {
            debug!(%anchor, "anchor not present, scrolling to top");
            Some(ScrollDirective::Top)
        }
    }
}
