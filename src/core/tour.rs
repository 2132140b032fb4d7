//! First-run onboarding walkthrough.

use tracing::debug;

pub const SEARCH_ID: &str = "nav-search";
pub const GRID_ID: &str = "project-grid";
pub const LANGUAGE_ID: &str = "nav-lang";
pub const THEME_ID: &str = "nav-theme";

/// Screen regions a tour step can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TourTarget {
    WholePage,
    Search,
    ProjectGrid,
    LanguageMenu,
    ThemeToggle,
}

impl TourTarget {
    /// Identifier of the highlighted element.
    pub fn element_id(self) -> Option<&'static str> {
        match self {
            TourTarget::WholePage => None,
            TourTarget::Search => Some(SEARCH_ID),
            TourTarget::ProjectGrid => Some(GRID_ID),
            TourTarget::LanguageMenu => Some(LANGUAGE_ID),
            TourTarget::ThemeToggle => Some(THEME_ID),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourStep {
    pub target: TourTarget,
    pub title: &'static str,
    pub content: &'static str,
    pub placement: Placement,
}

pub static TOUR_STEPS: [TourStep; 5] = [
    TourStep {
        target: TourTarget::WholePage,
        title: "Welcome to Learn Tech Hub!",
        content: "Your premium gateway to mastering modern technology. Let us show you around.",
        placement: Placement::Center,
    },
    TourStep {
        target: TourTarget::Search,
        title: "Find Your Interests",
        content: "Use the search bar to filter projects by topic, technology, or keywords.",
        placement: Placement::Bottom,
    },
    TourStep {
        target: TourTarget::ProjectGrid,
        title: "Explore Projects",
        content: "Each card leads to a dedicated learning page or directly to the project website.",
        placement: Placement::Top,
    },
    TourStep {
        target: TourTarget::LanguageMenu,
        title: "Global Learning",
        content: "Switch between 8 supported languages to learn in the way that suits you best.",
        placement: Placement::Bottom,
    },
    TourStep {
        target: TourTarget::ThemeToggle,
        title: "Your Preferences",
        content: "Toggle between dark and light modes for the most comfortable reading experience.",
        placement: Placement::Bottom,
    },
];

const HIGHLIGHT_PADDING: f32 = 8.0;
const CAPTION_WIDTH: f32 = 320.0;
const CAPTION_GAP: f32 = 24.0;
const CAPTION_ABOVE_OFFSET: f32 = 200.0;
const VIEWPORT_MARGIN: f32 = 20.0;

/// An axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn inflate(self, by: f32) -> Self {
        Self {
            x: self.x - by,
            y: self.y - by,
            width: self.width + 2.0 * by,
            height: self.height + 2.0 * by,
        }
    }

    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// Left edge of a `width` wide popup hanging under `self`. The popup's
    /// right edge lines up with ours, or its left edge when `mirrored`, and it
    /// is kept inside `[0, viewport_width]`.
    pub fn popup_left(self, width: f32, viewport_width: f32, mirrored: bool) -> f32 {
        let left = if mirrored {
            self.x
        } else {
            self.x + self.width - width
        };
        left.min(viewport_width - width).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptionPosition {
    Centered,
    At { top: f32, left: f32 },
}

/// Where to draw the spotlight and the caption box for the current step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourLayout {
    pub highlight: Option<Bounds>,
    pub caption: CaptionPosition,
}

/// Result of a cursor transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourProgress {
    Moved(usize),
    Unchanged,
    /// Reported once, on the transition into the terminal state.
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    cursor: usize,
    steps: &'static [TourStep],
}

impl Default for Tour {
    fn default() -> Self {
        Self::new()
    }
}

impl Tour {
    pub fn new() -> Self {
        Self::with_steps(&TOUR_STEPS)
    }

    pub fn with_steps(steps: &'static [TourStep]) -> Self {
        Self { cursor: 0, steps }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.cursor + 1 == self.steps.len()
    }

    pub fn current(&self) -> Option<&'static TourStep> {
        self.steps.get(self.cursor)
    }

    pub fn next(&mut self) -> TourProgress {
        if self.is_complete() {
            return TourProgress::Unchanged;
        }
        self.cursor += 1;
        if self.is_complete() {
            debug!("tour finished");
            TourProgress::Completed
        } else {
            TourProgress::Moved(self.cursor)
        }
    }

    pub fn previous(&mut self) -> TourProgress {
        if self.is_complete() || self.cursor == 0 {
            return TourProgress::Unchanged;
        }
        self.cursor -= 1;
        TourProgress::Moved(self.cursor)
    }

    pub fn skip(&mut self) -> TourProgress {
        if self.is_complete() {
            return TourProgress::Unchanged;
        }
        debug!(at = self.cursor, "tour skipped");
        self.cursor = self.steps.len();
        TourProgress::Completed
    }

    /// Position the spotlight and caption for the current step. `target` is
    /// the on-screen bounds of the step's region if it is known.
    pub fn layout(&self, target: Option<Bounds>, viewport_width: f32) -> TourLayout {
        let centered = TourLayout {
            highlight: None,
            caption: CaptionPosition::Centered,
        };
        let Some(step) = self.current() else {
            return centered;
        };
        if step.target == TourTarget::WholePage {
            return centered;
        }
        let Some(bounds) = target else {
            return centered;
        };

        let top = match step.placement {
            Placement::Bottom => bounds.y + bounds.height + CAPTION_GAP,
            Placement::Top => bounds.y - CAPTION_ABOVE_OFFSET,
            Placement::Left | Placement::Right | Placement::Center => bounds.y,
        };
        let preferred_left = bounds.x + bounds.width / 2.0 - CAPTION_WIDTH / 2.0;
        let max_left = viewport_width - CAPTION_WIDTH - VIEWPORT_MARGIN;
        let left = preferred_left.min(max_left).max(VIEWPORT_MARGIN);

        TourLayout {
            highlight: Some(bounds.inflate(HIGHLIGHT_PADDING)),
            caption: CaptionPosition::At { top, left },
        }
    }
}
