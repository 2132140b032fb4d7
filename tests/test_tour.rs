//! Integration tests for the onboarding tour cursor and caption layout.

mod common;

use learntech::{
    Tour,
    core::tour::{Bounds, CaptionPosition, TOUR_STEPS, TourProgress, TourTarget},
};

use common::*;

#[test]
fn test_five_nexts_complete_once() {
    let mut tour = Tour::new();
    assert_eq!(tour.len(), 5);

    let progress: Vec<TourProgress> = (0..5).map(|_| tour.next()).collect();
    assert_eq!(
        progress,
        [
            TourProgress::Moved(1),
            TourProgress::Moved(2),
            TourProgress::Moved(3),
            TourProgress::Moved(4),
            TourProgress::Completed,
        ]
    );
    assert!(tour.is_complete());
    assert_eq!(tour.current(), None);

    // completion is reported exactly once
    assert_eq!(tour.next(), TourProgress::Unchanged);
    assert_eq!(tour.skip(), TourProgress::Unchanged);
}

#[test]
fn test_previous_stops_at_first_step() {
    let mut tour = Tour::new();
    assert_eq!(tour.previous(), TourProgress::Unchanged);
    tour.next();
    tour.next();
    assert_eq!(tour.previous(), TourProgress::Moved(1));
    assert_eq!(tour.cursor(), 1);
}

#[test]
fn test_skip_completes() {
    let mut tour = Tour::new();
    tour.next();
    assert_eq!(tour.skip(), TourProgress::Completed);
    assert!(tour.is_complete());
}

#[test]
fn test_steps_content() {
    let targets: Vec<TourTarget> = TOUR_STEPS.iter().map(|s| s.target).collect();
    assert_eq!(
        targets,
        [
            TourTarget::WholePage,
            TourTarget::Search,
            TourTarget::ProjectGrid,
            TourTarget::LanguageMenu,
            TourTarget::ThemeToggle,
        ]
    );
    assert_eq!(TOUR_STEPS[0].title, "Welcome to Learn Tech Hub!");
    assert_eq!(TourTarget::Search.element_id(), Some("nav-search"));
    assert_eq!(TourTarget::WholePage.element_id(), None);
}

#[test]
fn test_welcome_step_is_centered() {
    let tour = Tour::new();
    let layout = tour.layout(Some(Bounds::new(10.0, 10.0, 50.0, 50.0)), 1280.0);
    assert_eq!(layout.highlight, None);
    assert_eq!(layout.caption, CaptionPosition::Centered);
}

#[test]
fn test_missing_target_is_centered() {
    let mut tour = Tour::new();
    tour.next();
    let layout = tour.layout(None, 1280.0);
    assert_eq!(layout.highlight, None);
    assert_eq!(layout.caption, CaptionPosition::Centered);
}

#[test]
fn test_caption_below_target() {
    let mut tour = Tour::new();
    tour.next(); // search, placed below
    let layout = tour.layout(Some(Bounds::new(416.0, 12.0, 448.0, 40.0)), 1280.0);
    assert_eq!(layout.highlight, Some(Bounds::new(408.0, 4.0, 464.0, 56.0)));
    // centre 640, caption 320 wide
    assert_eq!(
        layout.caption,
        CaptionPosition::At {
            top: 12.0 + 40.0 + 24.0,
            left: 480.0
        }
    );
}

#[test]
fn test_caption_above_target() {
    let mut tour = Tour::new();
    tour.next();
    tour.next(); // project grid, placed above
    let layout = tour.layout(Some(Bounds::new(32.0, 244.0, 1216.0, 400.0)), 1280.0);
    assert_eq!(
        layout.caption,
        CaptionPosition::At {
            top: 44.0,
            left: 480.0
        }
    );
}

#[test]
fn test_caption_clamped_to_viewport() {
    let mut tour = Tour::new();
    for _ in 0..4 {
        tour.next(); // theme toggle at the right edge
    }
    let layout = tour.layout(Some(Bounds::new(1150.0, 12.0, 110.0, 40.0)), 1280.0);
    let CaptionPosition::At { left, .. } = layout.caption else {
        panic!("caption should be positioned");
    };
    assert_eq!(left, 1280.0 - 340.0);

    // the left margin wins on a viewport narrower than the caption
    let layout = tour.layout(Some(Bounds::new(0.0, 12.0, 40.0, 40.0)), 300.0);
    let CaptionPosition::At { left, .. } = layout.caption else {
        panic!("caption should be positioned");
    };
    assert_eq!(left, 20.0);
}

#[test]
fn test_state_offers_tour_until_seen() {
    let mut state = AppState::default();
    assert!(state.should_offer_tour());
    state.start_tour();
    assert!(!state.should_offer_tour());

    let mut persisted = Vec::new();
    for _ in 0..5 {
        persisted.extend(state.tour_next());
    }
    assert_eq!(persisted, [Effect::Persist(PreferenceChange::TourSeen)]);
    assert!(state.tour().is_none());
    assert!(state.preferences().has_seen_tour);
    assert!(!state.should_offer_tour());

    assert_eq!(
        state.reset_tour(),
        [Effect::Persist(PreferenceChange::TourReset)]
    );
    assert!(state.should_offer_tour());
}

#[test]
fn test_skip_persists_seen() {
    let mut state = AppState::default();
    state.start_tour();
    assert_eq!(
        state.skip_tour(),
        [Effect::Persist(PreferenceChange::TourSeen)]
    );
    assert!(state.skip_tour().is_empty());
}

#[test]
fn test_custom_step_list() {
    let mut tour = Tour::with_steps(&TOUR_STEPS[3..]);
    assert!(!tour.is_empty());
    assert_eq!(tour.len(), 2);
    assert_eq!(tour.current().map(|s| s.target), Some(TourTarget::LanguageMenu));
    assert_eq!(tour.next(), TourProgress::Moved(1));
    assert!(tour.is_last_step());
    assert_eq!(tour.next(), TourProgress::Completed);

    let mut empty = Tour::with_steps(&[]);
    assert!(empty.is_empty());
    assert!(empty.is_complete());
    assert_eq!(empty.next(), TourProgress::Unchanged);
    assert_eq!(empty.layout(None, 1280.0).caption, CaptionPosition::Centered);
}

#[test]
fn test_layout_follows_measured_bounds() {
    let mut tour = Tour::new();
    tour.next();
    // the same step laid out against two different measurements
    let narrow = tour.layout(Some(Bounds::new(100.0, 12.0, 300.0, 40.0)), 800.0);
    let wide = tour.layout(Some(Bounds::new(700.0, 20.0, 448.0, 48.0)), 1600.0);
    assert_eq!(narrow.highlight, Some(Bounds::new(92.0, 4.0, 316.0, 56.0)));
    assert_eq!(
        wide.caption,
        CaptionPosition::At {
            top: 20.0 + 48.0 + 24.0,
            left: 764.0
        }
    );
}

#[test]
fn test_popup_hangs_from_button_edge() {
    let button = Bounds::new(1062.0, 12.0, 44.0, 40.0);
    // flush right in left-to-right layouts
    assert_eq!(button.popup_left(208.0, 1280.0, false), 1106.0 - 208.0);
    // mirrored: flush left, pulled back inside the viewport if needed
    assert_eq!(button.popup_left(208.0, 1280.0, true), 1062.0);
    assert_eq!(button.popup_left(208.0, 1200.0, true), 1200.0 - 208.0);
    // never off the left edge
    assert_eq!(Bounds::new(10.0, 0.0, 44.0, 40.0).popup_left(208.0, 1280.0, false), 0.0);
}
