//! Integration tests for routing, history and detail lookup.

mod common;

use learntech::{
    Router, ScrollDirective,
    core::{
        navigation::{self, ANCHOR_SEEK_LIMIT, AnchorSeek, DetailSection, DetailView},
        tour::Bounds,
    },
    error::RouteError,
};

use common::*;

#[test]
fn test_parse_paths() -> anyhow::Result<()> {
    assert_eq!(Route::parse("/")?, Route::Catalogue);
    assert_eq!(Route::parse("/project/sbc")?, Route::project("sbc"));
    assert_eq!(Route::parse("/project/sbc/")?, Route::project("sbc"));
    assert_eq!(
        Route::parse("/project/python#features")?,
        Route::project_section("python", "features")
    );
    assert_eq!(Route::parse("/project/python#")?, Route::project("python"));
    assert_eq!(
        Route::parse("/project/my%20id")?,
        Route::project("my id")
    );
    Ok(())
}

#[test]
fn test_parse_rejects_bad_paths() {
    assert!(matches!(
        Route::parse("project/sbc"),
        Err(RouteError::NotAbsolute(_))
    ));
    assert!(matches!(Route::parse("/about"), Err(RouteError::UnknownPath(_))));
    assert!(matches!(
        Route::parse("/project/a/b"),
        Err(RouteError::UnknownPath(_))
    ));
    assert!(matches!(Route::parse("/project"), Err(RouteError::MissingId(_))));
    assert!(matches!(Route::parse("/project/"), Err(RouteError::MissingId(_))));
}

#[test]
fn test_display_round_trips_through_parse() -> anyhow::Result<()> {
    for route in [
        Route::Catalogue,
        Route::project("machine-learning"),
        Route::project_section("sbc", "overview"),
        Route::project("my id"),
    ] {
        assert_eq!(route.to_string().parse::<Route>()?, route);
    }
    assert_eq!(Route::project("my id").to_string(), "/project/my%20id");
    Ok(())
}

#[test]
fn test_lookup_found_and_not_found() {
    let t = Language::En.translation();
    match navigation::lookup("python", t) {
        DetailView::Found { record, content } => {
            assert_eq!(record.id, "python");
            assert_eq!(content.title, "Master Python");
            assert!(!content.features.is_empty());
        }
        DetailView::NotFound { .. } => panic!("python should exist"),
    }

    let missing = navigation::lookup("nonexistent", t);
    assert_eq!(missing, DetailView::NotFound { id: "nonexistent" });
    // lookup has no side effects
    assert_eq!(navigation::lookup("nonexistent", t), missing);
}

#[test]
fn test_navigate_pushes_and_scrolls_top() {
    let mut router = Router::default();
    assert_eq!(
        router.navigate(Route::project("sbc")),
        Some(ScrollDirective::Top)
    );
    assert_eq!(router.current(), &Route::project("sbc"));
    assert_eq!(router.depth(), 2);

    // navigating to the current route is a no-op
    assert_eq!(router.navigate(Route::project("sbc")), None);
    assert_eq!(router.depth(), 2);
}

#[test]
fn test_back_returns_to_catalogue() {
    let mut router = Router::default();
    router.navigate(Route::project("sbc"));
    router.navigate(Route::project("python"));
    assert_eq!(router.back(), Some(ScrollDirective::Top));
    assert_eq!(router.current(), &Route::Catalogue);
    assert_eq!(router.depth(), 1);

    // already on the catalogue
    assert_eq!(router.back(), None);
}

#[test]
fn test_home_cycles_keep_history_shallow() {
    let mut state = AppState::default();
    for _ in 0..1000 {
        state.open_project("sbc");
        assert_eq!(state.router().depth(), 2);
        state.go_home();
        assert_eq!(state.router().depth(), 1);
    }
    assert_eq!(state.route(), &Route::Catalogue);
}

#[test]
fn test_project_replaces_project() {
    let mut router = Router::default();
    router.navigate(Route::project("sbc"));
    router.navigate(Route::project("python"));
    router.navigate(Route::project_section("python", "features"));
    assert_eq!(router.depth(), 2);
    assert_eq!(router.current(), &Route::project_section("python", "features"));

    // a deep link has no catalogue below it until one is visited
    let mut router = Router::new(Route::project("sbc"));
    router.navigate(Route::project("python"));
    assert_eq!(router.depth(), 1);
    router.navigate(Route::Catalogue);
    assert_eq!(router.depth(), 1);
    assert_eq!(router.current(), &Route::Catalogue);
}

#[test]
fn test_back_from_deep_link() {
    let mut router = Router::new(Route::project("sbc"));
    assert_eq!(router.back(), Some(ScrollDirective::Top));
    assert_eq!(router.current(), &Route::Catalogue);
}

#[test]
fn test_pending_anchor_fires_once() {
    let mut router = Router::default();
    assert_eq!(
        router.navigate(Route::project_section("python", "features")),
        None
    );
    assert!(router.has_pending_anchor());

    let exists = |anchor: &str| anchor.parse::<DetailSection>().is_ok();
    assert_eq!(
        router.resolve_pending_anchor(exists),
        Some(ScrollDirective::Anchor("features".to_string()))
    );
    assert!(!router.has_pending_anchor());
    assert_eq!(router.resolve_pending_anchor(exists), None);
}

#[test]
fn test_missing_anchor_scrolls_top() {
    let mut router = Router::new(Route::project_section("python", "pricing"));
    assert_eq!(
        router.resolve_pending_anchor(|anchor| anchor.parse::<DetailSection>().is_ok()),
        Some(ScrollDirective::Top)
    );
}

#[test]
fn test_back_preserves_query() {
    let mut state = AppState::default();
    state.set_query("master");
    state.open_project("sbc");
    assert!(state.detail().is_some());

    state.back();
    assert_eq!(state.route(), &Route::Catalogue);
    assert_eq!(state.query(), "master");
    assert!(state.filtered_view().iter().any(|r| r.id == "master-cpp"));
    assert!(state.filtered_view().iter().all(|r| r.id != "testing-tools"));
}

#[test]
fn test_section_anchor_names() -> anyhow::Result<()> {
    assert_eq!("overview".parse::<DetailSection>()?, DetailSection::Overview);
    assert_eq!("features".parse::<DetailSection>()?, DetailSection::Features);
    assert!("pricing".parse::<DetailSection>().is_err());
    for section in [DetailSection::Overview, DetailSection::Features] {
        assert_eq!(section.anchor().parse::<DetailSection>()?, section);
    }
    Ok(())
}

#[test]
fn test_seek_visible_anchor() {
    let viewport = Bounds::new(0.0, 64.0, 1280.0, 736.0);
    // section partly visible 500px below the page top, page scrolled by 120
    let section = Bounds::new(32.0, 564.0, 1216.0, 236.0);
    assert_eq!(
        navigation::seek_anchor(Some(section), viewport, 120.0, 0),
        AnchorSeek::Settle(620.0)
    );
}

#[test]
fn test_seek_offscreen_anchor_advances() {
    let viewport = Bounds::new(0.0, 64.0, 1280.0, 736.0);
    assert_eq!(
        navigation::seek_anchor(None, viewport, 0.0, 0),
        AnchorSeek::Advance(736.0)
    );
    // clipped bounds of an off-screen section are empty
    assert_eq!(
        navigation::seek_anchor(Some(Bounds::default()), viewport, 736.0, 1),
        AnchorSeek::Advance(1472.0)
    );
    assert_eq!(
        navigation::seek_anchor(None, viewport, 0.0, ANCHOR_SEEK_LIMIT),
        AnchorSeek::GiveUp
    );
    assert_eq!(
        navigation::seek_anchor(None, Bounds::default(), 0.0, 0),
        AnchorSeek::GiveUp
    );
}
