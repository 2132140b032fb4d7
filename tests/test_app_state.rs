//! Integration tests for the application controller and the effects it emits.

mod common;

use learntech::{ScrollDirective, core::share::SharePlatform};

use common::*;

#[test]
fn test_query_and_suggestions() {
    let mut state = AppState::default();
    assert!(state.set_query("net").is_empty());
    assert!(state.search_focused());
    assert_eq!(ids(&state.autocomplete()), ["networking"]);

    state.blur_search();
    assert!(state.autocomplete().is_empty());
    // blurring keeps the filter applied
    assert_eq!(ids(&state.filtered_view()), ["networking"]);
}

#[test]
fn test_outside_press_closes_popups() {
    let mut state = AppState::default();
    state.set_query("py");
    state.toggle_language_menu();
    assert!(!state.autocomplete().is_empty());

    assert!(state.dismiss_popups().is_empty());
    assert!(state.autocomplete().is_empty());
    assert!(!state.language_menu_open());
    assert_eq!(state.query(), "py");
    assert_eq!(ids(&state.filtered_view()), ["python"]);

    // typing again brings the suggestions back
    state.set_query("pyt");
    assert_eq!(ids(&state.autocomplete()), ["python"]);
}

#[test]
fn test_focus_speaks_once() {
    let mut state = AppState::default();
    assert_eq!(spoken(&state.focus_search()), ["Search input"]);
    assert!(state.focus_search().is_empty());
}

#[test]
fn test_select_suggestion() {
    let mut state = AppState::default();
    state.set_query("pyth");
    let effects = state.select_suggestion("python");
    assert_eq!(state.query(), "Master Python");
    assert!(!state.search_focused());
    assert_eq!(spoken(&effects), ["Selected Master Python"]);

    assert!(state.select_suggestion("nonexistent").is_empty());
}

#[test]
fn test_clear_and_drop() {
    let mut state = AppState::default();
    assert_eq!(spoken(&state.drop_query("python")), ["Searching for python"]);
    assert_eq!(state.query(), "python");

    assert_eq!(spoken(&state.clear_query()), ["Clear"]);
    assert_eq!(state.query(), "");

    state.set_query("zzz");
    assert!(state.filtered_view().is_empty());
    assert_eq!(spoken(&state.reset_search()), ["Search cleared"]);
    assert_eq!(state.filtered_view().len(), 9);
}

#[test]
fn test_export_results_effects() -> anyhow::Result<()> {
    let mut state = AppState::default();
    state.set_query("python");
    let effects = state.export_results()?;
    assert_eq!(spoken(&effects), ["Exporting results"]);
    let Some(Effect::Export(file)) = effects.last() else {
        panic!("expected an export effect");
    };
    assert_eq!(file.file_name, "search_results.json");
    assert!(file.contents.contains("\"id\": \"python\""));
    Ok(())
}

#[test]
fn test_language_menu_and_switch() {
    let mut state = AppState::default();
    assert_eq!(spoken(&state.toggle_language_menu()), ["Select language"]);
    assert!(state.language_menu_open());

    let effects = state.set_language(Language::He);
    assert!(!state.language_menu_open());
    assert!(state.is_rtl());
    assert_eq!(spoken(&effects), ["Language set to עברית"]);

    // closing the menu is silent
    state.toggle_language_menu();
    assert!(state.toggle_language_menu().is_empty());
}

#[test]
fn test_theme_and_font_size_persist() {
    let mut state = AppState::default();
    assert_eq!(
        state.toggle_theme(),
        [
            Effect::Persist(PreferenceChange::Theme(ThemeMode::Light)),
            Effect::Speak("Theme set to light".to_string()),
        ]
    );
    assert!(state.set_theme(ThemeMode::Light).is_empty());

    let sizes: Vec<Vec<String>> = (0..3).map(|_| spoken(&state.cycle_font_size())).collect();
    assert_eq!(
        sizes,
        [
            ["Font size set to large"],
            ["Font size set to small"],
            ["Font size set to normal"],
        ]
    );
    assert_eq!(state.font_size(), FontSize::Base);
}

#[test]
fn test_navigation_effects() {
    let mut state = AppState::default();
    state.set_query("sb");
    state.toggle_language_menu();

    let effects = state.open_project("sbc");
    assert_eq!(effects, [Effect::Scroll(ScrollDirective::Top)]);
    assert!(!state.search_focused());
    assert!(!state.language_menu_open());

    let effects = state.go_home();
    assert_eq!(
        effects,
        [
            Effect::Scroll(ScrollDirective::Top),
            Effect::Speak("Home".to_string()),
        ]
    );
    assert_eq!(state.route(), &Route::Catalogue);
}

#[test]
fn test_anchor_resolved_after_content_ready() {
    let mut state = AppState::default();
    assert!(
        state
            .navigate(Route::project_section("python", "features"))
            .is_empty()
    );
    assert_eq!(
        state.content_ready(),
        [Effect::Scroll(ScrollDirective::Anchor("features".to_string()))]
    );
    assert!(state.content_ready().is_empty());
}

#[test]
fn test_anchor_on_missing_project_scrolls_top() {
    let mut state = AppState::default();
    state.navigate(Route::project_section("nonexistent", "features"));
    assert_eq!(
        state.content_ready(),
        [Effect::Scroll(ScrollDirective::Top)]
    );
}

#[test]
fn test_scroll_to_top_threshold() {
    let mut state = AppState::default();
    state.set_scroll_offset(400.0);
    assert!(!state.show_scroll_top());
    state.set_scroll_offset(401.0);
    assert!(state.show_scroll_top());

    let effects = state.scroll_to_top();
    assert_eq!(spoken(&effects), ["Scrolling to top"]);
    assert!(effects.contains(&Effect::Scroll(ScrollDirective::Top)));
    assert!(!state.show_scroll_top());
}

#[test]
fn test_share_opens_intent_url() {
    let state = AppState::default().with_route(Route::project("sbc"));
    let effects = state.share(SharePlatform::LinkedIn, "https://learn.example");
    assert_eq!(spoken(&effects), ["Share on LinkedIn"]);
    assert!(effects.contains(&Effect::OpenUrl(
        "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Flearn.example%2Fproject%2Fsbc"
            .to_string()
    )));
    assert!(
        !effects
            .iter()
            .any(|effect| matches!(effect, Effect::CopyToClipboard(_)))
    );
}

#[test]
fn test_visit_site_and_feedback_open_urls() {
    let state = AppState::default();
    let link = catalogue()[0].external_link;
    assert_eq!(state.visit_site(link), [Effect::OpenUrl(link.to_string())]);

    assert_eq!(
        state.feedback(),
        [
            Effect::Speak("Send feedback".to_string()),
            Effect::OpenUrl("mailto:goldnoamai@gmail.com".to_string()),
        ]
    );
}

#[test]
fn test_apply_preferences() {
    let mut state = AppState::default();
    state.apply_preferences(Preferences {
        theme: ThemeMode::Light,
        font_size: FontSize::Small,
        has_seen_tour: true,
    });
    assert_eq!(state.preferences().theme, ThemeMode::Light);
    assert_eq!(state.font_size(), FontSize::Small);
    assert!(!state.should_offer_tour());
}
