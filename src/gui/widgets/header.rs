use iced::{
    Alignment::Center,
    Element, Length, Size,
    widget::{Id, button, column, container, row, text, text_input, tooltip},
};

use crate::{
    core::{
        db::ThemeMode,
        i18n::Language,
        state::AppState,
        tour::{Bounds, LANGUAGE_ID, SEARCH_ID, THEME_ID},
    },
    gui::{
        Message,
        message::HeaderMessage,
        widgets::{
            CONTROL_HEIGHT, CONTROL_SPACING, HEADER_HEIGHT, HEADER_PADDING, ICON_BUTTON_WIDTH,
            LANGUAGE_MENU_WIDTH, SEARCH_WIDTH, THEME_BUTTON_WIDTH, positioned,
        },
    },
};

fn header_message(msg: HeaderMessage) -> Message {
    Message::Header(msg)
}

fn with_tooltip<'a>(
    content: impl Into<Element<'a, Message>>,
    label: &'a str,
) -> Element<'a, Message> {
    tooltip(content, text(label).size(12), tooltip::Position::Bottom)
        .style(container::rounded_box)
        .padding(6)
        .into()
}

pub fn header<'a>(state: &'a AppState, scale: f32) -> Element<'a, Message> {
    let t = state.translation();

    let logo = container(
        button(text("Learn Tech Hub").size(20.0 * scale))
            .on_press(header_message(HeaderMessage::Home))
            .style(button::text),
    )
    .width(Length::FillPortion(1));

    let mut search = row![
        text_input(t.search_placeholder, state.query())
            .on_input(|query| header_message(HeaderMessage::QueryChanged(query)))
            .on_submit(header_message(HeaderMessage::QuerySubmitted))
            .padding(8)
            .size(14.0 * scale)
            .width(Length::Fill),
    ]
    .spacing(4)
    .align_y(Center);
    if !state.query().is_empty() {
        search = search.push(with_tooltip(
            button(text("x").size(14.0 * scale))
                .on_press(header_message(HeaderMessage::ClearQuery))
                .style(button::text),
            t.clear,
        ));
    }
    search = search.push(with_tooltip(
        button(text("Export").size(14.0 * scale))
            .on_press(header_message(HeaderMessage::Export))
            .style(button::secondary),
        t.export_results,
    ));
    let search = container(search)
        .id(Id::new(SEARCH_ID))
        .width(Length::Fixed(SEARCH_WIDTH))
        .height(Length::Fixed(CONTROL_HEIGHT));

    let theme_label = match state.preferences().theme {
        ThemeMode::Dark => "Dark",
        ThemeMode::Light => "Light",
    };
    let controls = row![
        with_tooltip(
            button(text("Aa").size(14.0 * scale))
                .on_press(header_message(HeaderMessage::CycleFontSize))
                .width(Length::Fixed(ICON_BUTTON_WIDTH))
                .height(Length::Fixed(CONTROL_HEIGHT))
                .style(button::secondary),
            t.font_size,
        ),
        with_tooltip(
            container(
                button(text(state.language().code().to_uppercase()).size(14.0 * scale))
                    .on_press(header_message(HeaderMessage::ToggleLanguageMenu))
                    .width(Length::Fixed(ICON_BUTTON_WIDTH))
                    .height(Length::Fixed(CONTROL_HEIGHT))
                    .style(button::secondary),
            )
            .id(Id::new(LANGUAGE_ID)),
            "Change Language",
        ),
        container(
            button(text(theme_label).size(14.0 * scale))
                .on_press(header_message(HeaderMessage::ToggleTheme))
                .width(Length::Fixed(THEME_BUTTON_WIDTH))
                .height(Length::Fixed(CONTROL_HEIGHT))
                .style(button::secondary),
        )
        .id(Id::new(THEME_ID)),
    ]
    .spacing(CONTROL_SPACING)
    .align_y(Center);
    let controls = container(controls).align_right(Length::FillPortion(1));

    container(row![logo, search, controls].align_y(Center))
        .padding([0.0, HEADER_PADDING])
        .width(Length::Fill)
        .center_y(Length::Fixed(HEADER_HEIGHT))
        .style(container::bordered_box)
        .into()
}

/// Autocomplete dropdown under the search box.
pub fn suggestions<'a>(
    state: &'a AppState,
    search: Bounds,
    scale: f32,
) -> Option<Element<'a, Message>> {
    let matches = state.autocomplete();
    if matches.is_empty() {
        return None;
    }
    let t = state.translation();
    let mut list = column![].spacing(2);
    for record in matches {
        list = list.push(
            button(text(t.project(record.content_key).title).size(14.0 * scale))
                .on_press(header_message(HeaderMessage::SuggestionSelected(record.id)))
                .width(Length::Fill)
                .style(button::text),
        );
    }
    let dropdown = container(list)
        .padding(4)
        .width(Length::Fixed(search.width))
        .style(container::rounded_box);
    Some(positioned(dropdown, search.bottom() + 4.0, search.x))
}

/// Language picker hanging from the language button: flush with its right
/// edge, or its left edge in right-to-left languages.
pub fn language_menu<'a>(
    state: &'a AppState,
    anchor: Bounds,
    viewport: Size,
    scale: f32,
) -> Option<Element<'a, Message>> {
    if !state.language_menu_open() {
        return None;
    }
    let current = state.language();
    let mut list = column![].spacing(2);
    for language in Language::ALL {
        let entry = button(text(language.native_name()).size(14.0 * scale))
            .on_press(header_message(HeaderMessage::LanguageSelected(language)))
            .width(Length::Fill);
        list = list.push(if language == current {
            entry.style(button::primary)
        } else {
            entry.style(button::text)
        });
    }
    let menu = container(list)
        .padding(4)
        .width(Length::Fixed(LANGUAGE_MENU_WIDTH))
        .style(container::rounded_box);

    let left = anchor.popup_left(LANGUAGE_MENU_WIDTH, viewport.width, state.is_rtl());
    Some(positioned(menu, anchor.bottom() + CONTROL_SPACING, left))
}
