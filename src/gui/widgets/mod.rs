mod footer;
mod header;
mod tour;

pub use footer::footer;
pub use header::{header, language_menu, suggestions};
pub use tour::tour_overlay;

use iced::{
    Alignment, Element, Length, Padding, Rectangle, Size, Task,
    widget::{Id, button, container, text},
};

use crate::{
    core::tour::{Bounds, LANGUAGE_ID, SEARCH_ID},
    gui::Message,
};

pub const HEADER_HEIGHT: f32 = 64.0;
pub const HEADER_PADDING: f32 = 16.0;
pub const CONTROL_HEIGHT: f32 = 40.0;
pub const SEARCH_WIDTH: f32 = 448.0;
pub const ICON_BUTTON_WIDTH: f32 = 44.0;
pub const THEME_BUTTON_WIDTH: f32 = 110.0;
pub const CONTROL_SPACING: f32 = 8.0;
pub const LANGUAGE_MENU_WIDTH: f32 = 208.0;

/// The page scrollable and the container around it.
pub const PAGE_ID: &str = "page";
pub const PAGE_VIEWPORT_ID: &str = "page-viewport";

pub fn bounds(rect: Rectangle) -> Bounds {
    Bounds::new(rect.x, rect.y, rect.width, rect.height)
}

/// Query the on-screen bounds of each tagged element.
pub fn measure(ids: impl IntoIterator<Item = &'static str>) -> Task<Message> {
    Task::batch(ids.into_iter().map(|id| {
        container::visible_bounds(Id::new(id))
            .map(move |rect| Message::Measured(id, rect.map(bounds)))
    }))
}

/// Where a popup's header control sits before its first measurement arrives.
pub fn header_estimate(id: &str, viewport: Size) -> Option<Bounds> {
    let control_y = (HEADER_HEIGHT - CONTROL_HEIGHT) / 2.0;
    let theme_x = viewport.width - HEADER_PADDING - THEME_BUTTON_WIDTH;
    match id {
        SEARCH_ID => Some(Bounds::new(
            ((viewport.width - SEARCH_WIDTH) / 2.0).max(0.0),
            control_y,
            SEARCH_WIDTH,
            CONTROL_HEIGHT,
        )),
        LANGUAGE_ID => Some(Bounds::new(
            theme_x - CONTROL_SPACING - ICON_BUTTON_WIDTH,
            control_y,
            ICON_BUTTON_WIDTH,
            CONTROL_HEIGHT,
        )),
        _ => None,
    }
}

/// Place `content` at an absolute offset inside a full-size layer.
pub fn positioned<'a>(
    content: impl Into<Element<'a, Message>>,
    top: f32,
    left: f32,
) -> Element<'a, Message> {
    container(content)
        .padding(Padding {
            top: top.max(0.0),
            right: 0.0,
            bottom: 0.0,
            left: left.max(0.0),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

pub fn scroll_top_button<'a>(scale: f32) -> Element<'a, Message> {
    container(
        button(text("Top").size(16.0 * scale))
            .on_press(Message::ScrollToTop)
            .padding(16)
            .style(button::primary),
    )
    .padding(40)
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::End)
    .align_y(Alignment::End)
    .into()
}
