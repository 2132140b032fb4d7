use iced::{
    Alignment::Center,
    Border, Color, Element, Length, Theme,
    widget::{Stack, button, column, container, mouse_area, row, text},
};

use crate::{
    core::tour::{CaptionPosition, Tour, TourLayout},
    gui::{Message, message::TourMessage, widgets::positioned},
};

const CAPTION_WIDTH: f32 = 320.0;

fn tour_message(msg: TourMessage) -> Message {
    Message::Tour(msg)
}

/// Dimmed backdrop, spotlight and caption for the active tour step.
pub fn tour_overlay<'a>(tour: &Tour, layout: TourLayout, scale: f32) -> Element<'a, Message> {
    let Some(step) = tour.current() else {
        return column![].into();
    };

    let backdrop = mouse_area(
        container(column![])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_: &Theme| {
                container::Style::default().background(Color {
                    a: 0.6,
                    ..Color::BLACK
                })
            }),
    )
    .on_press(Message::Ignore);

    let mut controls = row![
        text(format!("{} / {}", tour.cursor() + 1, tour.len())).size(12.0 * scale),
        button(text("Skip").size(14.0 * scale))
            .on_press(tour_message(TourMessage::Skip))
            .style(button::text),
    ]
    .spacing(8)
    .align_y(Center);
    if tour.cursor() > 0 {
        controls = controls.push(
            button(text("Back").size(14.0 * scale))
                .on_press(tour_message(TourMessage::Previous))
                .style(button::secondary),
        );
    }
    let next_label = if tour.is_last_step() { "Finish" } else { "Next" };
    controls = controls.push(
        button(text(next_label).size(14.0 * scale))
            .on_press(tour_message(TourMessage::Next))
            .style(button::primary),
    );

    let caption = container(
        column![
            text(step.title).size(18.0 * scale),
            text(step.content).size(14.0 * scale),
            controls,
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::Fixed(CAPTION_WIDTH))
    .style(container::rounded_box);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop);

    if let Some(bounds) = layout.highlight {
        let spotlight = container(column![])
            .width(Length::Fixed(bounds.width))
            .height(Length::Fixed(bounds.height))
            .style(|theme: &Theme| {
                container::Style::default().border(Border {
                    color: theme.palette().primary,
                    width: 3.0,
                    radius: 8.0.into(),
                })
            });
        layers = layers.push(positioned(spotlight, bounds.y, bounds.x));
    }

    let caption: Element<'a, Message> = match layout.caption {
        CaptionPosition::Centered => container(caption).center(Length::Fill).into(),
        CaptionPosition::At { top, left } => positioned(caption, top, left),
    };
    layers.push(caption).into()
}
