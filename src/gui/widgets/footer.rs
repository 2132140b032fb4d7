use iced::{
    Alignment::Center,
    Element, Length,
    widget::{button, column, container, row, text},
};

use crate::{
    core::{i18n::Translation, share::SharePlatform},
    gui::{Message, message::FooterMessage},
};

pub fn footer<'a>(t: &'static Translation, scale: f32) -> Element<'a, Message> {
    let mut share = row![text(format!("{}:", t.share)).size(14.0 * scale)]
        .spacing(8)
        .align_y(Center);
    for platform in SharePlatform::ALL {
        share = share.push(
            button(text(platform.label()).size(14.0 * scale))
                .on_press(Message::Footer(FooterMessage::Share(platform)))
                .style(button::secondary),
        );
    }
    share = share.push(
        button(text("Copy link").size(14.0 * scale))
            .on_press(Message::Footer(FooterMessage::CopyLink))
            .style(button::text),
    );

    let feedback = button(text(t.feedback).size(14.0 * scale))
        .on_press(Message::Footer(FooterMessage::Feedback))
        .style(button::text);

    container(
        column![
            share,
            feedback,
            text("(C) Noam Gold AI 2026").size(18.0 * scale),
            text("Made with love by Noam Gold").size(12.0 * scale),
            text(t.footer_rights).size(12.0 * scale),
        ]
        .spacing(16)
        .align_x(Center),
    )
    .padding(32)
    .center_x(Length::Fill)
    .into()
}
