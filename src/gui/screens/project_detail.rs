use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Id, button, column, container, row, text},
};

use crate::{
    core::{
        catalogue::ProjectRecord,
        i18n::ProjectDetails,
        navigation::{DetailSection, DetailView},
        state::AppState,
    },
    gui::screens::{Screen, ScreenEffects, ScreenMessage, ViewContext, bubble},
};

#[derive(Debug, Clone)]
pub struct ProjectDetailScreen;

#[derive(Debug, Clone)]
pub enum ProjectDetailMessage {
    Back,
    VisitWebsite(&'static str),
}

impl Screen for ProjectDetailScreen {
    type Message = ProjectDetailMessage;
    type ParentMessage = ScreenEffects;

    fn view<'a>(
        &'a self,
        state: &'a AppState,
        ctx: ViewContext,
    ) -> Element<'a, ScreenMessage<Self>> {
        match state.detail() {
            Some(DetailView::Found { record, content }) => found(record, content, ctx),
            Some(DetailView::NotFound { .. }) | None => not_found(ctx.scale),
        }
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        let effects = match message {
            ProjectDetailMessage::Back => state.back(),
            ProjectDetailMessage::VisitWebsite(link) => state.visit_site(link),
        };
        bubble(effects)
    }
}

fn not_found<'a>(scale: f32) -> Element<'a, ScreenMessage<ProjectDetailScreen>> {
    container(
        column![
            text("Project Not Found").size(28.0 * scale),
            button(text("Return Home").size(16.0 * scale))
                .on_press(ScreenMessage::ScreenMessage(ProjectDetailMessage::Back))
                .style(button::text),
        ]
        .spacing(16)
        .align_x(Center),
    )
    .padding(96)
    .center_x(Length::Fill)
    .into()
}

fn found<'a>(
    record: &'static ProjectRecord,
    content: &'a ProjectDetails,
    ctx: ViewContext,
) -> Element<'a, ScreenMessage<ProjectDetailScreen>> {
    let scale = ctx.scale;
    let back = button(text("Back to Projects").size(16.0 * scale))
        .on_press(ScreenMessage::ScreenMessage(ProjectDetailMessage::Back))
        .style(button::text);

    let visit = button(text("Visit Website").size(16.0 * scale))
        .on_press(ScreenMessage::ScreenMessage(
            ProjectDetailMessage::VisitWebsite(record.external_link),
        ))
        .padding(16)
        .style(button::primary);

    let overview = section(
        DetailSection::Overview,
        ctx.focused_section,
        column![
            text("About the Project").size(24.0 * scale),
            text(content.long_description).size(16.0 * scale),
        ]
        .spacing(12)
        .align_x(ctx.text_alignment()),
    );

    let mut feature_list = column![].spacing(8).align_x(ctx.text_alignment());
    for feature in content.features {
        feature_list = feature_list.push(text(format!("• {feature}")).size(16.0 * scale));
    }
    let features = section(
        DetailSection::Features,
        ctx.focused_section,
        column![text("Key Features").size(24.0 * scale), feature_list]
            .spacing(12)
            .align_x(ctx.text_alignment()),
    );

    let header = column![
        text(content.title).size(40.0 * scale),
        text(content.description).size(20.0 * scale),
        row![visit, text(record.external_link).size(12.0 * scale)]
            .spacing(16)
            .align_y(Center),
    ]
    .spacing(16)
    .align_x(ctx.text_alignment());

    container(
        column![back, header, overview, features]
            .spacing(32)
            .align_x(ctx.text_alignment()),
    )
    .padding(32)
    .width(Length::Fill)
    .into()
}

/// Detail section, outlined when it is the anchor target. The container is
/// tagged with the section's anchor so it can be measured and scrolled to.
fn section<'a>(
    which: DetailSection,
    focused: Option<DetailSection>,
    content: impl Into<Element<'a, ScreenMessage<ProjectDetailScreen>>>,
) -> Element<'a, ScreenMessage<ProjectDetailScreen>> {
    let boxed = container(content)
        .id(Id::new(which.anchor()))
        .padding(16)
        .width(Length::Fill);
    if focused == Some(which) {
        boxed.style(container::bordered_box).into()
    } else {
        boxed.into()
    }
}
