use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Id, button, column, container, row, text},
};

use crate::{
    core::{
        catalogue::ProjectRecord,
        i18n::{ProjectDetails, Translation},
        state::AppState,
        tour::GRID_ID,
    },
    gui::screens::{Screen, ScreenEffects, ScreenMessage, ViewContext, bubble},
};

const GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone)]
pub struct CatalogueScreen;

#[derive(Debug, Clone)]
pub enum CatalogueMessage {
    OpenProject(&'static str),
    VisitSite(&'static str),
    ClearSearch,
}

impl Screen for CatalogueScreen {
    type Message = CatalogueMessage;
    type ParentMessage = ScreenEffects;

    fn view<'a>(
        &'a self,
        state: &'a AppState,
        ctx: ViewContext,
    ) -> Element<'a, ScreenMessage<Self>> {
        let t = state.translation();
        let hero = column![
            text(t.title).size(44.0 * ctx.scale),
            text(t.subtitle).size(18.0 * ctx.scale),
        ]
        .spacing(16)
        .align_x(Center);

        let projects = state.filtered_view();
        let body: Element<'a, ScreenMessage<Self>> = if projects.is_empty() {
            column![
                text(t.no_results).size(18.0 * ctx.scale),
                text("Try adjusting your search terms").size(14.0 * ctx.scale),
                button(text("Clear search").size(14.0 * ctx.scale))
                    .on_press(ScreenMessage::ScreenMessage(CatalogueMessage::ClearSearch))
                    .style(button::text),
            ]
            .spacing(8)
            .padding(48)
            .align_x(Center)
            .into()
        } else {
            grid(&projects, t, ctx.scale)
        };

        container(column![hero, body].spacing(48).align_x(Center))
            .padding(32)
            .center_x(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        let effects = match message {
            CatalogueMessage::OpenProject(id) => state.open_project(id),
            CatalogueMessage::VisitSite(link) => state.visit_site(link),
            CatalogueMessage::ClearSearch => state.reset_search(),
        };
        bubble(effects)
    }
}

fn grid<'a>(
    projects: &[&'static ProjectRecord],
    t: &'static Translation,
    scale: f32,
) -> Element<'a, ScreenMessage<CatalogueScreen>> {
    let rows = projects
        .chunks(GRID_COLUMNS)
        .map(|chunk| -> Element<'a, ScreenMessage<CatalogueScreen>> {
            let mut cells = row![].spacing(24);
            for record in chunk {
                cells = cells.push(project_card(record, t.project(record.content_key), t, scale));
            }
            // keep card widths equal on the last row
            for _ in chunk.len()..GRID_COLUMNS {
                cells = cells.push(container(column![]).width(Length::FillPortion(1)));
            }
            cells.into()
        });
    container(column(rows).spacing(24).width(Length::Fill))
        .id(Id::new(GRID_ID))
        .width(Length::Fill)
        .into()
}

fn project_card<'a>(
    record: &'static ProjectRecord,
    details: &'static ProjectDetails,
    t: &'static Translation,
    scale: f32,
) -> Element<'a, ScreenMessage<CatalogueScreen>> {
    let actions = row![
        button(text(t.visit_site).size(14.0 * scale))
            .on_press(ScreenMessage::ScreenMessage(CatalogueMessage::OpenProject(
                record.id
            )))
            .style(button::primary),
        button(text(t.go_to_site).size(14.0 * scale))
            .on_press(ScreenMessage::ScreenMessage(CatalogueMessage::VisitSite(
                record.external_link
            )))
            .style(button::secondary),
    ]
    .spacing(12);

    container(
        column![
            text(details.title).size(20.0 * scale),
            text(details.description).size(14.0 * scale),
            actions,
        ]
        .spacing(16),
    )
    .padding(24)
    .width(Length::FillPortion(1))
    .style(container::rounded_box)
    .into()
}
