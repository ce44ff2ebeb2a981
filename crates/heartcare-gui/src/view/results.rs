//! Results panel shown under the form after a successful prediction.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::component::icon::{icon_check, icon_close, icon_warning};
use crate::component::{risk_gauge, severity_badge};
use crate::message::{Message, PredictMessage};
use crate::state::layout::SECTION_PADDING;
use crate::state::{FactorList, FactorView, ResultsView};
use crate::theme::{
    CONTENT_MAX_WIDTH, ICON_SIZE_MD, ICON_SIZE_SM, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XL, SPACING_XS, button_ghost, button_primary, container_card, text_muted,
};

pub fn view_results(results: &ResultsView) -> Element<'_, Message> {
    let close = button(icon_close().size(ICON_SIZE_MD))
        .on_press(Message::Predict(PredictMessage::CloseResults))
        .padding(SPACING_XS)
        .style(button_ghost);

    let mut title = column![text("Your Risk Assessment").size(26)].spacing(SPACING_XS);
    if let Some(timestamp) = &results.timestamp {
        title = title.push(text(format!("Assessed {timestamp}")).size(12).style(text_muted));
    }

    let summary = row![
        risk_gauge(results),
        column![
            text("What this means").size(18),
            text(results.explanation.as_str()).size(15),
        ]
        .spacing(SPACING_SM)
        .width(Length::Fill),
    ]
    .spacing(SPACING_XL)
    .align_y(Alignment::Center);

    let new_assessment = button(text("New Assessment").size(15))
        .on_press(Message::Predict(PredictMessage::NewAssessment))
        .padding([SPACING_SM, SPACING_LG])
        .style(button_primary);

    let panel = column![
        row![title, Space::new().width(Length::Fill), close].align_y(Alignment::Start),
        summary,
        view_factors(&results.factors),
        view_recommendations(results.recommendations),
        container(new_assessment).center_x(Length::Fill),
    ]
    .spacing(SPACING_LG);

    container(
        container(panel)
            .padding(SPACING_XL)
            .width(Length::Fill)
            .max_width(CONTENT_MAX_WIDTH)
            .style(container_card),
    )
    .padding([SECTION_PADDING, SPACING_XL])
    .center_x(Length::Fill)
    .into()
}

fn factor_block(factor: &FactorView) -> Element<'_, Message> {
    let mut heading = row![
        text(factor.title.as_str()).size(16),
        Space::new().width(Length::Fill),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);
    if let Some(value) = &factor.value {
        heading = heading.push(text(value.as_str()).size(13).style(text_muted));
    }
    heading = heading.push(severity_badge(factor.severity.as_str(), factor.tone));

    column![heading, text(factor.description.as_str()).size(14).style(text_muted)]
        .spacing(SPACING_XS)
        .into()
}

fn view_factors(factors: &FactorList) -> Element<'_, Message> {
    let body: Element<'_, Message> = match factors {
        FactorList::Factors(list) => column(list.iter().map(factor_block))
            .spacing(SPACING_MD)
            .into(),
        FactorList::Empty(message) => row![
            icon_check().size(ICON_SIZE_SM),
            text(*message).size(14).style(text_muted),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .into(),
    };

    column![
        row![icon_warning().size(ICON_SIZE_SM), text("Risk Factors").size(18)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
        body,
    ]
    .spacing(SPACING_MD)
    .into()
}

fn view_recommendations<'a>(recommendations: &'static [&'static str; 5]) -> Element<'a, Message> {
    let items = recommendations.iter().map(|item| {
        row![text("•").size(14), text(*item).size(14)]
            .spacing(SPACING_SM)
            .into()
    });

    column![
        text("Recommendations").size(18),
        column(items).spacing(SPACING_SM),
    ]
    .spacing(SPACING_MD)
    .into()
}
