//! Analytics dashboard: statistic cards and charts.

use heartcare_model::{ChartSpec, StatDisplay, format_percent};
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::{card_grid, section};
use crate::component::icon::{icon_loader, icon_refresh};
use crate::component::{chart_canvas, chart_legend, reveal_card};
use crate::message::{ChromeMessage, DashboardMessage, Message};
use crate::state::layout::{
    CHART_CARD_HEIGHT, CHART_COLUMNS, CHART_COUNT, PAGE_HEADER_HEIGHT, STAT_CARD_COUNT,
    STAT_CARD_HEIGHT, card_section_height,
};
use crate::state::{AppState, DashboardState, RevealId, RevealKind};
use crate::theme::{
    CONTENT_MAX_WIDTH, ICON_SIZE_SM, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
    button_ghost, button_primary, container_card, text_muted,
};

/// Canvas height inside a chart card, leaving room for title and legend.
const CHART_CANVAS_HEIGHT: f32 = 250.0;

pub fn view_dashboard(state: &AppState) -> Element<'_, Message> {
    column![
        view_header(&state.dashboard),
        view_statistics(state),
        view_charts(&state.dashboard),
    ]
    .width(Length::Fill)
    .into()
}

fn view_header(dashboard: &DashboardState) -> Element<'_, Message> {
    let refresh = button(
        row![icon_refresh().size(ICON_SIZE_SM), text("Refresh").size(14)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .on_press_maybe(
        (!dashboard.is_loading()).then_some(Message::Dashboard(DashboardMessage::Refresh)),
    )
    .padding([SPACING_SM, SPACING_MD])
    .style(button_primary);

    let to_charts = button(text("Jump to charts").size(14))
        .on_press(Message::Chrome(ChromeMessage::LinkClicked("#charts")))
        .padding([SPACING_SM, SPACING_MD])
        .style(button_ghost);

    let status: Element<'_, Message> = if dashboard.is_loading() {
        row![
            icon_loader().size(ICON_SIZE_SM),
            text("Loading statistics").size(13).style(text_muted),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center)
        .into()
    } else {
        Space::new().into()
    };

    let content = container(
        row![
            column![
                text("Analytics Dashboard").size(32),
                text("Prediction volume, risk mix and model insight.")
                    .size(15)
                    .style(text_muted),
            ]
            .spacing(SPACING_SM),
            Space::new().width(Length::Fill),
            status,
            to_charts,
            refresh,
        ]
        .spacing(SPACING_MD)
        .align_y(Alignment::Center),
    )
    .max_width(CONTENT_MAX_WIDTH);

    container(content)
        .padding([0.0, SPACING_XL])
        .center_x(Length::Fill)
        .center_y(Length::Fixed(PAGE_HEADER_HEIGHT))
        .into()
}

/// Secondary line under the statistics heading, from the optional fields.
fn demographics_line(dashboard: &DashboardState) -> String {
    let Some(stats) = dashboard.stats() else {
        return "Totals across every assessment the backend has scored.".to_string();
    };

    let mut parts = Vec::new();
    if let Some(age) = stats.average_age {
        parts.push(format!("Average age {age:.1}"));
    }
    if let Some(male) = stats.male_percentage {
        parts.push(format!("{} male", format_percent(male)));
    }
    if let Some(female) = stats.female_percentage {
        parts.push(format!("{} female", format_percent(female)));
    }

    if parts.is_empty() {
        "Totals across every assessment the backend has scored.".to_string()
    } else {
        parts.join(" · ")
    }
}

fn view_statistics(state: &AppState) -> Element<'_, Message> {
    let dashboard = &state.dashboard;
    let cards = StatDisplay::ALL
        .into_iter()
        .enumerate()
        .map(|(index, display)| {
            let content = column![
                text(dashboard.stat_text(display)).size(36),
                text(display.label()).size(14).style(text_muted),
            ]
            .spacing(SPACING_SM)
            .into();
            let progress = state
                .chrome
                .reveal_progress(RevealId::new(RevealKind::StatCard, index));
            reveal_card(content, STAT_CARD_HEIGHT, progress)
        })
        .collect();

    section(
        "Statistics",
        demographics_line(dashboard),
        card_grid(cards, STAT_CARD_COUNT),
        card_section_height(STAT_CARD_COUNT, STAT_CARD_COUNT, STAT_CARD_HEIGHT),
    )
}

fn chart_card(spec: &ChartSpec) -> Element<'_, Message> {
    let mut header = column![text(spec.title()).size(18)].spacing(SPACING_XS);
    if let Some(caption) = spec.source.caption() {
        header = header.push(text(caption).size(12).style(text_muted));
    }

    let mut body = column![header, chart_canvas(spec, CHART_CANVAS_HEIGHT)].spacing(SPACING_MD);
    if spec.kind.is_radial() {
        body = body.push(chart_legend(spec));
    }

    container(body)
        .padding(SPACING_LG)
        .width(Length::Fill)
        .height(Length::Fixed(CHART_CARD_HEIGHT))
        .clip(true)
        .style(container_card)
        .into()
}

fn view_charts(dashboard: &DashboardState) -> Element<'_, Message> {
    let height = card_section_height(CHART_COUNT, CHART_COLUMNS, CHART_CARD_HEIGHT);

    let body: Element<'_, Message> = if dashboard.charts().is_empty() {
        container(
            row![
                icon_loader().size(ICON_SIZE_SM),
                text("Loading charts").size(14).style(text_muted),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
        )
        .center_x(Length::Fill)
        .padding(SPACING_XL)
        .into()
    } else {
        card_grid(dashboard.charts().iter().map(chart_card).collect(), CHART_COLUMNS)
    };

    section(
        "Charts",
        "Risk mix from live statistics; other panels may show sample data.".to_string(),
        body,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartcare_model::StatisticsSummary;

    fn summary() -> StatisticsSummary {
        StatisticsSummary {
            total_predictions: 1200,
            high_risk_count: 300,
            medium_risk_count: 400,
            low_risk_count: 500,
            average_age: None,
            male_percentage: None,
            female_percentage: None,
        }
    }

    #[test]
    fn test_demographics_line_without_stats() {
        let dashboard = DashboardState::default();
        assert!(demographics_line(&dashboard).starts_with("Totals"));
    }

    #[test]
    fn test_demographics_line_lists_reported_fields() {
        let mut dashboard = DashboardState::default();
        let generation = dashboard.begin_load();
        let stats = StatisticsSummary {
            average_age: Some(54.3),
            ..summary()
        };
        assert!(dashboard.apply_statistics(generation, Ok(stats)));

        assert_eq!(demographics_line(&dashboard), "Average age 54.3");
    }
}
