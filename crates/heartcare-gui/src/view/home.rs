//! Landing page: hero, features, how it works, about, footer.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::{card_grid, section};
use crate::component::icon::{icon_arrow_right, icon_clipboard_check, icon_layers};
use crate::component::reveal_card;
use crate::message::{ChromeMessage, Message};
use crate::state::layout::{
    FEATURE_CARD_HEIGHT, FEATURE_COLUMNS, FEATURE_COUNT, FOOTER_HEIGHT, HERO_HEIGHT,
    HIGHLIGHT_CARD_HEIGHT, HIGHLIGHT_COUNT, PROCESS_STEP_COUNT, PROCESS_STEP_HEIGHT,
    card_section_height,
};
use crate::state::{AppState, Page, RevealId, RevealKind};
use crate::theme::{
    CONTENT_MAX_WIDTH, ICON_SIZE_SM, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
    button_ghost, button_secondary, container_hero, text_muted,
};

struct Blurb {
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Blurb; FEATURE_COUNT] = [
    Blurb {
        title: "AI-Powered Prediction",
        body: "A trained model estimates heart attack risk from thirteen routine clinical measurements.",
    },
    Blurb {
        title: "Instant Results",
        body: "Submit the form and get a probability, a risk category and an explanation in seconds.",
    },
    Blurb {
        title: "Risk Factor Analysis",
        body: "See which measurements raised the estimate and how severe each factor is.",
    },
    Blurb {
        title: "Personalized Guidance",
        body: "Every result comes with five recommendations matched to its risk tier.",
    },
    Blurb {
        title: "Analytics Dashboard",
        body: "Track prediction volume, risk mix and the features that weigh most in the model.",
    },
    Blurb {
        title: "Private by Design",
        body: "Assessments are not stored by this client. Nothing leaves the configured backend.",
    },
];

const STEPS: [Blurb; PROCESS_STEP_COUNT] = [
    Blurb {
        title: "Enter Data",
        body: "Fill in age, blood pressure, cholesterol and the other clinical inputs.",
    },
    Blurb {
        title: "AI Analysis",
        body: "The backend model scores the measurements against its training data.",
    },
    Blurb {
        title: "Risk Score",
        body: "You get a probability and a Low, Medium or High risk category.",
    },
    Blurb {
        title: "Next Steps",
        body: "Review the contributing factors and the recommended actions.",
    },
];

const HIGHLIGHTS: [Blurb; HIGHLIGHT_COUNT] = [
    Blurb {
        title: "13",
        body: "Clinical inputs",
    },
    Blurb {
        title: "3",
        body: "Risk tiers",
    },
    Blurb {
        title: "5",
        body: "Recommendations per result",
    },
    Blurb {
        title: "8",
        body: "Weighted model features",
    },
];

pub fn view_home(state: &AppState) -> Element<'_, Message> {
    column![
        view_hero(),
        view_features(state),
        view_how_it_works(state),
        view_about(state),
        view_footer(),
    ]
    .width(Length::Fill)
    .into()
}

fn link(href: &'static str) -> Message {
    Message::Chrome(ChromeMessage::LinkClicked(href))
}

fn view_hero<'a>() -> Element<'a, Message> {
    let start = button(
        row![
            icon_clipboard_check().size(ICON_SIZE_SM),
            text("Start Assessment").size(16),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .on_press(link(Page::Predict.path()))
    .padding([SPACING_MD, SPACING_LG])
    .style(button_secondary);

    let dashboard = button(
        row![icon_layers().size(ICON_SIZE_SM), text("View Dashboard").size(16)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .on_press(link(Page::Dashboard.path()))
    .padding([SPACING_MD, SPACING_LG])
    .style(button_secondary);

    let learn_more = button(
        row![text("Learn more").size(15), icon_arrow_right().size(ICON_SIZE_SM)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(link("#features"))
    .padding([SPACING_SM, SPACING_MD])
    .style(button_ghost);

    let content = column![
        text("Predict Heart Attack Risk").size(44),
        text("Cardiovascular risk assessment from routine clinical data, with the reasoning shown.")
            .size(18),
        Space::new().height(SPACING_LG),
        row![start, dashboard].spacing(SPACING_MD),
        learn_more,
    ]
    .spacing(SPACING_MD)
    .align_x(Alignment::Center)
    .max_width(CONTENT_MAX_WIDTH);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(HERO_HEIGHT))
        .padding(SPACING_XL)
        .style(container_hero)
        .into()
}

/// A revealable card with a title over body text.
fn blurb_card<'a>(
    state: &AppState,
    kind: RevealKind,
    index: usize,
    blurb: &'a Blurb,
    title_size: f32,
    height: f32,
) -> Element<'a, Message> {
    let content = column![
        text(blurb.title).size(title_size),
        text(blurb.body).size(14).style(text_muted),
    ]
    .spacing(SPACING_SM)
    .into();

    let progress = state.chrome.reveal_progress(RevealId::new(kind, index));
    reveal_card(content, height, progress)
}

fn view_features(state: &AppState) -> Element<'_, Message> {
    let cards = FEATURES
        .iter()
        .enumerate()
        .map(|(index, blurb)| {
            blurb_card(state, RevealKind::FeatureCard, index, blurb, 20.0, FEATURE_CARD_HEIGHT)
        })
        .collect();

    section(
        "Why HeartCare",
        "Clinical-grade screening that explains itself.".to_string(),
        card_grid(cards, FEATURE_COLUMNS),
        card_section_height(FEATURE_COUNT, FEATURE_COLUMNS, FEATURE_CARD_HEIGHT),
    )
}

fn view_how_it_works(state: &AppState) -> Element<'_, Message> {
    let cards = STEPS
        .iter()
        .enumerate()
        .map(|(index, blurb)| {
            blurb_card(state, RevealKind::ProcessStep, index, blurb, 20.0, PROCESS_STEP_HEIGHT)
        })
        .collect();

    section(
        "How It Works",
        "Four steps from measurements to recommendations.".to_string(),
        card_grid(cards, PROCESS_STEP_COUNT),
        card_section_height(PROCESS_STEP_COUNT, PROCESS_STEP_COUNT, PROCESS_STEP_HEIGHT),
    )
}

fn view_about(state: &AppState) -> Element<'_, Message> {
    let cards = HIGHLIGHTS
        .iter()
        .enumerate()
        .map(|(index, blurb)| {
            blurb_card(state, RevealKind::StatCard, index, blurb, 36.0, HIGHLIGHT_CARD_HEIGHT)
        })
        .collect();

    section(
        "About the Model",
        "A screening aid, not a diagnosis. Always consult a clinician.".to_string(),
        card_grid(cards, HIGHLIGHT_COUNT),
        card_section_height(HIGHLIGHT_COUNT, HIGHLIGHT_COUNT, HIGHLIGHT_CARD_HEIGHT),
    )
}

fn view_footer<'a>() -> Element<'a, Message> {
    let anchor = |label: &'static str, href: &'static str| {
        button(text(label).size(13))
            .on_press(link(href))
            .padding([SPACING_XS, SPACING_SM])
            .style(button_ghost)
    };

    let links = row![
        anchor("Features", "#features"),
        anchor("How it works", "#how-it-works"),
        anchor("About", "#about"),
        anchor("Back to top", "#top"),
    ]
    .spacing(SPACING_SM);

    let content = container(
        row![
            text("HeartCare").size(14).style(text_muted),
            Space::new().width(Length::Fill),
            links,
        ]
        .align_y(Alignment::Center),
    )
    .max_width(CONTENT_MAX_WIDTH);

    container(content)
    .padding([0.0, SPACING_XL])
    .center_x(Length::Fill)
    .center_y(Length::Fixed(FOOTER_HEIGHT))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::layout::{ANCHOR_ABOUT, ANCHOR_FEATURES, ANCHOR_HOW_IT_WORKS};
    use crate::state::{LinkTarget, PageLayout};

    #[test]
    fn test_footer_anchors_exist_on_home() {
        let layout = PageLayout::for_page(Page::Home);
        for href in ["#features", "#how-it-works", "#about", "#top"] {
            let Some(LinkTarget::Anchor(id)) = LinkTarget::parse(href) else {
                panic!("{href} is not an anchor link");
            };
            assert!(layout.anchor_offset(id).is_some(), "{href}");
        }
        assert_eq!(ANCHOR_FEATURES, "features");
        assert_eq!(ANCHOR_HOW_IT_WORKS, "how-it-works");
        assert_eq!(ANCHOR_ABOUT, "about");
    }
}
