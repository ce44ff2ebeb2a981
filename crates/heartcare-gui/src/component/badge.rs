//! Severity badge for risk factors.

use heartcare_model::SeverityTone;
use iced::widget::{container, text};
use iced::{Border, Element, Theme};

use crate::theme::{BORDER_RADIUS_FULL, ClinicalColors};

/// Pill showing a severity label, colored by its tone.
pub fn severity_badge<'a, M: 'a>(label: impl Into<String>, tone: SeverityTone) -> Element<'a, M> {
    container(text(label.into()).size(12).style(move |theme: &Theme| {
        let (color, _) = theme.clinical().severity(tone);
        text::Style { color: Some(color) }
    }))
    .padding([4.0, 10.0])
    .style(move |theme: &Theme| {
        let (_, background) = theme.clinical().severity(tone);
        container::Style {
            background: Some(background.into()),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .into()
}
