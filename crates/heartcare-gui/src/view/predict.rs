//! Risk assessment page: the patient form and, after a prediction, the
//! results panel below it.

use heartcare_model::{ChoiceOption, FieldKind, PatientField};
use iced::widget::{Space, button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use super::results::view_results;
use super::section;
use crate::message::{Message, PredictMessage};
use crate::state::layout::{
    FORM_ACTIONS_HEIGHT, FORM_COLUMNS, FORM_NOTICE_HEIGHT, FORM_ROW_GAP, FORM_ROW_HEIGHT,
    PAGE_HEADER_HEIGHT, form_section_height,
};
use crate::state::{AppState, PredictionState};
use crate::theme::{
    CONTENT_MAX_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
    button_primary, button_secondary, text_danger, text_input_default, text_input_missing,
    text_muted,
};

pub fn view_predict(state: &AppState) -> Element<'_, Message> {
    let prediction = &state.prediction;

    let mut page = column![
        view_header(),
        section(
            "Patient Data",
            "All thirteen fields are required.".to_string(),
            view_form(prediction),
            form_section_height(),
        ),
    ]
    .width(Length::Fill);

    if let Some(results) = prediction.results() {
        page = page.push(view_results(results));
    }

    page.into()
}

fn view_header<'a>() -> Element<'a, Message> {
    container(
        column![
            text("Heart Attack Risk Assessment").size(32),
            text("Enter the patient's clinical measurements to estimate their risk.")
                .size(15)
                .style(text_muted),
        ]
        .spacing(SPACING_SM)
        .max_width(CONTENT_MAX_WIDTH),
    )
    .padding([0.0, SPACING_XL])
    .center_x(Length::Fill)
    .center_y(Length::Fixed(PAGE_HEADER_HEIGHT))
    .into()
}

/// Suggested range shown as the placeholder of a numeric field.
fn range_hint(min: f64, max: f64, unit: Option<&str>) -> String {
    match unit {
        Some(unit) => format!("{min}–{max} {unit}"),
        None => format!("{min}–{max}"),
    }
}

fn field_changed(field: PatientField) -> impl Fn(String) -> Message {
    move |value| Message::Predict(PredictMessage::FieldChanged(field, value))
}

fn view_field(prediction: &PredictionState, field: PatientField) -> Element<'_, Message> {
    let missing = prediction.is_missing(field);
    let value = prediction.form().get(field);

    let input: Element<'_, Message> = match field.kind() {
        FieldKind::Number { min, max, unit, .. } => {
            text_input(&range_hint(min, max, unit), value)
                .on_input(field_changed(field))
                .on_submit(Message::Predict(PredictMessage::Submit))
                .padding(SPACING_SM)
                .style(move |theme, status| {
                    if missing {
                        text_input_missing(theme, status)
                    } else {
                        text_input_default(theme, status)
                    }
                })
                .into()
        }
        FieldKind::Choice(options) => {
            let on_change = field_changed(field);
            pick_list(options, field.choice_for(value), move |choice: ChoiceOption| {
                on_change(choice.value.to_string())
            })
            .placeholder("Select...")
            .padding(SPACING_SM)
            .width(Length::Fill)
            .into()
        }
    };

    let mut label = row![text(field.label()).size(13)].spacing(SPACING_XS);
    if missing {
        label = label.push(text("required").size(12).style(text_danger));
    }

    column![label, input]
        .spacing(SPACING_XS)
        .width(Length::Fill)
        .height(Length::Fixed(FORM_ROW_HEIGHT))
        .into()
}

fn view_form(prediction: &PredictionState) -> Element<'_, Message> {
    let mut form = column![].spacing(FORM_ROW_GAP);
    for fields in PatientField::ALL.chunks(FORM_COLUMNS) {
        let mut line = row![].spacing(SPACING_LG);
        for slot in 0..FORM_COLUMNS {
            line = line.push(match fields.get(slot) {
                Some(&field) => view_field(prediction, field),
                None => Space::new().width(Length::Fill).into(),
            });
        }
        form = form.push(line);
    }

    let notice: Element<'_, Message> = if prediction.missing().is_empty() {
        Space::new().into()
    } else {
        let names: Vec<&str> = prediction.missing().iter().map(PatientField::label).collect();
        text(format!("Please fill in all fields: {}", names.join(", ")))
            .size(13)
            .style(text_danger)
            .into()
    };

    let submitting = prediction.is_loading();
    let actions = row![
        Space::new().width(Length::Fill),
        button(text("Reset").size(15))
            .on_press_maybe((!submitting).then_some(Message::Predict(PredictMessage::Reset)))
            .padding([SPACING_SM, SPACING_LG])
            .style(button_secondary),
        button(text("Predict Risk").size(15))
            .on_press_maybe((!submitting).then_some(Message::Predict(PredictMessage::Submit)))
            .padding([SPACING_SM, SPACING_LG])
            .style(button_primary),
    ]
    .spacing(SPACING_MD)
    .align_y(Alignment::Center);

    column![
        form,
        container(notice).center_y(Length::Fixed(FORM_NOTICE_HEIGHT)),
        container(actions)
            .width(Length::Fill)
            .center_y(Length::Fixed(FORM_ACTIONS_HEIGHT)),
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_hint_with_unit() {
        assert_eq!(range_hint(1.0, 120.0, Some("years")), "1–120 years");
    }

    #[test]
    fn test_range_hint_fractional_without_unit() {
        assert_eq!(range_hint(0.0, 10.0, None), "0–10");
        assert_eq!(range_hint(0.5, 6.2, None), "0.5–6.2");
    }
}
