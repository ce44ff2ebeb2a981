//! Risk gauge: a gradient disc showing the probability, ringed by an arc
//! filled to the same fraction.

use std::f32::consts::{FRAC_PI_2, TAU};

use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::{Canvas, center, column, container, stack, text};
use iced::{Alignment, Border, Color, Element, Length, Rectangle, Renderer, Theme};

use crate::state::ResultsView;
use crate::theme::{ClinicalColors, GAUGE_SIZE, gradient_background, to_color};

const RING_WIDTH: f32 = 10.0;

struct GaugeRing {
    fill: f32,
    color: Color,
}

impl<M> canvas::Program<M> for GaugeRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - RING_WIDTH / 2.0;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_color(theme.clinical().border_subtle)
                .with_width(RING_WIDTH),
        );

        if self.fill > 0.0 {
            let start = -FRAC_PI_2;
            let end = start + TAU * self.fill.min(1.0);
            let steps = ((end - start) * 24.0).ceil().max(1.0) as usize;
            let arc = Path::new(|builder| {
                for i in 0..=steps {
                    let angle = start + (end - start) * i as f32 / steps as f32;
                    let point = iced::Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    );
                    if i == 0 {
                        builder.move_to(point);
                    } else {
                        builder.line_to(point);
                    }
                }
            });
            frame.stroke(
                &arc,
                Stroke::default().with_color(self.color).with_width(RING_WIDTH),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// `riskGauge`: value and label on the tier's gradient.
pub fn risk_gauge<'a, M: 'a>(results: &ResultsView) -> Element<'a, M> {
    let ring = Canvas::new(GaugeRing {
        fill: results.fill,
        color: to_color(results.tier.accent()),
    })
    .width(Length::Fixed(GAUGE_SIZE))
    .height(Length::Fixed(GAUGE_SIZE));

    let disc_size = GAUGE_SIZE - 3.0 * RING_WIDTH;
    let gauge = results.gauge;
    let disc = container(
        column![
            text(results.risk_value.clone()).size(32),
            text(results.risk_label.clone()).size(14),
        ]
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fixed(disc_size))
    .center_y(Length::Fixed(disc_size))
    .style(move |theme: &Theme| container::Style {
        background: Some(gradient_background(&gauge)),
        text_color: Some(theme.clinical().text_on_accent),
        border: Border {
            radius: (disc_size / 2.0).into(),
            ..Default::default()
        },
        ..Default::default()
    });

    container(stack![ring, center(disc)])
        .width(Length::Fixed(GAUGE_SIZE))
        .height(Length::Fixed(GAUGE_SIZE))
        .into()
}
