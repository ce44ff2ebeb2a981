//! Reveal-on-scroll tracking.
//!
//! Cards of the observed kinds start hidden and fade in the first time at
//! least [`REVEAL_THRESHOLD`] of their height intersects the viewport, with the
//! viewport's bottom edge pulled up by [`VIEWPORT_BOTTOM_INSET`]. Once revealed,
//! a card stays revealed until the page is entered again.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::layout::{PageLayout, RevealId, Span};

pub const REVEAL_THRESHOLD: f32 = 0.10;
pub const VIEWPORT_BOTTOM_INSET: f32 = 50.0;

/// The fade-in applied to a card once it is revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTransition {
    pub duration: Duration,
    /// Upward travel in pixels while fading in.
    pub translate: f32,
}

pub const REVEAL_TRANSITION: RevealTransition = RevealTransition {
    duration: Duration::from_millis(600),
    translate: 20.0,
};

impl RevealTransition {
    /// Opacity and downward offset at `progress` in `0.0..=1.0`.
    pub fn frame(&self, progress: f32) -> (f32, f32) {
        let eased = ease_out(progress.clamp(0.0, 1.0));
        (eased, self.translate * (1.0 - eased))
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Fraction of `element` that lies inside the shrunken viewport.
///
/// A zero-height element counts as fully visible when its top edge is inside.
pub fn intersection_ratio(element: Span, scroll_offset: f32, viewport_height: f32) -> f32 {
    let view_top = scroll_offset;
    let view_bottom = scroll_offset + (viewport_height - VIEWPORT_BOTTOM_INSET).max(0.0);

    if element.height <= 0.0 {
        return if element.top >= view_top && element.top <= view_bottom {
            1.0
        } else {
            0.0
        };
    }

    let overlap = element.bottom().min(view_bottom) - element.top.max(view_top);
    (overlap.max(0.0) / element.height).min(1.0)
}

/// Observes the revealable elements of one page.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    elements: Vec<(RevealId, Span)>,
    revealed: HashMap<RevealId, Instant>,
}

impl RevealTracker {
    pub fn new(layout: &PageLayout) -> Self {
        Self {
            elements: layout.elements().to_vec(),
            revealed: HashMap::new(),
        }
    }

    /// Checks every unrevealed element against the viewport and marks those
    /// that crossed the threshold. Returns how many were newly revealed.
    pub fn observe(&mut self, scroll_offset: f32, viewport_height: f32, now: Instant) -> usize {
        let mut newly = 0;
        for (id, span) in &self.elements {
            if self.revealed.contains_key(id) {
                continue;
            }
            if intersection_ratio(*span, scroll_offset, viewport_height) >= REVEAL_THRESHOLD {
                self.revealed.insert(*id, now);
                newly += 1;
            }
        }
        if newly > 0 {
            tracing::trace!(newly, total = self.revealed.len(), "revealed elements");
        }
        newly
    }

    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.revealed.contains_key(&id)
    }

    /// Transition progress of an element at `now`; `0.0` while hidden.
    ///
    /// Elements that are not observed on this page are drawn fully visible.
    pub fn progress(&self, id: RevealId, now: Instant) -> f32 {
        if !self.elements.iter().any(|(observed, _)| *observed == id) {
            return 1.0;
        }
        match self.revealed.get(&id) {
            Some(at) => {
                let elapsed = now.saturating_duration_since(*at).as_secs_f32();
                (elapsed / REVEAL_TRANSITION.duration.as_secs_f32()).min(1.0)
            }
            None => 0.0,
        }
    }

    /// Whether any revealed element is still mid-transition.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.revealed
            .values()
            .any(|at| now.saturating_duration_since(*at) < REVEAL_TRANSITION.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::layout::RevealKind;
    use crate::state::page::Page;

    #[test]
    fn test_ratio_counts_inset_viewport() {
        let card = Span::new(900.0, 100.0);
        // viewport 0..1000, shrunk to 0..950: half the card is inside
        assert!((intersection_ratio(card, 0.0, 1000.0) - 0.5).abs() < f32::EPSILON);
        // shrunk bottom at 905: only 5% inside
        assert!(intersection_ratio(card, 0.0, 955.0) < REVEAL_THRESHOLD);
        // shrunk bottom at 910: exactly the threshold
        assert!(intersection_ratio(card, 0.0, 960.0) >= REVEAL_THRESHOLD);
    }

    #[test]
    fn test_ratio_outside_is_zero() {
        let card = Span::new(2000.0, 100.0);
        assert_eq!(intersection_ratio(card, 0.0, 800.0), 0.0);
        assert_eq!(intersection_ratio(card, 3000.0, 800.0), 0.0);
    }

    #[test]
    fn test_zero_height_element() {
        assert_eq!(intersection_ratio(Span::new(100.0, 0.0), 0.0, 800.0), 1.0);
        assert_eq!(intersection_ratio(Span::new(900.0, 0.0), 0.0, 800.0), 0.0);
    }

    #[test]
    fn test_reveal_is_one_way() {
        let layout = PageLayout::for_page(Page::Home);
        let mut tracker = RevealTracker::new(&layout);
        let now = Instant::now();
        let first = RevealId::new(RevealKind::FeatureCard, 0);

        assert_eq!(tracker.observe(0.0, 400.0, now), 0);
        assert!(!tracker.is_revealed(first));

        assert!(tracker.observe(500.0, 800.0, now) > 0);
        assert!(tracker.is_revealed(first));

        // scrolling back to the top keeps it revealed
        tracker.observe(0.0, 400.0, now);
        assert!(tracker.is_revealed(first));
    }

    #[test]
    fn test_progress_follows_transition() {
        let layout = PageLayout::for_page(Page::Dashboard);
        let mut tracker = RevealTracker::new(&layout);
        let start = Instant::now();
        let card = RevealId::new(RevealKind::StatCard, 0);

        assert_eq!(tracker.progress(card, start), 0.0);
        tracker.observe(0.0, 2000.0, start);
        assert_eq!(tracker.progress(card, start), 0.0);
        assert!(tracker.is_animating(start + Duration::from_millis(300)));
        assert_eq!(tracker.progress(card, start + Duration::from_millis(600)), 1.0);
        assert!(!tracker.is_animating(start + Duration::from_millis(600)));
    }

    #[test]
    fn test_unobserved_element_is_visible() {
        let tracker = RevealTracker::new(&PageLayout::for_page(Page::Predict));
        let id = RevealId::new(RevealKind::FeatureCard, 0);
        assert_eq!(tracker.progress(id, Instant::now()), 1.0);
    }

    #[test]
    fn test_transition_frame_endpoints() {
        assert_eq!(REVEAL_TRANSITION.frame(0.0), (0.0, 20.0));
        assert_eq!(REVEAL_TRANSITION.frame(1.0), (1.0, 0.0));
    }
}
