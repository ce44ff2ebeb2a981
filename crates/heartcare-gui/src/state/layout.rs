//! Fixed page geometry.
//!
//! Every page is a vertical stack of fixed-height blocks, so the content
//! position of each section anchor and each revealable card is known without
//! asking the renderer. Views size their containers from the same constants.

use super::page::Page;

// =============================================================================
// SHARED
// =============================================================================

pub const NAV_HEIGHT: f32 = 64.0;
pub const SECTION_PADDING: f32 = 48.0;
pub const SECTION_HEADER_HEIGHT: f32 = 88.0;
pub const CARD_GAP: f32 = 24.0;
pub const PAGE_HEADER_HEIGHT: f32 = 140.0;

// =============================================================================
// HOME
// =============================================================================

pub const HERO_HEIGHT: f32 = 420.0;

pub const FEATURE_COUNT: usize = 6;
pub const FEATURE_COLUMNS: usize = 3;
pub const FEATURE_CARD_HEIGHT: f32 = 190.0;

pub const PROCESS_STEP_COUNT: usize = 4;
pub const PROCESS_STEP_HEIGHT: f32 = 200.0;

pub const HIGHLIGHT_COUNT: usize = 4;
pub const HIGHLIGHT_CARD_HEIGHT: f32 = 130.0;

pub const FOOTER_HEIGHT: f32 = 80.0;

// =============================================================================
// DASHBOARD
// =============================================================================

pub const STAT_CARD_COUNT: usize = 4;
pub const STAT_CARD_HEIGHT: f32 = 130.0;

pub const CHART_COUNT: usize = 6;
pub const CHART_COLUMNS: usize = 2;
pub const CHART_CARD_HEIGHT: f32 = 380.0;

// =============================================================================
// PREDICT
// =============================================================================

pub const FORM_COLUMNS: usize = 2;
pub const FORM_FIELD_COUNT: usize = 13;
pub const FORM_ROW_HEIGHT: f32 = 76.0;
pub const FORM_ROW_GAP: f32 = 16.0;
pub const FORM_NOTICE_HEIGHT: f32 = 40.0;
pub const FORM_ACTIONS_HEIGHT: f32 = 64.0;

// =============================================================================
// ANCHORS
// =============================================================================

pub const ANCHOR_TOP: &str = "top";
pub const ANCHOR_FEATURES: &str = "features";
pub const ANCHOR_HOW_IT_WORKS: &str = "how-it-works";
pub const ANCHOR_ABOUT: &str = "about";
pub const ANCHOR_STATISTICS: &str = "statistics";
pub const ANCHOR_CHARTS: &str = "charts";
pub const ANCHOR_FORM: &str = "predictionForm";
pub const ANCHOR_RESULTS: &str = "resultsPanel";

/// Elements that fade in when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealKind {
    FeatureCard,
    StatCard,
    ProcessStep,
}

/// A revealable element: its kind and its position among elements of that
/// kind on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealId {
    pub kind: RevealKind,
    pub index: usize,
}

impl RevealId {
    pub const fn new(kind: RevealKind, index: usize) -> Self {
        Self { kind, index }
    }
}

/// A vertical extent in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    pub const fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Height of a grid of `count` cards laid out in `columns`.
pub fn card_grid_height(count: usize, columns: usize, card_height: f32) -> f32 {
    let rows = count.div_ceil(columns.max(1));
    if rows == 0 {
        return 0.0;
    }
    rows as f32 * card_height + (rows - 1) as f32 * CARD_GAP
}

/// Height of a padded section with a header and a card grid.
pub fn card_section_height(count: usize, columns: usize, card_height: f32) -> f32 {
    2.0 * SECTION_PADDING + SECTION_HEADER_HEIGHT + card_grid_height(count, columns, card_height)
}

/// Height of the assessment form section.
pub fn form_section_height() -> f32 {
    let rows = FORM_FIELD_COUNT.div_ceil(FORM_COLUMNS);
    2.0 * SECTION_PADDING
        + SECTION_HEADER_HEIGHT
        + rows as f32 * FORM_ROW_HEIGHT
        + (rows - 1) as f32 * FORM_ROW_GAP
        + FORM_NOTICE_HEIGHT
        + FORM_ACTIONS_HEIGHT
}

/// Anchor offsets and revealable elements of one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    anchors: Vec<(&'static str, f32)>,
    elements: Vec<(RevealId, Span)>,
    height: f32,
}

impl PageLayout {
    pub fn for_page(page: Page) -> Self {
        let mut builder = LayoutBuilder::default();
        builder.anchor(ANCHOR_TOP);

        match page {
            Page::Home => {
                builder.block(HERO_HEIGHT);
                builder.anchor(ANCHOR_FEATURES);
                builder.cards(
                    Some(RevealKind::FeatureCard),
                    FEATURE_COUNT,
                    FEATURE_COLUMNS,
                    FEATURE_CARD_HEIGHT,
                );
                builder.anchor(ANCHOR_HOW_IT_WORKS);
                builder.cards(
                    Some(RevealKind::ProcessStep),
                    PROCESS_STEP_COUNT,
                    PROCESS_STEP_COUNT,
                    PROCESS_STEP_HEIGHT,
                );
                builder.anchor(ANCHOR_ABOUT);
                builder.cards(
                    Some(RevealKind::StatCard),
                    HIGHLIGHT_COUNT,
                    HIGHLIGHT_COUNT,
                    HIGHLIGHT_CARD_HEIGHT,
                );
                builder.block(FOOTER_HEIGHT);
            }
            Page::Dashboard => {
                builder.block(PAGE_HEADER_HEIGHT);
                builder.anchor(ANCHOR_STATISTICS);
                builder.cards(
                    Some(RevealKind::StatCard),
                    STAT_CARD_COUNT,
                    STAT_CARD_COUNT,
                    STAT_CARD_HEIGHT,
                );
                builder.anchor(ANCHOR_CHARTS);
                builder.cards(None, CHART_COUNT, CHART_COLUMNS, CHART_CARD_HEIGHT);
            }
            Page::Predict => {
                builder.block(PAGE_HEADER_HEIGHT);
                builder.anchor(ANCHOR_FORM);
                builder.block(form_section_height());
                builder.anchor(ANCHOR_RESULTS);
            }
        }

        builder.finish()
    }

    /// Content offset of the anchor with this id, if the page has one.
    pub fn anchor_offset(&self, id: &str) -> Option<f32> {
        self.anchors
            .iter()
            .find(|(anchor, _)| *anchor == id)
            .map(|(_, offset)| *offset)
    }

    pub fn elements(&self) -> &[(RevealId, Span)] {
        &self.elements
    }

    /// Height of the fixed blocks (content after the last anchor may extend it).
    pub fn height(&self) -> f32 {
        self.height
    }
}

#[derive(Default)]
struct LayoutBuilder {
    y: f32,
    anchors: Vec<(&'static str, f32)>,
    elements: Vec<(RevealId, Span)>,
}

impl LayoutBuilder {
    fn anchor(&mut self, id: &'static str) {
        self.anchors.push((id, self.y));
    }

    fn block(&mut self, height: f32) {
        self.y += height;
    }

    fn cards(&mut self, kind: Option<RevealKind>, count: usize, columns: usize, height: f32) {
        if let Some(kind) = kind {
            let grid_top = self.y + SECTION_PADDING + SECTION_HEADER_HEIGHT;
            for index in 0..count {
                let row = index / columns.max(1);
                let top = grid_top + row as f32 * (height + CARD_GAP);
                self.elements
                    .push((RevealId::new(kind, index), Span::new(top, height)));
            }
        }
        self.y += card_section_height(count, columns, height);
    }

    fn finish(self) -> PageLayout {
        PageLayout {
            anchors: self.anchors,
            elements: self.elements,
            height: self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_height() {
        assert_eq!(card_grid_height(6, 3, 100.0), 2.0 * 100.0 + CARD_GAP);
        assert_eq!(card_grid_height(4, 4, 100.0), 100.0);
        assert_eq!(card_grid_height(0, 3, 100.0), 0.0);
    }

    #[test]
    fn test_home_anchors_follow_sections() {
        let layout = PageLayout::for_page(Page::Home);
        assert_eq!(layout.anchor_offset(ANCHOR_TOP), Some(0.0));
        assert_eq!(layout.anchor_offset(ANCHOR_FEATURES), Some(HERO_HEIGHT));
        let features = card_section_height(FEATURE_COUNT, FEATURE_COLUMNS, FEATURE_CARD_HEIGHT);
        assert_eq!(
            layout.anchor_offset(ANCHOR_HOW_IT_WORKS),
            Some(HERO_HEIGHT + features)
        );
        assert_eq!(layout.anchor_offset(ANCHOR_RESULTS), None);
    }

    #[test]
    fn test_home_registers_all_three_kinds() {
        let layout = PageLayout::for_page(Page::Home);
        let count = |kind| {
            layout
                .elements()
                .iter()
                .filter(|(id, _)| id.kind == kind)
                .count()
        };
        assert_eq!(count(RevealKind::FeatureCard), FEATURE_COUNT);
        assert_eq!(count(RevealKind::ProcessStep), PROCESS_STEP_COUNT);
        assert_eq!(count(RevealKind::StatCard), HIGHLIGHT_COUNT);
    }

    #[test]
    fn test_second_row_of_features_is_offset() {
        let layout = PageLayout::for_page(Page::Home);
        let first = layout.elements()[0].1;
        let fourth = layout.elements()[3].1;
        assert_eq!(fourth.top - first.top, FEATURE_CARD_HEIGHT + CARD_GAP);
        assert_eq!(first.top, HERO_HEIGHT + SECTION_PADDING + SECTION_HEADER_HEIGHT);
    }

    #[test]
    fn test_charts_are_not_observed() {
        let layout = PageLayout::for_page(Page::Dashboard);
        assert_eq!(layout.elements().len(), STAT_CARD_COUNT);
        assert!(layout.anchor_offset(ANCHOR_CHARTS).is_some());
    }

    #[test]
    fn test_results_follow_form() {
        let layout = PageLayout::for_page(Page::Predict);
        assert_eq!(
            layout.anchor_offset(ANCHOR_RESULTS),
            Some(PAGE_HEADER_HEIGHT + form_section_height())
        );
        assert!(layout.elements().is_empty());
    }
}
