//! Page chrome: compact navigation, anchor scrolling and reveal-on-scroll.

use std::time::Instant;

use iced::Size;

use super::layout::{NAV_HEIGHT, PageLayout, RevealId};
use super::page::Page;
use super::reveal::RevealTracker;
use super::scroll::ScrollAnimation;

/// Windows narrower than this get the collapsible navigation menu.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

pub const DEFAULT_WINDOW_SIZE: Size = Size::new(1280.0, 800.0);

/// Scroll position reported by the page scrollable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

#[derive(Debug, Clone)]
pub struct ChromeState {
    window: Size,
    nav_open: bool,
    scroll_offset: f32,
    viewport_height: f32,
    content_height: f32,
    animation: Option<ScrollAnimation>,
    layout: PageLayout,
    reveal: RevealTracker,
    now: Instant,
}

impl ChromeState {
    pub fn new(page: Page, window: Size, now: Instant) -> Self {
        let layout = PageLayout::for_page(page);
        let mut state = Self {
            window,
            nav_open: false,
            scroll_offset: 0.0,
            viewport_height: (window.height - NAV_HEIGHT).max(0.0),
            content_height: 0.0,
            animation: None,
            reveal: RevealTracker::new(&layout),
            layout,
            now,
        };
        state.observe();
        state
    }

    // =========================================================================
    // NAVIGATION MENU
    // =========================================================================

    pub fn is_compact(&self) -> bool {
        self.window.width < COMPACT_BREAKPOINT
    }

    /// Whether the menu toggle is shown at all.
    pub fn has_toggle(&self) -> bool {
        self.is_compact()
    }

    pub fn nav_open(&self) -> bool {
        self.nav_open
    }

    /// Whether the navigation links are on screen.
    pub fn menu_visible(&self) -> bool {
        !self.is_compact() || self.nav_open
    }

    /// Flips the compact menu. Returns `false` when there is no toggle.
    pub fn toggle_nav(&mut self) -> bool {
        if !self.has_toggle() {
            return false;
        }
        self.nav_open = !self.nav_open;
        true
    }

    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }

    // =========================================================================
    // WINDOW AND SCROLLING
    // =========================================================================

    pub fn window(&self) -> Size {
        self.window
    }

    pub fn resize(&mut self, window: Size) {
        self.window = window;
        if !self.is_compact() {
            self.nav_open = false;
        }
        self.viewport_height = (window.height - NAV_HEIGHT).max(0.0);
        self.observe();
    }

    /// Resets chrome for a freshly entered page.
    pub fn enter_page(&mut self, page: Page, now: Instant) {
        self.layout = PageLayout::for_page(page);
        self.reveal = RevealTracker::new(&self.layout);
        self.scroll_offset = 0.0;
        self.content_height = 0.0;
        self.animation = None;
        self.nav_open = false;
        self.now = now;
        self.observe();
    }

    pub fn scrolled(&mut self, metrics: ScrollMetrics, now: Instant) {
        self.scroll_offset = metrics.offset;
        self.viewport_height = metrics.viewport_height;
        self.content_height = metrics.content_height;
        self.now = now;
        self.observe();
    }

    /// Forgets the content height after the page grew or shrank, until the
    /// next scroll report.
    pub fn invalidate_content_height(&mut self) {
        self.content_height = 0.0;
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Starts a smooth scroll to the anchor `id` on the current page.
    ///
    /// Returns the target offset, or `None` when the page has no such anchor.
    pub fn start_scroll_to_anchor(&mut self, id: &str, now: Instant) -> Option<f32> {
        let Some(offset) = self.layout.anchor_offset(id) else {
            tracing::debug!(anchor = id, "no such anchor on this page");
            return None;
        };
        let target = self.clamp_offset(offset);
        self.now = now;
        self.animation = Some(ScrollAnimation::new(self.scroll_offset, target, now));
        Some(target)
    }

    /// Advances animations to `now`. Returns the scroll offset to apply while a
    /// smooth scroll is running.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.now = now;
        let animation = self.animation?;
        let offset = animation.offset_at(now);
        if animation.is_finished(now) {
            self.animation = None;
        }
        self.scroll_offset = offset;
        self.observe();
        Some(offset)
    }

    pub fn is_scrolling(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether frame events are needed.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some() || self.reveal.is_animating(self.now)
    }

    // =========================================================================
    // REVEAL
    // =========================================================================

    /// Reveal progress of a card, `0.0` hidden to `1.0` settled.
    pub fn reveal_progress(&self, id: RevealId) -> f32 {
        self.reveal.progress(id, self.now)
    }

    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.reveal.is_revealed(id)
    }

    fn observe(&mut self) {
        self.reveal
            .observe(self.scroll_offset, self.viewport_height, self.now);
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        let max = self.content_height - self.viewport_height;
        let offset = if max > 0.0 { offset.min(max) } else { offset };
        offset.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::layout::{ANCHOR_FEATURES, HERO_HEIGHT, RevealKind};
    use std::time::Duration;

    fn chrome(page: Page, width: f32) -> (ChromeState, Instant) {
        let now = Instant::now();
        (ChromeState::new(page, Size::new(width, 800.0), now), now)
    }

    #[test]
    fn test_toggle_only_when_compact() {
        let (mut wide, _) = chrome(Page::Home, 1280.0);
        assert!(!wide.has_toggle());
        assert!(!wide.toggle_nav());
        assert!(wide.menu_visible());

        let (mut narrow, _) = chrome(Page::Home, 600.0);
        assert!(!narrow.menu_visible());
        assert!(narrow.toggle_nav());
        assert!(narrow.nav_open());
        assert!(narrow.toggle_nav());
        assert!(!narrow.nav_open());
    }

    #[test]
    fn test_widening_closes_menu() {
        let (mut state, _) = chrome(Page::Home, 600.0);
        state.toggle_nav();
        state.resize(Size::new(1024.0, 800.0));
        assert!(!state.nav_open());
        assert!(state.menu_visible());
    }

    #[test]
    fn test_unknown_anchor_is_noop() {
        let (mut state, now) = chrome(Page::Dashboard, 1280.0);
        assert_eq!(state.start_scroll_to_anchor("nowhere", now), None);
        assert_eq!(state.start_scroll_to_anchor(ANCHOR_FEATURES, now), None);
        assert!(!state.is_scrolling());
        assert_eq!(state.tick(now + Duration::from_millis(50)), None);
    }

    #[test]
    fn test_anchor_scroll_runs_to_target() {
        let (mut state, now) = chrome(Page::Home, 1280.0);
        assert_eq!(state.start_scroll_to_anchor(ANCHOR_FEATURES, now), Some(HERO_HEIGHT));
        assert!(state.is_animating());

        let mid = state.tick(now + Duration::from_millis(200));
        assert!(mid.is_some_and(|y| y > 0.0 && y < HERO_HEIGHT));

        assert_eq!(state.tick(now + Duration::from_millis(500)), Some(HERO_HEIGHT));
        assert!(!state.is_scrolling());
        assert_eq!(state.scroll_offset(), HERO_HEIGHT);
    }

    #[test]
    fn test_target_clamped_to_scrollable_range() {
        let (mut state, now) = chrome(Page::Home, 1280.0);
        state.scrolled(
            ScrollMetrics {
                offset: 0.0,
                viewport_height: 700.0,
                content_height: 900.0,
            },
            now,
        );
        assert_eq!(state.start_scroll_to_anchor(ANCHOR_FEATURES, now), Some(200.0));
    }

    #[test]
    fn test_enter_page_resets_reveal_and_scroll() {
        let (mut state, now) = chrome(Page::Home, 1280.0);
        let card = RevealId::new(RevealKind::ProcessStep, 0);
        assert!(!state.is_revealed(card));
        state.scrolled(
            ScrollMetrics {
                offset: 600.0,
                viewport_height: 736.0,
                content_height: 3000.0,
            },
            now,
        );
        assert!(state.is_revealed(card));

        state.enter_page(Page::Home, now);
        assert!(!state.is_revealed(card));
        assert_eq!(state.scroll_offset(), 0.0);
    }
}
