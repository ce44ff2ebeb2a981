//! Reusable UI components.
//!
//! - `chart`: canvas rendering of dashboard chart specs
//! - `gauge`: the results risk gauge
//! - `badge`: severity badges
//! - `modal`: alert dialog and loading overlay
//! - `reveal`: cards that fade in on scroll
//! - `icon`: Lucide icon helpers

pub mod badge;
pub mod chart;
pub mod gauge;
pub mod icon;
pub mod modal;
pub mod reveal;

pub use badge::severity_badge;
pub use chart::{chart_canvas, chart_legend};
pub use gauge::risk_gauge;
pub use modal::{alert_modal, loading_overlay, modal};
pub use reveal::reveal_card;
