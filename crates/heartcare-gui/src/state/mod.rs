//! Application state management.
//!
//! - **AppState**: root state, one slice per page module
//! - **DashboardState**: statistics cards and charts
//! - **PredictionState**: assessment form, request sequencing, results
//! - **ChromeState**: navigation menu, anchor scrolling, reveal-on-scroll
//! - **Settings**: persisted preferences

mod app_state;
pub mod chrome;
pub mod dashboard;
pub mod layout;
pub mod page;
pub mod prediction;
pub mod reveal;
pub mod scroll;
mod settings;

pub use app_state::AppState;
pub use chrome::{COMPACT_BREAKPOINT, ChromeState, ScrollMetrics};
pub use dashboard::{DashboardState, LoadPhase, STAT_PLACEHOLDER};
pub use layout::{PageLayout, RevealId, RevealKind};
pub use page::{LinkTarget, Page};
pub use prediction::{
    ALERT_MESSAGE, Completion, FactorList, FactorView, FlowPhase, PredictionState, RequestId,
    ResultsView, Submission,
};
pub use reveal::{REVEAL_TRANSITION, RevealTracker, RevealTransition};
pub use scroll::ScrollAnimation;
pub use settings::{DisplaySettings, Settings};
