//! Services for background tasks.
//!
//! These services provide async functions and tasks for use with Iced's
//! `Task::perform` pattern.

pub mod api;
pub mod scroll;

pub use api::{fetch_feature_importance, fetch_statistics, submit_prediction};
pub use scroll::{PAGE_SCROLL_ID, page_scroll_id, scroll_page_to, snap_page_to_top};
