//! CLI library components for the HeartCare client.

pub mod input;
pub mod logging;
pub mod render;
