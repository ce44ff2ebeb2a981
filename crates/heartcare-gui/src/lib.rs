//! HeartCare - GUI Library
//!
//! Core application types for the HeartCare desktop client: a landing page,
//! an analytics dashboard and a cardiovascular risk assessment form backed
//! by the prediction API.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;

// Service modules for background tasks
pub mod service;
