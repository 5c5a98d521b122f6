//! CLI library components for the catch-up report generator.

pub mod logging;
pub mod pipeline;
