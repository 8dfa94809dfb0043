//! CLI library components for the deposit converter.

pub mod logging;
pub mod pipeline;
