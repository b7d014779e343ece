//! CLI library components for the GST return builder.

pub mod logging;
pub mod pipeline;
