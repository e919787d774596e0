//! CLI library components for the Clarus pharmacy analytics tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod pipeline;
pub mod summary;
