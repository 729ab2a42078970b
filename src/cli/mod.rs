//! Command-line interface module.

mod args;
pub mod check;
pub mod fetch;
pub mod serve;

pub use args::{Cli, Commands, PipelineArgs};
