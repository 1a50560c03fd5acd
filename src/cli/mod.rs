//! Command-line interface module.

mod args;
pub mod batch;
pub mod check;
pub mod common;
pub mod render;
pub mod schema;

pub use args::{BatchArgs, Cli, Commands, OutputArgs, OutputFormat, PageArgs};
