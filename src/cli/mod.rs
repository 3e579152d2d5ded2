//! CLI layer: argument definitions and execution context

pub mod args;
pub mod context;

pub use args::Cli;
pub use context::Context;
