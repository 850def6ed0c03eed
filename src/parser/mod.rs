//! Parsing of schedule-change context documents

pub mod context;

pub use context::{load_context, parse_context};
