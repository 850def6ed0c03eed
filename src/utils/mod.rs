//! Helper utilities

pub mod helpers;

pub use helpers::{default_report_filename, slugify};
