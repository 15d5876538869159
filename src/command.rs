//! Thin executors behind each CLI subcommand.

pub mod fix_headers;
pub mod latest_version;
pub mod remove_method;
pub mod render_templates;
