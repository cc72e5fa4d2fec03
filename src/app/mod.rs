pub mod commands;

pub use commands::{invoke, list_resources, render_json, render_map, render_summaries, OutputFormat, ResourceKind};
