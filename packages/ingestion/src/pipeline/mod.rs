//! The ingestion pipeline: fetch → extract → enrich → persist.

pub mod enrich;
pub mod ingest;
pub mod prompts;

pub use enrich::enrich;
pub use ingest::Pipeline;
pub use prompts::{format_summary_prompt, format_tag_prompt};
