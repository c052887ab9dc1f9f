//! Presentation logic with no rendering: merges, hrefs and formatting.

pub mod format;
pub mod links;
pub mod more_docs;
