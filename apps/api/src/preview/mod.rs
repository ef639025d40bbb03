// Preview: pure document → presentational tree projection (Modern / Classic),
// HTML rendering of that tree, and the export payload built from it.

pub mod export;
pub mod html;
pub mod projection;

pub use export::{build_export, ExportPayload};
pub use projection::{project, ResumeView};
