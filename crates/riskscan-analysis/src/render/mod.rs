//! Renderers — output formats for EDA reports.
//!
//! The engine exposes named series, square named matrices, and merge
//! trees; renderers turn one report into a displayable string. Charting
//! proper lives with the consumer.

pub mod json;
pub mod text;

use crate::pipeline::EdaReport;

/// Trait for report rendering.
pub trait Renderer: Send + Sync {
    fn name(&self) -> &'static str;
    fn render(&self, report: &EdaReport) -> Result<String, String>;
}

/// Create a renderer by format name.
pub fn create_renderer(format: &str) -> Option<Box<dyn Renderer>> {
    match format {
        "text" => Some(Box::new(text::TextRenderer::default())),
        "json" => Some(Box::new(json::JsonRenderer)),
        _ => None,
    }
}

/// List all available renderer format names.
pub fn available_formats() -> &'static [&'static str] {
    &["text", "json"]
}
