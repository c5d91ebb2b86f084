//! JSON renderer — the full report as a machine-readable document.

use super::Renderer;
use crate::pipeline::EdaReport;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, report: &EdaReport) -> Result<String, String> {
        serde_json::to_string_pretty(report).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::EdaPipeline;
    use riskscan_core::types::{TagSchema, TagTable};

    #[test]
    fn test_json_round_trips_as_value() {
        let table = TagTable::new(
            TagSchema::new(["a", "b"]).unwrap(),
            vec![vec![true, false], vec![true, true]],
        )
        .unwrap();
        let report = EdaPipeline::with_defaults().run(&table).unwrap();
        let rendered = JsonRenderer.render(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert!(value.get("frequencies").is_some());
        assert!(value.get("dendrogram").is_some());
    }
}
