//! Text renderer — human-readable terminal output.

use std::fmt::Write;

use super::Renderer;
use crate::pipeline::EdaReport;

/// Width of the widest frequency bar, in characters.
const BAR_WIDTH: usize = 40;

/// Text renderer for human-readable terminal output.
pub struct TextRenderer {
    pub heatmap: bool,
}

impl TextRenderer {
    pub fn new(heatmap: bool) -> Self {
        Self { heatmap }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Renderer for TextRenderer {
    fn name(&self) -> &'static str {
        "text"
    }

    fn render(&self, report: &EdaReport) -> Result<String, String> {
        let mut out = String::new();

        writeln!(out, "Tag frequencies (ranked)").map_err(|e| e.to_string())?;
        let max = report
            .top_frequencies
            .iter()
            .map(|(_, count)| *count)
            .max()
            .unwrap_or(0);
        for (name, count) in &report.top_frequencies {
            let bar = if max == 0 {
                0
            } else {
                (*count as usize * BAR_WIDTH).div_ceil(max as usize)
            };
            writeln!(out, "  {name:<30} {count:>6} {}", "#".repeat(bar))
                .map_err(|e| e.to_string())?;
        }

        if self.heatmap && !report.phi.is_empty() {
            writeln!(out, "\nPhi coefficients").map_err(|e| e.to_string())?;
            for (i, row_name) in report.phi.columns().iter().enumerate() {
                let cells: Vec<String> = (0..report.phi.len())
                    .map(|j| format!("{:.2}", report.phi.get(i, j)))
                    .collect();
                writeln!(out, "  {row_name:<30} {}", cells.join(" ")).map_err(|e| e.to_string())?;
            }
        }

        writeln!(out, "\nRelated pairs (ranked)").map_err(|e| e.to_string())?;
        for pair in &report.related_pairs {
            writeln!(out, "  {} & {}  phi={:.4}", pair.a, pair.b, pair.phi)
                .map_err(|e| e.to_string())?;
        }

        writeln!(
            out,
            "\nDendrogram ({} leaves, {} merges)",
            report.dendrogram.num_leaves(),
            report.dendrogram.merges().len()
        )
        .map_err(|e| e.to_string())?;
        for (step, merge) in report.dendrogram.merges().iter().enumerate() {
            writeln!(
                out,
                "  [{:>3}] {} + {} -> size {} @ {:.4}",
                step, merge.left, merge.right, merge.size, merge.distance
            )
            .map_err(|e| e.to_string())?;
        }

        Ok(out)
    }
}
