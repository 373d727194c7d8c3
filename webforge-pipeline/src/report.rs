//! Run reports reconstructed from output metadata.

use serde::{Deserialize, Serialize};
use webforge_core::{GeneratedOutput, QualityScore};

/// Summary of one completed run, lifted back out of the metadata the
/// pipeline stamps onto its output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub run_id: String,
    pub started_at: String,
    pub finished_at: String,
    pub attempts: u32,
    pub quality: QualityScore,
    pub brand_compliant: bool,
    pub style_key: String,
}

impl RunReport {
    /// Rebuild a report from a finished output. Returns `None` when the
    /// output was not produced by a pipeline run.
    pub fn from_output(output: &GeneratedOutput) -> Option<Self> {
        let meta = &output.meta;
        Some(Self {
            run_id: meta.get("runId")?.as_str()?.to_string(),
            started_at: meta.get("startedAt")?.as_str()?.to_string(),
            finished_at: meta.get("finishedAt")?.as_str()?.to_string(),
            attempts: meta.get("attempts")?.as_u64()? as u32,
            quality: serde_json::from_value(meta.get("qualityScore")?.clone()).ok()?,
            brand_compliant: meta.get("brand")?.get("brandCompliant")?.as_bool()?,
            style_key: meta.get("styleProfile")?.as_str()?.to_string(),
        })
    }

    /// Multi-line human-readable summary.
    pub fn format_summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Run {} ({} attempt(s))\n", self.run_id, self.attempts));
        out.push_str(&format!("  Style: {}\n", self.style_key));
        out.push_str(&format!(
            "  Quality: {}/100 (structure {}, styling {}, accessibility {}, ux {})\n",
            self.quality.overall,
            self.quality.structure,
            self.quality.styling,
            self.quality.accessibility,
            self.quality.ux
        ));
        out.push_str(&format!(
            "  Components: {} | Design system: {} | Brand compliant: {}\n",
            self.quality.component_count,
            if self.quality.design_system_compliance { "yes" } else { "no" },
            if self.brand_compliant { "yes" } else { "no" }
        ));
        out
    }
}
