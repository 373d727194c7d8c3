//! Provider-response parsing.
//!
//! Completions arrive as free text: usually a JSON object, often wrapped in
//! code fences or prose. Extraction takes the outermost brace span and
//! parses that; the pipeline grants one repair re-ask before treating a
//! completion as a hard failure.

use webforge_core::{BuildPlan, ForgeError, GeneratedOutput, Result};

/// Extract the outermost JSON object span from a completion.
pub fn extract_json(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

/// Parse a completion into a generated output.
///
/// An output with no files is treated as malformed: there is nothing to
/// validate or score, so the caller's repair path applies.
pub fn parse_output(raw: &str) -> Result<GeneratedOutput> {
    let json = extract_json(raw)
        .ok_or_else(|| ForgeError::Provider("completion contains no JSON object".to_string()))?;
    let output: GeneratedOutput = serde_json::from_str(json)
        .map_err(|e| ForgeError::Provider(format!("completion is not a valid output: {}", e)))?;
    if output.files.is_empty() {
        return Err(ForgeError::Provider("generated output contains no files".to_string()));
    }
    Ok(output)
}

/// Parse a completion into a build-plan candidate.
pub fn parse_plan(raw: &str) -> Result<BuildPlan> {
    let json = extract_json(raw)
        .ok_or_else(|| ForgeError::Plan("completion contains no JSON object".to_string()))?;
    serde_json::from_str(json)
        .map_err(|e| ForgeError::Plan(format!("completion is not a valid plan: {}", e)))
}
