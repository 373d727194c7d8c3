//! Output normalization: surface missing scaffold files as warnings.

use webforge_contract::corpus::{BOOTSTRAP, MAIN_ENTRY, STYLESHEET};
use webforge_core::GeneratedOutput;

/// The scaffold files every generated application must carry.
pub const REQUIRED_FILES: [&str; 3] = [BOOTSTRAP, MAIN_ENTRY, STYLESHEET];

/// Append one warning per absent scaffold file. Content is never
/// synthesized; the warning is the only remediation.
pub fn ensure_minimum_files(output: &mut GeneratedOutput) {
    for path in REQUIRED_FILES {
        if !output.has_file(path) {
            output.push_warning(format!("Missing required file: {path}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_output_gains_no_warnings() {
        let mut output = GeneratedOutput::new("app")
            .with_file(BOOTSTRAP, "bootstrap")
            .with_file(MAIN_ENTRY, "app")
            .with_file(STYLESHEET, "css");
        ensure_minimum_files(&mut output);
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn test_each_missing_file_warns_once() {
        let mut output = GeneratedOutput::new("app").with_file(MAIN_ENTRY, "app");
        ensure_minimum_files(&mut output);
        assert_eq!(output.warnings.len(), 2);
        assert!(output.warnings.contains(&format!("Missing required file: {BOOTSTRAP}")));
        assert!(output.warnings.contains(&format!("Missing required file: {STYLESHEET}")));
    }

    #[test]
    fn test_file_content_is_untouched() {
        let mut output = GeneratedOutput::new("app");
        ensure_minimum_files(&mut output);
        assert!(output.files.is_empty());
        assert_eq!(output.warnings.len(), 3);
    }
}
