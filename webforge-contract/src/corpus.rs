//! Flattened text corpus over a generated artifact set.
//!
//! Every contract rule and every scoring dimension is a lexical predicate
//! over the same view of an output: the concatenated text of its UI files
//! plus path metadata. Building that view once keeps the rules pure and
//! cheap.

use webforge_core::GeneratedOutput;

/// Path of the main entry component.
pub const MAIN_ENTRY: &str = "src/App.tsx";
/// Path of the bootstrap module.
pub const BOOTSTRAP: &str = "src/main.tsx";
/// Path of the global stylesheet.
pub const STYLESHEET: &str = "src/index.css";

/// UI-file extensions considered by lexical rules.
const UI_EXTENSIONS: [&str; 2] = [".tsx", ".jsx"];

/// Whether a path names a UI file.
pub fn is_ui_path(path: &str) -> bool {
    UI_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Whether a path names a component file.
pub fn is_component_path(path: &str) -> bool {
    path.contains("components/") && is_ui_path(path)
}

/// A flattened, read-only view of one generated output.
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Concatenated content of all UI files.
    pub text: String,
    /// Lowercased copy of `text` for case-insensitive idiom checks.
    pub text_lower: String,
    /// All file paths in the output.
    pub paths: Vec<String>,
    /// Byte lengths of each component file.
    pub component_sizes: Vec<usize>,
    /// Content of the main entry file, when present.
    pub main_entry: Option<String>,
}

impl Corpus {
    /// Build the corpus for an output. Called fresh on every validation or
    /// scoring pass; nothing is cached across attempts.
    pub fn from_output(output: &GeneratedOutput) -> Self {
        let mut text = String::new();
        let mut component_sizes = Vec::new();

        for file in &output.files {
            if is_ui_path(&file.path) {
                text.push_str(&file.content);
                text.push('\n');
            }
            if is_component_path(&file.path) {
                component_sizes.push(file.content.len());
            }
        }

        let text_lower = text.to_lowercase();
        let paths = output.files.iter().map(|f| f.path.clone()).collect();
        let main_entry = output.file(MAIN_ENTRY).map(|f| f.content.clone());

        Self { text, text_lower, paths, component_sizes, main_entry }
    }

    /// Count non-overlapping occurrences of a needle in the UI text.
    pub fn count(&self, needle: &str) -> usize {
        self.text.matches(needle).count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    /// Number of component files.
    pub fn component_count(&self) -> usize {
        self.component_sizes.len()
    }

    /// Average component file size in bytes, or 0 with no components.
    pub fn avg_component_size(&self) -> usize {
        if self.component_sizes.is_empty() {
            0
        } else {
            self.component_sizes.iter().sum::<usize>() / self.component_sizes.len()
        }
    }

    pub fn has_path(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    pub fn has_path_containing(&self, fragment: &str) -> bool {
        self.paths.iter().any(|p| p.contains(fragment))
    }

    pub fn has_stylesheet(&self) -> bool {
        self.paths.iter().any(|p| p.ends_with(".css"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webforge_core::GeneratedOutput;

    fn sample() -> GeneratedOutput {
        GeneratedOutput::new("app")
            .with_file("src/App.tsx", "<div className=\"p-4\">app</div>")
            .with_file("src/components/Card.tsx", "<div className=\"card\">x</div>")
            .with_file("src/components/Button.jsx", "<button className=\"b\">y</button>")
            .with_file("src/index.css", "body { margin: 0; }")
            .with_file("README.md", "className= should not count from docs")
    }

    #[test]
    fn test_ui_path_detection() {
        assert!(is_ui_path("src/App.tsx"));
        assert!(is_ui_path("src/components/Button.jsx"));
        assert!(!is_ui_path("src/index.css"));
        assert!(!is_ui_path("README.md"));
    }

    #[test]
    fn test_corpus_only_flattens_ui_files() {
        let corpus = Corpus::from_output(&sample());
        // Three occurrences from UI files; the README mention is excluded.
        assert_eq!(corpus.count("className="), 3);
        assert!(!corpus.contains("margin: 0"));
    }

    #[test]
    fn test_component_detection() {
        let corpus = Corpus::from_output(&sample());
        assert_eq!(corpus.component_count(), 2);
        assert!(corpus.avg_component_size() > 0);
    }

    #[test]
    fn test_path_queries() {
        let corpus = Corpus::from_output(&sample());
        assert!(corpus.has_path(MAIN_ENTRY));
        assert!(corpus.has_path_containing("components/"));
        assert!(corpus.has_stylesheet());
        assert!(corpus.main_entry.is_some());
    }

    #[test]
    fn test_empty_output() {
        let corpus = Corpus::from_output(&GeneratedOutput::new("empty"));
        assert_eq!(corpus.component_count(), 0);
        assert_eq!(corpus.avg_component_size(), 0);
        assert!(!corpus.has_stylesheet());
        assert!(corpus.main_entry.is_none());
    }
}
