//! Quality scoring over a generated artifact set.
//!
//! Four independently capped dimensions summed to 0-100. Like the contract
//! rules, every signal here is a lexical fact over the flattened corpus;
//! nothing is compiled or executed.

use regex::Regex;
use std::sync::LazyLock;
use webforge_contract::{BOOTSTRAP, Corpus, MAIN_ENTRY, STYLESHEET};
use webforge_core::{GeneratedOutput, QualityScore};

/// Overall score below which the pipeline asks for another attempt.
pub const RETRY_THRESHOLD: u8 = 80;

/// Cap for each scoring dimension.
const DIMENSION_CAP: u32 = 25;

static CLICKABLE_DIV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<div\b[^>]*onClick").expect("clickable div pattern"));

static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<img\b[^>]*>").expect("img tag pattern"));

static STATE_SETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bset[A-Z]\w*").expect("state setter pattern"));

fn clamp(points: u32) -> u8 {
    points.min(DIMENSION_CAP) as u8
}

/// Structure (0-25): component count, path organization, scaffold files,
/// component size sweet spot.
fn structure_score(corpus: &Corpus) -> u8 {
    let mut points = 0u32;

    points += match corpus.component_count() {
        n if n >= 6 => 10,
        n if n >= 4 => 8,
        n if n >= 3 => 6,
        n if n >= 2 => 4,
        _ => 0,
    };

    if corpus.has_path_containing("components/") {
        points += 3;
    }
    if corpus.has_path_containing("pages/") {
        points += 2;
    }

    if corpus.has_path(BOOTSTRAP) {
        points += 2;
    }
    if corpus.has_path(MAIN_ENTRY) {
        points += 2;
    }
    if corpus.has_path(STYLESHEET) {
        points += 1;
    }

    // Average component length: neither trivial stubs nor monoliths.
    points += match corpus.avg_component_size() {
        400..=3000 => 5,
        200..=399 | 3001..=6000 => 2,
        _ => 0,
    };

    clamp(points)
}

/// Styling (0-25): class density, breakpoint density, layout idioms, and an
/// inverse bonus for avoiding inline styles.
fn styling_score(corpus: &Corpus) -> u8 {
    let mut points = 0u32;
    let class_attrs = corpus.count("className=");

    points += match class_attrs {
        n if n >= 30 => 8,
        n if n >= 15 => 6,
        n if n >= 5 => 3,
        _ => 0,
    };

    let breakpoints: usize =
        ["sm:", "md:", "lg:", "xl:"].iter().map(|m| corpus.count(m)).sum();
    points += match breakpoints {
        n if n >= 10 => 6,
        n if n >= 4 => 4,
        n if n >= 1 => 2,
        _ => 0,
    };

    if corpus.contains("shadow") {
        points += 2;
    }
    if corpus.contains("px-4") && corpus.contains("py-2") {
        points += 2;
    }
    if corpus.contains("gap-") || corpus.contains("space-y-") {
        points += 3;
    }

    // Inline-style discipline only counts once the output is styled at all;
    // an unstyled page earns nothing here.
    if class_attrs > 0 {
        points += match corpus.count("style={") {
            0 => 5,
            1..=2 => 3,
            3..=5 => 1,
            _ => 0,
        };
    }

    clamp(points)
}

/// Accessibility (0-25): semantic landmarks, ARIA density, focus styles,
/// real buttons over clickable divs, alt text on images.
fn accessibility_score(corpus: &Corpus) -> u8 {
    let mut points = 0u32;

    for landmark in ["<header", "<main", "<nav", "<section"] {
        if corpus.contains(landmark) {
            points += 2;
        }
    }

    points += match corpus.count("aria-") {
        n if n >= 8 => 6,
        n if n >= 4 => 4,
        n if n >= 1 => 2,
        _ => 0,
    };

    if corpus.contains("focus-visible:") || corpus.contains("focus:") {
        points += 3;
    }

    if corpus.contains("<button") && !CLICKABLE_DIV.is_match(&corpus.text) {
        points += 4;
    }

    // All images carry alt text; an image-free output passes vacuously.
    if IMG_TAG.find_iter(&corpus.text).all(|m| m.as_str().contains("alt=")) {
        points += 4;
    }

    clamp(points)
}

/// UX (0-25): state management, feedback idioms, hover-state density.
fn ux_score(corpus: &Corpus) -> u8 {
    let mut points = 0u32;

    if corpus.contains("useState(") && STATE_SETTER.is_match(&corpus.text) {
        points += 6;
    }

    if corpus.text_lower.contains("loading") || corpus.text_lower.contains("skeleton") {
        points += 4;
    }
    if corpus.text_lower.contains("empty") || corpus.text_lower.contains("no results") {
        points += 3;
    }
    if corpus.contains("transition") {
        points += 3;
    }

    points += match corpus.count("hover:") {
        n if n >= 8 => 9,
        n if n >= 4 => 6,
        n if n >= 1 => 3,
        _ => 0,
    };

    clamp(points)
}

/// Maximum `<div>`/`<section>` nesting depth across the UI text.
fn layout_depth(corpus: &Corpus) -> usize {
    let mut depth: isize = 0;
    let mut max_depth: isize = 0;
    let mut rest = corpus.text.as_str();

    while let Some(pos) = rest.find('<') {
        rest = &rest[pos..];
        if rest.starts_with("<div") || rest.starts_with("<section") {
            depth += 1;
            max_depth = max_depth.max(depth);
        } else if rest.starts_with("</div") || rest.starts_with("</section") {
            depth = (depth - 1).max(0);
        }
        rest = &rest[1..];
    }

    max_depth as usize
}

/// Score an output. Pure: identical inputs always produce identical scores.
pub fn score(output: &GeneratedOutput) -> QualityScore {
    let corpus = Corpus::from_output(output);

    let structure = structure_score(&corpus);
    let styling = styling_score(&corpus);
    let accessibility = accessibility_score(&corpus);
    let ux = ux_score(&corpus);
    let overall = structure + styling + accessibility + ux;

    let quality = QualityScore {
        structure,
        styling,
        accessibility,
        ux,
        overall,
        component_count: corpus.component_count(),
        design_system_compliance: styling >= 20,
        layout_depth: layout_depth(&corpus),
    };

    tracing::info!(
        overall = quality.overall,
        structure,
        styling,
        accessibility,
        ux,
        "output scored"
    );
    quality
}

/// Whether the pipeline should ask for another attempt.
pub fn should_retry(quality: &QualityScore) -> bool {
    quality.overall < RETRY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use webforge_core::GeneratedOutput;

    fn rich_component(name: &str) -> String {
        format!(
            "export function {name}() {{\n  return (\n    <div className=\"font-mono bg-card \
             p-4 md:p-6 shadow-sm transition hover:bg-surface\">\n      <h3 className=\"text-lg \
             md:text-xl\">{name}</h3>\n      <button aria-label=\"open {name}\" \
             className=\"px-4 py-2 gap-2 hover:bg-card focus:outline-none\">Open</button>\n      \
             <p aria-live=\"polite\" className=\"text-sm\">No results yet; loading…</p>\n      \
             <span className=\"text-xs\">{filler}</span>\n    </div>\n  );\n}}\n",
            name = name,
            filler = "x".repeat(160),
        )
    }

    /// An output meeting every bonus condition in every dimension.
    fn exemplary_output() -> GeneratedOutput {
        let app = "import { useState } from 'react'\n\
                   export default function App() {\n  \
                   const [count, setCount] = useState(0)\n  return (\n    \
                   <div className=\"font-mono bg-background min-h-screen\">\n      \
                   <header className=\"p-4\"><nav className=\"gap-4\">nav</nav></header>\n      \
                   <main className=\"md:p-8\"><section className=\"p-4\">{count}</section></main>\n    \
                   </div>\n  )\n}\n";

        let mut output = GeneratedOutput::new("exemplary app")
            .with_file("src/main.tsx", "import App from './App'\n")
            .with_file("src/App.tsx", app)
            .with_file("src/pages/Home.tsx", "<div className=\"p-4\">home</div>")
            .with_file("src/index.css", "body { margin: 0; }");
        for name in ["Card", "Button", "Table", "Modal", "Badge", "Tabs"] {
            output =
                output.with_file(format!("src/components/{name}.tsx"), rich_component(name));
        }
        output
    }

    #[test]
    fn test_exemplary_output_scores_100() {
        let quality = score(&exemplary_output());
        assert_eq!(quality.structure, 25);
        assert_eq!(quality.styling, 25);
        assert_eq!(quality.accessibility, 25);
        assert_eq!(quality.ux, 25);
        assert_eq!(quality.overall, 100);
        assert_eq!(quality.component_count, 6);
        assert!(quality.design_system_compliance);
        assert!(!should_retry(&quality));
    }

    #[test]
    fn test_bare_output_scores_zero_styling() {
        let output = GeneratedOutput::new("bare")
            .with_file("src/App.tsx", "plain text with no markup at all");
        let quality = score(&output);
        assert_eq!(quality.styling, 0);
        // Only the vacuous alt-text bonus applies.
        assert!(quality.accessibility <= 4);
        assert_eq!(quality.ux, 0);
        assert!(should_retry(&quality));
    }

    #[test]
    fn test_component_count_tiers() {
        let mut output = GeneratedOutput::new("app");
        for i in 0..3 {
            output = output
                .with_file(format!("src/components/C{i}.tsx"), "<div className=\"p\">x</div>");
        }
        let quality = score(&output);
        assert_eq!(quality.component_count, 3);
        // 6 for the count tier, 3 for the components dir.
        assert_eq!(quality.structure, 9);
    }

    #[test]
    fn test_clickable_div_blocks_button_bonus() {
        let with_div = GeneratedOutput::new("app").with_file(
            "src/App.tsx",
            "<button className=\"b\">ok</button><div onClick={go} className=\"d\">bad</div>",
        );
        let with_button = GeneratedOutput::new("app")
            .with_file("src/App.tsx", "<button className=\"b\">ok</button>");

        let penalized = score(&with_div);
        let rewarded = score(&with_button);
        assert_eq!(rewarded.accessibility - penalized.accessibility, 4);
    }

    #[test]
    fn test_missing_alt_blocks_image_bonus() {
        let without_alt = GeneratedOutput::new("app")
            .with_file("src/App.tsx", "<img src=\"a.png\"><img src=\"b.png\" alt=\"b\">");
        let with_alt = GeneratedOutput::new("app")
            .with_file("src/App.tsx", "<img src=\"a.png\" alt=\"a\"><img src=\"b.png\" alt=\"b\">");

        assert_eq!(score(&with_alt).accessibility - score(&without_alt).accessibility, 4);
    }

    #[test]
    fn test_inline_style_bonus_decreases_with_usage() {
        let clean = GeneratedOutput::new("app")
            .with_file("src/App.tsx", "<div className=\"a\">x</div>");
        let noisy = GeneratedOutput::new("app").with_file(
            "src/App.tsx",
            "<div className=\"a\" style={{x}} style={{y}} style={{z}}>x</div>",
        );
        assert!(score(&clean).styling > score(&noisy).styling);
    }

    #[test]
    fn test_layout_depth_tracks_nesting() {
        let output = GeneratedOutput::new("app").with_file(
            "src/App.tsx",
            "<div><section><div>deep</div></section></div><div>flat</div>",
        );
        assert_eq!(score(&output).layout_depth, 3);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let output = exemplary_output();
        assert_eq!(score(&output), score(&output));
    }

    #[test]
    fn test_retry_threshold_boundary() {
        let mut quality = QualityScore::default();
        quality.overall = 79;
        assert!(should_retry(&quality));
        quality.overall = 80;
        assert!(!should_retry(&quality));
    }
}
