//! General contract rules.
//!
//! Each rule is an independent pure predicate over the corpus. All rules
//! run on every validation pass; violations accumulate, nothing
//! short-circuits. Rules can be added or removed here without touching the
//! orchestrator.

use crate::corpus::{Corpus, MAIN_ENTRY};
use regex::Regex;
use std::sync::LazyLock;
use webforge_core::Violation;

/// Minimum number of component files an app must ship.
pub const MIN_COMPONENT_FILES: usize = 2;
/// Minimum number of style-class attributes across all UI files.
pub const MIN_CLASS_ATTRS: usize = 5;
/// Main-entry size above which an app must be split into components.
pub const MAIN_ENTRY_MAX_BYTES: usize = 6000;

/// Responsive-breakpoint class markers.
pub const BREAKPOINT_MARKERS: [&str; 4] = ["sm:", "md:", "lg:", "xl:"];

/// Opening structural tags that must carry a style-class attribute.
static STRUCTURAL_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(?:div|p|h1|h2|h3|button|input)\b[^>]*>").expect("structural tag pattern")
});

pub fn minimum_components(corpus: &Corpus) -> Option<Violation> {
    if corpus.component_count() < MIN_COMPONENT_FILES {
        return Some(Violation::critical(
            "MINIMUM_COMPONENTS",
            format!(
                "Found {} component file(s); at least {} are required.",
                corpus.component_count(),
                MIN_COMPONENT_FILES
            ),
            "Split the UI into at least two files under src/components/.",
        ));
    }
    None
}

pub fn design_system_usage(corpus: &Corpus) -> Option<Violation> {
    let class_attrs = corpus.count("className=");
    if class_attrs < MIN_CLASS_ATTRS {
        return Some(Violation::critical(
            "DESIGN_SYSTEM_USAGE",
            format!(
                "Only {} className attribute(s) found; at least {} are required.",
                class_attrs, MIN_CLASS_ATTRS
            ),
            "Style every element through utility classes on className.",
        ));
    }
    None
}

pub fn no_inline_styles(corpus: &Corpus) -> Option<Violation> {
    let inline = corpus.count("style={");
    let class_attrs = corpus.count("className=");
    if inline > class_attrs {
        return Some(Violation::critical(
            "NO_INLINE_STYLES",
            format!(
                "Inline style attributes ({}) outnumber className attributes ({}).",
                inline, class_attrs
            ),
            "Replace inline style objects with utility classes.",
        ));
    }
    None
}

pub fn responsive_layout(corpus: &Corpus) -> Option<Violation> {
    if !BREAKPOINT_MARKERS.iter().any(|m| corpus.contains(m)) {
        return Some(Violation::critical(
            "RESPONSIVE_LAYOUT",
            "No responsive breakpoint classes found.".to_string(),
            "Add sm:/md:/lg: variants so the layout adapts to screen size.",
        ));
    }
    None
}

pub fn no_unstyled_html(corpus: &Corpus) -> Option<Violation> {
    let unstyled = STRUCTURAL_TAG
        .find_iter(&corpus.text)
        .filter(|m| !m.as_str().contains("className"))
        .count();
    if unstyled > 0 {
        return Some(Violation::critical(
            "NO_UNSTYLED_HTML",
            format!("{} structural element(s) have no className attribute.", unstyled),
            "Give every div/p/h1-h3/button/input a className.",
        ));
    }
    None
}

pub fn no_single_file_apps(corpus: &Corpus) -> Option<Violation> {
    if let Some(entry) = &corpus.main_entry {
        if entry.len() > MAIN_ENTRY_MAX_BYTES && corpus.component_count() < MIN_COMPONENT_FILES {
            return Some(Violation::critical(
                "NO_SINGLE_FILE_APPS",
                format!(
                    "{} is {} bytes with fewer than {} component files.",
                    MAIN_ENTRY,
                    entry.len(),
                    MIN_COMPONENT_FILES
                ),
                "Extract sections of the entry file into components.",
            ));
        }
    }
    None
}

pub fn required_files(corpus: &Corpus) -> Option<Violation> {
    let mut missing = Vec::new();
    if !corpus.has_path(MAIN_ENTRY) {
        missing.push(MAIN_ENTRY);
    }
    if !corpus.has_stylesheet() {
        missing.push("a stylesheet (*.css)");
    }
    if !missing.is_empty() {
        return Some(Violation::critical(
            "REQUIRED_FILES",
            format!("Missing required file(s): {}.", missing.join(", ")),
            "Include src/App.tsx and a stylesheet in the output.",
        ));
    }
    None
}

/// The general rule table, evaluated in order on every pass.
pub const GENERAL_RULES: [fn(&Corpus) -> Option<Violation>; 7] = [
    minimum_components,
    design_system_usage,
    no_inline_styles,
    responsive_layout,
    no_unstyled_html,
    no_single_file_apps,
    required_files,
];
