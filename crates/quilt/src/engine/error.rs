//! Error types for the rendering engine.

use thiserror::Error;

/// An error that occurred during interpolation or rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A component descriptor names a template the registry does not have.
    ///
    /// This is a caller/config defect rather than a data-shape ambiguity, so
    /// it is surfaced rather than swallowed.
    #[error("no template registered for '{id}', available: {}", available.join(", "))]
    TemplateNotFound {
        id: String,
        suggestions: Vec<String>,
        available: Vec<String>,
    },

    /// Mutually referential interpolations exceeded the resolution depth limit.
    #[error("maximum resolution depth exceeded at {context}")]
    MaxDepthExceeded { context: String },
}

/// Rank registered identifiers by similarity to `input` for did-you-mean
/// diagnostics. Returns at most three candidates, best first.
pub fn compute_suggestions(input: &str, available: &[String]) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = available
        .iter()
        .map(|candidate| (strsim::jaro_winkler(input, candidate), candidate))
        .filter(|(score, _)| *score > 0.7)
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
