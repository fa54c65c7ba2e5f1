use mistral_lint::{Diagnostic, Range, validate_document};

// =============================================================================
// Fixtures
// =============================================================================

pub const MINIMAL: &str = include_str!("../fixtures/minimal.yaml");
pub const BAD_ATTRIBUTES: &str = include_str!("../fixtures/bad_attributes.yaml");
pub const DATA_FLOW: &str = include_str!("../fixtures/data_flow.yaml");
pub const REACHABILITY: &str = include_str!("../fixtures/reachability.yaml");

/// Wrap task definitions (already indented by six spaces) in a one-workflow
/// document named `wf1`.
pub fn single_workflow(tasks: &str) -> String {
    format!("version: '2.0'\nworkflows:\n  wf1:\n    tasks:\n{}", tasks)
}

// =============================================================================
// Diagnostic helpers
// =============================================================================

pub fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message()).collect()
}

pub fn validate_messages(text: &str) -> Vec<String> {
    validate_document(text)
        .iter()
        .map(|d| d.message().to_string())
        .collect()
}

/// The single diagnostic whose message contains `needle`.
pub fn find<'a>(diagnostics: &'a [Diagnostic], needle: &str) -> &'a Diagnostic {
    let matching: Vec<_> = diagnostics
        .iter()
        .filter(|d| d.message().contains(needle))
        .collect();
    assert_eq!(
        matching.len(),
        1,
        "expected exactly one diagnostic containing {:?}: {:?}",
        needle,
        diagnostics
    );
    matching[0]
}

pub fn range(sl: u32, sc: u32, el: u32, ec: u32) -> Range {
    Range::from_coords(sl, sc, el, ec)
}
