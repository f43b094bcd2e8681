//! Snippet verification: run the analyzer and assert expected diagnostics.

use reslint_analyzer::{AnalysisOptions, CancellationToken, analyze_unit};
use reslint_common::{Diagnostic, DiagnosticCategory, LineMap};

use crate::fixture::parse_fixture;

/// The default file name snippets compile under.
pub const TEST_FILE: &str = "Test0.cs";

/// An expected `{id, message, severity, file, line, column}` tuple.
///
/// Line and column are 1-based and refer to the start of the reported span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpectedDiagnostic {
    pub id: &'static str,
    pub message: &'static str,
    pub severity: DiagnosticCategory,
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

/// Install a tracing subscriber honoring `RUST_LOG`, once per process.
///
/// Harness entry points call this so `RUST_LOG=reslint_analyzer=debug`
/// surfaces rule decisions while a test is being narrowed down.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Run the analyzer over a snippet with default options.
pub fn diagnostics_for(source: &str) -> Vec<Diagnostic> {
    init_tracing();
    let fixture = parse_fixture(TEST_FILE, source);
    let mut diagnostics = Vec::new();
    analyze_unit(
        &fixture.unit,
        &fixture.model,
        &AnalysisOptions::default(),
        &CancellationToken::new(),
        &mut diagnostics,
    );
    diagnostics
}

/// Analyze `source` and assert the emitted diagnostics match `expected`.
///
/// Both sides are sorted by location before comparison; the analyzer makes
/// no cross-site ordering promise.
pub fn verify_snippet(source: &str, expected: &[ExpectedDiagnostic]) {
    let diagnostics = diagnostics_for(source);
    let line_map = LineMap::build(source);

    let mut actual: Vec<(String, u32, u32, &'static str, DiagnosticCategory, String)> = diagnostics
        .iter()
        .map(|diag| {
            let pos = line_map.position(diag.start);
            (
                diag.file.clone(),
                pos.line,
                pos.column,
                diag.rule_id,
                diag.category,
                diag.message_text.clone(),
            )
        })
        .collect();
    let mut wanted: Vec<(String, u32, u32, &'static str, DiagnosticCategory, String)> = expected
        .iter()
        .map(|exp| {
            (
                exp.file.to_string(),
                exp.line,
                exp.column,
                exp.id,
                exp.severity,
                exp.message.to_string(),
            )
        })
        .collect();
    actual.sort();
    wanted.sort();

    assert_eq!(
        actual, wanted,
        "diagnostic mismatch for snippet:\n{source}\n"
    );
}

/// 1-based line/column of the first occurrence of `needle` in `source`.
///
/// Computed by plain line iteration, independently of `LineMap`, so tests
/// using it cross-check the byte-offset conversion.
pub fn location_of(source: &str, needle: &str) -> (u32, u32) {
    let mut line = 1u32;
    for text in source.split('\n') {
        if let Some(col) = text.find(needle) {
            return (line, col as u32 + 1);
        }
        line += 1;
    }
    panic!("needle {needle:?} not found in snippet");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_of_finds_line_and_column() {
        let source = "abc\n  new Boom(\"x\")\n";
        assert_eq!(location_of(source, "new Boom"), (2, 3));
    }
}
