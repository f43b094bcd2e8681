//! Diagnostic types shared by the analyzer and its hosts.
//!
//! A diagnostic is produced once per finding and never mutated; byte offsets
//! are converted to line/column positions by the consumer (see
//! [`crate::position::LineMap`]).

use serde::Serialize;

use crate::span::Span;

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// Related information for a diagnostic (e.g., "see also" locations).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticRelatedInformation {
    pub category: DiagnosticCategory,
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
}

/// A reported finding with rule id, severity, message, and source location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Stable rule identifier, e.g. `EFI1001`.
    pub rule_id: &'static str,
    pub category: DiagnosticCategory,
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub related_information: Vec<DiagnosticRelatedInformation>,
}

impl Diagnostic {
    /// Create a warning diagnostic covering `span` in `file`.
    pub fn warning(
        rule_id: &'static str,
        file: impl Into<String>,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id,
            category: DiagnosticCategory::Warning,
            file: file.into(),
            start: span.start,
            length: span.len(),
            message_text: message.into(),
            related_information: Vec::new(),
        }
    }

    pub fn with_related(
        mut self,
        file: impl Into<String>,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        self.related_information.push(DiagnosticRelatedInformation {
            category: DiagnosticCategory::Message,
            file: file.into(),
            start: span.start,
            length: span.len(),
            message_text: message.into(),
        });
        self
    }

    /// The span the diagnostic covers.
    pub fn span(&self) -> Span {
        Span::new(self.start, self.start + self.length)
    }
}

/// Render a diagnostic set as JSON for tooling consumers.
pub fn to_json(diagnostics: &[Diagnostic]) -> String {
    serde_json::to_string_pretty(diagnostics).unwrap_or_else(|_| String::from("[]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_carries_span_and_file() {
        let diag = Diagnostic::warning("EFI1001", "Test0.cs", Span::new(10, 33), "message");
        assert_eq!(diag.category, DiagnosticCategory::Warning);
        assert_eq!(diag.file, "Test0.cs");
        assert_eq!(diag.start, 10);
        assert_eq!(diag.length, 23);
        assert_eq!(diag.span(), Span::new(10, 33));
    }

    #[test]
    fn related_information_appends_in_order() {
        let diag = Diagnostic::warning("EFI1001", "Test0.cs", Span::new(10, 33), "message")
            .with_related("Strings.cs", Span::new(100, 120), "resource declared here")
            .with_related("Test0.cs", Span::new(0, 5), "construction enclosing scope");
        assert_eq!(diag.related_information.len(), 2);
        let first = &diag.related_information[0];
        assert_eq!(first.category, DiagnosticCategory::Message);
        assert_eq!(first.file, "Strings.cs");
        assert_eq!(first.start, 100);
        assert_eq!(first.length, 20);
        assert_eq!(first.message_text, "resource declared here");
        assert_eq!(diag.related_information[1].file, "Test0.cs");
    }

    #[test]
    fn json_rendering_includes_rule_id() {
        let diag = Diagnostic::warning("EFI1001", "a.cs", Span::new(0, 1), "m");
        let json = to_json(&[diag]);
        assert!(json.contains("\"EFI1001\""));
        assert!(json.contains("\"Warning\""));
    }
}
