//! Analysis options, cancellation, and the per-unit analysis context.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use reslint_common::Diagnostic;

use crate::semantic::SemanticModel;

/// Default fully-qualified name of the exception root type.
pub const DEFAULT_EXCEPTION_ROOT: &str = "System.Exception";

/// Host-supplied analysis configuration.
#[derive(Clone, Debug)]
pub struct AnalysisOptions {
    /// Fully-qualified name of the root exception type; constructions of
    /// types reachable from this root are subject to the literal-message rule.
    pub exception_root: String,
    /// Whether files the host marked as generated are analyzed.
    pub analyze_generated_code: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            exception_root: DEFAULT_EXCEPTION_ROOT.to_string(),
            analyze_generated_code: false,
        }
    }
}

/// Cooperative cancellation flag supplied by the host.
///
/// Checked between site visits, never mid-walk; a site already being visited
/// finishes before cancellation takes effect.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        CancellationToken(Arc::new(AtomicBool::new(false)))
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Append-only sink for diagnostics.
///
/// Diagnostics may arrive in any order across sites; the host owns final
/// ordering and presentation.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Everything a rule sees while visiting one compilation unit.
///
/// Rules read borrowed syntax and symbol data and write to the sink; they
/// hold no state of their own across visits, which is what makes concurrent
/// execution over disjoint units safe.
pub struct AnalysisContext<'a> {
    pub file_name: &'a str,
    pub model: &'a dyn SemanticModel,
    pub options: &'a AnalysisOptions,
    pub sink: &'a mut dyn DiagnosticSink,
}

impl<'a> AnalysisContext<'a> {
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.sink.report(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_target_system_exception() {
        let options = AnalysisOptions::default();
        assert_eq!(options.exception_root, "System.Exception");
        assert!(!options.analyze_generated_code);
    }

    #[test]
    fn cancellation_is_visible_through_clones() {
        let token = CancellationToken::new();
        let seen_by_worker = token.clone();
        assert!(!seen_by_worker.is_requested());
        token.request();
        assert!(seen_by_worker.is_requested());
    }
}
