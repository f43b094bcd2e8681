//! Sequential and parallel analysis entry points.
//!
//! A host hands over one `CompilationUnit` per file, each paired with the
//! semantic model for that file. `analyze_unit` drives one file;
//! `analyze_program` fans units out across rayon workers when every rule
//! declares itself safe for concurrent execution.

use rayon::prelude::*;
use reslint_common::Diagnostic;

use crate::context::{AnalysisContext, AnalysisOptions, CancellationToken, DiagnosticSink};
use crate::rules::{actions_for, supported_rules};
use crate::semantic::SemanticModel;
use crate::syntax::CompilationUnit;

/// One compilation unit paired with its semantic model.
pub struct AnalysisInput<'a> {
    pub unit: &'a CompilationUnit,
    pub model: &'a (dyn SemanticModel + Sync),
}

/// Run every registered rule over one compilation unit.
///
/// Cancellation is checked between node visits; a requested token stops the
/// pass before the next node, leaving already-reported diagnostics in place.
pub fn analyze_unit(
    unit: &CompilationUnit,
    model: &dyn SemanticModel,
    options: &AnalysisOptions,
    cancel: &CancellationToken,
    sink: &mut dyn DiagnosticSink,
) {
    if unit.is_generated && !options.analyze_generated_code {
        tracing::debug!(file = %unit.file_name, "skipping generated file");
        return;
    }

    let mut ctx = AnalysisContext {
        file_name: &unit.file_name,
        model,
        options,
        sink,
    };

    for node in &unit.nodes {
        if cancel.is_requested() {
            tracing::debug!(file = %unit.file_name, "analysis cancelled");
            return;
        }
        for action in actions_for(node.kind()) {
            action(&mut ctx, node);
        }
    }
}

/// Run the analysis over a whole program.
///
/// Units run in parallel when every rule declares concurrent execution;
/// otherwise the pass falls back to source order. Diagnostic ordering across
/// units is unspecified either way; callers sort for presentation.
pub fn analyze_program(
    inputs: &[AnalysisInput<'_>],
    options: &AnalysisOptions,
    cancel: &CancellationToken,
) -> Vec<Diagnostic> {
    let _span = tracing::info_span!("analyze_program", files = inputs.len()).entered();

    if supported_rules().iter().all(|rule| rule.concurrent) {
        inputs
            .par_iter()
            .map(|input| {
                let mut diagnostics = Vec::new();
                analyze_unit(input.unit, input.model, options, cancel, &mut diagnostics);
                diagnostics
            })
            .reduce(Vec::new, |mut acc, mut chunk| {
                acc.append(&mut chunk);
                acc
            })
    } else {
        let mut diagnostics = Vec::new();
        for input in inputs {
            analyze_unit(input.unit, input.model, options, cancel, &mut diagnostics);
        }
        diagnostics
    }
}
