//! EFI1001: exception constructed with a literal message string.
//!
//! Exception messages written as literals cannot be localized. The rule
//! flags `new T(...)` where `T` derives from the configured exception root
//! and at least one argument is a literal; the fix is to reference a
//! resource string instead.

use reslint_common::{Diagnostic, DiagnosticCategory};
use reslint_common::resources::{self, resource_keys};

use crate::context::AnalysisContext;
use crate::hierarchy::is_derived_from;
use crate::rules::RuleDescriptor;
use crate::syntax::{NodeData, SyntaxNode};

pub const RULE_ID: &str = "EFI1001";

pub const DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    id: RULE_ID,
    category: "Globalization",
    severity: DiagnosticCategory::Warning,
    title_key: resource_keys::EXCEPTION_LITERAL_TITLE,
    message_key: resource_keys::EXCEPTION_LITERAL_MESSAGE,
    description_key: resource_keys::EXCEPTION_LITERAL_DESCRIPTION,
    enabled_by_default: true,
    concurrent: true,
};

/// Visit one object-construction expression.
///
/// An unresolved constructed type is skipped silently; partial compiles make
/// that common and it must never surface as a finding or an error. At most one
/// diagnostic is emitted per site: scanning stops at the first literal
/// argument so several literals do not stack duplicate warnings on one span.
pub fn check_construction(ctx: &mut AnalysisContext<'_>, node: &SyntaxNode) {
    let NodeData::ObjectCreation(construction) = &node.data;

    let Some(symbol) = ctx.model.resolve_construction(node.index) else {
        tracing::debug!(
            file = ctx.file_name,
            type_name = %construction.type_name,
            "construction type did not resolve; skipping"
        );
        return;
    };

    if !is_derived_from(ctx.model, Some(symbol), &ctx.options.exception_root) {
        return;
    }

    if construction.arguments.iter().any(|arg| arg.is_literal()) {
        let message = resources::message_for(DESCRIPTOR.message_key).unwrap_or(RULE_ID);
        tracing::debug!(
            file = ctx.file_name,
            type_name = %construction.type_name,
            span = ?node.span,
            "literal message in exception construction"
        );
        ctx.report(Diagnostic::warning(
            RULE_ID,
            ctx.file_name,
            node.span,
            message,
        ));
    }
}
