//! Rule descriptors and the per-node-kind dispatch table.

pub mod exception_literal;

use reslint_common::DiagnosticCategory;

use crate::context::AnalysisContext;
use crate::syntax::{NodeKind, SyntaxNode};

/// Metadata a host can enumerate for each rule the analyzer provides.
#[derive(Clone, Copy, Debug)]
pub struct RuleDescriptor {
    /// Stable rule identifier, e.g. `EFI1001`.
    pub id: &'static str,
    /// Rule category for grouping in host UIs.
    pub category: &'static str,
    pub severity: DiagnosticCategory,
    /// Resource keys for the localized title/message/description.
    pub title_key: &'static str,
    pub message_key: &'static str,
    pub description_key: &'static str,
    pub enabled_by_default: bool,
    /// Whether the rule declares itself safe for concurrent execution.
    pub concurrent: bool,
}

/// A rule callback registered for a syntax-node kind.
pub type SyntaxNodeAction = fn(&mut AnalysisContext<'_>, &SyntaxNode);

/// All rules this analyzer provides.
pub fn supported_rules() -> &'static [RuleDescriptor] {
    &[exception_literal::DESCRIPTOR]
}

/// Explicit dispatch table from node kind to registered rule actions.
///
/// Kept as a match rather than dynamic registration so adding a rule means
/// adding an arm, visible in one place.
pub fn actions_for(kind: NodeKind) -> &'static [SyntaxNodeAction] {
    match kind {
        NodeKind::ObjectCreation => &[exception_literal::check_construction],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn efi1001_is_listed_and_concurrent() {
        let rules = supported_rules();
        assert_eq!(rules.len(), 1);
        let rule = &rules[0];
        assert_eq!(rule.id, "EFI1001");
        assert_eq!(rule.category, "Globalization");
        assert_eq!(rule.severity, DiagnosticCategory::Warning);
        assert!(rule.enabled_by_default);
        assert!(rule.concurrent);
    }

    #[test]
    fn object_creation_dispatches_to_one_action() {
        assert_eq!(actions_for(NodeKind::ObjectCreation).len(), 1);
    }
}
