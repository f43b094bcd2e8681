//! Diagnostic analyzer flagging exception constructions with literal messages.
//!
//! This crate hosts one rule, `EFI1001`: an object-construction expression
//! that builds an exception-derived type with a literal string argument is
//! reported, because literal messages cannot be localized.
//!
//! The crate is organized into several modules:
//! - `syntax` - the syntax-node surface the host feeds to the analyzer
//! - `semantic` - the borrowed view into the host's symbol information
//! - `hierarchy` - base-type chain walk for the exception-root check
//! - `context` - analysis options, cancellation, and the diagnostic sink
//! - `rules` - rule descriptors and the per-node-kind dispatch table
//! - `driver` - sequential and parallel analysis entry points
//!
//! The host compiler front end is an external collaborator: it owns parsing
//! and symbol resolution, and the analyzer only borrows the results through
//! the `SemanticModel` trait.

pub mod context;
pub mod driver;
pub mod hierarchy;
pub mod rules;
pub mod semantic;
pub mod syntax;

pub use context::{AnalysisContext, AnalysisOptions, CancellationToken, DiagnosticSink};
pub use driver::{AnalysisInput, analyze_program, analyze_unit};
pub use hierarchy::is_derived_from;
pub use semantic::{SemanticModel, SymbolId};
pub use syntax::{ArgumentExpr, CompilationUnit, NodeIndex, NodeKind, SyntaxNode};
