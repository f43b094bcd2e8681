//! Common types and utilities for the reslint analyzer.
//!
//! This crate provides foundational types used across all reslint crates:
//! - Source spans (`Span`) as byte offsets into a source file
//! - Position/line-map types for line/column source locations
//! - Diagnostic types (`Diagnostic`, `DiagnosticCategory`)
//! - The resource-string table backing diagnostic titles and messages

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Position/LineMap types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

// Diagnostic types and JSON rendering
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticRelatedInformation};

// Localizable resource strings for diagnostic text
pub mod resources;
