//! Borrowed view into the host's symbol information.
//!
//! The host owns the symbol table; the analyzer only reads it through this
//! trait for the lifetime of one analysis pass. Nothing here is cached or
//! copied, so a symbol id is valid exactly as long as the model it came from.

use crate::syntax::NodeIndex;

/// Identifies a declared type in the host's symbol table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SymbolId(pub u32);

/// Semantic-resolution services supplied by the host per compilation unit.
///
/// Every method is a soft query: `None` means the host could not resolve,
/// which is common for incomplete or partial compiles and never an error.
pub trait SemanticModel {
    /// Resolve the type constructed by an object-creation node.
    fn resolve_construction(&self, node: NodeIndex) -> Option<SymbolId>;

    /// Fully-qualified name of a type symbol.
    fn symbol_name(&self, symbol: SymbolId) -> Option<&str>;

    /// Direct base type of a type symbol, if it has one.
    fn base_type_of(&self, symbol: SymbolId) -> Option<SymbolId>;
}
