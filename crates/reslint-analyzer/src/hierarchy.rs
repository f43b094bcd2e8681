//! Base-type chain walk for the exception-root check.

use crate::semantic::{SemanticModel, SymbolId};

/// Whether `symbol` is `root_fqn` or derives from it via base-type hops.
///
/// Walks the single-parent base chain, comparing each symbol's
/// fully-qualified name to `root_fqn`. Reflexive: a symbol named `root_fqn`
/// itself returns true. An absent symbol (resolution failed upstream) returns
/// false; missing semantic information is a soft failure, not an error.
///
/// Terminates because host type hierarchies are finite and acyclic; the host
/// language enforces that, so it is not re-validated here.
pub fn is_derived_from(
    model: &dyn SemanticModel,
    symbol: Option<SymbolId>,
    root_fqn: &str,
) -> bool {
    let mut current = symbol;
    while let Some(sym) = current {
        match model.symbol_name(sym) {
            Some(name) if name == root_fqn => {
                tracing::trace!(symbol = ?sym, root = root_fqn, "base chain reached root");
                return true;
            }
            Some(_) => {}
            // Unknown symbol id: treat like an unresolved base.
            None => return false,
        }
        current = model.base_type_of(sym);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    /// Minimal in-memory symbol table for resolver tests.
    struct ChainModel {
        names: FxHashMap<SymbolId, &'static str>,
        bases: FxHashMap<SymbolId, SymbolId>,
    }

    impl ChainModel {
        fn new(chain: &[(&'static str, Option<usize>)]) -> Self {
            let mut names = FxHashMap::default();
            let mut bases = FxHashMap::default();
            for (idx, (name, base)) in chain.iter().enumerate() {
                names.insert(SymbolId(idx as u32), *name);
                if let Some(base_idx) = base {
                    bases.insert(SymbolId(idx as u32), SymbolId(*base_idx as u32));
                }
            }
            ChainModel { names, bases }
        }
    }

    impl SemanticModel for ChainModel {
        fn resolve_construction(&self, _node: crate::syntax::NodeIndex) -> Option<SymbolId> {
            None
        }

        fn symbol_name(&self, symbol: SymbolId) -> Option<&str> {
            self.names.get(&symbol).copied()
        }

        fn base_type_of(&self, symbol: SymbolId) -> Option<SymbolId> {
            self.bases.get(&symbol).copied()
        }
    }

    const ROOT: &str = "System.Exception";

    #[test]
    fn reflexive_on_the_root_itself() {
        let model = ChainModel::new(&[(ROOT, None)]);
        assert!(is_derived_from(&model, Some(SymbolId(0)), ROOT));
    }

    #[test]
    fn transitive_along_the_base_chain() {
        // Leaf(2) -> Middle(1) -> System.Exception(0)
        let model = ChainModel::new(&[(ROOT, None), ("Middle", Some(0)), ("Leaf", Some(1))]);
        assert!(is_derived_from(&model, Some(SymbolId(2)), ROOT));
        assert!(is_derived_from(&model, Some(SymbolId(1)), ROOT));
    }

    #[test]
    fn baseless_non_root_is_not_derived() {
        let model = ChainModel::new(&[("MyError", None)]);
        assert!(!is_derived_from(&model, Some(SymbolId(0)), ROOT));
    }

    #[test]
    fn chain_ending_elsewhere_is_not_derived() {
        let model = ChainModel::new(&[("System.Object", None), ("MyError", Some(0))]);
        assert!(!is_derived_from(&model, Some(SymbolId(1)), ROOT));
    }

    #[test]
    fn absent_symbol_is_not_derived() {
        let model = ChainModel::new(&[]);
        assert!(!is_derived_from(&model, None, ROOT));
    }

    #[test]
    fn unknown_symbol_id_is_not_derived() {
        let model = ChainModel::new(&[]);
        assert!(!is_derived_from(&model, Some(SymbolId(42)), ROOT));
    }

    #[test]
    fn deep_chain_terminates_and_matches() {
        let mut chain: Vec<(&'static str, Option<usize>)> = vec![(ROOT, None)];
        for i in 1..64 {
            chain.push(("Intermediate", Some(i - 1)));
        }
        let model = ChainModel::new(&chain);
        assert!(is_derived_from(&model, Some(SymbolId(63)), ROOT));
    }
}
