//! Snippet fixture front end.
//!
//! Scans a C#-flavored snippet for the two shapes the analyzer consumes:
//! `class Name : Base` declarations (to build the resolved symbol table over
//! a built-in `System.*` core) and `new TypeName(args)` constructions (to
//! build the compilation unit). String literals and comments are skipped,
//! everything else in the snippet is ignored.

use reslint_analyzer::semantic::{SemanticModel, SymbolId};
use reslint_analyzer::syntax::{
    ArgumentExpr, CompilationUnit, ConstructionData, NodeData, NodeIndex, SyntaxNode,
};
use reslint_common::Span;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A parsed snippet: the compilation unit plus its resolved symbol table.
pub struct Fixture {
    pub unit: CompilationUnit,
    pub model: FixtureModel,
}

/// In-memory symbol table backing the fixture's `SemanticModel`.
pub struct FixtureModel {
    /// Fully-qualified names, indexed by `SymbolId`.
    names: Vec<String>,
    bases: FxHashMap<SymbolId, SymbolId>,
    by_node: FxHashMap<NodeIndex, SymbolId>,
}

impl FixtureModel {
    fn with_builtins() -> Self {
        let mut model = FixtureModel {
            names: Vec::new(),
            bases: FxHashMap::default(),
            by_node: FxHashMap::default(),
        };
        let object = model.add_symbol("System.Object", None);
        let exception = model.add_symbol("System.Exception", Some(object));
        model.add_symbol("System.ArgumentException", Some(exception));
        model.add_symbol("System.InvalidOperationException", Some(exception));
        model
    }

    fn add_symbol(&mut self, name: impl Into<String>, base: Option<SymbolId>) -> SymbolId {
        let id = SymbolId(self.names.len() as u32);
        self.names.push(name.into());
        if let Some(base) = base {
            self.bases.insert(id, base);
        }
        id
    }

    /// Whether the base chain starting at `from` reaches `target`.
    ///
    /// Terminates because the table is acyclic before every insertion; this
    /// is the check that keeps it so.
    fn chain_reaches(&self, from: SymbolId, target: SymbolId) -> bool {
        let mut current = Some(from);
        while let Some(sym) = current {
            if sym == target {
                return true;
            }
            current = self.bases.get(&sym).copied();
        }
        false
    }

    /// Resolve a name as written in source: exact match first, then a
    /// built-in by its short name (`Exception` finds `System.Exception`).
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        if let Some(idx) = self.names.iter().position(|n| n == name) {
            return Some(SymbolId(idx as u32));
        }
        let suffix = format!(".{name}");
        self.names
            .iter()
            .position(|n| n.ends_with(&suffix))
            .map(|idx| SymbolId(idx as u32))
    }
}

impl SemanticModel for FixtureModel {
    fn resolve_construction(&self, node: NodeIndex) -> Option<SymbolId> {
        self.by_node.get(&node).copied()
    }

    fn symbol_name(&self, symbol: SymbolId) -> Option<&str> {
        self.names.get(symbol.0 as usize).map(|n| n.as_str())
    }

    fn base_type_of(&self, symbol: SymbolId) -> Option<SymbolId> {
        self.bases.get(&symbol).copied()
    }
}

struct ClassDecl {
    name: String,
    base: Option<String>,
}

struct RawConstruction {
    start: u32,
    end: u32,
    type_name: String,
    arguments: SmallVec<[ArgumentExpr; 4]>,
}

/// Parse a snippet into a fixture under the given file name.
pub fn parse_fixture(file_name: &str, source: &str) -> Fixture {
    let (classes, constructions) = scan(source);

    let mut model = FixtureModel::with_builtins();

    // Declare all user classes before resolving bases so forward references
    // work the way they do in a real compile.
    let user_start = model.names.len();
    for class in &classes {
        model.add_symbol(class.name.clone(), None);
    }
    for (offset, class) in classes.iter().enumerate() {
        let id = SymbolId((user_start + offset) as u32);
        let base = match &class.base {
            // An unresolvable declared base degrades to "no base".
            Some(base_name) => model.lookup(base_name),
            // No declared base means the implicit object root.
            None => model.lookup("System.Object"),
        };
        // The resolver assumes the host hands it an acyclic hierarchy; a
        // base whose chain already reaches this class would close a cycle,
        // so it degrades to "no base" like any other unresolvable base.
        if let Some(base) = base {
            if !model.chain_reaches(base, id) {
                model.bases.insert(id, base);
            }
        }
    }

    let mut unit = CompilationUnit::new(file_name);
    unit.is_generated = source
        .lines()
        .next()
        .is_some_and(|line| line.contains("<auto-generated"));

    for (i, raw) in constructions.into_iter().enumerate() {
        let index = NodeIndex(i as u32);
        if let Some(symbol) = model.lookup(&raw.type_name) {
            model.by_node.insert(index, symbol);
        }
        unit.nodes.push(SyntaxNode {
            index,
            span: Span::new(raw.start, raw.end),
            data: NodeData::ObjectCreation(ConstructionData {
                type_name: raw.type_name,
                arguments: raw.arguments,
            }),
        });
    }

    tracing::debug!(
        file = file_name,
        classes = model.names.len(),
        sites = unit.nodes.len(),
        "fixture parsed"
    );
    Fixture { unit, model }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn skip_ws(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// Advance past a string literal; `i` points at the opening quote.
fn skip_string(bytes: &[u8], mut i: usize) -> usize {
    i += 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    i
}

fn read_ident(bytes: &[u8], mut i: usize) -> (usize, usize) {
    let start = i;
    if i < bytes.len() && is_ident_start(bytes[i]) {
        i += 1;
        while i < bytes.len() && is_ident_continue(bytes[i]) {
            i += 1;
        }
    }
    (start, i)
}

/// Read a possibly-qualified type name (`System.Exception`).
fn read_type_name(bytes: &[u8], mut i: usize) -> (usize, usize) {
    let start = i;
    loop {
        let (seg_start, seg_end) = read_ident(bytes, i);
        if seg_end == seg_start {
            return (start, i);
        }
        i = seg_end;
        if i < bytes.len() && bytes[i] == b'.' && i + 1 < bytes.len() && is_ident_start(bytes[i + 1])
        {
            i += 1;
        } else {
            return (start, i);
        }
    }
}

fn scan(source: &str) -> (Vec<ClassDecl>, Vec<RawConstruction>) {
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut classes = Vec::new();
    let mut constructions = Vec::new();
    let mut i = 0;

    while i < len {
        match bytes[i] {
            b'"' => i = skip_string(bytes, i),
            b'/' if i + 1 < len && bytes[i + 1] == b'/' => {
                while i < len && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if i + 1 < len && bytes[i + 1] == b'*' => {
                i += 2;
                while i + 1 < len && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                    i += 1;
                }
                i = (i + 2).min(len);
            }
            b if is_ident_start(b) => {
                let (word_start, word_end) = read_ident(bytes, i);
                let word = &source[word_start..word_end];
                i = word_end;
                if word == "class" {
                    if let Some(decl) = parse_class_decl(source, bytes, i) {
                        i = decl.1;
                        classes.push(decl.0);
                    }
                } else if word == "new" {
                    if let Some((raw, next)) = parse_construction(source, bytes, word_start, i) {
                        i = next;
                        constructions.push(raw);
                    }
                }
            }
            _ => i += 1,
        }
    }

    (classes, constructions)
}

fn parse_class_decl(source: &str, bytes: &[u8], i: usize) -> Option<(ClassDecl, usize)> {
    let i = skip_ws(bytes, i);
    let (name_start, name_end) = read_ident(bytes, i);
    if name_end == name_start {
        return None;
    }
    let name = source[name_start..name_end].to_string();
    let mut i = skip_ws(bytes, name_end);
    let mut base = None;
    if i < bytes.len() && bytes[i] == b':' {
        i = skip_ws(bytes, i + 1);
        let (base_start, base_end) = read_type_name(bytes, i);
        if base_end > base_start {
            base = Some(source[base_start..base_end].to_string());
            i = base_end;
        }
    }
    Some((ClassDecl { name, base }, i))
}

/// Parse `new TypeName(args)`; `new_start` points at the `new` keyword and
/// `i` just past it. Returns the construction and the index after `)`.
fn parse_construction(
    source: &str,
    bytes: &[u8],
    new_start: usize,
    i: usize,
) -> Option<(RawConstruction, usize)> {
    let i = skip_ws(bytes, i);
    let (name_start, name_end) = read_type_name(bytes, i);
    if name_end == name_start {
        return None;
    }
    let open = skip_ws(bytes, name_end);
    if open >= bytes.len() || bytes[open] != b'(' {
        return None;
    }

    let mut depth = 1usize;
    let mut j = open + 1;
    while j < bytes.len() && depth > 0 {
        match bytes[j] {
            b'"' => j = skip_string(bytes, j),
            b'(' => {
                depth += 1;
                j += 1;
            }
            b')' => {
                depth -= 1;
                j += 1;
            }
            _ => j += 1,
        }
    }
    if depth > 0 {
        return None;
    }

    let raw = RawConstruction {
        start: new_start as u32,
        end: j as u32,
        type_name: source[name_start..name_end].to_string(),
        arguments: split_arguments(&source[open + 1..j - 1]),
    };
    Some((raw, j))
}

/// Split an argument list at top-level commas and tag each argument.
fn split_arguments(content: &str) -> SmallVec<[ArgumentExpr; 4]> {
    let bytes = content.as_bytes();
    let mut args = SmallVec::new();
    let mut depth = 0usize;
    let mut piece_start = 0usize;
    let mut i = 0;

    while i <= bytes.len() {
        let at_end = i == bytes.len();
        if at_end || (bytes[i] == b',' && depth == 0) {
            if let Some(arg) = classify_argument(content[piece_start..i].trim()) {
                args.push(arg);
            }
            piece_start = i + 1;
            i += 1;
            continue;
        }
        match bytes[i] {
            b'"' => i = skip_string(bytes, i),
            b'(' | b'[' => {
                depth += 1;
                i += 1;
            }
            b')' | b']' => {
                depth = depth.saturating_sub(1);
                i += 1;
            }
            _ => i += 1,
        }
    }

    args
}

/// Tag one argument: literals the way the host language defines them
/// (strings, chars, numbers, booleans, null), everything else `Other`.
fn classify_argument(piece: &str) -> Option<ArgumentExpr> {
    if piece.is_empty() {
        return None;
    }
    let first = piece.as_bytes()[0];
    let arg = if first == b'"' {
        let inner = piece
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(piece);
        ArgumentExpr::Literal(inner.to_string())
    } else if first == b'\'' {
        ArgumentExpr::Literal(piece.to_string())
    } else if first.is_ascii_digit()
        || (first == b'-' && piece.as_bytes().get(1).is_some_and(|b| b.is_ascii_digit()))
    {
        ArgumentExpr::Literal(piece.to_string())
    } else if piece == "true" || piece == "false" || piece == "null" {
        ArgumentExpr::Literal(piece.to_string())
    } else {
        ArgumentExpr::Other
    };
    Some(arg)
}
