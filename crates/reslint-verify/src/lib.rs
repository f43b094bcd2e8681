//! Verification harness for the reslint analyzer.
//!
//! The harness plays the role of a host front end for tests: it turns a
//! C#-flavored source snippet into construction sites plus a resolved symbol
//! table, runs the analyzer over them, and asserts expected
//! `{id, message, severity, file, line, column}` tuples.
//!
//! This is test tooling, not a C# front end. The fixture parser recognizes
//! exactly the shapes the rule consumes (`class Name : Base` declarations and
//! `new TypeName(args)` expressions) and nothing more.

pub mod fixture;
pub mod verify;

pub use fixture::{Fixture, FixtureModel, parse_fixture};
pub use verify::{ExpectedDiagnostic, diagnostics_for, init_tracing, location_of, verify_snippet};
