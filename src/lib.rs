//! void-lint - lint rules for the ECMAScript `void` operator
//!
//! Two rules over an ESTree-shaped syntax tree supplied by the host:
//!
//! - `side-effect` flags `void` applied to an operand without side effects and
//!   rewrites it to `undefined`.
//! - `arrow-body` enforces one body shape for arrow functions whose return value is
//!   ignored, rewriting between `() => { f(); }` and `() => void f()`.
//!
//! # Architecture
//!
//! ```text
//! Host traversal -> Linter::check_node -> Rule::check -> Diagnostic (+ Fix)
//!                                                           |
//!                                              Fixer::apply -> fixed source
//! ```
//!
//! The host parses the source, walks the tree and hands each expression node to
//! the [`Linter`] together with a [`SourceText`]. Rules are activated once from a
//! [`Config`]; options are parsed at that point, never per node.
//!
//! # Example
//!
//! ```
//! use void_lint::{Expression, Fixer, Linter, SourceText};
//!
//! let src = "void 0";
//! let node: Expression = serde_json::from_str(r#"{
//!     "type": "UnaryExpression", "start": 0, "end": 6, "operator": "void",
//!     "argument": { "type": "Literal", "start": 5, "end": 6, "value": 0, "raw": "0" }
//! }"#).unwrap();
//!
//! let diagnostics = Linter::recommended().check_node(&node, &SourceText::new(src));
//! assert_eq!(diagnostics.len(), 1);
//!
//! let fixed = Fixer::new(false).apply(src, &diagnostics);
//! assert_eq!(fixed.output, "undefined");
//! ```

pub mod ast;
pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod fixer;
pub mod rule;
pub mod rules;
pub mod side_effect;
pub mod source;

#[cfg(test)]
#[allow(dead_code)]
mod test_support;

// Re-export main types
pub use ast::{Expression, Span};
pub use config::{Config, ConfigError, RuleEntry, RuleLevel};
pub use diagnostic::{Diagnostic, Fix, Location, Severity, Suggestion};
pub use engine::Linter;
pub use fixer::{FixError, FixResult, Fixer};
pub use rule::{Rule, RuleContext, RuleKind, RuleMeta};
pub use side_effect::{SideEffects, TrapPolicy};
pub use source::SourceText;
