//! Rule interface and metadata

use crate::ast::{Expression, Span};
use crate::diagnostic::{Diagnostic, Fix, Severity};
use crate::source::SourceText;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Plugin namespace used for rule IDs in configuration (`void/side-effect`)
pub const PLUGIN_NAME: &str = "void";

/// Kind of rule, as understood by ESLint-compatible hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Code that will cause an error or confusing behavior
    Problem,
    /// Code that could be written in a better way
    #[default]
    Suggestion,
    /// Whitespace and formatting
    Layout,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Problem => write!(f, "problem"),
            RuleKind::Suggestion => write!(f, "suggestion"),
            RuleKind::Layout => write!(f, "layout"),
        }
    }
}

impl std::str::FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "problem" => Ok(RuleKind::Problem),
            "suggestion" => Ok(RuleKind::Suggestion),
            "layout" => Ok(RuleKind::Layout),
            _ => Err(format!("Unknown rule kind: {}", s)),
        }
    }
}

/// Static description of a rule
#[derive(Debug, Clone, Serialize)]
pub struct RuleMeta {
    /// Unique rule identifier (e.g., "side-effect")
    pub id: &'static str,
    /// One-line description
    pub description: &'static str,
    pub kind: RuleKind,
    /// Whether reports carry an automatic fix
    pub fixable: bool,
    /// Whether reports carry suggestions
    pub has_suggestions: bool,
}

impl RuleMeta {
    /// Rule ID including the plugin namespace
    pub fn qualified_id(&self) -> String {
        format!("{}/{}", PLUGIN_NAME, self.id)
    }
}

/// A lint rule, activated once with its options and then run per node
///
/// The host walks the tree and hands every expression node to [`Rule::check`];
/// a rule ignores the node kinds it does not handle.
pub trait Rule: Send + Sync {
    fn meta(&self) -> RuleMeta;

    /// JSON schema of the rule options
    fn schema(&self) -> serde_json::Value;

    fn check(&self, node: &Expression, ctx: &mut RuleContext<'_>);
}

/// Per-rule reporting context for one source file
pub struct RuleContext<'a> {
    rule_id: &'a str,
    severity: Severity,
    source: &'a SourceText<'a>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> RuleContext<'a> {
    pub fn new(rule_id: &'a str, severity: Severity, source: &'a SourceText<'a>) -> Self {
        Self {
            rule_id,
            severity,
            source,
            diagnostics: Vec::new(),
        }
    }

    pub fn source(&self) -> &'a SourceText<'a> {
        self.source
    }

    pub fn rule_id(&self) -> &str {
        self.rule_id
    }

    /// Report a diagnostic anchored on `span`, with an optional fix offered both
    /// as the automatic fix and as a named suggestion
    pub fn report(&mut self, span: Span, message: &str, fix: Option<(&str, Fix)>) {
        let mut diagnostic = Diagnostic::new(self.rule_id, self.severity, message, span)
            .with_location(self.source.location(span));

        if let Some((description, fix)) = fix {
            diagnostic = diagnostic
                .with_fix(fix.clone())
                .with_suggestion(description, fix);
        }

        log::debug!(
            "{}: {} at {}:{}",
            self.rule_id,
            message,
            diagnostic.location.line,
            diagnostic.location.column
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
