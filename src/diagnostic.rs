//! Diagnostic types for lint results

use crate::ast::Span;
use serde::{Deserialize, Serialize};

/// Severity level for diagnostics
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message
    Info,
    /// Warning - potential issue
    #[default]
    Warning,
    /// Error - definite problem
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" | "hint" | "note" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" | "err" => Ok(Severity::Error),
            _ => Err(()),
        }
    }
}

/// Source code location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, in characters)
    pub column: usize,
    /// Length of the highlighted region in UTF-16 code units
    pub length: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            length: 0,
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }
}

/// A text replacement over a span of the original source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    /// Range of the original text to replace
    pub span: Span,
    /// The replacement text
    pub replacement: String,
}

impl Fix {
    pub fn replace(span: Span, replacement: impl Into<String>) -> Self {
        Self {
            span,
            replacement: replacement.into(),
        }
    }
}

/// A named alternative fix offered for interactive selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Description of the fix
    pub description: String,
    pub fix: Fix,
}

impl Suggestion {
    pub fn new(description: &str, fix: Fix) -> Self {
        Self {
            description: description.to_string(),
            fix,
        }
    }
}

/// A lint diagnostic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule ID that triggered this diagnostic
    pub rule_id: String,
    /// Severity level
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Range of the node the diagnostic is anchored on
    pub span: Span,
    /// Line/column of the anchor node
    pub location: Location,
    /// Fix applied automatically when the user opts in
    pub fix: Option<Fix>,
    /// Alternative fixes for interactive selection
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(rule_id: &str, severity: Severity, message: &str, span: Span) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            severity,
            message: message.to_string(),
            span,
            location: Location::default(),
            fix: None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Attach the primary fix
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Add a named suggestion
    pub fn with_suggestion(mut self, description: &str, fix: Fix) -> Self {
        self.suggestions.push(Suggestion::new(description, fix));
        self
    }

    /// Check if this diagnostic has a fix
    pub fn has_fix(&self) -> bool {
        self.fix.is_some()
    }

    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Check if this is a warning
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("hint".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!("fatal".parse::<Severity>(), Err(()));
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(format!("{}", Severity::Error), "error");
        assert_eq!(format!("{}", Severity::Warning), "warning");
    }

    #[test]
    fn test_diagnostic_builder() {
        let fix = Fix::replace(Span::new(0, 6), "undefined");
        let diag = Diagnostic::new("side-effect", Severity::Error, "msg", Span::new(0, 6))
            .with_location(Location::new(1, 1).with_length(6))
            .with_fix(fix.clone())
            .with_suggestion("Replace with undefined.", fix);

        assert!(diag.is_error());
        assert!(!diag.is_warning());
        assert!(diag.has_fix());
        assert_eq!(diag.suggestions.len(), 1);
        assert_eq!(diag.suggestions[0].fix.replacement, "undefined");
        assert_eq!(diag.location.length, 6);
    }

    #[test]
    fn test_diagnostic_serializes_to_json() {
        let diag = Diagnostic::new("arrow-body", Severity::Warning, "msg", Span::new(2, 4));
        let json = serde_json::to_value(&diag).unwrap();

        assert_eq!(json["rule_id"], "arrow-body");
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["span"]["start"], 2);
        assert!(json["fix"].is_null());
    }
}
