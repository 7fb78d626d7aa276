//! Auto-fix application
//!
//! Fixes are plain text replacements over spans of the original source. They are
//! applied in source order; a fix overlapping one already taken is skipped and can
//! be picked up by linting the output again.
//!
//! Fix spans use the same UTF-16 offsets as the tree they came from.

use crate::ast::Span;
use crate::diagnostic::{Diagnostic, Fix};
use crate::source::SourceText;
use std::ops::Range;
use thiserror::Error;

/// Error applying a fix
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixError {
    #[error("Fix span {start}..{end} is outside the source ({len} UTF-16 units)")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("Fix span {start}..{end} splits a surrogate pair")]
    CharBoundary { start: usize, end: usize },
}

/// Byte range a span replaces in `source`
fn check_span(source: &SourceText<'_>, span: Span) -> Result<Range<usize>, FixError> {
    if span.start > span.end || span.end > source.len_utf16() {
        return Err(FixError::OutOfBounds {
            start: span.start,
            end: span.end,
            len: source.len_utf16(),
        });
    }
    source.byte_range(span).ok_or(FixError::CharBoundary {
        start: span.start,
        end: span.end,
    })
}

impl Fix {
    /// Apply this fix alone to `source`
    pub fn apply_to(&self, source: &str) -> Result<String, FixError> {
        let range = check_span(&SourceText::new(source), self.span)?;

        let mut output = String::with_capacity(source.len() + self.replacement.len());
        output.push_str(&source[..range.start]);
        output.push_str(&self.replacement);
        output.push_str(&source[range.end..]);
        Ok(output)
    }
}

/// Result of applying fixes
#[derive(Debug, Default)]
pub struct FixResult {
    /// Fixed source (unchanged in dry-run mode)
    pub output: String,
    /// Number of fixes applied
    pub fixes_applied: usize,
    /// Number of fixes skipped because they overlap an applied one
    pub fixes_skipped: usize,
    /// Number of fixes that could not be applied
    pub fixes_failed: usize,
    /// Errors encountered
    pub errors: Vec<String>,
}

impl FixResult {
    /// Whether the output differs from the input
    pub fn is_modified(&self) -> bool {
        self.fixes_applied > 0
    }
}

/// Applies the primary fixes of diagnostics to a source string
#[derive(Debug, Default)]
pub struct Fixer {
    /// Dry run mode (count fixes, leave the output unchanged)
    dry_run: bool,
}

impl Fixer {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Apply the fix of every diagnostic that carries one
    pub fn apply(&self, source: &str, diagnostics: &[Diagnostic]) -> FixResult {
        let mut fixes: Vec<(&Fix, &str)> = diagnostics
            .iter()
            .filter_map(|diag| diag.fix.as_ref().map(|fix| (fix, diag.rule_id.as_str())))
            .collect();
        fixes.sort_by_key(|(fix, _)| (fix.span.start, fix.span.end));

        let text = SourceText::new(source);
        let mut result = FixResult::default();
        let mut output = String::with_capacity(source.len());
        let mut last_end = 0;
        let mut taken: Option<Span> = None;

        for (fix, rule_id) in fixes {
            let range = match check_span(&text, fix.span) {
                Ok(range) => range,
                Err(e) => {
                    result.fixes_failed += 1;
                    result.errors.push(format!("{}: {}", rule_id, e));
                    continue;
                }
            };
            if taken.is_some_and(|prev| fix.span.start < prev.end) {
                log::debug!(
                    "{}: skipping fix at {}..{}, overlaps a previous fix",
                    rule_id,
                    fix.span.start,
                    fix.span.end
                );
                result.fixes_skipped += 1;
                continue;
            }

            output.push_str(&source[last_end..range.start]);
            output.push_str(&fix.replacement);
            last_end = range.end;
            taken = Some(fix.span);
            result.fixes_applied += 1;
        }
        output.push_str(&source[last_end..]);

        result.output = if self.dry_run {
            source.to_string()
        } else {
            output
        };
        result
    }
}
