//! `arrow-body`: prefer `void` or a function body for arrow functions whose return
//! value is ignored
//!
//! `() => { f(); }` and `() => void f()` mean the same thing. The rule picks one
//! shape per scope: `single` covers bodies with one statement, `multi` bodies with
//! more. Only bodies made of plain calls and assignments are rewritten.

use super::ARROW_BODY;
use crate::ast::{ArrowBody, ArrowFunctionExpression, Expression, Span, Statement};
use crate::diagnostic::Fix;
use crate::rule::{Rule, RuleContext, RuleKind, RuleMeta};
use serde::Deserialize;
use serde_json::json;
use std::fmt;

const VOID_MESSAGE: &str = "Unexpected function body. Use void instead.";
const VOID_SUGGESTION: &str = "Replace with void expression.";
const BODY_MESSAGE: &str = "Unexpected void operator. Use function body instead.";
const BODY_SUGGESTION: &str = "Replace with function body.";
const DESCRIPTION: &str =
    "Prefer void operator or function body to void implicit arrow function return values.";

/// Preferred body shape for a scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "RawBodyStyle")]
pub enum BodyStyle {
    /// `() => void f()`
    #[default]
    Void,
    /// `() => { f(); }`
    Body,
    /// Scope not checked
    Disabled,
}

/// Option value as written: `"void"`, `"body"` or `false`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBodyStyle {
    Flag(bool),
    Name(String),
}

impl TryFrom<RawBodyStyle> for BodyStyle {
    type Error = String;

    fn try_from(raw: RawBodyStyle) -> Result<Self, Self::Error> {
        match raw {
            RawBodyStyle::Flag(false) => Ok(BodyStyle::Disabled),
            RawBodyStyle::Name(name) if name == "void" => Ok(BodyStyle::Void),
            RawBodyStyle::Name(name) if name == "body" => Ok(BodyStyle::Body),
            RawBodyStyle::Flag(true) => {
                Err("expected \"void\", \"body\" or false, got true".into())
            }
            RawBodyStyle::Name(name) => Err(format!(
                "expected \"void\", \"body\" or false, got \"{}\"",
                name
            )),
        }
    }
}

/// Statement-count class of a function body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyScope {
    /// Exactly one statement
    Single,
    /// More than one statement
    Multi,
}

impl BodyScope {
    fn matches_count(self, count: usize) -> bool {
        match self {
            BodyScope::Single => count == 1,
            BodyScope::Multi => count > 1,
        }
    }
}

impl fmt::Display for BodyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyScope::Single => write!(f, "single"),
            BodyScope::Multi => write!(f, "multi"),
        }
    }
}

/// `null` or a missing key keeps the default (`"void"`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArrowBodyOptions {
    pub single: Option<BodyStyle>,
    pub multi: Option<BodyStyle>,
}

#[derive(Debug, Clone, Default)]
pub struct ArrowBodyRule {
    single: BodyStyle,
    multi: BodyStyle,
}

impl ArrowBodyRule {
    pub fn new(options: ArrowBodyOptions) -> Self {
        Self {
            single: options.single.unwrap_or_default(),
            multi: options.multi.unwrap_or_default(),
        }
    }

    pub fn style(&self, scope: BodyScope) -> BodyStyle {
        match scope {
            BodyScope::Single => self.single,
            BodyScope::Multi => self.multi,
        }
    }

    /// Block body made of plain calls and assignments -> `void` expression
    fn prefer_void(
        &self,
        arrow: &ArrowFunctionExpression,
        scope: BodyScope,
        ctx: &mut RuleContext<'_>,
    ) {
        let ArrowBody::Block(block) = &arrow.body else {
            return;
        };
        if !scope.matches_count(block.body.len()) {
            return;
        }
        let Some(expressions) = block
            .body
            .iter()
            .map(|statement| match statement {
                Statement::ExpressionStatement(stmt) if is_simple_side_effect(&stmt.expression) => {
                    Some(&stmt.expression)
                }
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
        else {
            return;
        };

        let fix = source_texts(ctx, &expressions).map(|texts| {
            let mut joined = texts.join(", ");
            let sole_assignment = matches!(expressions[0], Expression::AssignmentExpression(_));
            if expressions.len() > 1 || sole_assignment {
                joined = format!("({})", joined);
            }
            Fix::replace(block.span, format!("void {}", joined))
        });

        report(ctx, block.span, scope, VOID_MESSAGE, VOID_SUGGESTION, fix);
    }

    /// `void` expression of plain calls and assignments -> block body
    fn prefer_body(
        &self,
        arrow: &ArrowFunctionExpression,
        scope: BodyScope,
        ctx: &mut RuleContext<'_>,
    ) {
        let ArrowBody::Expression(body) = &arrow.body else {
            return;
        };
        let Expression::UnaryExpression(void_expr) = body.as_ref() else {
            return;
        };
        if !void_expr.is_void() {
            return;
        }

        let expressions: Vec<&Expression> = match (scope, void_expr.argument.as_ref()) {
            (BodyScope::Multi, Expression::SequenceExpression(sequence)) => {
                sequence.expressions.iter().collect()
            }
            (BodyScope::Single, Expression::SequenceExpression(_)) | (BodyScope::Multi, _) => {
                return
            }
            (BodyScope::Single, argument) => vec![argument],
        };
        if !expressions.iter().all(|e| is_simple_side_effect(e)) {
            return;
        }

        let fix = source_texts(ctx, &expressions)
            .map(|texts| Fix::replace(void_expr.span, format!("{{{};}}", texts.join(";"))));

        report(ctx, void_expr.span, scope, BODY_MESSAGE, BODY_SUGGESTION, fix);
    }
}

/// Expression kinds whose only purpose in a body is their effect
fn is_simple_side_effect(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::CallExpression(_) | Expression::AssignmentExpression(_)
    )
}

fn source_texts<'a>(ctx: &RuleContext<'a>, expressions: &[&Expression]) -> Option<Vec<&'a str>> {
    let source = ctx.source();
    expressions
        .iter()
        .map(|expr| expr.span().and_then(|span| source.text(span)))
        .collect()
}

fn report(
    ctx: &mut RuleContext<'_>,
    span: Span,
    scope: BodyScope,
    message: &str,
    suggestion: &str,
    fix: Option<Fix>,
) {
    if fix.is_none() {
        log::warn!(
            "{}: no source text for {} body at {}..{}, reporting without fix",
            ctx.rule_id(),
            scope,
            span.start,
            span.end
        );
    }
    ctx.report(span, message, fix.map(|fix| (suggestion, fix)));
}

impl Rule for ArrowBodyRule {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: ARROW_BODY,
            description: DESCRIPTION,
            kind: RuleKind::Suggestion,
            fixable: true,
            has_suggestions: true,
        }
    }

    fn schema(&self) -> serde_json::Value {
        json!([{
            "type": "object",
            "properties": {
                "single": { "enum": ["void", "body", false] },
                "multi": { "enum": ["void", "body", false] }
            },
            "additionalProperties": false
        }])
    }

    fn check(&self, node: &Expression, ctx: &mut RuleContext<'_>) {
        let Expression::ArrowFunctionExpression(arrow) = node else {
            return;
        };

        for scope in [BodyScope::Single, BodyScope::Multi] {
            match self.style(scope) {
                BodyStyle::Void => self.prefer_void(arrow, scope, ctx),
                BodyStyle::Body => self.prefer_body(arrow, scope, ctx),
                BodyStyle::Disabled => {}
            }
        }
    }
}
