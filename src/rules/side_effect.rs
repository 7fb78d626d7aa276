//! `side-effect`: disallow `void` on arguments without side effects
//!
//! `void 0` is just a long way to write `undefined`. `void` only earns its keep
//! when the operand does something, e.g. `void promise.then(done)`.

use super::SIDE_EFFECT;
use crate::ast::Expression;
use crate::diagnostic::Fix;
use crate::rule::{Rule, RuleContext, RuleKind, RuleMeta};
use crate::side_effect::{SideEffects, TrapPolicy};
use serde::Deserialize;
use serde_json::json;

const MESSAGE: &str =
    "Unexpected void operator on non-side-effect argument. Use undefined instead.";
const SUGGESTION: &str = "Replace with undefined.";

/// `allowTraps`: `true` observes every trap, an object picks individual ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AllowTraps {
    Flag(bool),
    Traps(TrapPolicy),
}

impl Default for AllowTraps {
    fn default() -> Self {
        AllowTraps::Flag(false)
    }
}

impl AllowTraps {
    pub fn policy(&self) -> TrapPolicy {
        match self {
            AllowTraps::Flag(true) => TrapPolicy::all(),
            AllowTraps::Flag(false) => TrapPolicy::none(),
            AllowTraps::Traps(policy) => *policy,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SideEffectOptions {
    pub allow_traps: AllowTraps,
}

#[derive(Debug, Clone, Default)]
pub struct SideEffectRule {
    side_effects: SideEffects,
}

impl SideEffectRule {
    pub fn new(options: SideEffectOptions) -> Self {
        Self {
            side_effects: SideEffects::new(options.allow_traps.policy()),
        }
    }

    pub fn traps(&self) -> TrapPolicy {
        self.side_effects.traps()
    }
}

impl Rule for SideEffectRule {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: SIDE_EFFECT,
            description: "Disallow void on non-side-effect arguments",
            kind: RuleKind::Suggestion,
            fixable: true,
            has_suggestions: true,
        }
    }

    fn schema(&self) -> serde_json::Value {
        json!([{
            "type": "object",
            "properties": {
                "allowTraps": {
                    "type": ["boolean", "object"],
                    "properties": {
                        "get": { "type": "boolean" },
                        "has": { "type": "boolean" },
                        "ownKeys": { "type": "boolean" }
                    },
                    "additionalProperties": false
                }
            },
            "additionalProperties": false
        }])
    }

    fn check(&self, node: &Expression, ctx: &mut RuleContext<'_>) {
        let Expression::UnaryExpression(unary) = node else {
            return;
        };
        if !unary.is_void() || self.side_effects.has_side_effect(&unary.argument) {
            return;
        }

        let fix = Fix::replace(unary.span, "undefined");
        ctx.report(unary.span, MESSAGE, Some((SUGGESTION, fix)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::{Diagnostic, Severity};
    use crate::source::SourceText;
    use crate::test_support::*;
    use serde_json::json;

    fn run(rule: &SideEffectRule, source: &str, node: &Expression) -> Vec<Diagnostic> {
        let source = SourceText::new(source);
        let mut ctx = RuleContext::new(SIDE_EFFECT, Severity::Error, &source);
        rule.check(node, &mut ctx);
        ctx.into_diagnostics()
    }

    fn options(value: serde_json::Value) -> SideEffectOptions {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_void_literal_is_reported() {
        let src = "void 0";
        let node = spanned(void(spanned(lit("0"), find(src, "0"))), whole(src));

        let diagnostics = run(&SideEffectRule::default(), src, &node);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, MESSAGE);
        assert_eq!(diagnostics[0].span, whole(src));
        assert_eq!(diagnostics[0].fix, Some(Fix::replace(whole(src), "undefined")));
        assert_eq!(diagnostics[0].suggestions.len(), 1);
        assert_eq!(diagnostics[0].suggestions[0].description, SUGGESTION);
        assert_eq!(
            diagnostics[0].suggestions[0].fix,
            Fix::replace(whole(src), "undefined")
        );
    }

    #[test]
    fn test_fixed_output_is_not_reported_again() {
        let src = "void (0)";
        let node = spanned(void(spanned(lit("0"), find(src, "0"))), whole(src));
        let rule = SideEffectRule::default();

        let diagnostics = run(&rule, src, &node);
        assert_eq!(diagnostics.len(), 1);
        let fixed = diagnostics[0].fix.as_ref().unwrap().apply_to(src).unwrap();
        assert_eq!(fixed, "undefined");

        let node = spanned(ident("undefined"), whole(&fixed));
        assert!(run(&rule, &fixed, &node).is_empty());
    }

    #[test]
    fn test_void_call_is_allowed() {
        let src = "void foo()";
        let node = spanned(void(call(ident("foo"), vec![])), whole(src));
        assert!(run(&SideEffectRule::default(), src, &node).is_empty());
    }

    #[test]
    fn test_void_optional_call_is_allowed() {
        let src = "void a?.()";
        let optional = chain(Expression::CallExpression(CallExpression {
            span: find(src, "a?.()"),
            callee: Box::new(spanned(ident("a"), find(src, "a"))),
            arguments: vec![],
            optional: true,
        }));
        let node = spanned(void(spanned(optional, find(src, "a?.()"))), whole(src));
        assert!(run(&SideEffectRule::default(), src, &node).is_empty());
    }

    #[test]
    fn test_void_identifier_is_reported() {
        let src = "void foo";
        let node = spanned(void(ident("foo")), whole(src));
        assert_eq!(run(&SideEffectRule::default(), src, &node).len(), 1);
    }

    #[test]
    fn test_other_unary_operators_are_ignored() {
        let src = "typeof foo";
        let node = spanned(unary(UnaryOperator::Typeof, ident("foo")), whole(src));
        assert!(run(&SideEffectRule::default(), src, &node).is_empty());
    }

    #[test]
    fn test_non_unary_nodes_are_ignored() {
        let src = "foo";
        let node = spanned(ident("foo"), whole(src));
        assert!(run(&SideEffectRule::default(), src, &node).is_empty());
    }

    #[test]
    fn test_get_trap_makes_member_access_meaningful() {
        let src = "void obj.prop";
        let node = spanned(void(member(ident("obj"), ident("prop"))), whole(src));

        assert_eq!(run(&SideEffectRule::default(), src, &node).len(), 1);

        let rule = SideEffectRule::new(options(json!({ "allowTraps": { "get": true } })));
        assert!(run(&rule, src, &node).is_empty());
    }

    #[test]
    fn test_void_of_void_literal_is_reported_once_per_node() {
        // `void void 0`: only the outer node is handed over here
        let src = "void void 0";
        let node = spanned(void(spanned(void(lit("0")), find(src, "void 0"))), whole(src));
        let diagnostics = run(&SideEffectRule::default(), src, &node);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span, whole(src));
    }

    #[test]
    fn test_allow_traps_option_shapes() {
        assert_eq!(SideEffectRule::default().traps(), TrapPolicy::none());

        let rule = SideEffectRule::new(options(json!({ "allowTraps": true })));
        assert_eq!(rule.traps(), TrapPolicy::all());

        let rule = SideEffectRule::new(options(json!({ "allowTraps": false })));
        assert_eq!(rule.traps(), TrapPolicy::none());

        let rule = SideEffectRule::new(options(json!({ "allowTraps": { "ownKeys": true } })));
        assert_eq!(
            rule.traps(),
            TrapPolicy {
                own_keys: true,
                ..TrapPolicy::none()
            }
        );

        let rule = SideEffectRule::new(options(json!({})));
        assert_eq!(rule.traps(), TrapPolicy::none());
    }

    #[test]
    fn test_allow_traps_rejects_unknown_keys() {
        let result: Result<SideEffectOptions, _> =
            serde_json::from_value(json!({ "allowTraps": { "set": true } }));
        assert!(result.is_err());

        let result: Result<SideEffectOptions, _> =
            serde_json::from_value(json!({ "traps": true }));
        assert!(result.is_err());
    }

    #[test]
    fn test_meta_and_schema() {
        let rule = SideEffectRule::default();
        let meta = rule.meta();
        assert_eq!(meta.id, "side-effect");
        assert!(meta.fixable);
        assert!(meta.has_suggestions);

        let schema = rule.schema();
        assert_eq!(schema[0]["additionalProperties"], json!(false));
        assert!(schema[0]["properties"]["allowTraps"]["properties"]["ownKeys"].is_object());
    }
}
