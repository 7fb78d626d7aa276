//! Side effect classification for expressions
//!
//! Decides whether evaluating an expression can be observed: mutation, calls,
//! construction, control transfer (`yield`, `await`) and, depending on the
//! [`TrapPolicy`], property reads, `in` checks and key enumeration that a proxy
//! could intercept.
//!
//! The classification is syntactic and deliberately shallow in places:
//!
//! - only the object of a member access is inspected, never a computed property;
//! - the test of a conditional expression is not inspected;
//! - a tagged template only looks at its template, not at the tag;
//! - any expression kind not listed below is considered side-effect free.

use crate::ast::{BinaryOperator, Expression, ObjectMember, TemplateLiteral, UnaryOperator};
use serde::Deserialize;

/// Which proxy traps count as observable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct TrapPolicy {
    /// Property reads (`obj.prop`)
    pub get: bool,
    /// Existence checks (`key in obj`)
    pub has: bool,
    /// Key enumeration (`{ ...obj }`)
    pub own_keys: bool,
}

impl TrapPolicy {
    /// No trap is observable
    pub fn none() -> Self {
        Self::default()
    }

    /// Every trap is observable
    pub fn all() -> Self {
        Self {
            get: true,
            has: true,
            own_keys: true,
        }
    }
}

/// Side effect classifier bound to a trap policy
#[derive(Debug, Clone, Copy, Default)]
pub struct SideEffects {
    traps: TrapPolicy,
}

impl SideEffects {
    pub fn new(traps: TrapPolicy) -> Self {
        Self { traps }
    }

    pub fn traps(&self) -> TrapPolicy {
        self.traps
    }

    /// Whether evaluating `expr` can have an observable effect
    pub fn has_side_effect(&self, expr: &Expression) -> bool {
        match expr {
            Expression::UpdateExpression(_)
            | Expression::AssignmentExpression(_)
            | Expression::CallExpression(_)
            | Expression::OptionalCallExpression(_)
            | Expression::NewExpression(_)
            | Expression::YieldExpression(_)
            | Expression::AwaitExpression(_) => true,

            Expression::MemberExpression(member) => {
                self.traps.get || self.has_side_effect(&member.object)
            }

            Expression::UnaryExpression(unary) => {
                unary.operator == UnaryOperator::Delete || self.has_side_effect(&unary.argument)
            }
            Expression::SpreadElement(spread) => self.has_side_effect(&spread.argument),
            Expression::ChainExpression(chain) => self.has_side_effect(&chain.expression),

            // Without an observable `has` trap, `in` is judged by its operands
            // exactly like a logical expression.
            Expression::BinaryExpression(binary) => {
                if self.traps.has && binary.operator == BinaryOperator::In {
                    return true;
                }
                self.either(&binary.left, &binary.right)
            }
            Expression::LogicalExpression(logical) => self.either(&logical.left, &logical.right),

            Expression::SequenceExpression(sequence) => {
                sequence.expressions.iter().any(|e| self.has_side_effect(e))
            }
            Expression::ArrayExpression(array) => array
                .elements
                .iter()
                .flatten()
                .any(|e| self.has_side_effect(e)),
            Expression::ConditionalExpression(conditional) => {
                self.either(&conditional.consequent, &conditional.alternate)
            }
            Expression::ObjectExpression(object) => object
                .properties
                .iter()
                .any(|member| self.member_has_side_effect(member)),
            Expression::TemplateLiteral(template) => self.template_has_side_effect(template),
            Expression::TaggedTemplateExpression(tagged) => {
                self.template_has_side_effect(&tagged.quasi)
            }

            Expression::Identifier(_)
            | Expression::Literal(_)
            | Expression::ThisExpression(_)
            | Expression::ArrowFunctionExpression(_)
            | Expression::Other => false,
        }
    }

    fn either(&self, left: &Expression, right: &Expression) -> bool {
        self.has_side_effect(left) || self.has_side_effect(right)
    }

    fn template_has_side_effect(&self, template: &TemplateLiteral) -> bool {
        template.expressions.iter().any(|e| self.has_side_effect(e))
    }

    /// Keyed properties look at value and key; every other member is handled
    /// as a spread.
    fn member_has_side_effect(&self, member: &ObjectMember) -> bool {
        match member {
            ObjectMember::Property(property) => {
                self.has_side_effect(&property.value) || self.has_side_effect(&property.key)
            }
            ObjectMember::SpreadElement(spread) => {
                self.traps.own_keys || self.has_side_effect(&spread.argument)
            }
            ObjectMember::Unknown => self.traps.own_keys,
        }
    }
}
