//! ESTree-shaped syntax tree consumed from the host
//!
//! The tree is owned by the host for the duration of one lint pass. Only the node
//! kinds the rules inspect are modelled in detail; everything else lands in the
//! open `Other` / `Unknown` variants.
//!
//! Every node deserializes from ESTree JSON as emitted by acorn or espree: the
//! `"type"` field selects the variant and `start`/`end` give UTF-16 code unit
//! offsets into the source text.

use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Half-open range of UTF-16 code units into the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, serde::Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the two ranges share at least one code unit
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// An expression node
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    ThisExpression(ThisExpression),
    UpdateExpression(UpdateExpression),
    AssignmentExpression(AssignmentExpression),
    CallExpression(CallExpression),
    OptionalCallExpression(CallExpression),
    NewExpression(NewExpression),
    YieldExpression(YieldExpression),
    AwaitExpression(AwaitExpression),
    MemberExpression(MemberExpression),
    UnaryExpression(UnaryExpression),
    SpreadElement(SpreadElement),
    BinaryExpression(BinaryExpression),
    LogicalExpression(LogicalExpression),
    SequenceExpression(SequenceExpression),
    ArrayExpression(ArrayExpression),
    ConditionalExpression(ConditionalExpression),
    ObjectExpression(ObjectExpression),
    TemplateLiteral(TemplateLiteral),
    TaggedTemplateExpression(TaggedTemplateExpression),
    ArrowFunctionExpression(ArrowFunctionExpression),
    ChainExpression(ChainExpression),
    /// Any expression kind the rules do not look into (functions, classes,
    /// JSX, ...)
    #[serde(other)]
    Other,
}

impl Expression {
    /// Source range of the node; the open `Other` case carries none
    pub fn span(&self) -> Option<Span> {
        let span = match self {
            Expression::Identifier(node) => node.span,
            Expression::Literal(node) => node.span,
            Expression::ThisExpression(node) => node.span,
            Expression::UpdateExpression(node) => node.span,
            Expression::AssignmentExpression(node) => node.span,
            Expression::CallExpression(node) | Expression::OptionalCallExpression(node) => {
                node.span
            }
            Expression::NewExpression(node) => node.span,
            Expression::YieldExpression(node) => node.span,
            Expression::AwaitExpression(node) => node.span,
            Expression::MemberExpression(node) => node.span,
            Expression::UnaryExpression(node) => node.span,
            Expression::SpreadElement(node) => node.span,
            Expression::BinaryExpression(node) => node.span,
            Expression::LogicalExpression(node) => node.span,
            Expression::SequenceExpression(node) => node.span,
            Expression::ArrayExpression(node) => node.span,
            Expression::ConditionalExpression(node) => node.span,
            Expression::ObjectExpression(node) => node.span,
            Expression::TemplateLiteral(node) => node.span,
            Expression::TaggedTemplateExpression(node) => node.span,
            Expression::ArrowFunctionExpression(node) => node.span,
            Expression::ChainExpression(node) => node.span,
            Expression::Other => return None,
        };
        Some(span)
    }

    /// ESTree type name of the node
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::Identifier(_) => "Identifier",
            Expression::Literal(_) => "Literal",
            Expression::ThisExpression(_) => "ThisExpression",
            Expression::UpdateExpression(_) => "UpdateExpression",
            Expression::AssignmentExpression(_) => "AssignmentExpression",
            Expression::CallExpression(_) => "CallExpression",
            Expression::OptionalCallExpression(_) => "OptionalCallExpression",
            Expression::NewExpression(_) => "NewExpression",
            Expression::YieldExpression(_) => "YieldExpression",
            Expression::AwaitExpression(_) => "AwaitExpression",
            Expression::MemberExpression(_) => "MemberExpression",
            Expression::UnaryExpression(_) => "UnaryExpression",
            Expression::SpreadElement(_) => "SpreadElement",
            Expression::BinaryExpression(_) => "BinaryExpression",
            Expression::LogicalExpression(_) => "LogicalExpression",
            Expression::SequenceExpression(_) => "SequenceExpression",
            Expression::ArrayExpression(_) => "ArrayExpression",
            Expression::ConditionalExpression(_) => "ConditionalExpression",
            Expression::ObjectExpression(_) => "ObjectExpression",
            Expression::TemplateLiteral(_) => "TemplateLiteral",
            Expression::TaggedTemplateExpression(_) => "TaggedTemplateExpression",
            Expression::ArrowFunctionExpression(_) => "ArrowFunctionExpression",
            Expression::ChainExpression(_) => "ChainExpression",
            Expression::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Identifier {
    #[serde(flatten)]
    pub span: Span,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Literal {
    #[serde(flatten)]
    pub span: Span,
    /// Literal as written in the source
    #[serde(default)]
    pub raw: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThisExpression {
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateExpression {
    #[serde(flatten)]
    pub span: Span,
    pub operator: UpdateOperator,
    #[serde(default)]
    pub prefix: bool,
    pub argument: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssignmentExpression {
    #[serde(flatten)]
    pub span: Span,
    pub operator: AssignmentOperator,
    /// Assignment target; destructuring patterns are `Expression::Other`
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

/// `callee(arguments)`, also used for `OptionalCallExpression`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallExpression {
    #[serde(flatten)]
    pub span: Span,
    pub callee: Box<Expression>,
    #[serde(default)]
    pub arguments: Vec<Expression>,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewExpression {
    #[serde(flatten)]
    pub span: Span,
    pub callee: Box<Expression>,
    #[serde(default)]
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct YieldExpression {
    #[serde(flatten)]
    pub span: Span,
    #[serde(default)]
    pub argument: Option<Box<Expression>>,
    #[serde(default)]
    pub delegate: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AwaitExpression {
    #[serde(flatten)]
    pub span: Span,
    pub argument: Box<Expression>,
}

/// `object.property` or `object[property]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemberExpression {
    #[serde(flatten)]
    pub span: Span,
    pub object: Box<Expression>,
    pub property: Box<Expression>,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnaryExpression {
    #[serde(flatten)]
    pub span: Span,
    pub operator: UnaryOperator,
    pub argument: Box<Expression>,
}

impl UnaryExpression {
    pub fn is_void(&self) -> bool {
        self.operator == UnaryOperator::Void
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpreadElement {
    #[serde(flatten)]
    pub span: Span,
    pub argument: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BinaryExpression {
    #[serde(flatten)]
    pub span: Span,
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogicalExpression {
    #[serde(flatten)]
    pub span: Span,
    pub operator: LogicalOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SequenceExpression {
    #[serde(flatten)]
    pub span: Span,
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArrayExpression {
    #[serde(flatten)]
    pub span: Span,
    /// `None` is a hole (`[a, , b]`)
    pub elements: Vec<Option<Expression>>,
}

/// Wrapper around an optional chain (`a?.b`, `a?.()`) as acorn and espree emit it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChainExpression {
    #[serde(flatten)]
    pub span: Span,
    pub expression: Box<Expression>,
}

/// `test ? consequent : alternate`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConditionalExpression {
    #[serde(flatten)]
    pub span: Span,
    pub test: Box<Expression>,
    pub consequent: Box<Expression>,
    pub alternate: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectExpression {
    #[serde(flatten)]
    pub span: Span,
    pub properties: Vec<ObjectMember>,
}

/// A member of an object literal
///
/// Anything that is not a keyed `Property` is classified like a spread. Parsers
/// that predate `SpreadElement` in object literals are accepted through aliases.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectMember {
    Property(Property),
    #[serde(alias = "SpreadProperty", alias = "ExperimentalSpreadProperty")]
    SpreadElement(SpreadElement),
    #[serde(other)]
    Unknown,
}

/// Keyed object member: `key: value`, `[key]: value`, shorthand or method
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
    #[serde(flatten)]
    pub span: Span,
    pub key: Box<Expression>,
    pub value: Box<Expression>,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub shorthand: bool,
}

/// Template literal; the static `quasis` are not modelled
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateLiteral {
    #[serde(flatten)]
    pub span: Span,
    #[serde(default)]
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaggedTemplateExpression {
    #[serde(flatten)]
    pub span: Span,
    pub tag: Box<Expression>,
    pub quasi: TemplateLiteral,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArrowFunctionExpression {
    #[serde(flatten)]
    pub span: Span,
    pub body: ArrowBody,
    #[serde(default, rename = "async")]
    pub is_async: bool,
}

/// Body of an arrow function: a block or a single expression
#[derive(Debug, Clone, PartialEq)]
pub enum ArrowBody {
    Block(BlockStatement),
    Expression(Box<Expression>),
}

impl<'de> Deserialize<'de> for ArrowBody {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let is_block = value.get("type").and_then(|t| t.as_str()) == Some("BlockStatement");

        if is_block {
            serde_json::from_value(value)
                .map(ArrowBody::Block)
                .map_err(de::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(|expr| ArrowBody::Expression(Box::new(expr)))
                .map_err(de::Error::custom)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    ExpressionStatement(ExpressionStatement),
    BlockStatement(BlockStatement),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpressionStatement {
    #[serde(flatten)]
    pub span: Span,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlockStatement {
    #[serde(flatten)]
    pub span: Span,
    pub body: Vec<Statement>,
}

/// Root of a whole-file tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Program {
    #[serde(flatten)]
    pub span: Span,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum UnaryOperator {
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "!")]
    LogicalNot,
    #[serde(rename = "~")]
    BitwiseNot,
    #[serde(rename = "typeof")]
    Typeof,
    #[serde(rename = "void")]
    Void,
    #[serde(rename = "delete")]
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum UpdateOperator {
    #[serde(rename = "++")]
    Increment,
    #[serde(rename = "--")]
    Decrement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum LogicalOperator {
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "??")]
    Coalesce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum BinaryOperator {
    #[serde(rename = "==")]
    Equality,
    #[serde(rename = "!=")]
    Inequality,
    #[serde(rename = "===")]
    StrictEquality,
    #[serde(rename = "!==")]
    StrictInequality,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessEqualThan,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterEqualThan,
    #[serde(rename = "<<")]
    ShiftLeft,
    #[serde(rename = ">>")]
    ShiftRight,
    #[serde(rename = ">>>")]
    ShiftRightZeroFill,
    #[serde(rename = "+")]
    Addition,
    #[serde(rename = "-")]
    Subtraction,
    #[serde(rename = "*")]
    Multiplication,
    #[serde(rename = "/")]
    Division,
    #[serde(rename = "%")]
    Remainder,
    #[serde(rename = "**")]
    Exponential,
    #[serde(rename = "|")]
    BitwiseOr,
    #[serde(rename = "^")]
    BitwiseXor,
    #[serde(rename = "&")]
    BitwiseAnd,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "instanceof")]
    Instanceof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum AssignmentOperator {
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    Addition,
    #[serde(rename = "-=")]
    Subtraction,
    #[serde(rename = "*=")]
    Multiplication,
    #[serde(rename = "/=")]
    Division,
    #[serde(rename = "%=")]
    Remainder,
    #[serde(rename = "**=")]
    Exponential,
    #[serde(rename = "<<=")]
    ShiftLeft,
    #[serde(rename = ">>=")]
    ShiftRight,
    #[serde(rename = ">>>=")]
    ShiftRightZeroFill,
    #[serde(rename = "|=")]
    BitwiseOr,
    #[serde(rename = "^=")]
    BitwiseXor,
    #[serde(rename = "&=")]
    BitwiseAnd,
    #[serde(rename = "&&=")]
    LogicalAnd,
    #[serde(rename = "||=")]
    LogicalOr,
    #[serde(rename = "??=")]
    LogicalNullish,
}
