//! Node constructors for unit tests
//!
//! Nodes are built without spans; `spanned` and `find` attach the range of a
//! snippet inside a test source string when a rule needs to read node text.
//! Ranges are UTF-16 offsets, as a JavaScript parser would report them.

pub(crate) use crate::ast::*;

pub(crate) fn find(source: &str, needle: &str) -> Span {
    let byte = source
        .find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in `{source}`"));
    let start = source[..byte].encode_utf16().count();
    Span::new(start, start + needle.encode_utf16().count())
}

pub(crate) fn whole(source: &str) -> Span {
    Span::new(0, source.encode_utf16().count())
}

pub(crate) fn spanned(mut expr: Expression, span: Span) -> Expression {
    match &mut expr {
        Expression::Identifier(node) => node.span = span,
        Expression::Literal(node) => node.span = span,
        Expression::ThisExpression(node) => node.span = span,
        Expression::UpdateExpression(node) => node.span = span,
        Expression::AssignmentExpression(node) => node.span = span,
        Expression::CallExpression(node) | Expression::OptionalCallExpression(node) => {
            node.span = span
        }
        Expression::NewExpression(node) => node.span = span,
        Expression::YieldExpression(node) => node.span = span,
        Expression::AwaitExpression(node) => node.span = span,
        Expression::MemberExpression(node) => node.span = span,
        Expression::UnaryExpression(node) => node.span = span,
        Expression::SpreadElement(node) => node.span = span,
        Expression::BinaryExpression(node) => node.span = span,
        Expression::LogicalExpression(node) => node.span = span,
        Expression::SequenceExpression(node) => node.span = span,
        Expression::ArrayExpression(node) => node.span = span,
        Expression::ConditionalExpression(node) => node.span = span,
        Expression::ObjectExpression(node) => node.span = span,
        Expression::TemplateLiteral(node) => node.span = span,
        Expression::TaggedTemplateExpression(node) => node.span = span,
        Expression::ArrowFunctionExpression(node) => node.span = span,
        Expression::ChainExpression(node) => node.span = span,
        Expression::Other => {}
    }
    expr
}

pub(crate) fn ident(name: &str) -> Expression {
    Expression::Identifier(Identifier {
        span: Span::default(),
        name: name.to_string(),
    })
}

pub(crate) fn lit(raw: &str) -> Expression {
    Expression::Literal(Literal {
        span: Span::default(),
        raw: Some(raw.to_string()),
    })
}

pub(crate) fn this() -> Expression {
    Expression::ThisExpression(ThisExpression {
        span: Span::default(),
    })
}

pub(crate) fn update(argument: Expression) -> Expression {
    Expression::UpdateExpression(UpdateExpression {
        span: Span::default(),
        operator: UpdateOperator::Increment,
        prefix: false,
        argument: Box::new(argument),
    })
}

pub(crate) fn assign(left: Expression, right: Expression) -> Expression {
    Expression::AssignmentExpression(AssignmentExpression {
        span: Span::default(),
        operator: AssignmentOperator::Assign,
        left: Box::new(left),
        right: Box::new(right),
    })
}

fn call_node(callee: Expression, arguments: Vec<Expression>, optional: bool) -> CallExpression {
    CallExpression {
        span: Span::default(),
        callee: Box::new(callee),
        arguments,
        optional,
    }
}

pub(crate) fn call(callee: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::CallExpression(call_node(callee, arguments, false))
}

pub(crate) fn optional_call(callee: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::OptionalCallExpression(call_node(callee, arguments, true))
}

pub(crate) fn chain(expression: Expression) -> Expression {
    Expression::ChainExpression(ChainExpression {
        span: Span::default(),
        expression: Box::new(expression),
    })
}

pub(crate) fn new_expr(callee: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::NewExpression(NewExpression {
        span: Span::default(),
        callee: Box::new(callee),
        arguments,
    })
}

pub(crate) fn yield_expr(argument: Option<Expression>) -> Expression {
    Expression::YieldExpression(YieldExpression {
        span: Span::default(),
        argument: argument.map(Box::new),
        delegate: false,
    })
}

pub(crate) fn await_expr(argument: Expression) -> Expression {
    Expression::AwaitExpression(AwaitExpression {
        span: Span::default(),
        argument: Box::new(argument),
    })
}

pub(crate) fn member(object: Expression, property: Expression) -> Expression {
    Expression::MemberExpression(MemberExpression {
        span: Span::default(),
        object: Box::new(object),
        property: Box::new(property),
        computed: false,
        optional: false,
    })
}

pub(crate) fn computed_member(object: Expression, property: Expression) -> Expression {
    Expression::MemberExpression(MemberExpression {
        span: Span::default(),
        object: Box::new(object),
        property: Box::new(property),
        computed: true,
        optional: false,
    })
}

pub(crate) fn unary(operator: UnaryOperator, argument: Expression) -> Expression {
    Expression::UnaryExpression(UnaryExpression {
        span: Span::default(),
        operator,
        argument: Box::new(argument),
    })
}

pub(crate) fn void(argument: Expression) -> Expression {
    unary(UnaryOperator::Void, argument)
}

pub(crate) fn spread(argument: Expression) -> Expression {
    Expression::SpreadElement(SpreadElement {
        span: Span::default(),
        argument: Box::new(argument),
    })
}

pub(crate) fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
    Expression::BinaryExpression(BinaryExpression {
        span: Span::default(),
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub(crate) fn logical(
    operator: LogicalOperator,
    left: Expression,
    right: Expression,
) -> Expression {
    Expression::LogicalExpression(LogicalExpression {
        span: Span::default(),
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub(crate) fn sequence(expressions: Vec<Expression>) -> Expression {
    Expression::SequenceExpression(SequenceExpression {
        span: Span::default(),
        expressions,
    })
}

pub(crate) fn array(elements: Vec<Option<Expression>>) -> Expression {
    Expression::ArrayExpression(ArrayExpression {
        span: Span::default(),
        elements,
    })
}

pub(crate) fn conditional(
    test: Expression,
    consequent: Expression,
    alternate: Expression,
) -> Expression {
    Expression::ConditionalExpression(ConditionalExpression {
        span: Span::default(),
        test: Box::new(test),
        consequent: Box::new(consequent),
        alternate: Box::new(alternate),
    })
}

pub(crate) fn object(properties: Vec<ObjectMember>) -> Expression {
    Expression::ObjectExpression(ObjectExpression {
        span: Span::default(),
        properties,
    })
}

pub(crate) fn property(key: Expression, value: Expression) -> ObjectMember {
    ObjectMember::Property(Property {
        span: Span::default(),
        key: Box::new(key),
        value: Box::new(value),
        computed: false,
        shorthand: false,
    })
}

pub(crate) fn computed_property(key: Expression, value: Expression) -> ObjectMember {
    ObjectMember::Property(Property {
        span: Span::default(),
        key: Box::new(key),
        value: Box::new(value),
        computed: true,
        shorthand: false,
    })
}

pub(crate) fn spread_member(argument: Expression) -> ObjectMember {
    ObjectMember::SpreadElement(SpreadElement {
        span: Span::default(),
        argument: Box::new(argument),
    })
}

fn template_node(expressions: Vec<Expression>) -> TemplateLiteral {
    TemplateLiteral {
        span: Span::default(),
        expressions,
    }
}

pub(crate) fn template(expressions: Vec<Expression>) -> Expression {
    Expression::TemplateLiteral(template_node(expressions))
}

pub(crate) fn tagged_template(tag: Expression, expressions: Vec<Expression>) -> Expression {
    Expression::TaggedTemplateExpression(TaggedTemplateExpression {
        span: Span::default(),
        tag: Box::new(tag),
        quasi: template_node(expressions),
    })
}

pub(crate) fn expr_stmt(expression: Expression) -> Statement {
    Statement::ExpressionStatement(ExpressionStatement {
        span: expression.span().unwrap_or_default(),
        expression,
    })
}

pub(crate) fn block(span: Span, body: Vec<Statement>) -> BlockStatement {
    BlockStatement { span, body }
}

pub(crate) fn arrow(span: Span, body: ArrowBody) -> Expression {
    Expression::ArrowFunctionExpression(ArrowFunctionExpression {
        span,
        body,
        is_async: false,
    })
}

pub(crate) fn arrow_block(span: Span, body: BlockStatement) -> Expression {
    arrow(span, ArrowBody::Block(body))
}

pub(crate) fn arrow_expr(span: Span, body: Expression) -> Expression {
    arrow(span, ArrowBody::Expression(Box::new(body)))
}
