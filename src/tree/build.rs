//! Constructors for common nodes, each with a fresh id.

use std::sync::Arc;

use super::java::{
    Binary, BinaryOperator, Block, Empty, FieldAccess, Identifier, Literal, LiteralValue, MethodInvocation,
    Parentheses, Return,
};
use super::{Container, LeftPadded, RightPadded, Space, Tree, TreeBase, TypeRef};

pub fn identifier(prefix: Space, name: &str, ty: TypeRef) -> Arc<Tree> {
    Arc::new(Tree::Identifier(Identifier {
        base: TreeBase::new(prefix),
        annotations: Vec::new(),
        simple_name: name.to_owned(),
        ty,
        field_type: None,
    }))
}

/// `target.name`, with `dot` the space before the `.`.
pub fn field_access(target: Arc<Tree>, dot: Space, name: &str, ty: TypeRef) -> Arc<Tree> {
    Arc::new(Tree::FieldAccess(FieldAccess {
        base: TreeBase::new(Space::EMPTY),
        target,
        name: LeftPadded::new(dot, identifier(Space::EMPTY, name, ty.clone())),
        ty,
    }))
}

/// `select.name(arguments)`; arguments are separated by `,` with no trailing space.
pub fn method_invocation(
    prefix: Space,
    select: Option<Arc<Tree>>,
    name: &str,
    arguments: Vec<Arc<Tree>>,
    method_type: TypeRef,
) -> Arc<Tree> {
    let arguments = if arguments.is_empty() {
        vec![RightPadded::build(empty())]
    } else {
        arguments.into_iter().map(RightPadded::build).collect()
    };
    Arc::new(Tree::MethodInvocation(MethodInvocation {
        base: TreeBase::new(prefix),
        select: select.map(RightPadded::build),
        type_parameters: None,
        name: identifier(Space::EMPTY, name, None),
        arguments: Container::new(Space::EMPTY, arguments),
        method_type,
    }))
}

pub fn binary(left: Arc<Tree>, operator: BinaryOperator, right: Arc<Tree>) -> Arc<Tree> {
    Arc::new(Tree::Binary(Binary {
        base: TreeBase::new(Space::EMPTY),
        left,
        operator: LeftPadded::new(Space::single_space(), operator),
        right,
        ty: None,
    }))
}

pub fn parentheses(prefix: Space, inner: Arc<Tree>) -> Arc<Tree> {
    Arc::new(Tree::Parentheses(Parentheses {
        base: TreeBase::new(prefix),
        tree: RightPadded::build(inner),
    }))
}

pub fn literal(prefix: Space, value: LiteralValue, ty: TypeRef) -> Arc<Tree> {
    let source = match &value {
        LiteralValue::Bool(b) => b.to_string(),
        LiteralValue::Int(i) => i.to_string(),
        LiteralValue::Float(f) => f.to_string(),
        LiteralValue::String(s) => format!("\"{}\"", s),
    };
    Arc::new(Tree::Literal(Literal {
        base: TreeBase::new(prefix),
        value: Some(value),
        value_source: Some(source),
        ty,
    }))
}

pub fn empty() -> Arc<Tree> {
    Arc::new(Tree::Empty(Empty {
        base: TreeBase::new(Space::EMPTY),
    }))
}

pub fn return_statement(prefix: Space, expression: Option<Arc<Tree>>) -> Arc<Tree> {
    Arc::new(Tree::Return(Return {
        base: TreeBase::new(prefix),
        expression,
    }))
}

/// `{ statements }`, each statement terminated by `;`.
pub fn block(prefix: Space, statements: Vec<Arc<Tree>>, end: Space) -> Arc<Tree> {
    Arc::new(Tree::Block(Block {
        base: TreeBase::new(prefix),
        is_static: RightPadded::build(false),
        statements: statements.into_iter().map(RightPadded::build).collect(),
        end,
    }))
}
