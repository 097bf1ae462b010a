//! JavaScript and TypeScript node kinds. Everything that JavaScript shares with
//! Java (identifiers, blocks, method invocations, ...) uses the Java-family kinds.

use std::sync::Arc;

use super::{Container, LeftPadded, RightPadded, Space, Tree, TreeBase, TypeRef};

keyword_enum! {
    pub enum JsBinaryOperator {
        As => "As",
        IdentityEquals => "IdentityEquals",
        IdentityNotEquals => "IdentityNotEquals",
        In => "In",
        QuestionQuestion => "QuestionQuestion",
        Comma => "Comma",
    }
}

keyword_enum! {
    pub enum JsAssignmentOperator {
        QuestionQuestion => "QuestionQuestion",
        And => "And",
        Or => "Or",
        Power => "Power",
        Exp => "Exp",
    }
}

keyword_enum! {
    /// The token between a property name and its value: `a: 1`, `a = 1` or shorthand `a`.
    pub enum AssignmentToken {
        Colon => "Colon",
        Equals => "Equals",
        Empty => "Empty",
    }
}

type J = Arc<Tree>;

#[derive(Debug, Clone, PartialEq)]
pub struct JsCompilationUnit {
    pub base: TreeBase,
    pub source_path: String,
    pub charset: Option<String>,
    pub statements: Vec<RightPadded<J>>,
    pub eof: Space,
}

/// `name as alias` inside an import or export clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Alias {
    pub base: TreeBase,
    pub property_name: RightPadded<J>,
    pub alias: J,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFunction {
    pub base: TreeBase,
    pub leading_annotations: Vec<J>,
    pub modifiers: Vec<J>,
    pub type_parameters: Option<J>,
    /// A `J.Lambda` holding parameters, arrow and body.
    pub lambda: J,
    pub return_type_expression: Option<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Await {
    pub base: TreeBase,
    pub expression: J,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub base: TreeBase,
    pub expression: J,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub base: TreeBase,
    pub expression: J,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionWithTypeArguments {
    pub base: TreeBase,
    pub clazz: J,
    pub type_arguments: Option<Container<J>>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsImport {
    pub base: TreeBase,
    pub modifiers: Vec<J>,
    pub import_clause: Option<J>,
    /// `from "module"`.
    pub module_specifier: Option<LeftPadded<J>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportClause {
    pub base: TreeBase,
    pub type_only: bool,
    /// The default import.
    pub name: Option<RightPadded<J>>,
    pub named_bindings: Option<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedImports {
    pub base: TreeBase,
    pub elements: Container<J>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpecifier {
    pub base: TreeBase,
    /// `type` modifier on a single specifier.
    pub import_type: LeftPadded<bool>,
    pub specifier: J,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAssignment {
    pub base: TreeBase,
    pub name: RightPadded<J>,
    pub assignment_token: AssignmentToken,
    pub initializer: Option<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateExpression {
    pub base: TreeBase,
    /// A `J.Literal` with the text up to the first substitution.
    pub head: J,
    /// [`TemplateSpan`]s.
    pub spans: Vec<RightPadded<J>>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSpan {
    pub base: TreeBase,
    pub expression: J,
    pub tail: J,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeOf {
    pub base: TreeBase,
    pub expression: J,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    pub base: TreeBase,
    pub modifiers: Vec<J>,
    pub name: LeftPadded<J>,
    pub type_parameters: Option<J>,
    pub initializer: LeftPadded<J>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Union {
    pub base: TreeBase,
    pub types: Vec<RightPadded<J>>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub base: TreeBase,
    pub types: Vec<RightPadded<J>>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Void {
    pub base: TreeBase,
    pub expression: J,
}

/// A statement used where an expression is expected.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementExpression {
    pub base: TreeBase,
    pub statement: J,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsBinary {
    pub base: TreeBase,
    pub left: J,
    pub operator: LeftPadded<JsBinaryOperator>,
    pub right: J,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsAssignmentOperation {
    pub base: TreeBase,
    pub variable: J,
    pub operator: LeftPadded<JsAssignmentOperator>,
    pub assignment: J,
    pub ty: TypeRef,
}
