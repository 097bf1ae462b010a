//! Java-family node kinds. These also serve as the shared core that other
//! language families build on.

use std::sync::Arc;

use super::{Container, LeftPadded, RightPadded, Space, Tree, TreeBase, TypeRef};
use crate::types::{ClassKind, JavaType};

keyword_enum! {
    pub enum BinaryOperator {
        Addition => "Addition",
        Subtraction => "Subtraction",
        Multiplication => "Multiplication",
        Division => "Division",
        Modulo => "Modulo",
        LessThan => "LessThan",
        GreaterThan => "GreaterThan",
        LessThanOrEqual => "LessThanOrEqual",
        GreaterThanOrEqual => "GreaterThanOrEqual",
        Equal => "Equal",
        NotEqual => "NotEqual",
        BitAnd => "BitAnd",
        BitOr => "BitOr",
        BitXor => "BitXor",
        LeftShift => "LeftShift",
        RightShift => "RightShift",
        UnsignedRightShift => "UnsignedRightShift",
        Or => "Or",
        And => "And",
    }
}

keyword_enum! {
    pub enum AssignmentOperator {
        Addition => "Addition",
        Subtraction => "Subtraction",
        Multiplication => "Multiplication",
        Division => "Division",
        Modulo => "Modulo",
        BitAnd => "BitAnd",
        BitOr => "BitOr",
        BitXor => "BitXor",
        LeftShift => "LeftShift",
        RightShift => "RightShift",
        UnsignedRightShift => "UnsignedRightShift",
        Exponentiation => "Exponentiation",
    }
}

keyword_enum! {
    pub enum UnaryOperator {
        PreIncrement => "PreIncrement",
        PreDecrement => "PreDecrement",
        PostIncrement => "PostIncrement",
        PostDecrement => "PostDecrement",
        Positive => "Positive",
        Negative => "Negative",
        Complement => "Complement",
        Not => "Not",
    }
}

keyword_enum! {
    /// `case x:` statements versus `case x ->` rules.
    pub enum CaseType {
        Statement => "Statement",
        Rule => "Rule",
    }
}

keyword_enum! {
    pub enum ModifierType {
        Default => "Default",
        Public => "Public",
        Protected => "Protected",
        Private => "Private",
        Abstract => "Abstract",
        Static => "Static",
        Final => "Final",
        Sealed => "Sealed",
        NonSealed => "NonSealed",
        Transient => "Transient",
        Volatile => "Volatile",
        Synchronized => "Synchronized",
        Native => "Native",
        Strictfp => "Strictfp",
        Async => "Async",
        Reified => "Reified",
        Inline => "Inline",
        LanguageExtension => "LanguageExtension",
    }
}

keyword_enum! {
    pub enum WildcardBound {
        Extends => "Extends",
        Super => "Super",
    }
}

/// The value of a literal. `None` on [`Literal::value`] is the `null` literal.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl super::Identical for LiteralValue {
    fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (LiteralValue::Float(a), LiteralValue::Float(b)) => a.to_bits() == b.to_bits(),
            _ => self == other,
        }
    }
}

type J = Arc<Tree>;

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedType {
    pub base: TreeBase,
    pub annotations: Vec<J>,
    pub type_expression: J,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub base: TreeBase,
    pub annotation_type: J,
    pub arguments: Option<Container<J>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayAccess {
    pub base: TreeBase,
    pub indexed: J,
    /// An [`ArrayDimension`].
    pub dimension: J,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayDimension {
    pub base: TreeBase,
    pub index: RightPadded<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub base: TreeBase,
    pub element_type: J,
    pub annotations: Vec<J>,
    /// Space before `[` and inside the brackets.
    pub dimension: LeftPadded<Space>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assert {
    pub base: TreeBase,
    pub condition: J,
    pub detail: Option<LeftPadded<J>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub base: TreeBase,
    pub variable: J,
    pub assignment: LeftPadded<J>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentOperation {
    pub base: TreeBase,
    pub variable: J,
    pub operator: LeftPadded<AssignmentOperator>,
    pub assignment: J,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub base: TreeBase,
    pub left: J,
    pub operator: LeftPadded<BinaryOperator>,
    pub right: J,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub base: TreeBase,
    /// `static { ... }` initializer blocks; the padding is the space after `static`.
    pub is_static: RightPadded<bool>,
    pub statements: Vec<RightPadded<J>>,
    /// Space before the closing brace.
    pub end: Space,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Break {
    pub base: TreeBase,
    pub label: Option<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub base: TreeBase,
    pub case_type: CaseType,
    pub case_labels: Container<J>,
    pub statements: Container<J>,
    /// The right-hand side of a `case x -> body` rule.
    pub body: Option<RightPadded<J>>,
    pub guard: Option<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catch {
    pub base: TreeBase,
    /// A [`ControlParentheses`] around the caught variable declaration.
    pub parameter: J,
    pub body: J,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclaration {
    pub base: TreeBase,
    pub leading_annotations: Vec<J>,
    pub modifiers: Vec<J>,
    /// A [`ClassDeclarationKind`].
    pub class_kind: J,
    pub name: J,
    pub type_parameters: Option<Container<J>>,
    pub primary_constructor: Option<Container<J>>,
    pub extends: Option<LeftPadded<J>>,
    pub implements: Option<Container<J>>,
    pub permits: Option<Container<J>>,
    pub body: J,
    pub ty: TypeRef,
}

/// The `class`/`interface`/`enum` keyword and any annotations placed before it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclarationKind {
    pub base: TreeBase,
    pub annotations: Vec<J>,
    pub kind_type: ClassKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    pub base: TreeBase,
    pub source_path: String,
    pub charset: Option<String>,
    pub package_declaration: Option<RightPadded<J>>,
    pub imports: Vec<RightPadded<J>>,
    pub classes: Vec<J>,
    pub eof: Space,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Continue {
    pub base: TreeBase,
    pub label: Option<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlParentheses {
    pub base: TreeBase,
    pub tree: RightPadded<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileLoop {
    pub base: TreeBase,
    pub body: RightPadded<J>,
    pub while_condition: LeftPadded<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Else {
    pub base: TreeBase,
    pub body: RightPadded<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Empty {
    pub base: TreeBase,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub base: TreeBase,
    pub annotations: Vec<J>,
    pub name: J,
    /// A [`NewClass`] for constants with arguments or a body.
    pub initializer: Option<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValueSet {
    pub base: TreeBase,
    pub enums: Vec<RightPadded<J>>,
    pub terminated_with_semicolon: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldAccess {
    pub base: TreeBase,
    pub target: J,
    pub name: LeftPadded<J>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForControl {
    pub base: TreeBase,
    pub init: Vec<RightPadded<J>>,
    pub condition: RightPadded<J>,
    pub update: Vec<RightPadded<J>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForEachControl {
    pub base: TreeBase,
    pub variable: RightPadded<J>,
    pub iterable: RightPadded<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForEachLoop {
    pub base: TreeBase,
    pub control: J,
    pub body: RightPadded<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub base: TreeBase,
    pub control: J,
    pub body: RightPadded<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub base: TreeBase,
    pub annotations: Vec<J>,
    pub simple_name: String,
    pub ty: TypeRef,
    /// Set when the identifier names a field.
    pub field_type: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub base: TreeBase,
    pub if_condition: J,
    pub then_part: RightPadded<J>,
    /// An [`Else`].
    pub else_part: Option<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub base: TreeBase,
    pub is_static: LeftPadded<bool>,
    pub qualid: J,
    pub alias: Option<LeftPadded<J>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstanceOf {
    pub base: TreeBase,
    pub expression: RightPadded<J>,
    pub clazz: J,
    pub pattern: Option<J>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub base: TreeBase,
    pub label: RightPadded<J>,
    pub statement: J,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub base: TreeBase,
    /// A [`LambdaParameters`].
    pub parameters: J,
    pub arrow: Space,
    pub body: J,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LambdaParameters {
    pub base: TreeBase,
    pub parenthesized: bool,
    pub parameters: Vec<RightPadded<J>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub base: TreeBase,
    pub value: Option<LiteralValue>,
    /// The literal exactly as written, e.g. `0x1F` or `'\n'`.
    pub value_source: Option<String>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberReference {
    pub base: TreeBase,
    pub containing: RightPadded<J>,
    pub type_parameters: Option<Container<J>>,
    pub reference: LeftPadded<J>,
    pub ty: TypeRef,
    pub method_type: TypeRef,
    pub variable_type: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDeclaration {
    pub base: TreeBase,
    pub leading_annotations: Vec<J>,
    pub modifiers: Vec<J>,
    /// A [`TypeParameters`].
    pub type_parameters: Option<J>,
    /// Absent for constructors.
    pub return_type_expression: Option<J>,
    pub name: J,
    pub parameters: Container<J>,
    pub throws: Option<Container<J>>,
    pub body: Option<J>,
    /// The `default value` of an annotation attribute.
    pub default_value: Option<LeftPadded<J>>,
    pub method_type: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodInvocation {
    pub base: TreeBase,
    pub select: Option<RightPadded<J>>,
    pub type_parameters: Option<Container<J>>,
    pub name: J,
    pub arguments: Container<J>,
    pub method_type: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    pub base: TreeBase,
    /// The source text for [`ModifierType::LanguageExtension`] modifiers.
    pub keyword: Option<String>,
    pub modifier_type: ModifierType,
    pub annotations: Vec<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedVariable {
    pub base: TreeBase,
    pub declarator: J,
    /// `int x[][]` style dimensions.
    pub dimensions_after_name: Vec<LeftPadded<Space>>,
    pub initializer: Option<LeftPadded<J>>,
    pub variable_type: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewArray {
    pub base: TreeBase,
    pub type_expression: Option<J>,
    pub dimensions: Vec<J>,
    pub initializer: Option<Container<J>>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewClass {
    pub base: TreeBase,
    pub enclosing: Option<RightPadded<J>>,
    pub new_keyword: Space,
    pub clazz: Option<J>,
    pub arguments: Container<J>,
    /// Anonymous class body.
    pub body: Option<J>,
    pub constructor_type: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub base: TreeBase,
    pub expression: J,
    pub annotations: Vec<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterizedType {
    pub base: TreeBase,
    pub clazz: J,
    pub type_parameters: Option<Container<J>>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parentheses {
    pub base: TreeBase,
    pub tree: RightPadded<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub base: TreeBase,
    pub ty: Arc<JavaType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub base: TreeBase,
    pub expression: Option<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    pub base: TreeBase,
    /// A [`ControlParentheses`].
    pub selector: J,
    /// A [`Block`] of [`Case`]s.
    pub cases: J,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ternary {
    pub base: TreeBase,
    pub condition: J,
    pub true_part: LeftPadded<J>,
    pub false_part: LeftPadded<J>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Throw {
    pub base: TreeBase,
    pub exception: J,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Try {
    pub base: TreeBase,
    pub resources: Option<Container<J>>,
    pub body: J,
    pub catches: Vec<J>,
    pub finally: Option<LeftPadded<J>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeCast {
    pub base: TreeBase,
    /// A [`ControlParentheses`] around the target type.
    pub clazz: J,
    pub expression: J,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeParameter {
    pub base: TreeBase,
    pub annotations: Vec<J>,
    pub modifiers: Vec<J>,
    pub name: J,
    pub bounds: Option<Container<J>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeParameters {
    pub base: TreeBase,
    pub annotations: Vec<J>,
    pub type_parameters: Vec<RightPadded<J>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    pub base: TreeBase,
    pub operator: LeftPadded<UnaryOperator>,
    pub expression: J,
    pub ty: TypeRef,
}

/// Source the parser could not model, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Unknown {
    pub base: TreeBase,
    /// An [`UnknownSource`].
    pub source: J,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownSource {
    pub base: TreeBase,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarations {
    pub base: TreeBase,
    pub leading_annotations: Vec<J>,
    pub modifiers: Vec<J>,
    pub type_expression: Option<J>,
    /// Space before `...` of a varargs parameter.
    pub varargs: Option<Space>,
    /// [`NamedVariable`]s.
    pub variables: Vec<RightPadded<J>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    pub base: TreeBase,
    pub condition: J,
    pub body: RightPadded<J>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wildcard {
    pub base: TreeBase,
    pub bound: Option<LeftPadded<WildcardBound>>,
    pub bounded_type: Option<J>,
}
