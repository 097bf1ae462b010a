//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use lossless_tree::tree::build;
use lossless_tree::tree::java::*;
use lossless_tree::tree::javascript::*;
use lossless_tree::tree::{Container, Kind, LeftPadded, RightPadded, Space, Tree, TreeBase};
use lossless_tree::types::{ClassKind, JavaType, PrimitiveKind};
use test_utils::generator::{Expr, ExprShape};

pub fn class_type() -> Arc<JavaType> {
    JavaType::class(ClassKind::Class, "java.lang.String")
}

fn base() -> TreeBase {
    TreeBase::new(Space::format(" /* lead */ "))
}

/// A fresh identifier with its own id.
pub fn leaf() -> Arc<Tree> {
    build::identifier(Space::single_space(), "a", Some(class_type()))
}

/// A node of `kind` with every field populated.
pub fn sample(kind: Kind) -> Arc<Tree> {
    let tree = match kind {
        Kind::AnnotatedType => Tree::AnnotatedType(AnnotatedType {
            base: base(),
            annotations: vec![leaf(), leaf()],
            type_expression: leaf(),
        }),
        Kind::Annotation => Tree::Annotation(Annotation {
            base: base(),
            annotation_type: leaf(),
            arguments: Some(Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())])),
        }),
        Kind::ArrayAccess => Tree::ArrayAccess(ArrayAccess {
            base: base(),
            indexed: leaf(),
            dimension: leaf(),
        }),
        Kind::ArrayDimension => Tree::ArrayDimension(ArrayDimension {
            base: base(),
            index: RightPadded::new(leaf(), Space::single_space()),
        }),
        Kind::ArrayType => Tree::ArrayType(ArrayType {
            base: base(),
            element_type: leaf(),
            annotations: vec![leaf(), leaf()],
            dimension: LeftPadded::new(Space::single_space(), Space::format("  // note\n")),
            ty: Some(class_type()),
        }),
        Kind::Assert => Tree::Assert(Assert {
            base: base(),
            condition: leaf(),
            detail: Some(LeftPadded::new(Space::single_space(), leaf())),
        }),
        Kind::Assignment => Tree::Assignment(Assignment {
            base: base(),
            variable: leaf(),
            assignment: LeftPadded::new(Space::single_space(), leaf()),
            ty: Some(class_type()),
        }),
        Kind::AssignmentOperation => Tree::AssignmentOperation(AssignmentOperation {
            base: base(),
            variable: leaf(),
            operator: LeftPadded::new(Space::single_space(), AssignmentOperator::ALL[1]),
            assignment: leaf(),
            ty: Some(class_type()),
        }),
        Kind::Binary => Tree::Binary(Binary {
            base: base(),
            left: leaf(),
            operator: LeftPadded::new(Space::single_space(), BinaryOperator::ALL[1]),
            right: leaf(),
            ty: Some(class_type()),
        }),
        Kind::Block => Tree::Block(Block {
            base: base(),
            is_static: RightPadded::new(true, Space::single_space()),
            statements: vec![RightPadded::new(leaf(), Space::single_space()), RightPadded::new(leaf(), Space::single_space())],
            end: Space::format("  // note\n"),
        }),
        Kind::Break => Tree::Break(Break {
            base: base(),
            label: Some(leaf()),
        }),
        Kind::Case => Tree::Case(Case {
            base: base(),
            case_type: CaseType::ALL[1],
            case_labels: Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())]),
            statements: Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())]),
            body: Some(RightPadded::new(leaf(), Space::single_space())),
            guard: Some(leaf()),
        }),
        Kind::Catch => Tree::Catch(Catch {
            base: base(),
            parameter: leaf(),
            body: leaf(),
        }),
        Kind::ClassDeclaration => Tree::ClassDeclaration(ClassDeclaration {
            base: base(),
            leading_annotations: vec![leaf(), leaf()],
            modifiers: vec![leaf(), leaf()],
            class_kind: leaf(),
            name: leaf(),
            type_parameters: Some(Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())])),
            primary_constructor: Some(Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())])),
            extends: Some(LeftPadded::new(Space::single_space(), leaf())),
            implements: Some(Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())])),
            permits: Some(Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())])),
            body: leaf(),
            ty: Some(class_type()),
        }),
        Kind::ClassDeclarationKind => Tree::ClassDeclarationKind(ClassDeclarationKind {
            base: base(),
            annotations: vec![leaf(), leaf()],
            kind_type: ClassKind::Interface,
        }),
        Kind::CompilationUnit => Tree::CompilationUnit(CompilationUnit {
            base: base(),
            source_path: "text".to_owned(),
            charset: Some("text".to_owned()),
            package_declaration: Some(RightPadded::new(leaf(), Space::single_space())),
            imports: vec![RightPadded::new(leaf(), Space::single_space()), RightPadded::new(leaf(), Space::single_space())],
            classes: vec![leaf(), leaf()],
            eof: Space::format("  // note\n"),
        }),
        Kind::Continue => Tree::Continue(Continue {
            base: base(),
            label: Some(leaf()),
        }),
        Kind::ControlParentheses => Tree::ControlParentheses(ControlParentheses {
            base: base(),
            tree: RightPadded::new(leaf(), Space::single_space()),
        }),
        Kind::DoWhileLoop => Tree::DoWhileLoop(DoWhileLoop {
            base: base(),
            body: RightPadded::new(leaf(), Space::single_space()),
            while_condition: LeftPadded::new(Space::single_space(), leaf()),
        }),
        Kind::Else => Tree::Else(Else {
            base: base(),
            body: RightPadded::new(leaf(), Space::single_space()),
        }),
        Kind::Empty => Tree::Empty(Empty {
            base: base(),
        }),
        Kind::EnumValue => Tree::EnumValue(EnumValue {
            base: base(),
            annotations: vec![leaf(), leaf()],
            name: leaf(),
            initializer: Some(leaf()),
        }),
        Kind::EnumValueSet => Tree::EnumValueSet(EnumValueSet {
            base: base(),
            enums: vec![RightPadded::new(leaf(), Space::single_space()), RightPadded::new(leaf(), Space::single_space())],
            terminated_with_semicolon: true,
        }),
        Kind::FieldAccess => Tree::FieldAccess(FieldAccess {
            base: base(),
            target: leaf(),
            name: LeftPadded::new(Space::single_space(), leaf()),
            ty: Some(class_type()),
        }),
        Kind::ForControl => Tree::ForControl(ForControl {
            base: base(),
            init: vec![RightPadded::new(leaf(), Space::single_space()), RightPadded::new(leaf(), Space::single_space())],
            condition: RightPadded::new(leaf(), Space::single_space()),
            update: vec![RightPadded::new(leaf(), Space::single_space()), RightPadded::new(leaf(), Space::single_space())],
        }),
        Kind::ForEachControl => Tree::ForEachControl(ForEachControl {
            base: base(),
            variable: RightPadded::new(leaf(), Space::single_space()),
            iterable: RightPadded::new(leaf(), Space::single_space()),
        }),
        Kind::ForEachLoop => Tree::ForEachLoop(ForEachLoop {
            base: base(),
            control: leaf(),
            body: RightPadded::new(leaf(), Space::single_space()),
        }),
        Kind::ForLoop => Tree::ForLoop(ForLoop {
            base: base(),
            control: leaf(),
            body: RightPadded::new(leaf(), Space::single_space()),
        }),
        Kind::Identifier => Tree::Identifier(Identifier {
            base: base(),
            annotations: vec![leaf(), leaf()],
            simple_name: "text".to_owned(),
            ty: Some(class_type()),
            field_type: Some(class_type()),
        }),
        Kind::If => Tree::If(If {
            base: base(),
            if_condition: leaf(),
            then_part: RightPadded::new(leaf(), Space::single_space()),
            else_part: Some(leaf()),
        }),
        Kind::Import => Tree::Import(Import {
            base: base(),
            is_static: LeftPadded::new(Space::single_space(), true),
            qualid: leaf(),
            alias: Some(LeftPadded::new(Space::single_space(), leaf())),
        }),
        Kind::InstanceOf => Tree::InstanceOf(InstanceOf {
            base: base(),
            expression: RightPadded::new(leaf(), Space::single_space()),
            clazz: leaf(),
            pattern: Some(leaf()),
            ty: Some(class_type()),
        }),
        Kind::Label => Tree::Label(Label {
            base: base(),
            label: RightPadded::new(leaf(), Space::single_space()),
            statement: leaf(),
        }),
        Kind::Lambda => Tree::Lambda(Lambda {
            base: base(),
            parameters: leaf(),
            arrow: Space::format("  // note\n"),
            body: leaf(),
            ty: Some(class_type()),
        }),
        Kind::LambdaParameters => Tree::LambdaParameters(LambdaParameters {
            base: base(),
            parenthesized: true,
            parameters: vec![RightPadded::new(leaf(), Space::single_space()), RightPadded::new(leaf(), Space::single_space())],
        }),
        Kind::Literal => Tree::Literal(Literal {
            base: base(),
            value: Some(LiteralValue::Int(42)),
            value_source: Some("text".to_owned()),
            ty: Some(class_type()),
        }),
        Kind::MemberReference => Tree::MemberReference(MemberReference {
            base: base(),
            containing: RightPadded::new(leaf(), Space::single_space()),
            type_parameters: Some(Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())])),
            reference: LeftPadded::new(Space::single_space(), leaf()),
            ty: Some(class_type()),
            method_type: Some(class_type()),
            variable_type: Some(class_type()),
        }),
        Kind::MethodDeclaration => Tree::MethodDeclaration(MethodDeclaration {
            base: base(),
            leading_annotations: vec![leaf(), leaf()],
            modifiers: vec![leaf(), leaf()],
            type_parameters: Some(leaf()),
            return_type_expression: Some(leaf()),
            name: leaf(),
            parameters: Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())]),
            throws: Some(Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())])),
            body: Some(leaf()),
            default_value: Some(LeftPadded::new(Space::single_space(), leaf())),
            method_type: Some(class_type()),
        }),
        Kind::MethodInvocation => Tree::MethodInvocation(MethodInvocation {
            base: base(),
            select: Some(RightPadded::new(leaf(), Space::single_space())),
            type_parameters: Some(Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())])),
            name: leaf(),
            arguments: Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())]),
            method_type: Some(class_type()),
        }),
        Kind::Modifier => Tree::Modifier(Modifier {
            base: base(),
            keyword: Some("text".to_owned()),
            modifier_type: ModifierType::ALL[1],
            annotations: vec![leaf(), leaf()],
        }),
        Kind::NamedVariable => Tree::NamedVariable(NamedVariable {
            base: base(),
            declarator: leaf(),
            dimensions_after_name: vec![LeftPadded::new(Space::single_space(), Space::format("  // note\n")), LeftPadded::new(Space::single_space(), Space::format("  // note\n"))],
            initializer: Some(LeftPadded::new(Space::single_space(), leaf())),
            variable_type: Some(class_type()),
        }),
        Kind::NewArray => Tree::NewArray(NewArray {
            base: base(),
            type_expression: Some(leaf()),
            dimensions: vec![leaf(), leaf()],
            initializer: Some(Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())])),
            ty: Some(class_type()),
        }),
        Kind::NewClass => Tree::NewClass(NewClass {
            base: base(),
            enclosing: Some(RightPadded::new(leaf(), Space::single_space())),
            new_keyword: Space::format("  // note\n"),
            clazz: Some(leaf()),
            arguments: Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())]),
            body: Some(leaf()),
            constructor_type: Some(class_type()),
        }),
        Kind::Package => Tree::Package(Package {
            base: base(),
            expression: leaf(),
            annotations: vec![leaf(), leaf()],
        }),
        Kind::ParameterizedType => Tree::ParameterizedType(ParameterizedType {
            base: base(),
            clazz: leaf(),
            type_parameters: Some(Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())])),
            ty: Some(class_type()),
        }),
        Kind::Parentheses => Tree::Parentheses(Parentheses {
            base: base(),
            tree: RightPadded::new(leaf(), Space::single_space()),
        }),
        Kind::Primitive => Tree::Primitive(Primitive {
            base: base(),
            ty: JavaType::primitive(PrimitiveKind::Int),
        }),
        Kind::Return => Tree::Return(Return {
            base: base(),
            expression: Some(leaf()),
        }),
        Kind::Switch => Tree::Switch(Switch {
            base: base(),
            selector: leaf(),
            cases: leaf(),
        }),
        Kind::Ternary => Tree::Ternary(Ternary {
            base: base(),
            condition: leaf(),
            true_part: LeftPadded::new(Space::single_space(), leaf()),
            false_part: LeftPadded::new(Space::single_space(), leaf()),
            ty: Some(class_type()),
        }),
        Kind::Throw => Tree::Throw(Throw {
            base: base(),
            exception: leaf(),
        }),
        Kind::Try => Tree::Try(Try {
            base: base(),
            resources: Some(Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())])),
            body: leaf(),
            catches: vec![leaf(), leaf()],
            finally: Some(LeftPadded::new(Space::single_space(), leaf())),
        }),
        Kind::TypeCast => Tree::TypeCast(TypeCast {
            base: base(),
            clazz: leaf(),
            expression: leaf(),
        }),
        Kind::TypeParameter => Tree::TypeParameter(TypeParameter {
            base: base(),
            annotations: vec![leaf(), leaf()],
            modifiers: vec![leaf(), leaf()],
            name: leaf(),
            bounds: Some(Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())])),
        }),
        Kind::TypeParameters => Tree::TypeParameters(TypeParameters {
            base: base(),
            annotations: vec![leaf(), leaf()],
            type_parameters: vec![RightPadded::new(leaf(), Space::single_space()), RightPadded::new(leaf(), Space::single_space())],
        }),
        Kind::Unary => Tree::Unary(Unary {
            base: base(),
            operator: LeftPadded::new(Space::single_space(), UnaryOperator::ALL[1]),
            expression: leaf(),
            ty: Some(class_type()),
        }),
        Kind::Unknown => Tree::Unknown(Unknown {
            base: base(),
            source: leaf(),
        }),
        Kind::UnknownSource => Tree::UnknownSource(UnknownSource {
            base: base(),
            text: "text".to_owned(),
        }),
        Kind::VariableDeclarations => Tree::VariableDeclarations(VariableDeclarations {
            base: base(),
            leading_annotations: vec![leaf(), leaf()],
            modifiers: vec![leaf(), leaf()],
            type_expression: Some(leaf()),
            varargs: Some(Space::format("  // note\n")),
            variables: vec![RightPadded::new(leaf(), Space::single_space()), RightPadded::new(leaf(), Space::single_space())],
        }),
        Kind::WhileLoop => Tree::WhileLoop(WhileLoop {
            base: base(),
            condition: leaf(),
            body: RightPadded::new(leaf(), Space::single_space()),
        }),
        Kind::Wildcard => Tree::Wildcard(Wildcard {
            base: base(),
            bound: Some(LeftPadded::new(Space::single_space(), WildcardBound::ALL[1])),
            bounded_type: Some(leaf()),
        }),
        Kind::JsCompilationUnit => Tree::JsCompilationUnit(JsCompilationUnit {
            base: base(),
            source_path: "text".to_owned(),
            charset: Some("text".to_owned()),
            statements: vec![RightPadded::new(leaf(), Space::single_space()), RightPadded::new(leaf(), Space::single_space())],
            eof: Space::format("  // note\n"),
        }),
        Kind::Alias => Tree::Alias(Alias {
            base: base(),
            property_name: RightPadded::new(leaf(), Space::single_space()),
            alias: leaf(),
        }),
        Kind::ArrowFunction => Tree::ArrowFunction(ArrowFunction {
            base: base(),
            leading_annotations: vec![leaf(), leaf()],
            modifiers: vec![leaf(), leaf()],
            type_parameters: Some(leaf()),
            lambda: leaf(),
            return_type_expression: Some(leaf()),
        }),
        Kind::Await => Tree::Await(Await {
            base: base(),
            expression: leaf(),
            ty: Some(class_type()),
        }),
        Kind::Delete => Tree::Delete(Delete {
            base: base(),
            expression: leaf(),
        }),
        Kind::ExpressionStatement => Tree::ExpressionStatement(ExpressionStatement {
            base: base(),
            expression: leaf(),
        }),
        Kind::ExpressionWithTypeArguments => Tree::ExpressionWithTypeArguments(ExpressionWithTypeArguments {
            base: base(),
            clazz: leaf(),
            type_arguments: Some(Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())])),
            ty: Some(class_type()),
        }),
        Kind::JsImport => Tree::JsImport(JsImport {
            base: base(),
            modifiers: vec![leaf(), leaf()],
            import_clause: Some(leaf()),
            module_specifier: Some(LeftPadded::new(Space::single_space(), leaf())),
        }),
        Kind::ImportClause => Tree::ImportClause(ImportClause {
            base: base(),
            type_only: true,
            name: Some(RightPadded::new(leaf(), Space::single_space())),
            named_bindings: Some(leaf()),
        }),
        Kind::NamedImports => Tree::NamedImports(NamedImports {
            base: base(),
            elements: Container::new(Space::whitespace("\n"), vec![RightPadded::new(leaf(), Space::EMPTY), RightPadded::build(leaf())]),
            ty: Some(class_type()),
        }),
        Kind::ImportSpecifier => Tree::ImportSpecifier(ImportSpecifier {
            base: base(),
            import_type: LeftPadded::new(Space::single_space(), true),
            specifier: leaf(),
            ty: Some(class_type()),
        }),
        Kind::PropertyAssignment => Tree::PropertyAssignment(PropertyAssignment {
            base: base(),
            name: RightPadded::new(leaf(), Space::single_space()),
            assignment_token: AssignmentToken::ALL[0],
            initializer: Some(leaf()),
        }),
        Kind::TemplateExpression => Tree::TemplateExpression(TemplateExpression {
            base: base(),
            head: leaf(),
            spans: vec![RightPadded::new(leaf(), Space::single_space()), RightPadded::new(leaf(), Space::single_space())],
            ty: Some(class_type()),
        }),
        Kind::TemplateSpan => Tree::TemplateSpan(TemplateSpan {
            base: base(),
            expression: leaf(),
            tail: leaf(),
        }),
        Kind::TypeOf => Tree::TypeOf(TypeOf {
            base: base(),
            expression: leaf(),
            ty: Some(class_type()),
        }),
        Kind::TypeDeclaration => Tree::TypeDeclaration(TypeDeclaration {
            base: base(),
            modifiers: vec![leaf(), leaf()],
            name: LeftPadded::new(Space::single_space(), leaf()),
            type_parameters: Some(leaf()),
            initializer: LeftPadded::new(Space::single_space(), leaf()),
            ty: Some(class_type()),
        }),
        Kind::Union => Tree::Union(Union {
            base: base(),
            types: vec![RightPadded::new(leaf(), Space::single_space()), RightPadded::new(leaf(), Space::single_space())],
            ty: Some(class_type()),
        }),
        Kind::Intersection => Tree::Intersection(Intersection {
            base: base(),
            types: vec![RightPadded::new(leaf(), Space::single_space()), RightPadded::new(leaf(), Space::single_space())],
            ty: Some(class_type()),
        }),
        Kind::Void => Tree::Void(Void {
            base: base(),
            expression: leaf(),
        }),
        Kind::StatementExpression => Tree::StatementExpression(StatementExpression {
            base: base(),
            statement: leaf(),
        }),
        Kind::JsBinary => Tree::JsBinary(JsBinary {
            base: base(),
            left: leaf(),
            operator: LeftPadded::new(Space::single_space(), JsBinaryOperator::ALL[1]),
            right: leaf(),
            ty: Some(class_type()),
        }),
        Kind::JsAssignmentOperation => Tree::JsAssignmentOperation(JsAssignmentOperation {
            base: base(),
            variable: leaf(),
            operator: LeftPadded::new(Space::single_space(), JsAssignmentOperator::ALL[1]),
            assignment: leaf(),
            ty: Some(class_type()),
        }),
    };
    Arc::new(tree)
}

/// One populated node of every kind.
pub fn all_samples() -> Vec<Arc<Tree>> {
    Kind::ALL.iter().map(|kind| sample(*kind)).collect()
}

/// Builds the tree for a generated expression.
pub fn expr_to_tree(expr: &Expr) -> Arc<Tree> {
    let prefix = Space::format(expr.prefix.as_str());
    match &expr.shape {
        ExprShape::Ident(name) => build::identifier(prefix, name, None),
        ExprShape::IntLit(value) => build::literal(prefix, LiteralValue::Int(*value), None),
        ExprShape::BoolLit(value) => build::literal(prefix, LiteralValue::Bool(*value), None),
        ExprShape::StringLit(value) => build::literal(prefix, LiteralValue::String(value.clone()), None),
        ExprShape::Binary {
            left,
            before_op,
            op,
            right,
        } => Arc::new(Tree::Binary(Binary {
            base: TreeBase::new(prefix),
            left: expr_to_tree(left),
            operator: LeftPadded::new(
                Space::format(before_op.as_str()),
                BinaryOperator::from_name(op.name()).expect("generated operators are Java operators"),
            ),
            right: expr_to_tree(right),
            ty: None,
        })),
        ExprShape::Parens { inner, before_close } => Arc::new(Tree::Parentheses(Parentheses {
            base: TreeBase::new(prefix),
            tree: RightPadded::new(expr_to_tree(inner), Space::format(before_close.as_str())),
        })),
        ExprShape::FieldAccess {
            target,
            before_dot,
            name,
        } => Arc::new(Tree::FieldAccess(FieldAccess {
            base: TreeBase::new(prefix),
            target: expr_to_tree(target),
            name: LeftPadded::new(
                Space::format(before_dot.as_str()),
                build::identifier(Space::EMPTY, name, None),
            ),
            ty: None,
        })),
        ExprShape::MethodCall { select, name, args } => build::method_invocation(
            prefix,
            select.as_deref().map(expr_to_tree),
            name,
            args.iter().map(expr_to_tree).collect(),
            None,
        ),
    }
}
