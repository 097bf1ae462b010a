//! Visitors that produce new trees while sharing every unchanged subtree.
//!
//! A visitor overrides the `visit_*` methods for the kinds it cares about and
//! inherits a full traversal for the rest. Each default method delegates to a
//! `walk_*` function in [`walk`], so an override can run the default traversal
//! first and then adjust its result. Returning `None` removes a node: a removed
//! list element is dropped, a removed optional child clears the field, and a
//! removed required child removes its parent as well.

mod cursor;
mod draft;
pub mod javascript;
pub mod walk;

use std::sync::Arc;

use crate::tree::java::*;
use crate::tree::javascript::{JsAssignmentOperator, JsBinaryOperator};
use crate::tree::{Container, Identical, LeftPadded, Markers, RightPadded, Space, Tree};
use crate::types::JavaType;

pub use cursor::{Cursor, CursorValue, PaddingKind};
pub use draft::Draft;
pub use javascript::JavaScriptVisitor;

/// A value that can sit inside a padding wrapper.
///
/// Nodes are visited through [`JavaVisitor::visit`], spaces through
/// [`JavaVisitor::visit_space`]; keywords and flags pass through untouched.
pub trait PaddedElement: Clone + Identical {
    fn visit_element<P, V: JavaVisitor<P>>(&self, v: &mut V, p: &mut P) -> Option<Self>;
}

impl PaddedElement for Arc<Tree> {
    fn visit_element<P, V: JavaVisitor<P>>(&self, v: &mut V, p: &mut P) -> Option<Self> {
        v.visit(self, p)
    }
}

impl PaddedElement for Space {
    fn visit_element<P, V: JavaVisitor<P>>(&self, v: &mut V, p: &mut P) -> Option<Self> {
        Some(v.visit_space(self, p))
    }
}

macro_rules! pass_through_elements {
    ($($ty:ty),* $(,)?) => {
        $(impl PaddedElement for $ty {
            fn visit_element<P, V: JavaVisitor<P>>(&self, _v: &mut V, _p: &mut P) -> Option<Self> {
                Some(self.clone())
            }
        })*
    };
}

pass_through_elements!(
    bool,
    String,
    BinaryOperator,
    AssignmentOperator,
    UnaryOperator,
    WildcardBound,
    JsBinaryOperator,
    JsAssignmentOperator,
);

/// Visitor over Java-family trees.
///
/// Nodes of other families are handed to [`JavaVisitor::visit_foreign`], which
/// returns them unchanged; see [`JavaScriptVisitor`] for JavaScript.
pub trait JavaVisitor<P>: Sized {
    fn cursor(&self) -> &Cursor;

    fn cursor_mut(&mut self) -> &mut Cursor;

    /// Visits `tree` with the tree pushed on the cursor. The cursor entry is
    /// popped again whatever the outcome of the visit.
    fn visit(&mut self, tree: &Arc<Tree>, p: &mut P) -> Option<Arc<Tree>> {
        self.cursor_mut().push(CursorValue::Tree(Arc::clone(tree)));
        let result = self.visit_in_cursor(tree, p);
        self.cursor_mut().pop();
        result
    }

    fn visit_option(&mut self, tree: Option<&Arc<Tree>>, p: &mut P) -> Option<Arc<Tree>> {
        tree.and_then(|tree| self.visit(tree, p))
    }

    fn visit_in_cursor(&mut self, tree: &Arc<Tree>, p: &mut P) -> Option<Arc<Tree>> {
        let tree = self.pre_visit(tree, p)?;
        let tree = self.accept(&tree, p)?;
        self.post_visit(&tree, p)
    }

    /// Returning `None` skips the subtree and removes it from the result.
    fn pre_visit(&mut self, tree: &Arc<Tree>, _p: &mut P) -> Option<Arc<Tree>> {
        Some(Arc::clone(tree))
    }

    fn post_visit(&mut self, tree: &Arc<Tree>, _p: &mut P) -> Option<Arc<Tree>> {
        Some(Arc::clone(tree))
    }

    fn accept(&mut self, tree: &Arc<Tree>, p: &mut P) -> Option<Arc<Tree>> {
        match &**tree {
            Tree::AnnotatedType(node) => self.visit_annotated_type(tree, node, p),
            Tree::Annotation(node) => self.visit_annotation(tree, node, p),
            Tree::ArrayAccess(node) => self.visit_array_access(tree, node, p),
            Tree::ArrayDimension(node) => self.visit_array_dimension(tree, node, p),
            Tree::ArrayType(node) => self.visit_array_type(tree, node, p),
            Tree::Assert(node) => self.visit_assert(tree, node, p),
            Tree::Assignment(node) => self.visit_assignment(tree, node, p),
            Tree::AssignmentOperation(node) => self.visit_assignment_operation(tree, node, p),
            Tree::Binary(node) => self.visit_binary(tree, node, p),
            Tree::Block(node) => self.visit_block(tree, node, p),
            Tree::Break(node) => self.visit_break(tree, node, p),
            Tree::Case(node) => self.visit_case(tree, node, p),
            Tree::Catch(node) => self.visit_catch(tree, node, p),
            Tree::ClassDeclaration(node) => self.visit_class_declaration(tree, node, p),
            Tree::ClassDeclarationKind(node) => self.visit_class_declaration_kind(tree, node, p),
            Tree::CompilationUnit(node) => self.visit_compilation_unit(tree, node, p),
            Tree::Continue(node) => self.visit_continue(tree, node, p),
            Tree::ControlParentheses(node) => self.visit_control_parentheses(tree, node, p),
            Tree::DoWhileLoop(node) => self.visit_do_while_loop(tree, node, p),
            Tree::Else(node) => self.visit_else(tree, node, p),
            Tree::Empty(node) => self.visit_empty(tree, node, p),
            Tree::EnumValue(node) => self.visit_enum_value(tree, node, p),
            Tree::EnumValueSet(node) => self.visit_enum_value_set(tree, node, p),
            Tree::FieldAccess(node) => self.visit_field_access(tree, node, p),
            Tree::ForControl(node) => self.visit_for_control(tree, node, p),
            Tree::ForEachControl(node) => self.visit_for_each_control(tree, node, p),
            Tree::ForEachLoop(node) => self.visit_for_each_loop(tree, node, p),
            Tree::ForLoop(node) => self.visit_for_loop(tree, node, p),
            Tree::Identifier(node) => self.visit_identifier(tree, node, p),
            Tree::If(node) => self.visit_if(tree, node, p),
            Tree::Import(node) => self.visit_import(tree, node, p),
            Tree::InstanceOf(node) => self.visit_instance_of(tree, node, p),
            Tree::Label(node) => self.visit_label(tree, node, p),
            Tree::Lambda(node) => self.visit_lambda(tree, node, p),
            Tree::LambdaParameters(node) => self.visit_lambda_parameters(tree, node, p),
            Tree::Literal(node) => self.visit_literal(tree, node, p),
            Tree::MemberReference(node) => self.visit_member_reference(tree, node, p),
            Tree::MethodDeclaration(node) => self.visit_method_declaration(tree, node, p),
            Tree::MethodInvocation(node) => self.visit_method_invocation(tree, node, p),
            Tree::Modifier(node) => self.visit_modifier(tree, node, p),
            Tree::NamedVariable(node) => self.visit_named_variable(tree, node, p),
            Tree::NewArray(node) => self.visit_new_array(tree, node, p),
            Tree::NewClass(node) => self.visit_new_class(tree, node, p),
            Tree::Package(node) => self.visit_package(tree, node, p),
            Tree::ParameterizedType(node) => self.visit_parameterized_type(tree, node, p),
            Tree::Parentheses(node) => self.visit_parentheses(tree, node, p),
            Tree::Primitive(node) => self.visit_primitive(tree, node, p),
            Tree::Return(node) => self.visit_return(tree, node, p),
            Tree::Switch(node) => self.visit_switch(tree, node, p),
            Tree::Ternary(node) => self.visit_ternary(tree, node, p),
            Tree::Throw(node) => self.visit_throw(tree, node, p),
            Tree::Try(node) => self.visit_try(tree, node, p),
            Tree::TypeCast(node) => self.visit_type_cast(tree, node, p),
            Tree::TypeParameter(node) => self.visit_type_parameter(tree, node, p),
            Tree::TypeParameters(node) => self.visit_type_parameters(tree, node, p),
            Tree::Unary(node) => self.visit_unary(tree, node, p),
            Tree::Unknown(node) => self.visit_unknown(tree, node, p),
            Tree::UnknownSource(node) => self.visit_unknown_source(tree, node, p),
            Tree::VariableDeclarations(node) => self.visit_variable_declarations(tree, node, p),
            Tree::WhileLoop(node) => self.visit_while_loop(tree, node, p),
            Tree::Wildcard(node) => self.visit_wildcard(tree, node, p),
            _ => self.visit_foreign(tree, p),
        }
    }

    /// Called for kinds outside the Java family.
    fn visit_foreign(&mut self, tree: &Arc<Tree>, _p: &mut P) -> Option<Arc<Tree>> {
        Some(Arc::clone(tree))
    }

    fn visit_space(&mut self, space: &Space, _p: &mut P) -> Space {
        space.clone()
    }

    fn visit_markers(&mut self, markers: &Markers, _p: &mut P) -> Markers {
        markers.clone()
    }

    fn visit_type(&mut self, ty: &Arc<JavaType>, _p: &mut P) -> Arc<JavaType> {
        Arc::clone(ty)
    }

    fn visit_type_option(&mut self, ty: Option<&Arc<JavaType>>, p: &mut P) -> Option<Arc<JavaType>> {
        ty.map(|ty| self.visit_type(ty, p))
    }

    fn visit_left_padded<T: PaddedElement>(&mut self, left: &LeftPadded<T>, p: &mut P) -> Option<LeftPadded<T>> {
        self.cursor_mut().push(CursorValue::Padding(PaddingKind::LeftPadded));
        let result = walk::walk_left_padded(self, left, p);
        self.cursor_mut().pop();
        result
    }

    fn visit_right_padded<T: PaddedElement>(&mut self, right: &RightPadded<T>, p: &mut P) -> Option<RightPadded<T>> {
        self.cursor_mut().push(CursorValue::Padding(PaddingKind::RightPadded));
        let result = walk::walk_right_padded(self, right, p);
        self.cursor_mut().pop();
        result
    }

    fn visit_container<T: PaddedElement>(&mut self, container: &Container<T>, p: &mut P) -> Container<T> {
        self.cursor_mut().push(CursorValue::Padding(PaddingKind::Container));
        let result = walk::walk_container(self, container, p);
        self.cursor_mut().pop();
        result
    }

    fn visit_annotated_type(&mut self, tree: &Arc<Tree>, node: &AnnotatedType, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_annotated_type(self, tree, node, p)
    }

    fn visit_annotation(&mut self, tree: &Arc<Tree>, node: &Annotation, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_annotation(self, tree, node, p)
    }

    fn visit_array_access(&mut self, tree: &Arc<Tree>, node: &ArrayAccess, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_array_access(self, tree, node, p)
    }

    fn visit_array_dimension(&mut self, tree: &Arc<Tree>, node: &ArrayDimension, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_array_dimension(self, tree, node, p)
    }

    fn visit_array_type(&mut self, tree: &Arc<Tree>, node: &ArrayType, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_array_type(self, tree, node, p)
    }

    fn visit_assert(&mut self, tree: &Arc<Tree>, node: &Assert, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_assert(self, tree, node, p)
    }

    fn visit_assignment(&mut self, tree: &Arc<Tree>, node: &Assignment, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_assignment(self, tree, node, p)
    }

    fn visit_assignment_operation(&mut self, tree: &Arc<Tree>, node: &AssignmentOperation, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_assignment_operation(self, tree, node, p)
    }

    fn visit_binary(&mut self, tree: &Arc<Tree>, node: &Binary, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_binary(self, tree, node, p)
    }

    fn visit_block(&mut self, tree: &Arc<Tree>, node: &Block, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_block(self, tree, node, p)
    }

    fn visit_break(&mut self, tree: &Arc<Tree>, node: &Break, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_break(self, tree, node, p)
    }

    fn visit_case(&mut self, tree: &Arc<Tree>, node: &Case, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_case(self, tree, node, p)
    }

    fn visit_catch(&mut self, tree: &Arc<Tree>, node: &Catch, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_catch(self, tree, node, p)
    }

    fn visit_class_declaration(&mut self, tree: &Arc<Tree>, node: &ClassDeclaration, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_class_declaration(self, tree, node, p)
    }

    fn visit_class_declaration_kind(&mut self, tree: &Arc<Tree>, node: &ClassDeclarationKind, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_class_declaration_kind(self, tree, node, p)
    }

    fn visit_compilation_unit(&mut self, tree: &Arc<Tree>, node: &CompilationUnit, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_compilation_unit(self, tree, node, p)
    }

    fn visit_continue(&mut self, tree: &Arc<Tree>, node: &Continue, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_continue(self, tree, node, p)
    }

    fn visit_control_parentheses(&mut self, tree: &Arc<Tree>, node: &ControlParentheses, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_control_parentheses(self, tree, node, p)
    }

    fn visit_do_while_loop(&mut self, tree: &Arc<Tree>, node: &DoWhileLoop, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_do_while_loop(self, tree, node, p)
    }

    fn visit_else(&mut self, tree: &Arc<Tree>, node: &Else, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_else(self, tree, node, p)
    }

    fn visit_empty(&mut self, tree: &Arc<Tree>, node: &Empty, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_empty(self, tree, node, p)
    }

    fn visit_enum_value(&mut self, tree: &Arc<Tree>, node: &EnumValue, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_enum_value(self, tree, node, p)
    }

    fn visit_enum_value_set(&mut self, tree: &Arc<Tree>, node: &EnumValueSet, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_enum_value_set(self, tree, node, p)
    }

    fn visit_field_access(&mut self, tree: &Arc<Tree>, node: &FieldAccess, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_field_access(self, tree, node, p)
    }

    fn visit_for_control(&mut self, tree: &Arc<Tree>, node: &ForControl, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_for_control(self, tree, node, p)
    }

    fn visit_for_each_control(&mut self, tree: &Arc<Tree>, node: &ForEachControl, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_for_each_control(self, tree, node, p)
    }

    fn visit_for_each_loop(&mut self, tree: &Arc<Tree>, node: &ForEachLoop, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_for_each_loop(self, tree, node, p)
    }

    fn visit_for_loop(&mut self, tree: &Arc<Tree>, node: &ForLoop, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_for_loop(self, tree, node, p)
    }

    fn visit_identifier(&mut self, tree: &Arc<Tree>, node: &Identifier, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_identifier(self, tree, node, p)
    }

    fn visit_if(&mut self, tree: &Arc<Tree>, node: &If, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_if(self, tree, node, p)
    }

    fn visit_import(&mut self, tree: &Arc<Tree>, node: &Import, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_import(self, tree, node, p)
    }

    fn visit_instance_of(&mut self, tree: &Arc<Tree>, node: &InstanceOf, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_instance_of(self, tree, node, p)
    }

    fn visit_label(&mut self, tree: &Arc<Tree>, node: &Label, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_label(self, tree, node, p)
    }

    fn visit_lambda(&mut self, tree: &Arc<Tree>, node: &Lambda, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_lambda(self, tree, node, p)
    }

    fn visit_lambda_parameters(&mut self, tree: &Arc<Tree>, node: &LambdaParameters, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_lambda_parameters(self, tree, node, p)
    }

    fn visit_literal(&mut self, tree: &Arc<Tree>, node: &Literal, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_literal(self, tree, node, p)
    }

    fn visit_member_reference(&mut self, tree: &Arc<Tree>, node: &MemberReference, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_member_reference(self, tree, node, p)
    }

    fn visit_method_declaration(&mut self, tree: &Arc<Tree>, node: &MethodDeclaration, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_method_declaration(self, tree, node, p)
    }

    fn visit_method_invocation(&mut self, tree: &Arc<Tree>, node: &MethodInvocation, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_method_invocation(self, tree, node, p)
    }

    fn visit_modifier(&mut self, tree: &Arc<Tree>, node: &Modifier, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_modifier(self, tree, node, p)
    }

    fn visit_named_variable(&mut self, tree: &Arc<Tree>, node: &NamedVariable, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_named_variable(self, tree, node, p)
    }

    fn visit_new_array(&mut self, tree: &Arc<Tree>, node: &NewArray, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_new_array(self, tree, node, p)
    }

    fn visit_new_class(&mut self, tree: &Arc<Tree>, node: &NewClass, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_new_class(self, tree, node, p)
    }

    fn visit_package(&mut self, tree: &Arc<Tree>, node: &Package, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_package(self, tree, node, p)
    }

    fn visit_parameterized_type(&mut self, tree: &Arc<Tree>, node: &ParameterizedType, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_parameterized_type(self, tree, node, p)
    }

    fn visit_parentheses(&mut self, tree: &Arc<Tree>, node: &Parentheses, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_parentheses(self, tree, node, p)
    }

    fn visit_primitive(&mut self, tree: &Arc<Tree>, node: &Primitive, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_primitive(self, tree, node, p)
    }

    fn visit_return(&mut self, tree: &Arc<Tree>, node: &Return, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_return(self, tree, node, p)
    }

    fn visit_switch(&mut self, tree: &Arc<Tree>, node: &Switch, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_switch(self, tree, node, p)
    }

    fn visit_ternary(&mut self, tree: &Arc<Tree>, node: &Ternary, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_ternary(self, tree, node, p)
    }

    fn visit_throw(&mut self, tree: &Arc<Tree>, node: &Throw, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_throw(self, tree, node, p)
    }

    fn visit_try(&mut self, tree: &Arc<Tree>, node: &Try, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_try(self, tree, node, p)
    }

    fn visit_type_cast(&mut self, tree: &Arc<Tree>, node: &TypeCast, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_type_cast(self, tree, node, p)
    }

    fn visit_type_parameter(&mut self, tree: &Arc<Tree>, node: &TypeParameter, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_type_parameter(self, tree, node, p)
    }

    fn visit_type_parameters(&mut self, tree: &Arc<Tree>, node: &TypeParameters, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_type_parameters(self, tree, node, p)
    }

    fn visit_unary(&mut self, tree: &Arc<Tree>, node: &Unary, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_unary(self, tree, node, p)
    }

    fn visit_unknown(&mut self, tree: &Arc<Tree>, node: &Unknown, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_unknown(self, tree, node, p)
    }

    fn visit_unknown_source(&mut self, tree: &Arc<Tree>, node: &UnknownSource, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_unknown_source(self, tree, node, p)
    }

    fn visit_variable_declarations(&mut self, tree: &Arc<Tree>, node: &VariableDeclarations, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_variable_declarations(self, tree, node, p)
    }

    fn visit_while_loop(&mut self, tree: &Arc<Tree>, node: &WhileLoop, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_while_loop(self, tree, node, p)
    }

    fn visit_wildcard(&mut self, tree: &Arc<Tree>, node: &Wildcard, p: &mut P) -> Option<Arc<Tree>> {
        walk::walk_wildcard(self, tree, node, p)
    }
}
