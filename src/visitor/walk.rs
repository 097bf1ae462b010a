//! Default traversal for the Java-family kinds, in field order.

use std::sync::Arc;

use super::{Draft, JavaVisitor, PaddedElement};
use crate::tree::java::*;
use crate::tree::{Container, LeftPadded, RightPadded, Tree};

/// Visits every tree of a list, dropping the ones the visitor removed.
pub fn visit_list<P, V: JavaVisitor<P>>(v: &mut V, trees: &[Arc<Tree>], p: &mut P) -> Vec<Arc<Tree>> {
    trees.iter().filter_map(|tree| v.visit(tree, p)).collect()
}

pub fn visit_right_padded_list<P, V: JavaVisitor<P>, T: PaddedElement>(
    v: &mut V,
    elements: &[RightPadded<T>],
    p: &mut P,
) -> Vec<RightPadded<T>> {
    elements.iter().filter_map(|element| v.visit_right_padded(element, p)).collect()
}

pub fn visit_left_padded_list<P, V: JavaVisitor<P>, T: PaddedElement>(
    v: &mut V,
    elements: &[LeftPadded<T>],
    p: &mut P,
) -> Vec<LeftPadded<T>> {
    elements.iter().filter_map(|element| v.visit_left_padded(element, p)).collect()
}

pub fn walk_left_padded<P, V: JavaVisitor<P>, T: PaddedElement>(
    v: &mut V,
    left: &LeftPadded<T>,
    p: &mut P,
) -> Option<LeftPadded<T>> {
    let mut d = Draft::new(left);
    draft_set!(d.before = v.visit_space(&left.before, p));
    draft_set!(d.element = left.element.visit_element(v, p)?);
    draft_set!(d.markers = v.visit_markers(&left.markers, p));
    Some(d.finish().unwrap_or_else(|| left.clone()))
}

pub fn walk_right_padded<P, V: JavaVisitor<P>, T: PaddedElement>(
    v: &mut V,
    right: &RightPadded<T>,
    p: &mut P,
) -> Option<RightPadded<T>> {
    let mut d = Draft::new(right);
    draft_set!(d.element = right.element.visit_element(v, p)?);
    draft_set!(d.after = v.visit_space(&right.after, p));
    draft_set!(d.markers = v.visit_markers(&right.markers, p));
    Some(d.finish().unwrap_or_else(|| right.clone()))
}

pub fn walk_container<P, V: JavaVisitor<P>, T: PaddedElement>(
    v: &mut V,
    container: &Container<T>,
    p: &mut P,
) -> Container<T> {
    let mut d = Draft::new(container);
    draft_set!(d.before = v.visit_space(&container.before, p));
    draft_set!(d.elements = visit_right_padded_list(v, &container.elements, p));
    draft_set!(d.markers = v.visit_markers(&container.markers, p));
    d.finish().unwrap_or_else(|| container.clone())
}

pub fn walk_annotated_type<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &AnnotatedType, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.annotations = visit_list(v, &node.annotations, p));
    draft_set!(d.type_expression = v.visit(&node.type_expression, p)?);
    Some(d.finish_into(tree, Tree::AnnotatedType))
}

pub fn walk_annotation<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Annotation, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.annotation_type = v.visit(&node.annotation_type, p)?);
    draft_set!(d.arguments = node.arguments.as_ref().map(|container| v.visit_container(container, p)));
    Some(d.finish_into(tree, Tree::Annotation))
}

pub fn walk_array_access<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &ArrayAccess, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.indexed = v.visit(&node.indexed, p)?);
    draft_set!(d.dimension = v.visit(&node.dimension, p)?);
    Some(d.finish_into(tree, Tree::ArrayAccess))
}

pub fn walk_array_dimension<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &ArrayDimension, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.index = v.visit_right_padded(&node.index, p)?);
    Some(d.finish_into(tree, Tree::ArrayDimension))
}

pub fn walk_array_type<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &ArrayType, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.element_type = v.visit(&node.element_type, p)?);
    draft_set!(d.annotations = visit_list(v, &node.annotations, p));
    draft_set!(d.dimension = v.visit_left_padded(&node.dimension, p)?);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::ArrayType))
}

pub fn walk_assert<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Assert, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.condition = v.visit(&node.condition, p)?);
    draft_set!(d.detail = node.detail.as_ref().and_then(|padded| v.visit_left_padded(padded, p)));
    Some(d.finish_into(tree, Tree::Assert))
}

pub fn walk_assignment<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Assignment, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.variable = v.visit(&node.variable, p)?);
    draft_set!(d.assignment = v.visit_left_padded(&node.assignment, p)?);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::Assignment))
}

pub fn walk_assignment_operation<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &AssignmentOperation, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.variable = v.visit(&node.variable, p)?);
    draft_set!(d.operator = v.visit_left_padded(&node.operator, p)?);
    draft_set!(d.assignment = v.visit(&node.assignment, p)?);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::AssignmentOperation))
}

pub fn walk_binary<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Binary, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.left = v.visit(&node.left, p)?);
    draft_set!(d.operator = v.visit_left_padded(&node.operator, p)?);
    draft_set!(d.right = v.visit(&node.right, p)?);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::Binary))
}

pub fn walk_block<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Block, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.is_static = v.visit_right_padded(&node.is_static, p)?);
    draft_set!(d.statements = visit_right_padded_list(v, &node.statements, p));
    draft_set!(d.end = v.visit_space(&node.end, p));
    Some(d.finish_into(tree, Tree::Block))
}

pub fn walk_break<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Break, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.label = v.visit_option(node.label.as_ref(), p));
    Some(d.finish_into(tree, Tree::Break))
}

pub fn walk_case<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Case, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.case_labels = v.visit_container(&node.case_labels, p));
    draft_set!(d.statements = v.visit_container(&node.statements, p));
    draft_set!(d.body = node.body.as_ref().and_then(|padded| v.visit_right_padded(padded, p)));
    draft_set!(d.guard = v.visit_option(node.guard.as_ref(), p));
    Some(d.finish_into(tree, Tree::Case))
}

pub fn walk_catch<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Catch, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.parameter = v.visit(&node.parameter, p)?);
    draft_set!(d.body = v.visit(&node.body, p)?);
    Some(d.finish_into(tree, Tree::Catch))
}

pub fn walk_class_declaration<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &ClassDeclaration, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.leading_annotations = visit_list(v, &node.leading_annotations, p));
    draft_set!(d.modifiers = visit_list(v, &node.modifiers, p));
    draft_set!(d.class_kind = v.visit(&node.class_kind, p)?);
    draft_set!(d.name = v.visit(&node.name, p)?);
    draft_set!(d.type_parameters = node.type_parameters.as_ref().map(|container| v.visit_container(container, p)));
    draft_set!(d.primary_constructor = node.primary_constructor.as_ref().map(|container| v.visit_container(container, p)));
    draft_set!(d.extends = node.extends.as_ref().and_then(|padded| v.visit_left_padded(padded, p)));
    draft_set!(d.implements = node.implements.as_ref().map(|container| v.visit_container(container, p)));
    draft_set!(d.permits = node.permits.as_ref().map(|container| v.visit_container(container, p)));
    draft_set!(d.body = v.visit(&node.body, p)?);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::ClassDeclaration))
}

pub fn walk_class_declaration_kind<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &ClassDeclarationKind, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.annotations = visit_list(v, &node.annotations, p));
    Some(d.finish_into(tree, Tree::ClassDeclarationKind))
}

pub fn walk_compilation_unit<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &CompilationUnit, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.package_declaration = node.package_declaration.as_ref().and_then(|padded| v.visit_right_padded(padded, p)));
    draft_set!(d.imports = visit_right_padded_list(v, &node.imports, p));
    draft_set!(d.classes = visit_list(v, &node.classes, p));
    draft_set!(d.eof = v.visit_space(&node.eof, p));
    Some(d.finish_into(tree, Tree::CompilationUnit))
}

pub fn walk_continue<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Continue, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.label = v.visit_option(node.label.as_ref(), p));
    Some(d.finish_into(tree, Tree::Continue))
}

pub fn walk_control_parentheses<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &ControlParentheses, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.tree = v.visit_right_padded(&node.tree, p)?);
    Some(d.finish_into(tree, Tree::ControlParentheses))
}

pub fn walk_do_while_loop<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &DoWhileLoop, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.body = v.visit_right_padded(&node.body, p)?);
    draft_set!(d.while_condition = v.visit_left_padded(&node.while_condition, p)?);
    Some(d.finish_into(tree, Tree::DoWhileLoop))
}

pub fn walk_else<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Else, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.body = v.visit_right_padded(&node.body, p)?);
    Some(d.finish_into(tree, Tree::Else))
}

pub fn walk_empty<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Empty, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    Some(d.finish_into(tree, Tree::Empty))
}

pub fn walk_enum_value<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &EnumValue, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.annotations = visit_list(v, &node.annotations, p));
    draft_set!(d.name = v.visit(&node.name, p)?);
    draft_set!(d.initializer = v.visit_option(node.initializer.as_ref(), p));
    Some(d.finish_into(tree, Tree::EnumValue))
}

pub fn walk_enum_value_set<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &EnumValueSet, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.enums = visit_right_padded_list(v, &node.enums, p));
    Some(d.finish_into(tree, Tree::EnumValueSet))
}

pub fn walk_field_access<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &FieldAccess, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.target = v.visit(&node.target, p)?);
    draft_set!(d.name = v.visit_left_padded(&node.name, p)?);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::FieldAccess))
}

pub fn walk_for_control<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &ForControl, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.init = visit_right_padded_list(v, &node.init, p));
    draft_set!(d.condition = v.visit_right_padded(&node.condition, p)?);
    draft_set!(d.update = visit_right_padded_list(v, &node.update, p));
    Some(d.finish_into(tree, Tree::ForControl))
}

pub fn walk_for_each_control<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &ForEachControl, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.variable = v.visit_right_padded(&node.variable, p)?);
    draft_set!(d.iterable = v.visit_right_padded(&node.iterable, p)?);
    Some(d.finish_into(tree, Tree::ForEachControl))
}

pub fn walk_for_each_loop<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &ForEachLoop, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.control = v.visit(&node.control, p)?);
    draft_set!(d.body = v.visit_right_padded(&node.body, p)?);
    Some(d.finish_into(tree, Tree::ForEachLoop))
}

pub fn walk_for_loop<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &ForLoop, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.control = v.visit(&node.control, p)?);
    draft_set!(d.body = v.visit_right_padded(&node.body, p)?);
    Some(d.finish_into(tree, Tree::ForLoop))
}

pub fn walk_identifier<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Identifier, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.annotations = visit_list(v, &node.annotations, p));
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    draft_set!(d.field_type = v.visit_type_option(node.field_type.as_ref(), p));
    Some(d.finish_into(tree, Tree::Identifier))
}

pub fn walk_if<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &If, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.if_condition = v.visit(&node.if_condition, p)?);
    draft_set!(d.then_part = v.visit_right_padded(&node.then_part, p)?);
    draft_set!(d.else_part = v.visit_option(node.else_part.as_ref(), p));
    Some(d.finish_into(tree, Tree::If))
}

pub fn walk_import<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Import, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.is_static = v.visit_left_padded(&node.is_static, p)?);
    draft_set!(d.qualid = v.visit(&node.qualid, p)?);
    draft_set!(d.alias = node.alias.as_ref().and_then(|padded| v.visit_left_padded(padded, p)));
    Some(d.finish_into(tree, Tree::Import))
}

pub fn walk_instance_of<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &InstanceOf, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.expression = v.visit_right_padded(&node.expression, p)?);
    draft_set!(d.clazz = v.visit(&node.clazz, p)?);
    draft_set!(d.pattern = v.visit_option(node.pattern.as_ref(), p));
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::InstanceOf))
}

pub fn walk_label<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Label, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.label = v.visit_right_padded(&node.label, p)?);
    draft_set!(d.statement = v.visit(&node.statement, p)?);
    Some(d.finish_into(tree, Tree::Label))
}

pub fn walk_lambda<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Lambda, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.parameters = v.visit(&node.parameters, p)?);
    draft_set!(d.arrow = v.visit_space(&node.arrow, p));
    draft_set!(d.body = v.visit(&node.body, p)?);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::Lambda))
}

pub fn walk_lambda_parameters<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &LambdaParameters, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.parameters = visit_right_padded_list(v, &node.parameters, p));
    Some(d.finish_into(tree, Tree::LambdaParameters))
}

pub fn walk_literal<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Literal, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::Literal))
}

pub fn walk_member_reference<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &MemberReference, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.containing = v.visit_right_padded(&node.containing, p)?);
    draft_set!(d.type_parameters = node.type_parameters.as_ref().map(|container| v.visit_container(container, p)));
    draft_set!(d.reference = v.visit_left_padded(&node.reference, p)?);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    draft_set!(d.method_type = v.visit_type_option(node.method_type.as_ref(), p));
    draft_set!(d.variable_type = v.visit_type_option(node.variable_type.as_ref(), p));
    Some(d.finish_into(tree, Tree::MemberReference))
}

pub fn walk_method_declaration<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &MethodDeclaration, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.leading_annotations = visit_list(v, &node.leading_annotations, p));
    draft_set!(d.modifiers = visit_list(v, &node.modifiers, p));
    draft_set!(d.type_parameters = v.visit_option(node.type_parameters.as_ref(), p));
    draft_set!(d.return_type_expression = v.visit_option(node.return_type_expression.as_ref(), p));
    draft_set!(d.name = v.visit(&node.name, p)?);
    draft_set!(d.parameters = v.visit_container(&node.parameters, p));
    draft_set!(d.throws = node.throws.as_ref().map(|container| v.visit_container(container, p)));
    draft_set!(d.body = v.visit_option(node.body.as_ref(), p));
    draft_set!(d.default_value = node.default_value.as_ref().and_then(|padded| v.visit_left_padded(padded, p)));
    draft_set!(d.method_type = v.visit_type_option(node.method_type.as_ref(), p));
    Some(d.finish_into(tree, Tree::MethodDeclaration))
}

pub fn walk_method_invocation<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &MethodInvocation, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.select = node.select.as_ref().and_then(|padded| v.visit_right_padded(padded, p)));
    draft_set!(d.type_parameters = node.type_parameters.as_ref().map(|container| v.visit_container(container, p)));
    draft_set!(d.name = v.visit(&node.name, p)?);
    draft_set!(d.arguments = v.visit_container(&node.arguments, p));
    draft_set!(d.method_type = v.visit_type_option(node.method_type.as_ref(), p));
    Some(d.finish_into(tree, Tree::MethodInvocation))
}

pub fn walk_modifier<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Modifier, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.annotations = visit_list(v, &node.annotations, p));
    Some(d.finish_into(tree, Tree::Modifier))
}

pub fn walk_named_variable<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &NamedVariable, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.declarator = v.visit(&node.declarator, p)?);
    draft_set!(d.dimensions_after_name = visit_left_padded_list(v, &node.dimensions_after_name, p));
    draft_set!(d.initializer = node.initializer.as_ref().and_then(|padded| v.visit_left_padded(padded, p)));
    draft_set!(d.variable_type = v.visit_type_option(node.variable_type.as_ref(), p));
    Some(d.finish_into(tree, Tree::NamedVariable))
}

pub fn walk_new_array<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &NewArray, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.type_expression = v.visit_option(node.type_expression.as_ref(), p));
    draft_set!(d.dimensions = visit_list(v, &node.dimensions, p));
    draft_set!(d.initializer = node.initializer.as_ref().map(|container| v.visit_container(container, p)));
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::NewArray))
}

pub fn walk_new_class<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &NewClass, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.enclosing = node.enclosing.as_ref().and_then(|padded| v.visit_right_padded(padded, p)));
    draft_set!(d.new_keyword = v.visit_space(&node.new_keyword, p));
    draft_set!(d.clazz = v.visit_option(node.clazz.as_ref(), p));
    draft_set!(d.arguments = v.visit_container(&node.arguments, p));
    draft_set!(d.body = v.visit_option(node.body.as_ref(), p));
    draft_set!(d.constructor_type = v.visit_type_option(node.constructor_type.as_ref(), p));
    Some(d.finish_into(tree, Tree::NewClass))
}

pub fn walk_package<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Package, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.expression = v.visit(&node.expression, p)?);
    draft_set!(d.annotations = visit_list(v, &node.annotations, p));
    Some(d.finish_into(tree, Tree::Package))
}

pub fn walk_parameterized_type<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &ParameterizedType, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.clazz = v.visit(&node.clazz, p)?);
    draft_set!(d.type_parameters = node.type_parameters.as_ref().map(|container| v.visit_container(container, p)));
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::ParameterizedType))
}

pub fn walk_parentheses<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Parentheses, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.tree = v.visit_right_padded(&node.tree, p)?);
    Some(d.finish_into(tree, Tree::Parentheses))
}

pub fn walk_primitive<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Primitive, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.ty = v.visit_type(&node.ty, p));
    Some(d.finish_into(tree, Tree::Primitive))
}

pub fn walk_return<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Return, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.expression = v.visit_option(node.expression.as_ref(), p));
    Some(d.finish_into(tree, Tree::Return))
}

pub fn walk_switch<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Switch, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.selector = v.visit(&node.selector, p)?);
    draft_set!(d.cases = v.visit(&node.cases, p)?);
    Some(d.finish_into(tree, Tree::Switch))
}

pub fn walk_ternary<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Ternary, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.condition = v.visit(&node.condition, p)?);
    draft_set!(d.true_part = v.visit_left_padded(&node.true_part, p)?);
    draft_set!(d.false_part = v.visit_left_padded(&node.false_part, p)?);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::Ternary))
}

pub fn walk_throw<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Throw, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.exception = v.visit(&node.exception, p)?);
    Some(d.finish_into(tree, Tree::Throw))
}

pub fn walk_try<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Try, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.resources = node.resources.as_ref().map(|container| v.visit_container(container, p)));
    draft_set!(d.body = v.visit(&node.body, p)?);
    draft_set!(d.catches = visit_list(v, &node.catches, p));
    draft_set!(d.finally = node.finally.as_ref().and_then(|padded| v.visit_left_padded(padded, p)));
    Some(d.finish_into(tree, Tree::Try))
}

pub fn walk_type_cast<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &TypeCast, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.clazz = v.visit(&node.clazz, p)?);
    draft_set!(d.expression = v.visit(&node.expression, p)?);
    Some(d.finish_into(tree, Tree::TypeCast))
}

pub fn walk_type_parameter<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &TypeParameter, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.annotations = visit_list(v, &node.annotations, p));
    draft_set!(d.modifiers = visit_list(v, &node.modifiers, p));
    draft_set!(d.name = v.visit(&node.name, p)?);
    draft_set!(d.bounds = node.bounds.as_ref().map(|container| v.visit_container(container, p)));
    Some(d.finish_into(tree, Tree::TypeParameter))
}

pub fn walk_type_parameters<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &TypeParameters, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.annotations = visit_list(v, &node.annotations, p));
    draft_set!(d.type_parameters = visit_right_padded_list(v, &node.type_parameters, p));
    Some(d.finish_into(tree, Tree::TypeParameters))
}

pub fn walk_unary<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Unary, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.operator = v.visit_left_padded(&node.operator, p)?);
    draft_set!(d.expression = v.visit(&node.expression, p)?);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::Unary))
}

pub fn walk_unknown<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Unknown, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.source = v.visit(&node.source, p)?);
    Some(d.finish_into(tree, Tree::Unknown))
}

pub fn walk_unknown_source<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &UnknownSource, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    Some(d.finish_into(tree, Tree::UnknownSource))
}

pub fn walk_variable_declarations<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &VariableDeclarations, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.leading_annotations = visit_list(v, &node.leading_annotations, p));
    draft_set!(d.modifiers = visit_list(v, &node.modifiers, p));
    draft_set!(d.type_expression = v.visit_option(node.type_expression.as_ref(), p));
    draft_set!(d.varargs = node.varargs.as_ref().map(|space| v.visit_space(space, p)));
    draft_set!(d.variables = visit_right_padded_list(v, &node.variables, p));
    Some(d.finish_into(tree, Tree::VariableDeclarations))
}

pub fn walk_while_loop<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &WhileLoop, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.condition = v.visit(&node.condition, p)?);
    draft_set!(d.body = v.visit_right_padded(&node.body, p)?);
    Some(d.finish_into(tree, Tree::WhileLoop))
}

pub fn walk_wildcard<P, V: JavaVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Wildcard, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.bound = node.bound.as_ref().and_then(|padded| v.visit_left_padded(padded, p)));
    draft_set!(d.bounded_type = v.visit_option(node.bounded_type.as_ref(), p));
    Some(d.finish_into(tree, Tree::Wildcard))
}
