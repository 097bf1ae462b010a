//! Visitor over JavaScript-family trees.
//!
//! JavaScript trees mix both families, so a JavaScript visitor is a
//! [`JavaVisitor`] whose `visit_foreign` forwards to `visit_javascript`:
//!
//! ```ignore
//! impl<P> JavaVisitor<P> for MyVisitor {
//!     fn cursor(&self) -> &Cursor { &self.cursor }
//!     fn cursor_mut(&mut self) -> &mut Cursor { &mut self.cursor }
//!     fn visit_foreign(&mut self, tree: &Arc<Tree>, p: &mut P) -> Option<Arc<Tree>> {
//!         self.visit_javascript(tree, p)
//!     }
//! }
//! impl<P> JavaScriptVisitor<P> for MyVisitor {}
//! ```

use std::sync::Arc;

use super::walk::{visit_list, visit_right_padded_list};
use super::{Draft, JavaVisitor};
use crate::tree::Tree;
use crate::tree::javascript::*;

pub trait JavaScriptVisitor<P>: JavaVisitor<P> {
    fn visit_javascript(&mut self, tree: &Arc<Tree>, p: &mut P) -> Option<Arc<Tree>> {
        match &**tree {
            Tree::JsCompilationUnit(node) => self.visit_js_compilation_unit(tree, node, p),
            Tree::Alias(node) => self.visit_alias(tree, node, p),
            Tree::ArrowFunction(node) => self.visit_arrow_function(tree, node, p),
            Tree::Await(node) => self.visit_await(tree, node, p),
            Tree::Delete(node) => self.visit_delete(tree, node, p),
            Tree::ExpressionStatement(node) => self.visit_expression_statement(tree, node, p),
            Tree::ExpressionWithTypeArguments(node) => self.visit_expression_with_type_arguments(tree, node, p),
            Tree::JsImport(node) => self.visit_js_import(tree, node, p),
            Tree::ImportClause(node) => self.visit_import_clause(tree, node, p),
            Tree::NamedImports(node) => self.visit_named_imports(tree, node, p),
            Tree::ImportSpecifier(node) => self.visit_import_specifier(tree, node, p),
            Tree::PropertyAssignment(node) => self.visit_property_assignment(tree, node, p),
            Tree::TemplateExpression(node) => self.visit_template_expression(tree, node, p),
            Tree::TemplateSpan(node) => self.visit_template_span(tree, node, p),
            Tree::TypeOf(node) => self.visit_type_of(tree, node, p),
            Tree::TypeDeclaration(node) => self.visit_type_declaration(tree, node, p),
            Tree::Union(node) => self.visit_union(tree, node, p),
            Tree::Intersection(node) => self.visit_intersection(tree, node, p),
            Tree::Void(node) => self.visit_void(tree, node, p),
            Tree::StatementExpression(node) => self.visit_statement_expression(tree, node, p),
            Tree::JsBinary(node) => self.visit_js_binary(tree, node, p),
            Tree::JsAssignmentOperation(node) => self.visit_js_assignment_operation(tree, node, p),
            _ => Some(Arc::clone(tree)),
        }
    }

    fn visit_js_compilation_unit(&mut self, tree: &Arc<Tree>, node: &JsCompilationUnit, p: &mut P) -> Option<Arc<Tree>> {
        walk_js_compilation_unit(self, tree, node, p)
    }

    fn visit_alias(&mut self, tree: &Arc<Tree>, node: &Alias, p: &mut P) -> Option<Arc<Tree>> {
        walk_alias(self, tree, node, p)
    }

    fn visit_arrow_function(&mut self, tree: &Arc<Tree>, node: &ArrowFunction, p: &mut P) -> Option<Arc<Tree>> {
        walk_arrow_function(self, tree, node, p)
    }

    fn visit_await(&mut self, tree: &Arc<Tree>, node: &Await, p: &mut P) -> Option<Arc<Tree>> {
        walk_await(self, tree, node, p)
    }

    fn visit_delete(&mut self, tree: &Arc<Tree>, node: &Delete, p: &mut P) -> Option<Arc<Tree>> {
        walk_delete(self, tree, node, p)
    }

    fn visit_expression_statement(&mut self, tree: &Arc<Tree>, node: &ExpressionStatement, p: &mut P) -> Option<Arc<Tree>> {
        walk_expression_statement(self, tree, node, p)
    }

    fn visit_expression_with_type_arguments(&mut self, tree: &Arc<Tree>, node: &ExpressionWithTypeArguments, p: &mut P) -> Option<Arc<Tree>> {
        walk_expression_with_type_arguments(self, tree, node, p)
    }

    fn visit_js_import(&mut self, tree: &Arc<Tree>, node: &JsImport, p: &mut P) -> Option<Arc<Tree>> {
        walk_js_import(self, tree, node, p)
    }

    fn visit_import_clause(&mut self, tree: &Arc<Tree>, node: &ImportClause, p: &mut P) -> Option<Arc<Tree>> {
        walk_import_clause(self, tree, node, p)
    }

    fn visit_named_imports(&mut self, tree: &Arc<Tree>, node: &NamedImports, p: &mut P) -> Option<Arc<Tree>> {
        walk_named_imports(self, tree, node, p)
    }

    fn visit_import_specifier(&mut self, tree: &Arc<Tree>, node: &ImportSpecifier, p: &mut P) -> Option<Arc<Tree>> {
        walk_import_specifier(self, tree, node, p)
    }

    fn visit_property_assignment(&mut self, tree: &Arc<Tree>, node: &PropertyAssignment, p: &mut P) -> Option<Arc<Tree>> {
        walk_property_assignment(self, tree, node, p)
    }

    fn visit_template_expression(&mut self, tree: &Arc<Tree>, node: &TemplateExpression, p: &mut P) -> Option<Arc<Tree>> {
        walk_template_expression(self, tree, node, p)
    }

    fn visit_template_span(&mut self, tree: &Arc<Tree>, node: &TemplateSpan, p: &mut P) -> Option<Arc<Tree>> {
        walk_template_span(self, tree, node, p)
    }

    fn visit_type_of(&mut self, tree: &Arc<Tree>, node: &TypeOf, p: &mut P) -> Option<Arc<Tree>> {
        walk_type_of(self, tree, node, p)
    }

    fn visit_type_declaration(&mut self, tree: &Arc<Tree>, node: &TypeDeclaration, p: &mut P) -> Option<Arc<Tree>> {
        walk_type_declaration(self, tree, node, p)
    }

    fn visit_union(&mut self, tree: &Arc<Tree>, node: &Union, p: &mut P) -> Option<Arc<Tree>> {
        walk_union(self, tree, node, p)
    }

    fn visit_intersection(&mut self, tree: &Arc<Tree>, node: &Intersection, p: &mut P) -> Option<Arc<Tree>> {
        walk_intersection(self, tree, node, p)
    }

    fn visit_void(&mut self, tree: &Arc<Tree>, node: &Void, p: &mut P) -> Option<Arc<Tree>> {
        walk_void(self, tree, node, p)
    }

    fn visit_statement_expression(&mut self, tree: &Arc<Tree>, node: &StatementExpression, p: &mut P) -> Option<Arc<Tree>> {
        walk_statement_expression(self, tree, node, p)
    }

    fn visit_js_binary(&mut self, tree: &Arc<Tree>, node: &JsBinary, p: &mut P) -> Option<Arc<Tree>> {
        walk_js_binary(self, tree, node, p)
    }

    fn visit_js_assignment_operation(&mut self, tree: &Arc<Tree>, node: &JsAssignmentOperation, p: &mut P) -> Option<Arc<Tree>> {
        walk_js_assignment_operation(self, tree, node, p)
    }
}

pub fn walk_js_compilation_unit<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &JsCompilationUnit, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.statements = visit_right_padded_list(v, &node.statements, p));
    draft_set!(d.eof = v.visit_space(&node.eof, p));
    Some(d.finish_into(tree, Tree::JsCompilationUnit))
}

pub fn walk_alias<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Alias, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.property_name = v.visit_right_padded(&node.property_name, p)?);
    draft_set!(d.alias = v.visit(&node.alias, p)?);
    Some(d.finish_into(tree, Tree::Alias))
}

pub fn walk_arrow_function<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &ArrowFunction, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.leading_annotations = visit_list(v, &node.leading_annotations, p));
    draft_set!(d.modifiers = visit_list(v, &node.modifiers, p));
    draft_set!(d.type_parameters = v.visit_option(node.type_parameters.as_ref(), p));
    draft_set!(d.lambda = v.visit(&node.lambda, p)?);
    draft_set!(d.return_type_expression = v.visit_option(node.return_type_expression.as_ref(), p));
    Some(d.finish_into(tree, Tree::ArrowFunction))
}

pub fn walk_await<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Await, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.expression = v.visit(&node.expression, p)?);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::Await))
}

pub fn walk_delete<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Delete, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.expression = v.visit(&node.expression, p)?);
    Some(d.finish_into(tree, Tree::Delete))
}

pub fn walk_expression_statement<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &ExpressionStatement, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.expression = v.visit(&node.expression, p)?);
    Some(d.finish_into(tree, Tree::ExpressionStatement))
}

pub fn walk_expression_with_type_arguments<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &ExpressionWithTypeArguments, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.clazz = v.visit(&node.clazz, p)?);
    draft_set!(d.type_arguments = node.type_arguments.as_ref().map(|container| v.visit_container(container, p)));
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::ExpressionWithTypeArguments))
}

pub fn walk_js_import<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &JsImport, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.modifiers = visit_list(v, &node.modifiers, p));
    draft_set!(d.import_clause = v.visit_option(node.import_clause.as_ref(), p));
    draft_set!(d.module_specifier = node.module_specifier.as_ref().and_then(|padded| v.visit_left_padded(padded, p)));
    Some(d.finish_into(tree, Tree::JsImport))
}

pub fn walk_import_clause<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &ImportClause, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.name = node.name.as_ref().and_then(|padded| v.visit_right_padded(padded, p)));
    draft_set!(d.named_bindings = v.visit_option(node.named_bindings.as_ref(), p));
    Some(d.finish_into(tree, Tree::ImportClause))
}

pub fn walk_named_imports<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &NamedImports, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.elements = v.visit_container(&node.elements, p));
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::NamedImports))
}

pub fn walk_import_specifier<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &ImportSpecifier, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.import_type = v.visit_left_padded(&node.import_type, p)?);
    draft_set!(d.specifier = v.visit(&node.specifier, p)?);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::ImportSpecifier))
}

pub fn walk_property_assignment<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &PropertyAssignment, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.name = v.visit_right_padded(&node.name, p)?);
    draft_set!(d.initializer = v.visit_option(node.initializer.as_ref(), p));
    Some(d.finish_into(tree, Tree::PropertyAssignment))
}

pub fn walk_template_expression<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &TemplateExpression, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.head = v.visit(&node.head, p)?);
    draft_set!(d.spans = visit_right_padded_list(v, &node.spans, p));
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::TemplateExpression))
}

pub fn walk_template_span<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &TemplateSpan, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.expression = v.visit(&node.expression, p)?);
    draft_set!(d.tail = v.visit(&node.tail, p)?);
    Some(d.finish_into(tree, Tree::TemplateSpan))
}

pub fn walk_type_of<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &TypeOf, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.expression = v.visit(&node.expression, p)?);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::TypeOf))
}

pub fn walk_type_declaration<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &TypeDeclaration, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.modifiers = visit_list(v, &node.modifiers, p));
    draft_set!(d.name = v.visit_left_padded(&node.name, p)?);
    draft_set!(d.type_parameters = v.visit_option(node.type_parameters.as_ref(), p));
    draft_set!(d.initializer = v.visit_left_padded(&node.initializer, p)?);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::TypeDeclaration))
}

pub fn walk_union<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Union, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.types = visit_right_padded_list(v, &node.types, p));
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::Union))
}

pub fn walk_intersection<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Intersection, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.types = visit_right_padded_list(v, &node.types, p));
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::Intersection))
}

pub fn walk_void<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &Void, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.expression = v.visit(&node.expression, p)?);
    Some(d.finish_into(tree, Tree::Void))
}

pub fn walk_statement_expression<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &StatementExpression, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.statement = v.visit(&node.statement, p)?);
    Some(d.finish_into(tree, Tree::StatementExpression))
}

pub fn walk_js_binary<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &JsBinary, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.left = v.visit(&node.left, p)?);
    draft_set!(d.operator = v.visit_left_padded(&node.operator, p)?);
    draft_set!(d.right = v.visit(&node.right, p)?);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::JsBinary))
}

pub fn walk_js_assignment_operation<P, V: JavaScriptVisitor<P>>(v: &mut V, tree: &Arc<Tree>, node: &JsAssignmentOperation, p: &mut P) -> Option<Arc<Tree>> {
    let mut d = Draft::new(node);
    walk_base!(v, d, node, p);
    draft_set!(d.variable = v.visit(&node.variable, p)?);
    draft_set!(d.operator = v.visit_left_padded(&node.operator, p)?);
    draft_set!(d.assignment = v.visit(&node.assignment, p)?);
    draft_set!(d.ty = v.visit_type_option(node.ty.as_ref(), p));
    Some(d.finish_into(tree, Tree::JsAssignmentOperation))
}
