use std::sync::Arc;

use super::{
    Array, ArrayLinks, Bounds, Class, ClassLinks, GenericTypeVariable, JavaType, Method, MethodLinks,
    Parameterized, ParameterizedLinks, Variable, VariableLinks,
};
use crate::visitor::Draft;

/// The chain of types currently being visited, used as an identity cycle guard.
#[derive(Debug, Default, Clone)]
pub struct TypeCursor {
    stack: Vec<Arc<JavaType>>,
}

impl TypeCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, ty: &Arc<JavaType>) -> bool {
        self.stack.iter().any(|entry| Arc::ptr_eq(entry, ty))
    }

    pub fn push(&mut self, ty: Arc<JavaType>) {
        self.stack.push(ty);
    }

    pub fn pop(&mut self) -> Option<Arc<JavaType>> {
        self.stack.pop()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn parent(&self) -> Option<&Arc<JavaType>> {
        self.stack.iter().rev().nth(1)
    }
}

/// Visits a type graph, rebuilding only the types whose links changed.
///
/// A type that is already on the cursor is returned as is, which breaks cycles
/// such as `class Foo implements Comparable<Foo>`. `Method::declaring_type` and
/// `Variable::owner` are never descended into; fetch them from the links when needed.
pub trait JavaTypeVisitor<P>: Sized {
    fn type_cursor(&mut self) -> &mut TypeCursor;

    fn visit(&mut self, ty: &Arc<JavaType>, p: &mut P) -> Arc<JavaType> {
        if self.type_cursor().contains(ty) {
            return Arc::clone(ty);
        }
        self.type_cursor().push(Arc::clone(ty));
        let result = match self.pre_visit(ty, p) {
            Some(ty) => {
                let ty = self.accept(&ty, p);
                self.post_visit(&ty, p)
            }
            None => Arc::clone(ty),
        };
        self.type_cursor().pop();
        result
    }

    fn visit_option(&mut self, ty: Option<&Arc<JavaType>>, p: &mut P) -> Option<Arc<JavaType>> {
        ty.map(|ty| self.visit(ty, p))
    }

    fn visit_list(&mut self, types: &[Arc<JavaType>], p: &mut P) -> Vec<Arc<JavaType>> {
        types.iter().map(|ty| self.visit(ty, p)).collect()
    }

    /// Returning `None` skips the type and keeps it unchanged.
    fn pre_visit(&mut self, ty: &Arc<JavaType>, _p: &mut P) -> Option<Arc<JavaType>> {
        Some(Arc::clone(ty))
    }

    fn post_visit(&mut self, ty: &Arc<JavaType>, _p: &mut P) -> Arc<JavaType> {
        Arc::clone(ty)
    }

    fn accept(&mut self, ty: &Arc<JavaType>, p: &mut P) -> Arc<JavaType> {
        match &**ty {
            JavaType::Primitive(_) | JavaType::Unknown => Arc::clone(ty),
            JavaType::Class(class) => self.visit_class(ty, class, p),
            JavaType::Parameterized(parameterized) => self.visit_parameterized(ty, parameterized, p),
            JavaType::GenericTypeVariable(variable) => self.visit_generic_type_variable(ty, variable, p),
            JavaType::Array(array) => self.visit_array(ty, array, p),
            JavaType::Method(method) => self.visit_method(ty, method, p),
            JavaType::Variable(variable) => self.visit_variable(ty, variable, p),
            JavaType::Union(bounds) => self.visit_union(ty, bounds, p),
            JavaType::Intersection(bounds) => self.visit_intersection(ty, bounds, p),
        }
    }

    fn visit_class(&mut self, ty: &Arc<JavaType>, class: &Class, p: &mut P) -> Arc<JavaType> {
        walk_class(self, ty, class, p)
    }

    fn visit_parameterized(&mut self, ty: &Arc<JavaType>, parameterized: &Parameterized, p: &mut P) -> Arc<JavaType> {
        walk_parameterized(self, ty, parameterized, p)
    }

    fn visit_generic_type_variable(
        &mut self,
        ty: &Arc<JavaType>,
        variable: &GenericTypeVariable,
        p: &mut P,
    ) -> Arc<JavaType> {
        walk_generic_type_variable(self, ty, variable, p)
    }

    fn visit_array(&mut self, ty: &Arc<JavaType>, array: &Array, p: &mut P) -> Arc<JavaType> {
        walk_array(self, ty, array, p)
    }

    fn visit_method(&mut self, ty: &Arc<JavaType>, method: &Method, p: &mut P) -> Arc<JavaType> {
        walk_method(self, ty, method, p)
    }

    fn visit_variable(&mut self, ty: &Arc<JavaType>, variable: &Variable, p: &mut P) -> Arc<JavaType> {
        walk_variable(self, ty, variable, p)
    }

    fn visit_union(&mut self, ty: &Arc<JavaType>, bounds: &Bounds, p: &mut P) -> Arc<JavaType> {
        match walk_bounds(self, bounds, p) {
            Some(bounds) => Arc::new(JavaType::Union(Bounds::new(bounds))),
            None => Arc::clone(ty),
        }
    }

    fn visit_intersection(&mut self, ty: &Arc<JavaType>, bounds: &Bounds, p: &mut P) -> Arc<JavaType> {
        match walk_bounds(self, bounds, p) {
            Some(bounds) => Arc::new(JavaType::Intersection(Bounds::new(bounds))),
            None => Arc::clone(ty),
        }
    }
}

pub fn walk_class<P, V: JavaTypeVisitor<P>>(v: &mut V, ty: &Arc<JavaType>, class: &Class, p: &mut P) -> Arc<JavaType> {
    let links: &ClassLinks = class.links();
    let mut d = Draft::new(links);
    draft_set!(d.type_parameters = v.visit_list(&links.type_parameters, p));
    draft_set!(d.supertype = v.visit_option(links.supertype.as_ref(), p));
    draft_set!(d.owning_class = v.visit_option(links.owning_class.as_ref(), p));
    draft_set!(d.annotations = v.visit_list(&links.annotations, p));
    draft_set!(d.interfaces = v.visit_list(&links.interfaces, p));
    draft_set!(d.members = v.visit_list(&links.members, p));
    draft_set!(d.methods = v.visit_list(&links.methods, p));
    match d.finish() {
        Some(links) => Arc::new(JavaType::Class(Class::new(
            class.kind,
            class.fully_qualified_name.clone(),
            links,
        ))),
        None => Arc::clone(ty),
    }
}

pub fn walk_parameterized<P, V: JavaTypeVisitor<P>>(
    v: &mut V,
    ty: &Arc<JavaType>,
    parameterized: &Parameterized,
    p: &mut P,
) -> Arc<JavaType> {
    let links: &ParameterizedLinks = parameterized.links();
    let mut d = Draft::new(links);
    draft_set!(d.class = v.visit_option(links.class.as_ref(), p));
    draft_set!(d.type_parameters = v.visit_list(&links.type_parameters, p));
    match d.finish() {
        Some(links) => Arc::new(JavaType::Parameterized(Parameterized::new(links))),
        None => Arc::clone(ty),
    }
}

pub fn walk_generic_type_variable<P, V: JavaTypeVisitor<P>>(
    v: &mut V,
    ty: &Arc<JavaType>,
    variable: &GenericTypeVariable,
    p: &mut P,
) -> Arc<JavaType> {
    let bounds = variable.bounds();
    let mut d = Draft::new(bounds);
    let visited = v.visit_list(bounds, p);
    if !crate::tree::Identical::identical(d.current(), &visited) {
        *d.edit() = visited;
    }
    match d.finish() {
        Some(bounds) => Arc::new(JavaType::GenericTypeVariable(GenericTypeVariable::new(
            variable.name.clone(),
            variable.variance,
            bounds,
        ))),
        None => Arc::clone(ty),
    }
}

pub fn walk_array<P, V: JavaTypeVisitor<P>>(v: &mut V, ty: &Arc<JavaType>, array: &Array, p: &mut P) -> Arc<JavaType> {
    let links: &ArrayLinks = array.links();
    let mut d = Draft::new(links);
    draft_set!(d.element_type = v.visit_option(links.element_type.as_ref(), p));
    draft_set!(d.annotations = v.visit_list(&links.annotations, p));
    match d.finish() {
        Some(links) => Arc::new(JavaType::Array(Array::new(links))),
        None => Arc::clone(ty),
    }
}

/// Visits everything but the declaring type.
pub fn walk_method<P, V: JavaTypeVisitor<P>>(v: &mut V, ty: &Arc<JavaType>, method: &Method, p: &mut P) -> Arc<JavaType> {
    let links: &MethodLinks = method.links();
    let mut d = Draft::new(links);
    draft_set!(d.return_type = v.visit_option(links.return_type.as_ref(), p));
    draft_set!(d.parameter_types = v.visit_list(&links.parameter_types, p));
    draft_set!(d.thrown_exceptions = v.visit_list(&links.thrown_exceptions, p));
    draft_set!(d.annotations = v.visit_list(&links.annotations, p));
    match d.finish() {
        Some(links) => Arc::new(JavaType::Method(Method::new(
            method.name.clone(),
            method.parameter_names.clone(),
            links,
        ))),
        None => Arc::clone(ty),
    }
}

/// Visits everything but the owner.
pub fn walk_variable<P, V: JavaTypeVisitor<P>>(
    v: &mut V,
    ty: &Arc<JavaType>,
    variable: &Variable,
    p: &mut P,
) -> Arc<JavaType> {
    let links: &VariableLinks = variable.links();
    let mut d = Draft::new(links);
    draft_set!(d.ty = v.visit_option(links.ty.as_ref(), p));
    draft_set!(d.annotations = v.visit_list(&links.annotations, p));
    match d.finish() {
        Some(links) => Arc::new(JavaType::Variable(Variable::new(variable.name.clone(), links))),
        None => Arc::clone(ty),
    }
}

/// Returns the new bounds, or `None` when no bound changed.
pub fn walk_bounds<P, V: JavaTypeVisitor<P>>(v: &mut V, bounds: &Bounds, p: &mut P) -> Option<Vec<Arc<JavaType>>> {
    let visited = v.visit_list(bounds.bounds(), p);
    if crate::tree::Identical::identical(bounds.bounds(), &visited) {
        None
    } else {
        Some(visited)
    }
}
