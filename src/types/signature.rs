//! Canonical string signatures for types.
//!
//! Generic bounds and parameterizations can refer back to themselves
//! (`T extends Comparable<T>`), so the builder tracks which type variables and
//! parameterized types are in progress and renders a back-reference in short form.
//! The guards live in the builder value; every computation owns its own.

use rustc_hash::FxHashSet;

use super::{JavaType, Variance};

/// Renders the signature of `ty` with a fresh builder.
pub fn signature(ty: &JavaType) -> String {
    SignatureBuilder::new().signature(ty)
}

#[derive(Debug, Default)]
pub struct SignatureBuilder {
    type_variables_in_progress: FxHashSet<*const JavaType>,
    parameterized_in_progress: FxHashSet<*const JavaType>,
}

impl SignatureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signature(&mut self, ty: &JavaType) -> String {
        match ty {
            JavaType::Primitive(kind) => kind.as_str().to_owned(),
            JavaType::Class(class) => class.fully_qualified_name.clone(),
            JavaType::Parameterized(_) => self.parameterized_signature(ty),
            JavaType::GenericTypeVariable(_) => self.generic_signature(ty),
            JavaType::Array(array) => {
                let element = array
                    .links()
                    .element_type
                    .as_deref()
                    .map(|element| self.signature(element))
                    .unwrap_or_else(|| "{undefined}".to_owned());
                format!("{}[]", element)
            }
            JavaType::Method(method) => {
                let links = method.links();
                let declaring = self.optional_signature(links.declaring_type.as_deref());
                let return_type = self.optional_signature(links.return_type.as_deref());
                let parameters = self.joined(&links.parameter_types, ",");
                format!(
                    "{}{{name={},return={},parameters=[{}]}}",
                    declaring, method.name, return_type, parameters
                )
            }
            JavaType::Variable(variable) => {
                let links = variable.links();
                let owner = self.optional_signature(links.owner.as_deref());
                let ty = self.optional_signature(links.ty.as_deref());
                format!("{}{{name={},type={}}}", owner, variable.name, ty)
            }
            JavaType::Union(bounds) => self.joined(bounds.bounds(), " | "),
            JavaType::Intersection(bounds) => self.joined(bounds.bounds(), " & "),
            JavaType::Unknown => "{undefined}".to_owned(),
        }
    }

    fn parameterized_signature(&mut self, ty: &JavaType) -> String {
        let JavaType::Parameterized(parameterized) = ty else {
            return String::new();
        };
        let links = parameterized.links();
        let class = self.optional_signature(links.class.as_deref());

        let key = ty as *const JavaType;
        if !self.parameterized_in_progress.insert(key) {
            return class;
        }
        let parameters = self.joined(&links.type_parameters, ", ");
        self.parameterized_in_progress.remove(&key);

        format!("{}<{}>", class, parameters)
    }

    fn generic_signature(&mut self, ty: &JavaType) -> String {
        let JavaType::GenericTypeVariable(variable) = ty else {
            return String::new();
        };
        let bounds = variable.bounds();
        if variable.name == "?" && bounds.is_empty() {
            return "?".to_owned();
        }

        let key = ty as *const JavaType;
        if !self.type_variables_in_progress.insert(key) {
            return format!("Generic{{{}}}", variable.name);
        }

        let mut rendered = format!("Generic{{{}", variable.name);
        if !bounds.is_empty() {
            match variable.variance {
                Variance::Contravariant => rendered.push_str(" super "),
                Variance::Covariant | Variance::Invariant => rendered.push_str(" extends "),
            }
            rendered.push_str(&self.joined(bounds, " & "));
        }
        rendered.push('}');

        self.type_variables_in_progress.remove(&key);
        rendered
    }

    fn optional_signature(&mut self, ty: Option<&JavaType>) -> String {
        match ty {
            Some(ty) => self.signature(ty),
            None => "{undefined}".to_owned(),
        }
    }

    fn joined(&mut self, types: &[std::sync::Arc<JavaType>], separator: &str) -> String {
        types
            .iter()
            .map(|ty| self.signature(ty))
            .collect::<Vec<_>>()
            .join(separator)
    }
}
