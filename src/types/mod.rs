//! Resolved type attribution.
//!
//! Types form a shared, possibly cyclic graph: a class lists its methods, each
//! method points back at its declaring class. Composite types are therefore built
//! in two steps. The header (names, kinds) is fixed at construction; the links to
//! other types live in a write-once cell that can be filled after the `Arc` exists,
//! so a node can be referenced before its own links are complete.

pub mod signature;
pub mod visitor;

use std::fmt;
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};

pub use signature::{SignatureBuilder, signature};
pub use visitor::{JavaTypeVisitor, TypeCursor};

keyword_enum! {
    pub enum PrimitiveKind {
        Boolean => "boolean",
        Byte => "byte",
        Char => "char",
        Double => "double",
        Float => "float",
        Int => "int",
        Long => "long",
        Short => "short",
        Void => "void",
        String => "String",
        None => "",
        Null => "null",
    }
}

keyword_enum! {
    pub enum ClassKind {
        Class => "Class",
        Enum => "Enum",
        Interface => "Interface",
        Annotation => "Annotation",
        Record => "Record",
        Value => "Value",
    }
}

keyword_enum! {
    pub enum Variance {
        Invariant => "INVARIANT",
        Covariant => "COVARIANT",
        Contravariant => "CONTRAVARIANT",
    }
}

pub enum JavaType {
    Primitive(PrimitiveKind),
    Class(Class),
    Parameterized(Parameterized),
    GenericTypeVariable(GenericTypeVariable),
    Array(Array),
    Method(Method),
    Variable(Variable),
    Union(Bounds),
    Intersection(Bounds),
    Unknown,
}

#[derive(Clone)]
pub struct Class {
    pub kind: ClassKind,
    pub fully_qualified_name: String,
    links: OnceCell<ClassLinks>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassLinks {
    pub type_parameters: Vec<Arc<JavaType>>,
    pub supertype: Option<Arc<JavaType>>,
    pub owning_class: Option<Arc<JavaType>>,
    pub annotations: Vec<Arc<JavaType>>,
    pub interfaces: Vec<Arc<JavaType>>,
    pub members: Vec<Arc<JavaType>>,
    pub methods: Vec<Arc<JavaType>>,
}

#[derive(Clone)]
pub struct Parameterized {
    links: OnceCell<ParameterizedLinks>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterizedLinks {
    pub class: Option<Arc<JavaType>>,
    pub type_parameters: Vec<Arc<JavaType>>,
}

#[derive(Clone)]
pub struct GenericTypeVariable {
    pub name: String,
    pub variance: Variance,
    bounds: OnceCell<Vec<Arc<JavaType>>>,
}

#[derive(Clone)]
pub struct Array {
    links: OnceCell<ArrayLinks>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayLinks {
    pub element_type: Option<Arc<JavaType>>,
    pub annotations: Vec<Arc<JavaType>>,
}

#[derive(Clone)]
pub struct Method {
    pub name: String,
    pub parameter_names: Vec<String>,
    links: OnceCell<MethodLinks>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodLinks {
    pub declaring_type: Option<Arc<JavaType>>,
    pub return_type: Option<Arc<JavaType>>,
    pub parameter_types: Vec<Arc<JavaType>>,
    pub thrown_exceptions: Vec<Arc<JavaType>>,
    pub annotations: Vec<Arc<JavaType>>,
}

#[derive(Clone)]
pub struct Variable {
    pub name: String,
    links: OnceCell<VariableLinks>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableLinks {
    pub owner: Option<Arc<JavaType>>,
    pub ty: Option<Arc<JavaType>>,
    pub annotations: Vec<Arc<JavaType>>,
}

/// The members of a union (`A | B`) or intersection (`A & B`).
#[derive(Clone)]
pub struct Bounds {
    bounds: OnceCell<Vec<Arc<JavaType>>>,
}

static EMPTY_CLASS_LINKS: ClassLinks = ClassLinks {
    type_parameters: Vec::new(),
    supertype: None,
    owning_class: None,
    annotations: Vec::new(),
    interfaces: Vec::new(),
    members: Vec::new(),
    methods: Vec::new(),
};

static EMPTY_PARAMETERIZED_LINKS: ParameterizedLinks = ParameterizedLinks {
    class: None,
    type_parameters: Vec::new(),
};

static EMPTY_ARRAY_LINKS: ArrayLinks = ArrayLinks {
    element_type: None,
    annotations: Vec::new(),
};

static EMPTY_METHOD_LINKS: MethodLinks = MethodLinks {
    declaring_type: None,
    return_type: None,
    parameter_types: Vec::new(),
    thrown_exceptions: Vec::new(),
    annotations: Vec::new(),
};

static EMPTY_VARIABLE_LINKS: VariableLinks = VariableLinks {
    owner: None,
    ty: None,
    annotations: Vec::new(),
};

static EMPTY_TYPES: Vec<Arc<JavaType>> = Vec::new();

static PRIMITIVES: Lazy<Vec<Arc<JavaType>>> = Lazy::new(|| {
    PrimitiveKind::ALL
        .iter()
        .map(|kind| Arc::new(JavaType::Primitive(*kind)))
        .collect()
});

static UNKNOWN: Lazy<Arc<JavaType>> = Lazy::new(|| Arc::new(JavaType::Unknown));

impl Class {
    /// A class whose links are filled in later with [`Class::complete`].
    pub fn shell(kind: ClassKind, fully_qualified_name: impl Into<String>) -> Class {
        Class {
            kind,
            fully_qualified_name: fully_qualified_name.into(),
            links: OnceCell::new(),
        }
    }

    pub fn new(kind: ClassKind, fully_qualified_name: impl Into<String>, links: ClassLinks) -> Class {
        Class {
            kind,
            fully_qualified_name: fully_qualified_name.into(),
            links: OnceCell::from(links),
        }
    }

    /// Empty links until the class has been completed.
    pub fn links(&self) -> &ClassLinks {
        self.links.get().unwrap_or(&EMPTY_CLASS_LINKS)
    }

    /// Fills in the links of a shell. Returns `false` if they were already set.
    pub fn complete(&self, links: ClassLinks) -> bool {
        self.links.set(links).is_ok()
    }

    pub fn is_complete(&self) -> bool {
        self.links.get().is_some()
    }

    pub fn class_name(&self) -> &str {
        self.fully_qualified_name
            .rsplit(['.', '$'])
            .next()
            .unwrap_or(&self.fully_qualified_name)
    }

    pub fn package_name(&self) -> &str {
        match self.fully_qualified_name.rfind('.') {
            Some(dot) => &self.fully_qualified_name[..dot],
            None => "",
        }
    }
}

impl Parameterized {
    pub fn shell() -> Parameterized {
        Parameterized { links: OnceCell::new() }
    }

    pub fn new(links: ParameterizedLinks) -> Parameterized {
        Parameterized { links: OnceCell::from(links) }
    }

    pub fn links(&self) -> &ParameterizedLinks {
        self.links.get().unwrap_or(&EMPTY_PARAMETERIZED_LINKS)
    }

    pub fn complete(&self, links: ParameterizedLinks) -> bool {
        self.links.set(links).is_ok()
    }
}

impl GenericTypeVariable {
    pub fn shell(name: impl Into<String>, variance: Variance) -> GenericTypeVariable {
        GenericTypeVariable {
            name: name.into(),
            variance,
            bounds: OnceCell::new(),
        }
    }

    pub fn new(name: impl Into<String>, variance: Variance, bounds: Vec<Arc<JavaType>>) -> GenericTypeVariable {
        GenericTypeVariable {
            name: name.into(),
            variance,
            bounds: OnceCell::from(bounds),
        }
    }

    pub fn bounds(&self) -> &Vec<Arc<JavaType>> {
        self.bounds.get().unwrap_or(&EMPTY_TYPES)
    }

    pub fn complete(&self, bounds: Vec<Arc<JavaType>>) -> bool {
        self.bounds.set(bounds).is_ok()
    }
}

impl Array {
    pub fn shell() -> Array {
        Array { links: OnceCell::new() }
    }

    pub fn new(links: ArrayLinks) -> Array {
        Array { links: OnceCell::from(links) }
    }

    pub fn links(&self) -> &ArrayLinks {
        self.links.get().unwrap_or(&EMPTY_ARRAY_LINKS)
    }

    pub fn complete(&self, links: ArrayLinks) -> bool {
        self.links.set(links).is_ok()
    }
}

impl Method {
    pub fn shell(name: impl Into<String>, parameter_names: Vec<String>) -> Method {
        Method {
            name: name.into(),
            parameter_names,
            links: OnceCell::new(),
        }
    }

    pub fn new(name: impl Into<String>, parameter_names: Vec<String>, links: MethodLinks) -> Method {
        Method {
            name: name.into(),
            parameter_names,
            links: OnceCell::from(links),
        }
    }

    pub fn links(&self) -> &MethodLinks {
        self.links.get().unwrap_or(&EMPTY_METHOD_LINKS)
    }

    pub fn complete(&self, links: MethodLinks) -> bool {
        self.links.set(links).is_ok()
    }
}

impl Variable {
    pub fn shell(name: impl Into<String>) -> Variable {
        Variable {
            name: name.into(),
            links: OnceCell::new(),
        }
    }

    pub fn new(name: impl Into<String>, links: VariableLinks) -> Variable {
        Variable {
            name: name.into(),
            links: OnceCell::from(links),
        }
    }

    pub fn links(&self) -> &VariableLinks {
        self.links.get().unwrap_or(&EMPTY_VARIABLE_LINKS)
    }

    pub fn complete(&self, links: VariableLinks) -> bool {
        self.links.set(links).is_ok()
    }
}

impl Bounds {
    pub fn shell() -> Bounds {
        Bounds { bounds: OnceCell::new() }
    }

    pub fn new(bounds: Vec<Arc<JavaType>>) -> Bounds {
        Bounds { bounds: OnceCell::from(bounds) }
    }

    pub fn bounds(&self) -> &Vec<Arc<JavaType>> {
        self.bounds.get().unwrap_or(&EMPTY_TYPES)
    }

    pub fn complete(&self, bounds: Vec<Arc<JavaType>>) -> bool {
        self.bounds.set(bounds).is_ok()
    }
}

impl JavaType {
    /// The shared instance for a primitive. Primitives are never copied.
    pub fn primitive(kind: PrimitiveKind) -> Arc<JavaType> {
        let index = PrimitiveKind::ALL
            .iter()
            .position(|candidate| *candidate == kind)
            .unwrap_or(0);
        Arc::clone(&PRIMITIVES[index])
    }

    pub fn unknown() -> Arc<JavaType> {
        Arc::clone(&UNKNOWN)
    }

    pub fn class(kind: ClassKind, fully_qualified_name: impl Into<String>) -> Arc<JavaType> {
        Arc::new(JavaType::Class(Class::new(kind, fully_qualified_name, ClassLinks::default())))
    }

    pub fn parameterized(class: Arc<JavaType>, type_parameters: Vec<Arc<JavaType>>) -> Arc<JavaType> {
        Arc::new(JavaType::Parameterized(Parameterized::new(ParameterizedLinks {
            class: Some(class),
            type_parameters,
        })))
    }

    pub fn array(element_type: Arc<JavaType>) -> Arc<JavaType> {
        Arc::new(JavaType::Array(Array::new(ArrayLinks {
            element_type: Some(element_type),
            annotations: Vec::new(),
        })))
    }

    /// The wire and debug name of the variant.
    pub fn variant_name(&self) -> &'static str {
        match self {
            JavaType::Primitive(_) => "Primitive",
            JavaType::Class(_) => "Class",
            JavaType::Parameterized(_) => "Parameterized",
            JavaType::GenericTypeVariable(_) => "GenericTypeVariable",
            JavaType::Array(_) => "Array",
            JavaType::Method(_) => "Method",
            JavaType::Variable(_) => "Variable",
            JavaType::Union(_) => "Union",
            JavaType::Intersection(_) => "Intersection",
            JavaType::Unknown => "Unknown",
        }
    }

    /// Primitives and the unknown type are interned; everything else is shared by reference.
    pub fn is_interned(&self) -> bool {
        matches!(self, JavaType::Primitive(_) | JavaType::Unknown)
    }

    pub fn as_class(&self) -> Option<&Class> {
        match self {
            JavaType::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&Method> {
        match self {
            JavaType::Method(method) => Some(method),
            _ => None,
        }
    }

    /// The class behind a class or parameterized type.
    pub fn fully_qualified_name(&self) -> Option<&str> {
        match self {
            JavaType::Class(class) => Some(&class.fully_qualified_name),
            JavaType::Parameterized(parameterized) => parameterized
                .links()
                .class
                .as_deref()
                .and_then(JavaType::fully_qualified_name),
            _ => None,
        }
    }
}

impl PartialEq for JavaType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JavaType::Primitive(a), JavaType::Primitive(b)) => a == b,
            // Named types stop the comparison so cyclic graphs terminate.
            (JavaType::Class(a), JavaType::Class(b)) => {
                a.kind == b.kind && a.fully_qualified_name == b.fully_qualified_name
            }
            (JavaType::GenericTypeVariable(a), JavaType::GenericTypeVariable(b)) => {
                a.name == b.name && a.variance == b.variance
            }
            (JavaType::Parameterized(a), JavaType::Parameterized(b)) => a.links() == b.links(),
            (JavaType::Array(a), JavaType::Array(b)) => a.links() == b.links(),
            (JavaType::Method(a), JavaType::Method(b)) => {
                a.name == b.name && a.parameter_names == b.parameter_names && a.links() == b.links()
            }
            (JavaType::Variable(a), JavaType::Variable(b)) => a.name == b.name && a.links() == b.links(),
            (JavaType::Union(a), JavaType::Union(b)) => a.bounds() == b.bounds(),
            (JavaType::Intersection(a), JavaType::Intersection(b)) => a.bounds() == b.bounds(),
            (JavaType::Unknown, JavaType::Unknown) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.variant_name(), signature(self))
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&signature(self))
    }
}
