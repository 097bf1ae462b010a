//! The lossless tree model.
//!
//! Every node kind is a struct that embeds a [`TreeBase`] as its first field and
//! is wrapped by one [`Tree`] variant. Children are held as `Arc<Tree>` so that a
//! transformed tree shares every unchanged subtree with its original. The order
//! of fields inside each node struct is the order in which visitors walk them and
//! the order in which the RPC codec transmits them.

pub mod build;
pub mod java;
pub mod javascript;
pub mod markers;
pub mod padding;
pub mod space;

use std::sync::Arc;

use uuid::Uuid;

use crate::types::JavaType;

pub use markers::{Marker, Markers};
pub use padding::{Container, LeftPadded, RightPadded};
pub use space::{Comment, Space, TextComment};

/// Identity comparison used to decide whether a visited value changed.
///
/// Shared nodes and types compare by pointer, collections compare element-wise
/// and plain values compare by value. Two trees that are `==` but live at
/// different addresses are *not* identical.
pub trait Identical {
    fn identical(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Identical for Arc<T> {
    fn identical(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: Identical> Identical for Vec<T> {
    fn identical(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.identical(b))
    }
}

impl<T: Identical> Identical for Option<T> {
    fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.identical(b),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! identical_by_value {
    ($($ty:ty),* $(,)?) => {
        $(impl Identical for $ty {
            fn identical(&self, other: &Self) -> bool {
                self == other
            }
        })*
    };
}

identical_by_value!(bool, i64, String, Uuid, Space, Comment, Markers, Marker);

/// Fields shared by every node.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeBase {
    /// Stable identity, kept across transformations of the same logical node.
    pub id: Uuid,
    /// Whitespace and comments in front of the node.
    pub prefix: Space,
    pub markers: Markers,
}

impl TreeBase {
    pub fn new(prefix: Space) -> Self {
        TreeBase {
            id: Uuid::new_v4(),
            prefix,
            markers: Markers::EMPTY,
        }
    }

    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }
}

/// Implemented by every node struct.
pub trait TreeVariant: Sized {
    const KIND: Kind;

    fn from_tree(tree: &Tree) -> Option<&Self>;

    fn into_tree(self) -> Tree;

    fn base(&self) -> &TreeBase;
}

macro_rules! tree_kinds {
    ($($variant:ident => $ty:ty, $name:literal;)*) => {
        /// A node of either language family.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Tree {
            $($variant($ty),)*
        }

        /// Discriminant of [`Tree`]; its string form (`J.Binary`, `JS.Await`, ...)
        /// is the kind name used on the wire.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Kind {
            $($variant,)*
        }

        impl Kind {
            pub const ALL: &'static [Kind] = &[$(Kind::$variant,)*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Kind::$variant => $name,)*
                }
            }

            pub fn from_name(name: &str) -> Option<Kind> {
                match name {
                    $($name => Some(Kind::$variant),)*
                    _ => None,
                }
            }
        }

        impl Tree {
            pub fn kind(&self) -> Kind {
                match self {
                    $(Tree::$variant(_) => Kind::$variant,)*
                }
            }

            pub fn base(&self) -> &TreeBase {
                match self {
                    $(Tree::$variant(node) => &node.base,)*
                }
            }

            pub fn base_mut(&mut self) -> &mut TreeBase {
                match self {
                    $(Tree::$variant(node) => &mut node.base,)*
                }
            }
        }

        $(
            impl From<$ty> for Tree {
                fn from(node: $ty) -> Tree {
                    Tree::$variant(node)
                }
            }

            impl TreeVariant for $ty {
                const KIND: Kind = Kind::$variant;

                fn from_tree(tree: &Tree) -> Option<&Self> {
                    match tree {
                        Tree::$variant(node) => Some(node),
                        _ => None,
                    }
                }

                fn into_tree(self) -> Tree {
                    Tree::$variant(self)
                }

                fn base(&self) -> &TreeBase {
                    &self.base
                }
            }
        )*
    };
}

tree_kinds! {
    AnnotatedType => java::AnnotatedType, "J.AnnotatedType";
    Annotation => java::Annotation, "J.Annotation";
    ArrayAccess => java::ArrayAccess, "J.ArrayAccess";
    ArrayDimension => java::ArrayDimension, "J.ArrayDimension";
    ArrayType => java::ArrayType, "J.ArrayType";
    Assert => java::Assert, "J.Assert";
    Assignment => java::Assignment, "J.Assignment";
    AssignmentOperation => java::AssignmentOperation, "J.AssignmentOperation";
    Binary => java::Binary, "J.Binary";
    Block => java::Block, "J.Block";
    Break => java::Break, "J.Break";
    Case => java::Case, "J.Case";
    Catch => java::Catch, "J.Catch";
    ClassDeclaration => java::ClassDeclaration, "J.ClassDeclaration";
    ClassDeclarationKind => java::ClassDeclarationKind, "J.ClassDeclaration.Kind";
    CompilationUnit => java::CompilationUnit, "J.CompilationUnit";
    Continue => java::Continue, "J.Continue";
    ControlParentheses => java::ControlParentheses, "J.ControlParentheses";
    DoWhileLoop => java::DoWhileLoop, "J.DoWhileLoop";
    Else => java::Else, "J.If.Else";
    Empty => java::Empty, "J.Empty";
    EnumValue => java::EnumValue, "J.EnumValue";
    EnumValueSet => java::EnumValueSet, "J.EnumValueSet";
    FieldAccess => java::FieldAccess, "J.FieldAccess";
    ForControl => java::ForControl, "J.ForLoop.Control";
    ForEachControl => java::ForEachControl, "J.ForEachLoop.Control";
    ForEachLoop => java::ForEachLoop, "J.ForEachLoop";
    ForLoop => java::ForLoop, "J.ForLoop";
    Identifier => java::Identifier, "J.Identifier";
    If => java::If, "J.If";
    Import => java::Import, "J.Import";
    InstanceOf => java::InstanceOf, "J.InstanceOf";
    Label => java::Label, "J.Label";
    Lambda => java::Lambda, "J.Lambda";
    LambdaParameters => java::LambdaParameters, "J.Lambda.Parameters";
    Literal => java::Literal, "J.Literal";
    MemberReference => java::MemberReference, "J.MemberReference";
    MethodDeclaration => java::MethodDeclaration, "J.MethodDeclaration";
    MethodInvocation => java::MethodInvocation, "J.MethodInvocation";
    Modifier => java::Modifier, "J.Modifier";
    NamedVariable => java::NamedVariable, "J.VariableDeclarations.NamedVariable";
    NewArray => java::NewArray, "J.NewArray";
    NewClass => java::NewClass, "J.NewClass";
    Package => java::Package, "J.Package";
    ParameterizedType => java::ParameterizedType, "J.ParameterizedType";
    Parentheses => java::Parentheses, "J.Parentheses";
    Primitive => java::Primitive, "J.Primitive";
    Return => java::Return, "J.Return";
    Switch => java::Switch, "J.Switch";
    Ternary => java::Ternary, "J.Ternary";
    Throw => java::Throw, "J.Throw";
    Try => java::Try, "J.Try";
    TypeCast => java::TypeCast, "J.TypeCast";
    TypeParameter => java::TypeParameter, "J.TypeParameter";
    TypeParameters => java::TypeParameters, "J.TypeParameters";
    Unary => java::Unary, "J.Unary";
    Unknown => java::Unknown, "J.Unknown";
    UnknownSource => java::UnknownSource, "J.Unknown.Source";
    VariableDeclarations => java::VariableDeclarations, "J.VariableDeclarations";
    WhileLoop => java::WhileLoop, "J.WhileLoop";
    Wildcard => java::Wildcard, "J.Wildcard";

    JsCompilationUnit => javascript::JsCompilationUnit, "JS.CompilationUnit";
    Alias => javascript::Alias, "JS.Alias";
    ArrowFunction => javascript::ArrowFunction, "JS.ArrowFunction";
    Await => javascript::Await, "JS.Await";
    Delete => javascript::Delete, "JS.Delete";
    ExpressionStatement => javascript::ExpressionStatement, "JS.ExpressionStatement";
    ExpressionWithTypeArguments => javascript::ExpressionWithTypeArguments, "JS.ExpressionWithTypeArguments";
    JsImport => javascript::JsImport, "JS.Import";
    ImportClause => javascript::ImportClause, "JS.ImportClause";
    NamedImports => javascript::NamedImports, "JS.NamedImports";
    ImportSpecifier => javascript::ImportSpecifier, "JS.ImportSpecifier";
    PropertyAssignment => javascript::PropertyAssignment, "JS.PropertyAssignment";
    TemplateExpression => javascript::TemplateExpression, "JS.TemplateExpression";
    TemplateSpan => javascript::TemplateSpan, "JS.TemplateExpression.Span";
    TypeOf => javascript::TypeOf, "JS.TypeOf";
    TypeDeclaration => javascript::TypeDeclaration, "JS.TypeDeclaration";
    Union => javascript::Union, "JS.Union";
    Intersection => javascript::Intersection, "JS.Intersection";
    Void => javascript::Void, "JS.Void";
    StatementExpression => javascript::StatementExpression, "JS.StatementExpression";
    JsBinary => javascript::JsBinary, "JS.Binary";
    JsAssignmentOperation => javascript::JsAssignmentOperation, "JS.AssignmentOperation";
}

impl Kind {
    /// Java-family kinds are handled by every `JavaVisitor`; the rest need a
    /// visitor for their own family.
    pub fn is_java(self) -> bool {
        self.as_str().starts_with("J.")
    }
}

impl Tree {
    pub fn id(&self) -> Uuid {
        self.base().id
    }

    pub fn prefix(&self) -> &Space {
        &self.base().prefix
    }

    pub fn markers(&self) -> &Markers {
        &self.base().markers
    }

    /// Returns a copy of this node with a different prefix.
    pub fn with_prefix(&self, prefix: Space) -> Tree {
        let mut tree = self.clone();
        tree.base_mut().prefix = prefix;
        tree
    }

    pub fn as_variant<T: TreeVariant>(&self) -> Option<&T> {
        T::from_tree(self)
    }
}

/// Shorthand for optional type attribution on a node.
pub type TypeRef = Option<Arc<JavaType>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_name(kind.as_str()), Some(*kind));
        }
        assert_eq!(Kind::from_name("J.Nope"), None);
    }

    #[test]
    fn test_kind_families() {
        assert!(Kind::MethodInvocation.is_java());
        assert!(!Kind::ArrowFunction.is_java());
        assert_eq!(Kind::JsBinary.as_str(), "JS.Binary");
    }

    #[test]
    fn test_identical_is_pointer_identity_for_arcs() {
        let a = Arc::new(String::from("a"));
        let b = Arc::new(String::from("a"));
        assert!(a.identical(&Arc::clone(&a)));
        assert!(!a.identical(&b));
        assert!(vec![Arc::clone(&a)].identical(&vec![Arc::clone(&a)]));
        assert!(!Some(a).identical(&None));
    }
}
