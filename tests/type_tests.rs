use std::sync::Arc;

use lossless_tree::tree::java::LiteralValue;
use lossless_tree::tree::{Space, Tree, build};
use lossless_tree::types::{
    Bounds, Class, ClassKind, ClassLinks, GenericTypeVariable, JavaType, JavaTypeVisitor, Method, MethodLinks,
    PrimitiveKind, SignatureBuilder, TypeCursor, Variable, VariableLinks, Variance, signature,
};
use lossless_tree::visitor::{Cursor, JavaVisitor};

fn type_variable(name: &str, variance: Variance) -> Arc<JavaType> {
    Arc::new(JavaType::GenericTypeVariable(GenericTypeVariable::shell(name, variance)))
}

fn bound(variable: &Arc<JavaType>, bounds: Vec<Arc<JavaType>>) {
    if let JavaType::GenericTypeVariable(variable) = &**variable {
        variable.complete(bounds);
    }
}

#[test]
fn test_self_bounded_variable() {
    let t = type_variable("T", Variance::Covariant);
    bound(&t, vec![Arc::clone(&t)]);
    assert_eq!(signature(&t), "Generic{T extends Generic{T}}");
}

#[test]
fn test_comparable_bound() {
    // <T extends Comparable<T>>
    let t = type_variable("T", Variance::Covariant);
    let comparable = JavaType::class(ClassKind::Interface, "java.lang.Comparable");
    bound(&t, vec![JavaType::parameterized(comparable, vec![Arc::clone(&t)])]);
    assert_eq!(
        signature(&t),
        "Generic{T extends java.lang.Comparable<Generic{T}>}"
    );

    // <? super T>
    let wildcard = Arc::new(JavaType::GenericTypeVariable(GenericTypeVariable::new(
        "?",
        Variance::Contravariant,
        vec![Arc::clone(&t)],
    )));
    assert_eq!(
        signature(&wildcard),
        "Generic{? super Generic{T extends java.lang.Comparable<Generic{T}>}}"
    );
    let unbounded = Arc::new(JavaType::GenericTypeVariable(GenericTypeVariable::new(
        "?",
        Variance::Invariant,
        Vec::new(),
    )));
    assert_eq!(signature(&unbounded), "?");
}

#[test]
fn test_class_whose_supertype_parameterizes_itself() {
    // class Foo extends Base<Foo>
    let foo = Arc::new(JavaType::Class(Class::shell(ClassKind::Class, "a.Foo")));
    let base = JavaType::class(ClassKind::Class, "a.Base");
    let supertype = JavaType::parameterized(base, vec![Arc::clone(&foo)]);
    if let Some(class) = foo.as_class() {
        assert!(class.complete(ClassLinks {
            supertype: Some(Arc::clone(&supertype)),
            ..ClassLinks::default()
        }));
        assert!(!class.complete(ClassLinks::default()));
        assert_eq!(class.class_name(), "Foo");
        assert_eq!(class.package_name(), "a");
    }

    assert_eq!(signature(&supertype), "a.Base<a.Foo>");
    assert_eq!(signature(&foo), "a.Foo");
    assert_eq!(supertype.fully_qualified_name(), Some("a.Base"));
}

#[test]
fn test_member_signatures() {
    let list = JavaType::class(ClassKind::Interface, "java.util.List");
    let string = JavaType::class(ClassKind::Class, "java.lang.String");
    let method = Arc::new(JavaType::Method(Method::new(
        "get",
        vec!["index".to_owned()],
        MethodLinks {
            declaring_type: Some(Arc::clone(&list)),
            return_type: Some(Arc::clone(&string)),
            parameter_types: vec![JavaType::primitive(PrimitiveKind::Int)],
            ..MethodLinks::default()
        },
    )));
    assert_eq!(
        signature(&method),
        "java.util.List{name=get,return=java.lang.String,parameters=[int]}"
    );

    let field = Arc::new(JavaType::Variable(Variable::new(
        "size",
        VariableLinks {
            owner: Some(list),
            ty: Some(JavaType::primitive(PrimitiveKind::Int)),
            annotations: Vec::new(),
        },
    )));
    assert_eq!(signature(&field), "java.util.List{name=size,type=int}");

    let union = Arc::new(JavaType::Union(Bounds::new(vec![
        JavaType::class(ClassKind::Class, "java.io.IOException"),
        JavaType::class(ClassKind::Class, "java.lang.RuntimeException"),
    ])));
    assert_eq!(signature(&union), "java.io.IOException | java.lang.RuntimeException");

    let orphan = Arc::new(JavaType::Method(Method::new("run", Vec::new(), MethodLinks::default())));
    assert_eq!(signature(&orphan), "{undefined}{name=run,return={undefined},parameters=[]}");
}

#[test]
fn test_builders_do_not_share_guards() {
    let t = type_variable("T", Variance::Covariant);
    bound(&t, vec![Arc::clone(&t)]);
    let mut first = SignatureBuilder::new();
    let mut second = SignatureBuilder::new();
    assert_eq!(first.signature(&t), second.signature(&t));
    assert_eq!(first.signature(&t), "Generic{T extends Generic{T}}");
}

fn cyclic(name: &str) -> (Arc<JavaType>, Arc<JavaType>) {
    let class = Arc::new(JavaType::Class(Class::shell(ClassKind::Class, name)));
    let method = Arc::new(JavaType::Method(Method::new(
        "self",
        Vec::new(),
        MethodLinks {
            declaring_type: Some(Arc::clone(&class)),
            return_type: Some(Arc::clone(&class)),
            ..MethodLinks::default()
        },
    )));
    if let Some(links) = class.as_class() {
        links.complete(ClassLinks {
            methods: vec![Arc::clone(&method)],
            ..ClassLinks::default()
        });
    }
    (class, method)
}

#[test]
fn test_equality_terminates_on_cycles() {
    let (a, a_method) = cyclic("com.example.Node");
    let (b, b_method) = cyclic("com.example.Node");
    let (c, c_method) = cyclic("com.example.Other");
    assert_eq!(a, b);
    assert_eq!(a_method, b_method);
    assert_ne!(a, c);
    assert_ne!(a_method, c_method);
}

/// Replaces `int` with `long`, counting the types it entered.
#[derive(Default)]
struct Widen {
    cursor: TypeCursor,
    entered: usize,
    deepest: usize,
}

impl JavaTypeVisitor<()> for Widen {
    fn type_cursor(&mut self) -> &mut TypeCursor {
        &mut self.cursor
    }

    fn pre_visit(&mut self, ty: &Arc<JavaType>, _p: &mut ()) -> Option<Arc<JavaType>> {
        self.entered += 1;
        self.deepest = self.deepest.max(self.cursor.depth());
        Some(Arc::clone(ty))
    }

    fn post_visit(&mut self, ty: &Arc<JavaType>, _p: &mut ()) -> Arc<JavaType> {
        match &**ty {
            JavaType::Primitive(PrimitiveKind::Int) => JavaType::primitive(PrimitiveKind::Long),
            _ => Arc::clone(ty),
        }
    }
}

#[test]
fn test_type_visitor_is_cycle_safe() {
    let (class, _) = cyclic("com.example.Node");
    let mut visitor = Widen::default();
    let visited = visitor.visit(&class, &mut ());
    assert!(Arc::ptr_eq(&visited, &class));
    assert!(visitor.entered >= 2);
    assert!(visitor.deepest < 8);
    assert_eq!(visitor.cursor.depth(), 0);

    let t = type_variable("T", Variance::Covariant);
    bound(&t, vec![Arc::clone(&t)]);
    assert!(Arc::ptr_eq(&visitor.visit(&t, &mut ()), &t));
}

#[test]
fn test_type_visitor_rebuilds_changed_paths() {
    let array = JavaType::array(JavaType::primitive(PrimitiveKind::Int));
    let intersection = Arc::new(JavaType::Intersection(Bounds::new(vec![
        Arc::clone(&array),
        JavaType::class(ClassKind::Interface, "java.io.Serializable"),
    ])));
    let mut visitor = Widen::default();
    let visited = visitor.visit(&intersection, &mut ());
    assert!(!Arc::ptr_eq(&visited, &intersection));
    assert_eq!(signature(&visited), "long[] & java.io.Serializable");
    // The input graph is untouched.
    assert_eq!(signature(&intersection), "int[] & java.io.Serializable");
}

#[test]
fn test_skipping_a_type_keeps_it() {
    struct SkipArrays {
        cursor: TypeCursor,
    }

    impl JavaTypeVisitor<()> for SkipArrays {
        fn type_cursor(&mut self) -> &mut TypeCursor {
            &mut self.cursor
        }

        fn pre_visit(&mut self, ty: &Arc<JavaType>, _p: &mut ()) -> Option<Arc<JavaType>> {
            match &**ty {
                JavaType::Array(_) => None,
                _ => Some(Arc::clone(ty)),
            }
        }

        fn post_visit(&mut self, _ty: &Arc<JavaType>, _p: &mut ()) -> Arc<JavaType> {
            JavaType::unknown()
        }
    }

    let array = JavaType::array(JavaType::primitive(PrimitiveKind::Int));
    let mut visitor = SkipArrays { cursor: TypeCursor::new() };
    assert!(Arc::ptr_eq(&visitor.visit(&array, &mut ()), &array));
    assert!(Arc::ptr_eq(
        &visitor.visit(&JavaType::primitive(PrimitiveKind::Int), &mut ()),
        &JavaType::unknown()
    ));
}

#[test]
fn test_tree_visitor_rewrites_attached_types() {
    struct WidenTypes {
        cursor: Cursor,
        types: Widen,
    }

    impl JavaVisitor<()> for WidenTypes {
        fn cursor(&self) -> &Cursor {
            &self.cursor
        }

        fn cursor_mut(&mut self) -> &mut Cursor {
            &mut self.cursor
        }

        fn visit_type(&mut self, ty: &Arc<JavaType>, p: &mut ()) -> Arc<JavaType> {
            self.types.visit(ty, p)
        }
    }

    let int = build::literal(
        Space::EMPTY,
        LiteralValue::Int(1),
        Some(JavaType::primitive(PrimitiveKind::Int)),
    );
    let text = build::literal(
        Space::EMPTY,
        LiteralValue::String("x".to_owned()),
        Some(JavaType::primitive(PrimitiveKind::String)),
    );
    let mut visitor = WidenTypes {
        cursor: Cursor::new(),
        types: Widen::default(),
    };

    let widened = visitor.visit(&int, &mut ()).unwrap();
    assert!(!Arc::ptr_eq(&widened, &int));
    assert_eq!(widened.id(), int.id());
    let Tree::Literal(literal) = &*widened else {
        panic!("expected a literal");
    };
    assert!(Arc::ptr_eq(
        literal.ty.as_ref().unwrap(),
        &JavaType::primitive(PrimitiveKind::Long)
    ));

    assert!(Arc::ptr_eq(&visitor.visit(&text, &mut ()).unwrap(), &text));
}
