mod common;

use std::sync::Arc;

use lossless_tree::tree::build;
use lossless_tree::tree::java::{Binary, BinaryOperator, Block, Identifier, MethodInvocation, Return};
use lossless_tree::tree::{Container, Kind, Space, Tree};
use lossless_tree::visitor::{Cursor, JavaScriptVisitor, JavaVisitor, PaddingKind, walk};
use quickcheck::{QuickCheck, TestResult};
use test_utils::generator::Expr;
use tracing::debug;

use common::{all_samples, expr_to_tree, sample};

/// Changes nothing, in either family.
#[derive(Default)]
struct Identity {
    cursor: Cursor,
}

impl<P> JavaVisitor<P> for Identity {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn visit_foreign(&mut self, tree: &Arc<Tree>, p: &mut P) -> Option<Arc<Tree>> {
        self.visit_javascript(tree, p)
    }
}

impl<P> JavaScriptVisitor<P> for Identity {}

/// Renames identifiers, counting the ones it saw. Java family only.
struct Rename {
    cursor: Cursor,
    from: &'static str,
    to: &'static str,
    seen: usize,
}

impl Rename {
    fn new(from: &'static str, to: &'static str) -> Self {
        Rename {
            cursor: Cursor::new(),
            from,
            to,
            seen: 0,
        }
    }
}

impl JavaVisitor<()> for Rename {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn visit_identifier(&mut self, tree: &Arc<Tree>, node: &Identifier, p: &mut ()) -> Option<Arc<Tree>> {
        self.seen += 1;
        if node.simple_name != self.from {
            return walk::walk_identifier(self, tree, node, p);
        }
        let mut renamed = node.clone();
        renamed.simple_name = self.to.to_owned();
        Some(Arc::new(Tree::Identifier(renamed)))
    }
}

/// Removes identifiers with a given name.
struct Remove {
    cursor: Cursor,
    name: &'static str,
}

impl JavaVisitor<()> for Remove {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn visit_identifier(&mut self, tree: &Arc<Tree>, node: &Identifier, p: &mut ()) -> Option<Arc<Tree>> {
        if node.simple_name == self.name {
            None
        } else {
            walk::walk_identifier(self, tree, node, p)
        }
    }
}

fn ident(name: &str) -> Arc<Tree> {
    build::identifier(Space::EMPTY, name, None)
}

#[test]
fn test_identity_visit_returns_same_reference_for_every_kind() {
    let mut visitor = Identity::default();
    for tree in all_samples() {
        let visited = visitor.visit(&tree, &mut ()).expect("identity never removes");
        assert!(
            Arc::ptr_eq(&visited, &tree),
            "{} was copied by an identity visit",
            tree.kind().as_str()
        );
        assert!(visitor.cursor.is_empty());
    }
}

#[test]
fn test_java_visitor_passes_javascript_nodes_through() {
    let mut visitor = Rename::new("a", "b");
    for kind in Kind::ALL.iter().filter(|kind| !kind.is_java()) {
        let tree = sample(*kind);
        let visited = visitor.visit(&tree, &mut ()).unwrap();
        assert!(Arc::ptr_eq(&visited, &tree));
    }
    assert_eq!(visitor.seen, 0);
}

#[test]
fn test_method_call_on_field_access() {
    // a.b.run(c)
    let select = build::field_access(ident("a"), Space::EMPTY, "b", None);
    let call = build::method_invocation(Space::EMPTY, Some(Arc::clone(&select)), "run", vec![ident("c")], None);

    let mut identity = Identity::default();
    let visited = identity.visit(&call, &mut ()).unwrap();
    assert!(Arc::ptr_eq(&visited, &call));

    let mut rename = Rename::new("c", "d");
    let renamed = rename.visit(&call, &mut ()).unwrap();
    assert!(!Arc::ptr_eq(&renamed, &call));

    let Tree::MethodInvocation(MethodInvocation {
        select: Some(new_select),
        arguments,
        ..
    }) = &*renamed
    else {
        panic!("expected a method invocation, got {:?}", renamed.kind());
    };
    assert!(Arc::ptr_eq(&new_select.element, &select));
    let argument = arguments.elements().next().unwrap();
    assert!(matches!(&**argument, Tree::Identifier(id) if id.simple_name == "d"));
    // The renamed node keeps its identity.
    assert_eq!(renamed.id(), call.id());
}

#[test]
fn test_replacing_arguments_keeps_select_shared() {
    struct ReplaceArguments {
        cursor: Cursor,
    }

    impl JavaVisitor<()> for ReplaceArguments {
        fn cursor(&self) -> &Cursor {
            &self.cursor
        }

        fn cursor_mut(&mut self) -> &mut Cursor {
            &mut self.cursor
        }

        fn visit_method_invocation(
            &mut self,
            tree: &Arc<Tree>,
            node: &MethodInvocation,
            p: &mut (),
        ) -> Option<Arc<Tree>> {
            let visited = walk::walk_method_invocation(self, tree, node, p)?;
            let Tree::MethodInvocation(invocation) = &*visited else {
                return Some(visited);
            };
            let mut invocation = invocation.clone();
            invocation.arguments = Container::build(vec![ident("replacement")]);
            Some(Arc::new(Tree::MethodInvocation(invocation)))
        }
    }

    let select = build::field_access(ident("a"), Space::EMPTY, "b", None);
    let call = build::method_invocation(Space::EMPTY, Some(Arc::clone(&select)), "run", vec![ident("c")], None);
    let mut visitor = ReplaceArguments { cursor: Cursor::new() };
    let visited = visitor.visit(&call, &mut ()).unwrap();

    assert!(!Arc::ptr_eq(&visited, &call));
    let Tree::MethodInvocation(invocation) = &*visited else {
        panic!("expected a method invocation");
    };
    assert!(Arc::ptr_eq(&invocation.select.as_ref().unwrap().element, &select));
}

#[test]
fn test_removal_semantics() {
    // { x; y; return x; x + y; }
    let statements = vec![
        ident("x"),
        ident("y"),
        build::return_statement(Space::EMPTY, Some(ident("x"))),
        build::binary(ident("x"), BinaryOperator::Addition, ident("y")),
    ];
    let block = build::block(Space::EMPTY, statements, Space::EMPTY);

    let mut visitor = Remove {
        cursor: Cursor::new(),
        name: "x",
    };
    let visited = visitor.visit(&block, &mut ()).unwrap();
    let Tree::Block(Block { statements, .. }) = &*visited else {
        panic!("expected a block");
    };

    // The bare `x` and the binary whose required left side was removed are gone;
    // the return statement stays with its optional expression cleared.
    assert_eq!(statements.len(), 2);
    assert!(matches!(&*statements[0].element, Tree::Identifier(id) if id.simple_name == "y"));
    assert!(matches!(&*statements[1].element, Tree::Return(Return { expression: None, .. })));
    assert!(!statements.iter().any(|s| matches!(&*s.element, Tree::Binary(Binary { .. }))));
}

#[test]
fn test_removing_the_root() {
    let mut visitor = Remove {
        cursor: Cursor::new(),
        name: "x",
    };
    assert!(visitor.visit(&ident("x"), &mut ()).is_none());
    assert!(visitor.cursor.is_empty());
}

#[test]
fn test_cursor_tracks_ancestors() {
    #[derive(Default)]
    struct Record {
        cursor: Cursor,
        paths: Vec<Vec<Kind>>,
        parents: Vec<Option<Kind>>,
        in_block: Vec<bool>,
        padding_seen: bool,
    }

    impl JavaVisitor<()> for Record {
        fn cursor(&self) -> &Cursor {
            &self.cursor
        }

        fn cursor_mut(&mut self) -> &mut Cursor {
            &mut self.cursor
        }

        fn visit_identifier(&mut self, tree: &Arc<Tree>, node: &Identifier, p: &mut ()) -> Option<Arc<Tree>> {
            self.paths.push(self.cursor.path_kinds());
            self.parents.push(self.cursor.parent_tree().map(|parent| parent.kind()));
            self.in_block.push(self.cursor.first_enclosing(Kind::Block).is_some());
            walk::walk_identifier(self, tree, node, p)
        }

        fn visit_space(&mut self, space: &Space, _p: &mut ()) -> Space {
            if self.cursor.in_padding(PaddingKind::RightPadded) {
                self.padding_seen = true;
            }
            space.clone()
        }
    }

    let paren = build::parentheses(Space::EMPTY, ident("a"));
    let block = build::block(Space::EMPTY, vec![paren], Space::EMPTY);
    let mut visitor = Record::default();
    visitor.visit(&block, &mut ()).unwrap();

    assert_eq!(
        visitor.paths,
        vec![vec![Kind::Block, Kind::Parentheses, Kind::Identifier]]
    );
    assert_eq!(visitor.parents, vec![Some(Kind::Parentheses)]);
    assert_eq!(visitor.in_block, vec![true]);
    assert!(visitor.padding_seen);
    assert!(visitor.cursor.is_empty());
    assert_eq!(visitor.cursor.depth(), 0);
}

/// Collects every space it visits.
#[derive(Default)]
struct SpaceCollector {
    cursor: Cursor,
    seen: Vec<String>,
    delimiter_in_whitespace: bool,
}

impl JavaVisitor<()> for SpaceCollector {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn visit_space(&mut self, space: &Space, _p: &mut ()) -> Space {
        let whitespace = std::iter::once(space.whitespace.as_str()).chain(space.comments.iter().map(|c| c.suffix()));
        for blank in whitespace {
            if blank.contains("//") || blank.contains("/*") {
                self.delimiter_in_whitespace = true;
            }
        }
        self.seen.push(space.to_string());
        space.clone()
    }
}

#[test]
fn test_property_formatting_is_held_exactly_once() {
    fn prop(expr: Expr) -> TestResult {
        let tree = expr_to_tree(&expr);
        let mut collector = SpaceCollector::default();
        let visited = collector.visit(&tree, &mut ()).unwrap();
        if !Arc::ptr_eq(&visited, &tree) {
            return TestResult::failed();
        }

        let expected: Vec<&str> = expr.formatting().into_iter().filter(|f| !f.is_empty()).collect();
        let seen: Vec<&str> = collector.seen.iter().map(String::as_str).filter(|s| !s.is_empty()).collect();
        if expected != seen || collector.delimiter_in_whitespace {
            debug!("Formatting mismatch for {:?}: expected {:?}, saw {:?}", expr.to_code(), expected, seen);
            return TestResult::failed();
        }

        let expected_len: usize = expected.iter().map(|f| f.len()).sum();
        let seen_len: usize = seen.iter().map(|s| s.len()).sum();
        TestResult::from_bool(expected_len == seen_len)
    }

    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(Expr) -> TestResult);
}

#[test]
fn test_pre_visit_rejection_skips_subtree() {
    /// Drops parenthesized expressions without looking inside them.
    #[derive(Default)]
    struct SkipParentheses {
        cursor: Cursor,
        identifiers: Vec<String>,
        depths_at_rejection: Vec<usize>,
    }

    impl JavaVisitor<()> for SkipParentheses {
        fn cursor(&self) -> &Cursor {
            &self.cursor
        }

        fn cursor_mut(&mut self) -> &mut Cursor {
            &mut self.cursor
        }

        fn pre_visit(&mut self, tree: &Arc<Tree>, _p: &mut ()) -> Option<Arc<Tree>> {
            if tree.kind() == Kind::Parentheses {
                self.depths_at_rejection.push(self.cursor.depth());
                return None;
            }
            Some(Arc::clone(tree))
        }

        fn visit_identifier(&mut self, tree: &Arc<Tree>, node: &Identifier, p: &mut ()) -> Option<Arc<Tree>> {
            self.identifiers.push(node.simple_name.clone());
            walk::walk_identifier(self, tree, node, p)
        }
    }

    // { x; (a + b); y; }
    let paren = build::parentheses(
        Space::EMPTY,
        build::binary(ident("a"), BinaryOperator::Addition, ident("b")),
    );
    let block = build::block(Space::EMPTY, vec![ident("x"), paren, ident("y")], Space::EMPTY);

    let mut visitor = SkipParentheses::default();
    let visited = visitor.visit(&block, &mut ()).unwrap();

    assert_eq!(visitor.identifiers, vec!["x", "y"]);
    assert_eq!(visitor.depths_at_rejection, vec![2]);
    assert!(visitor.cursor.is_empty());

    let Tree::Block(Block { statements, .. }) = &*visited else {
        panic!("expected a block");
    };
    assert_eq!(statements.len(), 2);
    assert!(!statements.iter().any(|s| s.element.kind() == Kind::Parentheses));
    assert_eq!(visited.id(), block.id());

    // Rejecting the root removes it.
    let root = build::parentheses(Space::EMPTY, ident("z"));
    assert!(visitor.visit(&root, &mut ()).is_none());
    assert!(visitor.cursor.is_empty());
    assert_eq!(visitor.identifiers, vec!["x", "y"]);
}

#[test]
fn test_post_visit_replaces_nodes_bottom_up() {
    /// Replaces every binary expression by its left operand.
    #[derive(Default)]
    struct KeepLeft {
        cursor: Cursor,
        order: Vec<Kind>,
    }

    impl JavaVisitor<()> for KeepLeft {
        fn cursor(&self) -> &Cursor {
            &self.cursor
        }

        fn cursor_mut(&mut self) -> &mut Cursor {
            &mut self.cursor
        }

        fn post_visit(&mut self, tree: &Arc<Tree>, _p: &mut ()) -> Option<Arc<Tree>> {
            self.order.push(tree.kind());
            match &**tree {
                Tree::Binary(binary) => Some(Arc::clone(&binary.left)),
                _ => Some(Arc::clone(tree)),
            }
        }
    }

    // return a + b;
    let a = ident("a");
    let statement = build::return_statement(
        Space::EMPTY,
        Some(build::binary(Arc::clone(&a), BinaryOperator::Addition, ident("b"))),
    );

    let mut visitor = KeepLeft::default();
    let visited = visitor.visit(&statement, &mut ()).unwrap();

    assert_eq!(
        visitor.order,
        vec![Kind::Identifier, Kind::Identifier, Kind::Binary, Kind::Return]
    );
    assert!(!Arc::ptr_eq(&visited, &statement));
    assert_eq!(visited.id(), statement.id());
    let Tree::Return(Return {
        expression: Some(expression),
        ..
    }) = &*visited
    else {
        panic!("expected a return with an expression");
    };
    assert!(Arc::ptr_eq(expression, &a));
    assert!(visitor.cursor.is_empty());
}
