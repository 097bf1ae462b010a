//! Benchmarks for visiting and transferring trees
//!
//! Measures performance of:
//! - Identity and rewriting visits over wide and deep trees
//! - Full sends and incremental resends through the RPC codec
//! - Signatures of shared type graphs

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Arc;

use lossless_tree::config::RpcConfig;
use lossless_tree::rpc::{MemoryChannel, ReceiveSession, SendSession};
use lossless_tree::tree::java::{BinaryOperator, Block, Identifier};
use lossless_tree::tree::{RightPadded, Space, Tree, build};
use lossless_tree::types::{ClassKind, JavaType, signature};
use lossless_tree::visitor::{Cursor, JavaVisitor, walk};

// ============================================================================
// Sample trees
// ============================================================================

fn string_type() -> Arc<JavaType> {
    JavaType::parameterized(
        JavaType::class(ClassKind::Interface, "java.util.List"),
        vec![JavaType::class(ClassKind::Class, "java.lang.String")],
    )
}

/// `{ x0.call0(a + b * c); x1.call1(a + b * c); ... }` with every identifier sharing one type.
fn wide_block(statements: usize) -> Arc<Tree> {
    let ty = string_type();
    let ident = |name: &str| build::identifier(Space::single_space(), name, Some(Arc::clone(&ty)));
    let body = (0..statements)
        .map(|i| {
            let argument = build::binary(
                ident("a"),
                BinaryOperator::Addition,
                build::binary(ident("b"), BinaryOperator::Multiplication, ident("c")),
            );
            build::method_invocation(
                Space::format("\n    // statement\n    "),
                Some(ident(&format!("x{}", i))),
                &format!("call{}", i),
                vec![argument],
                None,
            )
        })
        .collect();
    build::block(Space::EMPTY, body, Space::whitespace("\n"))
}

/// `(((a + a) + a) + ...)` nested `depth` times.
fn deep_expression(depth: usize) -> Arc<Tree> {
    (0..depth).fold(build::identifier(Space::EMPTY, "a", None), |inner, _| {
        build::parentheses(
            Space::EMPTY,
            build::binary(inner, BinaryOperator::Addition, build::identifier(Space::single_space(), "a", None)),
        )
    })
}

/// Replaces the last statement of a block.
fn edit_last(block: &Arc<Tree>) -> Arc<Tree> {
    let Tree::Block(node) = &**block else {
        return Arc::clone(block);
    };
    let mut statements = node.statements.clone();
    statements.pop();
    statements.push(RightPadded::build(build::identifier(Space::EMPTY, "edited", None)));
    Arc::new(Tree::Block(Block {
        statements,
        ..node.clone()
    }))
}

// ============================================================================
// Visitors
// ============================================================================

#[derive(Default)]
struct Identity {
    cursor: Cursor,
}

impl JavaVisitor<()> for Identity {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }
}

#[derive(Default)]
struct Rename {
    cursor: Cursor,
}

impl JavaVisitor<()> for Rename {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn visit_identifier(&mut self, tree: &Arc<Tree>, node: &Identifier, p: &mut ()) -> Option<Arc<Tree>> {
        if node.simple_name != "c" {
            return walk::walk_identifier(self, tree, node, p);
        }
        let mut renamed = node.clone();
        renamed.simple_name = "d".to_owned();
        Some(Arc::new(Tree::Identifier(renamed)))
    }
}

fn bench_visitor_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("visitor_traversal");

    for size in [10, 100, 1000] {
        let tree = wide_block(size);
        group.bench_with_input(BenchmarkId::new("identity_wide", size), &tree, |b, tree| {
            b.iter(|| Identity::default().visit(black_box(tree), &mut ()))
        });
        group.bench_with_input(BenchmarkId::new("rename_wide", size), &tree, |b, tree| {
            b.iter(|| Rename::default().visit(black_box(tree), &mut ()))
        });
    }

    for depth in [10, 100] {
        let tree = deep_expression(depth);
        group.bench_with_input(BenchmarkId::new("identity_deep", depth), &tree, |b, tree| {
            b.iter(|| Identity::default().visit(black_box(tree), &mut ()))
        });
    }

    group.finish();
}

// ============================================================================
// RPC
// ============================================================================

fn bench_rpc_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("rpc_transfer");

    for size in [10, 100, 1000] {
        let tree = wide_block(size);
        group.bench_with_input(BenchmarkId::new("full_send", size), &tree, |b, tree| {
            b.iter(|| {
                let mut channel = MemoryChannel::new();
                SendSession::new(RpcConfig::default())
                    .send_tree(black_box(tree), &mut channel)
                    .ok();
                channel
            })
        });

        group.bench_with_input(BenchmarkId::new("round_trip", size), &tree, |b, tree| {
            b.iter(|| {
                let mut channel = MemoryChannel::new();
                SendSession::new(RpcConfig::default()).send_tree(tree, &mut channel).ok();
                ReceiveSession::new().receive_tree(tree.id(), &mut channel).ok()
            })
        });

        let edited = edit_last(&tree);
        group.bench_with_input(BenchmarkId::new("incremental_send", size), &edited, |b, edited| {
            let mut sender = SendSession::new(RpcConfig::default());
            b.iter(|| {
                let mut channel = MemoryChannel::new();
                sender.send_tree(&tree, &mut channel).ok();
                channel.clear();
                sender.send_tree(black_box(edited), &mut channel).ok();
                channel
            })
        });
    }

    group.finish();
}

fn bench_signatures(c: &mut Criterion) {
    let mut group = c.benchmark_group("type_signatures");
    let ty = string_type();
    group.bench_function("parameterized", |b| b.iter(|| signature(black_box(&ty))));
    group.finish();
}

criterion_group!(benches, bench_visitor_traversal, bench_rpc_transfer, bench_signatures);
criterion_main!(benches);
