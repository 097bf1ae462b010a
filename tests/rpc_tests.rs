mod common;

use std::io;
use std::sync::Arc;
use std::thread;

use lossless_tree::config::RpcConfig;
use lossless_tree::rpc::{
    BatchSink, BatchSource, FramedReader, FramedWriter, MemoryChannel, ObjectState, ReceiveSession, RpcObjectData,
    RpcValue, SendSession, unbounded,
};
use lossless_tree::tree::build;
use lossless_tree::tree::java::{Block, Identifier, Literal, LiteralValue};
use lossless_tree::tree::{Comment, Marker, Markers, RightPadded, Space, Tree, TreeBase};
use lossless_tree::types::{Class, ClassKind, ClassLinks, JavaType, Method, MethodLinks, PrimitiveKind};
use lossless_tree::{Kind, RpcError};
use uuid::Uuid;

use common::{all_samples, class_type, sample};

fn traced() -> RpcConfig {
    RpcConfig {
        trace: true,
        ..RpcConfig::default()
    }
}

fn ident(name: &str) -> Arc<Tree> {
    build::identifier(Space::EMPTY, name, None)
}

fn round_trip(sender: &mut SendSession, receiver: &mut ReceiveSession, tree: &Arc<Tree>) -> Arc<Tree> {
    let mut channel = MemoryChannel::new();
    sender.send_tree(tree, &mut channel).unwrap();
    let received = receiver.receive_tree(tree.id(), &mut channel).unwrap();
    assert_eq!(channel.pending(), 0, "receiver left messages unread");
    received
}

#[test]
fn test_every_kind_round_trips_with_tracing() {
    let mut sender = SendSession::new(traced());
    let mut receiver = ReceiveSession::new();
    for tree in all_samples() {
        let received = round_trip(&mut sender, &mut receiver, &tree);
        assert_eq!(received, tree, "{} did not survive the round trip", tree.kind().as_str());
    }
}

#[test]
fn test_resending_an_unchanged_tree_costs_one_message() {
    let mut sender = SendSession::new(traced());
    let mut receiver = ReceiveSession::new();
    for tree in all_samples() {
        let first = round_trip(&mut sender, &mut receiver, &tree);

        let mut channel = MemoryChannel::new();
        let stats = sender.send_tree(&tree, &mut channel).unwrap();
        assert_eq!(stats.messages, 2);
        assert_eq!(stats.unchanged, 1);
        let second = receiver.receive_tree(tree.id(), &mut channel).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}

#[test]
fn test_changed_field_is_applied_to_the_baseline() {
    let mut sender = SendSession::new(traced());
    let mut receiver = ReceiveSession::new();
    let tree = sample(Kind::MethodInvocation);
    let first = round_trip(&mut sender, &mut receiver, &tree);

    let Tree::MethodInvocation(invocation) = &*tree else {
        unreachable!()
    };
    let mut changed = invocation.clone();
    changed.base.prefix = Space::format("\n\t// moved\n");
    changed.name = ident("renamed");
    let changed = Arc::new(Tree::MethodInvocation(changed));

    let second = round_trip(&mut sender, &mut receiver, &changed);
    assert_eq!(second, changed);

    let (Tree::MethodInvocation(before), Tree::MethodInvocation(after)) = (&*first, &*second) else {
        unreachable!()
    };
    // Untouched children are reused from the receiver's previous version.
    assert!(Arc::ptr_eq(
        &before.select.as_ref().unwrap().element,
        &after.select.as_ref().unwrap().element
    ));
    assert!(Arc::ptr_eq(
        &before.arguments.elements[0].element,
        &after.arguments.elements[0].element
    ));
}

#[test]
fn test_list_diff_sends_only_edits() {
    let (a, b, c, d) = (ident("a"), ident("b"), ident("c"), ident("d"));
    let first = build::block(
        Space::EMPTY,
        vec![Arc::clone(&a), Arc::clone(&b), Arc::clone(&c)],
        Space::EMPTY,
    );
    let Tree::Block(block) = &*first else {
        unreachable!()
    };
    let second = Arc::new(Tree::Block(Block {
        statements: vec![
            block.statements[0].clone(),
            block.statements[2].clone(),
            RightPadded::build(Arc::clone(&d)),
        ],
        ..block.clone()
    }));

    let mut sender = SendSession::new(traced());
    let mut receiver = ReceiveSession::new();
    let received_first = round_trip(&mut sender, &mut receiver, &first);

    let mut channel = MemoryChannel::new();
    sender.send_tree(&second, &mut channel).unwrap();

    let statements: Vec<&RpcObjectData> = channel
        .messages()
        .filter(|m| m.trace.as_deref() == Some("statements"))
        .collect();
    assert_eq!(statements.len(), 5);
    assert_eq!(statements[0].state, ObjectState::Change);
    assert_eq!(statements[1].value, Some(RpcValue::Positions(vec![0, 2, -1])));
    assert_eq!(statements[2].state, ObjectState::NoChange);
    assert_eq!(statements[3].state, ObjectState::NoChange);
    assert_eq!(statements[4].state, ObjectState::Add);

    let names: Vec<&str> = channel
        .messages()
        .filter_map(|m| match &m.value {
            Some(RpcValue::String(name)) if m.trace.as_deref() == Some("simpleName") => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["d"]);

    let received = receiver.receive_tree(second.id(), &mut channel).unwrap();
    assert_eq!(received, second);
    let (Tree::Block(before), Tree::Block(after)) = (&*received_first, &*received) else {
        unreachable!()
    };
    assert!(Arc::ptr_eq(&before.statements[0].element, &after.statements[0].element));
    assert!(Arc::ptr_eq(&before.statements[2].element, &after.statements[1].element));
}

#[test]
fn test_duplicate_keys_match_the_first_element() {
    let a = ident("a");
    let first = build::block(Space::EMPTY, vec![Arc::clone(&a), Arc::clone(&a)], Space::EMPTY);
    let Tree::Block(block) = &*first else {
        unreachable!()
    };
    let second = Arc::new(Tree::Block(Block {
        statements: vec![RightPadded::build(Arc::clone(&a)), RightPadded::build(ident("b"))],
        ..block.clone()
    }));

    let mut sender = SendSession::new(traced());
    let mut receiver = ReceiveSession::new();
    round_trip(&mut sender, &mut receiver, &first);

    let mut channel = MemoryChannel::new();
    sender.send_tree(&second, &mut channel).unwrap();
    let positions = channel
        .messages()
        .find_map(|m| match &m.value {
            Some(RpcValue::Positions(positions)) => Some(positions.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(positions, vec![0, -1]);
    assert_eq!(receiver.receive_tree(second.id(), &mut channel).unwrap(), second);
}

fn identifier_typed(ty: Arc<JavaType>, field_type: Arc<JavaType>) -> Arc<Tree> {
    Arc::new(Tree::Identifier(Identifier {
        base: TreeBase::new(Space::EMPTY),
        annotations: Vec::new(),
        simple_name: "value".to_owned(),
        ty: Some(ty),
        field_type: Some(field_type),
    }))
}

fn list_of_strings() -> Arc<JavaType> {
    JavaType::parameterized(
        JavaType::class(ClassKind::Interface, "java.util.List"),
        vec![JavaType::class(ClassKind::Class, "java.lang.String")],
    )
}

#[test]
fn test_shared_type_is_sent_once() {
    let shared = list_of_strings();
    let tree = identifier_typed(Arc::clone(&shared), Arc::clone(&shared));

    let mut sender = SendSession::new(traced());
    let mut receiver = ReceiveSession::new();
    let mut channel = MemoryChannel::new();
    let stats = sender.send_tree(&tree, &mut channel).unwrap();

    assert_eq!(stats.ref_hits, 1);
    // The parameterized type, the list class and the string class.
    assert_eq!(stats.refs_assigned, 3);
    let fqns = channel
        .messages()
        .filter(|m| m.trace.as_deref() == Some("fullyQualifiedName"))
        .count();
    assert_eq!(fqns, 2);
    let by_reference = channel
        .messages()
        .filter(|m| m.ref_id.is_some() && m.value_type.is_none())
        .count();
    assert_eq!(by_reference, 1);

    let received = receiver.receive_tree(tree.id(), &mut channel).unwrap();
    assert_eq!(received, tree);
    let Tree::Identifier(identifier) = &*received else {
        unreachable!()
    };
    assert!(Arc::ptr_eq(
        identifier.ty.as_ref().unwrap(),
        identifier.field_type.as_ref().unwrap()
    ));

    // Two equal but distinct types are each sent in full.
    let unshared = identifier_typed(list_of_strings(), list_of_strings());
    let mut other = SendSession::new(traced());
    let stats_unshared = other.send_tree(&unshared, &mut MemoryChannel::new()).unwrap();
    assert_eq!(stats_unshared.ref_hits, 0);
    assert!(stats_unshared.messages > stats.messages);
}

#[test]
fn test_references_persist_across_transfers() {
    let shared = list_of_strings();
    let first = identifier_typed(Arc::clone(&shared), JavaType::primitive(PrimitiveKind::Int));
    let second = identifier_typed(Arc::clone(&shared), JavaType::primitive(PrimitiveKind::Long));

    let mut sender = SendSession::new(traced());
    let mut receiver = ReceiveSession::new();
    let received_first = round_trip(&mut sender, &mut receiver, &first);

    let mut channel = MemoryChannel::new();
    let stats = sender.send_tree(&second, &mut channel).unwrap();
    assert_eq!(stats.ref_hits, 1);
    assert_eq!(stats.refs_assigned, 0);
    let received_second = receiver.receive_tree(second.id(), &mut channel).unwrap();
    assert_eq!(received_second, second);

    let (Tree::Identifier(a), Tree::Identifier(b)) = (&*received_first, &*received_second) else {
        unreachable!()
    };
    assert!(Arc::ptr_eq(a.ty.as_ref().unwrap(), b.ty.as_ref().unwrap()));
    assert!(Arc::ptr_eq(
        b.field_type.as_ref().unwrap(),
        &JavaType::primitive(PrimitiveKind::Long)
    ));
}

#[test]
fn test_cyclic_type_graph_round_trips() {
    let class = Arc::new(JavaType::Class(Class::shell(ClassKind::Class, "com.example.Node")));
    let method = Arc::new(JavaType::Method(Method::new(
        "next",
        Vec::new(),
        MethodLinks {
            declaring_type: Some(Arc::clone(&class)),
            return_type: Some(Arc::clone(&class)),
            ..MethodLinks::default()
        },
    )));
    class.as_class().unwrap().complete(ClassLinks {
        methods: vec![Arc::clone(&method)],
        supertype: Some(class_type()),
        ..ClassLinks::default()
    });
    let tree = identifier_typed(Arc::clone(&class), method);

    let mut sender = SendSession::new(traced());
    let mut receiver = ReceiveSession::new();
    let received = round_trip(&mut sender, &mut receiver, &tree);

    let Tree::Identifier(identifier) = &*received else {
        unreachable!()
    };
    let received_class = identifier.ty.as_ref().unwrap();
    let received_method = identifier.field_type.as_ref().unwrap();
    let class_links = received_class.as_class().unwrap().links();
    assert!(Arc::ptr_eq(&class_links.methods[0], received_method));
    let method_links = received_method.as_method().unwrap().links();
    assert!(Arc::ptr_eq(method_links.declaring_type.as_ref().unwrap(), received_class));
    assert_eq!(
        class_links.supertype.as_ref().unwrap().fully_qualified_name(),
        Some("java.lang.String")
    );
}

#[test]
fn test_comments_markers_and_literals_round_trip() {
    let markers = Markers::EMPTY.add(Marker::new("Semicolon").with_data("note", "{\"json\": true}"));
    let literal = Arc::new(Tree::Literal(Literal {
        base: TreeBase::new(Space::format("/* a */\n  // b\n")).with_markers(markers),
        value: Some(LiteralValue::Float(1.5)),
        value_source: Some("1.5".to_owned()),
        ty: Some(JavaType::primitive(PrimitiveKind::Double)),
    }));
    let mut sender = SendSession::new(traced());
    let mut receiver = ReceiveSession::new();
    let received = round_trip(&mut sender, &mut receiver, &literal);
    assert_eq!(received, literal);
    assert_eq!(received.prefix().to_string(), "/* a */\n  // b\n");
    assert!(matches!(&received.prefix().comments[0], Comment::Text(text) if text.multiline));

    // A literal changing from a float to a string travels as a change.
    let Tree::Literal(node) = &*literal else {
        unreachable!()
    };
    let changed = Arc::new(Tree::Literal(Literal {
        value: Some(LiteralValue::String("x".to_owned())),
        value_source: Some("\"x\"".to_owned()),
        ..node.clone()
    }));
    assert_eq!(round_trip(&mut sender, &mut receiver, &changed), changed);
}

#[test]
fn test_deleting_an_optional_child() {
    let with = build::return_statement(Space::EMPTY, Some(ident("x")));
    let Tree::Return(node) = &*with else {
        unreachable!()
    };
    let mut without = node.clone();
    without.expression = None;
    let without = Arc::new(Tree::Return(without));

    let mut sender = SendSession::new(traced());
    let mut receiver = ReceiveSession::new();
    round_trip(&mut sender, &mut receiver, &with);

    let mut channel = MemoryChannel::new();
    let stats = sender.send_tree(&without, &mut channel).unwrap();
    assert_eq!(stats.deletes, 1);
    assert_eq!(receiver.receive_tree(without.id(), &mut channel).unwrap(), without);
}

#[test]
fn test_reset_sends_everything_again() {
    let tree = sample(Kind::Binary);
    let mut sender = SendSession::new(RpcConfig::default());
    let mut receiver = ReceiveSession::new();
    round_trip(&mut sender, &mut receiver, &tree);

    sender.reset();
    receiver.reset();
    let mut channel = MemoryChannel::new();
    let stats = sender.send_tree(&tree, &mut channel).unwrap();
    assert!(stats.adds > 1);
    assert_eq!(receiver.receive_tree(tree.id(), &mut channel).unwrap(), tree);
}

#[test]
fn test_batches_respect_batch_size() {
    let tree = sample(Kind::ClassDeclaration);
    let config = RpcConfig {
        batch_size: 7,
        trace: false,
    };
    let mut sender = SendSession::new(config);
    let mut receiver = ReceiveSession::new();
    let mut channel = MemoryChannel::new();
    let stats = sender.send_tree(&tree, &mut channel).unwrap();

    assert_eq!(stats.batches, stats.messages.div_ceil(7));
    assert_eq!(channel.sent_batches, stats.batches);
    assert_eq!(channel.sent_messages, stats.messages);
    assert_eq!(receiver.receive_tree(tree.id(), &mut channel).unwrap(), tree);
}

#[test]
fn test_lockstep_violation_is_reported() {
    let mut channel = MemoryChannel::new();
    channel
        .send_batch(vec![
            RpcObjectData::add(Some("J.Empty"), None).with_trace("root"),
            RpcObjectData::no_change().with_trace("prefix"),
        ])
        .unwrap();
    let error = ReceiveSession::new()
        .receive_tree(Uuid::new_v4(), &mut channel)
        .unwrap_err();
    assert!(matches!(
        error,
        RpcError::Lockstep {
            expected: "id",
            ref found,
        } if found == "prefix"
    ));
}

#[test]
fn test_unknown_kinds_are_protocol_errors() {
    let mut channel = MemoryChannel::new();
    channel.send_batch(vec![RpcObjectData::add(Some("J.Nope"), None)]).unwrap();
    let error = ReceiveSession::new()
        .receive_tree(Uuid::new_v4(), &mut channel)
        .unwrap_err();
    assert!(matches!(error, RpcError::UnknownKind(ref kind) if kind == "J.Nope"));

    let id = Uuid::new_v4();
    let mut channel = MemoryChannel::new();
    channel
        .send_batch(vec![
            RpcObjectData::add(Some("J.Empty"), None),
            RpcObjectData::add(None, Some(RpcValue::String(id.to_string()))),
            RpcObjectData::add(None, None),
            RpcObjectData::add(None, None),
            RpcObjectData::change(Some(RpcValue::Positions(vec![-1]))),
            RpcObjectData::add(Some("DocComment"), None),
        ])
        .unwrap();
    let error = ReceiveSession::new().receive_tree(id, &mut channel).unwrap_err();
    assert!(matches!(error, RpcError::UnknownCommentKind(ref kind) if kind == "DocComment"));
}

#[test]
fn test_absent_values_take_defaults_and_unknown_references_fail() {
    let id = Uuid::new_v4();
    let mut channel = MemoryChannel::new();
    channel
        .send_batch(vec![
            RpcObjectData::add(Some("J.Primitive"), None),
            RpcObjectData::add(None, Some(RpcValue::String(id.to_string()))),
            RpcObjectData::no_change(),
            RpcObjectData::no_change(),
            RpcObjectData::reference(9),
        ])
        .unwrap();
    let error = ReceiveSession::new().receive_tree(id, &mut channel).unwrap_err();
    assert!(matches!(error, RpcError::UnresolvedReference(9)));

    let mut channel = MemoryChannel::new();
    channel
        .send_batch(vec![
            RpcObjectData::add(Some("J.Empty"), None),
            RpcObjectData::add(None, Some(RpcValue::String(id.to_string()))),
            RpcObjectData::delete(),
            RpcObjectData::no_change(),
            RpcObjectData::end_of_object(),
        ])
        .unwrap();
    let received = ReceiveSession::new().receive_tree(id, &mut channel).unwrap();
    assert_eq!(received.id(), id);
    assert_eq!(received.prefix(), &Space::EMPTY);
    assert_eq!(received.markers(), &Markers::EMPTY);
}

#[test]
fn test_framed_transport() {
    let trees = all_samples();
    let mut sender = SendSession::new(traced());
    let mut writer = FramedWriter::new(Vec::new());
    for tree in &trees {
        sender.send_tree(tree, &mut writer).unwrap();
    }

    let mut reader = FramedReader::new(io::Cursor::new(writer.into_inner()));
    let mut receiver = ReceiveSession::new();
    for tree in &trees {
        assert_eq!(&receiver.receive_tree(tree.id(), &mut reader).unwrap(), tree);
    }
    assert!(matches!(reader.next_batch(), Err(RpcError::ChannelClosed)));
}

#[test]
fn test_threaded_transport() {
    let trees = all_samples();
    let ids: Vec<Uuid> = trees.iter().map(|tree| tree.id()).collect();
    let (mut sink, mut source) = unbounded();

    let sending = thread::spawn(move || {
        let mut sender = SendSession::new(RpcConfig {
            batch_size: 16,
            trace: true,
        });
        for tree in &trees {
            sender.send_tree(tree, &mut sink).unwrap();
        }
        trees
    });

    let mut receiver = ReceiveSession::new();
    let received: Vec<Arc<Tree>> = ids
        .iter()
        .map(|id| receiver.receive_tree(*id, &mut source).unwrap())
        .collect();
    let trees = sending.join().unwrap();
    assert_eq!(received, trees);
    assert!(matches!(source.next_batch(), Err(RpcError::ChannelClosed)));
}

#[tokio::test]
async fn test_async_receiving_end() {
    let tree = sample(Kind::ArrowFunction);
    let (mut sink, mut source) = unbounded();
    let mut sender = SendSession::new(RpcConfig::default());
    sender.send_tree(&tree, &mut sink).unwrap();
    drop(sink);

    let mut buffered = MemoryChannel::new();
    while let Ok(batch) = source.recv_batch().await {
        buffered.send_batch(batch).unwrap();
    }
    let received = ReceiveSession::new().receive_tree(tree.id(), &mut buffered).unwrap();
    assert_eq!(received, tree);
}

/// Rejects its first batch, then forwards to an in-memory queue.
struct FailsOnce {
    inner: MemoryChannel,
    failed: bool,
}

impl BatchSink for FailsOnce {
    fn send_batch(&mut self, batch: Vec<RpcObjectData>) -> Result<(), RpcError> {
        if !self.failed {
            self.failed = true;
            return Err(RpcError::ChannelClosed);
        }
        self.inner.send_batch(batch)
    }
}

#[test]
fn test_failed_send_forgets_new_references() {
    let shared = list_of_strings();
    let tree = identifier_typed(Arc::clone(&shared), Arc::clone(&shared));
    let mut sender = SendSession::new(traced());
    let mut sink = FailsOnce {
        inner: MemoryChannel::new(),
        failed: false,
    };

    assert!(matches!(sender.send_tree(&tree, &mut sink), Err(RpcError::ChannelClosed)));
    assert!(sender.remote(tree.id()).is_none());

    let stats = sender.send_tree(&tree, &mut sink).unwrap();
    assert_eq!(stats.refs_assigned, 3);
    assert_eq!(stats.ref_hits, 1);
    let received = ReceiveSession::new().receive_tree(tree.id(), &mut sink.inner).unwrap();
    assert_eq!(received, tree);
}

#[test]
fn test_failed_receive_discards_partial_state() {
    let shared = list_of_strings();
    let tree = identifier_typed(Arc::clone(&shared), Arc::clone(&shared));
    let mut channel = MemoryChannel::new();
    SendSession::new(traced()).send_tree(&tree, &mut channel).unwrap();

    // Everything but the closing message.
    let mut messages: Vec<RpcObjectData> = channel.messages().cloned().collect();
    messages.pop();
    let mut cut = MemoryChannel::new();
    cut.send_batch(messages).unwrap();

    let mut receiver = ReceiveSession::new();
    assert!(matches!(
        receiver.receive_tree(tree.id(), &mut cut),
        Err(RpcError::ChannelClosed)
    ));
    assert!(receiver.local(tree.id()).is_none());

    // The shared type registered by the broken transfer is gone.
    let id = Uuid::new_v4();
    let mut channel = MemoryChannel::new();
    channel
        .send_batch(vec![
            RpcObjectData::add(Some("J.Primitive"), None),
            RpcObjectData::add(None, Some(RpcValue::String(id.to_string()))),
            RpcObjectData::no_change(),
            RpcObjectData::no_change(),
            RpcObjectData::reference(1),
        ])
        .unwrap();
    assert!(matches!(
        receiver.receive_tree(id, &mut channel),
        Err(RpcError::UnresolvedReference(1))
    ));

    // Messages left unread by a failed transfer are not read by the next one.
    let mut channel = MemoryChannel::new();
    channel
        .send_batch(vec![
            RpcObjectData::add(Some("J.Empty"), None).with_trace("root"),
            RpcObjectData::no_change().with_trace("prefix"),
            RpcObjectData::no_change(),
            RpcObjectData::end_of_object(),
        ])
        .unwrap();
    assert!(matches!(
        receiver.receive_tree(Uuid::new_v4(), &mut channel),
        Err(RpcError::Lockstep { .. })
    ));

    let empty = sample(Kind::Empty);
    let mut channel = MemoryChannel::new();
    SendSession::new(traced()).send_tree(&empty, &mut channel).unwrap();
    assert_eq!(receiver.receive_tree(empty.id(), &mut channel).unwrap(), empty);
}

#[test]
fn test_unterminated_comment_prints_back_after_transfer() {
    let tree = build::return_statement(Space::format(" /* open"), None);
    let mut sender = SendSession::new(traced());
    let mut receiver = ReceiveSession::new();
    let received = round_trip(&mut sender, &mut receiver, &tree);
    assert_eq!(received, tree);
    assert_eq!(received.prefix().to_string(), " /* open");
}
