//! Maps node kinds to their codecs.
//!
//! Each language family contributes the codecs for its own kinds under a scope
//! name. The registry refuses to let a second family claim a kind, and accepts
//! the same family registering again.

use std::sync::Arc;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::receive::ReceiveQueue;
use super::send::SendQueue;
use super::{java, javascript};
use crate::error::RpcError;
use crate::tree::{Kind, Tree, TreeVariant};

pub type SendFn = fn(&Tree, Option<&Tree>, &mut SendQueue<'_>) -> Result<(), RpcError>;
pub type ReceiveFn = fn(Option<&Tree>, &mut ReceiveQueue<'_>) -> Result<Tree, RpcError>;

/// The fields of one node kind, in wire order.
pub trait TreeCodec: TreeVariant {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError>;

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError>;
}

#[derive(Debug, Clone, Copy)]
pub struct Codec {
    pub kind: Kind,
    /// The language family that registered this codec.
    pub scope: &'static str,
    pub send: SendFn,
    pub receive: ReceiveFn,
}

fn send_erased<T: TreeCodec>(after: &Tree, before: Option<&Tree>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
    let after = T::from_tree(after).ok_or(RpcError::KindMismatch {
        expected: T::KIND.as_str(),
        found: after.kind().as_str(),
    })?;
    after.rpc_send(before.and_then(T::from_tree), q)
}

fn receive_erased<T: TreeCodec>(before: Option<&Tree>, q: &mut ReceiveQueue<'_>) -> Result<Tree, RpcError> {
    T::rpc_receive(before.and_then(T::from_tree), q).map(T::into_tree)
}

impl Codec {
    pub fn of<T: TreeCodec>(scope: &'static str) -> Codec {
        Codec {
            kind: T::KIND,
            scope,
            send: send_erased::<T>,
            receive: receive_erased::<T>,
        }
    }
}

#[derive(Debug, Default)]
pub struct CodecRegistry {
    codecs: FxHashMap<Kind, Codec>,
}

static STANDARD: Lazy<Arc<CodecRegistry>> = Lazy::new(|| {
    let mut registry = CodecRegistry::new();
    for codec in java::codecs().into_iter().chain(javascript::codecs()) {
        registry.codecs.insert(codec.kind, codec);
    }
    debug!("Standard codec registry holds {} kinds", registry.len());
    Arc::new(registry)
});

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry with every built-in language family.
    pub fn standard() -> Arc<CodecRegistry> {
        Arc::clone(&STANDARD)
    }

    pub fn register_codec(&mut self, codec: Codec) -> Result<(), RpcError> {
        match self.codecs.get(&codec.kind) {
            Some(existing) if existing.scope == codec.scope => Ok(()),
            Some(existing) => Err(RpcError::CodecConflict {
                kind: codec.kind.as_str(),
                existing: existing.scope,
                requested: codec.scope,
            }),
            None => {
                self.codecs.insert(codec.kind, codec);
                Ok(())
            }
        }
    }

    /// Registers every codec of one family. Stops at the first conflict, leaving
    /// the codecs registered before it in place.
    pub fn register_family(&mut self, codecs: impl IntoIterator<Item = Codec>) -> Result<(), RpcError> {
        for codec in codecs {
            self.register_codec(codec)?;
        }
        Ok(())
    }

    pub fn get(&self, kind: Kind) -> Option<&Codec> {
        self.codecs.get(&kind)
    }

    pub fn contains(&self, kind: Kind) -> bool {
        self.codecs.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    pub fn send(&self, after: &Tree, before: Option<&Tree>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        let kind = after.kind();
        let codec = self.codecs.get(&kind).ok_or(RpcError::NoCodec(kind.as_str()))?;
        (codec.send)(after, before, q)
    }

    pub fn receive(&self, kind: Kind, before: Option<&Tree>, q: &mut ReceiveQueue<'_>) -> Result<Tree, RpcError> {
        let codec = self.codecs.get(&kind).ok_or(RpcError::NoCodec(kind.as_str()))?;
        (codec.receive)(before, q)
    }
}
