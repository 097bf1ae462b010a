//! One end of a long-lived exchange of trees.
//!
//! Each side remembers the last version of every tree that crossed the channel,
//! keyed by root id, so the next transfer of the same tree only carries what
//! changed. Both sides also keep the reference table for shared types.

use std::collections::VecDeque;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;
use uuid::Uuid;

use super::channel::{BatchSink, BatchSource};
use super::message::{ObjectState, RpcObjectData};
use super::receive::{ReceiveQueue, ReceiveRefs};
use super::registry::CodecRegistry;
use super::send::{SendQueue, SendRefs, SendStats};
use crate::config::RpcConfig;
use crate::error::RpcError;
use crate::tree::Tree;

const ROOT: &str = "root";
const END: &str = "end";

pub struct SendSession {
    config: RpcConfig,
    registry: Arc<CodecRegistry>,
    refs: SendRefs,
    remote: FxHashMap<Uuid, Arc<Tree>>,
}

impl SendSession {
    pub fn new(config: RpcConfig) -> Self {
        Self::with_registry(config, CodecRegistry::standard())
    }

    pub fn with_registry(config: RpcConfig, registry: Arc<CodecRegistry>) -> Self {
        SendSession {
            config,
            registry,
            refs: SendRefs::default(),
            remote: FxHashMap::default(),
        }
    }

    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    /// The version of a tree the peer is known to hold.
    pub fn remote(&self, id: Uuid) -> Option<&Arc<Tree>> {
        self.remote.get(&id)
    }

    /// Sends `tree` as a diff against the version the peer holds, closes it with
    /// `END_OF_OBJECT` and flushes.
    ///
    /// The new version becomes the baseline only when the whole transfer succeeded;
    /// reference ids assigned during a failed transfer are forgotten.
    pub fn send_tree(&mut self, tree: &Arc<Tree>, sink: &mut dyn BatchSink) -> Result<SendStats, RpcError> {
        let id = tree.id();
        let before = self.remote.get(&id).cloned();
        debug!(
            "Sending {} {} ({})",
            tree.kind().as_str(),
            id,
            if before.is_some() { "diff" } else { "full" }
        );

        let assigned = self.refs.len();
        let q = SendQueue::new(
            &self.registry,
            &mut self.refs,
            sink,
            self.config.batch_size,
            self.config.trace,
        );
        let stats = match transfer(q, tree, before.as_ref()) {
            Ok(stats) => stats,
            Err(e) => {
                debug!("Send of {} failed, dropping {} new refs: {}", id, self.refs.len() - assigned, e);
                self.refs.truncate(assigned);
                return Err(e);
            }
        };

        self.remote.insert(id, Arc::clone(tree));
        debug!(
            "Sent {} messages in {} batches ({} refs assigned, {} ref hits)",
            stats.messages, stats.batches, stats.refs_assigned, stats.ref_hits
        );
        Ok(stats)
    }

    /// Forgets every baseline and reference; the peer must reset too.
    pub fn reset(&mut self) {
        debug!("Resetting send session ({} trees, {} refs)", self.remote.len(), self.refs.len());
        self.remote.clear();
        self.refs.clear();
    }
}

pub struct ReceiveSession {
    registry: Arc<CodecRegistry>,
    refs: ReceiveRefs,
    pending: VecDeque<RpcObjectData>,
    local: FxHashMap<Uuid, Arc<Tree>>,
}

impl Default for ReceiveSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiveSession {
    pub fn new() -> Self {
        Self::with_registry(CodecRegistry::standard())
    }

    pub fn with_registry(registry: Arc<CodecRegistry>) -> Self {
        ReceiveSession {
            registry,
            refs: ReceiveRefs::default(),
            pending: VecDeque::new(),
            local: FxHashMap::default(),
        }
    }

    pub fn local(&self, id: Uuid) -> Option<&Arc<Tree>> {
        self.local.get(&id)
    }

    /// Reads the tree the sender sent for root `id`, applying it to the version
    /// received last time.
    ///
    /// On failure the references registered and the messages left unread by this
    /// transfer are discarded.
    pub fn receive_tree(&mut self, id: Uuid, source: &mut dyn BatchSource) -> Result<Arc<Tree>, RpcError> {
        let before = self.local.get(&id).cloned();
        let registered = self.refs.len();
        let q = ReceiveQueue::new(&self.registry, &mut self.refs, source, &mut self.pending);

        let tree = match reconstruct(q, before.as_ref()) {
            Ok(tree) => tree,
            Err(e) => {
                debug!(
                    "Receive of {} failed, dropping {} new refs and {} unread messages: {}",
                    id,
                    self.refs.len() - registered,
                    self.pending.len(),
                    e
                );
                self.refs.truncate(registered);
                self.pending.clear();
                return Err(e);
            }
        };

        debug!("Received {} {}", tree.kind().as_str(), tree.id());
        self.local.insert(id, Arc::clone(&tree));
        Ok(tree)
    }

    pub fn reset(&mut self) {
        debug!("Resetting receive session ({} trees, {} refs)", self.local.len(), self.refs.len());
        self.local.clear();
        self.refs.clear();
        self.pending.clear();
    }
}

fn transfer(mut q: SendQueue<'_>, tree: &Arc<Tree>, before: Option<&Arc<Tree>>) -> Result<SendStats, RpcError> {
    q.send(ROOT, Some(tree), before)?;
    q.put(END, RpcObjectData::end_of_object())?;
    q.flush()?;
    Ok(q.into_stats())
}

fn reconstruct(mut q: ReceiveQueue<'_>, before: Option<&Arc<Tree>>) -> Result<Arc<Tree>, RpcError> {
    let tree: Arc<Tree> = q.receive_required(ROOT, before)?;
    let end = q.take(END)?;
    if end.state != ObjectState::EndOfObject {
        return Err(RpcError::MissingEndOfObject(end.state));
    }
    Ok(tree)
}
