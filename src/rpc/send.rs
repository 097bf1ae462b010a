//! The sending half of the codec.

use std::collections::hash_map::Entry;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{Level, debug, trace};
use uuid::Uuid;

use super::channel::BatchSink;
use super::message::{ObjectState, RpcObjectData, RpcValue};
use super::registry::CodecRegistry;
use crate::error::RpcError;
use crate::logging::WIRE_TARGET;
use crate::tree::{Identical, TreeBase};
use crate::types::JavaType;

/// A value the codec knows how to transmit.
pub trait RpcSend: Identical {
    /// Sent with `ADD`. A value whose type differs from its baseline's is re-added
    /// in full rather than diffed.
    fn value_type(&self) -> Option<&'static str> {
        None
    }

    /// Scalar payload carried by the `ADD`/`CHANGE` message itself.
    fn inline_value(&self) -> Option<RpcValue> {
        None
    }

    /// Shared values travel once per session and by reference afterwards.
    fn memoized(&self) -> Option<&Arc<JavaType>> {
        None
    }

    /// Sends the fields of this value, diffed against `before` when present.
    fn send_content(&self, _before: Option<&Self>, _q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        Ok(())
    }
}

/// Identity of a list element used to match it against the previous list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKey {
    Id(Uuid),
    Index(usize),
}

pub trait ListElement {
    fn list_key(&self, index: usize) -> ElementKey;
}

/// Reference ids assigned to shared types in one session.
#[derive(Debug, Default)]
pub struct SendRefs {
    ids: FxHashMap<usize, u32>,
    // Holding the types keeps their addresses from being reused while the ids live.
    retained: Vec<Arc<JavaType>>,
}

impl SendRefs {
    pub fn get(&self, ty: &Arc<JavaType>) -> Option<u32> {
        self.ids.get(&(Arc::as_ptr(ty) as usize)).copied()
    }

    pub fn assign(&mut self, ty: &Arc<JavaType>) -> u32 {
        let id = self.retained.len() as u32 + 1;
        self.ids.insert(Arc::as_ptr(ty) as usize, id);
        self.retained.push(Arc::clone(ty));
        id
    }

    pub fn len(&self) -> usize {
        self.retained.len()
    }

    pub fn is_empty(&self) -> bool {
        self.retained.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.retained.clear();
    }

    /// Forgets every id assigned after the first `len`.
    pub fn truncate(&mut self, len: usize) {
        for ty in self.retained.drain(len.min(self.retained.len())..) {
            self.ids.remove(&(Arc::as_ptr(&ty) as usize));
        }
    }
}

/// Counters for one `send_tree` call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SendStats {
    pub messages: usize,
    pub batches: usize,
    pub adds: usize,
    pub changes: usize,
    pub deletes: usize,
    pub unchanged: usize,
    pub refs_assigned: usize,
    pub ref_hits: usize,
}

/// Buffers outgoing messages and hands them to the sink in batches.
pub struct SendQueue<'a> {
    registry: &'a CodecRegistry,
    refs: &'a mut SendRefs,
    sink: &'a mut dyn BatchSink,
    batch: Vec<RpcObjectData>,
    batch_size: usize,
    trace: bool,
    stats: SendStats,
}

impl<'a> SendQueue<'a> {
    pub fn new(
        registry: &'a CodecRegistry,
        refs: &'a mut SendRefs,
        sink: &'a mut dyn BatchSink,
        batch_size: usize,
        trace: bool,
    ) -> Self {
        SendQueue {
            registry,
            refs,
            sink,
            batch: Vec::with_capacity(batch_size.min(1024)),
            batch_size: batch_size.max(1),
            trace,
            stats: SendStats::default(),
        }
    }

    pub fn registry(&self) -> &'a CodecRegistry {
        self.registry
    }

    pub fn stats(&self) -> &SendStats {
        &self.stats
    }

    pub fn into_stats(self) -> SendStats {
        self.stats
    }

    /// Queues one message, flushing when the batch is full.
    pub fn put(&mut self, label: &'static str, mut message: RpcObjectData) -> Result<(), RpcError> {
        if self.trace {
            message.trace = Some(label.to_owned());
        }
        match message.state {
            ObjectState::NoChange => self.stats.unchanged += 1,
            ObjectState::Add => self.stats.adds += 1,
            ObjectState::Delete => self.stats.deletes += 1,
            ObjectState::Change => self.stats.changes += 1,
            ObjectState::EndOfObject => {}
        }
        self.stats.messages += 1;

        if tracing::enabled!(target: WIRE_TARGET, Level::TRACE) {
            if let Ok(json) = serde_json::to_string(&message) {
                trace!(target: WIRE_TARGET, label, "-> {}", json);
            }
        }

        self.batch.push(message);
        if self.batch.len() >= self.batch_size {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), RpcError> {
        if self.batch.is_empty() {
            return Ok(());
        }
        let batch = std::mem::replace(&mut self.batch, Vec::with_capacity(self.batch_size.min(1024)));
        self.stats.batches += 1;
        self.sink.send_batch(batch)
    }

    /// Sends `after` as a diff against `before`.
    ///
    /// Absent on both sides or identical is `NO_CHANGE`; absent now is `DELETE`.
    /// Shared values are `ADD`ed once with a fresh reference id and named by that
    /// id afterwards. Everything else is a `CHANGE` against a baseline of the same
    /// value type, or an `ADD` of the full value.
    pub fn send<V: RpcSend>(&mut self, label: &'static str, after: Option<&V>, before: Option<&V>) -> Result<(), RpcError> {
        let after = match (after, before) {
            (None, None) => return self.put(label, RpcObjectData::no_change()),
            (None, Some(_)) => return self.put(label, RpcObjectData::delete()),
            (Some(after), Some(before)) if after.identical(before) => {
                return self.put(label, RpcObjectData::no_change());
            }
            (Some(after), _) => after,
        };

        if let Some(shared) = after.memoized() {
            if let Some(id) = self.refs.get(shared) {
                self.stats.ref_hits += 1;
                return self.put(label, RpcObjectData::reference(id));
            }
            let id = self.refs.assign(shared);
            self.stats.refs_assigned += 1;
            self.put(
                label,
                RpcObjectData::add(after.value_type(), after.inline_value()).with_ref(id),
            )?;
            return after.send_content(None, self);
        }

        match before {
            Some(before) if before.value_type() == after.value_type() => {
                self.put(label, RpcObjectData::change(after.inline_value()))?;
                after.send_content(Some(before), self)
            }
            _ => {
                self.put(label, RpcObjectData::add(after.value_type(), after.inline_value()))?;
                after.send_content(None, self)
            }
        }
    }

    /// Sends a required field of `after`.
    pub fn get_and_send<T, V: RpcSend>(
        &mut self,
        label: &'static str,
        after: &T,
        before: Option<&T>,
        field: impl Fn(&T) -> &V,
    ) -> Result<(), RpcError> {
        self.send(label, Some(field(after)), before.map(&field))
    }

    /// Sends an optional field of `after`.
    pub fn get_and_send_option<T, V: RpcSend>(
        &mut self,
        label: &'static str,
        after: &T,
        before: Option<&T>,
        field: impl Fn(&T) -> Option<&V>,
    ) -> Result<(), RpcError> {
        self.send(label, field(after), before.and_then(&field))
    }

    /// Sends a list field of `after` as an edit script against the previous list.
    pub fn get_and_send_list<T, V: RpcSend + ListElement>(
        &mut self,
        label: &'static str,
        after: &T,
        before: Option<&T>,
        field: impl Fn(&T) -> &Vec<V>,
    ) -> Result<(), RpcError> {
        self.send_list(label, field(after), before.map(|before| field(before).as_slice()))
    }

    /// Sends `after` as: a header (`ADD` without a previous list, `CHANGE` with
    /// one), a `CHANGE` carrying for every element its position in the previous
    /// list (`-1` when new), then each element diffed against the previous element
    /// it was matched with. Unchanged elements cost one `NO_CHANGE` each.
    ///
    /// When several previous elements share a key the first one wins.
    pub fn send_list<V: RpcSend + ListElement>(
        &mut self,
        label: &'static str,
        after: &[V],
        before: Option<&[V]>,
    ) -> Result<(), RpcError> {
        if let Some(before) = before {
            if after.len() == before.len() && after.iter().zip(before).all(|(a, b)| a.identical(b)) {
                return self.put(label, RpcObjectData::no_change());
            }
        }

        let header = match before {
            Some(_) => RpcObjectData::change(None),
            None => RpcObjectData::add(None, None),
        };
        self.put(label, header)?;

        let before = before.unwrap_or(&[]);
        let mut index: FxHashMap<ElementKey, usize> = FxHashMap::default();
        for (i, element) in before.iter().enumerate() {
            match index.entry(element.list_key(i)) {
                Entry::Occupied(entry) => {
                    debug!("Duplicate key {:?} in previous `{}` list, matching against index {}", entry.key(), label, entry.get());
                }
                Entry::Vacant(entry) => {
                    entry.insert(i);
                }
            }
        }

        let positions: Vec<i32> = after
            .iter()
            .enumerate()
            .map(|(i, element)| index.get(&element.list_key(i)).map_or(-1, |&j| j as i32))
            .collect();
        self.put(label, RpcObjectData::change(Some(RpcValue::Positions(positions.clone()))))?;

        for (element, position) in after.iter().zip(positions) {
            let previous = usize::try_from(position).ok().and_then(|j| before.get(j));
            self.send(label, Some(element), previous)?;
        }
        Ok(())
    }

    /// Sends the fields every node starts with.
    pub fn send_base(&mut self, after: &TreeBase, before: Option<&TreeBase>) -> Result<(), RpcError> {
        self.get_and_send("id", after, before, |base| &base.id)?;
        self.get_and_send("prefix", after, before, |base| &base.prefix)?;
        self.get_and_send("markers", after, before, |base| &base.markers)
    }
}
