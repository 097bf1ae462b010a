//! The receiving half of the codec. Every read names the field it expects, in
//! the same order the sender wrote it.

use std::collections::VecDeque;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{Level, trace};

use super::channel::BatchSource;
use super::message::{ObjectState, RpcObjectData, RpcValue};
use super::registry::CodecRegistry;
use crate::error::RpcError;
use crate::logging::WIRE_TARGET;
use crate::tree::TreeBase;
use crate::types::JavaType;

/// A value the codec knows how to rebuild.
pub trait RpcReceive: Clone + Sized {
    /// Builds the value announced by `msg`, reading its fields from `q`.
    /// `before` is the baseline for a `CHANGE` and `None` for an `ADD`.
    fn receive_content(
        label: &'static str,
        msg: &RpcObjectData,
        before: Option<&Self>,
        q: &mut ReceiveQueue<'_>,
    ) -> Result<Self, RpcError>;

    /// The value a required field takes when the message leaves it empty.
    fn absent() -> Option<Self> {
        None
    }

    /// Looks up a shared value sent earlier in the session.
    fn resolve_ref(_q: &ReceiveQueue<'_>, _id: u32) -> Option<Self> {
        None
    }
}

/// Shared types seen in one session, by reference id.
#[derive(Debug, Default)]
pub struct ReceiveRefs {
    types: FxHashMap<u32, Arc<JavaType>>,
    order: Vec<u32>,
}

impl ReceiveRefs {
    pub fn get(&self, id: u32) -> Option<&Arc<JavaType>> {
        self.types.get(&id)
    }

    pub fn insert(&mut self, id: u32, ty: Arc<JavaType>) {
        if self.types.insert(id, ty).is_none() {
            self.order.push(id);
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn clear(&mut self) {
        self.types.clear();
        self.order.clear();
    }

    /// Forgets every reference registered after the first `len`.
    pub fn truncate(&mut self, len: usize) {
        for id in self.order.drain(len.min(self.order.len())..) {
            self.types.remove(&id);
        }
    }
}

pub struct ReceiveQueue<'a> {
    registry: &'a CodecRegistry,
    refs: &'a mut ReceiveRefs,
    source: &'a mut dyn BatchSource,
    pending: &'a mut VecDeque<RpcObjectData>,
}

impl<'a> ReceiveQueue<'a> {
    pub fn new(
        registry: &'a CodecRegistry,
        refs: &'a mut ReceiveRefs,
        source: &'a mut dyn BatchSource,
        pending: &'a mut VecDeque<RpcObjectData>,
    ) -> Self {
        ReceiveQueue {
            registry,
            refs,
            source,
            pending,
        }
    }

    pub fn registry(&self) -> &'a CodecRegistry {
        self.registry
    }

    pub fn refs(&self) -> &ReceiveRefs {
        self.refs
    }

    /// Registers a shared type before its links are read, so that a link back to
    /// it resolves to the same instance.
    pub fn remember_ref(&mut self, id: u32, ty: Arc<JavaType>) {
        self.refs.insert(id, ty);
    }

    /// Takes the next message, pulling a new batch when the current one is used up.
    pub fn take(&mut self, label: &'static str) -> Result<RpcObjectData, RpcError> {
        while self.pending.is_empty() {
            let batch = self.source.next_batch()?;
            self.pending.extend(batch);
        }
        let message = self.pending.pop_front().ok_or(RpcError::ChannelClosed)?;

        if tracing::enabled!(target: WIRE_TARGET, Level::TRACE) {
            if let Ok(json) = serde_json::to_string(&message) {
                trace!(target: WIRE_TARGET, label, "<- {}", json);
            }
        }

        if let Some(found) = &message.trace {
            if found != label {
                return Err(RpcError::Lockstep {
                    expected: label,
                    found: found.clone(),
                });
            }
        }
        Ok(message)
    }

    /// Reads one value, diffed against `before`.
    pub fn receive<V: RpcReceive>(&mut self, label: &'static str, before: Option<&V>) -> Result<Option<V>, RpcError> {
        let message = self.take(label)?;
        match message.state {
            ObjectState::NoChange => Ok(before.cloned()),
            ObjectState::Delete => Ok(None),
            ObjectState::Add => {
                if let Some(id) = message.ref_id {
                    if let Some(known) = V::resolve_ref(self, id) {
                        return Ok(Some(known));
                    }
                    if message.value_type.is_none() {
                        return Err(RpcError::UnresolvedReference(id));
                    }
                }
                V::receive_content(label, &message, None, self).map(Some)
            }
            ObjectState::Change => V::receive_content(label, &message, before, self).map(Some),
            ObjectState::EndOfObject => Err(RpcError::UnexpectedState {
                label,
                found: message.state,
            }),
        }
    }

    /// Reads a value that must be present.
    pub fn receive_required<V: RpcReceive>(&mut self, label: &'static str, before: Option<&V>) -> Result<V, RpcError> {
        match self.receive(label, before)? {
            Some(value) => Ok(value),
            None => V::absent().ok_or(RpcError::MissingValue(label)),
        }
    }

    /// Reads a list written by `SendQueue::send_list`.
    pub fn receive_list<V: RpcReceive>(
        &mut self,
        label: &'static str,
        before: Option<&[V]>,
    ) -> Result<Option<Vec<V>>, RpcError> {
        let header = self.take(label)?;
        match header.state {
            ObjectState::NoChange => return Ok(before.map(<[V]>::to_vec)),
            ObjectState::Delete => return Ok(None),
            ObjectState::Add | ObjectState::Change => {}
            ObjectState::EndOfObject => {
                return Err(RpcError::UnexpectedState {
                    label,
                    found: header.state,
                });
            }
        }

        let positions = self.take(label)?;
        let positions = match (positions.state, positions.value) {
            (ObjectState::Change, Some(RpcValue::Positions(positions))) => positions,
            (state, _) if state != ObjectState::Change => {
                return Err(RpcError::UnexpectedState { label, found: state });
            }
            _ => {
                return Err(RpcError::UnexpectedValue {
                    label,
                    expected: "list positions",
                });
            }
        };

        let before = before.unwrap_or(&[]);
        let mut after = Vec::with_capacity(positions.len());
        for position in positions {
            let previous = match position {
                -1 => None,
                p => Some(usize::try_from(p).ok().and_then(|i| before.get(i)).ok_or(
                    RpcError::InvalidPosition {
                        label,
                        position: p,
                        len: before.len(),
                    },
                )?),
            };
            if let Some(element) = self.receive(label, previous)? {
                after.push(element);
            }
        }
        Ok(Some(after))
    }

    pub fn receive_list_required<V: RpcReceive>(
        &mut self,
        label: &'static str,
        before: Option<&[V]>,
    ) -> Result<Vec<V>, RpcError> {
        Ok(self.receive_list(label, before)?.unwrap_or_default())
    }

    /// Reads a required field of a node whose baseline is `before`.
    pub fn receive_field<T, V: RpcReceive>(
        &mut self,
        label: &'static str,
        before: Option<&T>,
        field: impl Fn(&T) -> &V,
    ) -> Result<V, RpcError> {
        self.receive_required(label, before.map(field))
    }

    pub fn receive_option_field<T, V: RpcReceive>(
        &mut self,
        label: &'static str,
        before: Option<&T>,
        field: impl Fn(&T) -> Option<&V>,
    ) -> Result<Option<V>, RpcError> {
        self.receive(label, before.and_then(field))
    }

    pub fn receive_list_field<T, V: RpcReceive>(
        &mut self,
        label: &'static str,
        before: Option<&T>,
        field: impl Fn(&T) -> &Vec<V>,
    ) -> Result<Vec<V>, RpcError> {
        self.receive_list_required(label, before.map(|before| field(before).as_slice()))
    }

    pub fn receive_base(&mut self, before: Option<&TreeBase>) -> Result<TreeBase, RpcError> {
        Ok(TreeBase {
            id: self.receive_field("id", before, |base| &base.id)?,
            prefix: self.receive_field("prefix", before, |base| &base.prefix)?,
            markers: self.receive_field("markers", before, |base| &base.markers)?,
        })
    }
}
