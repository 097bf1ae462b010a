//! Tree transfer between processes.
//!
//! A tree goes out as a stream of [`RpcObjectData`] messages produced by walking
//! its fields in declaration order, each field diffed against the version the
//! peer already holds. The receiver walks the same fields in the same order and
//! rebuilds the tree, reusing every subtree that did not change.

pub mod channel;
pub mod java;
pub mod javascript;
pub mod message;
pub mod receive;
pub mod registry;
pub mod send;
pub mod session;
pub mod types;
pub mod values;

pub use channel::{BatchSink, BatchSource, DEFAULT_MAX_FRAME, FramedReader, FramedWriter, MemoryChannel, MpscSink, MpscSource, unbounded};
pub use message::{ObjectState, RpcObjectData, RpcValue};
pub use receive::{ReceiveQueue, ReceiveRefs, RpcReceive};
pub use registry::{Codec, CodecRegistry, TreeCodec};
pub use send::{ElementKey, ListElement, RpcSend, SendQueue, SendRefs, SendStats};
pub use session::{ReceiveSession, SendSession};
