//! Errors raised by the RPC codec.
//!
//! Tree visitation has no error type of its own: node kinds a visitor does not
//! know are passed through unchanged. Everything here is either a protocol
//! violation (the two ends disagree about the wire format) or a transport failure.

use thiserror::Error;

use crate::rpc::message::ObjectState;

#[derive(Debug, Error)]
pub enum RpcError {
    /// A node header named a kind that no codec is registered for.
    #[error("unknown tree kind `{0}`")]
    UnknownKind(String),

    /// A comment header named something other than the closed set of comment kinds.
    #[error("unknown comment kind `{0}`")]
    UnknownCommentKind(String),

    /// A type header named something that is not a `JavaType` variant.
    #[error("unknown type kind `{0}`")]
    UnknownTypeKind(String),

    /// The registry holds no codec for a kind found in an outgoing tree.
    #[error("no codec registered for `{0}`")]
    NoCodec(&'static str),

    /// Two language families tried to register the same kind.
    #[error("codec for `{kind}` already registered by `{existing}`, refusing registration from `{requested}`")]
    CodecConflict {
        kind: &'static str,
        existing: &'static str,
        requested: &'static str,
    },

    /// A codec was handed a node of a different kind than the one it encodes.
    #[error("expected a `{expected}` node, found `{found}`")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("missing required value for `{0}`")]
    MissingValue(&'static str),

    #[error("unexpected {found:?} message while reading `{label}`")]
    UnexpectedState {
        label: &'static str,
        found: ObjectState,
    },

    #[error("expected {expected} value for `{label}`")]
    UnexpectedValue {
        label: &'static str,
        expected: &'static str,
    },

    #[error("list position {position} for `{label}` is out of range of the previous list ({len} elements)")]
    InvalidPosition {
        label: &'static str,
        position: i32,
        len: usize,
    },

    #[error("reference {0} was never sent in this session")]
    UnresolvedReference(u32),

    #[error("invalid node id `{0}`")]
    InvalidId(String),

    /// Sender and receiver touched fields in a different order.
    #[error("sender and receiver out of lockstep: receiver expected `{expected}`, sender sent `{found}`")]
    Lockstep { expected: &'static str, found: String },

    #[error("expected end of object, found {0:?}")]
    MissingEndOfObject(ObjectState),

    #[error("channel closed")]
    ChannelClosed,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("frame encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
