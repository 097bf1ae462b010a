use serde::{Deserialize, Serialize};

/// What a message says about one value relative to the receiver's baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectState {
    /// Same as the baseline.
    NoChange,
    /// A new value, sent without a baseline.
    Add,
    /// The value is gone.
    Delete,
    /// Same kind of value as the baseline, fields follow as a diff.
    Change,
    /// Closes a top-level object.
    EndOfObject,
}

/// Inline payload of a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RpcValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// For each element of a new list, its index in the previous list, or `-1`.
    Positions(Vec<i32>),
}

/// One message on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcObjectData {
    pub state: ObjectState,
    /// Kind of value for `ADD` messages: a node kind, a type variant, a comment kind.
    pub value_type: Option<String>,
    pub value: Option<RpcValue>,
    /// Session-scoped reference id of a shared value.
    pub ref_id: Option<u32>,
    /// Field label, present when the sender traces.
    pub trace: Option<String>,
}

impl RpcObjectData {
    fn new(state: ObjectState) -> Self {
        RpcObjectData {
            state,
            value_type: None,
            value: None,
            ref_id: None,
            trace: None,
        }
    }

    pub fn no_change() -> Self {
        Self::new(ObjectState::NoChange)
    }

    pub fn delete() -> Self {
        Self::new(ObjectState::Delete)
    }

    pub fn end_of_object() -> Self {
        Self::new(ObjectState::EndOfObject)
    }

    pub fn add(value_type: Option<&str>, value: Option<RpcValue>) -> Self {
        RpcObjectData {
            value_type: value_type.map(str::to_owned),
            value,
            ..Self::new(ObjectState::Add)
        }
    }

    pub fn change(value: Option<RpcValue>) -> Self {
        RpcObjectData {
            value,
            ..Self::new(ObjectState::Change)
        }
    }

    /// An `ADD` naming a shared value the receiver already holds.
    pub fn reference(ref_id: u32) -> Self {
        RpcObjectData {
            ref_id: Some(ref_id),
            ..Self::new(ObjectState::Add)
        }
    }

    pub fn with_ref(mut self, ref_id: u32) -> Self {
        self.ref_id = Some(ref_id);
        self
    }

    pub fn with_trace(mut self, label: &str) -> Self {
        self.trace = Some(label.to_owned());
        self
    }
}
