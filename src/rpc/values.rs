//! Codecs for everything that is not a node or a type: scalars, whitespace,
//! markers and the padding wrappers.

use std::collections::BTreeMap;
use std::sync::Arc;

use uuid::Uuid;

use super::message::{RpcObjectData, RpcValue};
use super::receive::{ReceiveQueue, RpcReceive};
use super::send::{ElementKey, ListElement, RpcSend, SendQueue};
use crate::error::RpcError;
use crate::tree::java::{
    AssignmentOperator, BinaryOperator, CaseType, LiteralValue, ModifierType, UnaryOperator, WildcardBound,
};
use crate::tree::javascript::{AssignmentToken, JsAssignmentOperator, JsBinaryOperator};
use crate::tree::{Comment, Container, Kind, LeftPadded, Marker, Markers, RightPadded, Space, TextComment, Tree};
use crate::types::{ClassKind, PrimitiveKind, Variance};

const TEXT_COMMENT: &str = "TextComment";

/// The inline string of a scalar message.
pub(crate) fn inline_str<'m>(label: &'static str, msg: &'m RpcObjectData) -> Result<&'m str, RpcError> {
    match &msg.value {
        Some(RpcValue::String(value)) => Ok(value),
        _ => Err(RpcError::UnexpectedValue {
            label,
            expected: "string",
        }),
    }
}

impl RpcSend for bool {
    fn inline_value(&self) -> Option<RpcValue> {
        Some(RpcValue::Bool(*self))
    }
}

impl RpcReceive for bool {
    fn receive_content(
        label: &'static str,
        msg: &RpcObjectData,
        _before: Option<&Self>,
        _q: &mut ReceiveQueue<'_>,
    ) -> Result<Self, RpcError> {
        match msg.value {
            Some(RpcValue::Bool(value)) => Ok(value),
            _ => Err(RpcError::UnexpectedValue {
                label,
                expected: "boolean",
            }),
        }
    }

    fn absent() -> Option<Self> {
        Some(false)
    }
}

impl RpcSend for String {
    fn inline_value(&self) -> Option<RpcValue> {
        Some(RpcValue::String(self.clone()))
    }
}

impl RpcReceive for String {
    fn receive_content(
        label: &'static str,
        msg: &RpcObjectData,
        _before: Option<&Self>,
        _q: &mut ReceiveQueue<'_>,
    ) -> Result<Self, RpcError> {
        inline_str(label, msg).map(str::to_owned)
    }

    fn absent() -> Option<Self> {
        Some(String::new())
    }
}

impl ListElement for String {
    fn list_key(&self, index: usize) -> ElementKey {
        ElementKey::Index(index)
    }
}

impl RpcSend for Uuid {
    fn inline_value(&self) -> Option<RpcValue> {
        Some(RpcValue::String(self.to_string()))
    }
}

impl RpcReceive for Uuid {
    fn receive_content(
        label: &'static str,
        msg: &RpcObjectData,
        _before: Option<&Self>,
        _q: &mut ReceiveQueue<'_>,
    ) -> Result<Self, RpcError> {
        let text = inline_str(label, msg)?;
        Uuid::parse_str(text).map_err(|_| RpcError::InvalidId(text.to_owned()))
    }
}

impl RpcSend for LiteralValue {
    fn inline_value(&self) -> Option<RpcValue> {
        Some(match self {
            LiteralValue::Bool(value) => RpcValue::Bool(*value),
            LiteralValue::Int(value) => RpcValue::Int(*value),
            LiteralValue::Float(value) => RpcValue::Float(*value),
            LiteralValue::String(value) => RpcValue::String(value.clone()),
        })
    }
}

impl RpcReceive for LiteralValue {
    fn receive_content(
        label: &'static str,
        msg: &RpcObjectData,
        _before: Option<&Self>,
        _q: &mut ReceiveQueue<'_>,
    ) -> Result<Self, RpcError> {
        match &msg.value {
            Some(RpcValue::Bool(value)) => Ok(LiteralValue::Bool(*value)),
            Some(RpcValue::Int(value)) => Ok(LiteralValue::Int(*value)),
            Some(RpcValue::Float(value)) => Ok(LiteralValue::Float(*value)),
            Some(RpcValue::String(value)) => Ok(LiteralValue::String(value.clone())),
            _ => Err(RpcError::UnexpectedValue {
                label,
                expected: "literal",
            }),
        }
    }
}

/// Keywords travel as their wire name.
macro_rules! keyword_codec {
    ($($ty:ident),* $(,)?) => {
        $(
            impl RpcSend for $ty {
                fn inline_value(&self) -> Option<RpcValue> {
                    Some(RpcValue::String(self.as_str().to_owned()))
                }
            }

            impl RpcReceive for $ty {
                fn receive_content(
                    label: &'static str,
                    msg: &RpcObjectData,
                    _before: Option<&Self>,
                    _q: &mut ReceiveQueue<'_>,
                ) -> Result<Self, RpcError> {
                    $ty::from_name(inline_str(label, msg)?).ok_or(RpcError::UnexpectedValue {
                        label,
                        expected: stringify!($ty),
                    })
                }
            }
        )*
    };
}

keyword_codec!(
    BinaryOperator,
    AssignmentOperator,
    UnaryOperator,
    CaseType,
    ModifierType,
    WildcardBound,
    JsBinaryOperator,
    JsAssignmentOperator,
    AssignmentToken,
    ClassKind,
    PrimitiveKind,
    Variance,
);

impl RpcSend for Space {
    fn send_content(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.get_and_send_list("comments", self, before, |space| &space.comments)?;
        q.get_and_send("whitespace", self, before, |space| &space.whitespace)
    }
}

impl RpcReceive for Space {
    fn receive_content(
        _label: &'static str,
        _msg: &RpcObjectData,
        before: Option<&Self>,
        q: &mut ReceiveQueue<'_>,
    ) -> Result<Self, RpcError> {
        Ok(Space {
            comments: q.receive_list_field("comments", before, |space| &space.comments)?,
            whitespace: q.receive_field("whitespace", before, |space| &space.whitespace)?,
        })
    }

    fn absent() -> Option<Self> {
        Some(Space::EMPTY)
    }
}

impl ListElement for Space {
    fn list_key(&self, index: usize) -> ElementKey {
        ElementKey::Index(index)
    }
}

impl RpcSend for Comment {
    fn value_type(&self) -> Option<&'static str> {
        match self {
            Comment::Text(_) => Some(TEXT_COMMENT),
        }
    }

    fn send_content(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        let Comment::Text(after) = self;
        let before = before.map(|Comment::Text(before)| before);
        q.get_and_send("multiline", after, before, |c| &c.multiline)?;
        q.get_and_send("text", after, before, |c| &c.text)?;
        q.get_and_send("suffix", after, before, |c| &c.suffix)?;
        q.get_and_send("markers", after, before, |c| &c.markers)
    }
}

impl RpcReceive for Comment {
    fn receive_content(
        _label: &'static str,
        msg: &RpcObjectData,
        before: Option<&Self>,
        q: &mut ReceiveQueue<'_>,
    ) -> Result<Self, RpcError> {
        if let Some(kind) = msg.value_type.as_deref() {
            if kind != TEXT_COMMENT {
                return Err(RpcError::UnknownCommentKind(kind.to_owned()));
            }
        }
        let before = before.map(|Comment::Text(before)| before);
        Ok(Comment::Text(TextComment {
            multiline: q.receive_field("multiline", before, |c| &c.multiline)?,
            text: q.receive_field("text", before, |c| &c.text)?,
            suffix: q.receive_field("suffix", before, |c| &c.suffix)?,
            markers: q.receive_field("markers", before, |c| &c.markers)?,
        }))
    }
}

impl ListElement for Comment {
    fn list_key(&self, index: usize) -> ElementKey {
        ElementKey::Index(index)
    }
}

impl RpcSend for Markers {
    fn send_content(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.get_and_send("id", self, before, |markers| &markers.id)?;
        q.get_and_send_list("markers", self, before, |markers| &markers.markers)
    }
}

impl RpcReceive for Markers {
    fn receive_content(
        _label: &'static str,
        _msg: &RpcObjectData,
        before: Option<&Self>,
        q: &mut ReceiveQueue<'_>,
    ) -> Result<Self, RpcError> {
        Ok(Markers {
            id: q.receive_field("id", before, |markers| &markers.id)?,
            markers: q.receive_list_field("markers", before, |markers| &markers.markers)?,
        })
    }

    fn absent() -> Option<Self> {
        Some(Markers::EMPTY)
    }
}

impl RpcSend for Marker {
    fn value_type(&self) -> Option<&'static str> {
        Some("Marker")
    }

    fn send_content(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.get_and_send("id", self, before, |marker| &marker.id)?;
        q.get_and_send("kind", self, before, |marker| &marker.kind)?;
        let data = serde_json::to_string(&self.data)?;
        let before_data = before.map(|marker| serde_json::to_string(&marker.data)).transpose()?;
        q.send("data", Some(&data), before_data.as_ref())
    }
}

impl RpcReceive for Marker {
    fn receive_content(
        _label: &'static str,
        _msg: &RpcObjectData,
        before: Option<&Self>,
        q: &mut ReceiveQueue<'_>,
    ) -> Result<Self, RpcError> {
        let id = q.receive_field("id", before, |marker| &marker.id)?;
        let kind = q.receive_field("kind", before, |marker| &marker.kind)?;
        let before_data = before.map(|marker| serde_json::to_string(&marker.data)).transpose()?;
        let data: String = q.receive_required("data", before_data.as_ref())?;
        let data: BTreeMap<String, String> = if data.is_empty() {
            BTreeMap::new()
        } else {
            serde_json::from_str(&data)?
        };
        Ok(Marker { id, kind, data })
    }
}

impl ListElement for Marker {
    fn list_key(&self, _index: usize) -> ElementKey {
        ElementKey::Id(self.id)
    }
}

impl<T: RpcSend> RpcSend for LeftPadded<T> {
    fn send_content(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.get_and_send("before", self, before, |padded| &padded.before)?;
        q.get_and_send("element", self, before, |padded| &padded.element)?;
        q.get_and_send("markers", self, before, |padded| &padded.markers)
    }
}

impl<T: RpcReceive> RpcReceive for LeftPadded<T> {
    fn receive_content(
        _label: &'static str,
        _msg: &RpcObjectData,
        before: Option<&Self>,
        q: &mut ReceiveQueue<'_>,
    ) -> Result<Self, RpcError> {
        Ok(LeftPadded {
            before: q.receive_field("before", before, |padded| &padded.before)?,
            element: q.receive_field("element", before, |padded| &padded.element)?,
            markers: q.receive_field("markers", before, |padded| &padded.markers)?,
        })
    }
}

impl<T: ListElement> ListElement for LeftPadded<T> {
    fn list_key(&self, index: usize) -> ElementKey {
        self.element.list_key(index)
    }
}

impl<T: RpcSend> RpcSend for RightPadded<T> {
    fn send_content(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.get_and_send("element", self, before, |padded| &padded.element)?;
        q.get_and_send("after", self, before, |padded| &padded.after)?;
        q.get_and_send("markers", self, before, |padded| &padded.markers)
    }
}

impl<T: RpcReceive> RpcReceive for RightPadded<T> {
    fn receive_content(
        _label: &'static str,
        _msg: &RpcObjectData,
        before: Option<&Self>,
        q: &mut ReceiveQueue<'_>,
    ) -> Result<Self, RpcError> {
        Ok(RightPadded {
            element: q.receive_field("element", before, |padded| &padded.element)?,
            after: q.receive_field("after", before, |padded| &padded.after)?,
            markers: q.receive_field("markers", before, |padded| &padded.markers)?,
        })
    }
}

impl<T: ListElement> ListElement for RightPadded<T> {
    fn list_key(&self, index: usize) -> ElementKey {
        self.element.list_key(index)
    }
}

impl<T: RpcSend + ListElement> RpcSend for Container<T> {
    fn send_content(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.get_and_send("before", self, before, |container| &container.before)?;
        q.get_and_send_list("elements", self, before, |container| &container.elements)?;
        q.get_and_send("markers", self, before, |container| &container.markers)
    }
}

impl<T: RpcReceive> RpcReceive for Container<T> {
    fn receive_content(
        _label: &'static str,
        _msg: &RpcObjectData,
        before: Option<&Self>,
        q: &mut ReceiveQueue<'_>,
    ) -> Result<Self, RpcError> {
        Ok(Container {
            before: q.receive_field("before", before, |container| &container.before)?,
            elements: q.receive_list_field("elements", before, |container| &container.elements)?,
            markers: q.receive_field("markers", before, |container| &container.markers)?,
        })
    }
}

impl RpcSend for Arc<Tree> {
    fn value_type(&self) -> Option<&'static str> {
        Some(self.kind().as_str())
    }

    fn send_content(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        let registry = q.registry();
        registry.send(self, before.map(|before| &**before), q)
    }
}

impl RpcReceive for Arc<Tree> {
    fn receive_content(
        label: &'static str,
        msg: &RpcObjectData,
        before: Option<&Self>,
        q: &mut ReceiveQueue<'_>,
    ) -> Result<Self, RpcError> {
        let kind = match (msg.value_type.as_deref(), before) {
            (Some(name), _) => Kind::from_name(name).ok_or_else(|| RpcError::UnknownKind(name.to_owned()))?,
            (None, Some(before)) => before.kind(),
            (None, None) => return Err(RpcError::MissingValue(label)),
        };
        let registry = q.registry();
        registry.receive(kind, before.map(|before| &**before), q).map(Arc::new)
    }
}

impl ListElement for Arc<Tree> {
    fn list_key(&self, _index: usize) -> ElementKey {
        ElementKey::Id(self.id())
    }
}
