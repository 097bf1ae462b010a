use std::collections::BTreeMap;

use uuid::Uuid;

/// Well-known marker kinds.
pub mod kinds {
    pub const SEMICOLON: &str = "Semicolon";
    pub const TRAILING_COMMA: &str = "TrailingComma";
    pub const OMIT_PARENTHESES: &str = "OmitParentheses";
    pub const OPTIONAL: &str = "Optional";
    pub const GENERATED: &str = "Generated";
    /// A block comment that reached the end of the input without its `*/`.
    pub const UNTERMINATED: &str = "Unterminated";
}

/// Side-channel metadata attached to a node or padding wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub id: Uuid,
    pub markers: Vec<Marker>,
}

/// One marker. `data` is opaque to this crate and travels as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub id: Uuid,
    pub kind: String,
    pub data: BTreeMap<String, String>,
}

impl Marker {
    pub fn new(kind: impl Into<String>) -> Marker {
        Marker {
            id: Uuid::new_v4(),
            kind: kind.into(),
            data: BTreeMap::new(),
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Marker {
        self.data.insert(key.into(), value.into());
        self
    }
}

impl Default for Markers {
    fn default() -> Self {
        Markers::EMPTY
    }
}

impl Markers {
    pub const EMPTY: Markers = Markers {
        id: Uuid::nil(),
        markers: Vec::new(),
    };

    pub fn build(markers: Vec<Marker>) -> Markers {
        Markers {
            id: Uuid::new_v4(),
            markers,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn find(&self, kind: &str) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.kind == kind)
    }

    /// Adds a marker, replacing any marker of the same kind in place.
    pub fn add(mut self, marker: Marker) -> Markers {
        if self.id.is_nil() {
            self.id = Uuid::new_v4();
        }
        match self.markers.iter_mut().find(|m| m.kind == marker.kind) {
            Some(existing) => *existing = marker,
            None => self.markers.push(marker),
        }
        self
    }

    pub fn remove_kind(mut self, kind: &str) -> Markers {
        self.markers.retain(|marker| marker.kind != kind);
        self
    }
}
