//! Wrappers that attach formatting to an element without changing the
//! element's own type. The field order of each wrapper is its wire order.

use super::{Identical, Markers, Space};

/// Whitespace, then the element: the `= value` of an initializer, the
/// `extends Type` of a class.
#[derive(Debug, Clone, PartialEq)]
pub struct LeftPadded<T> {
    pub before: Space,
    pub element: T,
    pub markers: Markers,
}

/// The element, then whitespace: a statement before its `;`, an argument
/// before its `,`.
#[derive(Debug, Clone, PartialEq)]
pub struct RightPadded<T> {
    pub element: T,
    pub after: Space,
    pub markers: Markers,
}

/// A delimited list such as `(a, b)` or `<T>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Container<T> {
    pub before: Space,
    pub elements: Vec<RightPadded<T>>,
    pub markers: Markers,
}

impl<T> LeftPadded<T> {
    pub fn new(before: Space, element: T) -> Self {
        LeftPadded {
            before,
            element,
            markers: Markers::EMPTY,
        }
    }

    pub fn build(element: T) -> Self {
        LeftPadded::new(Space::EMPTY, element)
    }

    pub fn with_element(&self, element: T) -> Self {
        LeftPadded {
            before: self.before.clone(),
            element,
            markers: self.markers.clone(),
        }
    }
}

impl<T> RightPadded<T> {
    pub fn new(element: T, after: Space) -> Self {
        RightPadded {
            element,
            after,
            markers: Markers::EMPTY,
        }
    }

    pub fn build(element: T) -> Self {
        RightPadded::new(element, Space::EMPTY)
    }

    pub fn with_element(&self, element: T) -> Self {
        RightPadded {
            element,
            after: self.after.clone(),
            markers: self.markers.clone(),
        }
    }
}

impl<T> Container<T> {
    pub fn new(before: Space, elements: Vec<RightPadded<T>>) -> Self {
        Container {
            before,
            elements,
            markers: Markers::EMPTY,
        }
    }

    /// Wraps bare elements, separated by nothing.
    pub fn build(elements: Vec<T>) -> Self {
        Container::new(Space::EMPTY, elements.into_iter().map(RightPadded::build).collect())
    }

    pub fn empty() -> Self {
        Container::new(Space::EMPTY, Vec::new())
    }

    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.elements.iter().map(|padded| &padded.element)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T: Identical> Identical for LeftPadded<T> {
    fn identical(&self, other: &Self) -> bool {
        self.element.identical(&other.element)
            && self.before == other.before
            && self.markers == other.markers
    }
}

impl<T: Identical> Identical for RightPadded<T> {
    fn identical(&self, other: &Self) -> bool {
        self.element.identical(&other.element)
            && self.after == other.after
            && self.markers == other.markers
    }
}

impl<T: Identical> Identical for Container<T> {
    fn identical(&self, other: &Self) -> bool {
        self.elements.identical(&other.elements)
            && self.before == other.before
            && self.markers == other.markers
    }
}
