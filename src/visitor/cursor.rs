use std::sync::Arc;

use crate::tree::{Kind, Tree};

/// Which padding wrapper is being visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingKind {
    LeftPadded,
    RightPadded,
    Container,
}

#[derive(Debug, Clone)]
pub enum CursorValue {
    Tree(Arc<Tree>),
    Padding(PaddingKind),
}

/// The ancestor chain of the value being visited, root first.
#[derive(Debug, Default, Clone)]
pub struct Cursor {
    stack: Vec<CursorValue>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: CursorValue) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> Option<CursorValue> {
        self.stack.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &CursorValue> {
        self.stack.iter()
    }

    /// Trees on the cursor, innermost first.
    fn trees(&self) -> impl Iterator<Item = &Arc<Tree>> {
        self.stack.iter().rev().filter_map(|value| match value {
            CursorValue::Tree(tree) => Some(tree),
            CursorValue::Padding(_) => None,
        })
    }

    /// Number of trees on the cursor; padding entries do not count.
    pub fn depth(&self) -> usize {
        self.trees().count()
    }

    /// The tree being visited.
    pub fn current_tree(&self) -> Option<&Arc<Tree>> {
        self.trees().next()
    }

    /// The closest tree enclosing the one being visited.
    pub fn parent_tree(&self) -> Option<&Arc<Tree>> {
        self.trees().nth(1)
    }

    /// The innermost tree of `kind`, the current tree included.
    pub fn first_enclosing(&self, kind: Kind) -> Option<&Arc<Tree>> {
        self.trees().find(|tree| tree.kind() == kind)
    }

    /// Whether the innermost value is a padding wrapper of `kind`.
    pub fn in_padding(&self, kind: PaddingKind) -> bool {
        matches!(self.stack.last(), Some(CursorValue::Padding(padding)) if *padding == kind)
    }

    /// Kinds of the trees on the cursor, root first.
    pub fn path_kinds(&self) -> Vec<Kind> {
        let mut kinds: Vec<Kind> = self.trees().map(|tree| tree.kind()).collect();
        kinds.reverse();
        kinds
    }
}
