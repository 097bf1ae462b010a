use std::sync::Arc;

use crate::tree::Tree;

/// Copy-on-write builder over a borrowed value.
///
/// Reads go to the original until the first edit, which clones it. Finishing a
/// draft that was never edited hands back the original, so a visit that changes
/// nothing returns the very same `Arc`.
pub struct Draft<'a, T: Clone> {
    original: &'a T,
    copy: Option<T>,
}

impl<'a, T: Clone> Draft<'a, T> {
    pub fn new(original: &'a T) -> Self {
        Draft { original, copy: None }
    }

    pub fn current(&self) -> &T {
        self.copy.as_ref().unwrap_or(self.original)
    }

    pub fn edit(&mut self) -> &mut T {
        let original = self.original;
        self.copy.get_or_insert_with(|| original.clone())
    }

    pub fn is_changed(&self) -> bool {
        self.copy.is_some()
    }

    /// The edited value, or `None` if nothing changed.
    pub fn finish(self) -> Option<T> {
        self.copy
    }

    /// Wraps the edited value in a new tree, or returns `original` untouched.
    pub fn finish_into(self, original: &Arc<Tree>, wrap: impl FnOnce(T) -> Tree) -> Arc<Tree> {
        match self.copy {
            Some(copy) => Arc::new(wrap(copy)),
            None => Arc::clone(original),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Pair {
        left: String,
        right: String,
    }

    #[test]
    fn test_unedited_draft_finishes_empty() {
        let pair = Pair { left: "a".into(), right: "b".into() };
        let mut d = Draft::new(&pair);
        draft_set!(d.left = String::from("a"));
        assert!(!d.is_changed());
        assert_eq!(d.finish(), None);
    }

    #[test]
    fn test_edit_clones_once() {
        let pair = Pair { left: "a".into(), right: "b".into() };
        let mut d = Draft::new(&pair);
        draft_set!(d.left = String::from("x"));
        draft_set!(d.right = String::from("y"));
        assert_eq!(d.current().left, "x");
        assert_eq!(
            d.finish(),
            Some(Pair { left: "x".into(), right: "y".into() })
        );
        assert_eq!(pair.left, "a");
    }
}
