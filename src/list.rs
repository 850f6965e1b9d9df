use std::collections::BTreeMap;

use crate::{Tag, Value};

/// An ordered, integer-keyed container of [`Value`].
///
/// On the wire a list is a contiguous sequence, and a freshly decoded or
/// [`List::push`]-built list has keys `0..n-1`. In memory the keys are
/// explicit and the container is hole-tolerant: [`List::remove`] leaves a
/// gap, and `push` always appends at `max(key) + 1`, so a key that was ever
/// removed is never handed out again. Callers that treat a list as a sparse
/// key→value store (see [`banner`][crate::banner]) rely on exactly that.
///
/// Children are nominally all of the element kind. The container fixes the
/// element kind on first insertion but does not reject mismatched children;
/// consistency is the caller's contract, and the encoder panics on a tree
/// that breaks it rather than emit corrupt bytes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    element: Option<Tag>,
    entries: BTreeMap<i32, Value>,
}

impl List {
    pub fn new() -> Self {
        Self {
            element: None,
            entries: BTreeMap::new(),
        }
    }

    /// A list that declares the given element kind on the wire even while
    /// empty. [`Tag::End`] behaves like [`List::new`].
    pub fn with_element_tag(tag: Tag) -> Self {
        Self {
            element: (tag != Tag::End).then_some(tag),
            entries: BTreeMap::new(),
        }
    }

    /// The kind of this list's children. [`Tag::End`] for a list that has
    /// never held a child.
    pub fn element_tag(&self) -> Tag {
        self.element.unwrap_or(Tag::End)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append at the next key: `max(existing keys) + 1`, or 0 when empty.
    pub fn push(&mut self, value: impl Into<Value>) {
        let key = self.last_key().map_or(0, |k| k + 1);
        self.insert(key, value);
    }

    /// Insert or overwrite the child at `key`. Returns the replaced child,
    /// if any.
    pub fn insert(&mut self, key: i32, value: impl Into<Value>) -> Option<Value> {
        let value = value.into();
        if self.element.is_none() {
            self.element = Some(value.tag());
        }
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: i32) -> Option<&Value> {
        self.entries.get(&key)
    }

    pub fn get_mut(&mut self, key: i32) -> Option<&mut Value> {
        self.entries.get_mut(&key)
    }

    pub fn contains_key(&self, key: i32) -> bool {
        self.entries.contains_key(&key)
    }

    /// Remove the child at `key`, leaving a hole. Later keys do not shift.
    pub fn remove(&mut self, key: i32) -> Option<Value> {
        self.entries.remove(&key)
    }

    /// Every live key, in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.keys().copied()
    }

    pub fn first_key(&self) -> Option<i32> {
        self.entries.keys().next().copied()
    }

    pub fn last_key(&self) -> Option<i32> {
        self.entries.keys().next_back().copied()
    }

    /// Children in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }
}

impl FromIterator<Value> for List {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let mut list = List::new();
        for value in iter {
            list.push(value);
        }
        list
    }
}

impl From<Vec<Value>> for List {
    fn from(values: Vec<Value>) -> Self {
        values.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::collections::btree_map::Values<'a, i32, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
