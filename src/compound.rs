use indexmap::IndexMap;

use crate::{ByteArray, IntArray, List, Tag, Value};

/// An ordered name→[`Value`] container with unique names.
///
/// Entries keep their insertion order; inserting under an existing name
/// replaces the value in place (last write wins, position unchanged).
///
/// Typed getters are strict about kind: a missing name and a name holding a
/// different kind both come back as `None`, so callers supply their own
/// default without the compound being touched:
///
/// ```
/// use pocketnbt::Compound;
///
/// let mut tag = Compound::new();
/// tag.insert("Damage", 3i16);
///
/// assert_eq!(tag.get_short("Damage").unwrap_or(0), 3);
/// assert_eq!(tag.get_int("Damage").unwrap_or(0), 0); // wrong kind
/// ```
///
/// [`Compound::list_tag`] and [`Compound::compound_tag`] hand out *owned
/// copies* of nested containers. Edits to a copy only take effect once it is
/// inserted back under its name; that write-back is the caller's job.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    entries: IndexMap<String, Value>,
}

impl Compound {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.entries.get_mut(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// True if `name` exists and holds a value of exactly the given kind.
    pub fn has_tag(&self, name: &str, tag: Tag) -> bool {
        self.get(name).map_or(false, |v| v.tag() == tag)
    }

    /// Insert or overwrite the named entry. An existing entry keeps its
    /// position. Returns the replaced value, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(name.into(), value.into())
    }

    /// Remove the named entry, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.shift_remove(name)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    pub fn get_byte(&self, name: &str) -> Option<i8> {
        match self.get(name) {
            Some(Value::Byte(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_short(&self, name: &str) -> Option<i16> {
        match self.get(name) {
            Some(Value::Short(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i32> {
        match self.get(name) {
            Some(Value::Int(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_long(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(Value::Long(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_float(&self, name: &str) -> Option<f32> {
        match self.get(name) {
            Some(Value::Float(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_double(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(Value::Double(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_string(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::String(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_byte_array(&self, name: &str) -> Option<&ByteArray> {
        match self.get(name) {
            Some(Value::ByteArray(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_int_array(&self, name: &str) -> Option<&IntArray> {
        match self.get(name) {
            Some(Value::IntArray(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_list(&self, name: &str) -> Option<&List> {
        match self.get(name) {
            Some(Value::List(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_compound(&self, name: &str) -> Option<&Compound> {
        match self.get(name) {
            Some(Value::Compound(v)) => Some(v),
            _ => None,
        }
    }

    /// Owned copy of the named list. Mutations to the copy must be written
    /// back with [`Compound::insert`] to take effect.
    pub fn list_tag(&self, name: &str) -> Option<List> {
        self.get_list(name).cloned()
    }

    /// Owned copy of the named compound. Mutations to the copy must be
    /// written back with [`Compound::insert`] to take effect.
    pub fn compound_tag(&self, name: &str) -> Option<Compound> {
        self.get_compound(name).cloned()
    }
}

impl FromIterator<(String, Value)> for Compound {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Value)> for Compound {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.entries.extend(iter)
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
