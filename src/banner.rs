//! A banner item: an ordered stack of colored design elements layered on a
//! base color, persisted inside the item's NBT compound.
//!
//! This is the one domain consumer shipped with the tree, and it exercises
//! [`List`] as a sparse id→compound store. Pattern ids are handed out as
//! `max(live ids) + 1`, so an id freed by a deletion is never reused and the
//! edit history stays encoded in the ids themselves.
//!
//! All access goes through the item's named tag. [`Banner::named_tag`] hands
//! out an owned snapshot, and every mutation here finishes by writing the
//! snapshot back with [`Banner::set_named_tag`] — whether the underlying
//! container hands out copies or references, the write-back makes the edit
//! stick.
//!
//! ```
//! use pocketnbt::banner::Banner;
//!
//! let mut banner = Banner::new();
//! banner.set_base_color(0x15);
//! assert_eq!(banner.base_color(), 0x05); // low four bits
//!
//! let id = banner.add_pattern("flower", 2);
//! assert_eq!(id, 0);
//! assert_eq!(banner.add_pattern("creeper", 7), 1);
//!
//! banner.delete_pattern(0);
//! assert_eq!(banner.add_pattern("skull", 1), 2); // 0 is never reused
//! assert_eq!(banner.pattern_ids(), vec![1, 2]);
//! ```

use serde::{Deserialize, Serialize};

use crate::{Compound, List, Tag};

pub const TAG_BASE: &str = "Base";
pub const TAG_PATTERNS: &str = "Patterns";
pub const TAG_PATTERN_COLOR: &str = "Color";
pub const TAG_PATTERN_NAME: &str = "Pattern";

// Colors are dye values, 16 of them.
const COLOR_MASK: i32 = 0x0f;

/// The data of a single pattern layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerPattern {
    pub color: i32,
    pub name: String,
}

/// A banner item, wrapping the compound it persists its state in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Banner {
    tag: Compound,
}

impl Banner {
    pub fn new() -> Self {
        Self {
            tag: Compound::new(),
        }
    }

    /// Wrap an existing compound, typically one that was just decoded. The
    /// schema is not validated here; it is repaired lazily on first touch.
    pub fn from_named_tag(tag: Compound) -> Self {
        Self { tag }
    }

    /// Owned snapshot of the persistent compound. Structural edits to the
    /// snapshot only take effect through [`Banner::set_named_tag`].
    pub fn named_tag(&self) -> Compound {
        self.tag.clone()
    }

    /// Replace the persistent compound wholesale.
    pub fn set_named_tag(&mut self, tag: Compound) {
        self.tag = tag;
    }

    /// Returns the color of the banner base.
    pub fn base_color(&self) -> i32 {
        self.tag.get_int(TAG_BASE).unwrap_or(0)
    }

    /// Sets the color of the banner base. Only the low four bits are kept.
    pub fn set_base_color(&mut self, color: i32) {
        let mut tag = self.named_tag();
        tag.insert(TAG_BASE, color & COLOR_MASK);
        self.set_named_tag(tag);
    }

    /// Applies a new pattern on the banner with the given color, on top of
    /// the existing ones. Returns the id of the new pattern, one past the
    /// highest id ever live on this banner.
    pub fn add_pattern(&mut self, pattern: &str, color: i32) -> i32 {
        let id = self.pattern_ids().into_iter().max().map_or(0, |max| max + 1);

        let mut tag = self.named_tag();
        let mut patterns = tag.list_tag(TAG_PATTERNS).unwrap_or_default();
        patterns.insert(id, Self::pattern_compound(pattern, color));
        tag.insert(TAG_PATTERNS, patterns);
        self.set_named_tag(tag);

        id
    }

    /// Returns whether a pattern with the given id exists on the banner.
    pub fn pattern_exists(&mut self, id: i32) -> bool {
        self.correct_nbt();
        self.tag
            .get_list(TAG_PATTERNS)
            .map_or(false, |patterns| patterns.contains_key(id))
    }

    /// Returns the data of the pattern with the given id.
    pub fn pattern(&mut self, id: i32) -> Option<BannerPattern> {
        if !self.pattern_exists(id) {
            return None;
        }

        let pattern = self.tag.get_list(TAG_PATTERNS)?.get(id)?.as_compound()?;
        Some(BannerPattern {
            color: pattern.get_int(TAG_PATTERN_COLOR).unwrap_or(0),
            name: pattern.get_string(TAG_PATTERN_NAME).unwrap_or("").to_owned(),
        })
    }

    /// Changes a previously existing pattern. Returns false when no pattern
    /// with the given id exists.
    pub fn change_pattern(&mut self, id: i32, pattern: &str, color: i32) -> bool {
        if !self.pattern_exists(id) {
            return false;
        }

        let mut tag = self.named_tag();
        let mut patterns = tag.list_tag(TAG_PATTERNS).unwrap_or_default();
        patterns.insert(id, Self::pattern_compound(pattern, color));
        tag.insert(TAG_PATTERNS, patterns);
        self.set_named_tag(tag);

        true
    }

    /// Deletes the pattern with the given id, leaving a hole in the id
    /// space. Returns whether the pattern existed.
    pub fn delete_pattern(&mut self, id: i32) -> bool {
        if !self.pattern_exists(id) {
            return false;
        }

        let mut tag = self.named_tag();
        if let Some(mut patterns) = tag.list_tag(TAG_PATTERNS) {
            patterns.remove(id);
            tag.insert(TAG_PATTERNS, patterns);
            self.set_named_tag(tag);
        }

        true
    }

    /// Deletes the top-most pattern, the one with the highest id. Returns
    /// false when the banner has no patterns.
    pub fn delete_top_pattern(&mut self) -> bool {
        match self.pattern_ids().into_iter().max() {
            Some(id) => self.delete_pattern(id),
            None => false,
        }
    }

    /// Deletes the bottom pattern, the one with the lowest id. Returns false
    /// when the banner has no patterns.
    pub fn delete_bottom_pattern(&mut self) -> bool {
        match self.pattern_ids().into_iter().min() {
            Some(id) => self.delete_pattern(id),
            None => false,
        }
    }

    /// Every live pattern id, in ascending order.
    pub fn pattern_ids(&mut self) -> Vec<i32> {
        self.correct_nbt();
        self.tag
            .get_list(TAG_PATTERNS)
            .map(|patterns| patterns.keys().collect())
            .unwrap_or_default()
    }

    /// The total count of patterns on this banner.
    pub fn pattern_count(&mut self) -> usize {
        self.pattern_ids().len()
    }

    /// Repairs the compound in place: a missing or wrong-kind base color or
    /// patterns list gets its default injected. Decoded legacy trees are
    /// expected to lack these tags, so this runs before every read that
    /// assumes them. Applying it twice changes nothing.
    pub fn correct_nbt(&mut self) {
        let mut tag = self.named_tag();
        if !tag.has_tag(TAG_BASE, Tag::Int) {
            tag.insert(TAG_BASE, 0i32);
        }
        if !tag.has_tag(TAG_PATTERNS, Tag::List) {
            tag.insert(TAG_PATTERNS, List::new());
        }
        self.set_named_tag(tag);
    }

    fn pattern_compound(name: &str, color: i32) -> Compound {
        let mut pattern = Compound::new();
        pattern.insert(TAG_PATTERN_COLOR, color & COLOR_MASK);
        pattern.insert(TAG_PATTERN_NAME, name);
        pattern
    }
}
