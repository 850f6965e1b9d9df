//! pocketnbt is a mutable tag tree for NBT data as used by the Bedrock family
//! of Minecraft servers. NBT ("Named Binary Tag") is a self-describing binary
//! format used to store things like item state and block entities.
//!
//! The same tree can be written in two wire variants: the big-endian form
//! used on disk, and the compact little-endian/varint form used when data
//! crosses the network. Both round-trip exactly.
//!
//! * For the tree itself see [`Value`], [`Compound`] and [`List`].
//! * For decoding and encoding see [`de`] and [`ser`].
//! * For the banner pattern store built on top of the tree see [`banner`].
//!
//! ```toml
//! [dependencies]
//! pocketnbt = "0.3"
//! ```
//!
//! # Quick example
//!
//! Build a tree with the [`nbt!`] macro, mutate it through typed accessors,
//! and round-trip it through both encodings:
//!
//! ```
//! use pocketnbt::{nbt, Value};
//!
//! let root = nbt!({
//!     "Base": 5,
//!     "Patterns": [],
//! });
//!
//! let Value::Compound(mut root) = root else { unreachable!() };
//! assert_eq!(root.get_int("Base"), Some(5));
//!
//! root.insert("Owner", "herobrine");
//!
//! let disk = pocketnbt::ser::to_bytes(&root).unwrap();
//! let wire = pocketnbt::ser::to_network_bytes(&root).unwrap();
//!
//! assert_eq!(pocketnbt::de::from_bytes(&disk).unwrap(), root);
//! assert_eq!(pocketnbt::de::from_network_bytes(&wire).unwrap(), root);
//! ```

pub mod banner;
pub mod de;
pub mod error;
pub mod ser;

mod arrays;
mod compound;
mod list;
mod macros;
mod value;
mod varint;

pub use arrays::*;
pub use compound::Compound;
pub use list::List;
pub use value::Value;

#[cfg(test)]
mod test;

use std::convert::TryFrom;

/// An NBT tag kind. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents an array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents an integer-keyed sequence of other values, nominally all of
    /// the same kind.
    List = 9,
    /// Represents a struct-like structure of named values.
    Compound = 10,
    /// Represents an array of Int (i32).
    IntArray = 11,
}

// Crates exist to generate these conversions for us, but the kind set very
// rarely changes and writing it out saves a chunk of compile time.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

impl Tag {
    /// True for the fixed-width numeric kinds, Byte through Double.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Tag::Byte | Tag::Short | Tag::Int | Tag::Long | Tag::Float | Tag::Double
        )
    }
}

// Thanks to https://stackoverflow.com/a/59707887
pub(crate) fn vec_u8_into_i8(v: Vec<u8>) -> Vec<i8> {
    // ideally we'd use Vec::into_raw_parts, but it's unstable,
    // so we have to do it manually:

    // first, make sure v's destructor doesn't free the data
    // it thinks it owns when it goes out of scope
    let mut v = std::mem::ManuallyDrop::new(v);

    // then, pick apart the existing Vec
    let p = v.as_mut_ptr();
    let len = v.len();
    let cap = v.capacity();

    // finally, adopt the data into a new Vec
    unsafe { Vec::from_raw_parts(p as *mut i8, len, cap) }
}

/// Selects the wire variant used when encoding or decoding a tree.
///
/// Every read and write call takes one of these; the same tree can be
/// persisted in one form and transmitted in the other.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Flavor {
    /// Big-endian fixed-width integers, `u16`-prefixed CESU-8 strings. The
    /// form data is persisted in.
    Standard,
    /// Little-endian floats and shorts, zig-zag varints for Int/Long and all
    /// counts, unsigned-varint-prefixed UTF-8 strings. The compact form used
    /// across a network boundary.
    Network,
}
