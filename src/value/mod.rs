mod de;
mod ser;

use crate::error::{Error, Result};
use crate::{ByteArray, Compound, IntArray, List, Tag};

/// Value is a complete NBT value. It owns its data. A tree of values is
/// built either directly or by decoding a byte stream, and is mutated
/// through the accessors on [`Compound`] and [`List`]. This type preserves
/// all the information from the original NBT, with the exception of the
/// name of the root compound (which is usually the empty string).
///
/// A value's kind is fixed at construction. Replacing the semantic type of
/// an entry means constructing a new value; [`Value::set_value`] only
/// accepts kind-compatible input.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(ByteArray),
    IntArray(IntArray),
    List(List),
    Compound(Compound),
}

impl Value {
    /// The kind of this value.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::String(_) => Tag::String,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::IntArray(_) => Tag::IntArray,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            Value::Float(v) => Some(v as i64),
            Value::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::Byte(v) => Some(v as u64),
            Value::Short(v) => Some(v as u64),
            Value::Int(v) => Some(v as u64),
            Value::Long(v) => Some(v as u64),
            Value::Float(v) => Some(v as u64),
            Value::Double(v) => Some(v as u64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    /// Assign a new payload without changing this value's kind.
    ///
    /// Numeric kinds accept any numeric input, integral or floating, and
    /// coerce it into their own representation; out-of-range input wraps.
    /// Everything else requires the exact same kind. Incompatible input is
    /// rejected with a type-mismatch error and the value is left unchanged.
    ///
    /// ```
    /// use pocketnbt::Value;
    ///
    /// let mut v = Value::Double(0.0);
    /// v.set_value(25i32).unwrap();
    /// assert_eq!(v, Value::Double(25.0));
    /// assert!(v.set_value("not a number").unwrap_err().is_type_mismatch());
    /// assert_eq!(v, Value::Double(25.0));
    /// ```
    pub fn set_value(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if value.tag() == self.tag() {
            *self = value;
            return Ok(());
        }

        let (expected, actual) = (self.tag(), value.tag());
        let err = move || Error::type_mismatch(expected, actual);
        match self {
            Value::Byte(v) => *v = value.as_i64().ok_or_else(err)? as i8,
            Value::Short(v) => *v = value.as_i64().ok_or_else(err)? as i16,
            Value::Int(v) => *v = value.as_i64().ok_or_else(err)? as i32,
            Value::Long(v) => *v = value.as_i64().ok_or_else(err)?,
            Value::Float(v) => *v = value.as_f64().ok_or_else(err)? as f32,
            Value::Double(v) => *v = value.as_f64().ok_or_else(err)?,
            _ => return Err(err()),
        }
        Ok(())
    }
}

#[cfg(feature = "arbitrary1")]
fn hom_list<'a, T, F>(u: &mut arbitrary::Unstructured<'a>, f: F) -> arbitrary::Result<List>
where
    F: FnMut(T) -> Value,
    T: arbitrary::Arbitrary<'a>,
{
    Ok(u.arbitrary_iter::<T>()?
        .collect::<arbitrary::Result<Vec<_>>>()?
        .into_iter()
        .map(f)
        .collect())
}

#[cfg(feature = "arbitrary1")]
fn arb_list(u: &mut arbitrary::Unstructured) -> arbitrary::Result<List> {
    Ok(match u.arbitrary::<Tag>()? {
        Tag::End => List::new(),
        Tag::Byte => hom_list(u, Value::Byte)?,
        Tag::Short => hom_list(u, Value::Short)?,
        Tag::Int => hom_list(u, Value::Int)?,
        Tag::Long => hom_list(u, Value::Long)?,
        Tag::Float => hom_list(u, Value::Float)?,
        Tag::Double => hom_list(u, Value::Double)?,
        Tag::ByteArray => hom_list(u, |v: Vec<i8>| Value::ByteArray(v.into()))?,
        Tag::String => hom_list(u, Value::String)?,
        Tag::List => {
            let len = u.arbitrary_len::<Value>()?;
            let mut v = List::new();
            for _ in 0..len {
                v.push(Value::List(arb_list(u)?));
            }
            v
        }
        Tag::Compound => hom_list(u, Value::Compound)?,
        Tag::IntArray => hom_list(u, |v: Vec<i32>| Value::IntArray(v.into()))?,
    })
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Value {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        use Value::*;

        Ok(match u.arbitrary::<Tag>()? {
            Tag::End => return Err(arbitrary::Error::IncorrectFormat),
            Tag::Byte => Byte(u.arbitrary()?),
            Tag::Short => Short(u.arbitrary()?),
            Tag::Int => Int(u.arbitrary()?),
            Tag::Long => Long(u.arbitrary()?),
            Tag::Float => Float(u.arbitrary()?),
            Tag::Double => Double(u.arbitrary()?),
            Tag::ByteArray => ByteArray(u.arbitrary::<Vec<i8>>()?.into()),
            Tag::String => String(u.arbitrary()?),
            Tag::Compound => Compound(u.arbitrary()?),
            Tag::IntArray => IntArray(u.arbitrary::<Vec<i32>>()?.into()),

            // Lists need to all be the same kind.
            Tag::List => List(arb_list(u)?),
        })
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Compound {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(u.arbitrary_iter::<(String, Value)>()?
            .collect::<arbitrary::Result<Vec<_>>>()?
            .into_iter()
            .collect())
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Value {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}
impl From<&bool> for Value {
    fn from(val: &bool) -> Self {
        Self::Byte(i8::from(*val))
    }
}

impl From<Vec<i8>> for Value {
    fn from(val: Vec<i8>) -> Self {
        Self::ByteArray(val.into())
    }
}
impl From<Vec<i32>> for Value {
    fn from(val: Vec<i32>) -> Self {
        Self::IntArray(val.into())
    }
}

// ------------- PartialEq against primitives -------------

fn eq_i64(value: &Value, other: i64) -> bool {
    value.as_i64().map_or(false, |i| i == other)
}

fn eq_u64(value: &Value, other: u64) -> bool {
    value.as_u64().map_or(false, |i| i == other)
}

fn eq_f64(value: &Value, other: f64) -> bool {
    value.as_f64().map_or(false, |i| i == other)
}

fn eq_str(value: &Value, other: &str) -> bool {
    value.as_str().map_or(false, |i| i == other)
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        eq_str(self, other)
    }
}

impl<'a> PartialEq<&'a str> for Value {
    fn eq(&self, other: &&str) -> bool {
        eq_str(self, other)
    }
}

impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        eq_str(other, self)
    }
}

impl<'a> PartialEq<Value> for &'a str {
    fn eq(&self, other: &Value) -> bool {
        eq_str(other, self)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        eq_str(self, other.as_str())
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        eq_str(other, self.as_str())
    }
}

macro_rules! partialeq_numeric {
    ($($eq:ident [$($ty:ty)*])*) => {
        $($(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    $eq(self, *other as _)
                }
            }

            impl PartialEq<Value> for $ty {
                fn eq(&self, other: &Value) -> bool {
                    $eq(other, *self as _)
                }
            }

            impl<'a> PartialEq<$ty> for &'a Value {
                fn eq(&self, other: &$ty) -> bool {
                    $eq(*self, *other as _)
                }
            }

            impl<'a> PartialEq<$ty> for &'a mut Value {
                fn eq(&self, other: &$ty) -> bool {
                    $eq(*self, *other as _)
                }
            }
        )*)*
    }
}

partialeq_numeric! {
    eq_i64[i8 i16 i32 i64 isize]
    eq_u64[u8 u16 u32 u64 usize]
    eq_f64[f32 f64]
}
