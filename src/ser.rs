//! Encoding of a tree of values into NBT byte streams.
//!
//! The wire variant is selected by [`Flavor`], or use the
//! [`to_bytes`]/[`to_network_bytes`] shorthands. The root compound is
//! written with an empty name.
//!
//! Encoding a well-formed tree cannot fail except for errors from the sink.
//! A list whose children disagree with its declared element kind is a broken
//! invariant in the program that built the tree, and encoding panics rather
//! than emit bytes no decoder could make sense of.

use std::convert::TryInto;
use std::io::Write;

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::{varint, Compound, Flavor, List, Tag, Value};

/// Encode the compound in the standard (big-endian) flavor.
pub fn to_bytes(tag: &Compound) -> Result<Vec<u8>> {
    let mut result = vec![];
    to_writer(&mut result, tag, Flavor::Standard)?;
    Ok(result)
}

/// Encode the compound in the network flavor.
pub fn to_network_bytes(tag: &Compound) -> Result<Vec<u8>> {
    let mut result = vec![];
    to_writer(&mut result, tag, Flavor::Network)?;
    Ok(result)
}

/// Encode the compound to any writer in the given flavor.
pub fn to_writer<W: Write>(writer: W, tag: &Compound, flavor: Flavor) -> Result<()> {
    let mut encoder = Encoder { writer, flavor };
    encoder.tag(Tag::Compound)?;
    encoder.string("")?;
    encoder.compound(tag)
}

struct Encoder<W: Write> {
    writer: W,
    flavor: Flavor,
}

impl<W: Write> Encoder<W> {
    fn tag(&mut self, tag: Tag) -> Result<()> {
        self.writer.write_u8(tag as u8)?;
        Ok(())
    }

    fn compound(&mut self, compound: &Compound) -> Result<()> {
        for (name, value) in compound.iter() {
            self.tag(value.tag())?;
            self.string(name)?;
            self.payload(value)?;
        }
        self.tag(Tag::End)
    }

    fn payload(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Byte(v) => self.writer.write_i8(*v)?,
            Value::Short(v) => self.short(*v)?,
            Value::Int(v) => self.int(*v)?,
            Value::Long(v) => self.long(*v)?,
            Value::Float(v) => self.float(*v)?,
            Value::Double(v) => self.double(*v)?,
            Value::String(v) => self.string(v)?,
            Value::ByteArray(v) => {
                self.len(v.len())?;
                for b in v.iter() {
                    self.writer.write_i8(*b)?;
                }
            }
            Value::IntArray(v) => {
                self.len(v.len())?;
                for i in v.iter() {
                    self.int(*i)?;
                }
            }
            Value::List(v) => self.list(v)?,
            Value::Compound(v) => self.compound(v)?,
        }
        Ok(())
    }

    fn list(&mut self, list: &List) -> Result<()> {
        let element = list.element_tag();
        self.tag(element)?;
        self.len(list.len())?;
        for value in list.iter() {
            if value.tag() != element {
                panic!(
                    "list declared {:?} elements but contains {:?}",
                    element,
                    value.tag()
                );
            }
            self.payload(value)?;
        }
        Ok(())
    }

    fn len(&mut self, len: usize) -> Result<()> {
        let len: i32 = len
            .try_into()
            .map_err(|_| Error::bespoke("len too large".to_owned()))?;
        match self.flavor {
            Flavor::Standard => self.writer.write_i32::<BigEndian>(len)?,
            Flavor::Network => varint::write_vari32(&mut self.writer, len)?,
        }
        Ok(())
    }

    fn short(&mut self, v: i16) -> Result<()> {
        match self.flavor {
            Flavor::Standard => self.writer.write_i16::<BigEndian>(v)?,
            Flavor::Network => self.writer.write_i16::<LittleEndian>(v)?,
        }
        Ok(())
    }

    fn int(&mut self, v: i32) -> Result<()> {
        match self.flavor {
            Flavor::Standard => Ok(self.writer.write_i32::<BigEndian>(v)?),
            Flavor::Network => varint::write_vari32(&mut self.writer, v),
        }
    }

    fn long(&mut self, v: i64) -> Result<()> {
        match self.flavor {
            Flavor::Standard => Ok(self.writer.write_i64::<BigEndian>(v)?),
            Flavor::Network => varint::write_vari64(&mut self.writer, v),
        }
    }

    fn float(&mut self, v: f32) -> Result<()> {
        match self.flavor {
            Flavor::Standard => self.writer.write_f32::<BigEndian>(v)?,
            Flavor::Network => self.writer.write_f32::<LittleEndian>(v)?,
        }
        Ok(())
    }

    fn double(&mut self, v: f64) -> Result<()> {
        match self.flavor {
            Flavor::Standard => self.writer.write_f64::<BigEndian>(v)?,
            Flavor::Network => self.writer.write_f64::<LittleEndian>(v)?,
        }
        Ok(())
    }

    fn string(&mut self, s: &str) -> Result<()> {
        match self.flavor {
            Flavor::Standard => {
                let s = cesu8::to_java_cesu8(s);
                let len: u16 = s
                    .len()
                    .try_into()
                    .map_err(|_| Error::bespoke("string too long".to_owned()))?;
                self.writer.write_u16::<BigEndian>(len)?;
                self.writer.write_all(&s)?;
            }
            Flavor::Network => {
                let len: u32 = s
                    .len()
                    .try_into()
                    .map_err(|_| Error::bespoke("string too long".to_owned()))?;
                varint::write_varu32(&mut self.writer, len)?;
                self.writer.write_all(s.as_bytes())?;
            }
        }
        Ok(())
    }
}
