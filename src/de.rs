//! Decoding of NBT byte streams into a tree of values.
//!
//! Both wire variants are handled here, selected by [`Flavor`] (or use the
//! [`from_bytes`]/[`from_network_bytes`] shorthands). The root tag of a
//! stream must be a compound; its name is discarded, since a root is almost
//! always anonymous.
//!
//! A malformed stream — an unknown kind byte, a length that runs past the
//! end of the input, a compound whose End marker never arrives — fails the
//! whole decode. No partial tree is ever returned.
//!
//! ```
//! use pocketnbt::Compound;
//!
//! # fn main() -> pocketnbt::error::Result<()> {
//! let mut level = Compound::new();
//! level.insert("Depth", 3i32);
//!
//! let bytes = pocketnbt::ser::to_bytes(&level)?;
//! assert_eq!(pocketnbt::de::from_bytes(&bytes)?, level);
//! # Ok(())
//! # }
//! ```

use std::convert::TryFrom;
use std::io::Read;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::error::{Error, Result};
use crate::{varint, ByteArray, Compound, Flavor, IntArray, List, Tag, Value};

/// Decode a standard-flavor (big-endian) stream into its root compound.
pub fn from_bytes(input: &[u8]) -> Result<Compound> {
    from_reader(input, Flavor::Standard)
}

/// Decode a network-flavor stream into its root compound.
pub fn from_network_bytes(input: &[u8]) -> Result<Compound> {
    from_reader(input, Flavor::Network)
}

/// Decode NBT from any reader in the given flavor.
pub fn from_reader<R: Read>(reader: R, flavor: Flavor) -> Result<Compound> {
    Decoder { reader, flavor }.root()
}

struct Decoder<R: Read> {
    reader: R,
    flavor: Flavor,
}

impl<R: Read> Decoder<R> {
    fn root(&mut self) -> Result<Compound> {
        // EOF before the first byte is a clean empty stream, not corruption.
        let first = match self.reader.read_u8() {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Err(Error::eof()),
            Err(e) => return Err(e.into()),
        };

        match Tag::try_from(first) {
            Ok(Tag::Compound) => {}
            _ => return Err(Error::no_root_compound()),
        }

        let _root_name = self.string()?;
        self.compound()
    }

    fn tag(&mut self) -> Result<Tag> {
        let b = self.reader.read_u8()?;
        Tag::try_from(b).map_err(|_| Error::invalid_tag(b))
    }

    fn compound(&mut self) -> Result<Compound> {
        let mut compound = Compound::new();
        loop {
            let tag = self.tag()?;
            if tag == Tag::End {
                return Ok(compound);
            }
            let name = self.string()?;
            let value = self.payload(tag)?;
            compound.insert(name, value);
        }
    }

    fn payload(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            // Only valid as a compound terminator or the element kind of an
            // empty list, both handled before we get here.
            Tag::End => return Err(Error::invalid_tag(0)),
            Tag::Byte => Value::Byte(self.reader.read_i8()?),
            Tag::Short => Value::Short(self.short()?),
            Tag::Int => Value::Int(self.int()?),
            Tag::Long => Value::Long(self.long()?),
            Tag::Float => Value::Float(self.float()?),
            Tag::Double => Value::Double(self.double()?),
            Tag::String => Value::String(self.string()?),
            Tag::ByteArray => {
                let len = self.len()?;
                let mut buf = vec![0u8; len];
                self.reader.read_exact(&mut buf[..])?;
                Value::ByteArray(ByteArray::new(crate::vec_u8_into_i8(buf)))
            }
            Tag::IntArray => {
                let len = self.len()?;
                let mut buf = vec![0i32; len];
                for i in 0..len {
                    buf[i] = self.int()?;
                }
                Value::IntArray(IntArray::new(buf))
            }
            Tag::List => Value::List(self.list()?),
            Tag::Compound => Value::Compound(self.compound()?),
        })
    }

    fn list(&mut self) -> Result<List> {
        let element = self.tag()?;
        let len = self.len()?;
        let mut list = List::with_element_tag(element);
        for _ in 0..len {
            list.push(self.payload(element)?);
        }
        Ok(list)
    }

    fn len(&mut self) -> Result<usize> {
        let len = match self.flavor {
            Flavor::Standard => self.reader.read_i32::<BigEndian>()?,
            Flavor::Network => varint::read_vari32(&mut self.reader)?,
        };
        usize::try_from(len).map_err(|_| Error::invalid_length(format!("negative length: {}", len)))
    }

    fn short(&mut self) -> Result<i16> {
        Ok(match self.flavor {
            Flavor::Standard => self.reader.read_i16::<BigEndian>()?,
            Flavor::Network => self.reader.read_i16::<LittleEndian>()?,
        })
    }

    fn int(&mut self) -> Result<i32> {
        match self.flavor {
            Flavor::Standard => Ok(self.reader.read_i32::<BigEndian>()?),
            Flavor::Network => varint::read_vari32(&mut self.reader),
        }
    }

    fn long(&mut self) -> Result<i64> {
        match self.flavor {
            Flavor::Standard => Ok(self.reader.read_i64::<BigEndian>()?),
            Flavor::Network => varint::read_vari64(&mut self.reader),
        }
    }

    fn float(&mut self) -> Result<f32> {
        Ok(match self.flavor {
            Flavor::Standard => self.reader.read_f32::<BigEndian>()?,
            Flavor::Network => self.reader.read_f32::<LittleEndian>()?,
        })
    }

    fn double(&mut self) -> Result<f64> {
        Ok(match self.flavor {
            Flavor::Standard => self.reader.read_f64::<BigEndian>()?,
            Flavor::Network => self.reader.read_f64::<LittleEndian>()?,
        })
    }

    fn string(&mut self) -> Result<String> {
        match self.flavor {
            Flavor::Standard => {
                let len = self.reader.read_u16::<BigEndian>()? as usize;
                let mut buf = vec![0; len];
                self.reader.read_exact(&mut buf[..])?;

                Ok(cesu8::from_java_cesu8(&buf[..])
                    .map_err(|_| Error::nonunicode(Vec::from(&buf[..])))?
                    .into_owned())
            }
            Flavor::Network => {
                let len = varint::read_varu32(&mut self.reader)? as usize;
                let mut buf = vec![0; len];
                self.reader.read_exact(&mut buf[..])?;

                String::from_utf8(buf).map_err(|e| Error::nonunicode(e.into_bytes()))
            }
        }
    }
}
