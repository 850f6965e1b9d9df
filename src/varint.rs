//! LEB128-style variable-length integers as used by the network flavor.
//!
//! Unsigned values are plain LEB128, 7 bits per byte, low group first.
//! Signed values are zig-zag mapped first so small negative numbers stay
//! short.

use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt};

use crate::error::{Error, Result};

pub(crate) fn read_varu32<R: Read>(reader: &mut R) -> Result<u32> {
    let mut value = 0u32;
    for shift in (0..35).step_by(7) {
        let b = reader.read_u8()?;
        value |= ((b & 0x7f) as u32) << shift;
        if b & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(Error::invalid_length("varint longer than 5 bytes"))
}

pub(crate) fn write_varu32<W: Write>(writer: &mut W, mut value: u32) -> Result<()> {
    loop {
        let mut b = (value & 0x7f) as u8;
        value >>= 7;
        if value != 0 {
            b |= 0x80;
        }
        writer.write_u8(b)?;
        if value == 0 {
            return Ok(());
        }
    }
}

pub(crate) fn read_vari32<R: Read>(reader: &mut R) -> Result<i32> {
    let raw = read_varu32(reader)?;
    Ok(((raw >> 1) as i32) ^ -((raw & 1) as i32))
}

pub(crate) fn write_vari32<W: Write>(writer: &mut W, value: i32) -> Result<()> {
    write_varu32(writer, ((value << 1) ^ (value >> 31)) as u32)
}

pub(crate) fn read_varu64<R: Read>(reader: &mut R) -> Result<u64> {
    let mut value = 0u64;
    for shift in (0..70).step_by(7) {
        let b = reader.read_u8()?;
        value |= ((b & 0x7f) as u64) << shift;
        if b & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(Error::invalid_length("varint longer than 10 bytes"))
}

pub(crate) fn write_varu64<W: Write>(writer: &mut W, mut value: u64) -> Result<()> {
    loop {
        let mut b = (value & 0x7f) as u8;
        value >>= 7;
        if value != 0 {
            b |= 0x80;
        }
        writer.write_u8(b)?;
        if value == 0 {
            return Ok(());
        }
    }
}

pub(crate) fn read_vari64<R: Read>(reader: &mut R) -> Result<i64> {
    let raw = read_varu64(reader)?;
    Ok(((raw >> 1) as i64) ^ -((raw & 1) as i64))
}

pub(crate) fn write_vari64<W: Write>(writer: &mut W, value: i64) -> Result<()> {
    write_varu64(writer, ((value << 1) ^ (value >> 63)) as u64)
}
