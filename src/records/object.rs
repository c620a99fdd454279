//! `Object` record (spec §4.7): 24 bytes, six fields — one entry of archive
//! 1's `CHUNK_OBJECTS` table.
//!
//! Unlike every other record in this module, an `Object`'s handle is a plain
//! byte offset into the `CHUNK_OBJECTS` payload (`i * 24`), not a full
//! catalog [`Handle`] with archive bits — `original_source/tinsel.cpp`
//! indexes this table directly rather than resolving it through
//! `get_memory`.

use crate::error::EndOfInput;
use crate::handle::Handle;
use crate::reader::ByteReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Object {
    /// Offset of this record within `CHUNK_OBJECTS`, i.e. `index * 24`.
    pub offset: u32,
    pub id: u32,
    pub h_icon_film: Handle,
    pub h_script: Handle,
    pub attribute: u32,
    pub _u: u32,
    pub not_clue: u32,
}

impl Object {
    pub const SIZE: usize = 24;

    pub fn parse(r: &mut ByteReader, offset: u32) -> Result<Object, EndOfInput> {
        Ok(Object {
            offset,
            id: r.read_u32()?,
            h_icon_film: Handle::new(r.read_u32()?),
            h_script: Handle::new(r.read_u32()?),
            attribute: r.read_u32()?,
            _u: r.read_u32()?,
            not_clue: r.read_u32()?,
        })
    }

    /// Parses every `Object` packed into `data` (`CHUNK_OBJECTS`'s payload),
    /// `count` entries of [`Object::SIZE`] bytes each, in order.
    pub fn parse_all(data: &[u8], count: u32) -> Result<Vec<Object>, EndOfInput> {
        let mut r = ByteReader::new(data);
        let mut objects = Vec::with_capacity(count as usize);
        for i in 0..count {
            objects.push(Object::parse(&mut r, i * Object::SIZE as u32)?);
        }
        Ok(objects)
    }
}
