//! `Actor` record (spec §4.6): 28 bytes, seven `u32` fields — a tagged
//! actor reference inside a scene's `CHUNK_ACTORS` table.

use crate::error::EndOfInput;
use crate::handle::Handle;
use crate::reader::ByteReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub handle: Handle,
    pub id: u32,
    pub h_tag_text: Handle,
    pub tag_portion_v: u32,
    pub tag_portion_h: u32,
    pub h_actor_code: Handle,
    pub tag_flags: u32,
    pub h_override_tag: Handle,
}

impl Actor {
    pub const SIZE: usize = 28;

    pub fn parse(r: &mut ByteReader, handle: Handle) -> Result<Actor, EndOfInput> {
        Ok(Actor {
            handle,
            id: r.read_u32()?,
            h_tag_text: Handle::new(r.read_u32()?),
            tag_portion_v: r.read_u32()?,
            tag_portion_h: r.read_u32()?,
            h_actor_code: Handle::new(r.read_u32()?),
            tag_flags: r.read_u32()?,
            h_override_tag: Handle::new(r.read_u32()?),
        })
    }
}
