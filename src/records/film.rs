//! `Film` (spec §4.8): a framerate plus a table of reels. Each reel names a
//! pair of handles rather than embedding its target data — resolving them
//! into a [`super::multi_init::MultiInit`] and a disassembled anim script
//! is the catalog/model layer's job, since that requires following handles
//! across archives.

use crate::error::EndOfInput;
use crate::handle::Handle;
use crate::reader::ByteReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReelHeader {
    pub h_mobj: Handle,
    pub h_script: Handle,
}

impl ReelHeader {
    pub const SIZE: usize = 8;

    pub fn parse(r: &mut ByteReader) -> Result<ReelHeader, EndOfInput> {
        Ok(ReelHeader {
            h_mobj: Handle::new(r.read_u32()?),
            h_script: Handle::new(r.read_u32()?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Film {
    pub handle: Handle,
    pub framerate: u32,
    pub reels: Vec<ReelHeader>,
}

impl Film {
    pub fn parse(r: &mut ByteReader, handle: Handle) -> Result<Film, EndOfInput> {
        let framerate = r.read_u32()?;
        let numreels = r.read_u32()?;
        let mut reels = Vec::with_capacity(numreels as usize);
        for _ in 0..numreels {
            reels.push(ReelHeader::parse(r)?);
        }
        Ok(Film { handle, framerate, reels })
    }
}
