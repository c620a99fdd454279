//! `GameVariables` — the singleton record inside archive 0's `CHUNK_GAME`
//! (spec §3, §4.6).

use crate::reader::ByteReader;
use crate::error::EndOfInput;

/// Nine 32-bit fields: three reserved, then six counters the rest of the
/// model depends on (`num_icons` in particular drives how many `Object`
/// records archive 1 holds). Field order follows the on-disk layout in
/// `original_source/tinsel.hpp` (the distilled spec lists the named
/// counters first, but the reserved words come first on the wire).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameVariables {
    pub reserved0: u32,
    pub reserved1: u32,
    pub reserved2: u32,
    pub num_actors: u32,
    pub num_globals: u32,
    pub num_polygons: u32,
    pub num_global_processes: u32,
    pub cd_play_handle: u32,
    pub num_icons: u32,
}

impl GameVariables {
    pub fn parse(data: &[u8]) -> Result<GameVariables, EndOfInput> {
        let mut r = ByteReader::new(data);
        Ok(GameVariables {
            reserved0: r.read_u32()?,
            reserved1: r.read_u32()?,
            reserved2: r.read_u32()?,
            num_actors: r.read_u32()?,
            num_globals: r.read_u32()?,
            num_polygons: r.read_u32()?,
            num_global_processes: r.read_u32()?,
            cd_play_handle: r.read_u32()?,
            num_icons: r.read_u32()?,
        })
    }
}
