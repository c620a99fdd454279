//! `(pid, handle)` pairs (spec §4.9): archive 0's global process table
//! (`CHUNK_PROCESSES`) and a scene's per-scene process table share this
//! 8-byte-per-entry layout.

use crate::error::EndOfInput;
use crate::handle::Handle;
use crate::reader::ByteReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessEntry {
    pub pid: u32,
    pub handle: Handle,
}

impl ProcessEntry {
    pub const SIZE: usize = 8;

    pub fn parse_all(data: &[u8], count: u32) -> Result<Vec<ProcessEntry>, EndOfInput> {
        let mut r = ByteReader::new(data);
        let mut entries = Vec::with_capacity(count as usize);
        for _ in 0..count {
            entries.push(ProcessEntry {
                pid: r.read_u32()?,
                handle: Handle::new(r.read_u32()?),
            });
        }
        Ok(entries)
    }
}
