//! `Entrance` record (spec §4.6): 16 bytes, four `u32` fields.

use crate::error::EndOfInput;
use crate::handle::Handle;
use crate::reader::ByteReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    /// This record's own handle (`hEntrance + i * 16`), not stored on disk.
    pub handle: Handle,
    pub e_number: u32,
    pub h_script: Handle,
    pub h_ent_desc: Handle,
    pub flags: u32,
}

impl Entrance {
    pub const SIZE: usize = 16;

    pub fn parse(r: &mut ByteReader, handle: Handle) -> Result<Entrance, EndOfInput> {
        Ok(Entrance {
            handle,
            e_number: r.read_u32()?,
            h_script: Handle::new(r.read_u32()?),
            h_ent_desc: Handle::new(r.read_u32()?),
            flags: r.read_u32()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixed_width_record() {
        let data = [1u32, 2, 3, 4].iter().flat_map(|v| v.to_le_bytes()).collect::<Vec<u8>>();
        let mut r = ByteReader::new(&data);
        let e = Entrance::parse(&mut r, Handle::new(0x100)).unwrap();
        assert_eq!(e.e_number, 1);
        assert_eq!(e.h_script, Handle::new(2));
        assert_eq!(e.h_ent_desc, Handle::new(3));
        assert_eq!(e.flags, 4);
        assert_eq!(r.position(), Entrance::SIZE);
    }
}
