//! `Frames` (spec §4.7): a run-length-implicit list of frame handles read
//! until a terminator — either a null handle or one whose archive index
//! falls outside the catalog. Each surviving handle resolves (via
//! [`crate::catalog`]) to an [`super::image::Image`] record.

use crate::error::EndOfInput;
use crate::handle::Handle;
use crate::reader::ByteReader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frames(pub Vec<Handle>);

impl Frames {
    /// `archive_count` is the catalog's size; a handle whose archive index
    /// is `>= archive_count` terminates the list without being included.
    pub fn parse(r: &mut ByteReader, archive_count: u32) -> Result<Frames, EndOfInput> {
        let mut handles = Vec::new();
        loop {
            let raw = r.read_u32()?;
            let handle = Handle::new(raw);
            if handle.is_null() || handle.archive() >= archive_count {
                break;
            }
            handles.push(handle);
        }
        Ok(Frames(handles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_null_handle() {
        let mut data = Vec::new();
        data.extend_from_slice(&0x0200_0010u32.to_le_bytes());
        data.extend_from_slice(&0x0200_0020u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());

        let mut r = ByteReader::new(&data);
        let frames = Frames::parse(&mut r, 8).unwrap();
        assert_eq!(frames.0, vec![Handle::new(0x0200_0010), Handle::new(0x0200_0020)]);
    }

    #[test]
    fn stops_at_out_of_range_archive_index() {
        let mut data = Vec::new();
        data.extend_from_slice(&0x0100_0010u32.to_le_bytes());
        // archive index 0x7F is out of range for a 2-archive catalog.
        data.extend_from_slice(&0x7F00_0000u32.to_le_bytes());

        let mut r = ByteReader::new(&data);
        let frames = Frames::parse(&mut r, 2).unwrap();
        assert_eq!(frames.0, vec![Handle::new(0x0100_0010)]);
    }
}
