//! `MultiInit` (spec §4.8): a reel's sprite-instance header — which frame
//! list to animate and how to place it.

use crate::error::EndOfInput;
use crate::handle::Handle;
use crate::reader::ByteReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiInit {
    pub h_mul_frame: Handle,
    pub mul_flags: i32,
    pub mul_id: i32,
    pub mul_x: i32,
    pub mul_y: i32,
    pub mul_z: i32,
    pub other_flags: u32,
}

impl MultiInit {
    pub const SIZE: usize = 28;

    pub fn parse(r: &mut ByteReader) -> Result<MultiInit, EndOfInput> {
        Ok(MultiInit {
            h_mul_frame: Handle::new(r.read_u32()?),
            mul_flags: r.read_i32()?,
            mul_id: r.read_i32()?,
            mul_x: r.read_i32()?,
            mul_y: r.read_i32()?,
            mul_z: r.read_i32()?,
            other_flags: r.read_u32()?,
        })
    }

    /// A `mul_id` of `-2` marks this instance as a sound reel rather than a
    /// visible sprite (spec §4.8) — [`super::film::Reel`] uses this to
    /// suppress frame-handle parsing in its `AnimScript`.
    pub fn is_sound(&self) -> bool {
        self.mul_id == -2
    }
}
