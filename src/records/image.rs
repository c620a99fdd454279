//! `Image` record (spec §4.7): a bitmap's header, 16 bytes, six fields.
//! Pixel decoding lives in [`crate::image`], which consumes this struct
//! plus the raw bytes at `h_img_bits`.

use crate::error::EndOfInput;
use crate::handle::Handle;
use crate::reader::ByteReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image {
    pub handle: Handle,
    pub width: u16,
    pub height: u16,
    pub ani_off_x: u16,
    pub ani_off_y: u16,
    pub h_img_bits: Handle,
    pub is_rle: u16,
    pub color_flags: u16,
}

impl Image {
    pub const SIZE: usize = 16;

    pub fn parse(r: &mut ByteReader, handle: Handle) -> Result<Image, EndOfInput> {
        Ok(Image {
            handle,
            width: r.read_u16()?,
            height: r.read_u16()?,
            ani_off_x: r.read_u16()?,
            ani_off_y: r.read_u16()?,
            h_img_bits: Handle::new(r.read_u32()?),
            is_rle: r.read_u16()?,
            color_flags: r.read_u16()?,
        })
    }
}
