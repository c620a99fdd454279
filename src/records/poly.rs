//! `Poly` record (spec §4.6): 136 bytes, 34 `u32` fields — a scene polygon
//! (walkable area, blocking zone, or scaling/lighting node).

use crate::error::EndOfInput;
use crate::handle::Handle;
use crate::reader::ByteReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poly {
    pub handle: Handle,
    pub poly_type: u32,
    pub x: [u32; 4],
    pub y: [u32; 4],
    pub x_off: u32,
    pub y_off: u32,
    pub id: u32,
    pub _ws: u32,
    pub field: u32,
    pub reftype: u32,
    pub tag_x: u32,
    pub tag_y: u32,
    pub h_tag_text: Handle,
    pub node_x: u32,
    pub node_y: u32,
    pub h_film: Handle,
    pub scale1: u32,
    pub scale2: u32,
    pub level1: u32,
    pub level2: u32,
    pub bright1: u32,
    pub bright2: u32,
    pub reel_type: u32,
    pub z_factor: u32,
    pub node_count: u32,
    pub node_list_x: u32,
    pub node_list_y: u32,
    pub line_list: u32,
    pub h_script: Handle,
}

impl Poly {
    pub const SIZE: usize = 136;

    pub fn parse(r: &mut ByteReader, handle: Handle) -> Result<Poly, EndOfInput> {
        let poly_type = r.read_u32()?;
        let x = [r.read_u32()?, r.read_u32()?, r.read_u32()?, r.read_u32()?];
        let y = [r.read_u32()?, r.read_u32()?, r.read_u32()?, r.read_u32()?];
        Ok(Poly {
            handle,
            poly_type,
            x,
            y,
            x_off: r.read_u32()?,
            y_off: r.read_u32()?,
            id: r.read_u32()?,
            _ws: r.read_u32()?,
            field: r.read_u32()?,
            reftype: r.read_u32()?,
            tag_x: r.read_u32()?,
            tag_y: r.read_u32()?,
            h_tag_text: Handle::new(r.read_u32()?),
            node_x: r.read_u32()?,
            node_y: r.read_u32()?,
            h_film: Handle::new(r.read_u32()?),
            scale1: r.read_u32()?,
            scale2: r.read_u32()?,
            level1: r.read_u32()?,
            level2: r.read_u32()?,
            bright1: r.read_u32()?,
            bright2: r.read_u32()?,
            reel_type: r.read_u32()?,
            z_factor: r.read_u32()?,
            node_count: r.read_u32()?,
            node_list_x: r.read_u32()?,
            node_list_y: r.read_u32()?,
            line_list: r.read_u32()?,
            h_script: Handle::new(r.read_u32()?),
        })
    }
}
