//! `Scene` (spec §4.6): the 17-field header found in a `CHUNK_SCENE`
//! payload. Resolving the entrance/poly/actor sub-tables it points at is
//! catalog/model work — each handle may reach into a different archive.

use crate::error::EndOfInput;
use crate::handle::Handle;
use crate::reader::ByteReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    pub def_refer: u32,
    pub h_scene_script: Handle,
    pub h_scene_desc: Handle,
    pub num_entrance: u32,
    pub h_entrance: Handle,
    pub num_cameras: u32,
    pub h_camera: Handle,
    pub num_lights: u32,
    pub h_light: Handle,
    pub num_poly: u32,
    pub h_poly: Handle,
    pub num_tagged_actor: u32,
    pub h_tagged_actor: Handle,
    pub num_process: u32,
    pub h_process: Handle,
    pub h_music_script: Handle,
    pub h_music_segment: Handle,
}

impl Scene {
    /// 17 `u32` fields on the wire.
    pub const HEADER_SIZE: usize = 17 * 4;

    pub fn parse(r: &mut ByteReader) -> Result<Scene, EndOfInput> {
        Ok(Scene {
            def_refer: r.read_u32()?,
            h_scene_script: Handle::new(r.read_u32()?),
            h_scene_desc: Handle::new(r.read_u32()?),
            num_entrance: r.read_u32()?,
            h_entrance: Handle::new(r.read_u32()?),
            num_cameras: r.read_u32()?,
            h_camera: Handle::new(r.read_u32()?),
            num_lights: r.read_u32()?,
            h_light: Handle::new(r.read_u32()?),
            num_poly: r.read_u32()?,
            h_poly: Handle::new(r.read_u32()?),
            num_tagged_actor: r.read_u32()?,
            h_tagged_actor: Handle::new(r.read_u32()?),
            num_process: r.read_u32()?,
            h_process: Handle::new(r.read_u32()?),
            h_music_script: Handle::new(r.read_u32()?),
            h_music_segment: Handle::new(r.read_u32()?),
        })
    }
}
