//! The read-only model facade (spec §6): the one entry point a consumer
//! needs once an installation's `data/` directory is known. Everything
//! below this is [`crate::catalog::Catalog`], [`crate::strings::StringTable`]
//! and the record/script parsers it composes.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::{ArchiveMeta, Catalog};
use crate::handle::Handle;
use crate::records::{Actor, Entrance, Film, GameVariables, Image, MultiInit, Object, Poly, Scene};
use crate::script::{AnimLine, PcodeLine, ScriptEntry};
use crate::strings::StringTable;

pub struct Model {
    catalog: Catalog,
    strings: StringTable,
}

impl Model {
    /// Opens a Tinsel installation rooted at `root` (a directory containing
    /// `data/index`, `data/english.txt`, and the named archive files).
    pub fn open(root: &Path) -> Result<Model> {
        let catalog = Catalog::load(root).context("loading archive catalog")?;
        let strings_path = root.join(crate::catalog::STRINGS_PATH);
        let strings_bytes = fs::read(&strings_path)
            .with_context(|| format!("reading string table at {}", strings_path.display()))?;
        Ok(Model { catalog, strings: StringTable::new(strings_bytes) })
    }

    pub fn archives(&self) -> &[ArchiveMeta] {
        self.catalog.archives()
    }

    /// Forces archive `index` to load without returning any of its content;
    /// the per-record accessors below all load on demand.
    pub fn load(&self, index: u32) -> Result<()> {
        self.catalog.load_archive(index)
    }

    pub fn memory(&self, handle: Handle) -> Result<Vec<u8>> {
        self.catalog.memory(handle)
    }

    /// Looks up a localized string by id (spec §4.10). Lossy-decoded as
    /// UTF-8 at this boundary only — [`crate::strings::StringTable::get`]
    /// itself makes no encoding assumption.
    pub fn string(&self, id: u32) -> String {
        String::from_utf8_lossy(self.strings.get(id)).into_owned()
    }

    pub fn game_variables(&self) -> Result<GameVariables> {
        self.catalog.game_variables()
    }

    pub fn objects(&self, archive: u32) -> Result<Option<Vec<Object>>> {
        self.catalog.objects(archive)
    }

    pub fn scene(&self, archive: u32) -> Result<Option<(Scene, Vec<Entrance>, Vec<Poly>, Vec<Actor>)>> {
        self.catalog.scene(archive)
    }

    /// Every disassemblable script in `archive`, named per spec §4.9.
    pub fn scripts(&self, archive: u32) -> Result<Vec<ScriptEntry>> {
        self.catalog.scripts(archive)
    }

    pub fn parse_film(&self, handle: Handle) -> Result<Film> {
        self.catalog.film(handle)
    }

    pub fn parse_image(&self, handle: Handle) -> Result<(Image, Vec<u8>)> {
        self.catalog.image(handle)
    }

    pub fn parse_frames(&self, handle: Handle) -> Result<Vec<(Image, Vec<u8>)>> {
        self.catalog.frames(handle)
    }

    pub fn parse_multi_init(&self, handle: Handle) -> Result<(MultiInit, crate::records::Frames)> {
        self.catalog.multi_init(handle)
    }

    pub fn disassemble_pcode(&self, handle: Handle) -> Result<Vec<PcodeLine>> {
        self.catalog.pcode(handle)
    }

    pub fn disassemble_anim(&self, handle: Handle, sound: bool) -> Result<Vec<AnimLine>> {
        self.catalog.anim_script(handle, sound)
    }

    /// Fully resolves a reel: its `MultiInit`/frame list and its AnimScript,
    /// deriving the `sound` flag the same way
    /// `original_source/tinsel.cpp`'s reel loader does
    /// (`MultiInit::mul_id == -2`).
    pub fn parse_reel(
        &self,
        reel: crate::records::ReelHeader,
    ) -> Result<(MultiInit, crate::records::Frames, Vec<AnimLine>)> {
        let (obj, frames) = self.catalog.multi_init(reel.h_mobj)?;
        let anim = self.catalog.anim_script(reel.h_script, obj.is_sound())?;
        Ok((obj, frames, anim))
    }
}
