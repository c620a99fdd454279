//! Archive catalog (spec §4.1, §4.9): the index of named archive entries,
//! their lazy LZSS-decompressed bytes, and the chunk list inside each.
//!
//! Grounded directly on `original_source/tinsel.cpp`'s `Tinsel` class:
//! `load_index`/`load_memhandle`/`get_memory`/`load_game_vars`/
//! `load_objects`/`load_scene`/`load_processes`. Interior mutability is a
//! deliberate departure from that class's plain member vector — Rust's
//! borrow checker won't let a method recursively re-enter `&mut self` while
//! resolving a self-referential handle, so each archive's mutable load
//! state lives behind its own [`RefCell`] rather than one lock over the
//! whole catalog.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::chunk::{self, Chunk, ChunkType};
use crate::handle::Handle;
use crate::records::{
    Actor, Entrance, Film, GameVariables, Object, Poly, ProcessEntry, Scene,
};
use crate::script::index::{self, ScriptEntry};
use crate::script;
use crate::{lzss, reader::ByteReader};

pub mod diagnostics {
    use std::sync::atomic::{AtomicU8, Ordering};

    /// No `log`/`tracing` dependency for this crate — diagnostics are a
    /// cheap global verbosity gate instead, matching the rest of this
    /// crate's preference for plain `eprintln!` over a logging framework.
    pub static VERBOSITY: AtomicU8 = AtomicU8::new(0);

    pub fn set_verbosity(level: u8) {
        VERBOSITY.store(level, Ordering::Relaxed);
    }

    pub fn log(level: u8, message: impl FnOnce() -> String) {
        if level <= VERBOSITY.load(Ordering::Relaxed) {
            eprintln!("{}", message());
        }
    }
}

/// Where the index file and named data files live, relative to the
/// catalog's root.
pub const INDEX_PATH: &str = "data/index";
pub const DATA_DIR: &str = "data";
pub const STRINGS_PATH: &str = "data/english.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveFlags(u32);

impl ArchiveFlags {
    const PRELOAD: u32 = 0x0100_0000;
    const DISCARD: u32 = 0x0200_0000;
    const SOUND: u32 = 0x0400_0000;
    const GRAPHIC: u32 = 0x0800_0000;
    const COMPRESSED: u32 = 0x1000_0000;
    const LOADED: u32 = 0x2000_0000;

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn is_preload(self) -> bool {
        self.0 & Self::PRELOAD != 0
    }
    pub fn is_discard(self) -> bool {
        self.0 & Self::DISCARD != 0
    }
    pub fn is_sound(self) -> bool {
        self.0 & Self::SOUND != 0
    }
    pub fn is_graphic(self) -> bool {
        self.0 & Self::GRAPHIC != 0
    }
    pub fn is_compressed(self) -> bool {
        self.0 & Self::COMPRESSED != 0
    }
    pub fn is_loaded(self) -> bool {
        self.0 & Self::LOADED != 0
    }
}

/// The immutable half of an archive entry, fixed at index-load time.
#[derive(Debug, Clone)]
pub struct ArchiveMeta {
    pub index: u32,
    pub name: String,
    pub size: u32,
    pub flags: ArchiveFlags,
}

#[derive(Debug, Default)]
struct ArchiveState {
    loaded: bool,
    data: Vec<u8>,
    chunks: Vec<Chunk>,
}

/// Lazily-decompressed game-data archives plus the `data/english.txt`
/// string page chain (spec §4.1, §4.10).
pub struct Catalog {
    root: PathBuf,
    metas: Vec<ArchiveMeta>,
    states: Vec<RefCell<ArchiveState>>,
}

impl Catalog {
    /// Reads `root/data/index` and eagerly decompresses every archive
    /// flagged `Preload`. Unlike `original_source/tinsel.cpp`'s
    /// `load_index`, this never writes a diagnostic `.uncompressed` dump
    /// alongside the preloaded archive.
    pub fn load(root: &Path) -> Result<Catalog> {
        let index_path = root.join(INDEX_PATH);
        let bytes = fs::read(&index_path)
            .with_context(|| format!("reading archive index at {}", index_path.display()))?;

        let count = bytes.len() / 24;
        let mut r = ByteReader::new(&bytes);
        let mut metas = Vec::with_capacity(count);
        for i in 0..count {
            let name = r.read_string(12).context("reading archive name")?;
            let size = r.read_u32().context("reading archive size")?;
            r.skip(4).context("skipping reserved index bytes")?;
            let flags = ArchiveFlags(r.read_u32().context("reading archive flags")?);
            metas.push(ArchiveMeta { index: i as u32, name, size, flags });
        }

        let states = metas.iter().map(|_| RefCell::new(ArchiveState::default())).collect();
        let catalog = Catalog { root: root.to_path_buf(), metas, states };

        for meta in &catalog.metas {
            if meta.flags.is_preload() {
                catalog.load_archive(meta.index)?;
            }
        }

        Ok(catalog)
    }

    pub fn archives(&self) -> &[ArchiveMeta] {
        &self.metas
    }

    fn check_index(&self, index: u32) -> Result<()> {
        if index as usize >= self.metas.len() {
            let err = crate::error::ArchiveIndexOutOfRange {
                index,
                catalog_size: self.metas.len() as u32,
            };
            return Err(anyhow!(err.to_string()));
        }
        Ok(())
    }

    /// Decompresses archive `index` and splits it into chunks, unless it is
    /// already loaded (idempotent, mirrors `load_memhandle`'s early return).
    pub fn load_archive(&self, index: u32) -> Result<()> {
        self.check_index(index)?;
        let mut state = self.states[index as usize].borrow_mut();
        if state.loaded {
            return Ok(());
        }

        let meta = &self.metas[index as usize];
        let path = self.root.join(DATA_DIR).join(&meta.name);
        let compressed = fs::read(&path)
            .with_context(|| format!("reading archive data at {}", path.display()))?;

        let mut decompressed = vec![0u8; meta.size as usize];
        let written = lzss::decompress(&compressed, &mut decompressed);
        diagnostics::log(2, || {
            format!("archive {} ({}): decompressed {written} of {} bytes", meta.index, meta.name, meta.size)
        });

        // Mark loaded before parsing chunks: a handle inside this archive's
        // own chunks that points back into this archive must see
        // `loaded == true` so a reentrant `load_archive` call is a no-op
        // rather than recursing.
        state.loaded = true;
        state.data = decompressed;
        state.chunks = chunk::split(&state.data);

        Ok(())
    }

    /// Returns the bytes from `handle`'s offset to the end of its archive,
    /// loading that archive first if necessary. Unlike
    /// `original_source/tinsel.cpp`'s `get_memory`, this is never
    /// truncated at an embedded NUL.
    pub fn memory(&self, handle: Handle) -> Result<Vec<u8>> {
        if handle.is_null() {
            return Ok(Vec::new());
        }
        self.load_archive(handle.archive())?;
        let state = self.states[handle.archive() as usize].borrow();
        let offset = handle.offset() as usize;
        if offset >= state.data.len() {
            diagnostics::log(1, || format!("handle {:#010x} offset past end of archive", handle.raw()));
            return Ok(Vec::new());
        }
        Ok(state.data[offset..].to_vec())
    }

    fn chunks_of(&self, index: u32) -> Result<Vec<Chunk>> {
        self.load_archive(index)?;
        Ok(self.states[index as usize].borrow().chunks.clone())
    }

    fn find_chunk(&self, index: u32, chunk_type: ChunkType) -> Result<Option<(Chunk, Vec<u8>)>> {
        self.load_archive(index)?;
        let state = self.states[index as usize].borrow();
        let found = state
            .chunks
            .iter()
            .find(|c| std::mem::discriminant(&c.chunk_type) == std::mem::discriminant(&chunk_type));
        Ok(found.map(|c| (*c, state.data[c.payload_range()].to_vec())))
    }

    /// `CHUNK_GAME`'s payload, parsed (spec §4.6). Always lives in archive 0.
    pub fn game_variables(&self) -> Result<GameVariables> {
        let (_, payload) = self
            .find_chunk(0, ChunkType::Game)
            .context("loading archive 0 for game variables")?
            .ok_or_else(|| anyhow!("archive 0 has no CHUNK_GAME"))?;
        GameVariables::parse(&payload).map_err(|e| anyhow!("parsing CHUNK_GAME: {e}"))
    }

    /// `CHUNK_OBJECTS`'s table, parsed (spec §4.7). `None` if `index` has no
    /// objects chunk at all, distinguishing "no objects" from "zero icons".
    pub fn objects(&self, index: u32) -> Result<Option<Vec<Object>>> {
        let chunk = self.find_chunk(index, ChunkType::Objects)?;
        let Some((_, payload)) = chunk else { return Ok(None) };
        let game_vars = self.game_variables()?;
        let objects = Object::parse_all(&payload, game_vars.num_icons)
            .map_err(|e| anyhow!("parsing CHUNK_OBJECTS: {e}"))?;
        Ok(Some(objects))
    }

    fn sub_table<T>(
        &self,
        base: Handle,
        count: u32,
        record_size: usize,
        parse_one: impl Fn(&mut ByteReader, Handle) -> std::result::Result<T, crate::error::EndOfInput>,
    ) -> Result<Vec<T>> {
        if base.is_null() || count == 0 {
            return Ok(Vec::new());
        }
        let bytes = self.memory(base)?;
        let mut r = ByteReader::new(&bytes);
        let mut out = Vec::with_capacity(count as usize);
        for i in 0..count {
            let record_handle = Handle::new(base.raw() + i * record_size as u32);
            out.push(parse_one(&mut r, record_handle).map_err(|e| anyhow!("parsing record {i}: {e}"))?);
        }
        Ok(out)
    }

    /// The scene header plus its entrance/poly/tagged-actor sub-tables
    /// (spec §4.6). `None` if `index` has no `CHUNK_SCENE`.
    pub fn scene(&self, index: u32) -> Result<Option<(Scene, Vec<Entrance>, Vec<Poly>, Vec<Actor>)>> {
        let chunk = self.find_chunk(index, ChunkType::Scene)?;
        let Some((_, payload)) = chunk else { return Ok(None) };
        let mut r = ByteReader::new(&payload);
        let scene = Scene::parse(&mut r).map_err(|e| anyhow!("parsing CHUNK_SCENE: {e}"))?;

        let entrances = self.sub_table(scene.h_entrance, scene.num_entrance, Entrance::SIZE, Entrance::parse)?;
        let polys = self.sub_table(scene.h_poly, scene.num_poly, Poly::SIZE, Poly::parse)?;
        let actors = self.sub_table(scene.h_tagged_actor, scene.num_tagged_actor, Actor::SIZE, Actor::parse)?;

        Ok(Some((scene, entrances, polys, actors)))
    }

    fn process_table(&self, base: Handle, count: u32) -> Result<Vec<ProcessEntry>> {
        if base.is_null() || count == 0 {
            return Ok(Vec::new());
        }
        let bytes = self.memory(base)?;
        ProcessEntry::parse_all(&bytes, count).map_err(|e| anyhow!("parsing process table: {e}"))
    }

    /// Every disassemblable script handle in archive `index`, named per
    /// spec §4.9 (`original_source/tinsel.cpp`'s `load_processes`).
    pub fn scripts(&self, index: u32) -> Result<Vec<ScriptEntry>> {
        let mut out = Vec::new();

        if index == 0 {
            let master = self.find_chunk(0, ChunkType::MasterScript)?;
            let h_master_script = match master {
                Some((_, payload)) => {
                    Handle::new(ByteReader::new(&payload).read_u32().unwrap_or(0))
                }
                None => Handle::NULL,
            };

            let game_vars = self.game_variables()?;
            let processes_chunk = self.find_chunk(0, ChunkType::Processes)?;
            let global_processes = match processes_chunk {
                Some((_, payload)) => {
                    ProcessEntry::parse_all(&payload, game_vars.num_global_processes)
                        .map_err(|e| anyhow!("parsing CHUNK_PROCESSES: {e}"))?
                }
                None => Vec::new(),
            };

            out.extend(index::global_scripts(h_master_script, &global_processes));
        }

        if let Some(objects) = self.objects(index)? {
            out.extend(index::object_scripts(&objects));
        }

        if let Some((scene, entrances, polys, actors)) = self.scene(index)? {
            let scene_processes = self.process_table(scene.h_process, scene.num_process)?;
            let archive_name = &self.metas[index as usize].name;
            out.extend(index::scene_scripts(archive_name, &scene, &scene_processes, &entrances, &polys, &actors));
        }

        Ok(out)
    }

    /// Resolves `handle` as a `CHUNK_FILM` record (spec §4.8).
    pub fn film(&self, handle: Handle) -> Result<Film> {
        let bytes = self.memory(handle)?;
        let mut r = ByteReader::new(&bytes);
        Film::parse(&mut r, handle).map_err(|e| anyhow!("parsing CHUNK_FILM: {e}"))
    }

    /// Disassembles the Pcode script at `handle` (spec §4.4).
    pub fn pcode(&self, handle: Handle) -> Result<Vec<script::PcodeLine>> {
        let bytes = self.memory(handle)?;
        let mut r = ByteReader::new(&bytes);
        Ok(script::pcode::disassemble(&mut r))
    }

    /// Resolves a reel's `mobj` handle (spec §4.8): the `MultiInit` header,
    /// plus the frame list it names (if any).
    pub fn multi_init(&self, handle: Handle) -> Result<(crate::records::MultiInit, crate::records::Frames)> {
        use crate::records::MultiInit;

        let bytes = self.memory(handle)?;
        let mut r = ByteReader::new(&bytes);
        let init = MultiInit::parse(&mut r).map_err(|e| anyhow!("parsing MultiInit: {e}"))?;

        let frames = if init.h_mul_frame.is_null() {
            crate::records::Frames(Vec::new())
        } else {
            let frame_bytes = self.memory(init.h_mul_frame)?;
            let mut fr = ByteReader::new(&frame_bytes);
            crate::records::Frames::parse(&mut fr, self.metas.len() as u32)
                .map_err(|e| anyhow!("parsing Frames: {e}"))?
        };

        Ok((init, frames))
    }

    /// Disassembles a reel's AnimScript (spec §4.8). `sound` suppresses
    /// frame-handle resolution for audio-only reels (`MultiInit::mul_id ==
    /// -2`), matching `original_source/tinsel.cpp`'s reel-loading code.
    pub fn anim_script(&self, handle: Handle, sound: bool) -> Result<Vec<script::AnimLine>> {
        let bytes = self.memory(handle)?;
        let mut r = ByteReader::new(&bytes);
        Ok(script::anim::disassemble(&mut r, sound))
    }

    /// Resolves an `Image` handle and decodes its pixels to RGBA8 (spec
    /// §4.7). The backing archive for `h_img_bits` is loaded
    /// transparently, like any other handle.
    pub fn image(&self, handle: Handle) -> Result<(crate::records::Image, Vec<u8>)> {
        let bytes = self.memory(handle)?;
        let mut r = ByteReader::new(&bytes);
        let image = crate::records::Image::parse(&mut r, handle)
            .map_err(|e| anyhow!("parsing Image: {e}"))?;
        let bits = self.memory(image.h_img_bits)?;
        let pixels = crate::image::decode_rgba(&image, &bits).map_err(|e| anyhow!("decoding image bits: {e}"))?;
        Ok((image, pixels))
    }

    /// Resolves a sequence of frame handles into their `Image` headers plus
    /// decoded pixels, stopping at the same terminator `Frames::parse` uses.
    pub fn frames(&self, handle: Handle) -> Result<Vec<(crate::records::Image, Vec<u8>)>> {
        let bytes = self.memory(handle)?;
        let mut r = ByteReader::new(&bytes);
        let frames = crate::records::Frames::parse(&mut r, self.metas.len() as u32)
            .map_err(|e| anyhow!("parsing Frames: {e}"))?;
        frames.0.into_iter().map(|h| self.image(h)).collect()
    }
}
