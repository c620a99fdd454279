//! AnimScript disassembler (spec §4.3) — the per-frame control stream
//! driving a [`crate::records::film::ReelHeader`]'s animation. Distinct
//! instruction set and encoding from [`super::pcode`]: every opcode is a
//! full 4-byte word, and any word `>= 12` is not an opcode at all but a raw
//! frame handle to display next.

use crate::handle::Handle;
use crate::reader::ByteReader;

pub const OPCODE_NAMES: [&str; 12] = [
    "ANI_END", "ANI_JUMP", "ANI_HFLIP", "ANI_VFLIP", "ANI_HVFLIP", "ANI_ADJUSTX", "ANI_ADJUSTY",
    "ANI_ADJUSTXY", "ANI_NOSLEEP", "ANI_CALL", "ANI_HIDE", "ANI_STOP",
];

const ANI_END: u32 = 0;
const ANI_JUMP: u32 = 1;
const ANI_ADJUSTX: u32 = 5;
const ANI_ADJUSTY: u32 = 6;
const ANI_ADJUSTXY: u32 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimLine {
    /// A no-argument opcode (`ANI_END`, `ANI_HFLIP`, `ANI_VFLIP`,
    /// `ANI_HVFLIP`, `ANI_NOSLEEP`, `ANI_CALL`, `ANI_HIDE`, `ANI_STOP`).
    Op { ip: u32, opcode: u32 },
    /// `ANI_JUMP` with its signed word displacement (in words, not bytes).
    Jump { ip: u32, displacement: i32 },
    /// `ANI_ADJUSTX` / `ANI_ADJUSTY` with their single signed argument.
    Adjust { ip: u32, opcode: u32, value: i32 },
    /// `ANI_ADJUSTXY` with both signed arguments.
    AdjustXy { ip: u32, x: i32, y: i32 },
    /// A raw frame handle (word `>= 12`) to display next — suppressed for
    /// sound reels (spec §4.8: `MultiInit::mul_id == -2`).
    Frame { ip: u32, handle: Handle },
}

impl AnimLine {
    pub fn ip(&self) -> u32 {
        match self {
            AnimLine::Op { ip, .. }
            | AnimLine::Jump { ip, .. }
            | AnimLine::Adjust { ip, .. }
            | AnimLine::AdjustXy { ip, .. }
            | AnimLine::Frame { ip, .. } => *ip,
        }
    }
}

/// Disassembles an AnimScript starting at the reader's current position.
///
/// `sound` mirrors `original_source/tinsel.cpp`'s behaviour for reels whose
/// `MultiInit::mul_id` is `-2`: such reels are audio-only, so their raw
/// frame-handle words are not meaningful frame references and are recorded
/// as handle `0` rather than resolved via the opcode's `>= 12` meaning. The
/// disassembly otherwise proceeds identically.
pub fn disassemble(r: &mut ByteReader, sound: bool) -> Vec<AnimLine> {
    let mut out = Vec::new();
    loop {
        let ip = r.position() as u32;
        let word = match r.read_u32() {
            Ok(v) => v,
            Err(_) => break,
        };

        match word {
            ANI_END => {
                out.push(AnimLine::Op { ip, opcode: word });
                break;
            }
            2..=4 | 8..=11 => {
                out.push(AnimLine::Op { ip, opcode: word });
            }
            ANI_JUMP => {
                let displacement = r.read_i32().unwrap_or(0);
                out.push(AnimLine::Jump { ip, displacement });
                if displacement < 0 {
                    break;
                }
                if r.skip(displacement as i64 * 4).is_err() {
                    break;
                }
            }
            ANI_ADJUSTX | ANI_ADJUSTY => {
                let value = r.read_i32().unwrap_or(0);
                out.push(AnimLine::Adjust { ip, opcode: word, value });
            }
            ANI_ADJUSTXY => {
                let x = r.read_i32().unwrap_or(0);
                let y = r.read_i32().unwrap_or(0);
                out.push(AnimLine::AdjustXy { ip, x, y });
            }
            _ => {
                let handle = if sound { Handle::NULL } else { Handle::new(word) };
                out.push(AnimLine::Frame { ip, handle });
            }
        }
    }
    out
}
