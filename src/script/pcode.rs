//! Pcode disassembler (spec §4.4) — the virtual machine scripts attached to
//! scenes, actors, objects and processes. Forty-five opcodes packed one
//! byte each, the low six bits selecting the opcode and the high two bits
//! selecting the width of an optional trailing immediate.

use crate::reader::ByteReader;
use std::fmt;

pub const OPCODE_NAMES: [&str; 45] = [
    "OP_NOOP", "OP_HALT", "OP_IMM", "OP_ZERO", "OP_ONE", "OP_MINUSONE", "OP_STR", "OP_FILM",
    "OP_FONT", "OP_PAL", "OP_LOAD", "OP_GLOAD", "OP_STORE", "OP_GSTORE", "OP_CALL", "OP_LIBCALL",
    "OP_RET", "OP_ALLOC", "OP_JUMP", "OP_JMPFALSE", "OP_JMPTRUE", "OP_EQUAL", "OP_LESS",
    "OP_LEQUAL", "OP_NEQUAL", "OP_GEQUAL", "OP_GREAT", "OP_PLUS", "OP_MINUS", "OP_LOR",
    "OP_MULT", "OP_DIV", "OP_MOD", "OP_AND", "OP_OR", "OP_EOR", "OP_LAND", "OP_NOT", "OP_COMP",
    "OP_NEG", "OP_DUP", "OP_ESCON", "OP_ESCOFF", "OP_CIMM", "OP_CDFILM",
];

const OP_HALT: u8 = 1;
const OP_LIBCALL: u8 = 15;

/// `OP_CIMM` has a name in [`OPCODE_NAMES`] but no case in the decompiler's
/// disassembly switch — it falls through to the unrecognized-opcode arm
/// there, so it does here too rather than fabricating a mnemonic line the
/// original never emits.
const OP_CIMM: u8 = 43;

const ARGUMENTED: [u8; 16] = [2, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 17, 18, 19, 20, 44];

fn has_argument(opcode: u8) -> bool {
    ARGUMENTED.contains(&opcode)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PcodeLine {
    /// A recognized opcode with no trailing immediate.
    Plain { ip: u32, opcode: u8 },
    /// A recognized opcode followed by a width-encoded immediate operand.
    /// `argument_text` is pre-rendered because `OP_LIBCALL` resolves its
    /// argument through [`super::libcalls::name`] instead of printing it
    /// numerically.
    WithArgument { ip: u32, opcode: u8, argument: u32, argument_text: String },
    /// A byte whose low six bits matched no known opcode (spec §4.4: "an
    /// unrecognized opcode byte is rendered literally ... and disassembly
    /// continues").
    Unknown { ip: u32 },
}

impl PcodeLine {
    pub fn ip(&self) -> u32 {
        match self {
            PcodeLine::Plain { ip, .. } => *ip,
            PcodeLine::WithArgument { ip, .. } => *ip,
            PcodeLine::Unknown { ip } => *ip,
        }
    }

    pub fn opcode_name(&self) -> &str {
        match self {
            PcodeLine::Plain { opcode, .. } | PcodeLine::WithArgument { opcode, .. } => {
                OPCODE_NAMES[*opcode as usize]
            }
            PcodeLine::Unknown { .. } => "???",
        }
    }
}

impl fmt::Display for PcodeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PcodeLine::Plain { ip, opcode } => {
                write!(f, "{:04x}: {}", ip, OPCODE_NAMES[*opcode as usize])
            }
            PcodeLine::WithArgument { ip, opcode, argument_text, .. } => {
                write!(f, "{:04x}: {} {}", ip, OPCODE_NAMES[*opcode as usize], argument_text)
            }
            PcodeLine::Unknown { ip } => write!(f, "{:04x}: ???", ip),
        }
    }
}

fn fetch(opcode: u8, r: &mut ByteReader) -> u32 {
    if opcode & 0x40 != 0 {
        r.read_u8().unwrap_or(0) as u32
    } else if opcode & 0x80 != 0 {
        r.read_u16().unwrap_or(0) as u32
    } else {
        r.read_u32().unwrap_or(0)
    }
}

fn render_argument(opcode: u8, argument: u32) -> String {
    if opcode == OP_LIBCALL {
        super::libcalls::name(argument)
    } else {
        format!("{argument:x}; = {argument}")
    }
}

/// Disassembles a Pcode script starting at the reader's current position,
/// stopping at `OP_HALT` or when the input runs out.
pub fn disassemble(r: &mut ByteReader) -> Vec<PcodeLine> {
    let mut out = Vec::new();
    loop {
        let ip = r.position() as u32;
        let raw = match r.read_u8() {
            Ok(v) => v,
            Err(_) => break,
        };
        let opcode = raw & 0x3F;

        if (opcode as usize) >= OPCODE_NAMES.len() || opcode == OP_CIMM {
            out.push(PcodeLine::Unknown { ip });
            continue;
        }

        if has_argument(opcode) {
            let argument = fetch(raw, r);
            let argument_text = render_argument(opcode, argument);
            out.push(PcodeLine::WithArgument { ip, opcode, argument, argument_text });
        } else {
            out.push(PcodeLine::Plain { ip, opcode });
            if opcode == OP_HALT {
                break;
            }
        }
    }
    out
}
