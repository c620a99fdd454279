//! Bytecode disassembly (spec §4.3, §4.4) and the script index (spec §4.9).
//!
//! `anim` and `pcode` are independent virtual machines with no shared base:
//! the original engine never unified them, and neither does this crate.

pub mod anim;
pub mod index;
pub mod libcalls;
pub mod pcode;

pub use anim::AnimLine;
pub use index::ScriptEntry;
pub use pcode::PcodeLine;
