//! Shared fixture builders for the integration tests — an on-disk index plus
//! LZSS-literal-encoded archive files, the same shape [`crate::catalog`]'s
//! own inline tests build.

use std::fs;
use std::io::Write;
use std::path::Path;

/// Packs `bytes` as an all-literal, terminated LZSS stream.
pub fn lzss_encode_literals(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut cur = 0u8;
    let mut nbits = 0u32;
    let mut push_bit = |bit: bool, out: &mut Vec<u8>, cur: &mut u8, nbits: &mut u32| {
        *cur = (*cur << 1) | (bit as u8);
        *nbits += 1;
        if *nbits == 8 {
            out.push(*cur);
            *cur = 0;
            *nbits = 0;
        }
    };
    for &b in bytes {
        push_bit(true, &mut out, &mut cur, &mut nbits);
        for i in (0..8).rev() {
            push_bit((b >> i) & 1 != 0, &mut out, &mut cur, &mut nbits);
        }
    }
    for _ in 0..17 {
        push_bit(false, &mut out, &mut cur, &mut nbits);
    }
    if nbits > 0 {
        cur <<= 8 - nbits;
        out.push(cur);
    }
    out
}

/// Writes `root/data/index` with one 24-byte entry per `(name, size, flags)`.
pub fn write_index(root: &Path, entries: &[(&str, u32, u32)]) {
    fs::create_dir_all(root.join("data")).unwrap();
    let mut file = fs::File::create(root.join("data/index")).unwrap();
    for (name, size, flags) in entries {
        let mut name_bytes = [0u8; 12];
        let bytes = name.as_bytes();
        name_bytes[..bytes.len()].copy_from_slice(bytes);
        file.write_all(&name_bytes).unwrap();
        file.write_all(&size.to_le_bytes()).unwrap();
        file.write_all(&0u32.to_le_bytes()).unwrap();
        file.write_all(&flags.to_le_bytes()).unwrap();
    }
}

/// Writes `root/data/<name>` as an LZSS-literal-encoded archive.
pub fn write_archive(root: &Path, name: &str, bytes: &[u8]) {
    let encoded = lzss_encode_literals(bytes);
    fs::write(root.join("data").join(name), encoded).unwrap();
}

fn chunk_header(out: &mut Vec<u8>, chunk_type: u32, next: u32) {
    out.extend_from_slice(&chunk_type.to_le_bytes());
    out.extend_from_slice(&next.to_le_bytes());
}

/// Builds a single-chunk archive body: one chunk of `chunk_type` holding
/// `payload`, terminal (`next == 0`).
pub fn single_chunk(chunk_type: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    chunk_header(&mut out, chunk_type, 0);
    out.extend_from_slice(payload);
    out
}

/// Builds a two-chunk archive body, `chunk_type`s and payloads paired up,
/// linked in order with the last chunk terminal.
pub fn chunks(entries: &[(u32, &[u8])]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut offsets = Vec::with_capacity(entries.len());
    let mut running = 0u32;
    for (_, payload) in entries {
        offsets.push(running);
        running += 8 + payload.len() as u32;
    }
    for (i, (chunk_type, payload)) in entries.iter().enumerate() {
        let next = if i + 1 < entries.len() { offsets[i + 1] } else { 0 };
        chunk_header(&mut out, *chunk_type, next);
        out.extend_from_slice(payload);
    }
    out
}
