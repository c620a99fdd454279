//! Throughput of the LZSS decoder on archive-shaped input.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tinsel_assets::lzss::decompress;

/// Builds a literal-only, terminated bit stream encoding `bytes` — worst
/// case for the decoder since every input bit packs one control bit plus
/// eight literal bits, with no back-references to skip.
fn encode_literals(bytes: &[u8]) -> Vec<u8> {
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

fn sample_plaintext(len: usize) -> Vec<u8> {
    let seed = b"TINSELARCHIVEDATA";
    let mut plain = Vec::with_capacity(len);
    while plain.len() < len {
        plain.extend_from_slice(seed);
    }
    plain.truncate(len);
    plain
}

fn bench_lzss(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzss_decompress");

    for &size in &[1_024usize, 65_536, 1_048_576] {
        let literal_input = encode_literals(&sample_plaintext(size));
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("{size}_bytes"), |b| {
            let mut out = vec![0u8; size];
            b.iter(|| {
                let written = decompress(black_box(&literal_input), black_box(&mut out));
                black_box(written);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lzss);
criterion_main!(benches);
