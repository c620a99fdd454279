//! Throughput of the Pcode disassembler over a synthetic script of varying
//! length, representative of the scripts attached to scenes and actors.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tinsel_assets::reader::ByteReader;
use tinsel_assets::script::pcode::disassemble;

const OP_IMM: u8 = 2;
const OP_LIBCALL: u8 = 15;
const OP_PLUS: u8 = 27;
const OP_HALT: u8 = 1;

/// Builds `instruction_count` `OP_IMM`/`OP_PLUS` pairs followed by an
/// `OP_LIBCALL` every eighth pair, terminated by `OP_HALT`.
fn build_script(instruction_count: usize) -> Vec<u8> {
    let mut data = Vec::new();
    for i in 0..instruction_count {
        data.push(OP_IMM | 0x40);
        data.push((i % 256) as u8);
        if i % 8 == 7 {
            data.push(OP_LIBCALL | 0x40);
            data.push((i % 231) as u8);
        } else {
            data.push(OP_PLUS);
        }
    }
    data.push(OP_HALT);
    data
}

fn bench_pcode(c: &mut Criterion) {
    let mut group = c.benchmark_group("pcode_disassemble");

    for &count in &[64usize, 1_024, 16_384] {
        let script = build_script(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("{count}_instructions"), |b| {
            b.iter(|| {
                let mut r = ByteReader::new(black_box(&script));
                let lines = disassemble(&mut r);
                black_box(lines.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pcode);
criterion_main!(benches);
