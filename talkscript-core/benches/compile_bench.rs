use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use talkscript_core::{VariableStore, compile};

fn make_script(sections: usize) -> String {
    let mut buf = String::with_capacity(sections * 120);
    buf.push_str("count=2\nmood=cheerful\n");

    for i in 0..sections {
        buf.push_str(&format!("[room_{i}]\n"));
        buf.push_str("The corridor stretches on.\n");
        buf.push_str("Dust hangs in the light.\n");
        buf.push_str(&format!("if [count<3] Press on [room_{}]\n", (i + 1) % sections));
        buf.push_str(&format!("if [mood==grim] [gloom_{i}] else [room_{}]\n", (i + 1) % sections));
        buf.push_str("Turn back [EXIT]\n");
    }
    buf
}

fn bench_compile(c: &mut Criterion) {
    let src = make_script(2_000);
    let mut group = c.benchmark_group("compile");
    group.sample_size(10);
    group.bench_function("two-pass 2k sections", |b| {
        b.iter(|| {
            let mut store = VariableStore::new();
            let _graph = compile(black_box(&src), &mut store);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);
